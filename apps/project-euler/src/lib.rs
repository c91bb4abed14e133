pub mod error;
pub mod solutions;

pub use error::Error;

/// Available problem IDs
pub const PROBLEMS: &[u32] = &[1];

/// Run a specific problem and return the answer
/// If verbose is true, the solution may print timing information
pub fn run_problem(id: u32, verbose: bool) -> Result<String, Error> {
    match id {
        1 => Ok(solutions::pe1::solve(verbose)),
        _ => Err(Error::UnknownProblem(id)),
    }
}

/// Line printed for a solved problem
pub fn format_answer(id: u32, answer: &str) -> String {
    format!("The answer to Problem {} is: {}", id, answer)
}
