use project_euler::format_answer;
use project_euler::solutions::pe1;

fn main() {
    println!("{}", format_answer(1, &pe1::solve(false)));
}
