use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("problem {0} is not implemented")]
    UnknownProblem(u32),
    #[error("strategies disagree below {bound}: naive {naive}, steps {steps}, direct {direct}")]
    StrategyMismatch {
        bound: u64,
        naive: u64,
        steps: u64,
        direct: u64,
    },
}
