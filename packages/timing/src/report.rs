use std::fmt;
use std::num::NonZeroUsize;
use std::time::Duration;

/// What a timing wrapper observed about one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// A single call and the value it returned.
    Call {
        elapsed: Duration,
        name: &'static str,
        args: String,
        result: String,
    },
    /// `runs` back-to-back calls; `elapsed` is their total.
    Runs {
        elapsed: Duration,
        name: &'static str,
        args: String,
        runs: NonZeroUsize,
    },
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Call {
                elapsed,
                name,
                args,
                result,
            } => write!(
                f,
                "took [{:.8}s] {}({}) -> {}",
                elapsed.as_secs_f64(),
                name,
                args,
                result
            ),
            Report::Runs {
                elapsed,
                name,
                args,
                runs,
            } => write!(
                f,
                "took [{:.8}s] to run {}({}) {} times",
                elapsed.as_secs_f64(),
                name,
                args,
                runs
            ),
        }
    }
}

/// Default sink: one line on stdout per report.
pub fn print_report(report: &Report) {
    println!("{report}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_line() {
        let report = Report::Call {
            elapsed: Duration::from_micros(2_600),
            name: "arithmetic_series",
            args: "0, 1000000, 3".to_string(),
            result: "166666833333".to_string(),
        };
        assert_eq!(
            report.to_string(),
            "took [0.00260000s] arithmetic_series(0, 1000000, 3) -> 166666833333"
        );
    }

    #[test]
    fn test_runs_line() {
        let report = Report::Runs {
            elapsed: Duration::from_millis(1_500),
            name: "sum_multiples_naive",
            args: "1000".to_string(),
            runs: NonZeroUsize::new(5).unwrap(),
        };
        assert_eq!(
            report.to_string(),
            "took [1.50000000s] to run sum_multiples_naive(1000) 5 times"
        );
    }

    #[test]
    fn test_sub_microsecond_call_line() {
        let report = Report::Call {
            elapsed: Duration::from_nanos(10),
            name: "f",
            args: String::new(),
            result: "()".to_string(),
        };
        assert_eq!(report.to_string(), "took [0.00000001s] f() -> ()");
    }
}
