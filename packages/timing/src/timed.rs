//! Wrappers that time a function and report on every call.
//!
//! The report is emitted only after the wrapped function returns. A panic in
//! the wrapped function unwinds straight through the wrapper and nothing is
//! reported for that call.

use crate::args::Args;
use crate::report::{Report, print_report};
use std::fmt::Debug;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};
use tracing::debug;

/// Wrap `f` so each call prints how long it took, its arguments and its result.
///
/// The returned function behaves exactly like `f`; the printed line is the
/// only addition.
///
/// ```
/// use timing::timed;
///
/// let add = timed("add", |(a, b): (u32, u32)| a + b);
/// assert_eq!(add((2, 3)), 5); // prints "took [0.00000010s] add(2, 3) -> 5"
/// ```
pub fn timed<A, R, F>(name: &'static str, f: F) -> impl Fn(A) -> R
where
    A: Args,
    R: Debug,
    F: Fn(A) -> R,
{
    timed_with(name, f, print_report)
}

/// Like [`timed`], but hands each [`Report`] to `emit` instead of printing it.
pub fn timed_with<A, R, F, E>(name: &'static str, f: F, emit: E) -> impl Fn(A) -> R
where
    A: Args,
    R: Debug,
    F: Fn(A) -> R,
    E: Fn(&Report),
{
    move |args: A| {
        let rendered = args.render();
        let start = Instant::now();
        let result = f(args);
        let elapsed = start.elapsed();

        debug!(function = name, ?elapsed, "timed call");
        emit(&Report::Call {
            elapsed,
            name,
            args: rendered,
            result: format!("{result:?}"),
        });
        result
    }
}

/// Configuration for timing a function over several back-to-back runs.
///
/// Built by [`timed_runs`]; turn it into a wrapper with [`TimedRuns::wrap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedRuns {
    runs: NonZeroUsize,
}

/// Time `runs` consecutive calls and report the total once.
///
/// ```
/// use std::num::NonZeroUsize;
/// use timing::timed_runs;
///
/// let runs = NonZeroUsize::new(3).unwrap();
/// let square = timed_runs(runs).wrap("square", |(x,): (u64,)| x * x);
/// // prints "took [...s] to run square(12) 3 times"
/// assert_eq!(square((12,)), 144);
/// ```
pub fn timed_runs(runs: NonZeroUsize) -> TimedRuns {
    TimedRuns { runs }
}

impl TimedRuns {
    /// Wrap `f`; the wrapper returns the result of the last run.
    pub fn wrap<A, R, F>(self, name: &'static str, f: F) -> impl Fn(A) -> R
    where
        A: Args + Clone,
        F: Fn(A) -> R,
    {
        self.wrap_with(name, f, print_report)
    }

    /// Like [`TimedRuns::wrap`], but hands the [`Report`] to `emit`.
    pub fn wrap_with<A, R, F, E>(self, name: &'static str, f: F, emit: E) -> impl Fn(A) -> R
    where
        A: Args + Clone,
        F: Fn(A) -> R,
        E: Fn(&Report),
    {
        let runs = self.runs;
        move |args: A| {
            let rendered = args.render();
            let mut elapsed = Duration::ZERO;
            let mut result = measure(&f, args.clone(), &mut elapsed);
            for _ in 1..runs.get() {
                result = measure(&f, args.clone(), &mut elapsed);
            }

            debug!(function = name, runs = runs.get(), ?elapsed, "timed runs");
            emit(&Report::Runs {
                elapsed,
                name,
                args: rendered,
                runs,
            });
            result
        }
    }
}

/// Call `f` once, adding only the call itself to `total`.
fn measure<A, R, F>(f: &F, args: A, total: &mut Duration) -> R
where
    F: Fn(A) -> R,
{
    let start = Instant::now();
    let result = f(args);
    *total += start.elapsed();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::panic::{AssertUnwindSafe, catch_unwind};

    fn runs(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_timed_returns_result_unchanged() {
        let add = timed("add", |(a, b): (i64, i64)| a + b);
        assert_eq!(add((2, 3)), 5);
        assert_eq!(add((-7, 3)), -4);
    }

    #[test]
    fn test_timed_reports_each_call() {
        let reports = RefCell::new(Vec::new());
        let double = timed_with(
            "double",
            |(x,): (u64,)| x * 2,
            |report: &Report| reports.borrow_mut().push(report.clone()),
        );

        assert_eq!(double((21,)), 42);
        assert_eq!(double((5,)), 10);

        let reports = reports.borrow();
        assert_eq!(reports.len(), 2);
        match &reports[0] {
            Report::Call {
                name, args, result, ..
            } => {
                assert_eq!(*name, "double");
                assert_eq!(args, "21");
                assert_eq!(result, "42");
            }
            other => panic!("unexpected report {other:?}"),
        }
        assert!(reports[1].to_string().ends_with("] double(5) -> 10"));
    }

    #[test]
    fn test_timed_calls_once() {
        let calls = Cell::new(0);
        let counted = timed_with(
            "counted",
            |(): ()| calls.set(calls.get() + 1),
            |_: &Report| {},
        );
        counted(());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_timed_reports_err_results() {
        let reports = RefCell::new(Vec::new());
        let parse = timed_with(
            "parse",
            |(s,): (&str,)| s.parse::<u32>().map_err(|_| "bad input"),
            |report: &Report| reports.borrow_mut().push(report.to_string()),
        );

        assert_eq!(parse(("x",)), Err("bad input"));
        assert!(reports.borrow()[0].ends_with(r#"parse("x") -> Err("bad input")"#));
    }

    #[test]
    fn test_timed_panic_propagates_without_report() {
        let reports = RefCell::new(Vec::new());
        let boom = timed_with(
            "boom",
            |(): ()| -> u32 { panic!("boom") },
            |report: &Report| reports.borrow_mut().push(report.clone()),
        );

        let outcome = catch_unwind(AssertUnwindSafe(|| boom(())));
        assert!(outcome.is_err());
        assert!(reports.borrow().is_empty());
    }

    #[test]
    fn test_timed_runs_calls_n_times_and_returns_last() {
        let calls = Cell::new(0usize);
        let reports = RefCell::new(Vec::new());
        let counted = timed_runs(runs(5)).wrap_with(
            "counted",
            |(step,): (usize,)| {
                calls.set(calls.get() + step);
                calls.get()
            },
            |report: &Report| reports.borrow_mut().push(report.clone()),
        );

        assert_eq!(counted((1,)), 5);
        assert_eq!(calls.get(), 5);

        let reports = reports.borrow();
        assert_eq!(reports.len(), 1);
        match &reports[0] {
            Report::Runs {
                name, args, runs, ..
            } => {
                assert_eq!(*name, "counted");
                assert_eq!(args, "1");
                assert_eq!(runs.get(), 5);
            }
            other => panic!("unexpected report {other:?}"),
        }
    }

    #[test]
    fn test_timed_runs_single_run() {
        let calls = Cell::new(0);
        let once = timed_runs(runs(1)).wrap_with(
            "once",
            |(): ()| calls.set(calls.get() + 1),
            |_: &Report| {},
        );
        once(());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_timed_runs_result_matches_unwrapped() {
        let wrapped = timed_runs(runs(3)).wrap("square", |(x,): (u64,)| x * x);
        assert_eq!(wrapped((12,)), 144);
    }

    #[test]
    fn test_elapsed_accumulates_across_runs() {
        let reports = RefCell::new(Vec::new());
        let sleepy = timed_runs(runs(3)).wrap_with(
            "sleepy",
            |(): ()| std::thread::sleep(Duration::from_millis(2)),
            |report: &Report| reports.borrow_mut().push(report.clone()),
        );
        sleepy(());
        match &reports.borrow()[0] {
            Report::Runs { elapsed, .. } => assert!(*elapsed >= Duration::from_millis(6)),
            other => panic!("unexpected report {other:?}"),
        }
    }
}
