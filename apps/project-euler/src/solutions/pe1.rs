use crate::Error;
use math::{
    Strategy, arithmetic_series, inclusion_exclusion, sum_multiples_direct, sum_multiples_naive,
    sum_multiples_steps,
};
use std::num::NonZeroUsize;
use timing::{timed, timed_runs};

pub const LIMIT: u64 = 1000;

/// Bound used when timing the strategies against each other.
pub const DEMO_BOUND: u64 = 1_000_000;

/// PE1: Multiples of 3 or 5
/// Find the sum of all the multiples of 3 or 5 below 1000.
pub fn solve(verbose: bool) -> String {
    let sum = if verbose {
        timed(Strategy::Direct.name(), |(bound,): (u64,)| {
            sum_multiples_direct(bound)
        })((LIMIT,))
    } else {
        sum_multiples_direct(LIMIT)
    };
    sum.to_string()
}

/// Time one call of each strategy and check they agree.
///
/// The closed form is rebuilt from a timed `arithmetic_series`, so its three
/// series terms get their own lines ahead of the direct total.
pub fn compare(bound: u64) -> Result<u64, Error> {
    let naive = timed(Strategy::Naive.name(), |(bound,): (u64,)| {
        sum_multiples_naive(bound)
    });
    let steps = timed(Strategy::Steps.name(), |(bound,): (u64,)| {
        sum_multiples_steps(bound)
    });
    let series = timed(
        "arithmetic_series",
        |(start, stop, step): (u64, u64, u64)| arithmetic_series(start, stop, step),
    );
    let direct = timed(Strategy::Direct.name(), |(bound,): (u64,)| {
        inclusion_exclusion(|step| series((0, bound, step)))
    });

    let naive = naive((bound,));
    let steps = steps((bound,));
    let direct = direct((bound,));
    check(bound, naive, steps, direct)
}

/// Time `runs` back-to-back calls of each strategy and check they agree.
pub fn compare_runs(bound: u64, runs: NonZeroUsize) -> Result<u64, Error> {
    let repeated = timed_runs(runs);
    let [naive, steps, direct] = Strategy::ALL.map(|strategy| {
        repeated.wrap(strategy.name(), move |(bound,): (u64,)| {
            strategy.sum(bound)
        })((bound,))
    });
    check(bound, naive, steps, direct)
}

fn check(bound: u64, naive: u64, steps: u64, direct: u64) -> Result<u64, Error> {
    if naive == steps && steps == direct {
        Ok(direct)
    } else {
        Err(Error::StrategyMismatch {
            bound,
            naive,
            steps,
            direct,
        })
    }
}
