pub mod multiples;
pub mod series;

pub use multiples::{
    MAX_BOUND, Strategy, inclusion_exclusion, sum_multiples_direct, sum_multiples_naive,
    sum_multiples_steps,
};
pub use series::arithmetic_series;
