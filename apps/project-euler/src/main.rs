use anyhow::{Context, Result};
use clap::Parser;
use project_euler::solutions::pe1;
use project_euler::{PROBLEMS, format_answer, run_problem};
use std::num::NonZeroUsize;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "project-euler")]
#[command(about = "Sum the multiples of 3 or 5 three ways and time each one")]
struct Cli {
    /// Run a specific problem by number
    #[arg(short, long, conflicts_with = "all")]
    problem: Option<u32>,

    /// Run all available problems
    #[arg(short, long)]
    all: bool,

    /// Exclusive upper bound for the timing run
    #[arg(short, long, default_value_t = pe1::DEMO_BOUND)]
    bound: u64,

    /// Also time each strategy over this many back-to-back calls
    #[arg(short, long)]
    runs: Option<NonZeroUsize>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout is reserved for the timing lines
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.all {
        // Run all problems with verbose=false for cleaner output
        for &id in PROBLEMS {
            let answer = run_problem(id, false)?;
            println!("{}", format_answer(id, &answer));
        }
    } else if let Some(id) = cli.problem {
        let answer = run_problem(id, true)
            .with_context(|| format!("available problems: {:?}", PROBLEMS))?;
        println!("{}", format_answer(id, &answer));
    } else {
        info!(bound = cli.bound, "timing each strategy once");
        let sum = pe1::compare(cli.bound).context("single-call timing run failed")?;

        if let Some(runs) = cli.runs {
            info!(bound = cli.bound, runs = runs.get(), "timing repeated calls");
            pe1::compare_runs(cli.bound, runs).context("repeated-call timing run failed")?;
        }
        info!(sum, "all strategies agree");
    }

    Ok(())
}
