use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use threshold_recovery::case::{self, CaseRecord};
use threshold_recovery::fixtures;

/// Recover the secret of a threshold secret sharing from its shares.
#[derive(Debug, Parser)]
#[command(name = "threshold_recovery", version)]
struct Opt {
    /// JSON case records to solve
    files: Vec<PathBuf>,

    /// Solve the bundled demonstration cases. This is the default when no files are given.
    #[arg(long)]
    demo: bool,

    /// Log filter used when `RUST_LOG` is not set, e.g. `debug` or `threshold_recovery=trace`
    #[arg(long, env = "RECOVERY_LOG", default_value = "info")]
    log_level: String,
}

fn report(name: &str, record: &CaseRecord) -> anyhow::Result<()> {
    let solution = case::solve(record).with_context(|| format!("could not solve {}", name))?;
    info!(case = name, shares = solution.shares.len(), "done");
    println!("{}: {}", name, solution.secret);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&opt.log_level))
        .with_context(|| format!("invalid log filter {:?}", opt.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if opt.demo || opt.files.is_empty() {
        for (name, json) in fixtures::ALL.iter() {
            let record = CaseRecord::from_json(json).with_context(|| format!("bundled case {}", name))?;
            report(name, &record)?;
        }
    }

    for file in &opt.files {
        let record = CaseRecord::from_file(file)
            .with_context(|| format!("could not load {}", file.display()))?;
        report(&file.display().to_string(), &record)?;
    }

    Ok(())
}
