//! Binary entrypoint for the fundamentals showcase.
use anyhow::Context;
use fundamentals_core::{run_showcase, FundamentalsConfig, FUNDAMENTALS_VERSION};

fn main() -> anyhow::Result<()> {
    // Log level can be overridden with FUNDAMENTALS_LOG
    let config = FundamentalsConfig::from_env();
    let (level, rejected) = match config.level() {
        Ok(level) => (level, None),
        Err(err) => (FundamentalsConfig::default().level()?, Some(err)),
    };

    // stdout carries the showcase itself; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    if let Some(err) = rejected {
        tracing::warn!(%err, "invalid log level, falling back to default");
    }
    tracing::info!(version = FUNDAMENTALS_VERSION, "starting showcase");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = run_showcase(&mut out).context("failed to write showcase output")?;

    tracing::info!(
        sums = outcome.sums.len(),
        variables = outcome.variables.len(),
        "showcase complete"
    );
    Ok(())
}
