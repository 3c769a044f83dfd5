use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tokio::signal;

mod cli;
mod logging;
mod pipeline;
mod profile;

#[cfg(test)]
mod tests;

use self::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init(cli.log_format);

    let config = profile::load_config(cli.config.as_deref())?;
    let job = cli.command.into_job(config)?;

    let started = Instant::now();
    let stats = tokio::select! {
        result = pipeline::run(&job) => result.with_context(|| {
            format!("Failed to build {} cards into {}", job.kind, job.output.display())
        })?,
        _ = signal::ctrl_c() => {
            tracing::warn!("Interrupted, rows written so far are kept in {}", job.output.display());
            anyhow::bail!("Interrupted");
        }
    };

    tracing::info!(
        rows = stats.rows,
        incomplete = stats.incomplete,
        skipped = stats.skipped,
        "Wrote {} {} cards to {} in {:.1}s",
        stats.rows,
        job.kind,
        job.output.display(),
        started.elapsed().as_secs_f64()
    );

    Ok(())
}
