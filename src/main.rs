//! Benchmark runner: naive vs transpose square matrix multiplication.

use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use matbench::config::Config;
use matbench::harness;

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().wrap_err("invalid benchmark configuration")?;
    tracing::info!(n = config.matrix_size, "starting matrix benchmark");

    let mut rng = rand::thread_rng();
    harness::run(&config, &mut rng, &mut std::io::stdout().lock())
        .wrap_err("failed to write benchmark report")?;

    Ok(())
}
