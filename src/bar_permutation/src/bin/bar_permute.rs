use anyhow::{Context, Result};
use bar_permutation::{
    BarPermuter,
    cli::{
        args::Cli,
        io::{read_series_from, write_surrogates_to},
    },
    config::{PermuterConfig, load_config_path},
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stderr only, stdout carries the JSON result
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bar_permutation=info")),
        )
        .init();

    let cli = Cli::parse();

    // 1) config file, then env, then flags
    let mut config = match &cli.config {
        Some(path) => load_config_path(path)?,
        None => PermuterConfig::default(),
    }
    .with_env_overrides()?;
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(count) = cli.count {
        config.count = count;
    }

    // 2) bars
    let series = read_series_from(&cli.input)?;
    info!(bars = series.len(), count = config.count.get(), seed = ?config.seed, "permuting");

    // 3) surrogates from one stream
    let mut permuter = BarPermuter::new(config.rng());
    let surrogates = permuter
        .surrogates(&series)
        .take(config.count.get())
        .collect::<Result<Vec<_>, _>>()
        .context("permutation failed")?;

    write_surrogates_to(cli.output.as_deref(), &surrogates)
}
