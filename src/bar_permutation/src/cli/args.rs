use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Write permuted surrogates of a bar series")]
pub struct Cli {
    /// JSON array of bars to permute, or `-` for stdin
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub input: String,

    /// Optional TOML config (seed, count)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for the random stream; overrides the config and BAR_PERMUTER_SEED
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of surrogates; overrides the config
    #[arg(long)]
    pub count: Option<std::num::NonZeroUsize>,

    /// Where to write the result (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
