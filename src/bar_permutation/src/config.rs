//! Permuter configuration: parsing, environment overrides, RNG construction.
//!
//! A config file is TOML:
//!
//! ```toml
//! seed = 20240301   # optional; absent means a fresh seed per run
//! count = 4         # surrogates to produce, default 1
//! ```
//!
//! `BAR_PERMUTER_SEED`, when set, replaces `seed`.

use std::num::NonZeroUsize;

use anyhow::Context;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use shared_utils::env::{EnvError, get_env_parsed};

/// Environment variable overriding [`PermuterConfig::seed`].
pub const SEED_ENV_VAR: &str = "BAR_PERMUTER_SEED";

/// Settings for producing surrogates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PermuterConfig {
    /// Seed for the ChaCha8 stream. `None` seeds from the thread RNG.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Number of surrogates drawn from one random stream.
    #[serde(default = "default_count")]
    pub count: NonZeroUsize,
}

fn default_count() -> NonZeroUsize {
    NonZeroUsize::MIN
}

impl Default for PermuterConfig {
    fn default() -> Self {
        Self {
            seed: None,
            count: default_count(),
        }
    }
}

impl PermuterConfig {
    /// Applies [`SEED_ENV_VAR`] if it is set.
    ///
    /// Errors when the variable is set but is not a `u64`.
    pub fn with_env_overrides(self) -> anyhow::Result<Self> {
        self.with_seed_from(get_env_parsed(SEED_ENV_VAR))
    }

    fn with_seed_from(mut self, lookup: Result<u64, EnvError>) -> anyhow::Result<Self> {
        match lookup {
            Ok(seed) => {
                tracing::debug!(seed, "seed overridden from environment");
                self.seed = Some(seed);
                Ok(self)
            }
            Err(EnvError::MissingEnvVar(_)) => Ok(self),
            Err(e) => Err(e).context("invalid seed override"),
        }
    }

    /// The random stream for this config: reproducible when seeded.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }
}

/// Parses a config from a TOML string.
pub fn load_config_str(toml_str: &str) -> anyhow::Result<PermuterConfig> {
    toml::from_str(toml_str).context("failed to parse permuter config TOML")
}

/// Reads and parses a config file.
pub fn load_config_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<PermuterConfig> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("read config file {}", path.as_ref().display()))?;
    load_config_str(&text)
}
