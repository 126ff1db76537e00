use std::{fmt::Display, str::FromStr};

use thiserror::Error;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum EnvError {
    /// An environment variable required by the application is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The variable is set but its value could not be parsed.
    #[error("Invalid value {value:?} for environment variable {name}: {reason}")]
    InvalidEnvVar {
        name: String,
        value: String,
        reason: String,
    },
}

/// Reads an environment variable, returning a structured error if it's missing.
///
/// This is a thin wrapper around `std::env::var` that provides a more
/// ergonomic and specific error type for missing variables.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn get_env_var(name: &str) -> Result<String, EnvError> {
    std::env::var(name).map_err(|_| EnvError::MissingEnvVar(name.to_string()))
}

/// Reads an environment variable and parses it into `T`.
///
/// Surrounding whitespace is trimmed before parsing. A missing variable is
/// reported as [`EnvError::MissingEnvVar`] so callers can treat it as "not
/// overridden".
pub fn get_env_parsed<T>(name: &str) -> Result<T, EnvError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = get_env_var(name)?;
    parse_env_value(name, &raw)
}

/// Parses a raw value as if it had been read from the variable `name`.
pub fn parse_env_value<T>(name: &str, raw: &str) -> Result<T, EnvError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().map_err(|e: T::Err| EnvError::InvalidEnvVar {
        name: name.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
