use std::str::FromStr;

use crate::server::error::config::ConfigError;

/// Reads a required environment variable
///
/// # Arguments
/// - `name` - Name of the environment variable
///
/// # Returns
/// - `Ok(String)` - The variable's value
/// - `Err(ConfigError::MissingEnvVar)` - The variable is unset or not valid unicode
pub fn required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an optional environment variable, falling back to `default` when unset
///
/// # Arguments
/// - `name` - Name of the environment variable
/// - `default` - Value used when the variable is not set
///
/// # Returns
/// - `Ok(T)` - Parsed value or the default
/// - `Err(ConfigError::InvalidEnvVar)` - The variable is set but fails to parse as `T`
pub fn env_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => parse_value(name, value),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(name: &str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}
