use std::env;

/// Read an environment variable, falling back to the given default when unset.
///
/// Every configuration value in this system is independently defaulted, so
/// missing variables are never an error.
pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
