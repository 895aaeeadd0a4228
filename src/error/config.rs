use thiserror::Error;

/// Errors produced while loading application configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable was not set.
    #[error("Missing environment variable '{0}'")]
    MissingEnvVar(String),
}
