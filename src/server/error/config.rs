use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable is set but its value cannot be used.
    ///
    /// Every variable has a default, so this is only raised when a value is present
    /// and malformed, e.g. a non-numeric `PORT`.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the environment variable
        name: String,
        /// The value that was rejected
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The global tracing subscriber could not be installed.
    #[error("Failed to initialize logger: {0}")]
    Logger(String),
}
