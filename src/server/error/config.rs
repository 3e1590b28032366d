use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but holds a value that cannot be used,
    /// such as a non-numeric `PORT` or an unparseable `CORS_ORIGIN`.
    #[error("Invalid value for environment variable: {0}")]
    InvalidEnvVar(String),
}
