use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaemonError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl From<clap::Error> for DaemonError {
    fn from(err: clap::Error) -> Self {
        DaemonError::ConfigError {
            message: err.to_string().trim().to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DaemonError>;
