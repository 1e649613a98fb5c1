use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] wattbox_core::ValidationError),

    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error(transparent)]
    Fetch(#[from] wattbox_core::FetchError),

    #[error(transparent)]
    Report(#[from] wattbox_report::ReportError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::MissingEnv(_) => 2,
            Self::Fetch(_) => 3,
            Self::Report(_) | Self::Serialization(_) => 4,
        }
    }
}
