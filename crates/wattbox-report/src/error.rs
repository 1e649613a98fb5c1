use thiserror::Error;

/// Errors surfaced while turning a price history into a PDF report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("price history is empty; nothing to chart")]
    EmptyHistory,

    #[error("chart rendering failed: {0}")]
    Chart(String),

    #[error("pdf assembly failed: {0}")]
    Pdf(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
