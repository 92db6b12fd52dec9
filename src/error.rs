use thiserror::Error;

/// Status label used when the server gives no usable reason.
pub const GENERIC_FAILURE: &str = "upload failed";

/// Why a single upload ended in the error state. The `Display` text is what
/// the item's status label shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("response parse failed")]
    ResponseParse,
    #[error("{0}")]
    ServerReported(String),
    #[error("network error")]
    Network,
    #[error("request timed out")]
    Timeout,
    #[error("failed to read file: {0}")]
    ReadFile(String),
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl UploadError {
    /// Server failure carrying `detail`, falling back to the generic label.
    pub fn server(detail: Option<String>) -> Self {
        match detail {
            Some(detail) if !detail.is_empty() => Self::ServerReported(detail),
            _ => Self::ServerReported(GENERIC_FAILURE.to_string()),
        }
    }
}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UploadError::Timeout
        } else {
            UploadError::Network
        }
    }
}

impl From<std::io::Error> for UploadError {
    fn from(err: std::io::Error) -> Self {
        UploadError::ReadFile(err.to_string())
    }
}

/// Start-up failures that end the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("window error: {0}")]
    Window(String),
    #[error("{0} of {1} uploads failed")]
    UploadsFailed(usize, usize),
}
