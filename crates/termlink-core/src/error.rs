/// Failure conditions surfaced by every termlink crate
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    /// Missing credentials, bad account descriptor, unusable session
    #[error("Provider misconfigured: {0}")]
    ProviderMisconfigured(String),

    /// Rejected before any request was sent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Transport failure, timeout or non-success HTTP status
    #[error("Repository unavailable: {0}")]
    RepositoryUnavailable(String),

    /// Body could not be read as the expected XML document
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Unsupported logo style: {0}")]
    UnsupportedLogoStyle(String),

    #[error("Request cancelled")]
    Cancelled,
}

pub type TermResult<T> = Result<T, TermError>;
