use thiserror::Error;

/// Fallback detail when the provider rejects a query without a usable message.
pub const DEFAULT_REJECTION_MESSAGE: &str = "City not found";

/// Every way a call to the upstream provider can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Nothing usable came back: connect, DNS, TLS, timeout or body read failure.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The provider answered with a non-success status.
    #[error("provider rejected request with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// A success response whose body does not have the expected fields.
    #[error("unexpected provider response: {0}")]
    UnexpectedShape(String),

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}
