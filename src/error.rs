use thiserror::Error;

use fluentreq_interface::Error as ErrorImpl;

use crate::StatusCode;

/// The errors produced while dispatching a request.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The request has no URL to be sent to: the base URL and path resolved to nothing.
    #[error("You must specify the target URL for this request")]
    MissingUrl,
    /// No backend was bound to the client and none is registered globally.
    #[error("No backend registered. Please register a backend (e.g. fluentreq-backend-reqwest) at program startup.")]
    NoBackend,
    /// The backend does not recognize the input as a valid URL.
    #[error("Invalid URL")]
    InvalidUrl,
    /// A generic backend error.
    #[error("IO Error")]
    Io(#[from] std::io::Error),
    /// The backend could not finish the request within the configured `timeout`.
    #[error("Request is not finished within timeout")]
    RequestTimeout,
    /// The backend rejected an option, header or cookie.
    #[error("Invalid option: {0}")]
    InvalidOption(String),
    /// Returned by [`crate::Response::with_successful_status`] for non-2xx responses.
    #[error("Server returned non-successful status code {0}")]
    NonSuccessfulStatusCode(StatusCode),
}

/// A `Result` alias where the `Err` case is [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl From<ErrorImpl> for Error {
    fn from(e: ErrorImpl) -> Self {
        match e {
            ErrorImpl::InvalidUrl => Self::InvalidUrl,
            ErrorImpl::Io(e) => Self::Io(e),
            ErrorImpl::RequestTimeout => Self::RequestTimeout,
            ErrorImpl::InvalidOption(o) => Self::InvalidOption(o),
        }
    }
}
