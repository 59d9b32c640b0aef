use std::io;

use fluentreq_interface::Error as FluentreqError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReqwestBackendError {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("invalid header name: {0}")]
    InvalidHeaderName(String),
    #[error("invalid header value: {0}")]
    InvalidHeaderValue(String),
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid HTTP method: {0}")]
    InvalidMethod(String),
    #[error("invalid value for option `{0}`")]
    InvalidOption(&'static str),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<ReqwestBackendError> for FluentreqError {
    fn from(err: ReqwestBackendError) -> Self {
        match err {
            ReqwestBackendError::Reqwest(e) => {
                if e.is_timeout() {
                    FluentreqError::RequestTimeout
                } else {
                    FluentreqError::Io(io::Error::other(e))
                }
            }
            ReqwestBackendError::InvalidUrl(_) => FluentreqError::InvalidUrl,
            ReqwestBackendError::Io(e) => FluentreqError::Io(e),
            other @ (ReqwestBackendError::InvalidHeaderName(_)
            | ReqwestBackendError::InvalidHeaderValue(_)
            | ReqwestBackendError::InvalidMethod(_)
            | ReqwestBackendError::InvalidOption(_)) => {
                FluentreqError::InvalidOption(other.to_string())
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ReqwestBackendError>;
