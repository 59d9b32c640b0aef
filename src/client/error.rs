use thiserror::Error;

/// The errors produced when building a [`crate::Client`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuildClientError {
    /// The base URL is not a string.
    #[error("You must specify the base URL for all requests")]
    InvalidBaseUrl,
    /// No backend was given to the builder and none is registered globally.
    #[error("No backend registered. Please register a backend (e.g. fluentreq-backend-reqwest) or pass one to `ClientBuilder::backend`.")]
    NoBackend,
}

/// A `Result` alias where the `Err` case is [`BuildClientError`].
pub type BuildClientResult<T> = Result<T, BuildClientError>;
