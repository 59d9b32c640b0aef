//! Core executor trait.
//!
//! Backend developers implement [`Backend`] to turn a composed [`Request`] into a
//! [`RawResponse`]. Anything about the transport (TLS, redirects, timeouts, connection reuse)
//! is up to the implementation; the facade only composes requests and reads responses.

use std::fmt;

use crate::{RawResponse, Request};

/// Trait for request executors.
pub trait Backend: Send + Sync + 'static {
    /// Provides a textual description of this backend.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Backend")
    }

    /// Executes a request and returns the captured response.
    fn execute(&self, req: Request) -> crate::Result<RawResponse>;
}

/// A [`Backend`] backed by a plain function or closure.
///
/// Created with [`backend_fn`].
#[derive(Clone)]
pub struct FnBackend<F> {
    f: F,
}

/// Wraps a function with the executor signature into a [`Backend`].
///
/// ```
/// use fluentreq_interface::{backend_fn, Backend, Method, RawResponse, Request};
///
/// let backend = backend_fn(|req: Request| {
///     Ok(RawResponse {
///         status: 200,
///         body: req.url,
///         ..Default::default()
///     })
/// });
/// let res = backend.execute(Request::new(Method::Get, "/ping")).unwrap();
/// assert_eq!(res.body, "/ping");
/// ```
pub fn backend_fn<F>(f: F) -> FnBackend<F>
where
    F: Fn(Request) -> crate::Result<RawResponse> + Send + Sync + 'static,
{
    FnBackend { f }
}

impl<F> Backend for FnBackend<F>
where
    F: Fn(Request) -> crate::Result<RawResponse> + Send + Sync + 'static,
{
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FnBackend")
    }

    fn execute(&self, req: Request) -> crate::Result<RawResponse> {
        (self.f)(req)
    }
}

impl<F> fmt::Debug for FnBackend<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnBackend")
    }
}
