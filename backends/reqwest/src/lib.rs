//! A [`fluentreq`] request executor built on the blocking API of [`reqwest`].
//!
//! The generic options carried by a request are interpreted as follows:
//!
//! | option | effect |
//! |---|---|
//! | `timeout` | total request timeout in seconds, `0` for none; negative values are rejected |
//! | `redirection` | maximum number of redirects followed, `0` to not follow |
//! | `user-agent` | `User-Agent` header |
//! | `sslverify` | when unset, invalid certificates are accepted |
//! | `httpversion` | `1.0`/`1.1` restricts to HTTP/1, `2.0` uses HTTP/2 prior knowledge |
//! | `decompress` | transparent gzip decoding |
//! | `body` | request body |
//! | `stream` + `filename` | write the response body to `filename` instead of returning it |
//!
//! Cookies are sent as one `Cookie` header, appended to an explicit `Cookie` header if any.
//!
//! [`fluentreq`]: https://docs.rs/fluentreq

mod client;
mod error;
mod options;
mod request;
mod response;

use std::fmt;

use fluentreq_interface::{register_backend, Backend, RawResponse, Request, Result};
use tracing::debug;

use crate::{client::ClientCache, error::ReqwestBackendError, options::TransportOptions};

/// The backend implementation using reqwest.
#[derive(Default)]
pub struct ReqwestBackend {
    clients: ClientCache,
}

impl ReqwestBackend {
    /// Creates a backend. reqwest clients are built lazily from the options of each request.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for ReqwestBackend {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReqwestBackend")
    }

    fn execute(&self, req: Request) -> Result<RawResponse> {
        let options = TransportOptions::from_map(&req.options)?;
        let client = self.clients.get_or_build(&options.client)?;
        let request_builder = request::build_request(&client, &req, options.body)?;

        debug!(method = %req.method, url = %req.url, "sending request with reqwest");
        let response = request_builder
            .send()
            .map_err(ReqwestBackendError::Reqwest)?;
        debug!(status = response.status().as_u16(), "received response");

        Ok(response::capture(response, options.stream_to.as_deref())?)
    }
}

impl fmt::Debug for ReqwestBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ReqwestBackend")
    }
}

/// Registers the reqwest backend as global default.
pub fn register() {
    register_backend(ReqwestBackend::new());
}
