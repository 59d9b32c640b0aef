//! One-off requests that bypass any [`crate::Client`] configuration.
//!
//! These functions hand `url` and the given options straight to the globally registered
//! backend, injecting nothing but the method: no base URL, no default options.

use fluentreq_interface::{registered_backend, Method, Request};
use tracing::debug;

use crate::{Error, RequestOptions, Response};

/// Sends a single `method` request to `url` through the registered backend.
pub fn request(
    method: Method,
    url: &str,
    options: impl Into<Option<RequestOptions>>,
) -> crate::Result<Response> {
    if url.is_empty() {
        return Err(Error::MissingUrl);
    }
    let backend = registered_backend().ok_or(Error::NoBackend)?;
    let options = options.into().unwrap_or_default();
    let req = Request {
        method,
        url: url.to_owned(),
        options: options.options,
        headers: options.headers,
        cookies: options.cookies,
    };
    debug!(method = %req.method, url = %req.url, "dispatching one-off request");
    Ok(backend.execute(req)?.into())
}

/// Shortcut method to quickly make a `GET` request.
pub fn get(url: &str, options: impl Into<Option<RequestOptions>>) -> crate::Result<Response> {
    request(Method::Get, url, options)
}

/// Shortcut method to quickly make a `POST` request.
pub fn post(url: &str, options: impl Into<Option<RequestOptions>>) -> crate::Result<Response> {
    request(Method::Post, url, options)
}

/// Shortcut method to quickly make a `PUT` request.
pub fn put(url: &str, options: impl Into<Option<RequestOptions>>) -> crate::Result<Response> {
    request(Method::Put, url, options)
}

/// Shortcut method to quickly make a `DELETE` request.
pub fn delete(url: &str, options: impl Into<Option<RequestOptions>>) -> crate::Result<Response> {
    request(Method::Delete, url, options)
}

/// Shortcut method to quickly make a `PATCH` request.
pub fn patch(url: &str, options: impl Into<Option<RequestOptions>>) -> crate::Result<Response> {
    request(Method::Patch, url, options)
}

/// Shortcut method to quickly make a `HEAD` request.
pub fn head(url: &str, options: impl Into<Option<RequestOptions>>) -> crate::Result<Response> {
    request(Method::Head, url, options)
}

/// Shortcut method to quickly make an `OPTIONS` request.
pub fn options(url: &str, options: impl Into<Option<RequestOptions>>) -> crate::Result<Response> {
    request(Method::Options, url, options)
}
