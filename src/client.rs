//! The chainable client and its builder.

mod builder;
mod config;
mod error;

use std::{fmt, sync::Arc};

use fluentreq_interface::{Backend, ConfigMap, Method, Value};
use tracing::{debug, trace};

pub use builder::ClientBuilder;
pub use config::{ClientConfig, DEFAULT_USER_AGENT};
pub use error::{BuildClientError, BuildClientResult};

use crate::{request::join_url, Error, RequestOptions, Response};

/// An HTTP client that remembers its configuration between requests.
///
/// Setters take `&mut self` and return it, so they chain:
///
/// ```no_run
/// # fn run() -> Result<(), Box<dyn std::error::Error>> {
/// use fluentreq::{Client, RequestOptions};
///
/// let mut client = Client::new("https://api.example.com")?;
/// client
///     .set_authorization("Bearer token")
///     .set_header("Accept", "application/json")
///     .set_option("timeout", 10);
///
/// let res = client.get("users", None)?;
/// println!("{} {}", res.status(), res);
///
/// let res = client.post("users", RequestOptions::new().body("{\"name\":\"a\"}"))?;
/// # Ok(())
/// # }
/// ```
///
/// Per-call [`RequestOptions`] are merged into the persisted configuration, so they stay in
/// effect for every later request made with this client.
#[derive(Clone)]
pub struct Client {
    pub(crate) base_url: String,
    pub(crate) config: ClientConfig,
    pub(crate) backend: Arc<dyn Backend>,
}

impl Client {
    /// Creates a client for `base_url` with the default configuration and the registered
    /// backend.
    pub fn new(base_url: impl Into<String>) -> BuildClientResult<Self> {
        let base_url: String = base_url.into();
        Self::builder().base_url(base_url).build()
    }

    /// Starts building a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// The base URL request paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The persisted options, headers and cookies.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replaces the base URL.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) -> &mut Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the `Authorization` header.
    pub fn set_authorization<V: TryInto<Value>>(&mut self, value: V) -> &mut Self {
        self.set_header("Authorization", value)
    }

    /// Sets a header. Values that are not strings, booleans or numbers are ignored.
    pub fn set_header<V: TryInto<Value>>(&mut self, name: impl Into<String>, value: V) -> &mut Self {
        store(&mut self.config.headers, "header", name.into(), value);
        self
    }

    /// Sets a cookie. Values that are not strings, booleans or numbers are ignored.
    pub fn set_cookie<V: TryInto<Value>>(&mut self, name: impl Into<String>, value: V) -> &mut Self {
        store(&mut self.config.cookies, "cookie", name.into(), value);
        self
    }

    /// Sets a transport option. Values that are not strings, booleans or numbers are ignored.
    pub fn set_option<V: TryInto<Value>>(&mut self, key: impl Into<String>, value: V) -> &mut Self {
        store(&mut self.config.options, "option", key.into(), value);
        self
    }

    /// Sends a `method` request to `path` under the base URL.
    ///
    /// `options` are merged into the persisted configuration before the request is composed.
    /// Fails with [`Error::MissingUrl`] without contacting the backend when the base URL and
    /// path resolve to an empty URL.
    pub fn request(
        &mut self,
        method: Method,
        path: Option<&str>,
        options: Option<RequestOptions>,
    ) -> crate::Result<Response> {
        let url = join_url(&self.base_url, path);

        if let Some(options) = options {
            self.config.merge(options);
        }

        if url.is_empty() {
            return Err(Error::MissingUrl);
        }

        let req = self.config.to_request(method, url);
        debug!(method = %req.method, url = %req.url, "dispatching request");
        let res = self.backend.execute(req)?;
        Ok(res.into())
    }

    /// Sends a `GET` request. See [`Client::request`].
    pub fn get<'a>(
        &mut self,
        path: impl Into<Option<&'a str>>,
        options: impl Into<Option<RequestOptions>>,
    ) -> crate::Result<Response> {
        self.request(Method::Get, path.into(), options.into())
    }

    /// Sends a `POST` request. See [`Client::request`].
    pub fn post<'a>(
        &mut self,
        path: impl Into<Option<&'a str>>,
        options: impl Into<Option<RequestOptions>>,
    ) -> crate::Result<Response> {
        self.request(Method::Post, path.into(), options.into())
    }

    /// Sends a `PUT` request. See [`Client::request`].
    pub fn put<'a>(
        &mut self,
        path: impl Into<Option<&'a str>>,
        options: impl Into<Option<RequestOptions>>,
    ) -> crate::Result<Response> {
        self.request(Method::Put, path.into(), options.into())
    }

    /// Sends a `DELETE` request. See [`Client::request`].
    pub fn delete<'a>(
        &mut self,
        path: impl Into<Option<&'a str>>,
        options: impl Into<Option<RequestOptions>>,
    ) -> crate::Result<Response> {
        self.request(Method::Delete, path.into(), options.into())
    }

    /// Sends a `PATCH` request. See [`Client::request`].
    pub fn patch<'a>(
        &mut self,
        path: impl Into<Option<&'a str>>,
        options: impl Into<Option<RequestOptions>>,
    ) -> crate::Result<Response> {
        self.request(Method::Patch, path.into(), options.into())
    }

    /// Sends a `HEAD` request. See [`Client::request`].
    pub fn head<'a>(
        &mut self,
        path: impl Into<Option<&'a str>>,
        options: impl Into<Option<RequestOptions>>,
    ) -> crate::Result<Response> {
        self.request(Method::Head, path.into(), options.into())
    }

    /// Sends an `OPTIONS` request. See [`Client::request`].
    pub fn options<'a>(
        &mut self,
        path: impl Into<Option<&'a str>>,
        options: impl Into<Option<RequestOptions>>,
    ) -> crate::Result<Response> {
        self.request(Method::Options, path.into(), options.into())
    }
}

fn store<V: TryInto<Value>>(map: &mut ConfigMap, kind: &'static str, key: String, value: V) {
    if !map.insert(key.clone(), value) {
        trace!(kind, key = %key, "ignoring value that is not a string, boolean or number");
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct BackendDebug<'a>(&'a dyn Backend);
        impl fmt::Debug for BackendDebug<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.describe(f)
            }
        }

        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("config", &self.config)
            .field("backend", &BackendDebug(&*self.backend))
            .finish()
    }
}
