use std::{fmt, sync::Arc};

use fluentreq_interface::{registered_backend, Backend, Value};

use super::{BuildClientError, BuildClientResult, ClientConfig};
use crate::Client;

/// Builder for [`Client`].
///
/// The base URL defaults to `/`. Without an explicit backend, the globally registered one is
/// used.
#[derive(Clone)]
pub struct ClientBuilder {
    base_url: Option<Value>,
    backend: Option<Arc<dyn Backend>>,
    config: ClientConfig,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: Some(Value::from("/")),
            backend: None,
            config: ClientConfig::default(),
        }
    }
}

impl ClientBuilder {
    /// Sets the base URL all request paths are appended to.
    ///
    /// Anything but a string makes [`ClientBuilder::build`] fail.
    pub fn base_url<V: TryInto<Value>>(mut self, base_url: V) -> Self {
        self.base_url = base_url.try_into().ok();
        self
    }

    /// Executes requests with `backend` instead of the registered one.
    pub fn backend(self, backend: impl Backend) -> Self {
        self.shared_backend(Arc::new(backend))
    }

    /// Executes requests with a backend shared with other clients.
    pub fn shared_backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Starts from `config` instead of the default options.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Build a new client with the given options.
    pub fn build(self) -> BuildClientResult<Client> {
        let base_url = match self.base_url {
            Some(Value::String(url)) => url,
            _ => return Err(BuildClientError::InvalidBaseUrl),
        };
        let backend = self
            .backend
            .or_else(registered_backend)
            .ok_or(BuildClientError::NoBackend)?;
        Ok(Client {
            base_url,
            config: self.config,
            backend,
        })
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("has_backend", &self.backend.is_some())
            .field("config", &self.config)
            .finish()
    }
}
