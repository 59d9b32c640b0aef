use serde::Serialize;

use fluentreq_interface::{ConfigMap, Method, Request, Value};

use crate::RequestOptions;

/// `User-Agent` sent unless overridden through the `user-agent` option.
pub const DEFAULT_USER_AGENT: &str = concat!("fluentreq/", env!("CARGO_PKG_VERSION"));

/// Options, headers and cookies persisted on a [`crate::Client`].
///
/// Every collection only grows: per-call overrides are merged in and kept for later calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientConfig {
    /// Flat transport options.
    pub options: ConfigMap,
    /// Request headers.
    pub headers: ConfigMap,
    /// Request cookies.
    pub cookies: ConfigMap,
}

impl Default for ClientConfig {
    /// The default transport options, with no headers or cookies.
    fn default() -> Self {
        let options = [
            ("timeout", Value::from(5)),
            ("redirection", Value::from(5)),
            ("httpversion", Value::from("1.0")),
            ("user-agent", Value::from(DEFAULT_USER_AGENT)),
            ("blocking", Value::from(true)),
            ("compress", Value::from(false)),
            ("decompress", Value::from(true)),
            ("sslverify", Value::from(true)),
            ("stream", Value::from(false)),
        ]
        .into_iter()
        .collect();
        Self {
            options,
            headers: ConfigMap::new(),
            cookies: ConfigMap::new(),
        }
    }
}

impl ClientConfig {
    /// A configuration with no options at all.
    pub fn empty() -> Self {
        Self {
            options: ConfigMap::new(),
            headers: ConfigMap::new(),
            cookies: ConfigMap::new(),
        }
    }

    pub(crate) fn merge(&mut self, overrides: RequestOptions) {
        self.options.merge(overrides.options);
        self.headers.merge(overrides.headers);
        self.cookies.merge(overrides.cookies);
    }

    pub(crate) fn to_request(&self, method: Method, url: String) -> Request {
        Request {
            method,
            url,
            options: self.options.clone(),
            headers: self.headers.clone(),
            cookies: self.cookies.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.options.get("timeout"), Some(&Value::from(5)));
        assert_eq!(config.options.get("httpversion"), Some(&Value::from("1.0")));
        assert_eq!(config.options.get("sslverify"), Some(&Value::from(true)));
        assert!(config.options.get("user-agent").unwrap().is_string());
        assert!(!config.options.contains_key("body"));
        assert!(config.headers.is_empty());
        assert!(config.cookies.is_empty());
    }

    #[test]
    fn test_merge_keeps_previous_entries() {
        let mut config = ClientConfig::empty();
        config.merge(RequestOptions::new().header("A", "1").cookie("c", "x"));
        config.merge(RequestOptions::new().header("B", "2").option("timeout", 9));

        assert_eq!(config.headers.len(), 2);
        assert_eq!(config.cookies.get("c"), Some(&Value::from("x")));
        assert_eq!(config.options.get("timeout"), Some(&Value::from(9)));

        let req = config.to_request(Method::Put, "/x".into());
        assert_eq!(req.headers, config.headers);
        assert_eq!(req.url, "/x");
    }
}
