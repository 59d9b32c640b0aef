//! Interpretation of the generic option vocabulary.

use std::{path::PathBuf, time::Duration};

use fluentreq_interface::{ConfigMap, Value};
use tracing::debug;

use crate::error::{ReqwestBackendError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HttpVersion {
    Http1Only,
    Http2PriorKnowledge,
}

/// Everything that has to be fixed when the reqwest client is built.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ClientSettings {
    pub timeout: Option<Duration>,
    pub max_redirects: Option<usize>,
    pub user_agent: Option<String>,
    pub ssl_verify: bool,
    pub http_version: Option<HttpVersion>,
    pub decompress: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TransportOptions {
    pub client: ClientSettings,
    pub body: Option<String>,
    pub stream_to: Option<PathBuf>,
}

impl TransportOptions {
    pub fn from_map(options: &ConfigMap) -> Result<Self> {
        let timeout = match options.get("timeout") {
            None => None,
            Some(value) => {
                let secs = number(value)
                    .filter(|n| *n >= 0.0)
                    .ok_or(ReqwestBackendError::InvalidOption("timeout"))?;
                (secs > 0.0)
                    .then(|| Duration::try_from_secs_f64(secs))
                    .transpose()
                    .map_err(|_| ReqwestBackendError::InvalidOption("timeout"))?
            }
        };

        let max_redirects = match options.get("redirection") {
            None => None,
            Some(value) => Some(
                number(value)
                    .filter(|n| *n >= 0.0 && n.fract() == 0.0)
                    .ok_or(ReqwestBackendError::InvalidOption("redirection"))?
                    as usize,
            ),
        };

        let http_version = match options.get("httpversion") {
            None => None,
            Some(value) => Some(match value.to_string().as_str() {
                "1" | "1.0" | "1.1" => HttpVersion::Http1Only,
                "2" | "2.0" => HttpVersion::Http2PriorKnowledge,
                _ => return Err(ReqwestBackendError::InvalidOption("httpversion")),
            }),
        };

        let stream_to = if flag(options, "stream", false) {
            let filename = options
                .get("filename")
                .and_then(Value::as_str)
                .filter(|name| !name.is_empty())
                .ok_or(ReqwestBackendError::InvalidOption("filename"))?;
            Some(PathBuf::from(filename))
        } else {
            None
        };

        if flag(options, "compress", false) {
            debug!("request compression is not supported, sending body as-is");
        }
        if !flag(options, "blocking", true) {
            debug!("non-blocking requests are not supported, waiting for the response");
        }

        Ok(Self {
            client: ClientSettings {
                timeout,
                max_redirects,
                user_agent: options.get("user-agent").map(Value::to_string),
                ssl_verify: flag(options, "sslverify", true),
                http_version,
                decompress: flag(options, "decompress", true),
            },
            body: options.get("body").map(Value::to_string),
            stream_to,
        })
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(_) => None,
    }
}

/// Reads `key` as a flag. Strings count as set unless empty, `"0"` or `"false"`.
fn flag(options: &ConfigMap, key: &str, default: bool) -> bool {
    match options.get(key) {
        None => default,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false")),
    }
}
