use std::{borrow::Cow, fmt};

use crate::value::ConfigMap;

/// An HTTP request method.
///
/// Custom methods are always stored uppercased, so `Method::custom("purge")` and
/// `Method::custom("PURGE")` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
    /// HEAD
    Head,
    /// PATCH
    Patch,
    /// OPTIONS
    Options,
    /// Any other method name, uppercased.
    Other(Cow<'static, str>),
}

impl Method {
    /// Resolves a method name, case-insensitively, to one of the well-known variants or to
    /// an uppercased [`Method::Other`].
    pub fn custom(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        match name.to_ascii_uppercase().as_str() {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            "HEAD" => Self::Head,
            "PATCH" => Self::Patch,
            "OPTIONS" => Self::Options,
            _ if name.bytes().any(|c| c.is_ascii_lowercase()) => {
                Self::Other(Cow::Owned(name.to_ascii_uppercase()))
            }
            _ => Self::Other(name),
        }
    }

    /// The uppercased method name as sent on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Patch => "PATCH",
            Self::Options => "OPTIONS",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully composed request, ready for a backend to execute.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// The request method.
    pub method: Method,
    /// The absolute or backend-relative target URL.
    pub url: String,
    /// Generic transport options such as `timeout` or `sslverify`.
    pub options: ConfigMap,
    /// Request headers.
    pub headers: ConfigMap,
    /// Request cookies.
    pub cookies: ConfigMap,
}

impl Request {
    /// Creates a request without any options, headers or cookies.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            options: ConfigMap::new(),
            headers: ConfigMap::new(),
            cookies: ConfigMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_method_is_uppercased() {
        assert_eq!(Method::custom("get"), Method::Get);
        assert_eq!(Method::custom("Options"), Method::Options);
        assert_eq!(Method::custom("purge").as_str(), "PURGE");
        assert_eq!(Method::custom("purge"), Method::custom("PURGE"));
        assert_eq!(Method::custom(String::from("mkcol")).to_string(), "MKCOL");
    }
}
