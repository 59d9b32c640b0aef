use serde::Serialize;

use fluentreq_interface::{ConfigMap, Value};

/// Per-call overrides passed to a verb operation.
///
/// Headers and cookies are kept apart from the flat transport options, mirroring how they
/// are persisted on a [`crate::Client`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RequestOptions {
    /// Header overrides.
    #[serde(skip_serializing_if = "ConfigMap::is_empty")]
    pub headers: ConfigMap,
    /// Cookie overrides.
    #[serde(skip_serializing_if = "ConfigMap::is_empty")]
    pub cookies: ConfigMap,
    /// Flat option overrides such as `timeout` or `body`.
    #[serde(flatten)]
    pub options: ConfigMap,
}

impl RequestOptions {
    /// Creates empty overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads overrides from a JSON object.
    ///
    /// The `headers` and `cookies` keys hold sub-objects; every other key is a flat option.
    /// Entries that are not strings, booleans or numbers are dropped, and anything other than
    /// an object yields empty overrides.
    pub fn from_json(value: serde_json::Value) -> Self {
        let serde_json::Value::Object(mut object) = value else {
            return Self::default();
        };
        let headers = take_sub_map(&mut object, "headers");
        let cookies = take_sub_map(&mut object, "cookies");
        Self {
            headers,
            cookies,
            options: ConfigMap::from_json_object(object),
        }
    }

    /// Adds a header override. Non-scalar values are ignored.
    pub fn header<V: TryInto<Value>>(mut self, name: impl Into<String>, value: V) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Adds a cookie override. Non-scalar values are ignored.
    pub fn cookie<V: TryInto<Value>>(mut self, name: impl Into<String>, value: V) -> Self {
        self.cookies.insert(name, value);
        self
    }

    /// Adds a flat option override. Non-scalar values are ignored.
    pub fn option<V: TryInto<Value>>(mut self, key: impl Into<String>, value: V) -> Self {
        self.options.insert(key, value);
        self
    }

    /// Shorthand for the `body` option.
    pub fn body(self, body: impl Into<String>) -> Self {
        self.option("body", body.into())
    }
}

impl From<serde_json::Value> for RequestOptions {
    fn from(value: serde_json::Value) -> Self {
        Self::from_json(value)
    }
}

fn take_sub_map(object: &mut serde_json::Map<String, serde_json::Value>, key: &str) -> ConfigMap {
    match object.remove(key) {
        Some(serde_json::Value::Object(map)) => ConfigMap::from_json_object(map),
        _ => ConfigMap::new(),
    }
}

/// Appends `path` to `base` as a single path segment.
///
/// Exactly one `/` separates the two. A missing or empty path leaves the base untouched.
pub(crate) fn join_url(base: &str, path: Option<&str>) -> String {
    match path {
        Some(path) if !path.is_empty() => format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        ),
        _ => base.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://api.test", Some("users")), "https://api.test/users");
        assert_eq!(join_url("https://api.test/", Some("/users")), "https://api.test/users");
        assert_eq!(join_url("/", Some("users/1")), "/users/1");
        assert_eq!(join_url("https://api.test", Some("")), "https://api.test");
        assert_eq!(join_url("https://api.test", None), "https://api.test");
        assert_eq!(join_url("", None), "");
    }

    #[test]
    fn test_from_json_splits_collections() {
        let options = RequestOptions::from_json(json!({
            "headers": {"X-Trace": "abc", "X-Bad": [1]},
            "cookies": {"session": "s1"},
            "timeout": 30,
            "body": "payload",
            "filename": null,
        }));

        assert_eq!(options.headers.len(), 1);
        assert_eq!(options.headers.get("X-Trace"), Some(&Value::from("abc")));
        assert_eq!(options.cookies.get("session"), Some(&Value::from("s1")));
        assert_eq!(options.options.len(), 2);
        assert_eq!(options.options.get("timeout"), Some(&Value::from(30)));
        assert!(!options.options.contains_key("headers"));
    }

    #[test]
    fn test_from_json_ignores_malformed_collections() {
        let options = RequestOptions::from_json(json!({"headers": "nope", "cookies": 3}));
        assert_eq!(options, RequestOptions::default());

        assert_eq!(RequestOptions::from_json(json!([1, 2])), RequestOptions::default());
    }

    #[test]
    fn test_builder_methods() {
        let options = RequestOptions::new()
            .header("Accept", "text/plain")
            .cookie("theme", "dark")
            .option("timeout", 2)
            .option("ratio", f64::NAN)
            .body("hello");

        assert_eq!(options.headers.get("Accept"), Some(&Value::from("text/plain")));
        assert_eq!(options.cookies.get("theme"), Some(&Value::from("dark")));
        assert_eq!(options.options.get("body"), Some(&Value::from("hello")));
        assert!(!options.options.contains_key("ratio"));
    }

    #[test]
    fn test_serialize_shape() {
        let options = RequestOptions::new().header("A", "1").option("timeout", 3);
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({"headers": {"A": "1"}, "timeout": 3})
        );
    }
}
