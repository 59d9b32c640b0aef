/// The immutable result of executing a [`crate::Request`].
///
/// Backends capture everything at once: the status line, every header in received order and
/// the body decoded as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    /// Numeric status code.
    pub status: u16,
    /// Reason phrase of the status line. May be empty.
    pub message: String,
    /// Header name/value pairs. A header received several times appears several times.
    pub headers: Vec<(String, String)>,
    /// Response body.
    pub body: String,
}

impl RawResponse {
    /// Iterates over every value of the header `name`, compared case-insensitively.
    pub fn header_values<'a, 'n>(&'a self, name: &'n str) -> impl Iterator<Item = &'a str> + 'n
    where
        'a: 'n,
    {
        self.headers
            .iter()
            .filter(move |(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_values_case_insensitive() {
        let raw = RawResponse {
            status: 200,
            message: "OK".into(),
            headers: vec![
                ("Set-Cookie".into(), "a=1".into()),
                ("content-type".into(), "text/plain".into()),
                ("set-cookie".into(), "b=2".into()),
            ],
            body: String::new(),
        };
        assert_eq!(
            raw.header_values("SET-COOKIE").collect::<Vec<_>>(),
            ["a=1", "b=2"]
        );
        assert_eq!(raw.header_values("x-missing").count(), 0);
    }
}
