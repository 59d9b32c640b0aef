use std::{borrow::Cow, fmt};

use fluentreq_interface::RawResponse;

use crate::StatusCode;

/// Read-only accessor over the response a backend returned.
///
/// Formatting a `Response` with `{}` writes its body, so `response.to_string()` equals
/// `response.body()`.
#[derive(Clone, PartialEq, Eq)]
pub struct Response {
    raw: RawResponse,
}

impl Response {
    /// Get the full raw response.
    pub fn raw(&self) -> &RawResponse {
        &self.raw
    }

    /// Unwrap into the raw response.
    pub fn into_raw(self) -> RawResponse {
        self.raw
    }

    /// Get the value of the header `name`, compared case-insensitively.
    ///
    /// When the header was received several times, the values are joined with `", "`.
    pub fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        let mut values = self.raw.header_values(name);
        let first = values.next()?;
        match values.next() {
            None => Some(Cow::Borrowed(first)),
            Some(second) => {
                let mut joined = format!("{first}, {second}");
                for value in values {
                    joined.push_str(", ");
                    joined.push_str(value);
                }
                Some(Cow::Owned(joined))
            }
        }
    }

    /// Get every value of the header `name`, in received order.
    pub fn header_all(&self, name: &str) -> Vec<&str> {
        self.raw.header_values(name).collect()
    }

    /// Get all response headers in received order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.raw.headers
    }

    /// Get the `StatusCode` of this Response.
    pub fn status(&self) -> StatusCode {
        self.raw.status.into()
    }

    /// Get the reason phrase of the status line.
    ///
    /// Falls back to the canonical phrase of the status code when the backend reported none.
    pub fn message(&self) -> &str {
        if self.raw.message.is_empty() {
            self.status().canonical_reason().unwrap_or_default()
        } else {
            &self.raw.message
        }
    }

    /// Get the response body.
    pub fn body(&self) -> &str {
        &self.raw.body
    }

    /// Return the response as-is, or [`crate::Error::NonSuccessfulStatusCode`] if the status code
    /// does not indicate success.
    #[inline]
    pub fn with_successful_status(self) -> crate::Result<Self> {
        let status = self.status();
        if status.is_successful() {
            Ok(self)
        } else {
            Err(crate::Error::NonSuccessfulStatusCode(status))
        }
    }
}

impl From<RawResponse> for Response {
    fn from(raw: RawResponse) -> Self {
        Self { raw }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.body())
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status())
            .field("message", &self.message())
            .field("headers", &self.raw.headers.len())
            .field("body_len", &self.raw.body.len())
            .finish()
    }
}
