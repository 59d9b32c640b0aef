use fluentreq_interface::{ConfigMap, Method, Request, Value};
use reqwest::{
    blocking::{Client, RequestBuilder},
    header::{HeaderName, HeaderValue, COOKIE},
    Url,
};

use crate::error::{ReqwestBackendError, Result};

pub fn convert_method(method: &Method) -> Result<reqwest::Method> {
    Ok(match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
        Method::Head => reqwest::Method::HEAD,
        Method::Patch => reqwest::Method::PATCH,
        Method::Options => reqwest::Method::OPTIONS,
        Method::Other(other) => reqwest::Method::from_bytes(other.as_bytes())
            .map_err(|_| ReqwestBackendError::InvalidMethod(other.to_string()))?,
    })
}

fn convert_header_name(name: &str) -> Result<HeaderName> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| ReqwestBackendError::InvalidHeaderName(name.into()))
}

fn convert_header_value(name: &str, value: &Value) -> Result<HeaderValue> {
    HeaderValue::from_str(&value.to_string())
        .map_err(|_| ReqwestBackendError::InvalidHeaderValue(name.into()))
}

/// Joins cookies into a single `Cookie` header value.
pub(crate) fn cookie_header(cookies: &ConfigMap) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    let pairs: Vec<String> = cookies
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    Some(pairs.join("; "))
}

pub(crate) fn build_request(
    client: &Client,
    req: &Request,
    body: Option<String>,
) -> Result<RequestBuilder> {
    let url = Url::parse(&req.url).map_err(|_| ReqwestBackendError::InvalidUrl(req.url.clone()))?;
    let method = convert_method(&req.method)?;

    let mut request_builder = client.request(method, url);

    let mut cookie_parts = Vec::new();
    for (name, value) in &req.headers {
        if name.eq_ignore_ascii_case(COOKIE.as_str()) {
            cookie_parts.push(value.to_string());
            continue;
        }
        let value = convert_header_value(name, value)?;
        request_builder = request_builder.header(convert_header_name(name)?, value);
    }

    // An explicit `Cookie` header and the cookie jar share one header line.
    cookie_parts.extend(cookie_header(&req.cookies));
    if !cookie_parts.is_empty() {
        let value = HeaderValue::from_str(&cookie_parts.join("; "))
            .map_err(|_| ReqwestBackendError::InvalidHeaderValue(COOKIE.to_string()))?;
        request_builder = request_builder.header(COOKIE, value);
    }

    if let Some(body) = body {
        request_builder = request_builder.body(body);
    }

    Ok(request_builder)
}
