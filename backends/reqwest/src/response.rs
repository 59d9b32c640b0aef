use std::{fs::File, io::BufWriter, path::Path};

use fluentreq_interface::RawResponse;

use crate::error::Result;

/// Reads the whole response into a [`RawResponse`].
///
/// With `stream_to`, the body is written to that file instead and the captured body is empty.
pub(crate) fn capture(
    mut response: reqwest::blocking::Response,
    stream_to: Option<&Path>,
) -> Result<RawResponse> {
    let status = response.status();
    let message = status.canonical_reason().unwrap_or_default().to_owned();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_owned(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    let body = match stream_to {
        Some(path) => {
            let mut file = BufWriter::new(File::create(path)?);
            response.copy_to(&mut file)?;
            file.into_inner().map_err(|e| e.into_error())?.sync_all()?;
            String::new()
        }
        None => response.text()?,
    };

    Ok(RawResponse {
        status: status.as_u16(),
        message,
        headers,
        body,
    })
}
