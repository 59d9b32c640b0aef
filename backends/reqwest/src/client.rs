use std::sync::Mutex;

use reqwest::{blocking::Client, redirect::Policy};

use crate::{
    error::{ReqwestBackendError, Result},
    options::{ClientSettings, HttpVersion},
};

/// Keeps the most recently built client around, since consecutive requests from one
/// `fluentreq` client usually carry identical settings.
#[derive(Default)]
pub(crate) struct ClientCache {
    last: Mutex<Option<(ClientSettings, Client)>>,
}

impl ClientCache {
    pub fn get_or_build(&self, settings: &ClientSettings) -> Result<Client> {
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        if let Some((cached, client)) = &*last {
            if cached == settings {
                return Ok(client.clone());
            }
        }
        let client = build_reqwest_client(settings)?;
        *last = Some((settings.clone(), client.clone()));
        Ok(client)
    }
}

pub(crate) fn build_reqwest_client(settings: &ClientSettings) -> Result<Client> {
    let mut builder = Client::builder()
        .timeout(settings.timeout)
        .gzip(settings.decompress)
        .redirect(match settings.max_redirects {
            None => Policy::default(),
            Some(0) => Policy::none(),
            Some(max) => Policy::limited(max),
        });

    if let Some(user_agent) = &settings.user_agent {
        builder = builder.user_agent(user_agent);
    }

    builder = match settings.http_version {
        None => builder,
        Some(HttpVersion::Http1Only) => builder.http1_only(),
        Some(HttpVersion::Http2PriorKnowledge) => builder.http2_prior_knowledge(),
    };

    #[cfg(any(feature = "default-tls", feature = "rustls-tls"))]
    {
        builder = builder.danger_accept_invalid_certs(!settings.ssl_verify);
    }

    builder.build().map_err(ReqwestBackendError::Reqwest)
}
