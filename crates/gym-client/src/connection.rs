use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Method, RequestBuilder, Url};
use tracing::{debug, warn};

use crate::results::{ClientError, Reply};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A connection to the roster backend. Clones share
/// the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Connection {
    http: Client,
    base: Url,
}

impl Connection {
    /// Open a connection to the backend at `base_url`.
    pub fn open(base_url: &str, timeout: Duration) -> Result<Connection> {
        let mut base = Url::parse(base_url)
            .with_context(|| format!("invalid api url: {}", base_url))?;
        // Url::join replaces the last path segment unless
        // the path ends with a slash.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("could not create http client")?;
        Ok(Connection { http, base })
    }

    /// The backend base url
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Start a request to a path relative to the base url.
    pub(crate) fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = self
            .base
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        debug!(%method, %url, "request");
        Ok(self.http.request(method, url))
    }

    /// Send a request and decode the response envelope.
    /// Rejections are reported as errors, `key` is the
    /// member id addressed by the request, if any.
    pub(crate) async fn send(
        &self,
        request: RequestBuilder,
        key: Option<u32>,
    ) -> Result<Reply, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        let reply: Reply =
            serde_json::from_slice(&body).map_err(|e| ClientError::InvalidResponse {
                status,
                reason: e.to_string(),
            })?;

        if reply.success {
            return Ok(reply);
        }
        warn!(%status, error = ?reply.error, "request rejected");
        Err(reply.into_error(status, key))
    }
}
