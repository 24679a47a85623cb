use parcels::{Parcel, decode_parcels};
use tracing::{debug, error, info};

use crate::backend::{Backend, BoxFuture};
use crate::config::ClientConfig;
use crate::error::{BackendError, BackendErrorKind};
use crate::wire::{PARCELS_PATH, ZONING_UPDATE_PATH, ZoningUpdateRequest};

/// [`Backend`] over HTTP using `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    pub fn with_client(config: &ClientConfig, http: reqwest::Client) -> Self {
        Self {
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_parcels(&self) -> Result<Vec<Parcel>, BackendError> {
        let url = self.url(PARCELS_PATH);
        debug!(%url, "fetching parcels");
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| transport("parcel request failed", e))?;
        let resp = check_status(resp).await?;
        let body = resp
            .bytes()
            .await
            .map_err(|e| transport("parcel response read failed", e))?;
        let parcels = decode_parcels(&body).map_err(|e| {
            error!("parcel payload decode failed: {e}");
            BackendError::with_source(BackendErrorKind::Decode, "malformed parcel listing", e)
        })?;
        info!(count = parcels.len(), "parcels fetched");
        Ok(parcels)
    }

    async fn post_zoning_update(&self, request: ZoningUpdateRequest) -> Result<(), BackendError> {
        let url = self.url(ZONING_UPDATE_PATH);
        info!(
            %url,
            parcels = request.parcel_ids.len(),
            zoning = %request.zoning_type,
            "submitting zoning update"
        );
        let resp = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| transport("zoning update request failed", e))?;
        check_status(resp).await?;
        Ok(())
    }
}

impl Backend for HttpBackend {
    fn fetch_parcels(&self) -> BoxFuture<'_, Result<Vec<Parcel>, BackendError>> {
        Box::pin(self.get_parcels())
    }

    fn update_zoning(&self, request: ZoningUpdateRequest) -> BoxFuture<'_, Result<(), BackendError>> {
        Box::pin(self.post_zoning_update(request))
    }
}

fn transport(message: &str, err: reqwest::Error) -> BackendError {
    error!("{message}: {err}");
    BackendError::with_source(BackendErrorKind::Transport, message, err)
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    error!(status = status.as_u16(), "backend rejected request: {body}");
    Err(BackendError::status(status.as_u16(), body))
}
