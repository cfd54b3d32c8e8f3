use std::sync::atomic::{AtomicBool, Ordering};

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

/// GET-with-JSON-body helper. The parsed response is logged, never returned.
pub struct FetchHelper {
    client: reqwest::Client,
    loading: AtomicBool,
}

impl FetchHelper {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            loading: AtomicBool::new(false),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub async fn fetch_data<B: Serialize + ?Sized>(&self, url: &str, body: &B) {
        self.loading.store(true, Ordering::SeqCst);
        match self.request(url, body).await {
            Ok(value) => tracing::info!("{url}: {value}"),
            Err(error) => tracing::error!("fetch of {url} failed: {error}"),
        }
        self.loading.store(false, Ordering::SeqCst);
    }

    async fn request<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<serde_json::Value, FetchError> {
        // GET carrying a body; many servers ignore it
        let body = serde_json::to_string(body)?;
        let res = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        Ok(res.json::<serde_json::Value>().await?)
    }
}

impl Default for FetchHelper {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
enum FetchError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Encode(#[from] serde_json::Error),
}
