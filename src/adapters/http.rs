use crate::domain::model::GalleryEntry;
use crate::domain::ports::{ConfigProvider, GallerySource};
use crate::utils::error::{GalleryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Gallery backend speaking the scripted four-action GET protocol:
/// `action=list`, `action=raw&id=..`, `action=dl&id=..`, `action=hit&id=..`.
pub struct HttpGallerySource<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpGallerySource<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()?;
        Ok(Self { config, client })
    }

    fn action(&self, action: &str) -> reqwest::RequestBuilder {
        self.client
            .get(self.config.api_endpoint())
            .query(&[("action", action)])
    }
}

#[async_trait]
impl<C: ConfigProvider> GallerySource for HttpGallerySource<C> {
    async fn list(&self) -> Result<Vec<GalleryEntry>> {
        tracing::debug!("requesting listing from {}", self.config.api_endpoint());
        let response = self.action("list").send().await?.error_for_status()?;
        let payload: serde_json::Value = response.json().await?;
        parse_listing(payload)
    }

    async fn raw_svg(&self, id: &str) -> Result<String> {
        let response = self
            .action("raw")
            .query(&[("id", id)])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    async fn download(&self, id: &str) -> Result<Vec<u8>> {
        let response = self
            .action("dl")
            .query(&[("id", id)])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn hit(&self, id: &str) -> Result<()> {
        self.action("hit")
            .query(&[("id", id)])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// The backend answers either with a bare array of entries or with an
/// envelope: `{"files": [...]}` on success, `{"error": "..."}` on failure.
/// A missing `files` key counts as an empty gallery.
fn parse_listing(payload: serde_json::Value) -> Result<Vec<GalleryEntry>> {
    if let Some(message) = payload.get("error").and_then(serde_json::Value::as_str) {
        return Err(GalleryError::ApiRejectionError {
            message: message.to_string(),
        });
    }

    let files = match payload {
        serde_json::Value::Array(_) => payload,
        serde_json::Value::Object(mut map) => map
            .remove("files")
            .unwrap_or(serde_json::Value::Array(Vec::new())),
        other => {
            return Err(GalleryError::ApiRejectionError {
                message: format!("unexpected listing payload: {}", other),
            })
        }
    };

    Ok(serde_json::from_value(files)?)
}
