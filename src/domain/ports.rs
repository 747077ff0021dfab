use crate::domain::model::GalleryEntry;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote gallery backend: four GET-style actions against one endpoint.
#[async_trait]
pub trait GallerySource: Send + Sync {
    async fn list(&self) -> Result<Vec<GalleryEntry>>;
    async fn raw_svg(&self, id: &str) -> Result<String>;
    async fn download(&self, id: &str) -> Result<Vec<u8>>;
    /// Bump the server-side download counter. Callers decide whether a
    /// failure here is fatal; for the gallery client it never is.
    async fn hit(&self, id: &str) -> Result<()>;
}

pub trait FileSink: Send + Sync {
    fn save_file(
        &self,
        name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn timeout_secs(&self) -> u64;
}
