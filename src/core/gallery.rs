use crate::core::normalize::{has_parser_error, normalize};
use crate::core::raster::Rasterizer;
use crate::domain::model::GalleryEntry;
use crate::domain::ports::{FileSink, GallerySource};
use crate::utils::error::{GalleryError, Result};

/// Orchestrates the gallery operations over an injected backend source and
/// artifact sink.
pub struct GalleryClient<S: GallerySource, K: FileSink> {
    source: S,
    sink: K,
    rasterizer: Rasterizer,
}

impl<S: GallerySource, K: FileSink> GalleryClient<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        Self {
            source,
            sink,
            rasterizer: Rasterizer::new(),
        }
    }

    pub async fn list_entries(&self) -> Result<Vec<GalleryEntry>> {
        let entries = self.source.list().await?;
        tracing::debug!("gallery listing returned {} entries", entries.len());
        Ok(entries)
    }

    /// Fetch one SVG, repair it, and reject it when the repaired text still
    /// fails the well-formedness check. Bumps the download counter only
    /// after the document validated.
    pub async fn preview(&self, id: &str) -> Result<String> {
        let raw = self.source.raw_svg(id).await?;
        let svg = normalize(&raw)?;

        if has_parser_error(&svg) {
            return Err(GalleryError::ParseValidationError {
                message: format!("document {} is not well-formed XML", id),
            });
        }

        self.bump_counter(id).await;
        Ok(svg)
    }

    /// Save the original SVG bytes as `<id>.svg`. The counter is bumped up
    /// front, before the transfer starts.
    pub async fn download_svg(&self, id: &str) -> Result<String> {
        self.bump_counter(id).await;

        let bytes = self.source.download(id).await?;
        let filename = format!("{}.svg", id);
        self.sink.save_file(&filename, &bytes).await?;

        tracing::info!("saved {} ({} bytes)", filename, bytes.len());
        Ok(filename)
    }

    /// Fetch, repair, rasterize, and save the result as `image-<id>.png`.
    pub async fn download_png(&self, id: &str) -> Result<String> {
        let raw = self.source.raw_svg(id).await?;
        let svg = normalize(&raw)?;
        let image = self.rasterizer.rasterize(&svg)?;

        let filename = format!("image-{}.png", id);
        self.sink.save_file(&filename, &image.png).await?;

        tracing::info!(
            "saved {} ({}x{}, {} bytes)",
            filename,
            image.width,
            image.height,
            image.png.len()
        );

        self.bump_counter(id).await;
        Ok(filename)
    }

    // Counter updates are best-effort; a failed hit must never fail the
    // operation that triggered it.
    async fn bump_counter(&self, id: &str) {
        if let Err(e) = self.source.hit(id).await {
            tracing::warn!("download counter update failed for {}: {}", id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    struct MockSource {
        svg: String,
        hits: AtomicU32,
        fail_hits: bool,
    }

    impl MockSource {
        fn new(svg: &str) -> Self {
            Self {
                svg: svg.to_string(),
                hits: AtomicU32::new(0),
                fail_hits: false,
            }
        }

        fn with_failing_hits(svg: &str) -> Self {
            Self {
                fail_hits: true,
                ..Self::new(svg)
            }
        }

        fn hit_count(&self) -> u32 {
            self.hits.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GallerySource for Arc<MockSource> {
        async fn list(&self) -> Result<Vec<GalleryEntry>> {
            Ok(vec![GalleryEntry {
                id: "abc".to_string(),
                name: "Sample".to_string(),
                thumb: "https://example.com/thumb/abc".to_string(),
                downloads: 3,
            }])
        }

        async fn raw_svg(&self, _id: &str) -> Result<String> {
            Ok(self.svg.clone())
        }

        async fn download(&self, _id: &str) -> Result<Vec<u8>> {
            Ok(self.svg.clone().into_bytes())
        }

        async fn hit(&self, _id: &str) -> Result<()> {
            if self.fail_hits {
                return Err(GalleryError::ApiRejectionError {
                    message: "counter backend down".to_string(),
                });
            }
            self.hits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct MockSink {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockSink {
        fn get_file(&self, name: &str) -> Option<Vec<u8>> {
            self.files.lock().unwrap().get(name).cloned()
        }
    }

    impl FileSink for MockSink {
        async fn save_file(&self, name: &str, data: &[u8]) -> Result<()> {
            self.files
                .lock()
                .unwrap()
                .insert(name.to_string(), data.to_vec());
            Ok(())
        }
    }

    const VALID_SVG: &str =
        r##"<svg width="100" height="50"><rect width="100" height="50" fill="#222"/></svg>"##;

    #[tokio::test]
    async fn test_preview_normalizes_and_bumps_counter() {
        let source = Arc::new(MockSource::new(VALID_SVG));
        let client = GalleryClient::new(source.clone(), MockSink::default());

        let svg = client.preview("abc").await.unwrap();

        assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
        assert_eq!(source.hit_count(), 1);
    }

    #[tokio::test]
    async fn test_preview_rejects_malformed_document_without_counting() {
        let source = Arc::new(MockSource::new("<svg><rect></svg>"));
        let client = GalleryClient::new(source.clone(), MockSink::default());

        let err = client.preview("abc").await.unwrap_err();

        assert!(matches!(err, GalleryError::ParseValidationError { .. }));
        assert_eq!(source.hit_count(), 0);
    }

    #[tokio::test]
    async fn test_preview_rejects_non_svg_content() {
        let source = Arc::new(MockSource::new("<html>nope</html>"));
        let client = GalleryClient::new(source.clone(), MockSink::default());

        let err = client.preview("abc").await.unwrap_err();

        assert!(matches!(err, GalleryError::MalformedInputError { .. }));
        assert_eq!(source.hit_count(), 0);
    }

    #[tokio::test]
    async fn test_download_svg_saves_bytes_and_counts_first() {
        let source = Arc::new(MockSource::new(VALID_SVG));
        let sink = MockSink::default();
        let client = GalleryClient::new(source.clone(), sink.clone());

        let filename = client.download_svg("abc").await.unwrap();

        assert_eq!(filename, "abc.svg");
        assert_eq!(sink.get_file("abc.svg").unwrap(), VALID_SVG.as_bytes());
        assert_eq!(source.hit_count(), 1);
    }

    #[tokio::test]
    async fn test_download_png_saves_encoded_image() {
        let source = Arc::new(MockSource::new(VALID_SVG));
        let sink = MockSink::default();
        let client = GalleryClient::new(source.clone(), sink.clone());

        let filename = client.download_png("abc").await.unwrap();

        assert_eq!(filename, "image-abc.png");
        let png = sink.get_file("image-abc.png").unwrap();
        assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
        assert_eq!(source.hit_count(), 1);
    }

    #[tokio::test]
    async fn test_download_png_fails_on_undecodable_svg_without_saving() {
        // Well-formed XML that usvg cannot load as an SVG document.
        let source = Arc::new(MockSource::new("<svg><bogus)(</svg>"));
        let sink = MockSink::default();
        let client = GalleryClient::new(source.clone(), sink.clone());

        let result = client.download_png("abc").await;

        assert!(result.is_err());
        assert!(sink.get_file("image-abc.png").is_none());
        assert_eq!(source.hit_count(), 0);
    }

    #[tokio::test]
    async fn test_hit_failures_are_swallowed() {
        let source = Arc::new(MockSource::with_failing_hits(VALID_SVG));
        let sink = MockSink::default();
        let client = GalleryClient::new(source.clone(), sink.clone());

        assert!(client.preview("abc").await.is_ok());
        assert!(client.download_svg("abc").await.is_ok());
        assert!(client.download_png("abc").await.is_ok());
    }

    #[tokio::test]
    async fn test_list_entries_passthrough() {
        let source = Arc::new(MockSource::new(VALID_SVG));
        let client = GalleryClient::new(source, MockSink::default());

        let entries = client.list_entries().await.unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "abc");
        assert_eq!(entries[0].downloads, 3);
    }
}
