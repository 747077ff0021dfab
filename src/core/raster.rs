use crate::domain::model::RasterImage;
use crate::utils::error::{GalleryError, Result};
use resvg::{tiny_skia, usvg};
use std::sync::LazyLock;

static OPTIONS: LazyLock<usvg::Options<'static>> = LazyLock::new(|| {
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();

    usvg::Options {
        fontdb: std::sync::Arc::new(fontdb),
        ..usvg::Options::default()
    }
});

/// Renders normalized SVG text to an encoded PNG at the document's
/// intrinsic pixel size.
#[derive(Debug, Default)]
pub struct Rasterizer;

impl Rasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Decode the SVG, draw it unscaled onto a surface matching its
    /// intrinsic size, and encode the surface as PNG. All intermediate
    /// resources are owned locals, so they are released on every exit path.
    pub fn rasterize(&self, svg_text: &str) -> Result<RasterImage> {
        let tree = usvg::Tree::from_str(svg_text, &OPTIONS).map_err(|e| {
            GalleryError::ImageDecodeError {
                message: e.to_string(),
            }
        })?;

        let size = tree.size();
        let width = size.width().ceil() as u32;
        let height = size.height().ceil() as u32;

        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            GalleryError::ImageDecodeError {
                message: format!("cannot allocate a {}x{} raster surface", width, height),
            }
        })?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        let png = pixmap
            .encode_png()
            .map_err(|e| GalleryError::EncodeError {
                message: e.to_string(),
            })?;

        tracing::debug!("rasterized SVG to {}x{} PNG ({} bytes)", width, height, png.len());

        Ok(RasterImage { width, height, png })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

    #[test]
    fn test_rasterize_uses_intrinsic_size() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50"><rect width="100" height="50" fill="#336699"/></svg>"##;
        let image = Rasterizer::new().rasterize(svg).unwrap();
        assert_eq!(image.width, 100);
        assert_eq!(image.height, 50);
        assert!(image.png.starts_with(&PNG_SIGNATURE));
    }

    #[test]
    fn test_rasterize_rejects_undecodable_input() {
        let err = Rasterizer::new().rasterize("definitely not svg").unwrap_err();
        assert!(matches!(err, GalleryError::ImageDecodeError { .. }));
    }

    #[test]
    fn test_rasterize_rounds_fractional_sizes_up() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10.4" height="20.6"><rect width="10" height="20"/></svg>"#;
        let image = Rasterizer::new().rasterize(svg).unwrap();
        assert_eq!(image.width, 11);
        assert_eq!(image.height, 21);
    }
}
