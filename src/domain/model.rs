use serde::{Deserialize, Serialize};

/// One row of the backend's gallery listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub id: String,
    pub name: String,
    pub thumb: String,
    #[serde(default)]
    pub downloads: u64,
}

/// Encoded raster produced from an SVG document. Pixel dimensions are the
/// SVG's intrinsic size, never a guessed viewport.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}
