pub mod gallery;
pub mod normalize;
pub mod raster;

pub use crate::domain::model::{GalleryEntry, RasterImage};
pub use crate::domain::ports::{ConfigProvider, FileSink, GallerySource};
pub use crate::utils::error::Result;
