pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalSink, CliConfig, GalleryCommand};
pub use config::toml_config::TomlConfig;

pub use adapters::http::HttpGallerySource;
pub use core::gallery::GalleryClient;
pub use core::normalize::{has_parser_error, normalize};
pub use core::raster::Rasterizer;
pub use utils::error::{GalleryError, Result};
