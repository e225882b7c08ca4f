pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::catalog_file::CatalogFile;
pub use crate::core::{catalog::Catalog, render::OutputFormat, Renderer};
pub use domain::advanced_phone::AdvancedPhone;
pub use domain::device::{Device, Purpose};
pub use domain::media_player::MediaPlayer;
pub use domain::model::DeviceEntry;
pub use domain::phone::Phone;
pub use domain::tablet::Tablet;
pub use utils::error::{CatalogError, Result};
