pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::router;
pub use config::{ServerConfig, Settings};
pub use crate::core::{Element, ElementCatalog, ElementRepository, Isotope};
pub use utils::error::{ApiError, Result};
