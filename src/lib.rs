pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::server::{create_router, AppState};
pub use config::{cli::LocalAssets, ServerSettings};
pub use core::profile::calculate;
pub use utils::error::{AstroError, Result};
