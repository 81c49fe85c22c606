pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};
pub use config::{toml_config::TomlConfig, AppConfig};

pub use adapters::{
    http::HttpLiturgyApi, notifier::NotificationCenter, storage::LocalStorage,
    surfaces::MemorySurfaces,
};
pub use crate::core::{
    display::{render, DisplayState},
    export::export_as_text,
    loader::{LiturgyLoader, LoadOutcome},
    preview::{apply_preview, compute_preview},
};
pub use domain::model::{CustomizationOptions, LiturgyRecord, Notification, PreviewStyle, Severity};
pub use utils::error::{LiturgiaError, Result};
