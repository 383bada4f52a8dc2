//! Conversion-banner decision core.
//!
//! Classifies visitor intent from the request path and page title, resolves
//! the copy variant for that intent with per-page overrides applied,
//! substitutes location tokens, and derives dialable CTA hrefs. Pure and
//! request-scoped throughout; the only I/O is loading configuration and the
//! page registry at startup.

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod content;
pub mod intent;
pub mod location;
pub mod meta;
pub mod pages;
pub mod phone;
pub mod pipeline;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use content::{resolve, ContentField, ContentRecord, PageOverride};
pub use intent::{classify, Intent};
pub use location::{display_phone, LocationProvider, NullLocation, StaticLocation};
pub use meta::PageMeta;
pub use pages::{load_pages, PageEntry, PageRegistry};
pub use phone::to_dial_href;
pub use pipeline::{Decision, Engine, PageRequest, RequestFlags, STICKY_BODY_CLASS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read pages file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse pages file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid pages file: {0}")]
    Validation(String),
}
