//! Shared types for the product catalog client.
//!
//! Holds the canonical product model, the list/detail result shapes, the
//! negotiated wire format, and environment configuration. No HTTP lives here;
//! see `prodcat-client` for the transport and normalization layer.

pub mod app_config;
pub mod config;
pub mod format;
pub mod products;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use format::Format;
pub use products::{DetailResult, ListResult, Product, ProductId};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
