//! Configuration, loaded from `hail.toml` when present.

mod app_config;

pub use app_config::HailConfig;
