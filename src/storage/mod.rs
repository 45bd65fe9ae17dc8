//! # Storage Layer
//!
//! Reads configuration and seed files. Library state itself is never written
//! back: each run starts from a seed.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Project config | TOML | `shelf.toml` (nearest ancestor directory) |
//! | Global config | TOML | `~/.config/shelf/config.toml` |
//! | Seed | TOML | `--seed <path>` or `seed = ...` in `shelf.toml` |
//!
//! ## Key Types
//!
//! - [`Config`] - Project and global configuration
//! - [`Seed`] - Catalog and roster contents a library is built from

mod config;
mod seed;

pub use config::{
    validate_date_format, Config, ConfigError, GlobalConfig, OutputFormat, ProjectConfig,
    PROJECT_CONFIG_FILE,
};
pub use seed::{Seed, SeedError, SeedItem, SeedMember};
