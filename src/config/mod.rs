//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//! - `${VAR}` interpolation in [`interpolation`]
//! - `.env` parsing in [`env_file`]
//!
//! # Example
//!
//! ```
//! use preflight::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".preflight");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "app_name: test").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.app_name, Some("test".to_string()));
//! ```

pub mod env_file;
pub mod interpolation;
pub mod loader;
pub mod schema;
pub mod validator;

pub use env_file::EnvFileParser;
pub use interpolation::{extract_variables, parse_interpolation, resolve_with, Segment};
pub use loader::{
    default_config_path, find_project_root, load_config, load_config_file, parse_config,
    CONFIG_DIR, CONFIG_FILE,
};
pub use schema::{
    CheckConfig, CheckKindConfig, PreflightConfig, SectionConfig, Settings, SummaryConfig,
};
pub use validator::{validate, validate_config, ValidationError};
