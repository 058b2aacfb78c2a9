//! Core contracts and helpers for wordsmith.
//!
//! This crate defines the profile record, option flags, and generator
//! configuration shared by the generation engine and the CLI, together with
//! the validation rules applied before any candidate is assembled.

pub mod config;
pub mod error;
pub mod options;
pub mod profile;

pub use config::{GeneratorConfig, LeetTable, LengthBounds, NumericRange};
pub use error::{Error, Result};
pub use options::{ImproveOptions, OptionFlags};
pub use profile::{ProfileRecord, is_valid_birthdate, parse_keywords};

/// Environment variable consulted for a configuration path.
pub const CONFIG_ENV_VAR: &str = "WORDSMITH_CONFIG";

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "wordsmith.toml";
