//! Core utilities for the matcha spot discovery tools
//!
//! This crate provides shared functionality used by every other crate:
//!
//! - **Error handling**: Coded errors with context and recovery suggestions
//! - **Configuration**: TOML-based city, map and submission settings
//! - **Validation**: Fluent field validation for forms and configuration
//!
//! # Example
//!
//! ```rust,no_run
//! use matcha_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! println!("Hunting matcha in {}", config.schema.city.name);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod validation;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::validation::{ValidationResult, Validator};
}
