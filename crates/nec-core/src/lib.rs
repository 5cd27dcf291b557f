//! # nec-core
//!
//! Core library for the NEC CLI providing:
//! - Runtime configuration with layered precedence (embedded, file, environment)
//! - Shared error type
//! - Home directory resolution

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use config::HierarchicalConfigLoader;
pub use error::{Error, Result};
pub use types::RuntimeConfig;
pub use utils::get_home_dir;
