//! Configuration types shared across NEC crates

mod runtime_config;

pub use runtime_config::{DisplayConfig, ExitConfig, GitConfig, RuntimeConfig};
