//! Runtime configuration types
//!
//! These types control behavior that users may want to tune without
//! recompiling: the branch git starts on, whether the welcome banner
//! plays, and how long the exit acknowledgment lingers.

use serde::{Deserialize, Serialize};

/// Complete runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct RuntimeConfig {
    /// Git initialization defaults
    #[serde(default)]
    pub git: GitConfig,

    /// Display and output settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Exit acknowledgment settings
    #[serde(default)]
    pub exit: ExitConfig,
}

/// Git initialization configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct GitConfig {
    /// Branch name passed to `git init --initial-branch`
    #[serde(default = "default_git_branch")]
    pub default_branch: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            default_branch: default_git_branch(),
        }
    }
}

fn default_git_branch() -> String {
    "main".to_string()
}

/// Display and output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct DisplayConfig {
    /// Play the animated welcome banner
    #[serde(default = "default_banner")]
    pub banner: bool,

    /// How long the banner animates, in milliseconds
    #[serde(default = "default_banner_duration")]
    pub banner_duration_ms: u64,

    /// Enable colored output
    #[serde(default = "default_color_enabled")]
    pub color_enabled: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            banner: default_banner(),
            banner_duration_ms: default_banner_duration(),
            color_enabled: default_color_enabled(),
        }
    }
}

fn default_banner() -> bool {
    true
}
fn default_banner_duration() -> u64 {
    2000
}
fn default_color_enabled() -> bool {
    true
}

/// Exit acknowledgment configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ExitConfig {
    /// Pause after printing "Exiting..." before the process terminates
    #[serde(default = "default_exit_delay")]
    pub delay_ms: u64,
}

impl Default for ExitConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_exit_delay(),
        }
    }
}

fn default_exit_delay() -> u64 {
    250
}
