// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Gallery(gallery::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional catalog manifest; takes precedence over `[gallery] catalog_path`.
    pub catalog_path: Option<PathBuf>,
    /// Forces the legacy forward wrap regardless of the config.
    pub legacy_wrap: bool,
    /// Optional data directory override.
    /// Takes precedence over `ART_SPACE_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ART_SPACE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
