// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level Notegraph configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NotegraphConfig {
    /// Triple store settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// RDF export settings.
    #[serde(default)]
    pub export: ExportConfig,
}

/// Triple store settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Directory for the persistent store. Defaults to
    /// `<XDG data dir>/notegraph/store` when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    /// Resolve the effective store directory.
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_store_path)
    }
}

/// RDF export settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Default directory for exported RDF files. Defaults to
    /// `<XDG data dir>/notegraph/exports` when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl ExportConfig {
    /// Resolve the effective export directory.
    pub fn resolved_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(default_export_dir)
    }
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("notegraph")
}

fn default_store_path() -> PathBuf {
    data_dir().join("store")
}

fn default_export_dir() -> PathBuf {
    data_dir().join("exports")
}
