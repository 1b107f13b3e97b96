// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./notegraph.toml` >
//! `~/.config/notegraph/notegraph.toml` > `/etc/notegraph/notegraph.toml`,
//! with environment variable overrides via the `NOTEGRAPH_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::NotegraphConfig;

/// Load configuration from the standard XDG hierarchy with env overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/notegraph/notegraph.toml` (system-wide)
/// 3. `~/.config/notegraph/notegraph.toml` (user XDG config)
/// 4. `./notegraph.toml` (local directory)
/// 5. `NOTEGRAPH_*` environment variables
pub fn load_config() -> Result<NotegraphConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NotegraphConfig::default()))
        .merge(Toml::file("/etc/notegraph/notegraph.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("notegraph/notegraph.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("notegraph.toml"))
        .merge(Env::prefixed("NOTEGRAPH_").split("_"))
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<NotegraphConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NotegraphConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}
