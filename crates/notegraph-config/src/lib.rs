// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for Notegraph.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, and environment
//! variable overrides via the `NOTEGRAPH_` prefix.

pub mod loader;
pub mod model;

pub use loader::{load_config, load_config_from_str};
pub use model::{ExportConfig, NotegraphConfig, StoreConfig};
