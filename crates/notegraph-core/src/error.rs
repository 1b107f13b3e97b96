// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Notegraph knowledge graph.

use thiserror::Error;

/// The primary error type used across all Notegraph crates.
#[derive(Debug, Error)]
pub enum NotegraphError {
    /// Configuration errors (invalid TOML, unsupported RDF format name).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage engine errors (corrupt store, failed transaction, bad IRI).
    #[error("store error: {source}")]
    Store {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// SPARQL evaluation errors (malformed query or update).
    #[error("query error: {0}")]
    Query(String),

    /// Input parsing errors (unreadable email message, bad RDF payload).
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O errors on import/export paths.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl NotegraphError {
    /// Wrap an arbitrary engine-level error as a store error.
    pub fn store(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        NotegraphError::Store {
            source: Box::new(source),
        }
    }
}
