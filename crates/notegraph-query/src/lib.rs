// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Derived operations over the knowledge graph.
//!
//! Everything here takes a [`notegraph_store::KnowledgeStore`] reference,
//! so callers (and tests) control the store's lifetime and location. The
//! read side reconstructs entities from triples; the write side parses,
//! extracts and inserts, or removes by pattern.

pub mod notes;
pub mod ops;
pub mod search;
pub mod sparql;

pub use notes::{get_note, update_note, NotePatch, UpdateOutcome};
pub use ops::{
    add_bookmark, add_note, add_project, clear_all, delete_bookmark, delete_note,
    ingest_email, ingest_markdown, ingest_markdown_file, AddOutcome, ClearOutcome,
    DeleteOutcome,
};
pub use search::{
    related_notes, search, stats, GraphStats, RelatedNote, SearchFilter, SearchHit,
    SearchKind,
};
