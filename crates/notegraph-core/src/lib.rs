// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Notegraph knowledge graph.
//!
//! This crate provides the entity models (notes, bookmarks, projects), the
//! deterministic identifier generator, the fixed ontology vocabulary, and the
//! error type shared by every Notegraph crate. It has no engine dependency:
//! persistence lives behind the `notegraph-store` façade.

pub mod error;
pub mod ids;
pub mod models;
pub mod vocab;

pub use error::NotegraphError;
pub use ids::{
    dedup_preserve, make_area_uri, make_bookmark_uri, make_concept_uri, make_note_uri,
    make_person_uri, make_project_uri, now_iso, slugify,
};
pub use models::{Bookmark, Note, NoteType, Project, Status};
