// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entity-to-triple mapping for the Notegraph ontology.
//!
//! Pure functions from canonical entity records to lists of RDF triples.
//! Nothing here touches the store: the extractor emits an ordered triple
//! list and the caller hands it to `notegraph-store` for insertion.

pub mod term;
pub mod triples;

pub use term::{Term, Triple};
pub use triples::{extract_bookmark_triples, extract_note_triples, extract_project_triples};
