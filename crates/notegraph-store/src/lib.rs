// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage layer for Notegraph: an embedded Oxigraph triple store behind a
//! small façade, plus the bundled ontology it bootstraps itself with.

pub mod format;
pub mod ontology;
pub mod store;

pub use format::RdfSerialization;
pub use ontology::{ontology_summary, ontology_turtle};
pub use store::{KnowledgeStore, QueryOutcome, SolutionRow};
