// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Small helpers for building SPARQL queries safely.

use notegraph_core::{vocab, NotegraphError};
use notegraph_store::KnowledgeStore;

/// Escapes a string for use inside a double-quoted SPARQL literal.
pub fn escape_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Last path segment of an IRI, used as a display fallback for resources
/// that carry no title triple (e.g. dangling wikilink targets).
pub fn trailing_segment(iri: &str) -> &str {
    iri.rsplit('/').next().unwrap_or(iri)
}

/// First object value for `(subject, predicate)`, if any.
pub fn lookup_first(
    store: &KnowledgeStore,
    subject: &str,
    predicate: &str,
) -> Result<Option<String>, NotegraphError> {
    let rows = store.select(&format!(
        "SELECT ?o WHERE {{ <{subject}> <{predicate}> ?o }} LIMIT 1"
    ))?;
    Ok(rows.into_iter().next().and_then(|mut row| row.remove("o")))
}

/// Display label for a resource IRI: its `ng:title` when present, otherwise
/// the trailing path segment.
pub fn resolve_label(store: &KnowledgeStore, iri: &str) -> Result<String, NotegraphError> {
    match lookup_first(store, iri, &vocab::ng("title"))? {
        Some(title) => Ok(title),
        None => Ok(trailing_segment(iri).to_string()),
    }
}

/// Display name for a person IRI: `foaf:name` when present, otherwise the
/// trailing path segment.
pub fn resolve_person_name(
    store: &KnowledgeStore,
    iri: &str,
) -> Result<String, NotegraphError> {
    match lookup_first(store, iri, &vocab::foaf("name"))? {
        Some(name) => Ok(name),
        None => Ok(trailing_segment(iri).to_string()),
    }
}
