// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Title search, one-hop relatedness, and graph statistics.

use std::collections::BTreeMap;

use notegraph_core::ids::{make_note_uri, slugify};
use notegraph_core::vocab::{self, strip_ng};
use notegraph_core::NotegraphError;
use notegraph_store::KnowledgeStore;

use crate::sparql::escape_literal;

/// Coarse entity kind filter for [`search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Anything typed other than `ng:Bookmark` or `ng:Concept`.
    Note,
    Bookmark,
}

/// Optional restrictions applied by [`search`].
#[derive(Debug, Clone)]
pub struct SearchFilter {
    pub kind: Option<SearchKind>,
    /// Exact tag membership (the tag's display label).
    pub tag: Option<String>,
    pub limit: usize,
}

impl Default for SearchFilter {
    fn default() -> Self {
        SearchFilter {
            kind: None,
            tag: None,
            limit: 20,
        }
    }
}

/// One search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub uri: String,
    pub title: String,
    /// Short type name (`ng:` prefix form for core classes).
    pub kind: String,
}

/// One relatedness result: a note plus the relation that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedNote {
    pub uri: String,
    pub title: String,
    pub relation: String,
}

/// Graph-wide statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStats {
    pub total_triples: usize,
    /// Entity count per type, keyed by the shortened type name.
    pub entity_counts: BTreeMap<String, usize>,
}

/// Case-insensitive substring search over entity titles. Concept (tag)
/// resources never appear in results.
pub fn search(
    store: &KnowledgeStore,
    query: &str,
    filter: &SearchFilter,
) -> Result<Vec<SearchHit>, NotegraphError> {
    let needle = escape_literal(query);
    let concept = vocab::ng("Concept");
    let bookmark = vocab::ng("Bookmark");

    let mut clauses = String::new();
    match filter.kind {
        Some(SearchKind::Note) => {
            clauses.push_str(&format!("  FILTER(?type != <{bookmark}>)\n"));
        }
        Some(SearchKind::Bookmark) => {
            clauses.push_str(&format!("  FILTER(?type = <{bookmark}>)\n"));
        }
        None => {}
    }
    if let Some(tag) = &filter.tag {
        clauses.push_str(&format!(
            "  ?s <{has_tag}> ?tagConcept .\n  ?tagConcept <{title}> \"{label}\" .\n",
            has_tag = vocab::ng("hasTag"),
            title = vocab::ng("title"),
            label = escape_literal(tag),
        ));
    }

    let sparql = format!(
        r#"SELECT DISTINCT ?s ?title ?type WHERE {{
  ?s <{title_pred}> ?title .
  ?s <{rdf_type}> ?type .
  FILTER(CONTAINS(LCASE(?title), LCASE("{needle}")))
  FILTER(?type != <{concept}>)
{clauses}}}"#,
        title_pred = vocab::ng("title"),
        rdf_type = vocab::RDF_TYPE,
    );

    let mut hits = Vec::new();
    for row in store.select(&sparql)? {
        if hits.len() >= filter.limit {
            break;
        }
        let (Some(uri), Some(title), Some(kind)) =
            (row.get("s"), row.get("title"), row.get("type"))
        else {
            continue;
        };
        // Dual-typed entities (e.g. projects) produce one row per type;
        // keep the first.
        if hits.iter().any(|h: &SearchHit| &h.uri == uri) {
            continue;
        }
        hits.push(SearchHit {
            uri: uri.clone(),
            title: title.clone(),
            kind: shorten_type(kind),
        });
    }
    tracing::debug!(query, hits = hits.len(), "title search");
    Ok(hits)
}

/// One-hop relatedness: the union of shared-tag, outgoing-link,
/// incoming-link, same-project and same-area neighbours of the note with
/// the given title, each labelled with its relation.
pub fn related_notes(
    store: &KnowledgeStore,
    title: &str,
    limit: usize,
) -> Result<Vec<RelatedNote>, NotegraphError> {
    let source = make_note_uri(&slugify(title));
    let sparql = format!(
        r#"SELECT DISTINCT ?related ?relTitle ?relType WHERE {{
  BIND(<{source}> AS ?source)
  {{
    ?source <{has_tag}> ?tag .
    ?related <{has_tag}> ?tag .
    BIND("shared_tag" AS ?relType)
  }} UNION {{
    ?source <{links_to}> ?related .
    BIND("links_to" AS ?relType)
  }} UNION {{
    ?related <{links_to}> ?source .
    BIND("linked_from" AS ?relType)
  }} UNION {{
    ?source <{in_project}> ?proj .
    ?related <{in_project}> ?proj .
    BIND("same_project" AS ?relType)
  }} UNION {{
    ?source <{in_area}> ?area .
    ?related <{in_area}> ?area .
    BIND("same_area" AS ?relType)
  }}
  ?related <{title_pred}> ?relTitle .
  FILTER(?related != ?source)
}}
LIMIT {limit}"#,
        has_tag = vocab::ng("hasTag"),
        links_to = vocab::ng("linksTo"),
        in_project = vocab::ng("belongsToProject"),
        in_area = vocab::ng("belongsToArea"),
        title_pred = vocab::ng("title"),
    );

    let mut related = Vec::new();
    for row in store.select(&sparql)? {
        let (Some(uri), Some(rel_title), Some(relation)) =
            (row.get("related"), row.get("relTitle"), row.get("relType"))
        else {
            continue;
        };
        related.push(RelatedNote {
            uri: uri.clone(),
            title: rel_title.clone(),
            relation: relation.clone(),
        });
    }
    Ok(related)
}

/// Total triple count plus a per-type entity histogram.
pub fn stats(store: &KnowledgeStore) -> Result<GraphStats, NotegraphError> {
    let total_triples = store.count_triples()?;
    let sparql = format!(
        "SELECT ?type (COUNT(?s) AS ?count) WHERE {{ ?s <{}> ?type }} GROUP BY ?type",
        vocab::RDF_TYPE
    );
    let mut entity_counts = BTreeMap::new();
    for row in store.select(&sparql)? {
        let (Some(kind), Some(count)) = (row.get("type"), row.get("count")) else {
            continue;
        };
        let count = count.parse::<usize>().unwrap_or(0);
        entity_counts.insert(shorten_type(kind), count);
    }
    Ok(GraphStats {
        total_triples,
        entity_counts,
    })
}

fn shorten_type(iri: &str) -> String {
    match strip_ng(iri) {
        Some(local) => format!("ng:{local}"),
        None => iri.to_string(),
    }
}
