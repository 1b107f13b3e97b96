// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`KnowledgeStore`] façade over an embedded Oxigraph store.
//!
//! All graph access goes through this type: callers hand it domain triples
//! and SPARQL strings and get plain Rust values back. Engine types never
//! leak past this module.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use notegraph_core::{vocab, NotegraphError};
use notegraph_extract::{Term, Triple};
use oxigraph::model::vocab::xsd;
use oxigraph::model::{GraphNameRef, Literal, NamedNode, Quad, Subject, Term as OxTerm};
use oxigraph::sparql::QueryResults;
use oxigraph::store::Store;

use crate::format::RdfSerialization;
use crate::ontology::ONTOLOGY_SOURCES;

/// One row of a SELECT result: variable name to plain value.
pub type SolutionRow = HashMap<String, String>;

/// Result of an arbitrary SPARQL query, shaped by the query form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// SELECT: one row per solution.
    Solutions(Vec<SolutionRow>),
    /// ASK.
    Boolean(bool),
    /// CONSTRUCT or DESCRIBE.
    Triples(Vec<Triple>),
}

/// Embedded triple store holding the knowledge graph.
pub struct KnowledgeStore {
    store: Store,
}

impl KnowledgeStore {
    /// Opens (or creates) a persistent store at `path` and makes sure the
    /// bundled ontology is present.
    pub fn open(path: &Path) -> Result<Self, NotegraphError> {
        let store = Store::open(path).map_err(NotegraphError::store)?;
        let ks = Self { store };
        ks.ensure_ontology()?;
        tracing::info!(path = %path.display(), "opened knowledge store");
        Ok(ks)
    }

    /// Opens an in-memory store, mainly for tests and scratch sessions.
    pub fn open_in_memory() -> Result<Self, NotegraphError> {
        let store = Store::new().map_err(NotegraphError::store)?;
        let ks = Self { store };
        ks.ensure_ontology()?;
        Ok(ks)
    }

    /// Loads the bundled ontology documents unless the schema is already in
    /// the graph. Safe to call repeatedly.
    pub fn ensure_ontology(&self) -> Result<(), NotegraphError> {
        let ng_note = named_node(&vocab::ng("Note"))?;
        let rdf_type = named_node(vocab::RDF_TYPE)?;
        let mut existing = self.store.quads_for_pattern(
            Some(ng_note.as_ref().into()),
            Some(rdf_type.as_ref()),
            None,
            None,
        );
        match existing.next() {
            Some(Ok(_)) => return Ok(()),
            Some(Err(e)) => return Err(NotegraphError::store(e)),
            None => {}
        }
        for (name, turtle) in ONTOLOGY_SOURCES {
            self.store
                .load_from_reader(oxigraph::io::RdfFormat::Turtle, turtle.as_bytes())
                .map_err(NotegraphError::store)?;
            tracing::info!(file = name, "loaded ontology document");
        }
        Ok(())
    }

    /// Inserts domain triples into the default graph. Returns how many were
    /// handed to the engine; duplicates are absorbed silently.
    pub fn insert(&self, triples: &[Triple]) -> Result<usize, NotegraphError> {
        let mut quads = Vec::with_capacity(triples.len());
        for triple in triples {
            quads.push(to_quad(triple)?);
        }
        let count = quads.len();
        self.store.extend(quads).map_err(NotegraphError::store)?;
        tracing::debug!(count, "inserted triples");
        Ok(count)
    }

    /// Removes every triple matching the given pattern. `None` in a position
    /// is a wildcard; all-`None` wipes the graph, ontology included.
    pub fn remove_matching(
        &self,
        subject: Option<&str>,
        predicate: Option<&str>,
        object: Option<&Term>,
    ) -> Result<usize, NotegraphError> {
        let subject = subject.map(named_node).transpose()?;
        let predicate = predicate.map(named_node).transpose()?;
        let object = object.map(to_object).transpose()?;

        let matched: Vec<Quad> = self
            .store
            .quads_for_pattern(
                subject.as_ref().map(|n| n.as_ref().into()),
                predicate.as_ref().map(|n| n.as_ref()),
                object.as_ref().map(|t| t.as_ref()),
                None,
            )
            .collect::<Result<_, _>>()
            .map_err(NotegraphError::store)?;
        for quad in &matched {
            self.store.remove(quad).map_err(NotegraphError::store)?;
        }
        tracing::debug!(count = matched.len(), "removed triples");
        Ok(matched.len())
    }

    /// Runs a SELECT query and flattens each solution into string values:
    /// IRIs keep their full form, literals lose datatype and language tag.
    pub fn select(&self, sparql: &str) -> Result<Vec<SolutionRow>, NotegraphError> {
        match self.query(sparql)? {
            QueryOutcome::Solutions(rows) => Ok(rows),
            _ => Err(NotegraphError::Query(
                "expected a SELECT query".to_string(),
            )),
        }
    }

    /// Runs any read-only SPARQL query.
    pub fn query(&self, sparql: &str) -> Result<QueryOutcome, NotegraphError> {
        let results = self
            .store
            .query(sparql)
            .map_err(|e| NotegraphError::Query(e.to_string()))?;
        match results {
            QueryResults::Solutions(solutions) => {
                let mut rows = Vec::new();
                for solution in solutions {
                    let solution =
                        solution.map_err(|e| NotegraphError::Query(e.to_string()))?;
                    let mut row = SolutionRow::new();
                    for (variable, term) in solution.iter() {
                        row.insert(variable.as_str().to_string(), term_value(term));
                    }
                    rows.push(row);
                }
                Ok(QueryOutcome::Solutions(rows))
            }
            QueryResults::Boolean(value) => Ok(QueryOutcome::Boolean(value)),
            QueryResults::Graph(triples) => {
                let mut out = Vec::new();
                for triple in triples {
                    let triple =
                        triple.map_err(|e| NotegraphError::Query(e.to_string()))?;
                    out.push(Triple {
                        subject: subject_value(&triple.subject),
                        predicate: triple.predicate.as_str().to_string(),
                        object: from_object(&triple.object),
                    });
                }
                Ok(QueryOutcome::Triples(out))
            }
        }
    }

    /// Runs a SPARQL update (INSERT DATA, DELETE WHERE, ...).
    pub fn update(&self, sparql: &str) -> Result<(), NotegraphError> {
        self.store
            .update(sparql)
            .map_err(|e| NotegraphError::Query(e.to_string()))
    }

    /// Bulk-loads serialized RDF, returning how many triples the store
    /// gained. Parse failures reject the whole payload.
    pub fn bulk_load(
        &self,
        data: &str,
        format: RdfSerialization,
    ) -> Result<usize, NotegraphError> {
        let before = self.count_triples()?;
        self.store
            .bulk_loader()
            .load_from_reader(format.engine_format(), data.as_bytes())
            .map_err(|e| NotegraphError::Parse(format!("RDF load failed: {e}")))?;
        let after = self.count_triples()?;
        tracing::info!(
            format = format.name(),
            added = after.saturating_sub(before),
            "bulk-loaded RDF"
        );
        Ok(after.saturating_sub(before))
    }

    /// Imports an RDF file from disk.
    pub fn import_file(
        &self,
        path: &Path,
        format: RdfSerialization,
    ) -> Result<usize, NotegraphError> {
        let before = self.count_triples()?;
        let reader = BufReader::new(File::open(path)?);
        self.store
            .load_from_reader(format.engine_format(), reader)
            .map_err(|e| {
                NotegraphError::Parse(format!("import of {} failed: {e}", path.display()))
            })?;
        let after = self.count_triples()?;
        tracing::info!(
            path = %path.display(),
            format = format.name(),
            added = after.saturating_sub(before),
            "imported RDF file"
        );
        Ok(after.saturating_sub(before))
    }

    /// Serializes the whole graph into a string.
    pub fn export(&self, format: RdfSerialization) -> Result<String, NotegraphError> {
        let bytes = self.dump(format)?;
        String::from_utf8(bytes)
            .map_err(|e| NotegraphError::Internal(format!("export was not UTF-8: {e}")))
    }

    /// Serializes the whole graph into a file.
    pub fn export_to_file(
        &self,
        format: RdfSerialization,
        path: &Path,
    ) -> Result<(), NotegraphError> {
        let bytes = self.dump(format)?;
        std::fs::write(path, bytes)?;
        tracing::info!(path = %path.display(), format = format.name(), "exported graph");
        Ok(())
    }

    fn dump(&self, format: RdfSerialization) -> Result<Vec<u8>, NotegraphError> {
        let mut buffer = Vec::new();
        if format.is_dataset() {
            self.store
                .dump_to_writer(format.engine_format(), &mut buffer)
                .map_err(NotegraphError::store)?;
        } else {
            self.store
                .dump_graph_to_writer(
                    GraphNameRef::DefaultGraph,
                    format.engine_format(),
                    &mut buffer,
                )
                .map_err(NotegraphError::store)?;
        }
        Ok(buffer)
    }

    /// Total triple count, ontology included.
    pub fn count_triples(&self) -> Result<usize, NotegraphError> {
        self.store.len().map_err(NotegraphError::store)
    }

    /// Wipes the graph and reloads the bundled ontology.
    pub fn clear(&self) -> Result<(), NotegraphError> {
        self.store.clear().map_err(NotegraphError::store)?;
        tracing::warn!("cleared knowledge store");
        self.ensure_ontology()
    }
}

fn named_node(iri: &str) -> Result<NamedNode, NotegraphError> {
    NamedNode::new(iri)
        .map_err(|e| NotegraphError::Parse(format!("invalid IRI '{iri}': {e}")))
}

fn to_quad(triple: &Triple) -> Result<Quad, NotegraphError> {
    Ok(Quad::new(
        named_node(&triple.subject)?,
        named_node(&triple.predicate)?,
        to_object(&triple.object)?,
        GraphNameRef::DefaultGraph,
    ))
}

fn to_object(term: &Term) -> Result<OxTerm, NotegraphError> {
    Ok(match term {
        Term::Resource(iri) => named_node(iri)?.into(),
        Term::Text(value) => Literal::new_simple_literal(value).into(),
        Term::TypedText(value, datatype) => {
            Literal::new_typed_literal(value, named_node(datatype)?).into()
        }
    })
}

fn from_object(term: &OxTerm) -> Term {
    match term {
        OxTerm::NamedNode(node) => Term::Resource(node.as_str().to_string()),
        OxTerm::Literal(literal) => literal_term(literal),
        other => Term::Text(other.to_string()),
    }
}

fn literal_term(literal: &Literal) -> Term {
    if literal.language().is_some() || literal.datatype() == xsd::STRING {
        Term::Text(literal.value().to_string())
    } else {
        Term::TypedText(
            literal.value().to_string(),
            literal.datatype().as_str().to_string(),
        )
    }
}

fn subject_value(subject: &Subject) -> String {
    match subject {
        Subject::NamedNode(node) => node.as_str().to_string(),
        other => other.to_string(),
    }
}

fn term_value(term: &OxTerm) -> String {
    match term {
        OxTerm::NamedNode(node) => node.as_str().to_string(),
        OxTerm::Literal(literal) => literal.value().to_string(),
        other => other.to_string(),
    }
}
