// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The tagged RDF term representation used by the extractor.
//!
//! Objects are either identified resources, plain text literals, or typed
//! literals. Modeling this as an enum (rather than stringly-typed values)
//! is what enforces the known-vs-freeform status rule and the
//! creator-as-resource-vs-literal rule at the type level.

use serde::{Deserialize, Serialize};

/// An RDF object position value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    /// An identified resource (IRI).
    Resource(String),
    /// A plain text literal.
    Text(String),
    /// A literal with an explicit datatype IRI.
    TypedText(String, String),
}

impl Term {
    /// The lexical value: IRI for resources, literal text otherwise.
    pub fn value(&self) -> &str {
        match self {
            Term::Resource(iri) => iri,
            Term::Text(s) => s,
            Term::TypedText(s, _) => s,
        }
    }

    /// Whether this term is an identified resource.
    pub fn is_resource(&self) -> bool {
        matches!(self, Term::Resource(_))
    }
}

/// A subject–predicate–object fact in the default graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple {
    /// Subject IRI.
    pub subject: String,
    /// Predicate IRI.
    pub predicate: String,
    /// Object term.
    pub object: Term,
}

impl Triple {
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: Term) -> Self {
        Triple {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}
