// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! RDF serialization formats accepted by import and export operations.

use notegraph_core::NotegraphError;
use oxigraph::io::RdfFormat;

/// A concrete RDF serialization, resolved from a user-supplied name before
/// any engine call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfSerialization {
    Turtle,
    NTriples,
    NQuads,
    TriG,
    RdfXml,
}

impl RdfSerialization {
    /// Resolves a format name, accepting the common aliases for each
    /// serialization. Unknown names are rejected here so the caller gets a
    /// clear configuration error instead of an engine failure.
    pub fn parse(name: &str) -> Result<Self, NotegraphError> {
        let folded = name.trim().to_ascii_lowercase();
        match folded.as_str() {
            "turtle" | "ttl" => Ok(Self::Turtle),
            "ntriples" | "n-triples" | "nt" => Ok(Self::NTriples),
            "nquads" | "n-quads" | "nq" => Ok(Self::NQuads),
            "trig" => Ok(Self::TriG),
            "rdfxml" | "rdf-xml" | "xml" => Ok(Self::RdfXml),
            _ => Err(NotegraphError::Config(format!(
                "unsupported RDF format '{name}' (expected turtle, ntriples, nquads, trig or rdfxml)"
            ))),
        }
    }

    /// Canonical name, suitable for logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Turtle => "turtle",
            Self::NTriples => "ntriples",
            Self::NQuads => "nquads",
            Self::TriG => "trig",
            Self::RdfXml => "rdfxml",
        }
    }

    /// Whether the serialization carries named graphs. Dataset formats are
    /// dumped whole; graph formats are dumped from the default graph.
    pub fn is_dataset(&self) -> bool {
        matches!(self, Self::NQuads | Self::TriG)
    }

    pub(crate) fn engine_format(&self) -> RdfFormat {
        match self {
            Self::Turtle => RdfFormat::Turtle,
            Self::NTriples => RdfFormat::NTriples,
            Self::NQuads => RdfFormat::NQuads,
            Self::TriG => RdfFormat::TriG,
            Self::RdfXml => RdfFormat::RdfXml,
        }
    }
}
