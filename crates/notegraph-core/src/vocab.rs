// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed ontology namespaces and predicate IRIs used in generated triples.
//!
//! The core `ng:` namespace carries the Notegraph classes and properties;
//! SKOS, DCTERMS, FOAF, and DOAP are the external vocabularies for concept
//! labels, resource metadata, persons, and software projects.

/// Core application namespace for Notegraph classes and properties.
pub const NG_NS: &str = "http://notegraph.dev/kg/";

/// SKOS namespace (concept hierarchies, preferred labels).
pub const SKOS_NS: &str = "http://www.w3.org/2004/02/skos/core#";

/// Dublin Core Terms namespace (generic resource metadata).
pub const DCTERMS_NS: &str = "http://purl.org/dc/terms/";

/// FOAF namespace (persons, names, mailboxes).
pub const FOAF_NS: &str = "http://xmlns.com/foaf/0.1/";

/// DOAP namespace (software project description).
pub const DOAP_NS: &str = "http://usefulinc.com/ns/doap#";

/// The rdf:type predicate.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// xsd:dateTime datatype IRI for timestamp literals.
pub const XSD_DATETIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

/// xsd:anyURI datatype IRI for URL-valued literals.
pub const XSD_ANYURI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";

/// Build an IRI in the core namespace from a local name (`ng("title")`).
pub fn ng(local: &str) -> String {
    format!("{NG_NS}{local}")
}

/// Build an IRI in the SKOS namespace.
pub fn skos(local: &str) -> String {
    format!("{SKOS_NS}{local}")
}

/// Build an IRI in the DCTERMS namespace.
pub fn dcterms(local: &str) -> String {
    format!("{DCTERMS_NS}{local}")
}

/// Build an IRI in the FOAF namespace.
pub fn foaf(local: &str) -> String {
    format!("{FOAF_NS}{local}")
}

/// Build an IRI in the DOAP namespace.
pub fn doap(local: &str) -> String {
    format!("{DOAP_NS}{local}")
}

/// Strip the core namespace off an IRI, yielding the local name.
///
/// Returns `None` when the IRI is not in the core namespace.
pub fn strip_ng(iri: &str) -> Option<&str> {
    iri.strip_prefix(NG_NS)
}
