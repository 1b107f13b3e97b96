// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bundled ontology sources loaded into every store at bootstrap.
//!
//! The schema file declares the core classes and properties; the extensions
//! file aligns them with SKOS, Dublin Core, FOAF and DOAP. Load order
//! matters: the schema must exist before the alignments that reference it.

/// Ontology documents in load order, as (file name, Turtle source) pairs.
pub const ONTOLOGY_SOURCES: &[(&str, &str)] = &[
    ("notegraph.ttl", include_str!("../ontology/notegraph.ttl")),
    ("extensions.ttl", include_str!("../ontology/extensions.ttl")),
];

/// The core schema as Turtle text.
pub fn ontology_turtle() -> &'static str {
    ONTOLOGY_SOURCES[0].1
}

/// A human-readable sketch of the vocabulary, for clients that want to
/// construct their own SPARQL.
pub fn ontology_summary() -> String {
    let mut out = String::new();
    out.push_str("Namespace: ng: <http://notegraph.dev/kg/>\n\n");
    out.push_str("Classes:\n");
    for class in [
        ("ng:Note", "markdown note (subclasses: DailyNote, ProjectNote, AreaNote, ResourceNote, FleetingNote)"),
        ("ng:Bookmark", "saved reference to an external URL"),
        ("ng:Concept", "tag or topic, aligned with skos:Concept"),
        ("ng:Project", "project, aligned with doap:Project"),
        ("ng:Area", "ongoing area of responsibility"),
        ("ng:Person", "person, aligned with foaf:Person"),
        ("ng:Status", "reading status (ToRead, Reading, Read, Reference)"),
    ] {
        out.push_str("  ");
        out.push_str(class.0);
        out.push_str(" - ");
        out.push_str(class.1);
        out.push('\n');
    }
    out.push_str("\nProperties:\n");
    for prop in [
        ("ng:title", "title of a resource"),
        ("ng:content", "body text"),
        ("ng:hasTag", "links a resource to a ng:Concept"),
        ("ng:linksTo", "wikilink between notes"),
        ("ng:mentions", "person or concept mentioned in a note"),
        ("ng:belongsToProject", "note to project"),
        ("ng:belongsToArea", "note to area"),
        ("ng:hasStatus", "reading status of a resource"),
        ("ng:sourceUrl", "bookmark target URL"),
        ("ng:markdownPath", "source file of an ingested note"),
        ("ng:createdAt / ng:modifiedAt", "xsd:dateTime timestamps"),
    ] {
        out.push_str("  ");
        out.push_str(prop.0);
        out.push_str(" - ");
        out.push_str(prop.1);
        out.push('\n');
    }
    out.push_str(
        "\nExternal vocabularies in use: skos:prefLabel, dcterms:description/creator/language/license, \
         foaf:name/mbox, doap:name/homepage/repository.\n",
    );
    out
}
