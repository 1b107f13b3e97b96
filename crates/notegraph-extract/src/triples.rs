// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Triple extraction: canonical entities → ontology-conformant triples.
//!
//! Ordering is stable but not contractual; every listed fact is present
//! exactly once per source field. Tests assert membership, not position.

use notegraph_core::models::{Bookmark, Note, Project};
use notegraph_core::vocab::{self, RDF_TYPE, XSD_ANYURI, XSD_DATETIME};
use notegraph_core::{
    make_area_uri, make_bookmark_uri, make_concept_uri, make_note_uri, make_person_uri,
    make_project_uri, now_iso, slugify,
};

use crate::term::{Term, Triple};

/// Collector with the repetitive subject/predicate plumbing factored out.
struct TripleSink {
    triples: Vec<Triple>,
}

impl TripleSink {
    fn new() -> Self {
        TripleSink {
            triples: Vec::new(),
        }
    }

    fn push(&mut self, subject: &str, predicate: &str, object: Term) {
        self.triples.push(Triple::new(subject, predicate, object));
    }

    fn resource(&mut self, subject: &str, predicate: &str, iri: impl Into<String>) {
        self.push(subject, predicate, Term::Resource(iri.into()));
    }

    fn text(&mut self, subject: &str, predicate: &str, value: impl Into<String>) {
        self.push(subject, predicate, Term::Text(value.into()));
    }

    fn typed(&mut self, subject: &str, predicate: &str, value: impl Into<String>, datatype: &str) {
        self.push(
            subject,
            predicate,
            Term::TypedText(value.into(), datatype.to_string()),
        );
    }

    /// Concept sub-graph for one tag: type + title + skos:prefLabel on the
    /// concept resource, plus a hasTag link from the owning entity.
    fn tag(&mut self, owner: &str, tag: &str) {
        let concept_uri = make_concept_uri(tag);
        self.resource(&concept_uri, RDF_TYPE, vocab::ng("Concept"));
        self.text(&concept_uri, &vocab::ng("title"), tag);
        self.text(&concept_uri, &vocab::skos("prefLabel"), tag);
        self.resource(owner, &vocab::ng("hasTag"), concept_uri);
    }

    /// Person sub-graph: type + name, plus a mailbox resource when an email
    /// address is known. Returns the person URI for linking.
    fn person(&mut self, name: &str, email: Option<&str>) -> String {
        let person_uri = make_person_uri(name);
        self.resource(&person_uri, RDF_TYPE, vocab::foaf("Person"));
        self.text(&person_uri, &vocab::foaf("name"), name);
        if let Some(addr) = email {
            self.resource(&person_uri, &vocab::foaf("mbox"), format!("mailto:{addr}"));
        }
        person_uri
    }

    /// Status rule: known vocabulary → ontology term, freeform → text.
    fn status(&mut self, owner: &str, status: &notegraph_core::Status) {
        match status.term_name() {
            Some(term) => self.resource(owner, &vocab::ng("hasStatus"), vocab::ng(term)),
            None => self.text(owner, &vocab::ng("hasStatus"), status.as_str()),
        }
    }
}

/// Convert a note into RDF triples for insertion into the store.
///
/// `created_at` defaults to the current time when the note carries none;
/// `modified_at` is only emitted when present.
pub fn extract_note_triples(note: &Note) -> Vec<Triple> {
    let note_uri = make_note_uri(&slugify(&note.title));
    let mut sink = TripleSink::new();

    sink.resource(&note_uri, RDF_TYPE, vocab::ng(note.note_type.class_name()));
    sink.text(&note_uri, &vocab::ng("title"), &note.title);

    if !note.content.is_empty() {
        sink.text(&note_uri, &vocab::ng("content"), &note.content);
    }

    for tag in &note.tags {
        sink.tag(&note_uri, tag);
    }

    for link in &note.links {
        let target_uri = make_note_uri(&slugify(link));
        sink.resource(&note_uri, &vocab::ng("linksTo"), target_uri);
    }

    if let Some(project) = &note.project {
        let proj_uri = make_project_uri(project);
        sink.resource(&proj_uri, RDF_TYPE, vocab::ng("Project"));
        sink.text(&proj_uri, &vocab::ng("title"), project);
        sink.resource(&note_uri, &vocab::ng("belongsToProject"), proj_uri);
    }

    if let Some(area) = &note.area {
        let area_uri = make_area_uri(area);
        sink.resource(&area_uri, RDF_TYPE, vocab::ng("Area"));
        sink.text(&area_uri, &vocab::ng("title"), area);
        sink.resource(&note_uri, &vocab::ng("belongsToArea"), area_uri);
    }

    let created = note.created_at.clone().unwrap_or_else(now_iso);
    sink.typed(&note_uri, &vocab::ng("createdAt"), created, XSD_DATETIME);
    if let Some(modified) = &note.modified_at {
        sink.typed(&note_uri, &vocab::ng("modifiedAt"), modified, XSD_DATETIME);
    }

    if let Some(status) = &note.status {
        sink.status(&note_uri, status);
    }

    if let Some(description) = &note.description {
        sink.text(&note_uri, &vocab::dcterms("description"), description);
    }
    if let Some(creator) = &note.creator {
        match note.creator_email.as_deref() {
            Some(email) => {
                let person_uri = sink.person(creator, Some(email));
                sink.resource(&note_uri, &vocab::dcterms("creator"), person_uri);
            }
            None => sink.text(&note_uri, &vocab::dcterms("creator"), creator),
        }
    }
    if let Some(language) = &note.language {
        sink.text(&note_uri, &vocab::dcterms("language"), language);
    }
    if let Some(license) = &note.license {
        sink.text(&note_uri, &vocab::dcterms("license"), license);
    }

    for name in &note.mentions {
        let email = note.mention_emails.get(name).map(String::as_str);
        let person_uri = sink.person(name, email);
        sink.resource(&note_uri, &vocab::ng("mentions"), person_uri);
    }

    if let Some(path) = &note.markdown_path {
        sink.text(&note_uri, &vocab::ng("markdownPath"), path);
    }

    sink.triples
}

/// Convert a bookmark into RDF triples.
pub fn extract_bookmark_triples(bookmark: &Bookmark) -> Vec<Triple> {
    let bm_uri = make_bookmark_uri(&slugify(&bookmark.title));
    let mut sink = TripleSink::new();

    sink.resource(&bm_uri, RDF_TYPE, vocab::ng("Bookmark"));
    sink.text(&bm_uri, &vocab::ng("title"), &bookmark.title);
    sink.text(&bm_uri, &vocab::ng("sourceUrl"), &bookmark.url);

    if !bookmark.description.is_empty() {
        sink.text(&bm_uri, &vocab::ng("content"), &bookmark.description);
    }

    for tag in &bookmark.tags {
        sink.tag(&bm_uri, tag);
    }

    if let Some(status) = &bookmark.status {
        sink.status(&bm_uri, status);
    }

    let created = bookmark.created_at.clone().unwrap_or_else(now_iso);
    sink.typed(&bm_uri, &vocab::ng("createdAt"), created, XSD_DATETIME);
    if let Some(modified) = &bookmark.modified_at {
        sink.typed(&bm_uri, &vocab::ng("modifiedAt"), modified, XSD_DATETIME);
    }

    sink.triples
}

/// Convert a software project into RDF triples using the DOAP vocabulary.
pub fn extract_project_triples(project: &Project) -> Vec<Triple> {
    let proj_uri = make_project_uri(&project.name);
    let mut sink = TripleSink::new();

    // Dual typing: generic project class + DOAP software project.
    sink.resource(&proj_uri, RDF_TYPE, vocab::ng("Project"));
    sink.resource(&proj_uri, RDF_TYPE, vocab::doap("Project"));

    sink.text(&proj_uri, &vocab::doap("name"), &project.name);
    if let Some(description) = &project.description {
        sink.text(&proj_uri, &vocab::doap("description"), description);
    }
    if let Some(homepage) = &project.homepage {
        sink.typed(&proj_uri, &vocab::doap("homepage"), homepage, XSD_ANYURI);
    }
    if let Some(repository) = &project.repository {
        let repo_uri = format!("{}repo/{}", vocab::NG_NS, slugify(&project.name));
        sink.resource(&repo_uri, RDF_TYPE, vocab::doap("GitRepository"));
        sink.typed(&repo_uri, &vocab::doap("location"), repository, XSD_ANYURI);
        sink.resource(&proj_uri, &vocab::doap("repository"), repo_uri);
    }
    if let Some(language) = &project.programming_language {
        sink.text(&proj_uri, &vocab::doap("programming-language"), language);
    }
    if let Some(platform) = &project.platform {
        sink.text(&proj_uri, &vocab::doap("platform"), platform);
    }

    for name in &project.maintainers {
        let person_uri = sink.person(name, None);
        sink.resource(&proj_uri, &vocab::doap("maintainer"), person_uri);
    }
    for name in &project.developers {
        let person_uri = sink.person(name, None);
        sink.resource(&proj_uri, &vocab::doap("developer"), person_uri);
    }

    for tag in &project.tags {
        sink.tag(&proj_uri, tag);
    }

    // ng:title keeps projects addressable by the same query patterns as
    // notes and bookmarks.
    sink.text(&proj_uri, &vocab::ng("title"), &project.name);

    let created = project.created_at.clone().unwrap_or_else(now_iso);
    sink.typed(&proj_uri, &vocab::ng("createdAt"), created, XSD_DATETIME);

    sink.triples
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use notegraph_core::models::{NoteType, Status};

    use super::*;

    /// Object values of every triple whose predicate contains the fragment.
    fn pred_values<'a>(triples: &'a [Triple], fragment: &str) -> Vec<&'a Term> {
        triples
            .iter()
            .filter(|t| t.predicate.contains(fragment))
            .map(|t| &t.object)
            .collect()
    }

    fn sample_note() -> Note {
        Note {
            title: "My Test Note".into(),
            content: "Body with [[Other Note]] reference".into(),
            note_type: NoteType::Project,
            tags: vec!["python".into(), "testing".into()],
            links: vec!["Other Note".into()],
            project: Some("notegraph".into()),
            area: Some("development".into()),
            status: Some(Status::Custom("active".into())),
            created_at: Some("2025-01-01T00:00:00Z".into()),
            ..Default::default()
        }
    }

    #[test]
    fn note_type_and_title_triples() {
        let triples = extract_note_triples(&sample_note());
        let types = pred_values(&triples, "22-rdf-syntax-ns#type");
        assert!(
            types.contains(&&Term::Resource(vocab::ng("ProjectNote")))
        );
        let titles = pred_values(&triples, "title");
        assert!(titles.contains(&&Term::Text("My Test Note".into())));
    }

    #[test]
    fn full_content_stored_untruncated() {
        let mut note = sample_note();
        note.content = "x".repeat(100_000);
        let triples = extract_note_triples(&note);
        let contents = pred_values(&triples, "content");
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0].value().len(), 100_000);
    }

    #[test]
    fn tags_build_concept_subgraphs_with_pref_label() {
        let triples = extract_note_triples(&sample_note());
        let labels = pred_values(&triples, "prefLabel");
        assert_eq!(labels.len(), 2);
        assert!(labels.contains(&&Term::Text("python".into())));

        let has_tags = pred_values(&triples, "hasTag");
        assert!(has_tags.contains(&&Term::Resource(make_concept_uri("python"))));
    }

    #[test]
    fn links_to_targets_by_slug() {
        let triples = extract_note_triples(&sample_note());
        let links = pred_values(&triples, "linksTo");
        assert_eq!(
            links,
            vec![&Term::Resource(make_note_uri("other-note"))]
        );
    }

    #[test]
    fn project_and_area_subresources_created() {
        let triples = extract_note_triples(&sample_note());
        let belongs = pred_values(&triples, "belongsToProject");
        assert_eq!(belongs, vec![&Term::Resource(make_project_uri("notegraph"))]);
        // The project resource carries its own type + title.
        assert!(triples.iter().any(|t| {
            t.subject == make_project_uri("notegraph")
                && t.predicate == RDF_TYPE
                && t.object == Term::Resource(vocab::ng("Project"))
        }));
        let areas = pred_values(&triples, "belongsToArea");
        assert_eq!(areas, vec![&Term::Resource(make_area_uri("development"))]);
    }

    #[test]
    fn created_at_defaults_when_absent() {
        let mut note = sample_note();
        note.created_at = None;
        let triples = extract_note_triples(&note);
        let created = pred_values(&triples, "createdAt");
        assert_eq!(created.len(), 1);
        match created[0] {
            Term::TypedText(value, datatype) => {
                assert!(!value.is_empty());
                assert_eq!(datatype.as_str(), XSD_DATETIME);
            }
            other => panic!("expected typed literal, got {other:?}"),
        }
    }

    #[test]
    fn known_status_is_ontology_term() {
        let mut note = sample_note();
        note.status = Some(Status::ToRead);
        let triples = extract_note_triples(&note);
        let statuses = pred_values(&triples, "hasStatus");
        assert_eq!(statuses, vec![&Term::Resource(vocab::ng("ToRead"))]);
    }

    #[test]
    fn freeform_status_is_text_literal() {
        let triples = extract_note_triples(&sample_note());
        let statuses = pred_values(&triples, "hasStatus");
        assert_eq!(statuses, vec![&Term::Text("active".into())]);
    }

    #[test]
    fn dc_metadata_triples() {
        let mut note = sample_note();
        note.description = Some("A test note".into());
        note.creator = Some("Alice".into());
        note.language = Some("en".into());
        note.license = Some("CC-BY-4.0".into());
        let triples = extract_note_triples(&note);
        assert_eq!(
            pred_values(&triples, "dc/terms/description"),
            vec![&Term::Text("A test note".into())]
        );
        // No email known: creator stays a plain literal, no person node.
        assert_eq!(
            pred_values(&triples, "dc/terms/creator"),
            vec![&Term::Text("Alice".into())]
        );
        assert!(pred_values(&triples, "foaf/0.1/name").is_empty());
    }

    #[test]
    fn creator_with_email_becomes_person_resource() {
        let mut note = sample_note();
        note.creator = Some("Alice".into());
        note.creator_email = Some("alice@example.com".into());
        let triples = extract_note_triples(&note);
        let creators = pred_values(&triples, "dc/terms/creator");
        assert_eq!(creators, vec![&Term::Resource(make_person_uri("Alice"))]);
        let mboxes = pred_values(&triples, "mbox");
        assert_eq!(
            mboxes,
            vec![&Term::Resource("mailto:alice@example.com".into())]
        );
    }

    #[test]
    fn mentions_build_person_subgraphs() {
        let mut note = sample_note();
        note.mentions = vec!["Bob".into(), "Carol".into()];
        note.mention_emails =
            BTreeMap::from([("Bob".to_string(), "bob@example.com".to_string())]);
        let triples = extract_note_triples(&note);

        let mentions = pred_values(&triples, "mentions");
        assert_eq!(mentions.len(), 2);
        assert!(mentions.contains(&&Term::Resource(make_person_uri("Bob"))));

        // Bob has a mailbox, Carol does not.
        let mboxes = pred_values(&triples, "mbox");
        assert_eq!(
            mboxes,
            vec![&Term::Resource("mailto:bob@example.com".into())]
        );
        let names = pred_values(&triples, "foaf/0.1/name");
        assert!(names.contains(&&Term::Text("Carol".into())));
    }

    #[test]
    fn markdown_path_recorded_as_provenance() {
        let mut note = sample_note();
        note.markdown_path = Some("/vault/my-test-note.md".into());
        let triples = extract_note_triples(&note);
        assert_eq!(
            pred_values(&triples, "markdownPath"),
            vec![&Term::Text("/vault/my-test-note.md".into())]
        );
    }

    #[test]
    fn bookmark_basics() {
        let bookmark = Bookmark {
            title: "Rust Book".into(),
            url: "https://doc.rust-lang.org/book/".into(),
            description: "The official book".into(),
            tags: vec!["rust".into()],
            status: Some(Status::ToRead),
            created_at: Some("2025-01-01T00:00:00Z".into()),
            modified_at: None,
        };
        let triples = extract_bookmark_triples(&bookmark);
        let types = pred_values(&triples, "22-rdf-syntax-ns#type");
        assert!(types.contains(&&Term::Resource(vocab::ng("Bookmark"))));
        assert_eq!(
            pred_values(&triples, "sourceUrl"),
            vec![&Term::Text("https://doc.rust-lang.org/book/".into())]
        );
        assert_eq!(
            pred_values(&triples, "hasStatus"),
            vec![&Term::Resource(vocab::ng("ToRead"))]
        );
        assert!(pred_values(&triples, "prefLabel").contains(&&Term::Text("rust".into())));
    }

    #[test]
    fn bookmark_freeform_status_is_literal() {
        let bookmark = Bookmark {
            title: "Thing".into(),
            url: "https://example.com".into(),
            status: Some(Status::parse("skimming")),
            ..Default::default()
        };
        let triples = extract_bookmark_triples(&bookmark);
        assert_eq!(
            pred_values(&triples, "hasStatus"),
            vec![&Term::Text("skimming".into())]
        );
    }

    #[test]
    fn project_doap_graph() {
        let project = Project {
            name: "notegraph".into(),
            description: Some("Knowledge graph tooling".into()),
            homepage: Some("https://notegraph.dev".into()),
            repository: Some("https://github.com/notegraph/notegraph".into()),
            programming_language: Some("Rust".into()),
            platform: Some("linux".into()),
            maintainers: vec!["Alice".into()],
            developers: vec!["Bob".into()],
            tags: vec!["pkm".into()],
            created_at: Some("2025-01-01T00:00:00Z".into()),
        };
        let triples = extract_project_triples(&project);

        let types = pred_values(&triples, "22-rdf-syntax-ns#type");
        assert!(types.contains(&&Term::Resource(vocab::ng("Project"))));
        assert!(types.contains(&&Term::Resource(vocab::doap("Project"))));

        assert_eq!(
            pred_values(&triples, "doap#name"),
            vec![&Term::Text("notegraph".into())]
        );
        match pred_values(&triples, "doap#homepage")[0] {
            Term::TypedText(value, datatype) => {
                assert_eq!(value.as_str(), "https://notegraph.dev");
                assert_eq!(datatype.as_str(), XSD_ANYURI);
            }
            other => panic!("expected typed literal, got {other:?}"),
        }

        // Repository sub-resource with its own type + location.
        let repo_uri = format!("{}repo/notegraph", vocab::NG_NS);
        assert!(triples.iter().any(|t| {
            t.subject == repo_uri && t.object == Term::Resource(vocab::doap("GitRepository"))
        }));
        assert_eq!(
            pred_values(&triples, "doap#repository"),
            vec![&Term::Resource(repo_uri)]
        );

        // Maintainer and developer person sub-graphs via distinct predicates.
        assert_eq!(
            pred_values(&triples, "doap#maintainer"),
            vec![&Term::Resource(make_person_uri("Alice"))]
        );
        assert_eq!(
            pred_values(&triples, "doap#developer"),
            vec![&Term::Resource(make_person_uri("Bob"))]
        );

        // Cross-entity title for shared query patterns.
        assert!(pred_values(&triples, "kg/title").contains(&&Term::Text("notegraph".into())));
    }
}
