// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end scenarios over an in-memory store: add, ingest, fetch,
//! update, search, relatedness, delete, clear.

use notegraph_core::{Bookmark, Note, NoteType, Status};
use notegraph_query::{
    add_bookmark, add_note, clear_all, delete_note, get_note, ingest_email,
    ingest_markdown, related_notes, search, stats, update_note, NotePatch, SearchFilter,
    SearchKind,
};
use notegraph_store::KnowledgeStore;

fn store() -> KnowledgeStore {
    KnowledgeStore::open_in_memory().expect("in-memory store")
}

fn note(title: &str) -> Note {
    Note::new(title)
}

#[test]
fn added_note_gets_a_slug_uri_and_is_fetchable_by_title() {
    let ks = store();
    let outcome = add_note(&ks, note("Hello World")).unwrap();
    assert!(outcome.uri.ends_with("/note/hello-world"));
    assert!(outcome.triples_inserted > 0);

    let fetched = get_note(&ks, "Hello World").unwrap().expect("note exists");
    assert_eq!(fetched.title, "Hello World");
    assert_eq!(fetched.note_type, NoteType::Generic);
    assert!(fetched.created_at.is_some());
}

#[test]
fn fetching_an_unknown_title_returns_none() {
    let ks = store();
    assert!(get_note(&ks, "No Such Note").unwrap().is_none());
}

#[test]
fn fetch_resolves_tags_project_and_status() {
    let ks = store();
    let mut n = note("Tagged");
    n.tags = vec!["python".to_string(), "rust".to_string()];
    n.project = Some("Side Quest".to_string());
    n.status = Some(Status::Reading);
    add_note(&ks, n).unwrap();

    let fetched = get_note(&ks, "Tagged").unwrap().unwrap();
    assert_eq!(fetched.tags, vec!["python", "rust"]);
    assert_eq!(fetched.project.as_deref(), Some("Side Quest"));
    assert_eq!(fetched.status, Some(Status::Reading));
}

#[test]
fn fetched_tags_and_links_come_back_in_sorted_order() {
    let ks = store();
    let mut n = note("Ordered");
    n.tags = vec!["zebra".to_string(), "alpha".to_string(), "middle".to_string()];
    n.links = vec!["Second Link".to_string(), "First Link".to_string()];
    add_note(&ks, n).unwrap();

    let fetched = get_note(&ks, "Ordered").unwrap().unwrap();
    assert_eq!(fetched.tags, vec!["alpha", "middle", "zebra"]);
    assert_eq!(fetched.links, vec!["first-link", "second-link"]);
}

#[test]
fn dangling_link_target_falls_back_to_its_slug() {
    let ks = store();
    let mut n = note("Source");
    n.links = vec!["Missing Target".to_string()];
    add_note(&ks, n).unwrap();

    let fetched = get_note(&ks, "Source").unwrap().unwrap();
    assert_eq!(fetched.links, vec!["missing-target"]);
}

#[test]
fn link_to_an_existing_note_resolves_its_title() {
    let ks = store();
    add_note(&ks, note("Target Note")).unwrap();
    let mut n = note("Source");
    n.links = vec!["Target Note".to_string()];
    add_note(&ks, n).unwrap();

    let fetched = get_note(&ks, "Source").unwrap().unwrap();
    assert_eq!(fetched.links, vec!["Target Note"]);
}

#[test]
fn updating_tags_leaves_status_and_created_at_untouched() {
    let ks = store();
    let mut n = note("Evolving");
    n.status = Some(Status::Custom("in-progress".to_string()));
    n.created_at = Some("2026-01-01T00:00:00Z".to_string());
    add_note(&ks, n).unwrap();

    let patch = NotePatch {
        tags: Some(vec!["x".to_string()]),
        ..NotePatch::default()
    };
    let outcome = update_note(&ks, "Evolving", patch).unwrap().expect("found");
    assert!(outcome.triples_removed > 0);

    let fetched = get_note(&ks, "Evolving").unwrap().unwrap();
    assert_eq!(fetched.tags, vec!["x"]);
    assert_eq!(fetched.status, Some(Status::Custom("in-progress".to_string())));
    assert_eq!(fetched.created_at.as_deref(), Some("2026-01-01T00:00:00Z"));
    assert!(fetched.modified_at.is_some());
}

#[test]
fn updating_an_unknown_note_reports_not_found() {
    let ks = store();
    assert!(update_note(&ks, "Ghost", NotePatch::default())
        .unwrap()
        .is_none());
}

#[test]
fn search_is_case_insensitive_and_skips_concepts() {
    let ks = store();
    let mut n = note("Rust Patterns");
    // A tag whose label contains the search term must not surface as a hit.
    n.tags = vec!["rust".to_string()];
    add_note(&ks, n).unwrap();

    let hits = search(&ks, "RUST", &SearchFilter::default()).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Rust Patterns");
    assert_eq!(hits[0].kind, "ng:Note");
}

#[test]
fn search_kind_filter_separates_notes_from_bookmarks() {
    let ks = store();
    add_note(&ks, note("Shared Name")).unwrap();
    add_bookmark(
        &ks,
        Bookmark {
            title: "Shared Name Bookmark".to_string(),
            url: "https://example.com".to_string(),
            ..Bookmark::default()
        },
    )
    .unwrap();

    let notes_only = search(
        &ks,
        "shared name",
        &SearchFilter {
            kind: Some(SearchKind::Note),
            ..SearchFilter::default()
        },
    )
    .unwrap();
    assert_eq!(notes_only.len(), 1);
    assert_eq!(notes_only[0].title, "Shared Name");

    let bookmarks_only = search(
        &ks,
        "shared name",
        &SearchFilter {
            kind: Some(SearchKind::Bookmark),
            ..SearchFilter::default()
        },
    )
    .unwrap();
    assert_eq!(bookmarks_only.len(), 1);
    assert_eq!(bookmarks_only[0].kind, "ng:Bookmark");
}

#[test]
fn search_tag_filter_requires_exact_membership() {
    let ks = store();
    let mut tagged = note("Alpha");
    tagged.tags = vec!["keep".to_string()];
    add_note(&ks, tagged).unwrap();
    add_note(&ks, note("Alpha Two")).unwrap();

    let hits = search(
        &ks,
        "alpha",
        &SearchFilter {
            tag: Some("keep".to_string()),
            ..SearchFilter::default()
        },
    )
    .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Alpha");
}

#[test]
fn search_respects_the_limit() {
    let ks = store();
    for i in 0..5 {
        add_note(&ks, note(&format!("Common Topic {i}"))).unwrap();
    }
    let hits = search(
        &ks,
        "common topic",
        &SearchFilter {
            limit: 3,
            ..SearchFilter::default()
        },
    )
    .unwrap();
    assert_eq!(hits.len(), 3);
}

#[test]
fn notes_sharing_a_tag_are_related() {
    let ks = store();
    let mut first = note("First");
    first.tags = vec!["shared".to_string()];
    let mut second = note("Second");
    second.tags = vec!["shared".to_string()];
    add_note(&ks, first).unwrap();
    add_note(&ks, second).unwrap();

    let related = related_notes(&ks, "First", 20).unwrap();
    assert!(related
        .iter()
        .any(|r| r.title == "Second" && r.relation == "shared_tag"));
    assert!(related.iter().all(|r| r.title != "First"));
}

#[test]
fn links_produce_both_link_relations() {
    let ks = store();
    add_note(&ks, note("Target")).unwrap();
    let mut source = note("Origin");
    source.links = vec!["Target".to_string()];
    add_note(&ks, source).unwrap();

    let from_origin = related_notes(&ks, "Origin", 20).unwrap();
    assert!(from_origin
        .iter()
        .any(|r| r.title == "Target" && r.relation == "links_to"));

    let from_target = related_notes(&ks, "Target", 20).unwrap();
    assert!(from_target
        .iter()
        .any(|r| r.title == "Origin" && r.relation == "linked_from"));
}

#[test]
fn notes_in_the_same_project_are_related() {
    let ks = store();
    let mut a = note("Plan");
    a.project = Some("Rewrite".to_string());
    let mut b = note("Retro");
    b.project = Some("Rewrite".to_string());
    add_note(&ks, a).unwrap();
    add_note(&ks, b).unwrap();

    let related = related_notes(&ks, "Plan", 20).unwrap();
    assert!(related
        .iter()
        .any(|r| r.title == "Retro" && r.relation == "same_project"));
}

#[test]
fn stats_counts_entities_by_type() {
    let ks = store();
    add_note(&ks, note("One")).unwrap();
    add_note(&ks, note("Two")).unwrap();
    add_bookmark(
        &ks,
        Bookmark {
            title: "A Link".to_string(),
            url: "https://example.com".to_string(),
            ..Bookmark::default()
        },
    )
    .unwrap();

    let s = stats(&ks).unwrap();
    assert!(s.total_triples > 0);
    assert_eq!(s.entity_counts.get("ng:Note"), Some(&2));
    assert_eq!(s.entity_counts.get("ng:Bookmark"), Some(&1));
}

#[test]
fn ingested_markdown_carries_frontmatter_and_body_links() {
    let ks = store();
    let doc = "---\ntitle: Weekly Review\ntags: [review]\nstatus: to-read\n---\n\nSee [[Hello World]] and #planning.\n";
    let outcome = ingest_markdown(&ks, doc, "fallback").unwrap();
    assert!(outcome.uri.ends_with("/note/weekly-review"));

    let fetched = get_note(&ks, "Weekly Review").unwrap().unwrap();
    assert_eq!(fetched.tags, vec!["planning", "review"]);
    assert_eq!(fetched.links, vec!["hello-world"]);
    assert_eq!(fetched.status, Some(Status::ToRead));
}

#[test]
fn ingested_email_round_trips_people_and_addresses() {
    let ks = store();
    let raw = "From: Alice Example <alice@example.com>\r\n\
               To: Bob <bob@example.com>\r\n\
               Subject: Quarterly Sync\r\n\
               Date: Mon, 5 Jan 2026 10:00:00 +0000\r\n\
               \r\n\
               Agenda attached.\r\n";
    let outcome = ingest_email(&ks, raw).unwrap();
    assert!(outcome.uri.ends_with("/note/quarterly-sync"));

    let fetched = get_note(&ks, "Quarterly Sync").unwrap().unwrap();
    assert_eq!(fetched.note_type, NoteType::Fleeting);
    assert_eq!(fetched.tags, vec!["email"]);
    assert_eq!(fetched.creator.as_deref(), Some("Alice Example"));
    assert_eq!(fetched.creator_email.as_deref(), Some("alice@example.com"));
    assert_eq!(fetched.mentions, vec!["Bob"]);
    assert_eq!(
        fetched.mention_emails.get("Bob").map(String::as_str),
        Some("bob@example.com")
    );
}

#[test]
fn deleting_a_note_removes_inbound_links_too() {
    let ks = store();
    add_note(&ks, note("Victim")).unwrap();
    let mut pointer = note("Pointer");
    pointer.links = vec!["Victim".to_string()];
    add_note(&ks, pointer).unwrap();

    let outcome = delete_note(&ks, "Victim").unwrap();
    assert!(outcome.deleted);
    assert!(outcome.triples_removed > 0);

    assert!(get_note(&ks, "Victim").unwrap().is_none());
    let pointer = get_note(&ks, "Pointer").unwrap().unwrap();
    assert!(pointer.links.is_empty());
}

#[test]
fn deleting_an_unknown_note_reports_not_found() {
    let ks = store();
    let outcome = delete_note(&ks, "Never Existed").unwrap();
    assert!(!outcome.deleted);
    assert_eq!(outcome.triples_removed, 0);
}

#[test]
fn clear_all_declines_without_confirmation() {
    let ks = store();
    add_note(&ks, note("Precious")).unwrap();
    let outcome = clear_all(&ks, false).unwrap();
    assert!(!outcome.cleared);
    assert!(get_note(&ks, "Precious").unwrap().is_some());
}

#[test]
fn clear_all_wipes_data_and_keeps_the_ontology() {
    let ks = store();
    add_note(&ks, note("Ephemeral")).unwrap();
    let outcome = clear_all(&ks, true).unwrap();
    assert!(outcome.cleared);
    assert!(outcome.triples_removed > 0);
    assert!(get_note(&ks, "Ephemeral").unwrap().is_none());
    // The ontology is reloaded, so the store is not empty.
    assert!(stats(&ks).unwrap().total_triples > 0);
}
