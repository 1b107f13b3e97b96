// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Write-side operations: adding entities, ingesting raw documents, and
//! deleting or wiping graph content.

use std::path::Path;

use notegraph_core::ids::{
    dedup_preserve, make_bookmark_uri, make_note_uri, make_project_uri, now_iso, slugify,
};
use notegraph_core::{Bookmark, Note, NotegraphError, Project, Status};
use notegraph_extract::{
    extract_bookmark_triples, extract_note_triples, extract_project_triples, Term,
};
use notegraph_parsers::{parse_email, parse_markdown, parse_markdown_file};
use notegraph_store::KnowledgeStore;

/// Result of adding or ingesting an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub uri: String,
    pub title: String,
    pub triples_inserted: usize,
}

/// Result of a delete request. `deleted` is false when the URI had no
/// triples at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub deleted: bool,
    pub uri: String,
    pub triples_removed: usize,
}

/// Result of [`clear_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearOutcome {
    pub cleared: bool,
    pub triples_removed: usize,
    pub message: String,
}

/// Inserts a note. Tags and links are de-duplicated order-preservingly and
/// `createdAt` defaults to now.
pub fn add_note(store: &KnowledgeStore, mut note: Note) -> Result<AddOutcome, NotegraphError> {
    note.tags = dedup_preserve(note.tags);
    note.links = dedup_preserve(note.links);
    if note.created_at.is_none() {
        note.created_at = Some(now_iso());
    }
    let uri = make_note_uri(&slugify(&note.title));
    let triples = extract_note_triples(&note);
    let inserted = store.insert(&triples)?;
    tracing::info!(uri = %uri, inserted, "added note");
    Ok(AddOutcome {
        uri,
        title: note.title,
        triples_inserted: inserted,
    })
}

/// Inserts a bookmark. Status defaults to `ToRead`, `createdAt` to now.
pub fn add_bookmark(
    store: &KnowledgeStore,
    mut bookmark: Bookmark,
) -> Result<AddOutcome, NotegraphError> {
    bookmark.tags = dedup_preserve(bookmark.tags);
    if bookmark.status.is_none() {
        bookmark.status = Some(Status::ToRead);
    }
    if bookmark.created_at.is_none() {
        bookmark.created_at = Some(now_iso());
    }
    let uri = make_bookmark_uri(&slugify(&bookmark.title));
    let triples = extract_bookmark_triples(&bookmark);
    let inserted = store.insert(&triples)?;
    tracing::info!(uri = %uri, inserted, "added bookmark");
    Ok(AddOutcome {
        uri,
        title: bookmark.title,
        triples_inserted: inserted,
    })
}

/// Inserts a DOAP-described project.
pub fn add_project(
    store: &KnowledgeStore,
    mut project: Project,
) -> Result<AddOutcome, NotegraphError> {
    project.tags = dedup_preserve(project.tags);
    if project.created_at.is_none() {
        project.created_at = Some(now_iso());
    }
    let uri = make_project_uri(&slugify(&project.name));
    let triples = extract_project_triples(&project);
    let inserted = store.insert(&triples)?;
    tracing::info!(uri = %uri, inserted, "added project");
    Ok(AddOutcome {
        uri,
        title: project.name,
        triples_inserted: inserted,
    })
}

/// Parses markdown text and inserts the resulting note.
pub fn ingest_markdown(
    store: &KnowledgeStore,
    text: &str,
    fallback_title: &str,
) -> Result<AddOutcome, NotegraphError> {
    add_note(store, parse_markdown(text, fallback_title))
}

/// Reads a markdown file and inserts the resulting note.
pub fn ingest_markdown_file(
    store: &KnowledgeStore,
    path: &Path,
) -> Result<AddOutcome, NotegraphError> {
    add_note(store, parse_markdown_file(path)?)
}

/// Parses a raw RFC-2822 message and inserts it as a fleeting note.
pub fn ingest_email(store: &KnowledgeStore, raw: &str) -> Result<AddOutcome, NotegraphError> {
    add_note(store, parse_email(raw)?)
}

/// Deletes a note: every triple with its URI as subject, and every triple
/// pointing at it (inbound wikilinks included).
pub fn delete_note(store: &KnowledgeStore, title: &str) -> Result<DeleteOutcome, NotegraphError> {
    let uri = make_note_uri(&slugify(title));
    delete_entity(store, uri)
}

/// Deletes a bookmark and any triples referencing it.
pub fn delete_bookmark(
    store: &KnowledgeStore,
    title: &str,
) -> Result<DeleteOutcome, NotegraphError> {
    let uri = make_bookmark_uri(&slugify(title));
    delete_entity(store, uri)
}

fn delete_entity(store: &KnowledgeStore, uri: String) -> Result<DeleteOutcome, NotegraphError> {
    let as_subject = store.remove_matching(Some(&uri), None, None)?;
    let as_object =
        store.remove_matching(None, None, Some(&Term::Resource(uri.clone())))?;
    let total = as_subject + as_object;
    if total == 0 {
        tracing::debug!(uri = %uri, "delete: nothing to remove");
        return Ok(DeleteOutcome {
            deleted: false,
            uri,
            triples_removed: 0,
        });
    }
    tracing::info!(uri = %uri, removed = total, "deleted entity");
    Ok(DeleteOutcome {
        deleted: true,
        uri,
        triples_removed: total,
    })
}

/// Wipes the whole graph and reloads the bundled ontology. Declines as a
/// no-op unless `confirm` is set.
pub fn clear_all(store: &KnowledgeStore, confirm: bool) -> Result<ClearOutcome, NotegraphError> {
    if !confirm {
        return Ok(ClearOutcome {
            cleared: false,
            triples_removed: 0,
            message: "refusing to clear the store without confirm".to_string(),
        });
    }
    let before = store.count_triples()?;
    store.clear()?;
    let after = store.count_triples()?;
    Ok(ClearOutcome {
        cleared: true,
        triples_removed: before.saturating_sub(after),
        message: format!("removed {} triples, ontology reloaded", before.saturating_sub(after)),
    })
}
