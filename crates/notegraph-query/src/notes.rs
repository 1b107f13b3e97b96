// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fetching a note back out of the graph, and merge-updating it in place.

use notegraph_core::ids::{make_note_uri, now_iso, slugify};
use notegraph_core::vocab::{self, strip_ng};
use notegraph_core::{Note, NoteType, NotegraphError, Status};
use notegraph_extract::extract_note_triples;
use notegraph_store::KnowledgeStore;

use crate::sparql::{lookup_first, resolve_label, resolve_person_name};

/// Caller-supplied changes for [`update_note`]. `None` keeps the stored
/// value; `Some` replaces it (tags and links replace the whole set).
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub content: Option<String>,
    pub note_type: Option<NoteType>,
    pub tags: Option<Vec<String>>,
    pub links: Option<Vec<String>>,
    pub project: Option<String>,
    pub area: Option<String>,
    pub status: Option<Status>,
    pub description: Option<String>,
}

/// Result of a successful [`update_note`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub uri: String,
    pub triples_removed: usize,
    pub triples_inserted: usize,
}

/// Reassembles a note from its stored triples. Tag and link resources are
/// resolved back to display labels and titles; type and status come back as
/// their short forms. Returns `Ok(None)` when no triples exist for the URI.
///
/// Triple storage does not preserve insertion order, so the multi-valued
/// fields (tags, links, mentions) come back sorted lexicographically.
pub fn get_note(store: &KnowledgeStore, title: &str) -> Result<Option<Note>, NotegraphError> {
    let uri = make_note_uri(&slugify(title));
    let rows = store.select(&format!("SELECT ?p ?o WHERE {{ <{uri}> ?p ?o }}"))?;
    if rows.is_empty() {
        return Ok(None);
    }

    let p_title = vocab::ng("title");
    let p_content = vocab::ng("content");
    let p_tag = vocab::ng("hasTag");
    let p_links = vocab::ng("linksTo");
    let p_mentions = vocab::ng("mentions");
    let p_project = vocab::ng("belongsToProject");
    let p_area = vocab::ng("belongsToArea");
    let p_status = vocab::ng("hasStatus");
    let p_created = vocab::ng("createdAt");
    let p_modified = vocab::ng("modifiedAt");
    let p_path = vocab::ng("markdownPath");
    let p_description = vocab::dcterms("description");
    let p_creator = vocab::dcterms("creator");
    let p_language = vocab::dcterms("language");
    let p_license = vocab::dcterms("license");

    let mut note = Note::new(title);
    for row in &rows {
        let (Some(p), Some(o)) = (row.get("p"), row.get("o")) else {
            continue;
        };
        if p.as_str() == vocab::RDF_TYPE {
            if let Some(local) = strip_ng(o) {
                note.note_type = NoteType::parse(local);
            }
        } else if *p == p_title {
            note.title = o.clone();
        } else if *p == p_content {
            note.content = o.clone();
        } else if *p == p_tag {
            note.tags.push(resolve_label(store, o)?);
        } else if *p == p_links {
            note.links.push(resolve_label(store, o)?);
        } else if *p == p_mentions {
            let name = resolve_person_name(store, o)?;
            if let Some(mbox) = lookup_first(store, o, &vocab::foaf("mbox"))? {
                let address = mbox.strip_prefix("mailto:").unwrap_or(&mbox);
                note.mention_emails.insert(name.clone(), address.to_string());
            }
            note.mentions.push(name);
        } else if *p == p_project {
            note.project = Some(resolve_label(store, o)?);
        } else if *p == p_area {
            note.area = Some(resolve_label(store, o)?);
        } else if *p == p_status {
            let short = strip_ng(o).unwrap_or(o);
            note.status = Some(Status::parse(short));
        } else if *p == p_created {
            note.created_at = Some(o.clone());
        } else if *p == p_modified {
            note.modified_at = Some(o.clone());
        } else if *p == p_path {
            note.markdown_path = Some(o.clone());
        } else if *p == p_description {
            note.description = Some(o.clone());
        } else if *p == p_creator {
            if o.starts_with(vocab::NG_NS) {
                note.creator = Some(resolve_person_name(store, o)?);
                if let Some(mbox) = lookup_first(store, o, &vocab::foaf("mbox"))? {
                    let address = mbox.strip_prefix("mailto:").unwrap_or(&mbox);
                    note.creator_email = Some(address.to_string());
                }
            } else {
                note.creator = Some(o.clone());
            }
        } else if *p == p_language {
            note.language = Some(o.clone());
        } else if *p == p_license {
            note.license = Some(o.clone());
        }
    }
    note.tags.sort();
    note.links.sort();
    note.mentions.sort();
    Ok(Some(note))
}

/// Read-merge-rewrite update. Fetches the stored note, overlays the patch,
/// then removes all subject triples and re-inserts the merged record with a
/// fresh `modifiedAt` and the original `createdAt`.
///
/// The remove and insert are two separate engine calls; a crash between
/// them loses the note.
pub fn update_note(
    store: &KnowledgeStore,
    title: &str,
    patch: NotePatch,
) -> Result<Option<UpdateOutcome>, NotegraphError> {
    let Some(mut note) = get_note(store, title)? else {
        return Ok(None);
    };
    let uri = make_note_uri(&slugify(title));

    if let Some(content) = patch.content {
        note.content = content;
    }
    if let Some(note_type) = patch.note_type {
        note.note_type = note_type;
    }
    if let Some(tags) = patch.tags {
        note.tags = tags;
    }
    if let Some(links) = patch.links {
        note.links = links;
    }
    if let Some(project) = patch.project {
        note.project = Some(project);
    }
    if let Some(area) = patch.area {
        note.area = Some(area);
    }
    if let Some(status) = patch.status {
        note.status = Some(status);
    }
    if let Some(description) = patch.description {
        note.description = Some(description);
    }
    note.modified_at = Some(now_iso());

    let triples = extract_note_triples(&note);
    let removed = store.remove_matching(Some(&uri), None, None)?;
    let inserted = store.insert(&triples)?;
    tracing::info!(uri = %uri, removed, inserted, "updated note");
    Ok(Some(UpdateOutcome {
        uri,
        triples_removed: removed,
        triples_inserted: inserted,
    }))
}
