// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canonical entity records: notes, bookmarks, and software projects.
//!
//! These are ephemeral in-process records created during ingest or lookup;
//! persistent identity lives only as triples in the store. Persons and
//! concepts (tags) are implicit entities materialized by the triple
//! extractor from mention/creator/maintainer and tag fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The fixed note-type enumeration, mapped to ontology subclasses of `ng:Note`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteType {
    /// A plain note (`ng:Note`), also the fallback for unrecognized types.
    #[default]
    Generic,
    /// A daily journal note (`ng:DailyNote`).
    Daily,
    /// A note scoped to a project (`ng:ProjectNote`).
    Project,
    /// A note scoped to an area of responsibility (`ng:AreaNote`).
    Area,
    /// A reference/resource note (`ng:ResourceNote`).
    Resource,
    /// A quick capture note (`ng:FleetingNote`), used for ingested email.
    Fleeting,
}

impl NoteType {
    /// Ontology class local name for this note type.
    pub fn class_name(&self) -> &'static str {
        match self {
            NoteType::Generic => "Note",
            NoteType::Daily => "DailyNote",
            NoteType::Project => "ProjectNote",
            NoteType::Area => "AreaNote",
            NoteType::Resource => "ResourceNote",
            NoteType::Fleeting => "FleetingNote",
        }
    }

    /// Parse a note type from frontmatter or caller input.
    ///
    /// Accepts both the ontology class name (`DailyNote`) and the short
    /// token (`daily`), case-insensitively. Unrecognized values fall back
    /// to `Generic` rather than failing.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "note" | "generic" => NoteType::Generic,
            "dailynote" | "daily" => NoteType::Daily,
            "projectnote" | "project" => NoteType::Project,
            "areanote" | "area" => NoteType::Area,
            "resourcenote" | "resource" => NoteType::Resource,
            "fleetingnote" | "fleeting" => NoteType::Fleeting,
            _ => NoteType::Generic,
        }
    }
}

/// Reading/processing status for notes and bookmarks.
///
/// The four known statuses are encoded as ontology terms; anything else is
/// carried as a freeform text literal. The distinction is preserved on
/// read-back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    ToRead,
    Reading,
    Read,
    Reference,
    /// Freeform status outside the known vocabulary.
    Custom(String),
}

impl Status {
    /// Parse a status string.
    ///
    /// Known statuses are recognized case-insensitively ignoring hyphens
    /// and underscores, so `to-read`, `ToRead`, and `TO_READ` all map to
    /// `Status::ToRead`. Everything else becomes `Custom`.
    pub fn parse(s: &str) -> Self {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match folded.as_str() {
            "toread" => Status::ToRead,
            "reading" => Status::Reading,
            "read" => Status::Read,
            "reference" => Status::Reference,
            _ => Status::Custom(s.trim().to_string()),
        }
    }

    /// Ontology term local name for known statuses, `None` for freeform.
    pub fn term_name(&self) -> Option<&'static str> {
        match self {
            Status::ToRead => Some("ToRead"),
            Status::Reading => Some("Reading"),
            Status::Read => Some("Read"),
            Status::Reference => Some("Reference"),
            Status::Custom(_) => None,
        }
    }

    /// Display form: kebab-case token for known statuses, the raw string
    /// for freeform ones.
    pub fn as_str(&self) -> &str {
        match self {
            Status::ToRead => "to-read",
            Status::Reading => "reading",
            Status::Read => "read",
            Status::Reference => "reference",
            Status::Custom(s) => s,
        }
    }
}

/// A wiki-style markdown note.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Note {
    /// Display title; identity key via its slug.
    pub title: String,
    /// Markdown body content.
    pub content: String,
    /// Note subtype; defaults to generic.
    pub note_type: NoteType,
    /// Tag strings, first-seen order, deduplicated.
    pub tags: Vec<String>,
    /// Wikilink target titles, first-seen order, deduplicated.
    pub links: Vec<String>,
    /// Project name this note belongs to.
    pub project: Option<String>,
    /// Area name this note belongs to.
    pub area: Option<String>,
    /// Known-vocabulary or freeform status.
    pub status: Option<Status>,
    /// Source file path, recorded as provenance when parsed from disk.
    pub markdown_path: Option<String>,
    /// ISO 8601 creation timestamp; defaulted at extraction time if absent.
    pub created_at: Option<String>,
    /// ISO 8601 modification timestamp.
    pub modified_at: Option<String>,
    /// Dublin Core description.
    pub description: Option<String>,
    /// Dublin Core creator display name.
    pub creator: Option<String>,
    /// Dublin Core language tag.
    pub language: Option<String>,
    /// Dublin Core license string.
    pub license: Option<String>,
    /// Display names of mentioned persons, in source order.
    pub mentions: Vec<String>,
    /// Creator email address, when the source exposes one.
    pub creator_email: Option<String>,
    /// Mention name → email address, when the source exposes addresses.
    pub mention_emails: BTreeMap<String, String>,
}

impl Note {
    /// Create a note with the given title; all other fields default.
    pub fn new(title: impl Into<String>) -> Self {
        Note {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// A saved web bookmark.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
    pub description: String,
    pub tags: Vec<String>,
    pub status: Option<Status>,
    pub created_at: Option<String>,
    pub modified_at: Option<String>,
}

/// A software project described with the DOAP vocabulary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    /// Project name; identity key via its slug.
    pub name: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    /// Repository URL; materialized as a linked `doap:GitRepository` node.
    pub repository: Option<String>,
    pub programming_language: Option<String>,
    pub platform: Option<String>,
    pub maintainers: Vec<String>,
    pub developers: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: Option<String>,
}
