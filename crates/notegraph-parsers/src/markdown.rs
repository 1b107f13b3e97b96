// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Markdown ↔ Note: frontmatter, wikilinks, and inline tag extraction.
//!
//! The frontmatter block is decoded into a typed [`Frontmatter`] struct
//! carrying only the recognized keys; unrecognized keys are ignored, and a
//! malformed block is treated as empty metadata rather than failing the
//! whole parse.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use notegraph_core::models::{Note, NoteType, Status};
use notegraph_core::{NotegraphError, dedup_preserve};

/// `[[Target]]` / `[[Target|Alias]]` / `![[embed]]` references.
static WIKILINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(!?)\[\[([^\]]+)\]\]").unwrap());

/// Inline `#tag` at start of line or after whitespace.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(?:^|\s)#([a-zA-Z][\w/-]*)").unwrap());

/// Leading `---` delimited metadata block.
static FRONTMATTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^---\s*\n(.*?)\n---\s*\n").unwrap());

/// The recognized frontmatter keys.
///
/// Decoding tolerates a YAML list or a comma-separated string for `tags`,
/// a list or single string for `links`, and coerces timestamp scalars to
/// text. Any key not listed here is silently ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frontmatter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub note_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "list_or_comma_string",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,
    #[serde(
        default,
        deserialize_with = "list_or_single_string",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub links: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(
        default,
        deserialize_with = "scalar_to_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<String>,
    /// Alternate spelling of `created`; never emitted on serialization.
    #[serde(
        default,
        deserialize_with = "scalar_to_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
    #[serde(
        default,
        deserialize_with = "scalar_to_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

/// Accept `tags: [a, b]` or `tags: "a, b"`.
fn list_or_comma_string<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<String>, D::Error> {
    let value = serde_yaml::Value::deserialize(de)?;
    Ok(match value {
        serde_yaml::Value::String(s) => s
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
        serde_yaml::Value::Sequence(seq) => seq.iter().filter_map(yaml_scalar_to_string).collect(),
        _ => Vec::new(),
    })
}

/// Accept `links: [a, b]` or `links: a`.
fn list_or_single_string<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<String>, D::Error> {
    let value = serde_yaml::Value::deserialize(de)?;
    Ok(match value {
        serde_yaml::Value::String(s) => vec![s],
        serde_yaml::Value::Sequence(seq) => seq.iter().filter_map(yaml_scalar_to_string).collect(),
        _ => Vec::new(),
    })
}

/// Coerce any YAML scalar (string, number, bool) to its text form.
fn scalar_to_string<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    let value = serde_yaml::Value::deserialize(de)?;
    Ok(yaml_scalar_to_string(&value))
}

fn yaml_scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse markdown document text into a note.
///
/// `fallback_title` is used when the frontmatter supplies no title —
/// callers parsing a file pass the filename stem. The returned note's
/// `markdown_path` is left unset; [`parse_markdown_file`] fills it in.
pub fn parse_markdown(text: &str, fallback_title: &str) -> Note {
    let (frontmatter, content) = match FRONTMATTER_RE.captures(text) {
        Some(caps) => {
            let block = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let rest = &text[caps.get(0).map(|m| m.end()).unwrap_or(0)..];
            let fm = serde_yaml::from_str::<Frontmatter>(block).unwrap_or_else(|err| {
                tracing::debug!(error = %err, "malformed frontmatter treated as empty");
                Frontmatter::default()
            });
            (fm, rest)
        }
        None => (Frontmatter::default(), text),
    };

    // Wikilinks from the body, skipping ![[...]] image embeds and
    // stripping any |alias segment so only the target name is kept.
    let wikilinks: Vec<String> = WIKILINK_RE
        .captures_iter(content)
        .filter(|caps| caps.get(1).map(|m| m.as_str().is_empty()).unwrap_or(false))
        .filter_map(|caps| caps.get(2))
        .map(|m| {
            m.as_str()
                .split('|')
                .next()
                .unwrap_or("")
                .trim()
                .to_string()
        })
        .collect();

    let inline_tags: Vec<String> = TAG_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    // Metadata tags/links first, then content-derived, deduplicated.
    let mut all_tags = frontmatter.tags.clone();
    all_tags.extend(inline_tags);
    let all_tags = dedup_preserve(all_tags);

    let mut all_links = frontmatter.links.clone();
    all_links.extend(wikilinks);
    let all_links = dedup_preserve(all_links);

    Note {
        title: frontmatter
            .title
            .clone()
            .unwrap_or_else(|| fallback_title.to_string()),
        content: content.trim().to_string(),
        note_type: frontmatter
            .note_type
            .as_deref()
            .map(NoteType::parse)
            .unwrap_or_default(),
        tags: all_tags,
        links: all_links,
        project: frontmatter.project.clone(),
        area: frontmatter.area.clone(),
        status: frontmatter.status.as_deref().map(Status::parse),
        markdown_path: None,
        created_at: frontmatter.created.clone().or(frontmatter.date.clone()),
        modified_at: frontmatter.modified.clone(),
        description: frontmatter.description.clone(),
        creator: frontmatter.creator.clone(),
        language: frontmatter.language.clone(),
        license: frontmatter.license.clone(),
        ..Default::default()
    }
}

/// Read and parse a markdown file, recording its path as provenance.
pub fn parse_markdown_file(path: &Path) -> Result<Note, NotegraphError> {
    let text = std::fs::read_to_string(path)?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "untitled".to_string());
    let mut note = parse_markdown(&text, &stem);
    note.markdown_path = Some(path.display().to_string());
    Ok(note)
}

/// Serialize a note back to markdown with YAML frontmatter.
///
/// Fields at their default/empty value are omitted. Inverse of
/// [`parse_markdown`] for the fields frontmatter covers; inline tags are
/// collapsed into metadata, so arbitrary input is not byte-exact.
pub fn note_to_markdown(note: &Note) -> String {
    let fm = Frontmatter {
        title: Some(note.title.clone()),
        note_type: (note.note_type != NoteType::Generic)
            .then(|| note.note_type.class_name().to_string()),
        tags: note.tags.clone(),
        links: Vec::new(),
        project: note.project.clone(),
        area: note.area.clone(),
        status: note.status.as_ref().map(|s| s.as_str().to_string()),
        created: note.created_at.clone(),
        date: None,
        modified: note.modified_at.clone(),
        description: note.description.clone(),
        creator: note.creator.clone(),
        language: note.language.clone(),
        license: note.license.clone(),
    };
    // Frontmatter has no maps or tagged values, so YAML serialization
    // cannot fail; fall back to the bare title line if it somehow does.
    let yaml = serde_yaml::to_string(&fm)
        .unwrap_or_else(|_| format!("title: {}\n", note.title))
        .trim()
        .to_string();

    let mut out = format!("---\n{yaml}\n---\n");
    if !note.content.is_empty() {
        out.push('\n');
        out.push_str(&note.content);
    }
    out.push('\n');
    out
}
