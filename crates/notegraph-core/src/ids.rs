// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic identifier generation: text → slug → URI.
//!
//! Identity is derived, not stored: the same title always maps to the same
//! slug and thus the same URI, so entities can be re-located from their
//! display names alone.

use chrono::{SecondsFormat, Utc};

use crate::vocab::NG_NS;

/// Fallback slug for input that normalizes to the empty string.
const EMPTY_SLUG: &str = "untitled";

/// Convert free text to a URL-safe slug.
///
/// Pure and total: folds common Latin diacritics to ASCII, lowercases,
/// strips everything outside alphanumerics/hyphen/underscore/whitespace,
/// collapses runs of whitespace and hyphens into a single hyphen, and trims
/// leading/trailing hyphens. Empty or symbol-only input yields `"untitled"`.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    let mut push = |ch: char, out: &mut String, pending: &mut bool| {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_alphanumeric() || lower == '_' {
            if *pending && !out.is_empty() {
                out.push('-');
            }
            *pending = false;
            out.push(lower);
        } else if lower == '-' || lower.is_whitespace() {
            *pending = true;
        }
        // Everything else is stripped without breaking a word.
    };
    for ch in text.chars() {
        if ch.is_ascii() {
            push(ch, &mut out, &mut pending_hyphen);
        } else {
            for folded in fold_ascii(ch).chars() {
                push(folded, &mut out, &mut pending_hyphen);
            }
        }
    }
    if out.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        out
    }
}

/// Fold a single character to its closest ASCII approximation.
///
/// Covers the Latin-1 and Latin Extended-A ranges that show up in real note
/// titles; anything unmapped and non-ASCII is dropped by the caller.
fn fold_ascii(ch: char) -> &'static str {
    match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' => "A",
        'ç' | 'ć' | 'č' => "c",
        'Ç' | 'Ć' | 'Č' => "C",
        'ď' | 'đ' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => "E",
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'į' => "i",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ĩ' | 'Ī' | 'Į' => "I",
        'ł' => "l",
        'Ł' => "L",
        'ñ' | 'ń' | 'ň' => "n",
        'Ñ' | 'Ń' | 'Ň' => "N",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => "o",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ŏ' | 'Ő' => "O",
        'ř' => "r",
        'ß' => "ss",
        'ś' | 'š' | 'ş' => "s",
        'Ś' | 'Š' | 'Ş' => "S",
        'ť' | 'ţ' => "t",
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' => "u",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' => "U",
        'ý' | 'ÿ' => "y",
        'Ý' => "Y",
        'ź' | 'ż' | 'ž' => "z",
        'Ź' | 'Ż' | 'Ž' => "Z",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        _ => "",
    }
}

/// Generate the URI for a note with the given slug.
pub fn make_note_uri(slug: &str) -> String {
    format!("{NG_NS}note/{slug}")
}

/// Generate the URI for a bookmark with the given slug.
pub fn make_bookmark_uri(slug: &str) -> String {
    format!("{NG_NS}bookmark/{slug}")
}

/// Generate the URI for a concept (tag/topic) from its display name.
pub fn make_concept_uri(name: &str) -> String {
    format!("{NG_NS}concept/{}", slugify(name))
}

/// Generate the URI for a project from its name.
pub fn make_project_uri(name: &str) -> String {
    format!("{NG_NS}project/{}", slugify(name))
}

/// Generate the URI for an area from its name.
pub fn make_area_uri(name: &str) -> String {
    format!("{NG_NS}area/{}", slugify(name))
}

/// Generate the URI for a person from their display name.
pub fn make_person_uri(name: &str) -> String {
    format!("{NG_NS}person/{}", slugify(name))
}

/// Current UTC time as an ISO 8601 string.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Deduplicate a list of strings preserving first-seen order.
pub fn dedup_preserve(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    out
}
