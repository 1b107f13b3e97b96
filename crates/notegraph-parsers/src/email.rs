// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! RFC 2822 email → Note conversion.
//!
//! Mapping: Subject → title, From → creator (+ address), To then CC →
//! mentions with a name→address map, Date → created_at, first text/plain
//! part (else HTML converted to text) → content, attachment filenames →
//! an appended bullet list. Every ingested email is a fleeting note
//! tagged `email`.

use mail_parser::{Address, MessageParser, MimeHeaders};

use notegraph_core::NotegraphError;
use notegraph_core::models::{Note, NoteType};

/// Title used when the message carries no Subject header.
const UNTITLED: &str = "Untitled Email";

/// Parse a raw RFC 2822 message into a note.
///
/// Header-level tolerance is the parser's: an unparseable Date header
/// leaves `created_at` unset, a missing Subject falls back to a fixed
/// placeholder. Only a message that cannot be parsed at all is an error.
pub fn parse_email(raw: &str) -> Result<Note, NotegraphError> {
    let message = MessageParser::default()
        .parse(raw)
        .ok_or_else(|| NotegraphError::Parse("unparseable RFC 2822 message".to_string()))?;

    let title = message.subject().unwrap_or(UNTITLED).to_string();

    // Creator from the From header: display name preferred, bare address
    // otherwise.
    let mut creator = None;
    let mut creator_email = None;
    if let Some(addr) = message.from().and_then(Address::first) {
        let address = addr.address().map(str::to_string);
        creator = addr
            .name()
            .map(str::to_string)
            .or_else(|| address.clone())
            .filter(|s| !s.is_empty());
        creator_email = address;
    }

    // Mentions from To then CC, in header order. A repeated name keeps its
    // last seen address.
    let mut mentions = Vec::new();
    let mut mention_emails = std::collections::BTreeMap::new();
    for header in [message.to(), message.cc()].into_iter().flatten() {
        for addr in header.iter() {
            let Some(address) = addr.address() else {
                continue;
            };
            let name = addr
                .name()
                .filter(|n| !n.is_empty())
                .unwrap_or(address)
                .to_string();
            mentions.push(name.clone());
            mention_emails.insert(name, address.to_string());
        }
    }

    let created_at = message.date().map(|dt| dt.to_rfc3339());

    // Body: first text/plain part preferred; an HTML-only message is
    // converted to plain text by the parser. Attachment parts never become
    // body and instead contribute their filenames.
    let body = message
        .body_text(0)
        .map(|text| text.trim().to_string())
        .unwrap_or_default();

    let attachment_names: Vec<String> = message
        .attachments()
        .filter_map(|part| part.attachment_name())
        .map(str::to_string)
        .collect();

    let mut content = body;
    if !attachment_names.is_empty() {
        let listing: Vec<String> = attachment_names.iter().map(|n| format!("- {n}")).collect();
        content.push_str("\n\nAttachments:\n");
        content.push_str(&listing.join("\n"));
    }

    Ok(Note {
        title,
        content,
        note_type: NoteType::Fleeting,
        tags: vec!["email".to_string()],
        creator,
        creator_email,
        mentions,
        mention_emails,
        created_at,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: &str = "From: Alice <alice@example.com>\r\n\
To: Bob <bob@example.com>\r\n\
Subject: Meeting notes\r\n\
Date: Wed, 1 Jan 2025 10:00:00 +0000\r\n\
Content-Type: text/plain; charset=utf-8\r\n\
\r\n\
Discussed the roadmap.\r\n";

    #[test]
    fn basic_email() {
        let note = parse_email(BASIC).expect("parse");
        assert_eq!(note.title, "Meeting notes");
        assert_eq!(note.creator.as_deref(), Some("Alice"));
        assert_eq!(note.creator_email.as_deref(), Some("alice@example.com"));
        assert_eq!(note.content, "Discussed the roadmap.");
    }

    #[test]
    fn auto_tag_and_fleeting_type() {
        let note = parse_email(BASIC).expect("parse");
        assert_eq!(note.note_type, NoteType::Fleeting);
        assert_eq!(note.tags, vec!["email"]);
    }

    #[test]
    fn to_and_cc_become_mentions() {
        let raw = "From: Alice <alice@example.com>\r\n\
To: Bob <bob@example.com>, Carol <carol@example.com>\r\n\
CC: Dave <dave@example.com>\r\n\
Subject: Hello\r\n\
\r\n\
Hi all.\r\n";
        let note = parse_email(raw).expect("parse");
        assert_eq!(note.mentions, vec!["Bob", "Carol", "Dave"]);
        assert_eq!(
            note.mention_emails.get("Bob").map(String::as_str),
            Some("bob@example.com")
        );
        assert_eq!(
            note.mention_emails.get("Dave").map(String::as_str),
            Some("dave@example.com")
        );
    }

    #[test]
    fn bare_address_used_as_display_name() {
        let raw = "From: alice@example.com\r\n\
To: bob@example.com\r\n\
Subject: No names\r\n\
\r\n\
Body.\r\n";
        let note = parse_email(raw).expect("parse");
        assert_eq!(note.creator.as_deref(), Some("alice@example.com"));
        assert_eq!(note.mentions, vec!["bob@example.com"]);
    }

    #[test]
    fn date_parsed_to_iso() {
        let note = parse_email(BASIC).expect("parse");
        let created = note.created_at.expect("created_at");
        assert!(created.starts_with("2025-01-01T10:00:00"));
    }

    #[test]
    fn missing_date_leaves_created_at_unset() {
        let raw = "From: a@example.com\r\nSubject: Undated\r\n\r\nBody.\r\n";
        let note = parse_email(raw).expect("parse");
        assert!(note.created_at.is_none());
    }

    #[test]
    fn missing_subject_uses_placeholder() {
        let raw = "From: a@example.com\r\n\r\nBody only.\r\n";
        let note = parse_email(raw).expect("parse");
        assert_eq!(note.title, "Untitled Email");
    }

    #[test]
    fn multipart_prefers_plain_text() {
        let raw = "From: a@example.com\r\n\
Subject: Multipart\r\n\
MIME-Version: 1.0\r\n\
Content-Type: multipart/alternative; boundary=\"sep\"\r\n\
\r\n\
--sep\r\n\
Content-Type: text/plain; charset=utf-8\r\n\
\r\n\
Plain body.\r\n\
--sep\r\n\
Content-Type: text/html; charset=utf-8\r\n\
\r\n\
<p>HTML body.</p>\r\n\
--sep--\r\n";
        let note = parse_email(raw).expect("parse");
        assert_eq!(note.content, "Plain body.");
    }

    #[test]
    fn html_only_body_stripped() {
        let raw = "From: a@example.com\r\n\
Subject: HTML only\r\n\
MIME-Version: 1.0\r\n\
Content-Type: text/html; charset=utf-8\r\n\
\r\n\
<html><body><p>Rendered <b>content</b> here.</p></body></html>\r\n";
        let note = parse_email(raw).expect("parse");
        assert!(note.content.contains("Rendered"));
        assert!(note.content.contains("content here"));
        assert!(!note.content.contains('<'));
    }

    #[test]
    fn attachment_filenames_listed() {
        let raw = "From: a@example.com\r\n\
Subject: With attachment\r\n\
MIME-Version: 1.0\r\n\
Content-Type: multipart/mixed; boundary=\"sep\"\r\n\
\r\n\
--sep\r\n\
Content-Type: text/plain; charset=utf-8\r\n\
\r\n\
See attached.\r\n\
--sep\r\n\
Content-Type: application/pdf\r\n\
Content-Disposition: attachment; filename=\"report.pdf\"\r\n\
Content-Transfer-Encoding: base64\r\n\
\r\n\
JVBERi0=\r\n\
--sep--\r\n";
        let note = parse_email(raw).expect("parse");
        assert!(note.content.starts_with("See attached."));
        assert!(note.content.contains("Attachments:\n- report.pdf"));
    }

    #[test]
    fn no_attachments_no_section() {
        let note = parse_email(BASIC).expect("parse");
        assert!(!note.content.contains("Attachments:"));
    }
}
