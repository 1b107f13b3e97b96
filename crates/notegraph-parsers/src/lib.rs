// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsers converting raw inputs into canonical Notegraph entities.
//!
//! Two ingest formats are supported: wiki-style markdown documents with
//! YAML frontmatter, wikilinks, and inline hash tags; and RFC 2822 email
//! messages (optionally MIME multi-part). Both produce a
//! [`notegraph_core::Note`].

pub mod email;
pub mod markdown;

pub use email::parse_email;
pub use markdown::{note_to_markdown, parse_markdown, parse_markdown_file};
