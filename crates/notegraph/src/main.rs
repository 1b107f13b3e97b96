// SPDX-FileCopyrightText: 2026 Notegraph Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notegraph - a personal knowledge graph over markdown notes, emails and
//! bookmarks.
//!
//! This is the command-line entry point. All commands open the store
//! configured in `notegraph.toml` (or the XDG default location) unless
//! `--store` points somewhere else.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use notegraph_core::{Bookmark, Note, NoteType, NotegraphError, Status};
use notegraph_parsers::note_to_markdown;
use notegraph_query::{NotePatch, SearchFilter, SearchKind};
use notegraph_store::{KnowledgeStore, QueryOutcome, RdfSerialization};

/// Notegraph - a personal knowledge graph.
#[derive(Parser, Debug)]
#[command(name = "notegraph", version, about, long_about = None)]
struct Cli {
    /// Store directory (overrides the configured location).
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a note with metadata.
    AddNote {
        title: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        links: Vec<String>,
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        area: Option<String>,
        #[arg(long)]
        status: Option<String>,
        /// Note type: note, daily, project, area, resource or fleeting.
        #[arg(long = "type", default_value = "note")]
        note_type: String,
    },
    /// Add a bookmark for a URL.
    AddBookmark {
        title: String,
        url: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Ingest a markdown file (or an RFC-2822 message with --email).
    Ingest {
        path: PathBuf,
        #[arg(long)]
        email: bool,
    },
    /// Fetch a note by title and print it as markdown.
    Get { title: String },
    /// Replace a note's tags, status or other fields in place.
    Update {
        title: String,
        #[arg(long)]
        content: Option<String>,
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
        #[arg(long, value_delimiter = ',')]
        links: Option<Vec<String>>,
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        area: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Search entity titles for a substring.
    Search {
        query: String,
        /// Restrict to "note" or "bookmark".
        #[arg(long)]
        kind: Option<String>,
        /// Require exact tag membership.
        #[arg(long)]
        tag: Option<String>,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// List notes related to the given note.
    Related {
        title: String,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Show triple count and per-type entity counts.
    Stats,
    /// Run a read-only SPARQL query (SELECT, ASK, CONSTRUCT or DESCRIBE).
    Sparql { query: String },
    /// Run a SPARQL 1.1 update (INSERT DATA, DELETE WHERE, ...).
    SparqlUpdate { body: String },
    /// Export the graph (to stdout, or to --path).
    Export {
        #[arg(long, default_value = "turtle")]
        format: String,
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Import an RDF file.
    Import {
        path: PathBuf,
        #[arg(long, default_value = "turtle")]
        format: String,
    },
    /// Delete a note (or a bookmark with --bookmark) and its inbound edges.
    Delete {
        title: String,
        #[arg(long)]
        bookmark: bool,
    },
    /// Wipe the whole graph. Requires --confirm.
    Clear {
        #[arg(long)]
        confirm: bool,
    },
    /// Print a summary of the ontology vocabulary.
    Ontology,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("notegraph: {err}");
            ExitCode::FAILURE
        }
    }
}

fn open_store(path_override: Option<PathBuf>) -> Result<KnowledgeStore, NotegraphError> {
    let path = match path_override {
        Some(path) => path,
        None => {
            let config = notegraph_config::load_config()
                .map_err(|e| NotegraphError::Config(e.to_string()))?;
            config.store.resolved_path()
        }
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    KnowledgeStore::open(&path)
}

fn run(cli: Cli) -> Result<(), NotegraphError> {
    let store = open_store(cli.store)?;
    match cli.command {
        Commands::AddNote {
            title,
            content,
            tags,
            links,
            project,
            area,
            status,
            note_type,
        } => {
            let mut note = Note::new(&title);
            note.content = content;
            note.note_type = NoteType::parse(&note_type);
            note.tags = tags;
            note.links = links;
            note.project = project;
            note.area = area;
            note.status = status.as_deref().map(Status::parse);
            let outcome = notegraph_query::add_note(&store, note)?;
            println!("{} ({} triples)", outcome.uri, outcome.triples_inserted);
        }
        Commands::AddBookmark {
            title,
            url,
            description,
            tags,
            status,
        } => {
            let bookmark = Bookmark {
                title,
                url,
                description,
                tags,
                status: status.as_deref().map(Status::parse),
                ..Bookmark::default()
            };
            let outcome = notegraph_query::add_bookmark(&store, bookmark)?;
            println!("{} ({} triples)", outcome.uri, outcome.triples_inserted);
        }
        Commands::Ingest { path, email } => {
            let outcome = if email {
                let raw = std::fs::read_to_string(&path)?;
                notegraph_query::ingest_email(&store, &raw)?
            } else {
                notegraph_query::ingest_markdown_file(&store, &path)?
            };
            println!(
                "{} <- {} ({} triples)",
                outcome.uri,
                path.display(),
                outcome.triples_inserted
            );
        }
        Commands::Get { title } => match notegraph_query::get_note(&store, &title)? {
            Some(note) => print!("{}", note_to_markdown(&note)),
            None => println!("not found: {title}"),
        },
        Commands::Update {
            title,
            content,
            tags,
            links,
            project,
            area,
            status,
        } => {
            let patch = NotePatch {
                content,
                tags,
                links,
                project,
                area,
                status: status.as_deref().map(Status::parse),
                ..NotePatch::default()
            };
            match notegraph_query::update_note(&store, &title, patch)? {
                Some(outcome) => println!(
                    "{} (-{} +{} triples)",
                    outcome.uri, outcome.triples_removed, outcome.triples_inserted
                ),
                None => println!("not found: {title}"),
            }
        }
        Commands::Search {
            query,
            kind,
            tag,
            limit,
        } => {
            let kind = match kind.as_deref() {
                None => None,
                Some("note") => Some(SearchKind::Note),
                Some("bookmark") => Some(SearchKind::Bookmark),
                Some(other) => {
                    return Err(NotegraphError::Config(format!(
                        "unknown kind '{other}' (expected note or bookmark)"
                    )))
                }
            };
            let filter = SearchFilter { kind, tag, limit };
            for hit in notegraph_query::search(&store, &query, &filter)? {
                println!("{}\t{}\t{}", hit.kind, hit.title, hit.uri);
            }
        }
        Commands::Related { title, limit } => {
            for rel in notegraph_query::related_notes(&store, &title, limit)? {
                println!("{}\t{}\t{}", rel.relation, rel.title, rel.uri);
            }
        }
        Commands::Stats => {
            let stats = notegraph_query::stats(&store)?;
            println!("total triples: {}", stats.total_triples);
            for (kind, count) in &stats.entity_counts {
                println!("{kind}\t{count}");
            }
        }
        Commands::Sparql { query } => match store.query(&query)? {
            QueryOutcome::Solutions(rows) => {
                for row in rows {
                    let mut vars: Vec<_> = row.iter().collect();
                    vars.sort_by_key(|(name, _)| name.clone());
                    let line: Vec<String> = vars
                        .into_iter()
                        .map(|(name, value)| format!("{name}={value}"))
                        .collect();
                    println!("{}", line.join("\t"));
                }
            }
            QueryOutcome::Boolean(value) => println!("{value}"),
            QueryOutcome::Triples(triples) => {
                for t in triples {
                    println!("{}\t{}\t{}", t.subject, t.predicate, t.object.value());
                }
            }
        },
        Commands::SparqlUpdate { body } => {
            store.update(&body)?;
            println!("update applied");
        }
        Commands::Export { format, path } => {
            let format = RdfSerialization::parse(&format)?;
            match path {
                Some(path) => {
                    store.export_to_file(format, &path)?;
                    println!("exported to {}", path.display());
                }
                None => print!("{}", store.export(format)?),
            }
        }
        Commands::Import { path, format } => {
            let format = RdfSerialization::parse(&format)?;
            let added = store.import_file(&path, format)?;
            println!("imported {added} triples from {}", path.display());
        }
        Commands::Delete { title, bookmark } => {
            let outcome = if bookmark {
                notegraph_query::delete_bookmark(&store, &title)?
            } else {
                notegraph_query::delete_note(&store, &title)?
            };
            if outcome.deleted {
                println!("deleted {} ({} triples)", outcome.uri, outcome.triples_removed);
            } else {
                println!("not found: {title}");
            }
        }
        Commands::Clear { confirm } => {
            let outcome = notegraph_query::clear_all(&store, confirm)?;
            println!("{}", outcome.message);
        }
        Commands::Ontology => print!("{}", notegraph_store::ontology_summary()),
    }
    Ok(())
}
