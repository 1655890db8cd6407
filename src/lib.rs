//! Query Markdown documents by their frontmatter fields and sections.
//!
//! The crate is organized as a pipeline:
//!
//! 1. [`md_doc`] parses text into an [`md_doc::MdDoc`]: its YAML frontmatter, and its flat list of sections.
//! 2. [`query`] compiles query strings like `title` or `##Notes[1]` into [`query::Query`]s.
//! 3. [`select`] runs queries against documents, producing [`select::QueryResult`]s.
//! 4. [`output`] renders those results as text, JSON, CSV, or Markdown.
//!
//! The [`run`] module ties them together the way the `mdslice` CLI does.
//!
//! ```
//! use mdslice::md_doc::{MdDoc, ParseOptions};
//! use mdslice::output::{write_results, OutputOptions};
//! use mdslice::query::Query;
//! use mdslice::select::{execute_all, Projection};
//!
//! let doc = MdDoc::parse("---\ntitle: Hello\n---\n## Notes\nRemember this.", "notes.md", &ParseOptions::default());
//! let queries = Query::parse_list("title,##Notes");
//! let results = execute_all([&doc], &queries, Projection::default());
//! let rendered = write_results(&results, &OutputOptions::default()).unwrap();
//! assert_eq!(rendered, "title\nHello\n\n## Notes\nRemember this.");
//! ```
pub mod md_doc;
pub mod output;
pub mod query;
pub mod run;
pub mod select;
