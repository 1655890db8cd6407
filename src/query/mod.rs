//! Compiling query strings.
//!
//! A query is either a frontmatter field name (`title`), or a section query made of one or more `#`s, an optional
//! title, and an optional index in brackets (`##Notes[1]`). See [`Query`].
mod pest;
mod query;

pub use query::*;
