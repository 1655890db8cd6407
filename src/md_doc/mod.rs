//! The parsed form of a Markdown document.
//!
//! A document is a (possibly empty) block of YAML frontmatter, followed by a flat list of heading-delimited
//! [`Section`]s. See [`MdDoc::parse`].
mod code_fence;
mod doc;
mod frontmatter;
mod sections;

pub use code_fence::strip_code_blocks;
pub use doc::*;
pub use frontmatter::*;
