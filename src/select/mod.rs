//! Running compiled [queries](crate::query::Query) against [documents](crate::md_doc::MdDoc).
//!
//! See [`Query::execute`](crate::query::Query::execute).
mod api;
mod match_selector;
mod result;
mod sel_frontmatter;
mod sel_section;

pub use api::*;
pub use result::*;
