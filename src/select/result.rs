use crate::md_doc::MdDoc;
use crate::query::{Query, QueryKind};

/// One result of running a [`Query`] against an [`MdDoc`].
///
/// For a section, the heading is the section's heading line, and the body is its body text. For a frontmatter field,
/// the heading is the field's name and the body is its value.
///
/// Both are `None` for a placeholder result. Placeholders stand in for a frontmatter field that isn't there, or a
/// section query with an explicit index that doesn't match anything. Either part may also be `None` because the
/// [`Projection`] left it out.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryResult {
    /// The [source](MdDoc::source) of the document this came from.
    pub source: String,
    /// The canonical form of the query that produced this.
    pub query: String,
    pub kind: QueryKind,
    pub heading: Option<String>,
    pub body: Option<String>,
}

/// Which parts of each [`QueryResult`] to keep.
///
/// At most one of [`head_only`](Self::head_only) and [`body_only`](Self::body_only) should be set.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Projection {
    /// Only keep headings (and frontmatter field names).
    pub head_only: bool,
    /// Only keep bodies (and frontmatter values).
    pub body_only: bool,
    /// Don't label frontmatter values with their field names.
    pub raw: bool,
}

impl Projection {
    pub(crate) fn keep_heading(&self) -> bool {
        !self.body_only
    }

    pub(crate) fn keep_body(&self) -> bool {
        !self.head_only
    }
}

impl QueryResult {
    pub(crate) fn placeholder(doc: &MdDoc, query: &Query, query_text: &str) -> Self {
        Self {
            source: doc.source.clone(),
            query: query_text.to_string(),
            kind: query.kind(),
            heading: None,
            body: None,
        }
    }

    pub(crate) fn projected(
        doc: &MdDoc,
        query: &Query,
        query_text: &str,
        projection: Projection,
        heading: Option<&str>,
        body: &str,
    ) -> Self {
        Self {
            source: doc.source.clone(),
            query: query_text.to_string(),
            kind: query.kind(),
            heading: heading.filter(|_| projection.keep_heading()).map(str::to_string),
            body: Some(body).filter(|_| projection.keep_body()).map(str::to_string),
        }
    }

    /// Whether there's nothing to show for this result: no heading and no body, or only empty ones.
    pub fn is_blank(&self) -> bool {
        let is_empty = |s: &Option<String>| s.as_deref().map_or(true, str::is_empty);
        is_empty(&self.heading) && is_empty(&self.body)
    }
}
