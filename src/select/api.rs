use crate::md_doc::MdDoc;
use crate::query::Query;
use crate::select::sel_frontmatter::FrontmatterSelector;
use crate::select::sel_section::SectionSelector;
use crate::select::{Projection, QueryResult};

impl Query {
    /// Runs this query against a document.
    ///
    /// - A frontmatter query always produces exactly one result; if the field is missing, it's a placeholder with no
    ///   heading or body.
    /// - A section query without an explicit index produces one result per matching section, in document order. If
    ///   nothing matches, it produces no results.
    /// - A section query with an explicit index produces exactly one result: the matching section at that index, or a
    ///   placeholder.
    ///
    /// ```
    /// use mdslice::md_doc::{MdDoc, ParseOptions};
    /// use mdslice::query::Query;
    /// use mdslice::select::Projection;
    ///
    /// let doc = MdDoc::parse("# One\nfirst\n# Two\nsecond", "stdin", &ParseOptions::default());
    ///
    /// let all = Query::parse("#").execute(&doc, Projection::default());
    /// assert_eq!(all.len(), 2);
    /// assert_eq!(all[1].body.as_deref(), Some("second"));
    ///
    /// let missing = Query::parse("#Three[0]").execute(&doc, Projection::default());
    /// assert_eq!(missing.len(), 1);
    /// assert_eq!(missing[0].heading, None);
    ///
    /// assert!(Query::parse("#Three").execute(&doc, Projection::default()).is_empty());
    /// ```
    pub fn execute(&self, doc: &MdDoc, projection: Projection) -> Vec<QueryResult> {
        let query_text = self.to_string();
        let results = match self {
            Query::Frontmatter(query) => {
                vec![FrontmatterSelector::from(query).select(doc, self, &query_text, projection)]
            }
            Query::Section(query) => SectionSelector::from(query).select(doc, self, &query_text, projection),
        };
        tracing::debug!(
            source = %doc.source,
            query = %query_text,
            results = results.len(),
            "executed query"
        );
        results
    }
}

/// Runs every query against every document.
///
/// Results are grouped by document, in the order the documents are given; within each document, they're in the order
/// of the queries.
pub fn execute_all<'d, D>(docs: D, queries: &[Query], projection: Projection) -> Vec<QueryResult>
where
    D: IntoIterator<Item = &'d MdDoc>,
{
    let mut results = Vec::new();
    for doc in docs {
        for query in queries {
            results.extend(query.execute(doc, projection));
        }
    }
    results
}
