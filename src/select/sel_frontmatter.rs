use crate::md_doc::{render_value, FieldLookup, MdDoc};
use crate::query::{FrontmatterQuery, Query};
use crate::select::{Projection, QueryResult};

#[derive(Debug, PartialEq)]
pub(crate) struct FrontmatterSelector<'q> {
    query: &'q FrontmatterQuery,
}

impl<'q> From<&'q FrontmatterQuery> for FrontmatterSelector<'q> {
    fn from(query: &'q FrontmatterQuery) -> Self {
        Self { query }
    }
}

impl FrontmatterSelector<'_> {
    /// A frontmatter query always produces exactly one result. If the field is missing, it's a placeholder; if it's
    /// present but null, the body is an empty string.
    pub(crate) fn select(&self, doc: &MdDoc, query: &Query, query_text: &str, projection: Projection) -> QueryResult {
        let field = self.query.field.as_str();
        let value = match doc.frontmatter.get(field) {
            FieldLookup::Missing => return QueryResult::placeholder(doc, query, query_text),
            FieldLookup::Null => String::new(),
            FieldLookup::Value(value) => render_value(value),
        };
        let label = (!projection.raw).then_some(field);
        QueryResult::projected(doc, query, query_text, projection, label, &value)
    }
}
