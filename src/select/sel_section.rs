use crate::md_doc::{MdDoc, Section};
use crate::query::{Query, SectionQuery};
use crate::select::match_selector::MatchSelector;
use crate::select::{Projection, QueryResult};

#[derive(Debug, PartialEq)]
pub(crate) struct SectionSelector<'q> {
    query: &'q SectionQuery,
}

impl<'q> From<&'q SectionQuery> for SectionSelector<'q> {
    fn from(query: &'q SectionQuery) -> Self {
        Self { query }
    }
}

impl MatchSelector<Section> for SectionSelector<'_> {
    fn matches(&self, section: &Section) -> bool {
        section.level == self.query.level && (self.query.title.is_empty() || section.title == self.query.title)
    }
}

impl SectionSelector<'_> {
    /// Without an explicit index, every matching section is a result, and no matches means no results.
    ///
    /// With one, the index counts only the sections that match the level and title (so it's generally not the same as
    /// [`Section::occurrence_index`]), and a miss produces a single placeholder.
    pub(crate) fn select(
        &self,
        doc: &MdDoc,
        query: &Query,
        query_text: &str,
        projection: Projection,
    ) -> Vec<QueryResult> {
        let mut matching = self.find_matches(&doc.sections);
        let to_result = |section: &Section| {
            QueryResult::projected(doc, query, query_text, projection, Some(&section.heading), &section.body)
        };
        match self.query.explicit_index {
            Some(rank) => match matching.nth(rank) {
                Some(section) => vec![to_result(section)],
                None => vec![QueryResult::placeholder(doc, query, query_text)],
            },
            None => matching.map(to_result).collect(),
        }
    }
}
