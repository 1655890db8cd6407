use crate::query::pest::{parse_query, Pair, Rule};
use std::fmt::{Display, Formatter, Write};

/// A compiled query.
///
/// Every string compiles to some query; see [`Query::parse`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Query {
    /// A top-level frontmatter field, like `title`.
    Frontmatter(FrontmatterQuery),
    /// Sections by level, and optionally title and index, like `##Notes[1]`.
    Section(SectionQuery),
}

/// Which of the [`Query`] variants a query (or a result of one) is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QueryKind {
    Frontmatter,
    Section,
}

/// query for [`Query::Frontmatter`]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrontmatterQuery {
    /// The field name, exactly as given (it is not trimmed).
    pub field: String,
}

/// query for [`Query::Section`]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionQuery {
    /// The heading level to match: the number of `#`s.
    pub level: usize,

    /// The exact title to match. Empty means any title.
    pub title: String,

    /// The `N` in a trailing `[N]`, if there was one.
    ///
    /// This is not the same as defaulting to `[0]`. Without an index, the query selects _every_ matching section. With
    /// one, it selects only the N-th (0-based) section among those that match the level and title, or produces a single
    /// empty result if there is no such section.
    pub explicit_index: Option<usize>,
}

impl Query {
    /// Compiles a query string.
    ///
    /// Strings that start with `#` are section queries:
    ///
    /// - `#` every level-1 section
    /// - `##Notes` every level-2 section titled "Notes"
    /// - `##Notes[1]` the second level-2 section titled "Notes"
    /// - `##[3]` the fourth level-2 section
    ///
    /// Anything else is a frontmatter field name.
    ///
    /// ```
    /// use mdslice::query::{Query, SectionQuery};
    ///
    /// let query = Query::parse("## Notes [1]");
    /// assert_eq!(
    ///     query,
    ///     Query::Section(SectionQuery {
    ///         level: 2,
    ///         title: "Notes".to_string(),
    ///         explicit_index: Some(1),
    ///     })
    /// );
    /// assert_eq!(query.to_string(), "##Notes[1]");
    /// ```
    pub fn parse(query_text: &str) -> Self {
        let parsed = match parse_query(query_text) {
            Ok(pairs) => pairs.into_iter().find_map(|pair| match pair.as_rule() {
                Rule::section_query => Some(Self::Section(SectionQuery::from_pair(pair))),
                Rule::frontmatter_query => Some(Self::frontmatter(pair.as_str())),
                _ => None,
            }),
            Err(err) => {
                tracing::warn!(query = query_text, %err, "couldn't parse query; treating it as a frontmatter field");
                None
            }
        };
        let query = parsed.unwrap_or_else(|| Self::frontmatter(query_text));
        tracing::debug!(query = query_text, compiled = ?query, "compiled query");
        query
    }

    /// Compiles a comma-separated list of queries, as given on the command line.
    ///
    /// Each query is trimmed, and empty ones are skipped. Queries can't contain commas.
    pub fn parse_list(queries_text: &str) -> Vec<Self> {
        queries_text
            .split(',')
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(Self::parse)
            .collect()
    }

    pub fn kind(&self) -> QueryKind {
        match self {
            Query::Frontmatter(_) => QueryKind::Frontmatter,
            Query::Section(_) => QueryKind::Section,
        }
    }

    fn frontmatter(field: &str) -> Self {
        Self::Frontmatter(FrontmatterQuery {
            field: field.to_string(),
        })
    }
}

impl SectionQuery {
    fn from_pair(pair: Pair) -> Self {
        let mut level = 0;
        let mut title = "";
        let mut index_digits = None;
        for child in pair.into_inner() {
            match child.as_rule() {
                Rule::section_start => level = child.as_str().len(),
                Rule::section_title => title = child.as_str(),
                Rule::explicit_index => {
                    index_digits = child
                        .into_inner()
                        .find(|p| p.as_rule() == Rule::index_digits)
                        .map(|p| p.as_str());
                }
                _ => {}
            }
        }
        // An index too big for a usize saturates. It's still explicit, so it yields a single (empty) result.
        let explicit_index = index_digits.map(|digits| digits.parse::<usize>().unwrap_or(usize::MAX));
        Self::new(level, title, explicit_index)
    }

    fn new(level: usize, title: &str, explicit_index: Option<usize>) -> Self {
        Self {
            level,
            title: title.trim().to_string(),
            explicit_index,
        }
    }
}

/// Renders the query in its canonical form. This is the text that labels each result.
///
/// Section titles are rendered trimmed and directly after the `#`s, and `[N]` is only rendered if the original query
/// had one.
impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Query::Frontmatter(q) => f.write_str(&q.field),
            Query::Section(q) => Display::fmt(q, f),
        }
    }
}

impl Display for SectionQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for _ in 0..self.level {
            f.write_char('#')?;
        }
        f.write_str(&self.title)?;
        if let Some(index) = self.explicit_index {
            write!(f, "[{index}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::utils_for_test::*;

    mod sections {
        use super::*;

        #[test]
        fn level_only() {
            check_section("#", 1, "", None);
            check_section("###", 3, "", None);
        }

        #[test]
        fn level_and_title() {
            check_section("##Notes", 2, "Notes", None);
            check_section("## Notes", 2, "Notes", None);
            check_section("##  Release notes  ", 2, "Release notes", None);
        }

        #[test]
        fn level_and_index() {
            check_section("#[0]", 1, "", Some(0));
            check_section("##[3]", 2, "", Some(3));
        }

        #[test]
        fn level_title_and_index() {
            check_section("##Notes[1]", 2, "Notes", Some(1));
            check_section("## Notes [12]", 2, "Notes", Some(12));
        }

        #[test]
        fn index_must_be_at_end() {
            check_section("##Notes[1] more", 2, "Notes[1] more", None);
        }

        #[test]
        fn only_last_bracket_is_the_index() {
            check_section("##[1][2]", 2, "[1]", Some(2));
        }

        #[test]
        fn non_numeric_brackets_are_title() {
            check_section("##Notes[x]", 2, "Notes[x]", None);
            check_section("##Notes[]", 2, "Notes[]", None);
            check_section("##Notes[-1]", 2, "Notes[-1]", None);
        }

        #[test]
        fn huge_index_saturates_and_stays_explicit() {
            check_section("##Notes[99999999999999999999999999]", 2, "Notes", Some(usize::MAX));
            check_section("#[99999999999999999999999999]", 1, "", Some(usize::MAX));
        }

        #[test]
        fn hashes_after_space_are_title() {
            check_section("# #tag", 1, "#tag", None);
        }

        fn check_section(query_text: &str, level: usize, title: &str, explicit_index: Option<usize>) {
            let query = Query::parse(query_text);
            unwrap!(query, Query::Section(actual));
            assert_eq!(
                actual,
                SectionQuery {
                    level,
                    title: title.to_string(),
                    explicit_index,
                }
            );
        }
    }

    mod frontmatter {
        use super::*;

        #[test]
        fn simple() {
            check_field("title");
        }

        #[test]
        fn not_trimmed() {
            check_field(" title ");
        }

        #[test]
        fn brackets_are_part_of_the_name() {
            check_field("tags[0]");
        }

        #[test]
        fn hash_not_at_start() {
            check_field(" #title");
            check_field("title#1");
        }

        #[test]
        fn empty() {
            check_field("");
        }

        fn check_field(query_text: &str) {
            let query = Query::parse(query_text);
            assert_eq!(query.kind(), QueryKind::Frontmatter);
            unwrap!(query, Query::Frontmatter(actual));
            assert_eq!(actual.field, query_text);
        }
    }

    mod canonical {
        use super::*;

        #[test]
        fn implicit_index_is_not_rendered() {
            check("#", "#");
            check("## Notes", "##Notes");
        }

        #[test]
        fn explicit_index_is_rendered() {
            check("#[0]", "#[0]");
            check("## Notes [1]", "##Notes[1]");
        }

        #[test]
        fn frontmatter_renders_as_is() {
            check("date", "date");
        }

        fn check(query_text: &str, expect: &str) {
            assert_eq!(Query::parse(query_text).to_string(), expect);
        }
    }

    mod list {
        use super::*;

        #[test]
        fn splits_and_trims() {
            let queries = Query::parse_list(" title , ## Notes[1],#");
            let rendered: Vec<_> = queries.iter().map(Query::to_string).collect();
            assert_eq!(rendered, ["title", "##Notes[1]", "#"]);
        }

        #[test]
        fn skips_empty() {
            let queries = Query::parse_list(",, title,  ,");
            assert_eq!(get_only(&queries), &Query::parse("title"));
        }

        #[test]
        fn empty_string() {
            assert!(Query::parse_list("").is_empty());
        }
    }
}
