use crate::select::QueryResult;
use std::collections::HashMap;

/// Writes results as CSV: a header row of `file` and then each query, and one row per document.
///
/// Each cell is the result's body with its whitespace collapsed, so that it fits on one line. If a query produced more
/// than one result for a document, the last one wins.
pub struct CsvWriter;

struct Row<'a> {
    source: &'a str,
    cells: HashMap<&'a str, String>,
}

impl CsvWriter {
    pub fn write(&self, results: &[QueryResult], out: &mut String) -> Result<(), csv::Error> {
        if results.is_empty() {
            return Ok(());
        }

        let mut queries: Vec<&str> = Vec::new();
        let mut rows: Vec<Row> = Vec::new();
        for result in results {
            if !queries.contains(&result.query.as_str()) {
                queries.push(&result.query);
            }
            let row_idx = match rows.iter().position(|row| row.source == result.source) {
                Some(idx) => idx,
                None => {
                    rows.push(Row {
                        source: &result.source,
                        cells: HashMap::new(),
                    });
                    rows.len() - 1
                }
            };
            let cell = collapse_whitespace(result.body.as_deref().unwrap_or(""));
            rows[row_idx].cells.insert(&result.query, cell);
        }

        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer.write_record(std::iter::once("file").chain(queries.iter().copied()))?;
        for row in &rows {
            let cells = queries
                .iter()
                .map(|query| row.cells.get(query).map(String::as_str).unwrap_or(""));
            writer.write_record(std::iter::once(row.source).chain(cells))?;
        }
        let bytes = writer.into_inner().map_err(|err| csv::Error::from(err.into_error()))?;
        out.push_str(&String::from_utf8_lossy(&bytes));
        Ok(())
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_results::*;
    use indoc::indoc;

    #[test]
    fn empty() {
        check(&[], "");
    }

    #[test]
    fn one_source() {
        check(
            &[
                field("a.md", "title", Some("title"), Some("Hello")),
                section("a.md", "##Notes", Some("## Notes"), Some("some notes")),
            ],
            indoc! {r#"
                file,title,##Notes
                a.md,Hello,some notes
            "#},
        );
    }

    #[test]
    fn whitespace_collapsed() {
        check(
            &[section("a.md", "#", Some("# A"), Some("line one\n\n  line\ttwo  "))],
            indoc! {r#"
                file,#
                a.md,line one line two
            "#},
        );
    }

    #[test]
    fn quoting() {
        check(
            &[field("a.md", "title", Some("title"), Some(r#"Hello, "world""#))],
            indoc! {r#"
                file,title
                a.md,"Hello, ""world"""
            "#},
        );
    }

    #[test]
    fn missing_and_null_are_empty_cells() {
        check(
            &[
                field("a.md", "draft", Some("draft"), Some("")),
                field("a.md", "author", None, None),
                field("b.md", "draft", Some("draft"), Some("yes")),
            ],
            indoc! {r#"
                file,draft,author
                a.md,,
                b.md,yes,
            "#},
        );
    }

    #[test]
    fn queries_in_first_seen_order_across_sources() {
        check(
            &[
                field("a.md", "one", Some("one"), Some("a1")),
                field("b.md", "one", Some("one"), Some("b1")),
                field("b.md", "two", Some("two"), Some("b2")),
            ],
            indoc! {r#"
                file,one,two
                a.md,a1,
                b.md,b1,b2
            "#},
        );
    }

    #[test]
    fn last_result_wins() {
        check(
            &[
                section("a.md", "#", Some("# A"), Some("first")),
                section("a.md", "#", Some("# B"), Some("second")),
            ],
            indoc! {r#"
                file,#
                a.md,second
            "#},
        );
    }

    fn check(results: &[QueryResult], expect: &str) {
        let mut out = String::new();
        CsvWriter.write(results, &mut out).unwrap();
        assert_eq!(out, expect);
    }
}
