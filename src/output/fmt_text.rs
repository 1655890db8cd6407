use crate::output::{by_source, write_heading_and_body};
use crate::select::QueryResult;

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct TextWriterOptions {
    /// Skip the per-document banners and the blank lines between results.
    pub raw: bool,
}

/// Writes results as plain text: each result's heading, and then its body.
///
/// Blank results (placeholders, or results whose parts are all empty) are skipped. Unless [raw], results are separated by
/// blank lines, and if there's more than one document, each document's results are introduced with a `==> source <==`
/// banner.
///
/// [raw]: TextWriterOptions::raw
pub struct TextWriter {
    options: TextWriterOptions,
}

impl TextWriter {
    pub fn with_options(options: TextWriterOptions) -> Self {
        Self { options }
    }

    pub fn write(&self, results: &[QueryResult], out: &mut String) {
        if self.options.raw {
            for result in results.iter().filter(|r| !r.is_blank()) {
                write_heading_and_body(out, result, "\n");
            }
            return;
        }

        let groups: Vec<_> = by_source(results).collect();
        let with_banners = groups.len() > 1;
        for (group_idx, group) in groups.into_iter().enumerate() {
            if with_banners {
                if group_idx > 0 {
                    out.push('\n');
                }
                out.push_str("==> ");
                out.push_str(&group[0].source);
                out.push_str(" <==\n");
            }
            let mut wrote_any = false;
            for result in group.iter().filter(|r| !r.is_blank()) {
                if wrote_any {
                    out.push('\n');
                }
                write_heading_and_body(out, result, "\n");
                wrote_any = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_results::*;
    use indoc::indoc;

    #[test]
    fn single_result() {
        check(
            false,
            &[section("a.md", "#", Some("# One"), Some("body"))],
            indoc! {r#"
                # One
                body
            "#},
        );
    }

    #[test]
    fn heading_without_body() {
        check(false, &[section("a.md", "#", Some("# One"), Some(""))], "# One\n");
        check(false, &[section("a.md", "#", Some("# One"), None)], "# One\n");
    }

    #[test]
    fn body_without_heading() {
        check(false, &[section("a.md", "#", None, Some("body"))], "body\n");
    }

    #[test]
    fn results_separated_by_blank_line() {
        check(
            false,
            &[
                section("a.md", "#", Some("# One"), Some("first")),
                field("a.md", "title", Some("title"), Some("Hello")),
            ],
            indoc! {r#"
                # One
                first

                title
                Hello
            "#},
        );
    }

    #[test]
    fn blank_results_skipped_without_extra_separators() {
        check(
            false,
            &[
                field("a.md", "missing", None, None),
                section("a.md", "#", Some("# One"), Some("first")),
                section("a.md", "##[4]", None, None),
                section("a.md", "#", Some("# Two"), Some("second")),
            ],
            indoc! {r#"
                # One
                first

                # Two
                second
            "#},
        );
    }

    #[test]
    fn banners_for_multiple_sources() {
        check(
            false,
            &[
                section("a.md", "#", Some("# A"), Some("a body")),
                section("b.md", "#", Some("# B"), Some("b body")),
                section("b.md", "#", Some("# C"), None),
            ],
            indoc! {r#"
                ==> a.md <==
                # A
                a body

                ==> b.md <==
                # B
                b body

                # C
            "#},
        );
    }

    #[test]
    fn raw_has_no_banners_or_separators() {
        check(
            true,
            &[
                section("a.md", "#", Some("# A"), Some("a body")),
                field("b.md", "title", None, Some("B's title")),
                section("b.md", "#[3]", None, None),
            ],
            indoc! {r#"
                # A
                a body
                B's title
            "#},
        );
    }

    fn check(raw: bool, results: &[QueryResult], expect: &str) {
        let mut out = String::new();
        TextWriter::with_options(TextWriterOptions { raw }).write(results, &mut out);
        assert_eq!(out, expect);
    }
}
