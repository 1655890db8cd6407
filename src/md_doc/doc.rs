use crate::md_doc::code_fence::strip_code_blocks;
use crate::md_doc::frontmatter::{split_frontmatter, Frontmatter};
use crate::md_doc::sections::split_sections;

/// A fully parsed Markdown document.
///
/// This comprises the document's [`Frontmatter`] and its [`Section`]s, in source order. Text that comes before the
/// first heading doesn't belong to any section, and is dropped.
///
/// See [`MdDoc::parse`] for how to create one.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct MdDoc {
    /// Where this document came from: a file path, or `"stdin"`. This is only used to label results.
    pub source: String,
    pub frontmatter: Frontmatter,
    pub sections: Vec<Section>,
}

/// A heading line plus the text following it, up to the next heading of any level.
///
/// ```markdown
/// ## Notes
///
/// Some text.
/// ```
///
/// Sections don't nest: a `##` heading closes the `#` section before it, just as a `#` heading would.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Section {
    /// The number of `#`s that start the heading.
    pub level: usize,

    /// The heading's text, without its `#`s and trimmed of whitespace. This may be empty (a heading of just `##`).
    pub title: String,

    /// The heading line exactly as it appeared in the input.
    pub heading: String,

    /// Everything between this heading and the next one, with trailing newlines removed.
    pub body: String,

    /// This section's 0-based position among all sections of the same [level](Self::level), regardless of title.
    ///
    /// Given:
    ///
    /// ```markdown
    /// # A
    /// ## B
    /// # C
    /// ```
    ///
    /// `A` and `B` both have an occurrence index of 0, and `C` has 1.
    pub occurrence_index: usize,
}

/// Options for parsing Markdown.
///
/// See: [`MdDoc::parse`].
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    /// Whether to remove fenced code blocks from each section's body. Defaults to `false`.
    ///
    /// See [`strip_code_blocks`].
    pub strip_code_blocks: bool,
}

impl MdDoc {
    /// Parse some Markdown.
    ///
    /// This never fails. Malformed frontmatter gets treated as if there were no frontmatter at all, and any text
    /// (including the empty string) is a valid, if possibly section-less, document.
    ///
    /// ```
    /// use mdslice::md_doc::{MdDoc, ParseOptions};
    ///
    /// let doc = MdDoc::parse("---\ntitle: Hello\n---\n# One\nfirst\n## Two\nsecond", "stdin", &ParseOptions::default());
    /// assert_eq!(doc.frontmatter.len(), 1);
    /// assert_eq!(doc.sections.len(), 2);
    /// assert_eq!(doc.sections[1].title, "Two");
    /// assert_eq!(doc.sections[1].body, "second");
    /// ```
    pub fn parse(text: &str, source: impl Into<String>, options: &ParseOptions) -> Self {
        let source = source.into();
        let (frontmatter, remaining_lines) = split_frontmatter(text);
        let mut sections = split_sections(remaining_lines);
        if options.strip_code_blocks {
            // Each body is filtered on its own, so an unclosed fence can't swallow the next section.
            for section in &mut sections {
                section.body = strip_code_blocks(&section.body);
            }
        }
        tracing::debug!(
            source = %source,
            fields = frontmatter.len(),
            sections = sections.len(),
            "parsed document"
        );
        Self {
            source,
            frontmatter,
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::md_doc::FieldLookup;
    use crate::util::utils_for_test::*;
    use indoc::indoc;

    #[test]
    fn empty_input() {
        let doc = parse("");
        assert!(doc.frontmatter.is_empty());
        assert!(doc.sections.is_empty());
        assert_eq!(doc.source, "test.md");
    }

    #[test]
    fn frontmatter_and_sections() {
        let doc = parse(indoc! {r#"
            ---
            title: My Doc
            ---
            # Intro
            Hello
            "#});
        unwrap!(doc.frontmatter.get("title"), FieldLookup::Value(title));
        assert_eq!(title.as_str(), Some("My Doc"));
        let section = get_only(&doc.sections);
        assert_eq!(section.heading, "# Intro");
        assert_eq!(section.body, "Hello");
    }

    #[test]
    fn sections_stay_in_source_order_across_levels() {
        let doc = parse(indoc! {r#"
            ## a
            # b
            ### c
            # d
            ## e"#});
        let titles: Vec<_> = doc.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "c", "d", "e"]);
        let indexes: Vec<_> = doc.sections.iter().map(|s| (s.level, s.occurrence_index)).collect();
        assert_eq!(indexes, [(2, 0), (1, 0), (3, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn broken_frontmatter_does_not_break_sections() {
        let doc = parse(indoc! {r#"
            ---
            title: [unbalanced
            ---
            # Still here
            body"#});
        assert!(doc.frontmatter.is_empty());
        let section = get_only(&doc.sections);
        assert_eq!(section.title, "Still here");
        assert_eq!(section.body, "body");
    }

    #[test]
    fn strip_code_blocks_is_per_section() {
        let md = indoc! {r#"
            # One
            before
            ```
            never closed
            # Two
            after"#};
        let doc = MdDoc::parse(
            md,
            "test.md",
            &ParseOptions {
                strip_code_blocks: true,
            },
        );
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].body, "before");
        assert_eq!(doc.sections[1].body, "after");
    }

    #[test]
    fn code_blocks_kept_by_default() {
        let doc = parse(indoc! {r#"
            # One
            ```rust
            let x = 1;
            ```"#});
        let section = get_only(&doc.sections);
        assert_eq!(section.body, "```rust\nlet x = 1;\n```");
    }

    fn parse(md: &str) -> MdDoc {
        MdDoc::parse(md, "test.md", &ParseOptions::default())
    }
}
