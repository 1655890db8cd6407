use crate::output::{by_source, write_heading_and_body};
use crate::query::QueryKind;
use crate::select::QueryResult;

/// Writes results back out as Markdown.
///
/// For each document, frontmatter results are gathered into a `---` frontmatter block (as long as at least one of them
/// has a value), followed by the section results, separated by blank lines. If there's more than one document, each
/// one starts with an HTML comment naming it.
pub struct MdWriter;

impl MdWriter {
    pub fn write(&self, results: &[QueryResult], out: &mut String) {
        let groups: Vec<_> = by_source(results).collect();
        let with_banners = groups.len() > 1;
        for (group_idx, group) in groups.into_iter().enumerate() {
            if with_banners {
                if group_idx > 0 {
                    out.push('\n');
                }
                out.push_str("<!-- File: ");
                out.push_str(&group[0].source);
                out.push_str(" -->\n\n");
            }
            Self::write_frontmatter(group, out);

            let mut wrote_any = false;
            for result in group.iter().filter(|r| r.kind == QueryKind::Section && !r.is_blank()) {
                if wrote_any {
                    out.push('\n');
                }
                write_heading_and_body(out, result, "\n\n");
                wrote_any = true;
            }
        }
    }

    fn write_frontmatter(group: &[QueryResult], out: &mut String) {
        let fields: Vec<_> = group.iter().filter(|r| r.kind == QueryKind::Frontmatter).collect();
        let has_any_value = fields.iter().any(|r| r.body.as_deref().is_some_and(|b| !b.is_empty()));
        if !has_any_value {
            return;
        }
        out.push_str("---\n");
        for field in fields {
            // The heading is the field's name, unless the projection dropped it.
            let name = field.heading.as_deref().filter(|h| !h.is_empty()).unwrap_or(&field.query);
            out.push_str(name);
            match field.body.as_deref().filter(|b| !b.is_empty()) {
                Some(value) => {
                    out.push_str(": ");
                    out.push_str(value);
                    out.push('\n');
                }
                None => out.push_str(": \"\"\n"),
            }
        }
        out.push_str("---\n\n");
    }
}
