use crate::md_doc::Section;

/// Splits lines into sections.
///
/// Any line that starts with `#` (after trimming whitespace) is a heading, regardless of what follows the `#`s. Lines
/// before the first heading don't belong to any section, and are dropped.
pub(crate) fn split_sections<'a, I>(lines: I) -> Vec<Section>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut splitter = SectionSplitter::default();
    for line in lines {
        splitter.push_line(line);
    }
    splitter.finish()
}

#[derive(Default)]
struct SectionSplitter<'a> {
    sections: Vec<Section>,
    open: Option<OpenSection<'a>>,
    /// How many sections have been opened at each level, indexed by level.
    level_counts: Vec<usize>,
}

struct OpenSection<'a> {
    level: usize,
    title: &'a str,
    heading: &'a str,
    occurrence_index: usize,
    body_lines: Vec<&'a str>,
}

impl<'a> SectionSplitter<'a> {
    fn push_line(&mut self, line: &'a str) {
        match parse_heading(line) {
            Some((level, title)) => {
                self.close_open_section();
                let occurrence_index = self.next_occurrence(level);
                self.open = Some(OpenSection {
                    level,
                    title,
                    heading: line,
                    occurrence_index,
                    body_lines: Vec::new(),
                });
            }
            None => {
                if let Some(open) = &mut self.open {
                    open.body_lines.push(line);
                }
            }
        }
    }

    fn next_occurrence(&mut self, level: usize) -> usize {
        if self.level_counts.len() <= level {
            self.level_counts.resize(level + 1, 0);
        }
        let count = &mut self.level_counts[level];
        let occurrence = *count;
        *count += 1;
        occurrence
    }

    fn close_open_section(&mut self) {
        let Some(open) = self.open.take() else {
            return;
        };
        let body = open.body_lines.join("\n");
        self.sections.push(Section {
            level: open.level,
            title: open.title.to_string(),
            heading: open.heading.to_string(),
            body: body.trim_end_matches('\n').to_string(),
            occurrence_index: open.occurrence_index,
        });
    }

    fn finish(mut self) -> Vec<Section> {
        self.close_open_section();
        self.sections
    }
}

/// If this line is a heading, returns its level and (trimmed) title.
fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim();
    let after_markers = trimmed.trim_start_matches('#');
    let level = trimmed.len() - after_markers.len();
    if level == 0 {
        None
    } else {
        Some((level, after_markers.trim()))
    }
}
