//! Writing [`QueryResult`]s for people or other programs to read.
//!
//! Each writer turns the full, ordered list of results into a single string, without a trailing newline. An empty
//! string means there's nothing to print.
mod fmt_csv;
mod fmt_json;
mod fmt_md;
mod fmt_text;

pub use fmt_csv::*;
pub use fmt_json::*;
pub use fmt_md::*;
pub use fmt_text::*;

use crate::select::QueryResult;
use std::fmt::{Display, Formatter};

/// Output formats, analogous to the CLI's `-j`, `--csv`, and `-m` flags.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputFormat {
    /// Headings and bodies as plain text. This is the default.
    #[default]
    Text,
    /// Pretty-printed JSON: an object per result, or (with [`OutputOptions::object`]) an object per document.
    Json,
    /// One CSV row per document, with a column per query.
    Csv,
    /// Markdown, with any frontmatter fields gathered into a frontmatter block.
    Markdown,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let self_str = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Markdown => "markdown",
        };
        f.write_str(self_str)
    }
}

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// For text output: print only the results, without per-document banners or blank lines between results.
    pub raw: bool,
    /// For JSON output: combine each document's results into one object, keyed by query.
    pub object: bool,
}

/// Failure while rendering results.
#[derive(Debug)]
pub enum WriteError {
    Json(serde_json::Error),
    Csv(csv::Error),
}

impl std::error::Error for WriteError {}

impl Display for WriteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteError::Json(err) => write!(f, "couldn't write JSON: {err}"),
            WriteError::Csv(err) => write!(f, "couldn't write CSV: {err}"),
        }
    }
}

/// Renders results in the requested format.
pub fn write_results(results: &[QueryResult], options: &OutputOptions) -> Result<String, WriteError> {
    let mut out = String::with_capacity(256); // just a guess
    match options.format {
        OutputFormat::Text => TextWriter::with_options(TextWriterOptions { raw: options.raw }).write(results, &mut out),
        OutputFormat::Json => JsonWriter::with_options(JsonWriterOptions {
            object: options.object,
        })
        .write(results, &mut out)
        .map_err(WriteError::Json)?,
        OutputFormat::Csv => CsvWriter.write(results, &mut out).map_err(WriteError::Csv)?,
        OutputFormat::Markdown => MdWriter.write(results, &mut out),
    }
    let keep = out.trim_end_matches('\n').len();
    out.truncate(keep);
    Ok(out)
}

/// Splits results into runs that share a source. Results for one document are always contiguous, so in practice this
/// is one group per document.
fn by_source(results: &[QueryResult]) -> impl Iterator<Item = &[QueryResult]> {
    results.chunk_by(|a, b| a.source == b.source)
}

/// Writes a result's heading (if any), then its body (if any) on the following lines, with a single newline between
/// them and after the body.
fn write_heading_and_body(out: &mut String, result: &QueryResult, separator: &str) {
    let heading = result.heading.as_deref().filter(|h| !h.is_empty());
    let body = result.body.as_deref().filter(|b| !b.is_empty());
    if let Some(heading) = heading {
        out.push_str(heading);
        if body.is_some() {
            out.push_str(separator);
        }
    }
    if let Some(body) = body {
        out.push_str(body);
    }
    out.push('\n');
}


#[cfg(test)]
mod tests {
    use super::test_results::*;
    use super::*;

    #[test]
    fn empty_results_are_empty_for_every_format() {
        for format in [OutputFormat::Text, OutputFormat::Csv, OutputFormat::Markdown] {
            let options = OutputOptions {
                format,
                ..OutputOptions::default()
            };
            assert_eq!(write_results(&[], &options).unwrap(), "", "{format}");
        }
    }

    #[test]
    fn trailing_newlines_trimmed() {
        let results = [section("a.md", "#", Some("# A"), Some("body\n\n"))];
        let out = write_results(&results, &OutputOptions::default()).unwrap();
        assert_eq!(out, "# A\nbody");
    }

    #[test]
    fn groups_are_contiguous_runs() {
        let results = [
            section("a.md", "#", Some("# A"), None),
            section("a.md", "#", Some("# B"), None),
            section("b.md", "#", Some("# C"), None),
        ];
        let sizes: Vec<_> = by_source(&results).map(<[QueryResult]>::len).collect();
        assert_eq!(sizes, [2, 1]);
    }
}
