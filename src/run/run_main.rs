use crate::md_doc::{MdDoc, ParseOptions};
use crate::output::{write_results, WriteError};
use crate::query::Query;
use crate::run::RunOptions;
use crate::select::execute_all;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::{env, io};

/// The run's overall possible error.
///
/// Queries and Markdown can't fail to parse, so all of these are about I/O.
#[derive(Debug)]
pub enum Error {
    /// Couldn't read an input file.
    FileReadError(Input, io::Error),

    /// Couldn't render the results in the requested format.
    OutputFormat(WriteError),

    /// Couldn't write the rendered results to stdout.
    OutputWrite(io::Error),
}

impl std::error::Error for Error {}

/// Stdin or an input file by path.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Input {
    Stdin,
    FilePath(String),
}

impl Input {
    /// The label for results from this input: its path, or `"stdin"`.
    pub fn label(&self) -> &str {
        match self {
            Input::Stdin => "stdin",
            Input::FilePath(path) => path,
        }
    }
}

impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Stdin => f.write_str("stdin"),
            Input::FilePath(file) => write!(f, "file {file:?}"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let portable = !env::var("MDSLICE_PORTABLE_ERRORS").unwrap_or_default().is_empty();
        match self {
            Error::FileReadError(file, err) => {
                if portable {
                    writeln!(f, "{} while reading {file}", err.kind())
                } else {
                    writeln!(f, "{err} while reading {file}")
                }
            }
            Error::OutputFormat(err) => writeln!(f, "{err}"),
            Error::OutputWrite(err) => {
                if portable {
                    writeln!(f, "{} while writing output", err.kind())
                } else {
                    writeln!(f, "{err} while writing output")
                }
            }
        }
    }
}

/// A simple facade for handling I/O.
///
/// This trait lets you do "I/O-y stuff" like mocking out stdin or reading files. The [`run`] method uses it.
pub trait OsFacade {
    /// Read stdin (or your mock of it) to a `String`.
    fn read_stdin(&self) -> io::Result<String>;

    /// Read a file path (or your mock of one) to a `String`.
    fn read_file(&self, path: &str) -> io::Result<String>;

    /// Get a writer for stdout (or your mock of it).
    fn stdout(&mut self) -> impl Write;

    /// Handle an error.
    fn write_error(&mut self, err: Error);

    /// Read a single input.
    ///
    /// The default implementation (which you should feel free to use) delegates to [`Self::read_stdin`] or
    /// [`Self::read_file`].
    fn read_input(&self, input: &Input) -> io::Result<String> {
        match input {
            Input::Stdin => self.read_stdin(),
            Input::FilePath(path) => self.read_file(path),
        }
    }
}

/// Runs mdslice end to end.
///
/// This uses the provided [RunOptions] and [OsFacade] to read each input into its own [`MdDoc`], runs every query in
/// [`RunOptions::queries`] against each of them, and then writes the results to the given [`OsFacade`] in the format
/// specified by [`RunOptions::output`].
///
/// An input that can't be read is reported via [`OsFacade::write_error`] and skipped; the rest are still queried. Returns
/// whether everything was read and written successfully. Queries that match nothing are not failures.
pub fn run(options: &RunOptions, os: &mut impl OsFacade) -> bool {
    let queries = Query::parse_list(&options.queries);
    let parse_options = ParseOptions::from(options);

    let mut all_ok = true;
    let mut docs = Vec::new();
    for input in inputs(&options.markdown_file_paths) {
        match os.read_input(&input) {
            Ok(text) => docs.push(MdDoc::parse(&text, input.label(), &parse_options)),
            Err(err) => {
                tracing::warn!(%input, %err, "skipping input that couldn't be read");
                os.write_error(Error::FileReadError(input, err));
                all_ok = false;
            }
        }
    }

    let results = execute_all(&docs, &queries, options.into());
    let rendered = match write_results(&results, &options.into()) {
        Ok(rendered) => rendered,
        Err(err) => {
            os.write_error(Error::OutputFormat(err));
            return false;
        }
    };
    if rendered.is_empty() {
        return all_ok;
    }

    let written = {
        let mut stdout = os.stdout();
        writeln!(stdout, "{rendered}").and_then(|_| stdout.flush())
    };
    if let Err(err) = written {
        os.write_error(Error::OutputWrite(err));
        return false;
    }
    all_ok
}

/// Resolves the file path arguments to inputs. No paths means stdin. The first `"-"` means stdin, and any others are
/// ignored.
fn inputs(markdown_file_paths: &[String]) -> Vec<Input> {
    if markdown_file_paths.is_empty() {
        return vec![Input::Stdin];
    }
    let mut have_read_stdin = false;
    let mut inputs = Vec::with_capacity(markdown_file_paths.len());
    for path in markdown_file_paths {
        if path != "-" {
            inputs.push(Input::FilePath(path.to_string()));
        } else if !have_read_stdin {
            inputs.push(Input::Stdin);
            have_read_stdin = true;
        }
    }
    inputs
}
