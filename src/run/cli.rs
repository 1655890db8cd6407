use crate::md_doc::ParseOptions;
use crate::output::{OutputFormat, OutputOptions};
use crate::select::Projection;
use clap::Parser;
use derive_builder::Builder;

macro_rules! create_options_structs {
    (
        $(
            $(#[$meta:meta])*
            clap $clap:tt
            pub $name:ident : $ty:ty
        ),* $(,)?
    ) => {
        #[derive(Clone, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Parser)]
        #[command(version, about, long_about = None, disable_help_flag = true)]
        #[doc(hidden)]
        pub struct CliOptions {
            $(
            $(#[$meta])*
            #[arg$clap]
            pub(crate) $name: $ty,
            )*

            // clap-only stuff:

            /// Output results as JSON.
            #[arg(short, long)]
            pub(crate) json: bool,

            /// Output results as CSV: a row per file, and a column per query. This takes precedence over --json.
            #[arg(long)]
            pub(crate) csv: bool,

            /// Output results as Markdown, with frontmatter fields gathered into a frontmatter block.
            #[arg(short, long)]
            pub(crate) markdown: bool,

            /// Log debugging information to stderr.
            #[arg(short, long)]
            pub(crate) verbose: bool,

            /// Print help. This is long-only, since -h means --head.
            #[arg(long, action = clap::ArgAction::Help)]
            pub(crate) help: Option<bool>,

            /// A comma-separated list of queries.
            ///
            /// A query that starts with "#" selects sections: "#" is every level-1 section, "##Notes" is every level-2
            /// section titled "Notes", and "##Notes[1]" is the second of those. Anything else selects a frontmatter
            /// field by name.
            #[arg(value_name = "queries")]
            pub(crate) queries: String,

            /// An optional list of Markdown files to query, by path. If not provided, standard input will be used.
            ///
            /// A path of "-" represents standard input. All but the first "-" are ignored.
            ///
            /// Each file is queried on its own, and the results are printed in the order the files are given. A file
            /// that can't be read is reported and skipped.
            #[arg()]
            pub(crate) markdown_file_paths: Vec<String>,
        }

        /// Options analogous to the mdslice CLI's switches.
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Builder)]
        #[builder(default, setter(into))]
        pub struct RunOptions {
            $(
            $(#[$meta])*
            pub $name: $ty,
            )*

            /// The output format. This is analogous to the `-j`, `--csv`, and `-m` flags in the CLI.
            pub output: OutputFormat,

            /// The comma-separated queries.
            pub queries: String,

            pub markdown_file_paths: Vec<String>,
        }

        impl From<CliOptions> for RunOptions {
            fn from(value: CliOptions) -> Self {
                let output = if value.csv {
                    OutputFormat::Csv
                } else if value.json {
                    OutputFormat::Json
                } else if value.markdown {
                    OutputFormat::Markdown
                } else {
                    OutputFormat::Text
                };
                Self {
                    $($name: value.$name,)*
                    output,
                    queries: value.queries,
                    markdown_file_paths: value.markdown_file_paths,
                }
            }
        }
    };
}

create_options_structs! {
    /// Only print headings (and frontmatter field names).
    clap(short = 'h', long = "head", conflicts_with = "body_only")
    pub head_only: bool,

    /// Only print bodies (and frontmatter values).
    clap(short = 'b', long = "body")
    pub body_only: bool,

    /// Remove fenced code blocks from section bodies.
    clap(long)
    pub no_blocks: bool,

    /// Print results without file banners, blank lines between results, or frontmatter field names.
    clap(short, long)
    pub raw: bool,

    /// With --json, combine each file's results into a single object keyed by query.
    clap(short, long, requires = "json")
    pub object: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            head_only: false,
            body_only: false,
            no_blocks: false,
            raw: false,
            object: false,
            output: OutputFormat::Text,
            queries: String::new(),
            markdown_file_paths: vec![],
        }
    }
}

impl CliOptions {
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

impl From<&RunOptions> for Projection {
    fn from(options: &RunOptions) -> Self {
        Projection {
            head_only: options.head_only,
            body_only: options.body_only,
            raw: options.raw,
        }
    }
}

impl From<&RunOptions> for ParseOptions {
    fn from(options: &RunOptions) -> Self {
        ParseOptions {
            strip_code_blocks: options.no_blocks,
        }
    }
}

impl From<&RunOptions> for OutputOptions {
    fn from(options: &RunOptions) -> Self {
        OutputOptions {
            format: options.output,
            raw: options.raw,
            object: options.object,
        }
    }
}
