//! End-to-end runs.
//!
//! This module combines the [`crate::md_doc`], [`crate::query`], [`crate::select`], and [`crate::output`] mods into a
//! single workflow. It's what the CLI uses, but you can also use it to run that same workflow within-process.
//!
//! ## Example
//!
//! ```
//! # use mdslice::run;
//!
//! // First, let's define a mocked I/O. Replace this with whatever you need.
//! #[derive(Default)]
//! struct MockIo {
//!     stdout: Vec<u8>,
//! }
//!
//! impl run::OsFacade for MockIo {
//!     fn read_stdin(&self) -> std::io::Result<String> {
//!         Ok("---\ntitle: Hello\n---\n# Intro\nWelcome!".to_string())
//!     }
//!
//!     fn read_file(&self, path: &str) -> std::io::Result<String> {
//!         Err(std::io::Error::new(std::io::ErrorKind::NotFound, path))
//!     }
//!
//!     fn stdout(&mut self) -> impl std::io::Write {
//!         &mut self.stdout
//!     }
//!
//!     fn write_error(&mut self, err: run::Error) {
//!         eprintln!("{err}")
//!     }
//! }
//!
//! // Now, use it:
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! // Define our "CLI" options. Use the defaults, but ask for the title and the body of every level-1 section.
//! let run_options = run::RunOptionsBuilder::default()
//!     .queries("title, #")
//!     .body_only(true)
//!     .build()?;
//!
//! let mut os_facade = MockIo::default();
//! let all_inputs_read = run::run(&run_options, &mut os_facade);
//! let stdout_text = String::from_utf8(os_facade.stdout)?;
//!
//! assert_eq!(all_inputs_read, true);
//! assert_eq!(stdout_text, "Hello\n\nWelcome!\n");
//! #
//! #     Ok(())
//! # }
//! ```
mod cli;
mod run_main;

pub use cli::*;
pub use run_main::*;
