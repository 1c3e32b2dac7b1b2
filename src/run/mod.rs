//! End-to-end runs.
//!
//! This module combines the [`crate::doc`], [`crate::style`], and [`crate::output`] mods into a
//! single workflow. It's useful for building functionality like the CLI's, but running it
//! within-process.
//!
//! ## Example
//!
//! ```
//! # use inkspan::run;
//!
//! // First, let's define a mocked I/O. Replace this with whatever you need.
//! #[derive(Default)]
//! struct MockIo {
//!     stdout: Vec<u8>,
//! }
//!
//! impl run::OsFacade for MockIo {
//!     fn read_stdin(&self) -> std::io::Result<String> {
//!         let doc = r#"{"blocks": [
//!             {"id": "p1", "type": "paragraph",
//!              "content": {"en": [{"type": "text", "value": "hello world"}]}}
//!         ]}"#;
//!         Ok(doc.to_string())
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
//! // Bold the word "world" in block p1's English text.
//! let options = run::RunOptionsBuilder::default()
//!     .block("p1".to_string())
//!     .command(run::Command::Bold)
//!     .selection(Some("world".to_string()))
//!     .build()?;
//!
//! let mut os_facade = MockIo::default();
//! let found = run::run(&options, &mut os_facade);
//! assert!(found);
//!
//! let stdout_text = String::from_utf8(os_facade.stdout)?;
//! assert!(stdout_text.contains(r#""bold": true"#));
//! #
//! #     Ok(())
//! # }
//! ```

mod cli;
mod run_main;

pub use cli::*;
pub use run_main::*;
