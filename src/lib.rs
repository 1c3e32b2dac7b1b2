//! Selection-based inline styling for bilingual paper documents.
//!
//! A paper is a list of typed blocks; each text-bearing block owns one inline-content sequence
//! per language. The [`style`] engine takes a sequence plus the plain text a user selected, and
//! returns a new sequence with a style attribute toggled, set, or cleared over exactly that span
//! — treating links, citations, math, cross-references, and footnotes as indivisible units.
//!
//! - [`doc`] — the document and inline-content model
//! - [`style`] — the flatten → locate → mutate → compact editing engine
//! - [`output`] — plain-text views of inline content
//! - [`run`] — the CLI workflow, also runnable in-process

pub mod doc;
pub mod output;
pub mod run;
pub mod style;
