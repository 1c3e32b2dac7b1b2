//! The selection-based style engine.
//!
//! Every public operation is a pure function over an inline-content sequence: flatten the
//! sequence into per-character cells, locate the user's selection in the flattened plain text,
//! apply a style delta to the text cells in that range, and compact the cells back into the
//! minimal node sequence. Atomic nodes (links, citations, math, cross-references, footnotes)
//! travel through as single indivisible cells and are never styled or split.
//!
//! All failure modes — empty selection, selection not present, selection covering only atomic
//! placeholders — are no-ops that hand the input value back.

mod compact;
mod edit;
mod flatten;
mod ops;

pub use ops::*;
