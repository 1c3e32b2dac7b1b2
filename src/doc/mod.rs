//! The bilingual paper content model.
//!
//! A [`Document`] is a list of typed [`Block`]s; each block with editable text owns one
//! [`Localized`] pair of inline-content sequences (`en` and `zh`). The sequences themselves are
//! `Vec<`[`Inline`]`>`, the input and output type of the [`crate::style`] engine.

mod tree;

pub use tree::*;

#[cfg(test)]
mod tree_test_utils;
#[cfg(test)]
pub(crate) use tree_test_utils::*;
