//! Plain-text views of inline content.

mod plain_str;

pub use plain_str::*;
