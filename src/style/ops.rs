use crate::doc::{ColorTarget, Inline, StyleDelta, StyleFlag};
use crate::style::compact::compact;
use crate::style::edit::{all_have_flag, locate, mutate};
use crate::style::flatten::flatten;

/// Toggles bold over the first occurrence of `selection` in the sequence's plain text.
///
/// A partially-bold selection normalizes to fully bold; a fully-bold one reverts to unstyled.
/// If the selection is empty or absent, the input comes back unchanged.
pub fn toggle_bold(content: Vec<Inline>, selection: &str) -> Vec<Inline> {
    toggle_flag(content, selection, StyleFlag::Bold)
}

/// Like [`toggle_bold`], for italic.
pub fn toggle_italic(content: Vec<Inline>, selection: &str) -> Vec<Inline> {
    toggle_flag(content, selection, StyleFlag::Italic)
}

/// Like [`toggle_bold`], for underline.
pub fn toggle_underline(content: Vec<Inline>, selection: &str) -> Vec<Inline> {
    toggle_flag(content, selection, StyleFlag::Underline)
}

/// Sets the text color over the selection; an empty `color` clears it back to inherited.
pub fn apply_text_color(content: Vec<Inline>, selection: &str, color: &str) -> Vec<Inline> {
    apply_color(content, selection, ColorTarget::Text, color)
}

/// Sets the background color over the selection; an empty `color` clears it.
pub fn apply_background_color(content: Vec<Inline>, selection: &str, color: &str) -> Vec<Inline> {
    apply_color(content, selection, ColorTarget::Background, color)
}

/// Removes every style attribute (flags and colors) from the text in the selection.
pub fn clear_all_styles(content: Vec<Inline>, selection: &str) -> Vec<Inline> {
    apply_delta(content, selection, &StyleDelta::ClearAll)
}

/// Canonicalizes a sequence: merges adjacent identically-styled text runs and drops empty ones.
/// Idempotent.
pub fn normalize(content: Vec<Inline>) -> Vec<Inline> {
    let cells = flatten(&content);
    compact(cells)
}

/// Whether `selection` occurs anywhere in the sequence's flattened plain text.
pub fn selection_exists(content: &[Inline], selection: &str) -> bool {
    let cells = flatten(content);
    locate(&cells, selection).is_some()
}

fn toggle_flag(content: Vec<Inline>, selection: &str, flag: StyleFlag) -> Vec<Inline> {
    let cells = flatten(&content);
    let Some(range) = locate(&cells, selection) else {
        return content;
    };
    let delta = if all_have_flag(&cells, &range, flag) {
        StyleDelta::ClearFlag(flag)
    } else {
        StyleDelta::SetFlag(flag)
    };
    compact(mutate(cells, &range, &delta))
}

fn apply_color(content: Vec<Inline>, selection: &str, target: ColorTarget, color: &str) -> Vec<Inline> {
    let delta = if color.is_empty() {
        StyleDelta::ClearColor(target)
    } else {
        StyleDelta::SetColor(target, color.to_string())
    };
    apply_delta(content, selection, &delta)
}

fn apply_delta(content: Vec<Inline>, selection: &str, delta: &StyleDelta) -> Vec<Inline> {
    let cells = flatten(&content);
    let Some(range) = locate(&cells, selection) else {
        return content;
    };
    compact(mutate(cells, &range, delta))
}
