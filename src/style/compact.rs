use crate::doc::{Inline, Text};
use crate::style::flatten::Cell;

/// Rebuilds a node sequence from cells.
///
/// Atoms re-emit their original node verbatim. Maximal runs of consecutive chars with identical
/// styling merge into one [`Text`] node, so the output never holds two adjacent identically-styled
/// text nodes — the sequence's minimality invariant.
pub(crate) fn compact(cells: Vec<Cell>) -> Vec<Inline> {
    let mut result = Vec::new();
    let mut run: Option<Text> = None;

    for cell in cells {
        match cell {
            Cell::Atom { node, .. } => {
                if let Some(text) = run.take() {
                    result.push(Inline::Text(text));
                }
                result.push(node);
            }
            Cell::Char { ch, style } => match &mut run {
                Some(text) if text.style == style => text.value.push(ch),
                _ => {
                    if let Some(text) = run.take() {
                        result.push(Inline::Text(text));
                    }
                    run = Some(Text {
                        value: ch.to_string(),
                        style,
                    });
                }
            },
        }
    }
    if let Some(text) = run {
        result.push(Inline::Text(text));
    }
    result
}
