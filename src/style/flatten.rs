use crate::doc::{Inline, StyleSet};

/// One unit of the flattened intermediate representation.
///
/// Text runs explode into one `Char` per character so a style delta can land on any sub-range.
/// Every other node becomes a single `Atom` carrying the original node unchanged, so it can never
/// be split or partially styled; the `placeholder` exists only so the node's visible text
/// participates in substring search.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Cell {
    Char { ch: char, style: StyleSet },
    Atom { placeholder: String, node: Inline },
}

impl Cell {
    /// The bytes this cell contributes to the flattened plain text.
    pub(crate) fn plain_len(&self) -> usize {
        match self {
            Cell::Char { ch, .. } => ch.len_utf8(),
            Cell::Atom { placeholder, .. } => placeholder.len(),
        }
    }

    pub(crate) fn push_plain(&self, out: &mut String) {
        match self {
            Cell::Char { ch, .. } => out.push(*ch),
            Cell::Atom { placeholder, .. } => out.push_str(placeholder),
        }
    }
}

/// Flattens a node sequence into cells. Pure and total; the input is not consumed, so a caller
/// that gets no match back can keep its original value untouched.
pub(crate) fn flatten(inlines: &[Inline]) -> Vec<Cell> {
    let mut cells = Vec::new();
    for inline in inlines {
        match inline {
            Inline::Text(text) => {
                for ch in text.value.chars() {
                    cells.push(Cell::Char {
                        ch,
                        style: text.style.clone(),
                    });
                }
            }
            other => cells.push(Cell::Atom {
                placeholder: placeholder(other),
                node: other.clone(),
            }),
        }
    }
    cells
}

/// The plain-text stand-in an atomic node contributes to substring matching.
///
/// This is matching-only text; rendering a node for display happens in [`crate::output`].
pub(crate) fn placeholder(node: &Inline) -> String {
    match node {
        // Text never becomes an Atom, but the match stays exhaustive so a new variant can't be
        // silently skipped.
        Inline::Text(text) => text.value.clone(),
        Inline::Link(link) => link.children.iter().map(|text| text.value.as_str()).collect(),
        Inline::Math(math) => {
            let latex = math.latex.trim();
            if latex.is_empty() {
                String::new()
            } else {
                format!("${latex}$")
            }
        }
        Inline::Citation(citation) => citation.display_text.clone(),
        Inline::FigureRef(cross_ref)
        | Inline::TableRef(cross_ref)
        | Inline::EquationRef(cross_ref)
        | Inline::SectionRef(cross_ref) => cross_ref.display_text.clone(),
        Inline::Footnote(footnote) => footnote.display_text.clone(),
    }
}
