use crate::doc::Inline;
use std::borrow::Borrow;

/// Renders an inline-content sequence as unstyled plain text.
///
/// This is the human-readable flat view: link display text, citation and cross-reference display
/// strings, raw latex for math. It is *not* the matcher's placeholder text — the style engine
/// computes that separately (math gets `$…$` wrapping there, for instance).
pub fn inlines_to_plain_string<N: Borrow<Inline>>(inlines: &[N]) -> String {
    let mut result = String::with_capacity(inlines.len() * 5); // just a guess
    for inline in inlines {
        build_inline(&mut result, inline.borrow());
    }
    result
}

fn build_inline(out: &mut String, elem: &Inline) {
    match elem {
        Inline::Text(text) => out.push_str(&text.value),
        Inline::Link(link) => {
            for child in &link.children {
                out.push_str(&child.value);
            }
        }
        Inline::Math(math) => out.push_str(&math.latex),
        Inline::Citation(citation) => out.push_str(&citation.display_text),
        Inline::FigureRef(cross_ref)
        | Inline::TableRef(cross_ref)
        | Inline::EquationRef(cross_ref)
        | Inline::SectionRef(cross_ref) => out.push_str(&cross_ref.display_text),
        Inline::Footnote(footnote) => out.push_str(&footnote.display_text),
    }
}
