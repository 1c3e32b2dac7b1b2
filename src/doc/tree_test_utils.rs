#[cfg(test)]
pub(crate) use test_utils::*;

#[cfg(test)]
mod test_utils {
    /// Builds a `Vec<Inline>` from a terse bracket syntax:
    ///
    /// ```ignore
    /// inlines!["See ", cite["r1", "[1]"], " and ", math["x^2"], bold["this"]]
    /// ```
    ///
    /// Parenthesized entries pass arbitrary `Inline` expressions through unchanged.
    macro_rules! inlines {
        [] => {
            Vec::<crate::doc::Inline>::new()
        };

        // Plain text literal
        [$text:literal $(, $($rest:tt)*)?] => {
            {
                #[allow(unused_mut)]
                let mut result = vec![
                    crate::doc::Inline::Text(crate::doc::Text::plain($text))
                ];
                $(result.extend(inlines![$($rest)*]);)?
                result
            }
        };

        // Bold text, for expected values
        [bold[$text:literal] $(, $($rest:tt)*)?] => {
            {
                #[allow(unused_mut)]
                let mut result = vec![
                    crate::doc::Inline::Text(crate::doc::Text {
                        value: $text.to_string(),
                        style: crate::doc::StyleSet {
                            bold: Some(true),
                            ..crate::doc::StyleSet::default()
                        },
                    })
                ];
                $(result.extend(inlines![$($rest)*]);)?
                result
            }
        };

        // Italic text, for expected values
        [italic[$text:literal] $(, $($rest:tt)*)?] => {
            {
                #[allow(unused_mut)]
                let mut result = vec![
                    crate::doc::Inline::Text(crate::doc::Text {
                        value: $text.to_string(),
                        style: crate::doc::StyleSet {
                            italic: Some(true),
                            ..crate::doc::StyleSet::default()
                        },
                    })
                ];
                $(result.extend(inlines![$($rest)*]);)?
                result
            }
        };

        // Link with plain display text, like `link["text"]("https://example.com")`
        [link[$text:literal]($url:literal) $(, $($rest:tt)*)?] => {
            {
                #[allow(unused_mut)]
                let mut result = vec![
                    crate::doc::Inline::Link(crate::doc::Link {
                        url: $url.to_string(),
                        title: None,
                        children: vec![crate::doc::Text::plain($text)],
                    })
                ];
                $(result.extend(inlines![$($rest)*]);)?
                result
            }
        };

        // Inline math, like `math["x^2"]`
        [math[$latex:literal] $(, $($rest:tt)*)?] => {
            {
                #[allow(unused_mut)]
                let mut result = vec![
                    crate::doc::Inline::Math(crate::doc::Math {
                        latex: $latex.to_string(),
                    })
                ];
                $(result.extend(inlines![$($rest)*]);)?
                result
            }
        };

        // Citation with one reference id, like `cite["r1", "[1]"]`
        [cite[$id:literal, $display:literal] $(, $($rest:tt)*)?] => {
            {
                #[allow(unused_mut)]
                let mut result = vec![
                    crate::doc::Inline::Citation(crate::doc::Citation {
                        reference_ids: vec![$id.to_string()],
                        display_text: $display.to_string(),
                    })
                ];
                $(result.extend(inlines![$($rest)*]);)?
                result
            }
        };

        // Figure cross-reference, like `figref["fig1", "Figure 1"]`
        [figref[$target:literal, $display:literal] $(, $($rest:tt)*)?] => {
            {
                #[allow(unused_mut)]
                let mut result = vec![
                    crate::doc::Inline::FigureRef(crate::doc::CrossRef {
                        target_id: $target.to_string(),
                        display_text: $display.to_string(),
                    })
                ];
                $(result.extend(inlines![$($rest)*]);)?
                result
            }
        };

        // Section cross-reference, like `secref["sec2", "§2"]`
        [secref[$target:literal, $display:literal] $(, $($rest:tt)*)?] => {
            {
                #[allow(unused_mut)]
                let mut result = vec![
                    crate::doc::Inline::SectionRef(crate::doc::CrossRef {
                        target_id: $target.to_string(),
                        display_text: $display.to_string(),
                    })
                ];
                $(result.extend(inlines![$($rest)*]);)?
                result
            }
        };

        // Footnote, like `footnote["fn1", "the note", "[a]"]`
        [footnote[$id:literal, $content:literal, $display:literal] $(, $($rest:tt)*)?] => {
            {
                #[allow(unused_mut)]
                let mut result = vec![
                    crate::doc::Inline::Footnote(crate::doc::Footnote {
                        id: $id.to_string(),
                        content: $content.to_string(),
                        display_text: $display.to_string(),
                    })
                ];
                $(result.extend(inlines![$($rest)*]);)?
                result
            }
        };

        // Any Inline expression, like `(some_node.clone())`
        [($node:expr) $(, $($rest:tt)*)?] => {
            {
                #[allow(unused_mut)]
                let mut result = vec![$node];
                $(result.extend(inlines![$($rest)*]);)?
                result
            }
        };
    }
    pub(crate) use inlines;

    /// Turn a pattern match into an `if let ... else panic!`.
    macro_rules! unwrap {
        ($enum_value:expr, $enum_variant:pat) => {
            let node = $enum_value;
            let node_debug = format!("{:?}", node);
            let $enum_variant = node else {
                panic!("Expected {} but saw {}", stringify!($enum_variant), node_debug);
            };
        };
    }
    pub(crate) use unwrap;
}
