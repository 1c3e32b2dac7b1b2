use crate::doc::{StyleDelta, StyleFlag};
use crate::style::flatten::Cell;
use memchr::memmem;
use std::ops::Range;

/// Finds the first occurrence of `selection` in the cells' flattened plain text and returns the
/// matched span in *cell-index* units.
///
/// The match itself runs over byte offsets, but an atom's placeholder can be many bytes long, so
/// byte offsets are not cell indices. We bridge the two with a per-cell start-offset table built
/// alongside the plain text: a cell is inside the returned range iff its whole span lies inside
/// the matched bytes. A match that lands strictly inside one placeholder therefore maps to an
/// empty range, which downstream mutation treats as a no-op.
///
/// Only the first occurrence is ever used. A selection that appears more than once always resolves
/// to the leftmost match; disambiguating would need real DOM range plumbing from the caller, which
/// is out of scope.
pub(crate) fn locate(cells: &[Cell], selection: &str) -> Option<Range<usize>> {
    if selection.is_empty() {
        return None;
    }

    let mut plain = String::new();
    let mut starts = Vec::with_capacity(cells.len());
    for cell in cells {
        starts.push(plain.len());
        cell.push_plain(&mut plain);
    }

    let match_start = memmem::find(plain.as_bytes(), selection.as_bytes())?;
    let match_end = match_start + selection.len();

    let mut lo = None;
    let mut hi = 0;
    for (idx, cell) in cells.iter().enumerate() {
        let cell_start = starts[idx];
        let cell_end = cell_start + cell.plain_len();
        if cell_start >= match_start && cell_end <= match_end {
            if lo.is_none() {
                lo = Some(idx);
            }
            hi = idx + 1;
        }
    }

    let lo = lo.unwrap_or(0);
    Some(lo..hi.max(lo))
}

/// True iff every text cell in `range` already carries `flag`. Atoms are ignored: they can't
/// carry the flag, and they don't block a "fully set" verdict.
pub(crate) fn all_have_flag(cells: &[Cell], range: &Range<usize>, flag: StyleFlag) -> bool {
    cells[range.clone()].iter().all(|cell| match cell {
        Cell::Char { style, .. } => style.flag(flag) == Some(true),
        Cell::Atom { .. } => true,
    })
}

/// Applies `delta` to every text cell inside `range`, leaving atoms and out-of-range cells
/// untouched. Allocates the result; the usual pipeline hands the cells in by value.
pub(crate) fn mutate(cells: Vec<Cell>, range: &Range<usize>, delta: &StyleDelta) -> Vec<Cell> {
    cells
        .into_iter()
        .enumerate()
        .map(|(idx, cell)| match cell {
            Cell::Char { ch, style } if range.contains(&idx) => Cell::Char {
                ch,
                style: style.apply(delta),
            },
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::inlines;
    use crate::style::flatten::flatten;

    mod locate {
        use super::*;

        #[test]
        fn plain_text_match() {
            let cells = flatten(&inlines!["Hello world"]);
            assert_eq!(locate(&cells, "world"), Some(6..11));
        }

        #[test]
        fn match_at_start() {
            let cells = flatten(&inlines!["Hello world"]);
            assert_eq!(locate(&cells, "Hello"), Some(0..5));
        }

        #[test]
        fn empty_selection_is_not_found() {
            let cells = flatten(&inlines!["Hello"]);
            assert_eq!(locate(&cells, ""), None);
        }

        #[test]
        fn absent_selection_is_not_found() {
            let cells = flatten(&inlines!["Hello"]);
            assert_eq!(locate(&cells, "zzz"), None);
        }

        #[test]
        fn first_occurrence_wins() {
            let cells = flatten(&inlines!["abc abc"]);
            assert_eq!(locate(&cells, "abc"), Some(0..3));
        }

        #[test]
        fn multi_byte_placeholder_does_not_skew_later_offsets() {
            // The citation placeholder "[12, 13]" is 8 bytes but one cell. Text after it must
            // still resolve to the right cells.
            let cells = flatten(&inlines!["See ", cite["r12", "[12, 13]"], " for details"]);
            // cells: 'S' 'e' 'e' ' ' <atom> ' ' 'f' 'o' 'r' ...
            assert_eq!(locate(&cells, "for"), Some(6..9));
        }

        #[test]
        fn selection_spanning_an_atom_includes_it() {
            let cells = flatten(&inlines!["a ", cite["r1", "[1]"], " b"]);
            // plain text: "a [1] b"
            assert_eq!(locate(&cells, "a [1] b"), Some(0..5));
        }

        #[test]
        fn match_inside_a_placeholder_maps_to_an_empty_range() {
            let cells = flatten(&inlines!["a ", cite["r1", "[12]"], " b"]);
            // "12" only occurs inside the atom's placeholder; no cell is fully covered.
            let range = locate(&cells, "12").unwrap();
            assert!(range.is_empty());
        }

        #[test]
        fn multi_byte_text_chars() {
            let cells = flatten(&inlines!["双语论文编辑"]);
            assert_eq!(locate(&cells, "论文"), Some(2..4));
        }
    }

    mod all_have_flag {
        use super::*;
        use crate::doc::StyleFlag;

        #[test]
        fn uniformly_set() {
            let cells = flatten(&inlines![bold["abc"]]);
            assert!(all_have_flag(&cells, &(0..3), StyleFlag::Bold));
        }

        #[test]
        fn mixed_is_false() {
            let cells = flatten(&inlines![bold["abc"], "def"]);
            assert!(!all_have_flag(&cells, &(0..6), StyleFlag::Bold));
        }

        #[test]
        fn atoms_do_not_block_a_fully_set_verdict() {
            let cells = flatten(&inlines![bold["ab"], cite["r1", "[1]"], bold["cd"]]);
            assert!(all_have_flag(&cells, &(0..5), StyleFlag::Bold));
        }

        #[test]
        fn empty_range_is_vacuously_true() {
            let cells = flatten(&inlines!["abc"]);
            assert!(all_have_flag(&cells, &(1..1), StyleFlag::Bold));
        }
    }

    mod mutate {
        use super::*;
        use crate::doc::{StyleDelta, StyleFlag, StyleSet};

        #[test]
        fn applies_only_inside_range() {
            let cells = flatten(&inlines!["abcd"]);
            let cells = mutate(cells, &(1..3), &StyleDelta::SetFlag(StyleFlag::Bold));
            let bolded: Vec<bool> = cells
                .iter()
                .map(|cell| match cell {
                    Cell::Char { style, .. } => style.flag(StyleFlag::Bold) == Some(true),
                    Cell::Atom { .. } => panic!("no atoms expected"),
                })
                .collect();
            assert_eq!(bolded, vec![false, true, true, false]);
        }

        #[test]
        fn atoms_pass_through_unchanged() {
            let nodes = inlines!["a", cite["r1", "[1]"], "b"];
            let cells = flatten(&nodes);
            let cells = mutate(cells, &(0..3), &StyleDelta::SetFlag(StyleFlag::Bold));
            assert_eq!(
                cells[1],
                Cell::Atom {
                    placeholder: "[1]".to_string(),
                    node: nodes[1].clone(),
                }
            );
        }

        #[test]
        fn out_of_bounds_range_is_a_no_op() {
            let cells = flatten(&inlines!["ab"]);
            let unchanged = mutate(cells.clone(), &(5..9), &StyleDelta::SetFlag(StyleFlag::Bold));
            assert_eq!(unchanged, cells);
        }

        #[test]
        fn clear_all_resets_styles_in_range() {
            let cells = flatten(&inlines![bold["ab"]]);
            let cells = mutate(cells, &(0..2), &StyleDelta::ClearAll);
            for cell in &cells {
                let Cell::Char { style, .. } = cell else {
                    panic!("expected Char, got {cell:?}");
                };
                assert_eq!(*style, StyleSet::default());
            }
        }
    }
}
