//! Height estimation for labels that wrap.
//!
//! Real text metrics are unavailable before the menu is laid out, so extra
//! lines are predicted from label length alone. The estimate is an
//! approximation and makes no attempt at pixel accuracy.

use crate::models::MenuItem;

/// Labels longer than this many characters are assumed to wrap.
pub const DEFAULT_OVERFLOW_THRESHOLD: usize = 19;

/// Estimate how many extra text lines the items occupy beyond one per item.
///
/// Separators have no label and never overflow. A submenu is measured by its
/// own label only.
pub fn estimate_overflow_lines(items: &[MenuItem], threshold: usize) -> usize {
    items.iter().filter_map(MenuItem::label).map(|label| label_overflow(label, threshold)).sum()
}

/// Simulate greedy word wrapping of a single label.
///
/// Lengths are counted in `char`s. A word that would push a non-empty line
/// past the threshold starts a new line. Independently, a line that reaches
/// the threshold after accumulation rolls over once, which catches long runs
/// without spaces.
pub fn label_overflow(label: &str, threshold: usize) -> usize {
    if label.chars().count() <= threshold {
        return 0;
    }

    let mut overflow = 0;
    let mut line = 0;
    for word in label.split(' ') {
        let len = word.chars().count();
        if line > 0 && line + len > threshold {
            overflow += 1;
            line = len;
        } else {
            line += len;
        }

        if line >= threshold {
            overflow += 1;
            line -= threshold;
        }
    }
    overflow
}
