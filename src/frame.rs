//! `frame` — rebase placed words into the output rectangle and number them.
//!
//! Placement works in raw virtual-grid coordinates; consumers want a tight,
//! positive-origin rectangle with conventional crossword numbering. This
//! module does both finishing passes:
//!
//! - [`normalize_coordinates`] translates every word so the bounding box
//!   starts at `(1, 1)` (leaving a one-cell margin) and derives the
//!   presented `width`/`height`, clamped to the display minimum.
//! - [`assign_numbers`] gives distinct start cells numbers `1..=m` in
//!   reading order (top-to-bottom, left-to-right); words crossing at the
//!   same start cell share a number.

use crate::cell::{Direction, DEFAULT_GRID_SIZE, MIN_DISPLAY_SIZE};
use crate::placer::PlacedWord;

/// Exclusive end coordinates of a word's footprint: `start + len` along the
/// word's axis, `start + 1` across it.
fn word_extent(word: &PlacedWord) -> (i32, i32) {
    let len = i32::try_from(word.word.chars().count()).expect("word length must fit in i32");
    match word.direction {
        Direction::Across => (word.start_x + len, word.start_y + 1),
        Direction::Down => (word.start_x + 1, word.start_y + len),
    }
}

/// Translate `words` so the minimum origin lands on `(1, 1)` and return the
/// presented `(width, height)`.
///
/// An empty list falls back to a fixed `DEFAULT_GRID_SIZE` square; computed
/// dimensions are clamped to `MIN_DISPLAY_SIZE` on each axis.
pub fn normalize_coordinates(words: &mut [PlacedWord]) -> (u32, u32) {
    if words.is_empty() {
        return (DEFAULT_GRID_SIZE, DEFAULT_GRID_SIZE);
    }

    let min_x = words.iter().map(|w| w.start_x).min().expect("non-empty");
    let min_y = words.iter().map(|w| w.start_y).min().expect("non-empty");
    let max_x = words.iter().map(|w| word_extent(w).0).max().expect("non-empty");
    let max_y = words.iter().map(|w| word_extent(w).1).max().expect("non-empty");

    for word in words.iter_mut() {
        word.start_x += 1 - min_x;
        word.start_y += 1 - min_y;
    }

    // Span plus the (1,1) origin margin and one trailing margin cell.
    let width = u32::try_from((max_x - min_x) + 2).expect("width must be positive");
    let height = u32::try_from((max_y - min_y) + 2).expect("height must be positive");

    (width.max(MIN_DISPLAY_SIZE), height.max(MIN_DISPLAY_SIZE))
}

/// Assign reading-order numbers to distinct start cells and re-sort the
/// words by number.
///
/// Distinct `(start_x, start_y)` pairs are ordered by `(y, x)` ascending and
/// numbered `1..=m`; every word then takes the number of its start cell, so
/// an ACROSS and a DOWN word beginning on the same cell share one number.
pub fn assign_numbers(words: &mut Vec<PlacedWord>) {
    let mut starts: Vec<(i32, i32)> = words.iter().map(|w| (w.start_y, w.start_x)).collect();
    starts.sort_unstable();
    starts.dedup();

    for word in words.iter_mut() {
        let rank = starts
            .binary_search(&(word.start_y, word.start_x))
            .expect("every word's start cell is in the collected start list");
        word.number = u32::try_from(rank + 1).expect("start-cell count must fit in u32");
    }

    // Stable, so two words sharing a number keep their relative order.
    words.sort_by_key(|w| w.number);

    debug_assert!(
        words.windows(2).all(|pair| pair[0].number <= pair[1].number),
        "words must come out sorted by number"
    );
}
