//! `solution` — overlay a hidden secret word onto placed letter cells.
//!
//! The secret word is a bonus puzzle: once the main grid is solved, one
//! marked cell per secret letter spells it out. Mapping selects, for each
//! letter of the (normalized) secret in order, a grid cell holding that
//! letter. Selections never reuse a cell, and they prefer spreading across
//! distinct placed words — reusing a single word's letters for the whole
//! secret would make the reveal trivial to spot.
//!
//! Mapping is all-or-nothing: if any letter has no available cell left, no
//! `SolutionData` is produced at all. That outcome is a silent degradation
//! (the puzzle is simply delivered without a bonus word), never an error.

use std::collections::HashSet;

use log::debug;

use crate::cell::MAX_SECRET_INPUT_LEN;
use crate::normalize::normalize_word;
use crate::placer::PlacedWord;

/// One reveal marker: the cell's coordinate, the letter it holds, and the
/// letter's 0-based position within the normalized secret word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionCell {
    pub x: i32,
    pub y: i32,
    pub ch: char,
    pub index: usize,
}

/// A fully mapped secret word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionData {
    /// Normalized form used for cell matching.
    pub word: String,
    /// The secret exactly as the user typed it.
    pub original: String,
    pub cells: Vec<SolutionCell>,
}

/// Try to map `secret` onto the cells of `words`.
///
/// Returns `None` when the secret is over the typed-length cap, normalizes
/// to nothing, or cannot be fully mapped — partial mappings are never
/// returned. `words` must already be in final (1-based) coordinates.
#[must_use]
pub fn map_secret(secret: &str, words: &[PlacedWord]) -> Option<SolutionData> {
    if secret.chars().count() > MAX_SECRET_INPUT_LEN {
        debug!("secret word over the {MAX_SECRET_INPUT_LEN}-character input cap, skipping");
        return None;
    }

    let normalized = normalize_word(secret);
    if normalized.is_empty() {
        debug!("secret word normalized to nothing, skipping");
        return None;
    }

    // Inventory of every (word, cell) letter pair on the grid. A cell where
    // two words cross appears once per word, but selection consumes the cell
    // itself, so the duplicate can never be picked twice.
    let inventory: Vec<(usize, (i32, i32), char)> = words
        .iter()
        .enumerate()
        .flat_map(|(word_idx, word)| word.cells().map(move |(cell, ch)| (word_idx, cell, ch)))
        .collect();

    let mut used_cells: HashSet<(i32, i32)> = HashSet::new();
    let mut used_words: HashSet<usize> = HashSet::new();
    let mut cells = Vec::with_capacity(normalized.chars().count());

    for (index, ch) in normalized.chars().enumerate() {
        let available = || {
            inventory
                .iter()
                .filter(|(_, cell, inv_ch)| *inv_ch == ch && !used_cells.contains(cell))
        };

        // Prefer a word that hasn't contributed to the mapping yet; fall
        // back to any cell still unused.
        let pick = available()
            .find(|(word_idx, _, _)| !used_words.contains(word_idx))
            .or_else(|| available().next());

        let Some(&(word_idx, (x, y), ch)) = pick else {
            debug!("no free cell for secret letter '{ch}' at position {index}");
            return None;
        };

        used_cells.insert((x, y));
        used_words.insert(word_idx);
        cells.push(SolutionCell { x, y, ch, index });
    }

    debug_assert_eq!(cells.len(), normalized.chars().count());

    Some(SolutionData { word: normalized, original: secret.to_string(), cells })
}
