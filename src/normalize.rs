//! `normalize` — canonicalization and screening of raw word candidates.
//!
//! Raw candidate words arrive as free text: mixed case, diacritics,
//! apostrophes, spaces. Before placement every word is reduced to the
//! uppercase A–Z alphabet the grid works in:
//!
//! 1. Unicode canonical decomposition (NFD), so `é` becomes `e` + U+0301.
//! 2. Strip combining diacritical marks.
//! 3. Uppercase.
//! 4. Remove every remaining character outside `A`–`Z`.
//!
//! Candidates whose normalized form is shorter than 2 letters or longer than
//! the placement grid are screened out. Screening is reported, not raised:
//! each rejected candidate becomes a [`DroppedWord`] carrying the reason, so
//! callers can tell the end user exactly which inputs never made it onto the
//! grid without diffing input against output themselves.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::candidate_list::WordCandidate;
use crate::cell::MAX_GRID_SIZE;

/// Why a candidate did not end up on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Normalized form is shorter than 2 letters.
    TooShort,
    /// Normalized form is longer than the placement grid side.
    TooLong,
    /// No conflict-free intersection with the already-placed words existed.
    NoFit,
}

/// A candidate that was screened out or could not be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedWord {
    /// The word as the caller supplied it.
    pub word: String,
    pub clue: String,
    pub reason: DropReason,
}

/// A candidate that survived screening; `word` is uppercase A–Z only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCandidate {
    pub word: String,
    pub clue: String,
}

/// Reduce an arbitrary string to its uppercase A–Z skeleton.
///
/// `café` → `CAFE`, `Ñoño` → `NONO`, `it's` → `ITS`, `123` → `` (empty).
#[must_use]
pub fn normalize_word(raw: &str) -> String {
    raw.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
        .collect()
}

/// Normalize every candidate and split the list into the words eligible for
/// placement and the words screened out by the length rules.
///
/// Input order is preserved in both halves; the placer depends on it for
/// stable tie-breaking when it sorts by length.
#[must_use]
pub fn screen_candidates(
    candidates: &[WordCandidate],
) -> (Vec<NormalizedCandidate>, Vec<DroppedWord>) {
    let mut eligible = Vec::with_capacity(candidates.len());
    let mut dropped = Vec::new();

    for candidate in candidates {
        let normalized = normalize_word(&candidate.word);
        let len = normalized.chars().count();

        if len < 2 {
            dropped.push(DroppedWord {
                word: candidate.word.clone(),
                clue: candidate.clue.clone(),
                reason: DropReason::TooShort,
            });
        } else if len > MAX_GRID_SIZE as usize {
            dropped.push(DroppedWord {
                word: candidate.word.clone(),
                clue: candidate.clue.clone(),
                reason: DropReason::TooLong,
            });
        } else {
            eligible.push(NormalizedCandidate {
                word: normalized,
                clue: candidate.clue.clone(),
            });
        }
    }

    (eligible, dropped)
}
