//! The greedy layout placer: fits normalized words onto the virtual grid.
//!
//! Placement is single-pass and greedy. Candidates are seeded longest-first
//! (long words anchor more intersection opportunities), the first word is
//! laid ACROSS through the grid midpoint, and every later word is attached
//! at some letter it shares with a cell already on the grid. The first
//! conflict-free attachment found wins; there is no backtracking, and a word
//! with no conflict-free attachment is dropped rather than failing the run.
//!
//! The order in which anchor cells are probed is permuted by the caller's
//! RNG, so different seeds yield different (all equally valid) grids while a
//! pinned seed reproduces a grid exactly.
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use incrocio::normalize::NormalizedCandidate;
//! use incrocio::placer;
//!
//! let candidates = vec![
//!     NormalizedCandidate { word: "CASA".into(), clue: "home".into() },
//!     NormalizedCandidate { word: "SOLE".into(), clue: "sun".into() },
//! ];
//! let mut rng = StdRng::seed_from_u64(7);
//! let outcome = placer::place_words(&candidates, &mut rng);
//! assert_eq!(outcome.placed.len(), 2);
//! ```

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::cell::{Direction, MAX_GRID_SIZE};
use crate::grid::Grid;
use crate::normalize::{DropReason, DroppedWord, NormalizedCandidate};

/// A word committed to the grid.
///
/// Coordinates are raw placement coordinates until the frame pass rebases
/// them to the 1-based output rectangle; `number` stays provisional (zero)
/// until numbering runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub id: usize,
    pub word: String,
    pub clue: String,
    pub direction: Direction,
    pub start_x: i32,
    pub start_y: i32,
    pub number: u32,
}

impl PlacedWord {
    /// The cells this word occupies, paired with its letters.
    pub fn cells(&self) -> impl Iterator<Item = ((i32, i32), char)> + '_ {
        self.word
            .chars()
            .enumerate()
            .map(|(i, ch)| (self.direction.cell_at(self.start_x, self.start_y, i), ch))
    }
}

/// Everything one placement run produced: the committed words, the words
/// that found no slot, and the grid value itself (consumed downstream by
/// the solution mapper via the placed words' cells).
#[derive(Debug, Clone)]
pub struct PlacementOutcome {
    pub placed: Vec<PlacedWord>,
    pub dropped: Vec<DroppedWord>,
    pub grid: Grid,
}

/// Place the candidates onto a fresh grid, longest word first.
///
/// The grid is created here and returned with the outcome — callers never
/// share placement state between runs. `rng` permutes the anchor-cell probe
/// order only; with a pinned seed the whole outcome is reproducible.
pub fn place_words<R: Rng + ?Sized>(
    candidates: &[NormalizedCandidate],
    rng: &mut R,
) -> PlacementOutcome {
    // Precondition: screening already happened upstream.
    debug_assert!(
        candidates.iter().all(|c| {
            let len = c.word.chars().count();
            (2..=MAX_GRID_SIZE as usize).contains(&len)
                && c.word.chars().all(|ch| ch.is_ascii_uppercase())
        }),
        "placer input must be normalized and length-screened"
    );

    let mut grid = Grid::new();
    let mut placed: Vec<PlacedWord> = Vec::with_capacity(candidates.len());
    let mut dropped: Vec<DroppedWord> = Vec::new();

    // 1. Sort longest-first. The sort is stable, so equal-length words keep
    //    their input order.
    let mut ordered: Vec<&NormalizedCandidate> = candidates.iter().collect();
    ordered.sort_by(|a, b| b.word.chars().count().cmp(&a.word.chars().count()));

    for (id, candidate) in ordered.into_iter().enumerate() {
        // 2. The longest word seeds the grid: ACROSS, centered on the
        //    midpoint. It always fits because screening capped its length.
        let slot = if grid.is_empty() {
            let len = i32::try_from(candidate.word.chars().count())
                .expect("screened word length must fit in i32");
            Some(((MAX_GRID_SIZE - len) / 2, MAX_GRID_SIZE / 2, Direction::Across))
        } else {
            // 3. Later words attach at a shared letter with any occupied
            //    cell, probing anchors in RNG order.
            find_slot(&grid, &candidate.word, rng)
        };

        match slot {
            Some((x, y, direction)) => {
                grid.commit(x, y, direction, &candidate.word);
                debug!("placed {} {} at ({x}, {y})", candidate.word, direction);
                placed.push(PlacedWord {
                    id,
                    word: candidate.word.clone(),
                    clue: candidate.clue.clone(),
                    direction,
                    start_x: x,
                    start_y: y,
                    number: 0,
                });
            }
            None => {
                debug!("no slot for {}", candidate.word);
                dropped.push(DroppedWord {
                    word: candidate.word.clone(),
                    clue: candidate.clue.clone(),
                    reason: DropReason::NoFit,
                });
            }
        }
    }

    // Postcondition: every committed cell agrees with every word through it.
    debug_assert!(
        placed.iter().flat_map(PlacedWord::cells).all(|((x, y), ch)| grid.get(x, y) == Some(ch)),
        "grid and placed words must agree on every cell"
    );

    PlacementOutcome { placed, dropped, grid }
}

/// Probe the occupied cells (in RNG-permuted order) for the first
/// conflict-free slot for `word`.
///
/// For each anchor cell holding letter `c` and each position `i` with
/// `word[i] == c`, the ACROSS origin `(cx - i, cy)` is tried before the
/// DOWN origin `(cx, cy - i)`. The first valid slot is returned; the rest
/// of the search space is never explored.
fn find_slot<R: Rng + ?Sized>(grid: &Grid, word: &str, rng: &mut R) -> Option<(i32, i32, Direction)> {
    let mut anchors: Vec<((i32, i32), char)> = grid.occupied().collect();
    anchors.shuffle(rng);

    let letters: Vec<char> = word.chars().collect();
    for ((cx, cy), anchor_ch) in anchors {
        for (i, &ch) in letters.iter().enumerate() {
            if ch != anchor_ch {
                continue;
            }
            let offset = i32::try_from(i).expect("letter index must fit in i32");
            let attempts = [
                (cx - offset, cy, Direction::Across),
                (cx, cy - offset, Direction::Down),
            ];
            for (x, y, direction) in attempts {
                if grid.fits(x, y, direction, word) {
                    return Some((x, y, direction));
                }
            }
        }
    }
    None
}
