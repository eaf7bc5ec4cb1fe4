//! The generation pipeline: candidates in, finished puzzle out.
//!
//! # Example
//!
//! ```
//! use incrocio::candidate_list::WordCandidate;
//! use incrocio::puzzle;
//!
//! let candidates = vec![
//!     WordCandidate { word: "casa".into(), clue: "A place to live".into() },
//!     WordCandidate { word: "sole".into(), clue: "It rises every morning".into() },
//! ];
//!
//! let puzzle = puzzle::generate_seeded(&candidates, Some("sa"), 7);
//! assert_eq!(puzzle.words.len(), 2);
//! assert!(puzzle.width >= 8 && puzzle.height >= 8);
//! ```
//!
//! Generation is a pure synchronous function: no I/O, no shared state, no
//! retry/resume machinery. The only side channel is the RNG that permutes
//! the placer's intersection search, and that is injected — production uses
//! a fresh entropy seed ([`generate`]), tests pin one ([`generate_seeded`])
//! to get identical grids for identical inputs.
//!
//! Nothing in here aborts: an unplaceable word lands in `dropped`, an
//! unmappable secret leaves `solution` empty, and a candidate list with no
//! usable words yields the default empty grid.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::candidate_list::WordCandidate;
use crate::frame;
use crate::normalize::{screen_candidates, DroppedWord};
use crate::placer::{self, PlacedWord};
use crate::solution::{self, SolutionData};

/// The finished puzzle, immutable once returned.
///
/// `words` is ordered by crossword number; coordinates are 1-based within
/// the `width × height` rectangle. `dropped` lists every input candidate
/// that is not on the grid, with the reason.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub words: Vec<PlacedWord>,
    pub width: u32,
    pub height: u32,
    pub solution: Option<SolutionData>,
    pub dropped: Vec<DroppedWord>,
}

/// Generate a puzzle with a fresh, unpredictable layout.
#[must_use]
pub fn generate(candidates: &[WordCandidate], secret: Option<&str>) -> Puzzle {
    generate_with_rng(candidates, secret, &mut StdRng::from_entropy())
}

/// Generate a puzzle reproducibly: the same candidates and seed always
/// produce the identical grid.
#[must_use]
pub fn generate_seeded(candidates: &[WordCandidate], secret: Option<&str>, seed: u64) -> Puzzle {
    generate_with_rng(candidates, secret, &mut StdRng::seed_from_u64(seed))
}

/// Generate a puzzle using the caller's RNG.
pub fn generate_with_rng<R: Rng + ?Sized>(
    candidates: &[WordCandidate],
    secret: Option<&str>,
    rng: &mut R,
) -> Puzzle {
    // 1. Canonicalize the raw words and screen out the unusable ones.
    let (eligible, mut dropped) = screen_candidates(candidates);
    debug!("{} of {} candidates eligible after screening", eligible.len(), candidates.len());

    // 2. Greedy placement onto a fresh grid; unplaceable words join the
    //    dropped list.
    let outcome = placer::place_words(&eligible, rng);
    dropped.extend(outcome.dropped);
    let mut words = outcome.placed;

    // 3. Rebase into the 1-based output rectangle and derive dimensions.
    let (width, height) = frame::normalize_coordinates(&mut words);

    // 4. Conventional crossword numbering in reading order.
    frame::assign_numbers(&mut words);

    // 5. Optional secret-word overlay on the final coordinates.
    let solution = secret.and_then(|s| solution::map_secret(s, &words));

    info!(
        "generated {}x{} puzzle: {} placed, {} dropped, solution {}",
        width,
        height,
        words.len(),
        dropped.len(),
        if solution.is_some() { "mapped" } else { "absent" },
    );

    // Postconditions: the §8-style invariants the rendering layer relies on.
    debug_assert!(
        words.iter().flat_map(PlacedWord::cells).all(|((x, y), _)| {
            x >= 1 && (x as u32) < width && y >= 1 && (y as u32) < height
        }),
        "every occupied cell must lie inside the 1-based frame"
    );
    debug_assert!(
        words.windows(2).all(|pair| pair[0].number <= pair[1].number),
        "words must be ordered by number"
    );

    Puzzle { words, width, height, solution, dropped }
}
