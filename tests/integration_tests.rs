//! Integration tests for the incrocio layout engine.
//!
//! These tests verify the complete pipeline from raw candidate text through
//! placement, framing, and numbering to the hidden-solution overlay, using
//! realistic candidate lists and the properties the rendering layer relies on.

use std::collections::{HashMap, HashSet};

use incrocio::candidate_list::{CandidateList, WordCandidate};
use incrocio::cell::Direction;
use incrocio::normalize::DropReason;
use incrocio::puzzle::{self, Puzzle};

const SAMPLE_LIST: &str = "\
stella;Shines at night
sole;It rises every morning
luna;Queen of the night sky
cielo;Where the clouds live
alba;The day's first light
notte;When the stars come out
mare;It ends at the beach
vento;You feel it but never see it";

fn load_sample() -> Vec<WordCandidate> {
    CandidateList::parse_from_str(SAMPLE_LIST).candidates
}

/// Collect every occupied cell with its letter, asserting crossing words agree.
fn letter_map(puzzle: &Puzzle) -> HashMap<(i32, i32), char> {
    let mut letters = HashMap::new();
    for word in &puzzle.words {
        for (cell, ch) in word.cells() {
            if let Some(&existing) = letters.get(&cell) {
                assert_eq!(existing, ch, "words disagree at {cell:?}");
            }
            letters.insert(cell, ch);
        }
    }
    letters
}

mod grid_properties {
    use super::*;

    #[test]
    fn test_consistency_across_many_seeds() {
        let candidates = load_sample();
        for seed in 0..25 {
            let puzzle = puzzle::generate_seeded(&candidates, None, seed);
            // letter_map asserts agreement at every shared cell.
            let letters = letter_map(&puzzle);
            assert!(!letters.is_empty(), "seed {seed} placed nothing");
        }
    }

    #[test]
    fn test_bounds_across_many_seeds() {
        let candidates = load_sample();
        for seed in 0..25 {
            let puzzle = puzzle::generate_seeded(&candidates, None, seed);
            assert!(puzzle.width >= 8, "seed {seed}: width below display floor");
            assert!(puzzle.height >= 8, "seed {seed}: height below display floor");
            for ((x, y), _) in letter_map(&puzzle) {
                assert!(x >= 1 && (x as u32) < puzzle.width, "seed {seed}: x {x} out of bounds");
                assert!(y >= 1 && (y as u32) < puzzle.height, "seed {seed}: y {y} out of bounds");
            }
        }
    }

    #[test]
    fn test_numbering_unique_and_contiguous() {
        let candidates = load_sample();
        for seed in 0..25 {
            let puzzle = puzzle::generate_seeded(&candidates, None, seed);

            let mut number_by_start: HashMap<(i32, i32), u32> = HashMap::new();
            for word in &puzzle.words {
                let entry =
                    number_by_start.entry((word.start_x, word.start_y)).or_insert(word.number);
                assert_eq!(*entry, word.number, "seed {seed}: start cell with two numbers");
            }

            let numbers: HashSet<u32> = number_by_start.values().copied().collect();
            assert_eq!(
                numbers.len(),
                number_by_start.len(),
                "seed {seed}: duplicate number across distinct starts"
            );
            let max = numbers.iter().copied().max().unwrap_or(0);
            let expected: HashSet<u32> = (1..=max).collect();
            assert_eq!(numbers, expected, "seed {seed}: numbers not contiguous");
        }
    }

    #[test]
    fn test_numbering_follows_reading_order() {
        let puzzle = puzzle::generate_seeded(&load_sample(), None, 3);

        let mut starts: Vec<(u32, i32, i32)> =
            puzzle.words.iter().map(|w| (w.number, w.start_y, w.start_x)).collect();
        starts.sort_unstable();
        starts.dedup();

        for pair in starts.windows(2) {
            let (_, y1, x1) = pair[0];
            let (_, y2, x2) = pair[1];
            assert!((y1, x1) < (y2, x2), "numbering must follow (y, x) reading order");
        }
    }

    #[test]
    fn test_fixed_seed_reproduces_grid() {
        let candidates = load_sample();
        let first = puzzle::generate_seeded(&candidates, Some("alba"), 2026);
        let second = puzzle::generate_seeded(&candidates, Some("alba"), 2026);

        assert_eq!(first.words, second.words);
        assert_eq!(first.solution, second.solution);
        assert_eq!((first.width, first.height), (second.width, second.height));
    }

    #[test]
    fn test_words_sorted_by_number() {
        let puzzle = puzzle::generate_seeded(&load_sample(), None, 14);
        assert!(puzzle.words.windows(2).all(|p| p[0].number <= p[1].number));
    }
}

mod placement_outcomes {
    use super::*;

    #[test]
    fn test_crossing_pair_scenario() {
        let candidates = CandidateList::parse_from_str("casa;home\nsole;sun").candidates;
        let puzzle = puzzle::generate_seeded(&candidates, None, 6);

        assert_eq!(puzzle.words.len(), 2);
        assert!(puzzle.dropped.is_empty());

        let across = puzzle.words.iter().find(|w| w.direction == Direction::Across);
        let down = puzzle.words.iter().find(|w| w.direction == Direction::Down);
        assert!(across.is_some() && down.is_some(), "pair must cross perpendicular");

        // The crossing cell holds the letter both words claim.
        letter_map(&puzzle);
    }

    #[test]
    fn test_isolated_words_all_dropped() {
        // No later word shares a letter with the seed GGGG.
        let candidates = CandidateList::parse_from_str("gggg;g\nbed;b\nnip;n").candidates;
        let puzzle = puzzle::generate_seeded(&candidates, None, 1);

        assert_eq!(puzzle.words.len(), 1);
        assert_eq!(puzzle.words[0].word, "GGGG");

        let dropped: HashSet<&str> = puzzle.dropped.iter().map(|d| d.word.as_str()).collect();
        assert_eq!(dropped, HashSet::from(["BED", "NIP"]));
        assert!(puzzle.dropped.iter().all(|d| d.reason == DropReason::NoFit));
    }

    #[test]
    fn test_screening_reports_reasons() {
        let input = "a;too short\nprecipitevolissimevolmente;too long\ncasa;fine\nsole;fine";
        let candidates = CandidateList::parse_from_str(input).candidates;
        let puzzle = puzzle::generate_seeded(&candidates, None, 1);

        assert_eq!(puzzle.words.len(), 2);
        let reasons: Vec<DropReason> = puzzle.dropped.iter().map(|d| d.reason).collect();
        assert_eq!(reasons, vec![DropReason::TooShort, DropReason::TooLong]);
    }

    #[test]
    fn test_empty_input_falls_back_to_default_grid() {
        let puzzle = puzzle::generate_seeded(&[], None, 1);

        assert!(puzzle.words.is_empty());
        assert_eq!((puzzle.width, puzzle.height), (10, 10));
    }

    #[test]
    fn test_placed_plus_dropped_accounts_for_every_candidate() {
        let candidates = load_sample();
        for seed in 0..10 {
            let puzzle = puzzle::generate_seeded(&candidates, None, seed);
            assert_eq!(
                puzzle.words.len() + puzzle.dropped.len(),
                candidates.len(),
                "seed {seed}: candidates lost without a report"
            );
        }
    }
}

mod hidden_solution {
    use super::*;

    #[test]
    fn test_solution_spreads_across_words() {
        // COLA's letters are split between the two words: C and A only in
        // CASA, O and L only in SOLE.
        let candidates = CandidateList::parse_from_str("casa;home\nsole;sun").candidates;
        let puzzle = puzzle::generate_seeded(&candidates, Some("cola"), 12);

        let solution = puzzle.solution.as_ref().expect("COLA letters exist on this grid");
        assert_eq!(solution.cells.len(), 4);
        assert_eq!(solution.word, "COLA");

        // Pairwise distinct cells, each agreeing with the grid letter.
        let letters = letter_map(&puzzle);
        let mut coords = HashSet::new();
        for cell in &solution.cells {
            assert!(coords.insert((cell.x, cell.y)), "cell reused at ({}, {})", cell.x, cell.y);
            assert_eq!(letters.get(&(cell.x, cell.y)), Some(&cell.ch));
        }

        // Both placed words must contribute cells.
        let contributing: HashSet<usize> = solution
            .cells
            .iter()
            .map(|cell| {
                puzzle
                    .words
                    .iter()
                    .position(|w| w.cells().any(|(c, _)| c == (cell.x, cell.y)))
                    .expect("solution cell must lie on a placed word")
            })
            .collect();
        assert!(contributing.len() >= 2);
    }

    #[test]
    fn test_solution_indexes_follow_secret_order() {
        let candidates = CandidateList::parse_from_str("casa;home\nsole;sun").candidates;
        let puzzle = puzzle::generate_seeded(&candidates, Some("sale"), 9);

        let solution = puzzle.solution.expect("SALE letters exist on this grid");
        for (i, cell) in solution.cells.iter().enumerate() {
            assert_eq!(cell.index, i);
            assert_eq!(Some(cell.ch), solution.word.chars().nth(i));
        }
    }

    #[test]
    fn test_absent_letter_yields_no_solution() {
        let candidates = CandidateList::parse_from_str("casa;home\nsole;sun").candidates;
        // J appears nowhere on the grid.
        let puzzle = puzzle::generate_seeded(&candidates, Some("juve"), 3);

        assert!(puzzle.solution.is_none());
        assert_eq!(puzzle.words.len(), 2, "grid must be unaffected by the failed overlay");
    }

    #[test]
    fn test_original_spelling_preserved() {
        let candidates = CandidateList::parse_from_str("casa;home\nsole;sun").candidates;
        let puzzle = puzzle::generate_seeded(&candidates, Some("Sole!"), 18);

        let solution = puzzle.solution.expect("SOLE letters exist on this grid");
        assert_eq!(solution.original, "Sole!");
        assert_eq!(solution.word, "SOLE");
    }

    #[test]
    fn test_no_secret_means_no_solution() {
        let puzzle = puzzle::generate_seeded(&load_sample(), None, 4);
        assert!(puzzle.solution.is_none());
    }
}

mod normalization_pipeline {
    use super::*;

    #[test]
    fn test_accented_candidates_round_trip() {
        let input = "caffè;morning fuel\nperché;the big why";
        let candidates = CandidateList::parse_from_str(input).candidates;
        let puzzle = puzzle::generate_seeded(&candidates, None, 2);

        let words: HashSet<&str> = puzzle.words.iter().map(|w| w.word.as_str()).collect();
        assert!(words.contains("CAFFE"));
        assert!(words.contains("PERCHE"));
    }

    #[test]
    fn test_mixed_garbage_input_survives() {
        let input = "  Mamma Mia! ;exclamation\n1234;digits only\nok-go;band";
        let candidates = CandidateList::parse_from_str(input).candidates;
        let puzzle = puzzle::generate_seeded(&candidates, None, 2);

        // MAMMAMIA places; 1234 normalizes to nothing; OKGO may or may not
        // attach, but every candidate is accounted for.
        assert_eq!(puzzle.words.len() + puzzle.dropped.len(), 3);
        assert!(puzzle.words.iter().any(|w| w.word == "MAMMAMIA"));
        assert!(puzzle
            .dropped
            .iter()
            .any(|d| d.word == "1234" && d.reason == DropReason::TooShort));
    }
}
