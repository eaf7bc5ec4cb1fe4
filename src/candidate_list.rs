//! `candidate_list` — load and preprocess the raw word/clue candidate list.
//!
//! This module reads candidate pairs either from an in-memory string (the
//! form the surrounding application hands over after its text-generation
//! step) or, natively, from a file path.
//!
//! The parsing logic:
//! - Each line is expected in the format `word;clue`.
//! - Lines without a semicolon are skipped silently.
//! - Both halves are trimmed; a line with an empty word is skipped.
//! - An empty clue is kept — the engine never looks at clue text, it only
//!   carries it through to the output.
//!
//! Order is preserved: the layout engine uses input order to break ties when
//! it sorts candidates by length, so the list must come out exactly as it
//! went in.

/// An unprocessed word/clue pair, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCandidate {
    /// May contain mixed case, diacritics, and punctuation; normalized later.
    pub word: String,
    pub clue: String,
}

/// A parsed, ready-to-use candidate list.
#[derive(Debug, Clone, Default)]
pub struct CandidateList {
    /// Candidates in input order.
    pub candidates: Vec<WordCandidate>,
}

impl CandidateList {
    /// Parse a raw candidate list from an in-memory string.
    ///
    /// # Behavior
    /// 1. Splits the input into lines.
    /// 2. Skips empty lines and lines without a `;` separator.
    /// 3. Splits each valid line into `word` and `clue` on the first `;`,
    ///    so clues may themselves contain semicolons.
    /// 4. Trims whitespace around both halves; skips lines whose word half
    ///    is empty.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> CandidateList {
        let candidates = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() {
                    return None;
                }
                let (word_raw, clue_raw) = line.split_once(';')?;
                let word = word_raw.trim();
                if word.is_empty() {
                    return None;
                }
                Some(WordCandidate {
                    word: word.to_string(),
                    clue: clue_raw.trim().to_string(),
                })
            })
            .collect();

        CandidateList { candidates }
    }

    /// Native convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<CandidateList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read candidate list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }
}
