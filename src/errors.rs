//! Error types for the input-loading boundary, with error codes and helpful
//! messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (G001-G003) for documentation lookup:
//!
//! - G001: `Io` (Candidate list could not be read)
//! - G002: `NoCandidates` (Candidate list contained no usable lines)
//! - G003: `SecretTooLong` (Secret word over the typed-length cap)
//!
//! The generation pipeline itself is infallible by design — unplaceable
//! words and unmappable secrets are reported inside the [`Puzzle`] value,
//! not raised. These errors exist only at the boundary where raw input
//! enters the engine (file loading, CLI validation).
//!
//! [`Puzzle`]: crate::puzzle::Puzzle

use std::io;

use crate::cell::MAX_SECRET_INPUT_LEN;

/// Boundary error for loading and validating raw input.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("failed to load candidate list: {0}")]
    Io(#[from] io::Error),

    #[error("candidate list contains no usable word;clue lines")]
    NoCandidates,

    #[error("secret word is {len} characters (maximum {MAX_SECRET_INPUT_LEN})")]
    SecretTooLong { len: usize },
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::Io(_) => "G001",
            PuzzleError::NoCandidates => "G002",
            PuzzleError::SecretTooLong { .. } => "G003",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::Io(_) => None,
            PuzzleError::NoCandidates => {
                Some("Each line must look like 'word;clue' (e.g. 'casa;A place to live')")
            }
            PuzzleError::SecretTooLong { .. } => {
                Some("Shorten the secret word; it must fit in 15 typed characters")
            }
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        if let Some(help_text) = self.help() {
            format!("{self} ({})\n{help_text}", self.code())
        } else {
            format!("{self} ({})", self.code())
        }
    }
}
