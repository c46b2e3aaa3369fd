use crate::code::Secret;
use crate::scoring::score_guess;
use std::fmt;
use thiserror::Error;

/// The number of exact and near matches a guess earned against the secret.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Score {
    /// Positions where the guess has the same symbol as the secret.
    pub correct: usize,
    /// Symbols that are in the secret, but at a different position.
    pub close: usize,
}

impl Score {
    /// Returns `true` if every one of `length` positions was matched exactly.
    pub fn is_solution(&self, length: usize) -> bool {
        self.correct == length
    }
}

/// A scored guess. The counts are computed once, when the guess is made.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Guess {
    text: Box<str>,
    correct: usize,
    close: usize,
}

impl Guess {
    /// Scores `text` against the given secret.
    ///
    /// This does no validation; [`Game::guess`](crate::Game::guess) checks length and symbols
    /// before getting here.
    ///
    /// ```
    /// use rs_codebreaker::{Guess, Secret};
    ///
    /// let secret = Secret::from("AABB");
    /// let guess = Guess::new(&secret, "ABAB");
    ///
    /// assert_eq!(guess.correct(), 2);
    /// assert_eq!(guess.close(), 2);
    /// ```
    pub fn new(secret: &Secret, text: &str) -> Guess {
        let score = score_guess(secret.as_str(), text);
        Guess {
            text: Box::from(text),
            correct: score.correct,
            close: score.close,
        }
    }

    /// The text that was guessed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn close(&self) -> usize {
        self.close
    }

    pub fn score(&self) -> Score {
        Score {
            correct: self.correct,
            close: self.close,
        }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{text: \"{}\", correct: {}, close: {}}}",
            self.text, self.correct, self.close
        )
    }
}

/// Indicates that a game could not be created, or that a guess was rejected.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CodebreakerError {
    /// The pool and length cannot produce a secret.
    #[error("Invalid configuration: {reason}.")]
    InvalidConfiguration { reason: String },
    /// The guess has a different number of symbols than the secret.
    #[error("Invalid guess length: code length is {expected}; guess length is {actual}.")]
    IllegalGuessLength { expected: usize, actual: usize },
    /// The guess uses symbols that are not in the pool. Each offending symbol is listed once.
    #[error("Guess includes invalid characters: pool is \"{pool}\"; guess included \"{invalid}\".")]
    IllegalGuessCharacter { pool: String, invalid: String },
}
