#![cfg_attr(feature = "unstable", feature(test))]

//! The scoring core of a Mastermind-style code-breaking game.
//!
//! A [`Game`] hides a secret code drawn from a pool of symbols. Each guess is scored by how many
//! symbols are in exactly the right place (`correct`), and how many more are in the code but
//! somewhere else (`close`).
//!
//! ```
//! use rs_codebreaker::Game;
//!
//! let mut game = Game::with_secret("ABCDEF", "ABCD").unwrap();
//!
//! let guess = game.guess("ABDC").unwrap();
//! assert_eq!((guess.correct(), guess.close()), (2, 2));
//! assert_eq!(guess.to_string(), "{text: \"ABDC\", correct: 2, close: 2}");
//! ```

mod code;
mod config;
mod game;
mod results;
mod scoring;
mod shared;

pub use code::generate;
pub use code::Pool;
pub use code::Secret;
pub use config::*;
pub use game::*;
pub use results::*;
pub use scoring::score_guess;
pub use shared::SharedGame;
