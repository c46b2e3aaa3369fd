use crate::game::Game;
use crate::results::*;
use std::result::Result;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A [`Game`] that can be shared between threads.
///
/// Clones refer to the same game. Each operation holds the lock for its whole duration, so a
/// guess is either fully recorded or not visible at all to [`SharedGame::guesses`].
#[derive(Debug, Clone)]
pub struct SharedGame {
    game: Arc<Mutex<Game>>,
}

impl SharedGame {
    pub fn new(game: Game) -> SharedGame {
        SharedGame {
            game: Arc::new(Mutex::new(game)),
        }
    }

    /// See [`Game::guess`].
    pub fn guess(&self, text: &str) -> Result<Guess, CodebreakerError> {
        self.lock().guess(text)
    }

    /// Returns a snapshot of the guesses made so far.
    pub fn guesses(&self) -> Vec<Guess> {
        self.lock().guesses().to_vec()
    }

    pub fn restart(&self) {
        self.lock().restart();
    }

    pub fn pool(&self) -> String {
        self.lock().pool().to_string()
    }

    pub fn length(&self) -> usize {
        self.lock().length()
    }

    pub fn guess_count(&self) -> usize {
        self.lock().guess_count()
    }

    // No game operation leaves partial state, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Game> {
        self.game.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> SharedGame {
        SharedGame::new(game)
    }
}
