use crate::code::*;
use crate::results::*;
use log::{debug, trace};
use rand::Rng;
use std::result::Result;

/// A single game: one secret, and the guesses made against it so far.
///
/// There is no won or lost state. A caller detects a win by checking whether a returned [`Guess`]
/// has `correct() == length()`.
#[derive(Debug, Clone)]
pub struct Game {
    pool: Pool,
    secret: Secret,
    guesses: Vec<Guess>,
}

impl Game {
    /// Creates a game with a secret of `length` symbols drawn from `pool` using `rng`.
    ///
    /// Returns [`CodebreakerError::InvalidConfiguration`] if the pool is empty while `length` is
    /// not zero.
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use rs_codebreaker::Game;
    ///
    /// let mut game = Game::new("ROYGBIV", 4, &mut StdRng::seed_from_u64(1)).unwrap();
    /// let guess = game.guess("ROYG").unwrap();
    ///
    /// assert!(guess.correct() + guess.close() <= 4);
    /// assert_eq!(game.guess_count(), 1);
    /// ```
    pub fn new<R>(pool: &str, length: usize, rng: &mut R) -> Result<Game, CodebreakerError>
    where
        R: Rng + ?Sized,
    {
        let pool = Pool::new(pool);
        if pool.is_empty() && length > 0 {
            return Err(CodebreakerError::InvalidConfiguration {
                reason: format!("pool is empty but code length is {}", length),
            });
        }
        let secret = generate(&pool, length, rng);
        debug!("Created game with pool \"{}\" and code length {}", pool, length);
        Ok(Game {
            pool,
            secret,
            guesses: Vec::new(),
        })
    }

    /// Creates a game around a known secret instead of a generated one.
    ///
    /// Returns [`CodebreakerError::InvalidConfiguration`] if the secret uses any symbol outside
    /// the pool.
    pub fn with_secret(pool: &str, secret: &str) -> Result<Game, CodebreakerError> {
        let pool = Pool::new(pool);
        let invalid = pool.invalid_symbols(secret);
        if !invalid.is_empty() {
            return Err(CodebreakerError::InvalidConfiguration {
                reason: format!(
                    "secret uses symbols \"{}\" that are not in pool \"{}\"",
                    invalid, pool
                ),
            });
        }
        let secret = Secret::from(secret);
        debug!(
            "Created game with pool \"{}\" and fixed code of length {}",
            pool,
            secret.len()
        );
        Ok(Game {
            pool,
            secret,
            guesses: Vec::new(),
        })
    }

    /// Scores the given guess and adds it to the history.
    ///
    /// The guess is rejected, and the history left as it was, if it:
    ///
    /// * has a different number of symbols than the secret
    ///   ([`CodebreakerError::IllegalGuessLength`]), or
    /// * uses symbols outside the pool ([`CodebreakerError::IllegalGuessCharacter`]).
    pub fn guess(&mut self, text: &str) -> Result<Guess, CodebreakerError> {
        let actual = text.chars().count();
        if actual != self.secret.len() {
            debug!("Rejected guess \"{}\": wrong length", text);
            return Err(CodebreakerError::IllegalGuessLength {
                expected: self.secret.len(),
                actual,
            });
        }
        let invalid = self.pool.invalid_symbols(text);
        if !invalid.is_empty() {
            debug!("Rejected guess \"{}\": symbols \"{}\" not in pool", text, invalid);
            return Err(CodebreakerError::IllegalGuessCharacter {
                pool: self.pool.to_string(),
                invalid,
            });
        }
        let guess = Guess::new(&self.secret, text);
        debug!("Guess #{}: {}", self.guesses.len() + 1, guess);
        self.guesses.push(guess.clone());
        Ok(guess)
    }

    /// The guesses made so far, in the order they were made.
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Clears the guess history. The secret is kept, so the same code must be found again.
    pub fn restart(&mut self) {
        trace!("Restarting game after {} guesses", self.guesses.len());
        self.guesses.clear();
    }

    /// The symbols that the secret was drawn from.
    pub fn pool(&self) -> &str {
        self.pool.as_str()
    }

    /// The number of symbols in the secret.
    pub fn length(&self) -> usize {
        self.secret.len()
    }

    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    pub fn secret(&self) -> &Secret {
        &self.secret
    }
}
