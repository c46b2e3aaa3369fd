use crate::game::Game;
use crate::results::CodebreakerError;
use rand::Rng;
use std::result::Result;

/// The pool used when none is given: red, orange, yellow, green, blue, indigo, violet.
pub const DEFAULT_POOL: &str = "ROYGBIV";

/// The code length used when none is given.
pub const DEFAULT_LENGTH: usize = 4;

/// The settings needed to start a [`Game`].
///
/// With the `serde` feature this can be deserialized, and any missing field takes its default.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GameConfig {
    pub pool: String,
    pub length: usize,
}

impl GameConfig {
    pub fn with_pool(mut self, pool: &str) -> GameConfig {
        self.pool = pool.to_string();
        self
    }

    pub fn with_length(mut self, length: usize) -> GameConfig {
        self.length = length;
        self
    }

    /// Starts a new game with these settings, generating its secret from `rng`.
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use rs_codebreaker::GameConfig;
    ///
    /// let game = GameConfig::default()
    ///     .with_length(6)
    ///     .new_game(&mut StdRng::seed_from_u64(3))
    ///     .unwrap();
    ///
    /// assert_eq!(game.pool(), "ROYGBIV");
    /// assert_eq!(game.length(), 6);
    /// ```
    pub fn new_game<R>(&self, rng: &mut R) -> Result<Game, CodebreakerError>
    where
        R: Rng + ?Sized,
    {
        Game::new(&self.pool, self.length, rng)
    }
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            pool: DEFAULT_POOL.to_string(),
            length: DEFAULT_LENGTH,
        }
    }
}
