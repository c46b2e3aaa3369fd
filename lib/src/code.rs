use rand::Rng;
use std::collections::HashSet;
use std::fmt;

/// The distinct symbols that a secret is drawn from, and that guesses may use.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Pool {
    text: Box<str>,
    symbols: Vec<char>,
    members: HashSet<char>,
}

impl Pool {
    /// Constructs a pool from the symbols in `text`.
    ///
    /// A symbol repeated in `text` is only kept at its first occurrence.
    ///
    /// ```
    /// use rs_codebreaker::Pool;
    ///
    /// let pool = Pool::new("ABBA");
    ///
    /// assert_eq!(pool.as_str(), "AB");
    /// assert_eq!(pool.len(), 2);
    /// ```
    pub fn new(text: &str) -> Pool {
        let mut members = HashSet::new();
        let symbols: Vec<char> = text
            .chars()
            .filter(|symbol| members.insert(*symbol))
            .collect();
        Pool {
            text: symbols.iter().collect::<String>().into_boxed_str(),
            symbols,
            members,
        }
    }

    /// Returns `true` iff `symbol` may be used in a code.
    pub fn contains(&self, symbol: char) -> bool {
        self.members.contains(&symbol)
    }

    /// Returns each symbol of `text` that is not in this pool, once, in first-appearance order.
    pub fn invalid_symbols(&self, text: &str) -> String {
        let mut seen = HashSet::new();
        text.chars()
            .filter(|symbol| !self.contains(*symbol) && seen.insert(*symbol))
            .collect()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The hidden code that guesses are scored against.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Secret {
    code: Box<str>,
    length: usize,
}

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// The number of symbols in the code.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl From<&str> for Secret {
    fn from(code: &str) -> Secret {
        Secret {
            code: Box::from(code),
            length: code.chars().count(),
        }
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Generates a secret of `length` symbols, each drawn independently and uniformly from `pool`.
///
/// The pool must not be empty unless `length` is zero. [`Game::new`](crate::Game::new) checks
/// this before generating.
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use rs_codebreaker::{generate, Pool};
///
/// let pool = Pool::new("ROYGBIV");
/// let secret = generate(&pool, 4, &mut StdRng::seed_from_u64(7));
///
/// assert_eq!(secret.len(), 4);
/// assert!(secret.as_str().chars().all(|symbol| pool.contains(symbol)));
/// ```
pub fn generate<R>(pool: &Pool, length: usize, rng: &mut R) -> Secret
where
    R: Rng + ?Sized,
{
    let code: String = (0..length)
        .map(|_| pool.symbols[rng.gen_range(0..pool.len())])
        .collect();
    Secret {
        code: code.into_boxed_str(),
        length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pool_collapses_repeated_symbols() {
        let pool = Pool::new("ROYROYGBIV");

        assert_eq!(pool.as_str(), "ROYGBIV");
        assert_eq!(pool.symbols(), &['R', 'O', 'Y', 'G', 'B', 'I', 'V']);
    }

    #[test]
    fn pool_invalid_symbols_are_deduplicated() {
        let pool = Pool::new("ROYGBIV");

        assert_eq!(pool.invalid_symbols("ROYGZZZZ"), "Z");
        assert_eq!(pool.invalid_symbols("xRxyOz"), "xyz");
        assert_eq!(pool.invalid_symbols("ROYG"), "");
    }

    #[test]
    fn generate_uses_pool_symbols() {
        let pool = Pool::new("ABC");
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let secret = generate(&pool, 6, &mut rng);
            assert_eq!(secret.len(), 6);
            assert!(secret.as_str().chars().all(|symbol| pool.contains(symbol)));
        }
    }

    #[test]
    fn generate_is_reproducible_with_seed() {
        let pool = Pool::new("ROYGBIV");

        let first = generate(&pool, 8, &mut StdRng::seed_from_u64(1234));
        let second = generate(&pool, 8, &mut StdRng::seed_from_u64(1234));

        assert_eq!(first, second);
    }

    #[test]
    fn generate_empty_secret() {
        let secret = generate(&Pool::new(""), 0, &mut StdRng::seed_from_u64(0));

        assert!(secret.is_empty());
        assert_eq!(secret.as_str(), "");
    }

    #[test]
    fn generate_from_single_symbol_pool() {
        let secret = generate(&Pool::new("X"), 5, &mut StdRng::seed_from_u64(0));

        assert_eq!(secret.as_str(), "XXXXX");
    }

    #[test]
    fn secret_len_counts_chars() {
        let secret = Secret::from("éüö");

        assert_eq!(secret.len(), 3);
        assert_eq!(secret.to_string(), "éüö");
    }
}
