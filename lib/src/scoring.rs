use crate::results::Score;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::iter::zip;

/// Determines the score of `guess` when compared to `secret`.
///
/// Exact matches are found first. Each remaining secret symbol then claims at most one unused
/// guess position holding the same symbol, so no guess position is ever counted twice.
///
/// Both codes are expected to have the same number of symbols. That is not checked here.
///
/// ```
/// use rs_codebreaker::{score_guess, Score};
///
/// assert_eq!(score_guess("ABCD", "ABDC"), Score { correct: 2, close: 2 });
/// assert_eq!(score_guess("AABB", "ABAB"), Score { correct: 2, close: 2 });
/// ```
pub fn score_guess(secret: &str, guess: &str) -> Score {
    let mut positions_by_symbol = locate_symbols(guess);
    let secret: Vec<char> = secret.chars().collect();
    let mut consumed = vec![false; secret.len()];

    let mut correct = 0;
    for (index, symbol) in secret.iter().enumerate() {
        if let Some(positions) = positions_by_symbol.get_mut(symbol) {
            if positions.remove(&index) {
                correct += 1;
                consumed[index] = true;
            }
        }
    }

    let mut close = 0;
    for (symbol, _) in zip(&secret, &consumed).filter(|(_, is_consumed)| !**is_consumed) {
        if let Some(positions) = positions_by_symbol.get_mut(symbol) {
            if positions.pop_first().is_some() {
                close += 1;
            }
        }
    }

    Score { correct, close }
}

fn locate_symbols(code: &str) -> HashMap<char, BTreeSet<usize>> {
    let mut positions_by_symbol: HashMap<char, BTreeSet<usize>> = HashMap::new();
    for (index, symbol) in code.chars().enumerate() {
        positions_by_symbol.entry(symbol).or_default().insert(index);
    }
    positions_by_symbol
}
