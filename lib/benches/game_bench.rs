#![feature(test)]

extern crate test;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_codebreaker::*;

use std::result::Result;
use test::Bencher;

#[bench]
fn bench_game_new(b: &mut Bencher) {
    let mut rng = StdRng::seed_from_u64(0);
    b.iter(|| Game::new("ROYGBIV", 8, &mut rng))
}

#[bench]
fn bench_game_guess(b: &mut Bencher) -> Result<(), CodebreakerError> {
    let mut game = Game::new("ROYGBIV", 8, &mut StdRng::seed_from_u64(0))?;

    b.iter(|| {
        game.restart();
        game.guess("ROYGBIVR")
    });

    Ok(())
}
