#[cfg(test)]
mod tests {

    use std::error::Error;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ron;
    use rs_codebreaker::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct GuessRecord {
        text: String,
        correct: usize,
        close: usize,
    }

    #[test]
    fn game_config_serde() -> Result<(), Box<dyn Error>> {
        let config = GameConfig::default().with_pool("ABCDEF").with_length(6);

        let ser = ron::to_string(&config)?;
        let deser = ron::from_str::<GameConfig>(&ser)?;

        assert_eq!(deser, config);
        Ok(())
    }

    #[test]
    fn game_config_missing_fields_use_defaults() -> Result<(), Box<dyn Error>> {
        let config = ron::from_str::<GameConfig>("(length: 6)")?;
        assert_eq!(config.pool, "ROYGBIV");
        assert_eq!(config.length, 6);

        let mut game = config.new_game(&mut StdRng::seed_from_u64(8))?;
        assert!(game.guess("ROYGBI").is_ok());
        Ok(())
    }

    #[test]
    fn guess_serializes_text_and_counts() -> Result<(), Box<dyn Error>> {
        let mut game = Game::with_secret("ABCDEF", "ABCD")?;
        let guess = game.guess("ABDC")?;

        let ser = ron::to_string(&guess)?;
        let record = ron::from_str::<GuessRecord>(&ser)?;

        assert_eq!(
            record,
            GuessRecord {
                text: "ABDC".to_string(),
                correct: 2,
                close: 2,
            }
        );
        Ok(())
    }

    #[test]
    fn score_serializes_counts() -> Result<(), Box<dyn Error>> {
        let ser = ron::to_string(&score_guess("AABB", "ABAB"))?;

        assert!(ser.contains("correct:2"));
        assert!(ser.contains("close:2"));
        Ok(())
    }
}
