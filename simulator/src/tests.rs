use super::*;
use crapsim_execution::{mocks::RecordingObserver, NoopObserver};
use crapsim_types::{OutcomeCategory, MAX_TABLE_STAKE};
use std::io::Write;

fn validated(rolls: &[(u8, u8)], strategy: StrategyName, hands: u32) -> ValidatedConfig {
    let mut config = Config {
        hands,
        strategy,
        seed: Some(7),
        ..Config::default()
    }
    .validate()
    .unwrap();
    config.rolls = rolls
        .iter()
        .map(|&(die1, die2)| DiceRoll::new(die1, die2))
        .collect();
    config
}

#[test]
fn test_default_config() {
    let config = Config::default().validate().unwrap();
    assert_eq!(config.hands, 10);
    assert_eq!(config.balance, chips(5_000));
    assert_eq!(config.strategy, StrategyName::DontComeWithPlaceBets);
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.rules, TableRules::default());
    assert!(config.rolls.is_empty());
}

#[test]
fn test_yaml_overrides() {
    let config = Config::from_yaml(
        "hands: 3\nstrategy: min-pass-line-max-odds\nseed: 42\nmin_bet: 10\nmax_odds_multiple: {4: 2, 5: 2, 6: 2, 8: 2, 9: 2, 10: 2}\n",
    )
    .unwrap();
    assert_eq!(config.balance, 5_000);
    let config = config.validate().unwrap();
    assert_eq!(config.hands, 3);
    assert_eq!(config.seed, 42);
    assert_eq!(config.strategy, StrategyName::MinPassLineMaxOdds);
    assert_eq!(config.rules.min_bet(), chips(10));
    assert_eq!(config.rules.max_odds_multiple(Point::Six), chips(2));
}

#[test]
fn test_yaml_rejects_unknown() {
    assert!(matches!(
        Config::from_yaml("strategy: martingale\n"),
        Err(ConfigError::Yaml(_))
    ));
    assert!(matches!(
        Config::from_yaml("hand: 3\n"),
        Err(ConfigError::Yaml(_))
    ));
}

#[test]
fn test_validate_errors() {
    let zero_hands = Config {
        hands: 0,
        ..Config::default()
    };
    assert!(matches!(
        zero_hands.validate(),
        Err(ConfigError::InvalidNonZero { field: "hands", .. })
    ));

    let bad_level = Config {
        log_level: "loud".to_string(),
        ..Config::default()
    };
    assert!(matches!(
        bad_level.validate(),
        Err(ConfigError::InvalidLogLevel { .. })
    ));

    let bad_min = Config {
        min_bet: 0,
        ..Config::default()
    };
    assert!(matches!(
        bad_min.validate(),
        Err(ConfigError::Rules(RulesError::NonPositiveMinBet(_)))
    ));

    let mut missing = Config::default();
    missing.max_odds_multiple.remove(&8);
    assert!(matches!(
        missing.validate(),
        Err(ConfigError::Rules(RulesError::MissingOddsMultiple(Point::Eight)))
    ));

    let mut not_a_point = Config::default();
    not_a_point.max_odds_multiple.insert(7, 1);
    assert!(matches!(
        not_a_point.validate(),
        Err(ConfigError::InvalidPoint(7))
    ));
}

#[test]
fn test_validate_rejects_oversized_table() {
    let big_min = Config {
        hands: 1,
        seed: Some(1),
        strategy: StrategyName::MinPassLineMaxOdds,
        min_bet: i64::MAX / 2,
        ..Config::default()
    };
    assert!(matches!(
        big_min.validate(),
        Err(ConfigError::Rules(RulesError::StakeAboveLimit {
            point: Point::Four,
            ..
        }))
    ));

    let mut big_odds = Config::default();
    big_odds.max_odds_multiple.insert(6, i64::MAX);
    assert!(matches!(
        big_odds.validate(),
        Err(ConfigError::Rules(RulesError::StakeAboveLimit {
            point: Point::Six,
            ..
        }))
    ));

    let big_balance = Config {
        balance: i64::MAX,
        ..Config::default()
    };
    assert!(matches!(
        big_balance.validate(),
        Err(ConfigError::TooLarge {
            field: "balance",
            ..
        })
    ));
}

#[test]
fn test_largest_table_plays_out() {
    // The biggest table the rules accept runs without overflowing.
    let mut config = Config {
        hands: 3,
        seed: Some(1),
        strategy: StrategyName::MinPassLineMaxOdds,
        balance: MAX_BALANCE,
        min_bet: MAX_TABLE_STAKE / 6,
        ..Config::default()
    }
    .validate()
    .unwrap();
    config.rolls = vec![DiceRoll::new(3, 3), DiceRoll::new(3, 3)];
    let summary = run_session(&config, &mut NoopObserver).unwrap();
    assert_eq!(summary.hands.len(), 3);
    assert_eq!(summary.tally.seven_outs, 3);
}

#[test]
fn test_parse_rolls() {
    let rolls = parse_rolls(r#"[{"die1": 3, "die2": 4}, {"die1": 6, "die2": 6}]"#).unwrap();
    assert_eq!(rolls, vec![DiceRoll::new(3, 4), DiceRoll::new(6, 6)]);

    let err = parse_rolls(r#"[{"die1": 3, "die2": 4}, {"die1": 0, "die2": 6}]"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidRoll {
            index: 1,
            source: InvalidDie(0)
        }
    ));
    assert!(matches!(parse_rolls("[3, 4]"), Err(ConfigError::Json(_))));
}

#[test]
fn test_rolls_file_through_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"die1": 2, "die2": 2}}, {{"die1": 5, "die2": 2}}]"#).unwrap();

    let config = Config {
        rolls: Some(file.path().to_path_buf()),
        ..Config::default()
    }
    .validate()
    .unwrap();
    assert_eq!(config.rolls, vec![DiceRoll::new(2, 2), DiceRoll::new(5, 2)]);

    let missing = Config {
        rolls: Some(file.path().with_extension("missing")),
        ..Config::default()
    };
    assert!(matches!(missing.validate(), Err(ConfigError::Read { .. })));
}

#[test]
fn test_replayed_session() {
    // Hand 1: natural, then point four made with odds, then point six sevens out.
    // Hand 2: point nine sevens out straight away.
    let config = validated(
        &[
            (3, 4),
            (2, 2),
            (1, 3),
            (3, 3),
            (1, 6),
            (4, 5),
            (2, 5),
        ],
        StrategyName::MinPassLineMaxOdds,
        2,
    );
    let mut observer = RecordingObserver::default();
    let summary = run_session(&config, &mut observer).unwrap();

    assert_eq!(summary.hands.len(), 2);
    // +5, +35, -30 in hand one; -25 in hand two.
    assert_eq!(summary.hands[0].balance_delta, chips(10));
    assert_eq!(summary.hands[1].balance_delta, chips(-25));
    assert_eq!(summary.balance, chips(4_985));
    assert_eq!(summary.net(), chips(-15));

    assert_eq!(summary.tally.rolls, 7);
    assert_eq!(summary.tally.points_set, 3);
    assert_eq!(summary.tally.points_won, 1);
    assert_eq!(summary.tally.come_out_wins, 1);
    assert_eq!(summary.tally.seven_outs, 2);
    assert_eq!(summary.tally.neutrals, 0);
    assert_eq!(summary.hands[1].tally.rolls, 2);
    assert_eq!(observer.rounds.len(), 7);
    assert_eq!(
        observer.rounds.last().map(|round| round.outcome),
        Some(OutcomeCategory::SevenOut)
    );

    assert_eq!(summary.distribution.count(7), 3);
    assert_eq!(summary.distribution.count(4), 2);
    assert_eq!(summary.distribution.rolls(), 7);
}

#[test]
fn test_seeded_session_reproducible() {
    let config = validated(&[], StrategyName::DontComeWithPlaceBets, 5);
    let first = run_session(&config, &mut NoopObserver).unwrap();
    let second = run_session(&config, &mut NoopObserver).unwrap();

    assert_eq!(first.balance, second.balance);
    assert_eq!(first.tally, second.tally);
    assert_eq!(first.distribution, second.distribution);
    assert_eq!(first.tally.seven_outs, 5);
    assert_eq!(
        first.tally.rolls,
        first.hands.iter().map(|hand| hand.history.len() as u64).sum::<u64>()
    );
}

#[test]
fn test_distribution_rows() {
    let mut distribution = DiceDistribution::default();
    for total in [7, 7, 7, 6, 6, 8] {
        distribution.record(total);
    }
    let rows: Vec<_> = distribution.rows().collect();
    assert_eq!(rows.len(), 11);
    assert_eq!(rows[0].total, 2);

    let seven = rows[5];
    assert_eq!(seven.total, 7);
    assert_eq!(seven.count, 3);
    assert!((seven.expected - 1.0).abs() < 1e-9);
    assert!((seven.diff_pct - 200.0).abs() < 1e-9);

    let empty = DiceDistribution::default();
    assert!(empty.rows().all(|row| row.diff_pct == 0.0));
}

#[test]
fn test_summary_renders() {
    let config = validated(&[(3, 4), (2, 2), (1, 6)], StrategyName::MinPassLineOnly, 1);
    let summary = run_session(&config, &mut NoopObserver).unwrap();
    let text = summary.to_string();
    assert!(text.contains("Dice Roll Distribution"));
    assert!(text.contains("Balance: 5000 (net 0)"));
    assert!(text.contains("Hand 1:"));
    assert!(text.contains("Net Come Out Wins: 1"));
}

#[test]
fn test_strategy_names() {
    assert_eq!(
        StrategyName::from_str("min-pass-line-only", false),
        Ok(StrategyName::MinPassLineOnly)
    );
    assert_eq!(
        StrategyName::DontComeWithPlaceBets.strategy().name(),
        "dont come with place bets"
    );
}
