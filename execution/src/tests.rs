use super::*;
use crate::mocks::{scripted, RecordingObserver};
use crapsim_types::{chips, OutcomeCategory, Point, TableRules};
use proptest::prelude::*;

const STRATEGIES: [&dyn BettingStrategy; 3] =
    [&MinPassLineOnly, &MinPassLineMaxOdds, &DontComeWithPlaceBets];

#[test]
fn test_seeded_hands_replay() {
    let rules = TableRules::default();
    for strategy in STRATEGIES {
        let first =
            play_hand(&rules, strategy, &mut GameRng::new(11, 3), &mut NoopObserver).unwrap();
        let second =
            play_hand(&rules, strategy, &mut GameRng::new(11, 3), &mut NoopObserver).unwrap();
        assert_eq!(first.history, second.history);
        assert_eq!(first.balance_delta, second.balance_delta);
    }
}

#[test]
fn test_observer_sees_every_round() {
    let mut dice = scripted(&[(2, 3), (4, 4), (1, 1), (2, 3), (2, 3), (6, 1)]);
    let mut observer = RecordingObserver::default();
    let outcome = play_hand(
        &TableRules::default(),
        &MinPassLineMaxOdds,
        &mut dice,
        &mut observer,
    )
    .unwrap();

    assert_eq!(observer.rounds, outcome.history);
    assert_eq!(observer.stakes.len(), outcome.history.len());
    assert_eq!(observer.deltas.last(), Some(&outcome.balance_delta));
    // Point five made with 20 odds: +5 line, +30 odds; then a new point
    // five sevens out: -5 line, -20 odds.
    assert_eq!(outcome.balance_delta, chips(10));
    let neutrals = outcome
        .history
        .iter()
        .filter(|round| round.outcome == OutcomeCategory::Neutral)
        .count();
    assert_eq!(neutrals, 2);
}

#[test]
fn test_custom_rules_size_odds() {
    let rules = TableRules::new(
        chips(10),
        Point::ALL.iter().map(|&point| (point, chips(2))).collect(),
    )
    .unwrap();
    let mut dice = scripted(&[(3, 3), (5, 1), (1, 3), (1, 6)]);
    let outcome = play_hand(&rules, &MinPassLineMaxOdds, &mut dice, &mut NoopObserver).unwrap();
    // Six made: 10 on the line at even money, 20 odds at 6:5. Then the four
    // sevens out with 10 + 20 on the table.
    assert_eq!(outcome.balance_delta, chips(10 + 24 - 30));
}

proptest! {
    #[test]
    fn seeded_hands_end_on_seven_out(seed in any::<u64>(), hand in 0u64..1_000, which in 0usize..3) {
        let outcome = play_hand(
            &TableRules::default(),
            STRATEGIES[which],
            &mut GameRng::new(seed, hand),
            &mut NoopObserver,
        )
        .unwrap();

        let (last, rest) = outcome.history.split_last().unwrap();
        prop_assert!(last.is_seven_out());
        prop_assert!(rest.iter().all(|round| !round.is_seven_out()));
        // A seven-out settles every bet these strategies make.
        prop_assert_eq!(outcome.ledger.active_principal(), chips(0));
        // Stakes are sized to pay whole chips.
        prop_assert!(outcome.balance_delta.is_integer());
    }
}
