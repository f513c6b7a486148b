//! Test doubles shared by this crate's tests and by downstream crates
//! (enable the `mocks` feature).

use crate::{ledger::BetLedger, observer::Observer, rng::ReplayDice, settle::Action};
use crapsim_types::{chips, Chips, DiceRoll, RoundState, RoundSummary, WagerType};

/// Dice that play back `rolls` and panic once they run out.
pub fn scripted(rolls: &[(u8, u8)]) -> ReplayDice<impl FnMut() -> u8> {
    ReplayDice::new(
        rolls.iter().map(|&(die1, die2)| DiceRoll::new(die1, die2)),
        || -> u8 { panic!("ran out of recorded rolls") },
    )
}

/// Ledger holding whole-chip `stakes`, with no stake pending debit.
pub fn ledger_with(stakes: &[(WagerType, i64)]) -> BetLedger {
    let mut ledger = BetLedger::new();
    for &(wager, amount) in stakes {
        ledger
            .place(wager, chips(amount))
            .expect("stake must not be negative");
    }
    ledger.take_new_stake();
    ledger
}

/// Records every callback.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub stakes: Vec<Chips>,
    pub rounds: Vec<RoundState>,
    pub actions: Vec<Action>,
    pub deltas: Vec<Chips>,
}

impl Observer for RecordingObserver {
    fn bets_placed(&mut self, _strategy: &str, _ledger: &BetLedger, stake: Chips) {
        self.stakes.push(stake);
    }

    fn rolled(&mut self, round: &RoundState) {
        self.rounds.push(*round);
    }

    fn action(&mut self, action: &Action) {
        self.actions.push(action.clone());
    }

    fn settled(&mut self, _summary: &RoundSummary, balance_delta: Chips) {
        self.deltas.push(balance_delta);
    }
}
