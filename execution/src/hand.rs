//! Plays one shooter's hand from the first come-out to the seven-out.

use crate::{
    ledger::BetLedger,
    observer::Observer,
    rng::DiceSource,
    settle::{settle_all, RoundSettlement},
    shooter::shoot,
    strategy::BettingStrategy,
    Error,
};
use crapsim_types::{Chips, RoundState, TableRules};
use num_traits::Zero;

/// Result of a finished hand.
#[derive(Clone, Debug)]
pub struct HandOutcome {
    /// Every roll, in order. The last one is the seven-out.
    pub history: Vec<RoundState>,
    /// Net chips won (positive) or lost (negative) over the hand.
    pub balance_delta: Chips,
    /// Ledger after the final settlement.
    pub ledger: BetLedger,
}

fn abort(round: RoundState, ledger: &BetLedger, source: Error) -> Error {
    Error::Aborted {
        round: Box::new(round),
        ledger: Box::new(ledger.snapshot()),
        source: Box::new(source),
    }
}

/// Settles `round`, attaching the round and the untouched ledger to any
/// failure.
pub fn settle_round(ledger: &BetLedger, round: &RoundState) -> Result<RoundSettlement, Error> {
    settle_all(ledger, round).map_err(|source| abort(*round, ledger, source))
}

/// Runs rounds until the shooter sevens out.
///
/// Each round: the strategy places bets, their stake is debited, the dice are
/// thrown, everything on the table is settled and the payouts are credited.
/// `rules` is assumed valid; build it with [TableRules::new].
pub fn play_hand<D, O>(
    rules: &TableRules,
    strategy: &dyn BettingStrategy,
    dice: &mut D,
    observer: &mut O,
) -> Result<HandOutcome, Error>
where
    D: DiceSource + ?Sized,
    O: Observer + ?Sized,
{
    let mut round = RoundState::new_game();
    let mut ledger = BetLedger::new();
    let mut balance_delta = Chips::zero();
    let mut history = Vec::new();

    while !round.is_seven_out() {
        let before = ledger.snapshot();
        ledger = strategy
            .place_bets(rules, &round, ledger)
            .map_err(|source| abort(round, &before, source))?;
        let stake = ledger.take_new_stake();
        balance_delta -= stake;
        observer.bets_placed(strategy.name(), &ledger, stake);

        round = shoot(&round, dice.roll()).map_err(|source| abort(round, &ledger, source))?;
        observer.rolled(&round);

        let settled = settle_round(&ledger, &round)?;
        for action in &settled.actions {
            observer.action(action);
        }
        ledger = settled.ledger;

        if let Some(summary) = ledger.take_summary() {
            balance_delta += summary.total;
            observer.settled(&summary, balance_delta);
        }
        history.push(round);
    }

    Ok(HandOutcome {
        history,
        balance_delta,
        ledger,
    })
}
