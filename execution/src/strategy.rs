//! Betting strategies.
//!
//! A strategy sees the table rules, the round the shooter just produced and
//! the bettor's ledger, and returns the ledger with any new wagers placed.
//! It never settles anything; it only adds stake.

use crate::{ledger::BetLedger, Error};
use crapsim_types::{chips, Chips, Point, RoundState, TableRules, WagerType};

/// Decides what to put on the table before each roll.
pub trait BettingStrategy {
    fn name(&self) -> &'static str;

    /// Returns `ledger` with this round's new wagers placed.
    fn place_bets(
        &self,
        rules: &TableRules,
        round: &RoundState,
        ledger: BetLedger,
    ) -> Result<BetLedger, Error>;
}

/// Table minimum on the pass line at every come-out, nothing else.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinPassLineOnly;

impl BettingStrategy for MinPassLineOnly {
    fn name(&self) -> &'static str {
        "min pass line only"
    }

    fn place_bets(
        &self,
        rules: &TableRules,
        round: &RoundState,
        mut ledger: BetLedger,
    ) -> Result<BetLedger, Error> {
        if round.is_come_out && !ledger.is_active(WagerType::PassLine) {
            ledger.place(WagerType::PassLine, rules.min_bet())?;
        }
        Ok(ledger)
    }
}

/// Table minimum on the pass line, backed with the largest odds bet the
/// table allows once a point is up.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinPassLineMaxOdds;

impl BettingStrategy for MinPassLineMaxOdds {
    fn name(&self) -> &'static str {
        "min pass line max odds"
    }

    fn place_bets(
        &self,
        rules: &TableRules,
        round: &RoundState,
        ledger: BetLedger,
    ) -> Result<BetLedger, Error> {
        let mut ledger = MinPassLineOnly.place_bets(rules, round, ledger)?;
        if round.is_come_out || ledger.is_active(WagerType::PassLineOdds) {
            return Ok(ledger);
        }
        if let Some(point) = round.point {
            let amount = rules.max_odds_multiple(point) * ledger.amount(WagerType::PassLine);
            ledger.place(WagerType::PassLineOdds, amount)?;
        }
        Ok(ledger)
    }
}

/// Note recording that this shooter already got a don't-come bet.
pub const DONT_COME_NOTE: &str = "dont_come";

const DONT_COME_STAKE: i64 = 60;

/// Place stakes sized so each bet pays whole chips.
fn place_stake(point: Point) -> Option<Chips> {
    match point {
        Point::Five | Point::Nine => Some(chips(15)),
        Point::Six | Point::Eight => Some(chips(18)),
        Point::Four | Point::Ten => None,
    }
}

/// One don't-come bet per shooter, covered by place bets on the inside
/// numbers the don't-come stake is not sitting on.
#[derive(Clone, Copy, Debug, Default)]
pub struct DontComeWithPlaceBets;

impl BettingStrategy for DontComeWithPlaceBets {
    fn name(&self) -> &'static str {
        "dont come with place bets"
    }

    fn place_bets(
        &self,
        _rules: &TableRules,
        round: &RoundState,
        mut ledger: BetLedger,
    ) -> Result<BetLedger, Error> {
        let pointed = ledger.any_active(&WagerType::DONT_COME_POINTS);
        let mut flat = ledger.is_active(WagerType::DontCome);

        // Everything this shooter's don't-come bet covered is gone.
        if !pointed && !flat && !ledger.any_active(&WagerType::PLACE) {
            ledger.remove_note(DONT_COME_NOTE);
        }

        if !round.is_come_out && !pointed && !flat && ledger.note(DONT_COME_NOTE).is_none() {
            ledger.place(WagerType::DontCome, chips(DONT_COME_STAKE))?;
            ledger.set_note(DONT_COME_NOTE, "set");
            flat = true;
        }

        if pointed || flat {
            for point in Point::ALL {
                let Some(amount) = place_stake(point) else {
                    continue;
                };
                if ledger.is_active(WagerType::DontComePoint(point))
                    || ledger.is_active(WagerType::Place(point))
                {
                    continue;
                }
                ledger.place(WagerType::Place(point), amount)?;
            }
        }
        Ok(ledger)
    }
}
