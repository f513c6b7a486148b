//! Place bets: pay on their own number, all lose on a seven.

use super::{rolled_total, Settlement};
use crate::{ledger::BetLedger, Error};
use crapsim_types::{RoundState, WagerType, SEVEN};

pub fn settle(ledger: BetLedger, round: &RoundState) -> Result<Settlement, Error> {
    let total = rolled_total(round)?;
    let mut settlement = Settlement::untouched(ledger);
    if !settlement.ledger.any_active(&WagerType::PLACE) {
        return Ok(settlement);
    }

    if total == SEVEN {
        for wager in WagerType::PLACE {
            if settlement.ledger.is_active(wager) {
                settlement.lose(wager);
            }
        }
        return Ok(settlement);
    }

    if let Some(wager) = WagerType::place_for(total) {
        if settlement.ledger.is_active(wager) {
            settlement.win("place win", wager, total)?;
        }
    }
    Ok(settlement)
}
