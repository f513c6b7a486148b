//! Pass line and its odds. Both follow the shooter's outcome rather than the
//! raw total.

use super::{rolled_total, Settlement};
use crate::{ledger::BetLedger, Error};
use crapsim_types::{OutcomeCategory, RoundState, WagerType};

pub fn settle_line(ledger: BetLedger, round: &RoundState) -> Result<Settlement, Error> {
    let mut settlement = Settlement::untouched(ledger);
    if !settlement.ledger.is_active(WagerType::PassLine) {
        return Ok(settlement);
    }
    match round.outcome {
        OutcomeCategory::ComeOutWin | OutcomeCategory::PointMadeWin => {
            let total = rolled_total(round)?;
            settlement.win(round.outcome.label(), WagerType::PassLine, total)?;
        }
        OutcomeCategory::ComeOutLoss | OutcomeCategory::SevenOut => {
            settlement.lose(WagerType::PassLine);
        }
        _ => {}
    }
    Ok(settlement)
}

pub fn settle_odds(ledger: BetLedger, round: &RoundState) -> Result<Settlement, Error> {
    let mut settlement = Settlement::untouched(ledger);
    if !settlement.ledger.is_active(WagerType::PassLineOdds) {
        return Ok(settlement);
    }
    match round.outcome {
        OutcomeCategory::PointMadeWin => {
            let total = rolled_total(round)?;
            settlement.win("pass odds win", WagerType::PassLineOdds, total)?;
        }
        OutcomeCategory::SevenOut => settlement.lose(WagerType::PassLineOdds),
        _ => {}
    }
    Ok(settlement)
}
