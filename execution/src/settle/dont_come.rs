//! Don't come: the flat bet and the stakes already moved behind a number.
//!
//! - 12 is barred: nothing moves.
//! - 7 or 11 loses the flat bet; a 7 also pays every don't-come point.
//! - 2 or 3 pays the flat bet.
//! - A point number beats the don't-come point on that number, then the flat
//!   bet moves behind it.

use super::{rolled_total, Settlement};
use crate::{ledger::BetLedger, Error};
use crapsim_types::{Point, RoundState, WagerType, SEVEN};

const LABEL: &str = "dont come win";

pub fn settle(ledger: BetLedger, round: &RoundState) -> Result<Settlement, Error> {
    let total = rolled_total(round)?;
    let mut settlement = Settlement::untouched(ledger);
    let flat = settlement.ledger.is_active(WagerType::DontCome);

    match total {
        12 => {}
        7 | 11 => {
            if flat {
                settlement.lose(WagerType::DontCome);
            }
            if total == SEVEN {
                for wager in WagerType::DONT_COME_POINTS {
                    if settlement.ledger.is_active(wager) {
                        settlement.win(LABEL, wager, total)?;
                    }
                }
            }
        }
        2 | 3 => {
            if flat {
                settlement.win(LABEL, WagerType::DontCome, total)?;
            }
        }
        _ => {
            let point = Point::try_from(total).map_err(|_| Error::NotAPointNumber(total))?;
            // The standing bet must go before the flat stake lands on its slot.
            let standing = WagerType::DontComePoint(point);
            if settlement.ledger.is_active(standing) {
                settlement.lose(standing);
            }
            if flat {
                settlement.migrate_dont_come(point);
            }
        }
    }
    Ok(settlement)
}
