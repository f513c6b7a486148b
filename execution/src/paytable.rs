//! Payout multipliers.
//!
//! Winnings are `stake × multiplier`; the stake itself is returned on top.
//! Multipliers are exact ratios: place 6 pays 7:6, not 1.1666.

use crate::Error;
use crapsim_types::{Chips, Point, WagerType, SEVEN};

fn ratio(numer: i64, denom: i64) -> Chips {
    Chips::new(numer, denom)
}

/// True odds on a point (pass side): 2:1, 3:2, 6:5.
fn pass_odds(point: Point) -> Chips {
    match point {
        Point::Four | Point::Ten => ratio(2, 1),
        Point::Five | Point::Nine => ratio(3, 2),
        Point::Six | Point::Eight => ratio(6, 5),
    }
}

/// True odds laid against a point (don't side): 1:2, 2:3, 5:6.
fn lay_odds(point: Point) -> Chips {
    match point {
        Point::Four | Point::Ten => ratio(1, 2),
        Point::Five | Point::Nine => ratio(2, 3),
        Point::Six | Point::Eight => ratio(5, 6),
    }
}

/// House place-bet odds: 9:5, 7:5, 7:6.
fn place_odds(point: Point) -> Chips {
    match point {
        Point::Four | Point::Ten => ratio(9, 5),
        Point::Five | Point::Nine => ratio(7, 5),
        Point::Six | Point::Eight => ratio(7, 6),
    }
}

/// Multiplier for `wager` winning on `total`, or `None` if that wager never
/// wins on that total.
pub fn lookup(wager: WagerType, total: u8) -> Option<Chips> {
    let point = Point::try_from(total).ok();
    match (wager, total, point) {
        (WagerType::PassLine, 7 | 11, _) => Some(ratio(1, 1)),
        (WagerType::PassLine, _, Some(_)) => Some(ratio(1, 1)),
        (WagerType::PassLineOdds, _, Some(point)) => Some(pass_odds(point)),
        (WagerType::DontCome, 2 | 3, _) => Some(ratio(1, 1)),
        (WagerType::DontComePoint(_), SEVEN, _) => Some(ratio(1, 1)),
        (WagerType::DontPassOdds | WagerType::DontComeOdds, _, Some(point)) => {
            Some(lay_odds(point))
        }
        (WagerType::Place(number), _, Some(point)) if number == point => Some(place_odds(point)),
        _ => None,
    }
}

/// Like [lookup], but a miss is a settlement bug: the caller asked for a
/// combination it should have filtered out.
pub fn multiplier(wager: WagerType, total: u8) -> Result<Chips, Error> {
    lookup(wager, total).ok_or(Error::MissingPayout { wager, total })
}

/// Winnings (profit only) for `amount` staked on `wager` that won on `total`.
pub fn profit(wager: WagerType, total: u8, amount: Chips) -> Result<Chips, Error> {
    Ok(amount * multiplier(wager, total)?)
}
