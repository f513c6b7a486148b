//! Shooter state machine.
//!
//! Phases:
//! - Come out: 2/3/12 lose, 7/11 win, anything else sets the point.
//! - Point: the point wins and resets to come out, 7 sevens out, anything
//!   else is neutral.

use crate::Error;
use crapsim_types::{
    Die, OutcomeCategory, Point, RoundState, CRAPS_TOTALS, NATURAL_TOTALS, SEVEN,
};

/// Classifies `dice` against `prior` and returns the new round state.
///
/// Dice order does not matter; the result stores them sorted.
pub fn shoot(prior: &RoundState, dice: [u8; 2]) -> Result<RoundState, Error> {
    let [a, b] = dice;
    let (low, high) = {
        let a = Die::try_from(a)?.value();
        let b = Die::try_from(b)?.value();
        (a.min(b), a.max(b))
    };
    let total = low + high;

    let (outcome, is_come_out, point) = if prior.is_come_out {
        if CRAPS_TOTALS.contains(&total) {
            (OutcomeCategory::ComeOutLoss, true, None)
        } else if NATURAL_TOTALS.contains(&total) {
            (OutcomeCategory::ComeOutWin, true, None)
        } else {
            let point = Point::try_from(total).map_err(|_| Error::NotAPointNumber(total))?;
            (OutcomeCategory::PointEstablished, false, Some(point))
        }
    } else if prior.point.map(Point::total) == Some(total) {
        (OutcomeCategory::PointMadeWin, true, None)
    } else if total == SEVEN {
        (OutcomeCategory::SevenOut, true, None)
    } else {
        (OutcomeCategory::Neutral, false, prior.point)
    };

    Ok(RoundState {
        die1: low,
        die2: high,
        dice_total: total,
        outcome,
        is_come_out,
        point,
    })
}
