//! Common types used throughout crapsim.
//!
//! Everything here is plain data: dice, points, wager slots, round state,
//! payouts and table rules. Game logic lives in `crapsim-execution`.

mod constants;
mod dice;
mod payout;
mod round;
mod rules;
mod wager;

pub use constants::*;
pub use dice::*;
pub use payout::*;
pub use round::*;
pub use rules::*;
pub use wager::*;

/// Exact chip amount. Every stake, multiplier and payout is a ratio so that
/// fractional odds (7:6, 3:2, ...) never accumulate rounding drift.
pub type Chips = num_rational::Ratio<i64>;

/// Whole-chip amount.
pub fn chips(amount: i64) -> Chips {
    Chips::from_integer(amount)
}
