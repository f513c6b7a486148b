//! Rules engine for a craps table: the shooter, the bet ledger, the
//! settlement pipeline and a driver that plays whole hands against a
//! betting strategy.

mod error;
pub mod hand;
pub mod ledger;
pub mod observer;
pub mod paytable;
pub mod rng;
pub mod settle;
pub mod shooter;
pub mod strategy;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use hand::{play_hand, HandOutcome};
pub use ledger::BetLedger;
pub use observer::{NoopObserver, Observer, TracingObserver};
pub use rng::{DiceSource, GameRng, ReplayDice};
pub use settle::{settle_all, Action, RoundSettlement};
pub use shooter::shoot;
pub use strategy::{BettingStrategy, DontComeWithPlaceBets, MinPassLineMaxOdds, MinPassLineOnly};
