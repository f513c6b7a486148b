use crate::ledger::BetLedger;
use crapsim_types::{InvalidDie, RoundState, WagerType};
use thiserror::Error;

/// Failures while running a hand.
///
/// Each one is a broken internal contract: the ledger can no longer be
/// trusted and the run must stop. [Error::Aborted] wraps the others with the
/// round and ledger they happened on.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidDie(#[from] InvalidDie),
    #[error("no payout defined for {wager} on dice total {total}")]
    MissingPayout { wager: WagerType, total: u8 },
    #[error("settlement requires a rolled round (got {outcome})")]
    MissingRoll { outcome: &'static str },
    #[error("dice total {0} reached the point-number branch")]
    NotAPointNumber(u8),
    #[error("negative stake {amount} for {wager}")]
    NegativeStake {
        wager: WagerType,
        amount: crapsim_types::Chips,
    },
    #[error("hand aborted after {round}")]
    Aborted {
        round: Box<RoundState>,
        /// Ledger as it stood before the failing step.
        ledger: Box<BetLedger>,
        #[source]
        source: Box<Error>,
    },
}
