use crate::Chips;
use num_traits::Zero;

/// Money returned to the bettor for one winning family in one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payout {
    pub label: &'static str,
    /// Returned stake.
    pub principal: Chips,
    /// Winnings on top of the stake.
    pub profit: Chips,
}

impl Payout {
    pub fn new(label: &'static str, principal: Chips, profit: Chips) -> Self {
        Self {
            label,
            principal,
            profit,
        }
    }

    pub fn total(&self) -> Chips {
        self.principal + self.profit
    }
}

/// Sum of every payout produced by one settlement pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub principal: Chips,
    pub profit: Chips,
    pub total: Chips,
}

impl RoundSummary {
    pub fn zero() -> Self {
        Self {
            principal: Chips::zero(),
            profit: Chips::zero(),
            total: Chips::zero(),
        }
    }

    pub fn from_payouts<'a>(payouts: impl IntoIterator<Item = &'a Payout>) -> Self {
        payouts.into_iter().fold(Self::zero(), |mut memo, payout| {
            memo.principal += payout.principal;
            memo.profit += payout.profit;
            memo.total += payout.total();
            memo
        })
    }
}

impl Default for RoundSummary {
    fn default() -> Self {
        Self::zero()
    }
}
