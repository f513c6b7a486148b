//! Settlement engine.
//!
//! A settlement pass takes the ledger as it stood when the dice were thrown
//! and the round state the shooter produced, then runs each wager family in a
//! fixed order:
//!
//! 1. place bets
//! 2. don't come (flat and pointed)
//! 3. pass line
//! 4. pass line odds
//!
//! Don't-come migration must land before anything reads contract flags, and a
//! seven-out clears the place bets before the line families run. Each family
//! takes the ledger by value and hands back the updated one, so the order is
//! the only coupling between them.

mod dont_come;
mod pass_line;
mod place;

use crate::{ledger::BetLedger, paytable, Error};
use crapsim_types::{Chips, OutcomeCategory, Payout, Point, RoundState, RoundSummary, WagerType};
use num_traits::Zero;
use std::fmt;

pub use dont_come::settle as settle_dont_come;
pub use pass_line::{settle_line as settle_pass_line, settle_odds as settle_pass_odds};
pub use place::settle as settle_place;

/// Wagers that become contract bets while a point stands.
const CONTRACT_WAGERS: [WagerType; 2] = [WagerType::PassLine, WagerType::DontPass];

/// One wager family's settlement step.
pub type Family = fn(BetLedger, &RoundState) -> Result<Settlement, Error>;

/// Families in settlement order.
pub const FAMILIES: [Family; 4] = [
    place::settle,
    dont_come::settle,
    pass_line::settle_line,
    pass_line::settle_odds,
];

/// Something a settlement pass did to the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Wager won: stake returned with profit, slot cleared.
    Paid {
        wager: WagerType,
        principal: Chips,
        profit: Chips,
    },
    /// Wager lost: stake kept by the house, slot cleared.
    Lost { wager: WagerType, amount: Chips },
    /// Flat don't-come stake moved behind its number.
    Migrated { point: Point, amount: Chips },
    /// Pass line / don't pass contract flag changed.
    Contract { wager: WagerType, on: bool },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Paid {
                wager,
                principal,
                profit,
            } => write!(f, "clear {wager} bet, payout {principal}+{profit}"),
            Action::Lost { wager, amount } => write!(f, "clear {wager} bet, lost {amount}"),
            Action::Migrated { point, amount } => {
                write!(f, "move dont come bet {amount} to dont come point {point}")
            }
            Action::Contract { wager, on: true } => write!(f, "{wager} is a contract bet"),
            Action::Contract { wager, on: false } => write!(f, "{wager} contract released"),
        }
    }
}

/// Output of one family.
#[derive(Clone, Debug)]
pub struct Settlement {
    pub ledger: BetLedger,
    /// Every win inside one family folds into a single payout.
    pub payout: Option<Payout>,
    pub actions: Vec<Action>,
}

impl Settlement {
    /// No change yet.
    pub fn untouched(ledger: BetLedger) -> Self {
        Self {
            ledger,
            payout: None,
            actions: Vec::new(),
        }
    }

    /// Clears `wager` as a loss.
    fn lose(&mut self, wager: WagerType) {
        let amount = self.ledger.amount(wager);
        self.ledger.clear(wager);
        self.actions.push(Action::Lost { wager, amount });
    }

    /// Clears `wager` as a win on `total`, paying from the table.
    fn win(&mut self, label: &'static str, wager: WagerType, total: u8) -> Result<(), Error> {
        let principal = self.ledger.amount(wager);
        let profit = paytable::profit(wager, total, principal)?;
        self.ledger.clear(wager);
        self.actions.push(Action::Paid {
            wager,
            principal,
            profit,
        });
        let payout = self
            .payout
            .get_or_insert_with(|| Payout::new(label, Chips::zero(), Chips::zero()));
        payout.principal += principal;
        payout.profit += profit;
        Ok(())
    }

    fn migrate_dont_come(&mut self, point: Point) {
        let amount = self.ledger.amount(WagerType::DontCome);
        self.ledger.migrate_dont_come(point);
        self.actions.push(Action::Migrated { point, amount });
    }
}

/// Output of a full settlement pass.
#[derive(Clone, Debug)]
pub struct RoundSettlement {
    /// Ledger after every family ran; its summary is already set.
    pub ledger: BetLedger,
    pub payouts: Vec<Payout>,
    pub actions: Vec<Action>,
    pub summary: RoundSummary,
}

impl RoundSettlement {
    /// Stake returned to the bettor this round.
    pub fn paid_principal(&self) -> Chips {
        self.summary.principal
    }

    /// Stake the house kept this round.
    pub fn lost_principal(&self) -> Chips {
        self.actions
            .iter()
            .fold(Chips::zero(), |total, action| match action {
                Action::Lost { amount, .. } => total + amount,
                _ => total,
            })
    }
}

/// Dice total of a rolled round. Settling a round nobody rolled is a caller bug.
fn rolled_total(round: &RoundState) -> Result<u8, Error> {
    if round.has_rolled() {
        Ok(round.dice_total)
    } else {
        Err(Error::MissingRoll {
            outcome: round.outcome.label(),
        })
    }
}

/// Runs every family over a snapshot of `ledger` for `round`.
///
/// `ledger` itself is left as it was, so a failed pass can still be
/// inspected.
pub fn settle_all(ledger: &BetLedger, round: &RoundState) -> Result<RoundSettlement, Error> {
    rolled_total(round)?;
    let mut current = ledger.snapshot();
    let mut payouts = Vec::new();
    let mut actions = Vec::new();

    let contract = match round.outcome {
        OutcomeCategory::PointEstablished => Some(true),
        OutcomeCategory::SevenOut | OutcomeCategory::PointMadeWin => Some(false),
        _ => None,
    };
    if let Some(on) = contract {
        let working: Vec<WagerType> = CONTRACT_WAGERS
            .into_iter()
            .filter(|&wager| current.is_active(wager))
            .collect();
        current.mark_contract(&working, on);
        actions.extend(
            working
                .into_iter()
                .map(|wager| Action::Contract { wager, on }),
        );
    }

    for family in FAMILIES {
        let settlement = family(current, round)?;
        current = settlement.ledger;
        payouts.extend(settlement.payout);
        actions.extend(settlement.actions);
    }

    let summary = RoundSummary::from_payouts(&payouts);
    current.set_summary(summary);

    Ok(RoundSettlement {
        ledger: current,
        payouts,
        actions,
        summary,
    })
}
