//! Bet ledger: one wager slot per [WagerType], plus per-round bookkeeping.

use crate::Error;
use crapsim_types::{Chips, Point, RoundSummary, Wager, WagerType};
use num_traits::Zero;
use std::collections::BTreeMap;

/// Every wager a bettor has on the table.
///
/// The slot map is filled with every [WagerType] at construction and slots
/// are only ever reset, never removed, so reads are total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BetLedger {
    wagers: BTreeMap<WagerType, Wager>,
    /// Stake placed since the driver last debited the bankroll.
    new_stake: Chips,
    /// Result of the latest settlement pass, until the driver takes it.
    summary: Option<RoundSummary>,
    /// Free-form facts strategies keep across rounds of one hand.
    notes: BTreeMap<String, String>,
}

impl BetLedger {
    pub fn new() -> Self {
        Self {
            wagers: WagerType::ALL
                .iter()
                .map(|&wager| (wager, Wager::empty()))
                .collect(),
            new_stake: Chips::zero(),
            summary: None,
            notes: BTreeMap::new(),
        }
    }

    fn slot_mut(&mut self, wager: WagerType) -> &mut Wager {
        self.wagers.entry(wager).or_default()
    }

    /// Puts `amount` on `wager`. A zero amount does nothing.
    pub fn place(&mut self, wager: WagerType, amount: Chips) -> Result<(), Error> {
        if amount < Chips::zero() {
            return Err(Error::NegativeStake { wager, amount });
        }
        if amount.is_zero() {
            return Ok(());
        }
        *self.slot_mut(wager) = Wager::active(amount);
        self.new_stake += amount;
        Ok(())
    }

    /// The wager on `wager`, or `None` if that slot is not in play.
    pub fn get(&self, wager: WagerType) -> Option<&Wager> {
        self.wagers.get(&wager).filter(|w| w.is_active)
    }

    /// Stake on `wager`, zero when inactive.
    pub fn amount(&self, wager: WagerType) -> Chips {
        self.get(wager).map_or_else(Chips::zero, |w| w.amount)
    }

    pub fn is_active(&self, wager: WagerType) -> bool {
        self.get(wager).is_some()
    }

    /// Resets `wager` to inactive with no stake.
    pub fn clear(&mut self, wager: WagerType) {
        *self.slot_mut(wager) = Wager::empty();
    }

    /// Moves the whole don't-come stake behind `point`. The destination becomes
    /// a contract wager; the flat don't-come slot is emptied in the same step.
    pub fn migrate_dont_come(&mut self, point: Point) {
        let source = self.amount(WagerType::DontCome);
        if source.is_zero() {
            return;
        }
        *self.slot_mut(WagerType::DontComePoint(point)) = Wager {
            amount: source,
            is_contract: true,
            is_active: true,
        };
        *self.slot_mut(WagerType::DontCome) = Wager::empty();
    }

    /// Sets or unsets the contract flag on each listed slot.
    pub fn mark_contract(&mut self, wagers: &[WagerType], on: bool) {
        for &wager in wagers {
            self.slot_mut(wager).is_contract = on;
        }
    }

    /// Independent copy of the whole ledger.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Active wagers in slot order.
    pub fn active(&self) -> impl Iterator<Item = (WagerType, &Wager)> + '_ {
        self.wagers
            .iter()
            .filter(|(_, w)| w.is_active)
            .map(|(&wager, w)| (wager, w))
    }

    /// Sum of every active stake.
    pub fn active_principal(&self) -> Chips {
        self.active()
            .fold(Chips::zero(), |total, (_, w)| total + w.amount)
    }

    pub fn any_active(&self, wagers: &[WagerType]) -> bool {
        wagers.iter().any(|&wager| self.is_active(wager))
    }

    pub fn new_stake(&self) -> Chips {
        self.new_stake
    }

    /// Returns the stake placed since the last call and resets it.
    pub fn take_new_stake(&mut self) -> Chips {
        std::mem::replace(&mut self.new_stake, Chips::zero())
    }

    pub fn summary(&self) -> Option<&RoundSummary> {
        self.summary.as_ref()
    }

    pub(crate) fn set_summary(&mut self, summary: RoundSummary) {
        self.summary = Some(summary);
    }

    /// Removes the latest round summary so it is credited exactly once.
    pub fn take_summary(&mut self) -> Option<RoundSummary> {
        self.summary.take()
    }

    pub fn note(&self, key: &str) -> Option<&str> {
        self.notes.get(key).map(String::as_str)
    }

    pub fn set_note(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.notes.insert(key.into(), value.into());
    }

    pub fn remove_note(&mut self, key: &str) -> Option<String> {
        self.notes.remove(key)
    }
}

impl Default for BetLedger {
    fn default() -> Self {
        Self::new()
    }
}
