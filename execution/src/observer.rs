//! Hooks into a running hand.
//!
//! The driver reports every step to an [Observer]. Nothing in the engine
//! logs on its own; pick [TracingObserver] to get a trace of a hand or
//! [NoopObserver] to stay quiet.

use crate::{ledger::BetLedger, settle::Action};
use crapsim_types::{Chips, RoundState, RoundSummary};

/// Callbacks for one hand. Every method defaults to doing nothing.
pub trait Observer {
    /// The strategy has placed this round's bets.
    fn bets_placed(&mut self, _strategy: &str, _ledger: &BetLedger, _stake: Chips) {}

    /// The shooter classified a roll.
    fn rolled(&mut self, _round: &RoundState) {}

    /// One settlement step changed the ledger.
    fn action(&mut self, _action: &Action) {}

    /// Settlement finished and the bankroll was credited.
    fn settled(&mut self, _summary: &RoundSummary, _balance_delta: Chips) {}
}

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// Writes each step to `tracing`: rolls and settlements at info, ledger
/// detail at debug.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn bets_placed(&mut self, strategy: &str, ledger: &BetLedger, stake: Chips) {
        tracing::debug!(
            "{} placed {} (on table: {})",
            strategy,
            stake,
            ledger.active_principal()
        );
        for (wager, bet) in ledger.active() {
            let contract = if bet.is_contract { " (contract)" } else { "" };
            tracing::debug!("  {}: {}{}", wager, bet.amount, contract);
        }
    }

    fn rolled(&mut self, round: &RoundState) {
        tracing::info!("roll: {}", round);
    }

    fn action(&mut self, action: &Action) {
        tracing::debug!("{}", action);
    }

    fn settled(&mut self, summary: &RoundSummary, balance_delta: Chips) {
        tracing::info!(
            "paid {} (principal {}, profit {}), balance delta {}",
            summary.total,
            summary.principal,
            summary.profit,
            balance_delta
        );
    }
}
