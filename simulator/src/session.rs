use crate::ValidatedConfig;
use crapsim_execution::{play_hand, Error, GameRng, HandOutcome, Observer, ReplayDice};
use crapsim_types::{Chips, OutcomeCategory, RoundState, WAYS};
use std::fmt;
use tracing::info;

/// Roll counts by outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub rolls: u64,
    pub points_set: u64,
    pub points_won: u64,
    pub come_out_wins: u64,
    pub come_out_losses: u64,
    pub seven_outs: u64,
    pub neutrals: u64,
}

impl Tally {
    pub fn record(&mut self, round: &RoundState) {
        self.rolls += 1;
        match round.outcome {
            OutcomeCategory::PointEstablished => self.points_set += 1,
            OutcomeCategory::PointMadeWin => self.points_won += 1,
            OutcomeCategory::ComeOutWin => self.come_out_wins += 1,
            OutcomeCategory::ComeOutLoss => self.come_out_losses += 1,
            OutcomeCategory::SevenOut => self.seven_outs += 1,
            OutcomeCategory::Neutral => self.neutrals += 1,
            OutcomeCategory::NewGame => {}
        }
    }

    pub fn net_come_out_wins(&self) -> i64 {
        self.come_out_wins as i64 - self.come_out_losses as i64
    }
}

/// How often each dice total came up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiceDistribution {
    counts: [u64; 13],
}

/// One line of the distribution table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistributionRow {
    pub total: u8,
    pub count: u64,
    pub expected: f64,
    pub diff: f64,
    /// Zero when nothing was expected.
    pub diff_pct: f64,
}

impl DiceDistribution {
    pub fn record(&mut self, total: u8) {
        if let Some(count) = self.counts.get_mut(usize::from(total)) {
            *count += 1;
        }
    }

    pub fn count(&self, total: u8) -> u64 {
        self.counts.get(usize::from(total)).copied().unwrap_or(0)
    }

    pub fn rolls(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Count a fair pair of dice would produce for `total` over the recorded
    /// rolls.
    pub fn expected(&self, total: u8) -> f64 {
        let ways = WAYS.get(usize::from(total)).copied().unwrap_or(0);
        self.rolls() as f64 * f64::from(ways) / 36.0
    }

    /// Totals 2 through 12 against their expected counts.
    pub fn rows(&self) -> impl Iterator<Item = DistributionRow> + '_ {
        (2..=12).map(|total| {
            let count = self.count(total);
            let expected = self.expected(total);
            let diff = count as f64 - expected;
            let diff_pct = if expected > 0.0 {
                diff / expected * 100.0
            } else {
                0.0
            };
            DistributionRow {
                total,
                count,
                expected,
                diff,
                diff_pct,
            }
        })
    }
}

/// One finished hand.
#[derive(Clone, Debug)]
pub struct HandReport {
    pub balance_delta: Chips,
    pub tally: Tally,
    pub history: Vec<RoundState>,
}

impl From<HandOutcome> for HandReport {
    fn from(outcome: HandOutcome) -> Self {
        let mut tally = Tally::default();
        for round in &outcome.history {
            tally.record(round);
        }
        Self {
            balance_delta: outcome.balance_delta,
            tally,
            history: outcome.history,
        }
    }
}

/// Everything a session produced.
#[derive(Clone, Debug)]
pub struct SessionSummary {
    pub starting_balance: Chips,
    pub balance: Chips,
    pub tally: Tally,
    pub distribution: DiceDistribution,
    pub hands: Vec<HandReport>,
}

impl SessionSummary {
    pub fn new(starting_balance: Chips) -> Self {
        Self {
            starting_balance,
            balance: starting_balance,
            tally: Tally::default(),
            distribution: DiceDistribution::default(),
            hands: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: HandOutcome) {
        for round in &outcome.history {
            self.tally.record(round);
            self.distribution.record(round.dice_total);
        }
        self.balance += outcome.balance_delta;
        self.hands.push(outcome.into());
    }

    /// Net result of the session.
    pub fn net(&self) -> Chips {
        self.balance - self.starting_balance
    }
}

/// Plays `config.hands` hands back to back.
///
/// Recorded rolls are consumed first, across hand boundaries. After that
/// each hand draws from its own seeded generator, so hand `n` of a session is
/// reproducible from the seed alone.
pub fn run_session<O>(config: &ValidatedConfig, observer: &mut O) -> Result<SessionSummary, Error>
where
    O: Observer + ?Sized,
{
    let strategy = config.strategy.strategy();
    let mut dice = ReplayDice::new(config.rolls.iter().copied(), GameRng::new(config.seed, 0));
    let mut summary = SessionSummary::new(config.balance);

    for hand in 0..config.hands {
        dice.set_fallback(GameRng::new(config.seed, u64::from(hand)));
        let outcome = play_hand(&config.rules, strategy, &mut dice, observer)?;
        info!(
            "hand {} ({}): {} rolls, {}",
            hand + 1,
            strategy.name(),
            outcome.history.len(),
            outcome.balance_delta
        );
        summary.record(outcome);
    }
    Ok(summary)
}

fn write_tally(f: &mut fmt::Formatter<'_>, indent: &str, tally: &Tally) -> fmt::Result {
    writeln!(f, "{indent}Roll Count: {}", tally.rolls)?;
    writeln!(f, "{indent}Points Set: {}", tally.points_set)?;
    writeln!(f, "{indent}Points Won: {}", tally.points_won)?;
    writeln!(f, "{indent}Come Out Wins: {}", tally.come_out_wins)?;
    writeln!(f, "{indent}Come Out Losses: {}", tally.come_out_losses)?;
    writeln!(f, "{indent}Net Come Out Wins: {}", tally.net_come_out_wins())?;
    writeln!(f, "{indent}Neutrals: {}", tally.neutrals)
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dice Roll Distribution")?;
        writeln!(f, "┌─────┬───────┬──────────┬────────┬────────┐")?;
        writeln!(f, "│ Key │ Count │ Expected │   Diff │ Diff % │")?;
        writeln!(f, "├─────┼───────┼──────────┼────────┼────────┤")?;
        for row in self.distribution.rows() {
            writeln!(
                f,
                "│ {:>3} │ {:>5} │ {:>8.1} │ {:>6.1} │ {:>5.1}% │",
                row.total, row.count, row.expected, row.diff, row.diff_pct
            )?;
        }
        writeln!(f, "└─────┴───────┴──────────┴────────┴────────┘")?;

        writeln!(f)?;
        writeln!(f, "Session Summary")?;
        writeln!(f, "  Balance: {} (net {})", self.balance, self.net())?;
        writeln!(f, "  Hand Count: {}", self.hands.len())?;
        write_tally(f, "  ", &self.tally)?;

        writeln!(f)?;
        writeln!(f, "Hands Summary")?;
        for (index, hand) in self.hands.iter().enumerate() {
            writeln!(f, "Hand {}:", index + 1)?;
            writeln!(f, "    Balance: {}", hand.balance_delta)?;
            write_tally(f, "    ", &hand.tally)?;
        }
        Ok(())
    }
}
