use crate::Point;
use std::fmt;

/// Classification of a roll against the phase it was thrown in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutcomeCategory {
    /// No roll yet this hand.
    NewGame,
    /// Come-out 2, 3 or 12.
    ComeOutLoss,
    /// Come-out 7 or 11.
    ComeOutWin,
    /// Come-out 4, 5, 6, 8, 9 or 10.
    PointEstablished,
    /// Point repeated before a seven.
    PointMadeWin,
    /// Seven during the point phase; ends the hand.
    SevenOut,
    /// Any other point-phase roll.
    Neutral,
}

impl OutcomeCategory {
    pub fn label(self) -> &'static str {
        match self {
            OutcomeCategory::NewGame => "new game",
            OutcomeCategory::ComeOutLoss => "comeout loss",
            OutcomeCategory::ComeOutWin => "comeout win",
            OutcomeCategory::PointEstablished => "point set",
            OutcomeCategory::PointMadeWin => "point win",
            OutcomeCategory::SevenOut => "seven out",
            OutcomeCategory::Neutral => "neutral",
        }
    }
}

impl fmt::Display for OutcomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shooter state after a roll.
///
/// Dice are stored sorted (`die1 <= die2`). Before the first roll of a hand
/// both dice and the total are 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundState {
    pub die1: u8,
    pub die2: u8,
    pub dice_total: u8,
    pub outcome: OutcomeCategory,
    pub is_come_out: bool,
    /// `None` means the point is off.
    pub point: Option<Point>,
}

impl RoundState {
    /// State at hand start: come-out, point off, nothing rolled.
    pub fn new_game() -> Self {
        Self {
            die1: 0,
            die2: 0,
            dice_total: 0,
            outcome: OutcomeCategory::NewGame,
            is_come_out: true,
            point: None,
        }
    }

    pub fn has_rolled(&self) -> bool {
        self.dice_total != 0
    }

    /// True once the hand is over.
    pub fn is_seven_out(&self) -> bool {
        self.outcome == OutcomeCategory::SevenOut
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_rolled() {
            return f.write_str(self.outcome.label());
        }
        write!(
            f,
            "{} + {} == {} => {}",
            self.die1, self.die2, self.dice_total, self.outcome
        )?;
        if let Some(point) = self.point {
            write!(f, " (point {point})")?;
        }
        Ok(())
    }
}
