use crate::{chips, Chips, Point, DEFAULT_MAX_ODDS_MULTIPLE, DEFAULT_MIN_BET, MAX_TABLE_STAKE};
use num_traits::{CheckedAdd, CheckedMul, One, Zero};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("min_bet must be > 0 (got {0})")]
    NonPositiveMinBet(Chips),
    #[error("max_odds_multiple missing for point {0}")]
    MissingOddsMultiple(Point),
    #[error("max_odds_multiple for point {point} must be > 0 (got {value})")]
    NonPositiveOddsMultiple { point: Point, value: Chips },
    #[error("min_bet {min_bet} with {multiple}x odds on {point} exceeds the table limit of {}", MAX_TABLE_STAKE)]
    StakeAboveLimit {
        point: Point,
        min_bet: Chips,
        multiple: Chips,
    },
}

/// Table limits a strategy sizes its wagers against.
///
/// Only constructed through [TableRules::new], so every point has a
/// positive odds multiple, the minimum bet is positive, and a minimum bet
/// with full odds stays within [MAX_TABLE_STAKE].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRules {
    min_bet: Chips,
    max_odds_multiple: BTreeMap<Point, Chips>,
}

impl TableRules {
    pub fn new(
        min_bet: Chips,
        max_odds_multiple: BTreeMap<Point, Chips>,
    ) -> Result<Self, RulesError> {
        if min_bet <= Chips::zero() {
            return Err(RulesError::NonPositiveMinBet(min_bet));
        }
        for point in Point::ALL {
            let value = *max_odds_multiple
                .get(&point)
                .ok_or(RulesError::MissingOddsMultiple(point))?;
            if value <= Chips::zero() {
                return Err(RulesError::NonPositiveOddsMultiple { point, value });
            }
            let stake = value
                .checked_add(&Chips::one())
                .and_then(|factor| factor.checked_mul(&min_bet));
            if !matches!(stake, Some(stake) if stake <= chips(MAX_TABLE_STAKE)) {
                return Err(RulesError::StakeAboveLimit {
                    point,
                    min_bet,
                    multiple: value,
                });
            }
        }
        Ok(Self {
            min_bet,
            max_odds_multiple,
        })
    }

    pub fn min_bet(&self) -> Chips {
        self.min_bet
    }

    /// Largest odds bet allowed behind a flat stake, as a multiple of it.
    pub fn max_odds_multiple(&self, point: Point) -> Chips {
        self.max_odds_multiple
            .get(&point)
            .copied()
            .unwrap_or_else(Chips::zero)
    }
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            min_bet: chips(DEFAULT_MIN_BET),
            max_odds_multiple: DEFAULT_MAX_ODDS_MULTIPLE
                .iter()
                .map(|&(point, multiple)| (point, chips(multiple)))
                .collect(),
        }
    }
}
