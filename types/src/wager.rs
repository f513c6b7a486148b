use crate::{Chips, Point};
use num_traits::Zero;
use std::fmt;

/// Every wager slot a ledger carries.
///
/// Place and don't-come point wagers are parameterized by their number, so
/// the set is closed: `WagerType::ALL` lists all twenty slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WagerType {
    PassLine,
    PassLineOdds,
    Come,
    ComeOdds,
    DontPass,
    DontPassOdds,
    DontCome,
    DontComeOdds,
    Place(Point),
    DontComePoint(Point),
}

impl WagerType {
    pub const ALL: [WagerType; 20] = [
        WagerType::PassLine,
        WagerType::PassLineOdds,
        WagerType::Come,
        WagerType::ComeOdds,
        WagerType::DontPass,
        WagerType::DontPassOdds,
        WagerType::DontCome,
        WagerType::DontComeOdds,
        WagerType::Place(Point::Four),
        WagerType::Place(Point::Five),
        WagerType::Place(Point::Six),
        WagerType::Place(Point::Eight),
        WagerType::Place(Point::Nine),
        WagerType::Place(Point::Ten),
        WagerType::DontComePoint(Point::Four),
        WagerType::DontComePoint(Point::Five),
        WagerType::DontComePoint(Point::Six),
        WagerType::DontComePoint(Point::Eight),
        WagerType::DontComePoint(Point::Nine),
        WagerType::DontComePoint(Point::Ten),
    ];

    pub const PLACE: [WagerType; 6] = [
        WagerType::Place(Point::Four),
        WagerType::Place(Point::Five),
        WagerType::Place(Point::Six),
        WagerType::Place(Point::Eight),
        WagerType::Place(Point::Nine),
        WagerType::Place(Point::Ten),
    ];

    pub const DONT_COME_POINTS: [WagerType; 6] = [
        WagerType::DontComePoint(Point::Four),
        WagerType::DontComePoint(Point::Five),
        WagerType::DontComePoint(Point::Six),
        WagerType::DontComePoint(Point::Eight),
        WagerType::DontComePoint(Point::Nine),
        WagerType::DontComePoint(Point::Ten),
    ];

    /// Place wager matching a dice total, if the total is a point number.
    pub fn place_for(total: u8) -> Option<Self> {
        Point::try_from(total).ok().map(WagerType::Place)
    }
}

impl fmt::Display for WagerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WagerType::PassLine => write!(f, "pass line"),
            WagerType::PassLineOdds => write!(f, "pass odds"),
            WagerType::Come => write!(f, "come"),
            WagerType::ComeOdds => write!(f, "come odds"),
            WagerType::DontPass => write!(f, "dont pass"),
            WagerType::DontPassOdds => write!(f, "dont pass odds"),
            WagerType::DontCome => write!(f, "dont come"),
            WagerType::DontComeOdds => write!(f, "dont come odds"),
            WagerType::Place(point) => write!(f, "place {point}"),
            WagerType::DontComePoint(point) => write!(f, "dont come point {point}"),
        }
    }
}

/// One ledger slot.
///
/// An inactive slot always carries a zero amount; only the ledger mutates
/// slots, which keeps that invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wager {
    pub amount: Chips,
    /// Set on pass-line / don't-pass while a point stands, and on migrated
    /// don't-come stakes; the bettor may not take these down.
    pub is_contract: bool,
    pub is_active: bool,
}

impl Wager {
    /// Inactive, zero-stake slot.
    pub fn empty() -> Self {
        Self {
            amount: Chips::zero(),
            is_contract: false,
            is_active: false,
        }
    }

    /// Freshly placed (non-contract) wager.
    pub fn active(amount: Chips) -> Self {
        Self {
            amount,
            is_contract: false,
            is_active: true,
        }
    }
}

impl Default for Wager {
    fn default() -> Self {
        Self::empty()
    }
}
