use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of ways to roll each total with 2d6
pub const WAYS: [u8; 13] = [0, 0, 1, 2, 3, 4, 5, 6, 5, 4, 3, 2, 1];
//                          0  1  2  3  4  5  6  7  8  9 10 11 12

/// Die value outside 1-6.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("die value out of range: {0}")]
pub struct InvalidDie(pub u8);

/// A single validated die face (1-6).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Die(u8);

impl Die {
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Die {
    type Error = InvalidDie;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=6 => Ok(Die(value)),
            v => Err(InvalidDie(v)),
        }
    }
}

/// One recorded throw, as stored in a replay file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub die1: u8,
    pub die2: u8,
}

impl DiceRoll {
    pub fn new(die1: u8, die2: u8) -> Self {
        Self { die1, die2 }
    }

    pub fn as_array(self) -> [u8; 2] {
        [self.die1, self.die2]
    }

    /// Checks both faces without consuming the roll.
    pub fn validate(self) -> Result<[Die; 2], InvalidDie> {
        Ok([Die::try_from(self.die1)?, Die::try_from(self.die2)?])
    }
}

/// Point numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Point {
    Four = 4,
    Five = 5,
    Six = 6,
    Eight = 8,
    Nine = 9,
    Ten = 10,
}

impl Point {
    pub const ALL: [Point; 6] = [
        Point::Four,
        Point::Five,
        Point::Six,
        Point::Eight,
        Point::Nine,
        Point::Ten,
    ];

    /// Dice total this point is made on.
    pub fn total(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Point {
    type Error = ();

    fn try_from(total: u8) -> Result<Self, ()> {
        match total {
            4 => Ok(Point::Four),
            5 => Ok(Point::Five),
            6 => Ok(Point::Six),
            8 => Ok(Point::Eight),
            9 => Ok(Point::Nine),
            10 => Ok(Point::Ten),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.total())
    }
}
