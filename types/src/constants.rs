use crate::Point;

/// Table minimum used when no rules are configured.
pub const DEFAULT_MIN_BET: i64 = 5;

/// Conventional 3-4-5x odds limits.
pub const DEFAULT_MAX_ODDS_MULTIPLE: [(Point, i64); 6] = [
    (Point::Four, 3),
    (Point::Five, 4),
    (Point::Six, 5),
    (Point::Eight, 5),
    (Point::Nine, 4),
    (Point::Ten, 3),
];

/// Largest flat bet plus full odds a table may ask for. Keeps every
/// payout ratio and a long session's running balance well inside `i64`.
pub const MAX_TABLE_STAKE: i64 = 1_000_000;

/// Largest starting bankroll a session accepts.
pub const MAX_BALANCE: i64 = 1_000_000_000_000;

/// Bankroll a session starts with.
pub const STARTING_BALANCE: i64 = 5_000;

/// Hands simulated per session when not configured.
pub const DEFAULT_HANDS: u32 = 10;

/// Craps totals on the come-out roll (shooter loses).
pub const CRAPS_TOTALS: [u8; 3] = [2, 3, 12];

/// Naturals on the come-out roll (shooter wins).
pub const NATURAL_TOTALS: [u8; 2] = [7, 11];

pub const SEVEN: u8 = 7;
