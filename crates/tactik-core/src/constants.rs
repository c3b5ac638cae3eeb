/// Timetable capacity: one school week.
pub const MAX_DAYS: usize = 7;

/// Minimum meaningful week length for interactive entry.
pub const MIN_DAYS: usize = 2;

/// Distinct subjects tracked per prioritization pass.
pub const MAX_SUBJECTS: usize = 8;

/// Stored day line bound in bytes; longer input is silently truncated.
pub const MAX_LINE_LENGTH: usize = 100;

/// Days scanned ahead of the anchor, anchor inclusive.
pub const FORWARD_WINDOW: usize = 2;

/// Days scanned behind the anchor, anchor inclusive.
/// The anchor day feeds both tallies.
pub const BACKWARD_WINDOW: usize = 3;

/// Multiplier on forward occurrences in the score formula.
pub const FORWARD_WEIGHT: i32 = 2;

/// Strict lower bound for the Highly Recommended tier; 15 itself falls down.
pub const HIGHLY_RECOMMENDED_ABOVE: i32 = 15;

/// Strict lower bound for the Recommended tier; 10 itself falls down.
pub const RECOMMENDED_ABOVE: i32 = 10;

/// Expected difficulty rating range. Enforced at the input boundary,
/// not by the engine.
pub const DIFFICULTY_MIN: i32 = 1;
pub const DIFFICULTY_MAX: i32 = 10;
