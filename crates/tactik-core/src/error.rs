use thiserror::Error;

/// Errors produced by the prioritization engine.
///
/// A run either fully produces a ranking or fails with one of these before
/// producing anything; there are no partial results and no retries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The timetable has no days at all.
    #[error("timetable is empty")]
    EmptyTimetable,

    /// Anchor day index outside `[0, days)`.
    #[error("anchor day {anchor} is out of range for a {days}-day timetable")]
    AnchorOutOfRange { anchor: usize, days: usize },

    /// The forward window contains more distinct subjects than the engine
    /// tracks per pass.
    #[error("more than {limit} distinct subjects in the upcoming days")]
    CapacityExceeded { limit: usize },

    /// `finalize` was called without a rating for this subject.
    #[error("no difficulty rating supplied for '{0}'")]
    MissingDifficulty(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
