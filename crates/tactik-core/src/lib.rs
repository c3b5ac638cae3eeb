//! Subject prioritization engine for tactik.
//!
//! Ranks the subjects of a weekly timetable around an anchor day
//! ("tomorrow"): occurrences in the 2-day forward window boost a subject,
//! occurrences in the 3-day backward window discount it, and a user-supplied
//! difficulty rating adds a flat bonus. The result is an ordered list of
//! subjects with a recommendation tier each.
//!
//! Zero I/O — the caller loads the timetable, picks the anchor, and collects
//! difficulty ratings between the two engine phases.

pub mod constants;
pub mod engine;
pub mod error;
pub mod subject;
pub mod timetable;
pub mod tokenizer;

pub use constants::{MAX_DAYS, MAX_LINE_LENGTH, MAX_SUBJECTS, MIN_DAYS};
pub use engine::{Engine, PendingRanking};
pub use error::EngineError;
pub use subject::{RankedSubject, SubjectRecord, Tier};
pub use timetable::Timetable;
pub use tokenizer::tokenize;
