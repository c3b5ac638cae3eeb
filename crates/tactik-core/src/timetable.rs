use serde::{Deserialize, Serialize};

use crate::constants::{MAX_DAYS, MAX_LINE_LENGTH};

/// One school week: an ordered, immutable list of per-day subject lines.
///
/// Day strings are stored verbatim (line terminator stripped, length bounded)
/// and never mutated afterwards. The engine tokenizes them into fresh buffers
/// on every read, since the overlapping forward and backward windows re-read
/// the same day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    days: Vec<String>,
}

impl Timetable {
    /// Build from raw lines, one per day, in order.
    ///
    /// At most [`MAX_DAYS`] lines are consumed; any beyond that are silently
    /// dropped. Each line is stripped of a trailing `\n` or `\r\n` and
    /// truncated to [`MAX_LINE_LENGTH`] bytes on a char boundary.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let days = lines
            .into_iter()
            .take(MAX_DAYS)
            .map(|line| store_line(line.as_ref()))
            .collect();
        Self { days }
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Raw subject line for a day index. Window wrapping is the engine's
    /// business; the index must already be in `[0, day_count)`.
    pub fn day(&self, index: usize) -> &str {
        &self.days[index]
    }
}

fn store_line(raw: &str) -> String {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    let line = line.strip_suffix('\r').unwrap_or(line);
    truncate_to_boundary(line, MAX_LINE_LENGTH).to_string()
}

fn truncate_to_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
