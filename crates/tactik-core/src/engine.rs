use std::collections::HashMap;

use crate::constants::{BACKWARD_WINDOW, FORWARD_WINDOW, MAX_SUBJECTS};
use crate::error::{EngineError, Result};
use crate::subject::{RankedSubject, SubjectRecord, Tier};
use crate::timetable::Timetable;
use crate::tokenizer::tokenize;

/// Stateless prioritization engine.
///
/// Two-phase: [`Engine::extract`] tallies frequency signals around the anchor
/// day, then the caller collects difficulty ratings and hands them to
/// [`PendingRanking::finalize`]. The split keeps all I/O out of the engine.
pub struct Engine;

impl Engine {
    /// Extract subject frequency signals around the anchor day ("tomorrow").
    ///
    /// The forward pass scans {anchor, anchor+1} (mod days) and creates one
    /// record per distinct token, in first-seen order. The backward pass
    /// scans {anchor, anchor-1, anchor-2} (mod days) and only tallies
    /// subjects the forward pass already saw; tokens unique to the backward
    /// window carry no record — the ranking models what is due tomorrow,
    /// not what was merely studied recently.
    pub fn extract(timetable: &Timetable, anchor: usize) -> Result<PendingRanking> {
        let days = timetable.day_count();
        if days == 0 {
            return Err(EngineError::EmptyTimetable);
        }
        if anchor >= days {
            return Err(EngineError::AnchorOutOfRange { anchor, days });
        }

        let mut records: Vec<SubjectRecord> = Vec::new();

        for offset in 0..FORWARD_WINDOW {
            let day = (anchor + offset) % days;
            for token in tokenize(timetable.day(day)) {
                match records.iter_mut().find(|r| r.name == token) {
                    Some(record) => record.forward_count += 1,
                    None => {
                        if records.len() == MAX_SUBJECTS {
                            return Err(EngineError::CapacityExceeded {
                                limit: MAX_SUBJECTS,
                            });
                        }
                        records.push(SubjectRecord::new(token));
                    }
                }
            }
        }

        for offset in 0..BACKWARD_WINDOW {
            // offset % days keeps the subtraction in range when the window
            // wraps a short week more than once
            let day = (anchor + days - (offset % days)) % days;
            for token in tokenize(timetable.day(day)) {
                if let Some(record) = records.iter_mut().find(|r| r.name == token) {
                    record.backward_count += 1;
                }
            }
        }

        Ok(PendingRanking { records })
    }
}

/// Extraction output: frequency-tallied records waiting on difficulty input.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingRanking {
    records: Vec<SubjectRecord>,
}

impl PendingRanking {
    /// Distinct subject names needing a difficulty rating, first-seen order.
    pub fn subjects(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn records(&self) -> &[SubjectRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Score, sort, and categorize.
    ///
    /// `ratings` must cover every name from [`subjects`](Self::subjects);
    /// a missing entry fails with [`EngineError::MissingDifficulty`]. Values
    /// are taken as-is (expected 1-10, never clamped — range enforcement
    /// belongs to the input boundary). The sort is stable descending by
    /// score, so equal scores keep first-seen order.
    pub fn finalize(self, ratings: &HashMap<String, i32>) -> Result<Vec<RankedSubject>> {
        let mut ranked = Vec::with_capacity(self.records.len());
        for record in self.records {
            let difficulty = *ratings
                .get(&record.name)
                .ok_or_else(|| EngineError::MissingDifficulty(record.name.clone()))?;
            let score = record.score(difficulty);
            ranked.push(RankedSubject {
                name: record.name,
                forward_count: record.forward_count,
                backward_count: record.backward_count,
                difficulty,
                score,
                tier: Tier::from_score(score),
            });
        }
        ranked.sort_by_key(|r| std::cmp::Reverse(r.score));
        Ok(ranked)
    }
}
