use serde::{Deserialize, Serialize};

use crate::constants::{FORWARD_WEIGHT, HIGHLY_RECOMMENDED_ABOVE, RECOMMENDED_ABOVE};

/// Frequency tallies for one distinct subject token, collected by the
/// extraction pass and discarded after the ranking is produced.
///
/// The forward window is {anchor, anchor+1}, the backward window
/// {anchor, anchor-1, anchor-2}, both wrapping modulo the day count, so the
/// anchor day feeds BOTH counts. That duplication is intentional: the anchor
/// day is simultaneously "coming up" and "recently covered".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub name: String,
    pub forward_count: u32,
    pub backward_count: u32,
}

impl SubjectRecord {
    /// A record is only ever created on a forward-window sighting.
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            forward_count: 1,
            backward_count: 0,
        }
    }

    /// `score = forward_count * 2 - backward_count + difficulty`
    ///
    /// Linear heuristic: subjects recurring soon are boosted, recently
    /// covered ones discounted, harder ones bumped by a flat bonus. May be
    /// negative; no normalization or bounds.
    pub fn score(&self, difficulty: i32) -> i32 {
        self.forward_count as i32 * FORWARD_WEIGHT - self.backward_count as i32 + difficulty
    }
}

/// Recommendation tier assigned from the final score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    HighlyRecommended,
    Recommended,
    Comfortable,
}

impl Tier {
    /// Strict thresholds: score > 15 is Highly Recommended, 10 < score <= 15
    /// is Recommended, everything else Comfortable. Exactly 15 and exactly 10
    /// fall into the lower tier.
    pub fn from_score(score: i32) -> Self {
        if score > HIGHLY_RECOMMENDED_ABOVE {
            Tier::HighlyRecommended
        } else if score > RECOMMENDED_ABOVE {
            Tier::Recommended
        } else {
            Tier::Comfortable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::HighlyRecommended => "Highly Recommended",
            Tier::Recommended => "Recommended",
            Tier::Comfortable => "Comfortable",
        }
    }

    /// Advice line rendered under the tier label.
    pub fn advice(&self) -> &'static str {
        match self {
            Tier::HighlyRecommended => {
                "Focus on this one: it is coming up soon and you rated it challenging."
            }
            Tier::Recommended => "Revise this subject: important, but manageable.",
            Tier::Comfortable => "Minimal effort required: a light review keeps it fresh.",
        }
    }
}

/// One row of the final ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedSubject {
    pub name: String,
    pub forward_count: u32,
    pub backward_count: u32,
    pub difficulty: i32,
    pub score: i32,
    pub tier: Tier,
}
