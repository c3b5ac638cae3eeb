use std::sync::LazyLock;

use regex::Regex;

static DELIMITERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[, ]+").unwrap());

/// Split a day line into subject tokens on runs of commas and spaces.
/// Empty tokens are skipped. No case folding, no further trimming —
/// "math" and "Math" are different subjects, matched exactly by bytes.
pub fn tokenize(line: &str) -> Vec<&str> {
    DELIMITERS.split(line).filter(|t| !t.is_empty()).collect()
}
