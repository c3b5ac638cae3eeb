//! File and interactive planning flows: load a timetable, collect difficulty
//! ratings, run the engine, render the ranking.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result, ensure};
use chrono::{Datelike, Local};
use tactik_core::constants::{DIFFICULTY_MAX, DIFFICULTY_MIN};
use tactik_core::{Engine, MAX_DAYS, MIN_DAYS, PendingRanking, RankedSubject, Timetable};

pub fn run_file(
    path: &Path,
    anchor: Option<usize>,
    difficulty_flags: &[String],
    json: bool,
) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("could not open timetable {}", path.display()))?;
    let timetable = Timetable::from_lines(content.lines());
    tracing::debug!(
        "loaded {} day(s) from {}",
        timetable.day_count(),
        path.display()
    );

    let anchor = resolve_anchor(anchor);
    let pending = Engine::extract(&timetable, anchor)?;

    let mut ratings = parse_difficulty_flags(difficulty_flags)?;
    if pending.subjects().iter().any(|n| !ratings.contains_key(*n)) {
        show_counts(&pending);
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        collect_missing_ratings(&pending, &mut ratings, &mut lines)?;
    }

    let ranked = pending.finalize(&ratings)?;
    render(&ranked, json)
}

pub fn run_interactive(anchor: Option<usize>, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    prompt(&format!("number of days (min {MIN_DAYS}, max {MAX_DAYS}): "))?;
    let raw = next_line(&mut lines)?;
    let day_count: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("day count is not an integer: '{}'", raw.trim()))?;
    ensure!(
        (MIN_DAYS..=MAX_DAYS).contains(&day_count),
        "day count must be between {MIN_DAYS} and {MAX_DAYS}, got {day_count}"
    );

    let mut day_lines = Vec::with_capacity(day_count);
    for day in 1..=day_count {
        prompt(&format!("subjects for day {day} (comma-separated): "))?;
        day_lines.push(next_line(&mut lines)?);
    }
    let timetable = Timetable::from_lines(&day_lines);

    let anchor = resolve_anchor(anchor);
    let pending = Engine::extract(&timetable, anchor)?;
    show_counts(&pending);

    let mut ratings = HashMap::new();
    collect_missing_ratings(&pending, &mut ratings, &mut lines)?;

    let ranked = pending.finalize(&ratings)?;
    render(&ranked, json)
}

/// Default anchor is the local calendar weekday, 0 = Sunday through
/// 6 = Saturday, mapped straight onto the timetable's 0-based day index.
/// Range checking against the loaded timetable is the engine's job.
fn resolve_anchor(explicit: Option<usize>) -> usize {
    match explicit {
        Some(anchor) => anchor,
        None => {
            let anchor = Local::now().weekday().num_days_from_sunday() as usize;
            tracing::debug!("anchor derived from local weekday: {anchor}");
            anchor
        }
    }
}

/// Parse repeated `--difficulty NAME=RATING` flags. Names match timetable
/// tokens exactly (case-sensitive); ratings must be integers in 1..=10.
fn parse_difficulty_flags(flags: &[String]) -> Result<HashMap<String, i32>> {
    let mut ratings = HashMap::new();
    for flag in flags {
        let (name, value) = flag
            .split_once('=')
            .with_context(|| format!("expected NAME=RATING, got '{flag}'"))?;
        ratings.insert(name.to_string(), parse_rating(name, value)?);
    }
    Ok(ratings)
}

fn parse_rating(name: &str, value: &str) -> Result<i32> {
    let rating: i32 = value.trim().parse().with_context(|| {
        format!("difficulty for '{name}' is not an integer: '{}'", value.trim())
    })?;
    ensure!(
        (DIFFICULTY_MIN..=DIFFICULTY_MAX).contains(&rating),
        "difficulty for '{name}' must be {DIFFICULTY_MIN}-{DIFFICULTY_MAX}, got {rating}"
    );
    Ok(rating)
}

/// Frequency display shown before difficulty ratings are asked for.
fn show_counts(pending: &PendingRanking) {
    if pending.is_empty() {
        return;
    }
    println!("\nSubjects around the anchor day:");
    for record in pending.records() {
        println!(
            "  {}: upcoming {}, recent {}",
            record.name, record.forward_count, record.backward_count
        );
    }
    println!();
}

/// Prompt for every subject still missing a rating, in first-seen order.
/// Malformed input aborts the run; there are no retries.
fn collect_missing_ratings(
    pending: &PendingRanking,
    ratings: &mut HashMap<String, i32>,
    input: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    for name in pending.subjects() {
        if ratings.contains_key(name) {
            continue;
        }
        prompt(&format!(
            "difficulty for {name} ({DIFFICULTY_MIN}-{DIFFICULTY_MAX}): "
        ))?;
        let line = next_line(input)?;
        ratings.insert(name.to_string(), parse_rating(name, &line)?);
    }
    Ok(())
}

fn prompt(text: &str) -> Result<()> {
    print!("{text}");
    io::stdout().flush().context("failed to flush stdout")?;
    Ok(())
}

fn next_line(input: &mut impl Iterator<Item = io::Result<String>>) -> Result<String> {
    input
        .next()
        .context("ran out of input")?
        .context("failed to read input")
}

fn render(ranked: &[RankedSubject], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(ranked)?);
        return Ok(());
    }
    if ranked.is_empty() {
        println!("(no subjects in the upcoming days)");
        return Ok(());
    }

    println!("Study priorities:");
    for (position, subject) in ranked.iter().enumerate() {
        println!(
            "{:>2}. {}  score {} (upcoming {}, recent {}, difficulty {})  [{}]",
            position + 1,
            subject.name,
            subject.score,
            subject.forward_count,
            subject.backward_count,
            subject.difficulty,
            subject.tier.label(),
        );
        println!("      {}", subject.tier.advice());
    }
    Ok(())
}
