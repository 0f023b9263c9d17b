//! Line-level passes run after the boilerplate catalogue.
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref TITLE_SHAPE: Regex =
        Regex::new(r"^[A-Z][^.!?]*[.!?]$").expect("title shape pattern must compile");
}

/// Drop lines of `min_chars` characters or fewer. Blank lines survive as
/// paragraph separators; kept lines are trimmed.
pub fn filter_short_lines(text: &str, min_chars: usize) -> String {
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                Some("")
            } else if trimmed.chars().count() > min_chars {
                Some(trimmed)
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse runs of blank lines into a single empty line.
pub fn collapse_blank_runs(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if matches!(out.last(), Some(prev) if prev.is_empty()) {
                continue;
            }
            out.push("");
        } else {
            out.push(line);
        }
    }
    out.join("\n")
}

/// Whether `line` looks like a headline sentence.
pub fn is_title_shaped(line: &str, max_chars: usize) -> bool {
    line.chars().count() < max_chars && TITLE_SHAPE.is_match(line)
}

/// Drop repeated headline-shaped lines, keeping the first occurrence.
pub fn dedupe_title_lines(text: &str, max_chars: usize) -> String {
    let mut seen = HashSet::new();
    text.lines()
        .filter(|line| !is_title_shaped(line, max_chars) || seen.insert(*line))
        .collect::<Vec<_>>()
        .join("\n")
}
