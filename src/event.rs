//! Event parser — classifies one chord-cell token as a space, repeat,
//! rest or chord.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TokenError;
use crate::glyphs::{REPEAT_MARKER, REST_MARKER};
use crate::model::ChordEvent;

static RE_CHORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z])([b#]*)([^/]*)(?:/(.*))?$").unwrap());
static RE_REST: Lazy<Regex> = Lazy::new(|| Regex::new(r"^r([0-9]*)(.*)$").unwrap());

const DEFAULT_REST_DURATION: u32 = 4;
const DEFAULT_REPEAT_MEASURES: u32 = 1;

/// Parse a single chord-cell token. Bar lines and time signatures never
/// reach this function; the line tokenizer filters them out first.
///
/// Checks run in order: space, repeat, rest, chord. The first character
/// decides between repeat and rest, so `rit.` is a rest and `%` is never
/// a chord.
pub fn parse_event(token: &str) -> Result<ChordEvent, TokenError> {
    if token.is_empty() || token == "." {
        return Ok(ChordEvent::Space);
    }

    if token.starts_with(REPEAT_MARKER) {
        return parse_repeat(token);
    }

    if token.starts_with(REST_MARKER) {
        return parse_rest(token);
    }

    parse_chord(token)
}

fn parse_repeat(token: &str) -> Result<ChordEvent, TokenError> {
    let tail = token.trim_start_matches(REPEAT_MARKER);
    let count = token.len() - tail.len();

    let measures = if tail.is_empty() {
        DEFAULT_REPEAT_MEASURES
    } else if tail.bytes().all(|b| b.is_ascii_digit()) {
        parse_count(tail)
    } else {
        return Err(TokenError(token.to_string()));
    };

    Ok(ChordEvent::Repeat { count, measures })
}

fn parse_rest(token: &str) -> Result<ChordEvent, TokenError> {
    let caps = RE_REST
        .captures(token)
        .ok_or_else(|| TokenError(token.to_string()))?;

    let digits = &caps[1];
    let duration = if digits.is_empty() {
        DEFAULT_REST_DURATION
    } else {
        parse_count(digits)
    };

    Ok(ChordEvent::Rest {
        duration,
        dot: caps[2].to_string(),
    })
}

/// Parse an all-digit run, saturating at `u32::MAX`.
fn parse_count(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

fn parse_chord(token: &str) -> Result<ChordEvent, TokenError> {
    let caps = RE_CHORD
        .captures(token)
        .ok_or_else(|| TokenError(token.to_string()))?;

    // Group 1 is a single ASCII letter whenever the regex matched.
    let note = caps[1]
        .chars()
        .next()
        .ok_or_else(|| TokenError(token.to_string()))?;

    Ok(ChordEvent::Chord {
        note,
        accidental: caps[2].to_string(),
        alteration: caps[3].to_string(),
        root: caps
            .get(4)
            .map(|m| m.as_str())
            .filter(|root| !root.is_empty())
            .map(String::from),
    })
}
