//! Time expressions and the carry cursor.
//!
//! Grammar (whitespace-separated chunks, summed):
//!   [+|-] chunk (ws chunk)*
//!   chunk    := clock | duration
//!   clock    := M:S[.frac] | H:M:S[.frac]
//!   duration := digits[.digits][h|m|s|ms]      (no unit means seconds)
//!
//! Examples:
//!   "1:30"      -> 90        (absolute: cursor reset to 0 first)
//!   "1h 2m 3s"  -> 3723
//!   "+5s"       -> cursor + 5
//!   "-200ms"    -> cursor - 0.2
//!
//! Relative expressions chain off whatever the previous resolution produced,
//! so a layout pass threads one [`TimeCursor`] through its calls in order.

use serde::{Deserialize, Serialize};

use crate::error::TimeFormatError;

/// A raw time as written in configuration: seconds or an expression.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeInput {
    Seconds(f64),
    Expr(String),
}

impl From<f64> for TimeInput {
    fn from(seconds: f64) -> Self {
        TimeInput::Seconds(seconds)
    }
}

impl From<&str> for TimeInput {
    fn from(expr: &str) -> Self {
        TimeInput::Expr(expr.to_string())
    }
}

impl From<String> for TimeInput {
    fn from(expr: String) -> Self {
        TimeInput::Expr(expr)
    }
}

/// Carry time threaded through a configuration pass.
///
/// Resolving consumes the cursor and returns the next one; start a fresh
/// cursor for every unrelated pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeCursor {
    carry: f64,
}

impl TimeCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor positioned at `seconds`.
    pub fn at(seconds: f64) -> Self {
        Self { carry: seconds }
    }

    #[inline]
    pub fn seconds(self) -> f64 {
        self.carry
    }

    /// Resolve `input` against this cursor.
    pub fn resolve(self, input: impl Into<TimeInput>) -> Result<Self, TimeFormatError> {
        resolve(self, input)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Anchor {
    Absolute,
    Forward,
    Backward,
}

/// Resolve a time input against `cursor`, returning the moved cursor.
///
/// - numbers overwrite the carry time
/// - unsigned expressions are absolute (carry reset to 0, then the delta added)
/// - `+expr` adds the delta, `-expr` subtracts it
pub fn resolve(
    cursor: TimeCursor,
    input: impl Into<TimeInput>,
) -> Result<TimeCursor, TimeFormatError> {
    let expr = match input.into() {
        TimeInput::Seconds(seconds) => return Ok(TimeCursor::at(seconds)),
        TimeInput::Expr(expr) => expr,
    };

    let trimmed = expr.trim();
    let (anchor, body) = if let Some(rest) = trimmed.strip_prefix('+') {
        (Anchor::Forward, rest)
    } else if let Some(rest) = trimmed.strip_prefix('-') {
        (Anchor::Backward, rest)
    } else {
        (Anchor::Absolute, trimmed)
    };

    let delta = parse_delta(body)?;
    let carry = match anchor {
        Anchor::Absolute => delta,
        Anchor::Forward => cursor.carry + delta,
        Anchor::Backward => cursor.carry - delta,
    };
    log::debug!(
        "timecode: '{}' resolved {} -> {}",
        trimmed,
        cursor.carry,
        carry
    );
    Ok(TimeCursor { carry })
}

/// Sum of all chunks in an unsigned expression. Empty input is zero.
pub fn parse_delta(expr: &str) -> Result<f64, TimeFormatError> {
    expr.split_whitespace().try_fold(0.0, |acc, chunk| {
        let secs = if chunk.contains(':') {
            parse_clock(chunk)?
        } else {
            parse_duration(chunk)?
        };
        Ok(acc + secs)
    })
}

/// Format non-negative seconds as `M:SS` (or `H:MM:SS` from one hour on),
/// keeping any fractional seconds so the string resolves back exactly.
/// Negative and non-finite inputs format as `0:00`.
pub fn format_clock(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let whole = seconds.floor() as u64;
    let hours = whole / 3600;
    let minutes = (whole % 3600) / 60;
    // Exact: subtracting an integer no larger than `seconds` is representable.
    let secs = seconds - (hours * 3600 + minutes * 60) as f64;
    let pad = if secs < 10.0 { "0" } else { "" };
    if hours > 0 {
        format!("{hours}:{minutes:02}:{pad}{secs}")
    } else {
        format!("{minutes}:{pad}{secs}")
    }
}

fn parse_clock(chunk: &str) -> Result<f64, TimeFormatError> {
    let parts: Vec<&str> = chunk.split(':').collect();
    let field_err = |field: &'static str| TimeFormatError::InvalidClockField {
        chunk: chunk.to_string(),
        field,
    };
    let (hours, minutes, seconds) = match parts.as_slice() {
        [m, s] => (None, *m, *s),
        [h, m, s] => (Some(*h), *m, *s),
        _ => {
            return Err(TimeFormatError::ClockSegments {
                chunk: chunk.to_string(),
                segments: parts.len(),
            })
        }
    };

    let seconds = parse_decimal(seconds).ok_or_else(|| field_err("seconds"))?;
    let minutes = parse_integer(minutes).ok_or_else(|| field_err("minutes"))?;
    let hours = match hours {
        Some(h) => parse_integer(h).ok_or_else(|| field_err("hours"))?,
        None => 0.0,
    };
    Ok(hours * 3600.0 + minutes * 60.0 + seconds)
}

fn parse_duration(chunk: &str) -> Result<f64, TimeFormatError> {
    let invalid = || TimeFormatError::InvalidDuration {
        chunk: chunk.to_string(),
    };
    let split = chunk
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(chunk.len());
    let (number, unit) = chunk.split_at(split);
    let value = parse_decimal(number).ok_or_else(invalid)?;
    match unit {
        "" | "s" => Ok(value),
        "m" => Ok(value * 60.0),
        "h" => Ok(value * 3600.0),
        "ms" => Ok(value / 1000.0),
        _ => Err(invalid()),
    }
}

/// `digits` only.
fn parse_integer(s: &str) -> Option<f64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<f64>().ok()
}

/// `digits[.digits]` only; rejects `.5`, `5.`, signs and exponents.
fn parse_decimal(s: &str) -> Option<f64> {
    let (int, frac) = match s.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (s, None),
    };
    let digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    if !digits(int) || frac.is_some_and(|f| !digits(f)) {
        return None;
    }
    s.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_shape() {
        assert_eq!(parse_decimal("30"), Some(30.0));
        assert_eq!(parse_decimal("1.25"), Some(1.25));
        assert_eq!(parse_decimal(".5"), None);
        assert_eq!(parse_decimal("5."), None);
        assert_eq!(parse_decimal("1e3"), None);
        assert_eq!(parse_decimal("1.2.3"), None);
        assert_eq!(parse_decimal(""), None);
    }

    #[test]
    fn integer_shape() {
        assert_eq!(parse_integer("02"), Some(2.0));
        assert_eq!(parse_integer("1.5"), None);
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("-3"), None);
    }

    #[test]
    fn long_digit_runs_are_well_formed() {
        // Past u64::MAX.
        let big = "99999999999999999999999";
        let minutes = parse_integer(big).unwrap();
        assert!(minutes > u64::MAX as f64);
        assert_eq!(parse_clock(&format!("{big}:00")).unwrap(), minutes * 60.0);
    }

    #[test]
    fn units_prefer_longest_match() {
        assert_eq!(parse_duration("200ms").unwrap(), 0.2);
        assert_eq!(parse_duration("2m").unwrap(), 120.0);
        assert_eq!(parse_duration("1.5h").unwrap(), 5400.0);
        assert_eq!(parse_duration("7").unwrap(), 7.0);
    }

    #[test]
    fn clock_fields() {
        assert_eq!(parse_clock("1:30").unwrap(), 90.0);
        assert_eq!(parse_clock("1:02:03.5").unwrap(), 3723.5);
        assert!(matches!(
            parse_clock("1:x"),
            Err(TimeFormatError::InvalidClockField { field: "seconds", .. })
        ));
        assert!(matches!(
            parse_clock("1.5:00"),
            Err(TimeFormatError::InvalidClockField { field: "minutes", .. })
        ));
    }
}
