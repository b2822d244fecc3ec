use crate::config::{MIN_RING_CYCLE_MS, RING_RADIUS};
use once_cell::sync::Lazy;
use regex::Regex;

// Compiled regexes for duration parsing
static TIME_MIN_SEC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)m\s*(\d+)s$").unwrap());
static TIME_COLON_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+):(\d+)$").unwrap());
static TIME_SEC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)s$").unwrap());
static TIME_COLON_MSEC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+):(\d{2})\.(\d{1,3})$").unwrap());

/// Duration parsing error types
#[derive(Debug, PartialEq, Eq)]
pub enum TimeParseError {
    EmptyInput,
    InvalidFormat(String),
    InvalidMinutes,
    InvalidSeconds(u64),
    InvalidMilliseconds,
}

impl std::fmt::Display for TimeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeParseError::EmptyInput => write!(f, "Duration cannot be empty"),
            TimeParseError::InvalidFormat(hint) => write!(f, "Invalid duration format. {}", hint),
            TimeParseError::InvalidMinutes => write!(f, "Invalid minutes value"),
            TimeParseError::InvalidSeconds(s) => write!(f, "Invalid seconds: {} (must be 0-59)", s),
            TimeParseError::InvalidMilliseconds => write!(f, "Invalid milliseconds value"),
        }
    }
}

impl std::error::Error for TimeParseError {}

fn capture_u64(text: &str, err: TimeParseError) -> Result<u64, TimeParseError> {
    text.parse().map_err(|_| err)
}

fn checked_seconds(seconds: u64) -> Result<u64, TimeParseError> {
    if seconds > 59 {
        Err(TimeParseError::InvalidSeconds(seconds))
    } else {
        Ok(seconds)
    }
}

/// Sum the fields into milliseconds, rejecting totals that overflow `u64`.
fn total_ms(minutes: u64, seconds: u64, milliseconds: u64) -> Result<u64, TimeParseError> {
    minutes
        .checked_mul(60_000)
        .and_then(|ms| seconds.checked_mul(1_000).and_then(|s| ms.checked_add(s)))
        .and_then(|ms| ms.checked_add(milliseconds))
        .ok_or_else(|| TimeParseError::InvalidFormat("Duration too large".to_string()))
}

/// Parse a duration typed by the user into milliseconds.
///
/// Supported formats:
/// - Pure number: "60000" (milliseconds)
/// - Minutes:seconds.milliseconds: "1:30.500"
/// - Minutes and seconds: "2m 30s" or "2m30s"
/// - Colon format: "1:30" (minutes:seconds)
/// - Seconds only: "90s"
pub fn parse_duration_to_ms(input: &str) -> Result<u64, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::EmptyInput);
    }

    if let Ok(ms) = trimmed.parse::<u64>() {
        return Ok(ms);
    }

    if let Some(captures) = TIME_COLON_MSEC_REGEX.captures(trimmed) {
        let minutes = capture_u64(&captures[1], TimeParseError::InvalidMinutes)?;
        let seconds = checked_seconds(capture_u64(&captures[2], TimeParseError::InvalidSeconds(0))?)?;
        let mut milliseconds = capture_u64(&captures[3], TimeParseError::InvalidMilliseconds)?;

        // 1 digit = tenths, 2 digits = hundredths
        match captures[3].len() {
            1 => milliseconds *= 100,
            2 => milliseconds *= 10,
            _ => {}
        }
        return total_ms(minutes, seconds, milliseconds);
    }

    if let Some(captures) = TIME_MIN_SEC_REGEX
        .captures(trimmed)
        .or_else(|| TIME_COLON_REGEX.captures(trimmed))
    {
        let minutes = capture_u64(&captures[1], TimeParseError::InvalidMinutes)?;
        let seconds = checked_seconds(capture_u64(&captures[2], TimeParseError::InvalidSeconds(0))?)?;
        return total_ms(minutes, seconds, 0);
    }

    if let Some(captures) = TIME_SEC_REGEX.captures(trimmed) {
        let seconds = capture_u64(&captures[1], TimeParseError::InvalidSeconds(0))?;
        return total_ms(0, seconds, 0);
    }

    Err(TimeParseError::InvalidFormat(
        "Use: 60000, 1:30, 1:30.500, 2m30s or 90s".to_string(),
    ))
}

/// Validate the progress ring cycle typed into the settings panel.
pub fn validate_ring_cycle(input: &str) -> Result<u64, String> {
    let ms = parse_duration_to_ms(input).map_err(|e| format!("Ring cycle: {}", e))?;
    if ms < MIN_RING_CYCLE_MS {
        return Err(format!("Ring cycle must be at least {} ms", MIN_RING_CYCLE_MS));
    }
    Ok(ms)
}

pub fn ring_circumference() -> f64 {
    2.0 * std::f64::consts::PI * RING_RADIUS
}

/// Stroke dash offset for the progress ring: full circumference at the start
/// of a cycle, shrinking to zero as the cycle completes.
pub fn ring_dash_offset(elapsed_ms: u64, cycle_ms: u64, circumference: f64) -> f64 {
    if cycle_ms == 0 {
        return circumference;
    }
    let progress = (elapsed_ms % cycle_ms) as f64 / cycle_ms as f64;
    circumference - progress * circumference
}

/// Keyboard commands, keyed by `KeyboardEvent.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ToggleStartStop,
    Lap,
    Reset,
    OpenSettings,
    ToggleTheme,
}

pub fn shortcut_for_code(code: &str) -> Option<Shortcut> {
    match code {
        "Space" => Some(Shortcut::ToggleStartStop),
        "KeyL" => Some(Shortcut::Lap),
        "KeyR" => Some(Shortcut::Reset),
        "KeyS" => Some(Shortcut::OpenSettings),
        "KeyT" => Some(Shortcut::ToggleTheme),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_supported_layout() {
        assert_eq!(parse_duration_to_ms("60000"), Ok(60_000));
        assert_eq!(parse_duration_to_ms(" 1:30 "), Ok(90_000));
        assert_eq!(parse_duration_to_ms("1:30.5"), Ok(90_500));
        assert_eq!(parse_duration_to_ms("1:30.05"), Ok(90_050));
        assert_eq!(parse_duration_to_ms("1:30.005"), Ok(90_005));
        assert_eq!(parse_duration_to_ms("2m30s"), Ok(150_000));
        assert_eq!(parse_duration_to_ms("2m 30s"), Ok(150_000));
        assert_eq!(parse_duration_to_ms("90s"), Ok(90_000));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_duration_to_ms("   "), Err(TimeParseError::EmptyInput));
        assert_eq!(parse_duration_to_ms("1:75"), Err(TimeParseError::InvalidSeconds(75)));
        assert!(matches!(
            parse_duration_to_ms("soon"),
            Err(TimeParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn oversized_durations_are_rejected() {
        let too_large = TimeParseError::InvalidFormat("Duration too large".to_string());
        assert_eq!(parse_duration_to_ms("307445734561825861:00"), Err(too_large));
        assert!(parse_duration_to_ms("307445734561825861:00.5").is_err());
        assert!(parse_duration_to_ms("307445734561825861m 0s").is_err());
        assert!(validate_ring_cycle("18446744073709552s")
            .unwrap_err()
            .contains("Duration too large"));
        // Largest minute count that still fits
        assert_eq!(
            parse_duration_to_ms("307445734561825:00"),
            Ok(307_445_734_561_825 * 60_000)
        );
    }

    #[test]
    fn ring_cycle_has_a_floor() {
        assert_eq!(validate_ring_cycle("30s"), Ok(30_000));
        assert!(validate_ring_cycle("500").unwrap_err().contains("at least 1000"));
        assert!(validate_ring_cycle("").unwrap_err().starts_with("Ring cycle:"));
    }

    #[test]
    fn ring_offset_wraps_each_cycle() {
        let c = ring_circumference();
        assert!((c - 628.318_530_7).abs() < 1e-6);
        assert_eq!(ring_dash_offset(0, 60_000, c), c);
        assert!((ring_dash_offset(30_000, 60_000, c) - c / 2.0).abs() < 1e-9);
        assert_eq!(ring_dash_offset(60_000, 60_000, c), c);
        assert!((ring_dash_offset(75_000, 60_000, c) - c * 0.75).abs() < 1e-9);
        assert_eq!(ring_dash_offset(10, 0, c), c);
    }

    #[test]
    fn shortcuts_map_key_codes() {
        assert_eq!(shortcut_for_code("Space"), Some(Shortcut::ToggleStartStop));
        assert_eq!(shortcut_for_code("KeyL"), Some(Shortcut::Lap));
        assert_eq!(shortcut_for_code("KeyR"), Some(Shortcut::Reset));
        assert_eq!(shortcut_for_code("KeyS"), Some(Shortcut::OpenSettings));
        assert_eq!(shortcut_for_code("KeyT"), Some(Shortcut::ToggleTheme));
        assert_eq!(shortcut_for_code("KeyX"), None);
    }
}
