//! User preferences and theme.

use crate::config::{DEFAULT_RING_CYCLE_MS, MIN_RING_CYCLE_MS};
use crate::format::{DisplayFormat, TimeFormat};
use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub time_format: TimeFormat,
    pub show_ms: bool,
    pub sounds: bool,
    pub vibrate: bool,
    pub ring_cycle_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_format: TimeFormat::MinutesSeconds,
            show_ms: true,
            sounds: true,
            vibrate: true,
            ring_cycle_ms: DEFAULT_RING_CYCLE_MS,
        }
    }
}

impl Settings {
    /// Parse a stored document field by field. Anything missing or of the
    /// wrong type keeps its default, so one bad key never discards the rest.
    pub fn from_json_str(raw: &str) -> Self {
        let mut settings = Settings::default();
        let doc: Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(e) => {
                debug!("ignoring unreadable settings: {}", e);
                return settings;
            }
        };

        if let Some(kind) = doc
            .get("timeFormat")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
        {
            settings.time_format = kind;
        }
        if let Some(v) = doc.get("showMs").and_then(Value::as_bool) {
            settings.show_ms = v;
        }
        if let Some(v) = doc.get("sounds").and_then(Value::as_bool) {
            settings.sounds = v;
        }
        if let Some(v) = doc.get("vibrate").and_then(Value::as_bool) {
            settings.vibrate = v;
        }
        if let Some(v) = doc.get("ringCycleMs").and_then(Value::as_f64) {
            if v.is_finite() && v >= 0.0 {
                settings.ring_cycle_ms = v as u64;
            }
        }
        settings
    }

    /// Copy with values normalised for storage.
    pub fn sanitized(&self) -> Self {
        Self {
            ring_cycle_ms: effective_ring_cycle_ms(self.ring_cycle_ms),
            ..self.clone()
        }
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.sanitized())
    }

    pub fn display_format(&self) -> DisplayFormat {
        DisplayFormat::new(self.time_format, self.show_ms)
    }

    pub fn ring_cycle(&self) -> u64 {
        effective_ring_cycle_ms(self.ring_cycle_ms)
    }
}

/// Zero means "unset" and falls back to the default; anything else is held
/// to the minimum cycle.
pub fn effective_ring_cycle_ms(raw: u64) -> u64 {
    if raw == 0 {
        DEFAULT_RING_CYCLE_MS
    } else {
        raw.max(MIN_RING_CYCLE_MS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Icon shown on the toggle: the theme you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_document_loads() {
        let raw = r#"{"timeFormat":"hhmmss","showMs":false,"sounds":false,"vibrate":true,"ringCycleMs":30000}"#;
        let s = Settings::from_json_str(raw);
        assert_eq!(
            s,
            Settings {
                time_format: TimeFormat::HoursMinutesSeconds,
                show_ms: false,
                sounds: false,
                vibrate: true,
                ring_cycle_ms: 30_000,
            }
        );
    }

    #[test]
    fn bad_fields_keep_defaults() {
        let raw = r#"{"timeFormat":"weeks","showMs":"yes","sounds":0,"ringCycleMs":"fast","vibrate":false}"#;
        let s = Settings::from_json_str(raw);
        let defaults = Settings::default();
        assert_eq!(s.time_format, defaults.time_format);
        assert_eq!(s.show_ms, defaults.show_ms);
        assert_eq!(s.sounds, defaults.sounds);
        assert_eq!(s.ring_cycle_ms, defaults.ring_cycle_ms);
        assert!(!s.vibrate);
    }

    #[test]
    fn garbage_yields_defaults() {
        assert_eq!(Settings::from_json_str("not json"), Settings::default());
        assert_eq!(Settings::from_json_str("{}"), Settings::default());
        assert_eq!(Settings::from_json_str("[1,2]"), Settings::default());
    }

    #[test]
    fn saving_clamps_ring_cycle() {
        let mut s = Settings::default();
        s.ring_cycle_ms = 250;
        let saved = Settings::from_json_str(&s.to_json_string().unwrap());
        assert_eq!(saved.ring_cycle_ms, 1_000);

        s.ring_cycle_ms = 0;
        assert_eq!(s.sanitized().ring_cycle_ms, DEFAULT_RING_CYCLE_MS);
        assert_eq!(s.ring_cycle(), DEFAULT_RING_CYCLE_MS);
    }

    #[test]
    fn saved_document_uses_camel_case_codes() {
        let json = Settings::default().to_json_string().unwrap();
        assert!(json.contains(r#""timeFormat":"mmss""#));
        assert!(json.contains(r#""ringCycleMs":60000"#));
        assert!(json.contains(r#""showMs":true"#));
    }

    #[test]
    fn theme_round_trips_and_toggles() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("purple".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().as_str(), "light");
        assert_eq!(Theme::Light.toggle_icon(), "fas fa-moon");
    }
}
