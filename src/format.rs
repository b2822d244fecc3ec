//! Millisecond durations rendered as display strings.
//!
//! Every unit is extracted by truncation, never rounding: 1999 ms shown as
//! seconds with sub-second precision is `1.999`, not `2.000`.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Field layout of a rendered duration. The persisted codes are the ones the
/// settings panel stores (`ss`, `mmss`, `hhmmss`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TimeFormat {
    #[serde(rename = "ss")]
    Seconds,
    #[default]
    #[serde(rename = "mmss")]
    MinutesSeconds,
    #[serde(rename = "hhmmss")]
    HoursMinutesSeconds,
}

impl TimeFormat {
    pub const ALL: [TimeFormat; 3] = [
        TimeFormat::Seconds,
        TimeFormat::MinutesSeconds,
        TimeFormat::HoursMinutesSeconds,
    ];

    pub fn code(self) -> &'static str {
        match self {
            TimeFormat::Seconds => "ss",
            TimeFormat::MinutesSeconds => "mmss",
            TimeFormat::HoursMinutesSeconds => "hhmmss",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeFormat::Seconds => "Seconds (ss)",
            TimeFormat::MinutesSeconds => "Minutes (mm:ss)",
            TimeFormat::HoursMinutesSeconds => "Hours (hh:mm:ss)",
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TimeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ss" => Ok(TimeFormat::Seconds),
            "mmss" => Ok(TimeFormat::MinutesSeconds),
            "hhmmss" => Ok(TimeFormat::HoursMinutesSeconds),
            other => Err(format!("Unknown time format '{}'", other)),
        }
    }
}

/// Format kind plus the sub-second flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayFormat {
    pub kind: TimeFormat,
    pub show_sub_second: bool,
}

impl DisplayFormat {
    pub fn new(kind: TimeFormat, show_sub_second: bool) -> Self {
        Self {
            kind,
            show_sub_second,
        }
    }

    pub fn render(&self, ms: u64) -> String {
        format_duration(ms, self.kind, self.show_sub_second)
    }
}

pub fn format_duration(ms: u64, kind: TimeFormat, show_sub_second: bool) -> String {
    let millis = ms % 1000;
    let base = match kind {
        TimeFormat::Seconds => (ms / 1000).to_string(),
        TimeFormat::MinutesSeconds => {
            let minutes = ms / 60_000;
            let seconds = (ms % 60_000) / 1000;
            format!("{}:{:02}", minutes, seconds)
        }
        TimeFormat::HoursMinutesSeconds => {
            let hours = ms / 3_600_000;
            let minutes = (ms % 3_600_000) / 60_000;
            let seconds = (ms % 60_000) / 1000;
            format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
        }
    };

    if show_sub_second {
        format!("{}.{:03}", base, millis)
    } else {
        base
    }
}
