//! CSV export of recorded laps.

use crate::format::DisplayFormat;
use crate::laps::LapEntry;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No laps to export.")]
    NoLaps,
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush CSV buffer")]
    Flush,
    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[derive(Serialize)]
struct LapRow {
    #[serde(rename = "Lap Number")]
    number: usize,
    #[serde(rename = "Lap Duration")]
    duration: String,
    #[serde(rename = "Cumulative")]
    cumulative: String,
}

/// Render laps as a CSV table, one row per lap in recording order.
pub fn laps_to_csv(entries: &[LapEntry], format: DisplayFormat) -> Result<String, ExportError> {
    if entries.is_empty() {
        return Err(ExportError::NoLaps);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    for entry in entries {
        writer.serialize(LapRow {
            number: entry.number,
            duration: format.render(entry.interval_ms),
            cumulative: format.render(entry.cumulative_ms),
        })?;
    }
    let bytes = writer.into_inner().map_err(|_| ExportError::Flush)?;
    Ok(String::from_utf8(bytes)?)
}

/// `stopwatch_laps_YYYY-MM-DD.csv` from an ISO-8601 timestamp.
pub fn export_filename(iso_timestamp: &str) -> String {
    let date = iso_timestamp.get(..10).unwrap_or(iso_timestamp);
    format!("stopwatch_laps_{}.csv", date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::TimeFormat;
    use crate::laps::LapRecorder;

    #[test]
    fn no_laps_is_an_error() {
        let err = laps_to_csv(&[], DisplayFormat::default()).unwrap_err();
        assert!(matches!(err, ExportError::NoLaps));
        assert_eq!(err.to_string(), "No laps to export.");
    }

    #[test]
    fn rows_follow_header_in_order() {
        let mut laps = LapRecorder::new();
        laps.record(1_500);
        laps.record(62_250);
        let entries: Vec<_> = laps.entries().collect();

        let csv = laps_to_csv(&entries, DisplayFormat::new(TimeFormat::MinutesSeconds, true)).unwrap();
        assert_eq!(
            csv,
            "Lap Number,Lap Duration,Cumulative\n\
             1,0:01.500,0:01.500\n\
             2,1:00.750,1:02.250\n"
        );
    }

    #[test]
    fn respects_current_format() {
        let mut laps = LapRecorder::new();
        laps.record(3_661_500);
        let entries: Vec<_> = laps.entries().collect();
        let csv = laps_to_csv(&entries, DisplayFormat::new(TimeFormat::HoursMinutesSeconds, false)).unwrap();
        assert!(csv.ends_with("1,01:01:01,01:01:01\n"));
    }

    #[test]
    fn filename_uses_date_part() {
        assert_eq!(
            export_filename("2026-10-19T08:15:30.000Z"),
            "stopwatch_laps_2026-10-19.csv"
        );
        assert_eq!(export_filename("today"), "stopwatch_laps_today.csv");
    }
}
