//! JavaScript-facing wrapper for hosts that do their own rendering.
//!
//! The wrapper does not schedule anything; callers poll `elapsedMs` from
//! their own animation loop.

use crate::clock::SystemClock;
use crate::engine::NoopSampler;
use crate::export::laps_to_csv;
use crate::format::{format_duration, DisplayFormat, TimeFormat};
use crate::stopwatch::Stopwatch;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmStopwatch {
    inner: Stopwatch<SystemClock, NoopSampler>,
}

#[wasm_bindgen]
impl WasmStopwatch {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmStopwatch {
        WasmStopwatch {
            inner: Stopwatch::new(SystemClock, NoopSampler),
        }
    }

    pub fn start(&mut self) {
        self.inner.start();
    }

    pub fn stop(&mut self) {
        self.inner.stop();
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.inner.is_running()
    }

    #[wasm_bindgen(js_name = elapsedMs)]
    pub fn elapsed_ms(&self) -> f64 {
        self.inner.current_elapsed() as f64
    }

    /// Returns the new lap's interval, or `undefined` while stopped.
    #[wasm_bindgen(js_name = recordLap)]
    pub fn record_lap(&mut self) -> Option<f64> {
        self.inner.record_lap().map(|lap| lap.interval_ms as f64)
    }

    #[wasm_bindgen(js_name = clearLaps)]
    pub fn clear_laps(&mut self) {
        self.inner.clear_laps();
    }

    #[wasm_bindgen(js_name = fastestLapIndex)]
    pub fn fastest_lap_index(&self) -> Option<u32> {
        self.inner.fastest_lap().map(|lap| lap.index as u32)
    }

    #[wasm_bindgen(js_name = slowestLapIndex)]
    pub fn slowest_lap_index(&self) -> Option<u32> {
        self.inner.slowest_lap().map(|lap| lap.index as u32)
    }

    /// Laps as `[{ number, interval_ms, cumulative_ms }, ...]`.
    pub fn laps(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.lap_entries()).map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = lapsCsv)]
    pub fn laps_csv(&self, format: &str, show_sub_second: bool) -> Result<String, JsValue> {
        let kind = parse_format(format)?;
        laps_to_csv(
            &self.inner.lap_entries(),
            DisplayFormat::new(kind, show_sub_second),
        )
        .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = formatElapsed)]
    pub fn format_elapsed(&self, format: &str, show_sub_second: bool) -> Result<String, JsValue> {
        let kind = parse_format(format)?;
        Ok(format_duration(self.inner.current_elapsed(), kind, show_sub_second))
    }
}

impl Default for WasmStopwatch {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_format(code: &str) -> Result<TimeFormat, JsValue> {
    code.parse::<TimeFormat>()
        .map_err(|e| JsValue::from_str(&e))
}

/// Stateless formatter for JavaScript callers.
#[wasm_bindgen(js_name = formatDuration)]
pub fn format_duration_js(ms: f64, format: &str, show_sub_second: bool) -> Result<String, JsValue> {
    let kind = parse_format(format)?;
    Ok(format_duration(ms.max(0.0) as u64, kind, show_sub_second))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only success paths here: building a `JsValue` needs a wasm host.

    #[test]
    fn format_duration_clamps_negative_input() {
        assert_eq!(format_duration_js(-5.0, "ss", true).ok().as_deref(), Some("0.000"));
        assert_eq!(format_duration_js(61_000.0, "mmss", false).ok().as_deref(), Some("1:01"));
    }

    #[test]
    fn fresh_stopwatch_is_idle() {
        let sw = WasmStopwatch::new();
        assert!(!sw.is_running());
        assert_eq!(sw.elapsed_ms(), 0.0);
        assert_eq!(sw.fastest_lap_index(), None);
        assert_eq!(sw.slowest_lap_index(), None);
        assert_eq!(sw.format_elapsed("mmss", true).ok().as_deref(), Some("0:00.000"));
    }

    #[test]
    fn laps_are_recorded_only_while_running() {
        let mut sw = WasmStopwatch::default();
        assert_eq!(sw.record_lap(), None);

        sw.start();
        assert!(sw.is_running());
        assert!(sw.record_lap().is_some());
        assert_eq!(sw.fastest_lap_index(), Some(0));
        assert_eq!(sw.slowest_lap_index(), Some(0));
        assert!(sw.laps_csv("ss", true).ok().is_some_and(|csv| csv.contains("Lap Number")));

        sw.stop();
        let frozen = sw.elapsed_ms();
        assert!(frozen >= 0.0);
        assert_eq!(sw.elapsed_ms(), frozen);

        sw.reset();
        assert_eq!(sw.elapsed_ms(), 0.0);
        assert_eq!(sw.fastest_lap_index(), None);
    }
}
