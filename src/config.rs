//! Application-level configuration constants.

// Sampling
pub const TICK_INTERVAL_MS: u32 = 16;

// Persistence keys
pub const SETTINGS_STORAGE_KEY: &str = "stopwatch_settings";
pub const THEME_STORAGE_KEY: &str = "stopwatch_theme";

// Progress ring
pub const RING_RADIUS: f64 = 100.0;
pub const DEFAULT_RING_CYCLE_MS: u64 = 60_000;
pub const MIN_RING_CYCLE_MS: u64 = 1_000;

// Feedback (vibration pulse lengths)
pub const CONTROL_VIBRATE_MS: u32 = 30;
pub const LAP_VIBRATE_MS: u32 = 80;
pub const PANEL_VIBRATE_MS: u32 = 20;
pub const BUTTON_PRESS_MS: u32 = 180;

// Element ids of the audio clips declared in index.html
pub const CLICK_SOUND_ID: &str = "clickSound";
pub const LAP_SOUND_ID: &str = "lapSound";

// UI text
pub const NO_LAP_PLACEHOLDER: &str = "--:--.---";
pub const NO_LAPS_TO_EXPORT: &str = "No laps to export.";
pub const CLEAR_LAPS_PROMPT: &str = "Clear all lap times?";
