//! Stopwatch core: elapsed-time engine, lap statistics and display
//! formatting, plus the browser adapters the Yew front end is built on.

pub mod bindings;
pub mod clock;
pub mod config;
pub mod engine;
pub mod export;
pub mod format;
pub mod laps;
pub mod settings;
pub mod stopwatch;
pub mod storage;
pub mod utils;
pub mod web;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{NoopSampler, Sampler, TimerStatus, TimingEngine};
pub use export::{export_filename, laps_to_csv, ExportError};
pub use format::{format_duration, DisplayFormat, TimeFormat};
pub use laps::{LapEntry, LapExtreme, LapRecorder};
pub use settings::{Settings, Theme};
pub use stopwatch::Stopwatch;
pub use storage::{KeyValueStore, LocalStorage, MemoryStore, PreferenceStore, StorageError};
