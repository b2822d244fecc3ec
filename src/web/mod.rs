//! Browser-side adapters: timers, feedback, downloads and logging.
//!
//! These wrap `web-sys`/`gloo` calls and only do useful work on wasm32.

mod download;
mod feedback;
mod logging;
mod sampler;

pub use download::{download_text, today_iso};
pub use feedback::{apply_theme, confirm, notify, Feedback, FeedbackKind};
pub use logging::init_logging;
pub use sampler::IntervalSampler;
