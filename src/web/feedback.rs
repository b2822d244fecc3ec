use crate::config::{
    CLICK_SOUND_ID, CONTROL_VIBRATE_MS, LAP_SOUND_ID, LAP_VIBRATE_MS, PANEL_VIBRATE_MS,
};
use crate::settings::{Settings, Theme};
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlAudioElement;

/// What the user just did, which decides the sound and vibration length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    /// Start, stop and reset.
    Control,
    Lap,
    /// Settings panel, theme, export and clear.
    Panel,
}

impl FeedbackKind {
    fn sound_id(self) -> &'static str {
        match self {
            FeedbackKind::Lap => LAP_SOUND_ID,
            FeedbackKind::Control | FeedbackKind::Panel => CLICK_SOUND_ID,
        }
    }

    fn vibrate_ms(self) -> u32 {
        match self {
            FeedbackKind::Control => CONTROL_VIBRATE_MS,
            FeedbackKind::Lap => LAP_VIBRATE_MS,
            FeedbackKind::Panel => PANEL_VIBRATE_MS,
        }
    }
}

/// Audio and vibration toggles taken from the current settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub sounds: bool,
    pub vibrate: bool,
}

impl From<&Settings> for Feedback {
    fn from(s: &Settings) -> Self {
        Self {
            sounds: s.sounds,
            vibrate: s.vibrate,
        }
    }
}

impl Feedback {
    pub fn emit(&self, kind: FeedbackKind) {
        if self.sounds {
            play_sound(kind.sound_id());
        }
        if self.vibrate {
            vibrate(kind.vibrate_ms());
        }
    }
}

fn play_sound(element_id: &str) {
    let Some(audio) = gloo_utils::document()
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok())
    else {
        debug!("no audio element #{}", element_id);
        return;
    };
    audio.set_current_time(0.0);
    // Autoplay policies may reject; feedback is best effort.
    let _ = audio.play();
}

fn vibrate(ms: u32) {
    let _ = gloo_utils::window().navigator().vibrate_with_duration(ms);
}

pub fn apply_theme(theme: Theme) {
    if let Err(e) = gloo_utils::document_element().set_attribute("data-theme", theme.as_str()) {
        warn!("failed to apply theme: {:?}", e);
    }
}

pub fn confirm(message: &str) -> bool {
    gloo_utils::window()
        .confirm_with_message(message)
        .unwrap_or(false)
}

pub fn notify(message: &str) {
    if gloo_utils::window().alert_with_message(message).is_err() {
        warn!("alert failed: {}", message);
    }
}
