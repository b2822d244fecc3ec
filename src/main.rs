//! Stopwatch widget front end using Yew.
//! Wires the stopwatch session, persisted preferences and browser feedback
//! into the display, lap list and settings panel.

use gloo_timers::callback::Timeout;
use log::{info, warn, Level};
use stopwatch_widget::config::*;
use stopwatch_widget::utils::{ring_circumference, ring_dash_offset, shortcut_for_code, Shortcut};
use stopwatch_widget::web::{
    apply_theme, confirm, download_text, init_logging, notify, today_iso, Feedback, FeedbackKind,
};
use stopwatch_widget::{
    export_filename, laps_to_csv, ExportError, LapEntry, LocalStorage, PreferenceStore, Settings,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

mod components;
mod hooks;

use components::{render_laps, LapStats, ProgressRing, SettingsPanel};
use hooks::use_stopwatch;

/// Buttons that get the short press animation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Control {
    StartStop,
    Lap,
    Reset,
}

fn preferences() -> PreferenceStore<LocalStorage> {
    PreferenceStore::new(LocalStorage)
}

/// Mark `control` as pressed and clear it after the animation, replacing any
/// pending clear.
fn flash(
    pressed: &UseStateHandle<Option<Control>>,
    timer_handle: &UseStateHandle<Option<Timeout>>,
    control: Control,
) {
    timer_handle.set(None);
    pressed.set(Some(control));

    let pressed = pressed.clone();
    let timer_handle_clone = timer_handle.clone();
    let handle = Timeout::new(BUTTON_PRESS_MS, move || {
        pressed.set(None);
        timer_handle_clone.set(None);
    });
    timer_handle.set(Some(handle));
}

fn export_laps(entries: &[LapEntry], settings: &Settings) {
    match laps_to_csv(entries, settings.display_format()) {
        Ok(csv) => {
            let filename = export_filename(&today_iso());
            if let Err(e) = download_text(&filename, &csv, "text/csv;charset=utf-8;") {
                warn!("lap export failed: {}", e);
            } else {
                info!("exported {} laps to {}", entries.len(), filename);
            }
        }
        Err(ExportError::NoLaps) => notify(NO_LAPS_TO_EXPORT),
        Err(e) => warn!("lap export failed: {}", e),
    }
}

/// Primary component: owns the stopwatch and the persisted preferences.
#[function_component(Main)]
fn main_component() -> Html {
    let stopwatch = use_stopwatch();
    let settings = use_state(|| preferences().load_settings());
    let theme = use_state(|| preferences().load_theme());
    let settings_open = use_state(|| false);
    let pressed = use_state(|| None::<Control>);
    let press_timer = use_state(|| None::<Timeout>);

    // Theme follows state, including the one loaded at start-up
    use_effect_with(*theme, |theme| {
        apply_theme(*theme);
        || ()
    });

    let feedback = Feedback::from(&*settings);

    let on_start_stop = {
        let stopwatch = stopwatch.clone();
        let pressed = pressed.clone();
        let press_timer = press_timer.clone();
        Callback::from(move |_: ()| {
            feedback.emit(FeedbackKind::Control);
            stopwatch.update(|sw| sw.toggle());
            flash(&pressed, &press_timer, Control::StartStop);
        })
    };

    let on_lap = {
        let stopwatch = stopwatch.clone();
        let pressed = pressed.clone();
        let press_timer = press_timer.clone();
        Callback::from(move |_: ()| {
            if !stopwatch.read(|sw| sw.is_running()) {
                return;
            }
            feedback.emit(FeedbackKind::Lap);
            stopwatch.update(|sw| sw.record_lap());
            flash(&pressed, &press_timer, Control::Lap);
        })
    };

    let on_reset = {
        let stopwatch = stopwatch.clone();
        let pressed = pressed.clone();
        let press_timer = press_timer.clone();
        Callback::from(move |_: ()| {
            feedback.emit(FeedbackKind::Control);
            stopwatch.update(|sw| sw.reset());
            flash(&pressed, &press_timer, Control::Reset);
        })
    };

    let on_open_settings = {
        let settings_open = settings_open.clone();
        Callback::from(move |_: ()| {
            feedback.emit(FeedbackKind::Panel);
            settings_open.set(true);
        })
    };

    let on_close_settings = {
        let settings = settings.clone();
        let settings_open = settings_open.clone();
        Callback::from(move |edited: Settings| {
            Feedback::from(&edited).emit(FeedbackKind::Panel);
            let edited = edited.sanitized();
            if let Err(e) = preferences().save_settings(&edited) {
                warn!("failed to save settings: {}", e);
            }
            settings.set(edited);
            settings_open.set(false);
        })
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = theme.toggle();
            if let Err(e) = preferences().save_theme(next) {
                warn!("failed to save theme: {}", e);
            }
            theme.set(next);
            feedback.emit(FeedbackKind::Panel);
        })
    };

    let on_export = {
        let stopwatch = stopwatch.clone();
        let settings = settings.clone();
        Callback::from(move |_: ()| {
            feedback.emit(FeedbackKind::Panel);
            let entries = stopwatch.read(|sw| sw.lap_entries());
            export_laps(&entries, &settings);
        })
    };

    let on_clear_laps = {
        let stopwatch = stopwatch.clone();
        Callback::from(move |_: ()| {
            feedback.emit(FeedbackKind::Panel);
            if stopwatch.read(|sw| sw.laps().is_empty()) {
                return;
            }
            if !confirm(CLEAR_LAPS_PROMPT) {
                return;
            }
            stopwatch.update(|sw| sw.clear_laps());
        })
    };

    // The document listener is registered once, so it reads the latest
    // shortcut handler from here on every key press.
    let on_shortcut = {
        let on_start_stop = on_start_stop.clone();
        let on_lap = on_lap.clone();
        let on_reset = on_reset.clone();
        let on_open_settings = on_open_settings.clone();
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |shortcut: Shortcut| match shortcut {
            Shortcut::ToggleStartStop => on_start_stop.emit(()),
            Shortcut::Lap => on_lap.emit(()),
            Shortcut::Reset => on_reset.emit(()),
            Shortcut::OpenSettings => on_open_settings.emit(()),
            Shortcut::ToggleTheme => on_toggle_theme.emit(()),
        })
    };
    let latest_shortcut = use_mut_ref(|| Callback::from(|_: Shortcut| ()));
    *latest_shortcut.borrow_mut() = on_shortcut;

    {
        let latest_shortcut = latest_shortcut.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                let typing = e
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                    .is_some();
                if typing {
                    return;
                }
                if let Some(shortcut) = shortcut_for_code(&e.code()) {
                    if shortcut == Shortcut::ToggleStartStop {
                        e.prevent_default();
                    }
                    let handler = latest_shortcut.borrow().clone();
                    handler.emit(shortcut);
                }
            });

            let document = gloo_utils::document();
            if document
                .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
                .is_err()
            {
                warn!("keyboard shortcuts unavailable");
            }

            move || {
                let _ = document
                    .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
            }
        });
    }

    // Snapshot for this render
    let format = settings.display_format();
    let (elapsed, running, lap_count, newest_first, fastest, slowest) = stopwatch.read(|sw| {
        (
            sw.current_elapsed(),
            sw.is_running(),
            sw.laps().len(),
            sw.laps().entries_newest_first().collect::<Vec<_>>(),
            sw.fastest_lap(),
            sw.slowest_lap(),
        )
    });
    let circumference = ring_circumference();
    let ring_offset = ring_dash_offset(elapsed, settings.ring_cycle(), circumference);
    let reset_disabled = running || (elapsed == 0 && lap_count == 0);

    let press_class = |control: Control| (*pressed == Some(control)).then_some("button-press");

    html! {
        <div class="stopwatch">
            <header class="toolbar">
                <h1>{ "Stopwatch" }</h1>
                <div class="toolbar-actions">
                    <button id="themeToggle" class="icon-btn" title="Toggle theme (T)"
                        onclick={on_toggle_theme.reform(|_: MouseEvent| ())}>
                        <i class={theme.toggle_icon()}></i>
                    </button>
                    <button id="settingsBtn" class="icon-btn" title="Settings (S)"
                        onclick={on_open_settings.reform(|_: MouseEvent| ())}>
                        <i class="fas fa-cog"></i>
                    </button>
                </div>
            </header>

            <div class="timer">
                <ProgressRing {circumference} offset={ring_offset} />
                <div id="display" class="display">{ format.render(elapsed) }</div>
            </div>

            <div class="controls">
                <button id="reset"
                    class={classes!("control", "reset", press_class(Control::Reset))}
                    disabled={reset_disabled}
                    onclick={on_reset.reform(|_: MouseEvent| ())}>
                    <i class="fas fa-redo"></i>
                </button>
                <button id="startStop"
                    class={classes!("control", "start-stop", running.then_some("running"), press_class(Control::StartStop))}
                    onclick={on_start_stop.reform(|_: MouseEvent| ())}>
                    <i class={if running { "fas fa-pause" } else { "fas fa-play" }}></i>
                </button>
                <button id="lap"
                    class={classes!("control", "lap", press_class(Control::Lap))}
                    disabled={!running}
                    onclick={on_lap.reform(|_: MouseEvent| ())}>
                    <i class="fas fa-flag"></i>
                </button>
            </div>

            <LapStats
                {lap_count}
                fastest={fastest.map(|l| format.render(l.interval_ms))}
                slowest={slowest.map(|l| format.render(l.interval_ms))}
            />

            { render_laps(&newest_first, fastest, slowest, format) }

            <div class="lap-actions">
                <button id="exportLaps" class="btn-secondary"
                    onclick={on_export.reform(|_: MouseEvent| ())}>
                    <i class="fas fa-download"></i>{ " Export CSV" }
                </button>
                <button id="clearLaps" class="btn-secondary"
                    onclick={on_clear_laps.reform(|_: MouseEvent| ())}>
                    <i class="fas fa-trash"></i>{ " Clear laps" }
                </button>
            </div>

            if *settings_open {
                <SettingsPanel settings={(*settings).clone()} on_close={on_close_settings} />
            }
        </div>
    }
}

/// Entry point: logging, panic hook, then the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    init_logging(Level::Info);
    info!("stopwatch widget starting");
    yew::Renderer::<Main>::new().render();
}
