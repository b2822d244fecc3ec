//! Yew view components for the stopwatch UI.
//!
//! Everything here renders from props; the stopwatch itself lives in `Main`.

use crate::hooks::use_validated_field;
use std::rc::Rc;
use stopwatch_widget::config::{DEFAULT_RING_CYCLE_MS, NO_LAP_PLACEHOLDER, RING_RADIUS};
use stopwatch_widget::utils::validate_ring_cycle;
use stopwatch_widget::{DisplayFormat, LapEntry, LapExtreme, Settings, TimeFormat};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Renders the lap list, newest lap first, marking fastest and slowest.
pub fn render_laps(
    entries_newest_first: &[LapEntry],
    fastest: Option<LapExtreme>,
    slowest: Option<LapExtreme>,
    format: DisplayFormat,
) -> Html {
    let fastest_idx = fastest.map(|l| l.index);
    let slowest_idx = slowest.map(|l| l.index);

    html! {
        <ul id="lapsList" class="laps-list">
            { entries_newest_first.iter().map(|entry| {
                render_lap_row(entry, fastest_idx, slowest_idx, format)
            }).collect::<Html>() }
        </ul>
    }
}

fn render_lap_row(
    entry: &LapEntry,
    fastest_idx: Option<usize>,
    slowest_idx: Option<usize>,
    format: DisplayFormat,
) -> Html {
    let index = entry.number - 1;
    let class = classes!(
        (fastest_idx == Some(index)).then_some("fastest-lap"),
        (slowest_idx == Some(index)).then_some("slowest-lap"),
    );

    html! {
        <li key={entry.number.to_string()} {class}>
            <span class="lap-number">{ format!("Lap {}", entry.number) }</span>
            <span class="lap-time">
                { format.render(entry.interval_ms) }
                <small>{ format!("(total {})", format.render(entry.cumulative_ms)) }</small>
            </span>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct LapStatsProps {
    pub lap_count: usize,
    pub fastest: Option<String>,
    pub slowest: Option<String>,
}

#[function_component(LapStats)]
pub fn lap_stats(props: &LapStatsProps) -> Html {
    let show = |v: &Option<String>| v.clone().unwrap_or_else(|| NO_LAP_PLACEHOLDER.to_string());
    html! {
        <div class="lap-stats">
            <div class="stat">
                <span class="stat-label">{ "Laps" }</span>
                <span id="lapCount" class="stat-value">{ props.lap_count }</span>
            </div>
            <div class="stat">
                <span class="stat-label">{ "Fastest" }</span>
                <span id="fastestLap" class="stat-value">{ show(&props.fastest) }</span>
            </div>
            <div class="stat">
                <span class="stat-label">{ "Slowest" }</span>
                <span id="slowestLap" class="stat-value">{ show(&props.slowest) }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgressRingProps {
    pub circumference: f64,
    pub offset: f64,
}

#[function_component(ProgressRing)]
pub fn progress_ring(props: &ProgressRingProps) -> Html {
    let size = RING_RADIUS * 2.0 + 20.0;
    let center = (size / 2.0).to_string();
    html! {
        <svg class="progress-ring" width={size.to_string()} height={size.to_string()}>
            <circle
                class="progress-ring-circle"
                r={RING_RADIUS.to_string()}
                cx={center.clone()}
                cy={center}
                fill="transparent"
                stroke-dasharray={props.circumference.to_string()}
                stroke-dashoffset={props.offset.to_string()}
            />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct SettingsPanelProps {
    pub settings: Settings,
    /// Emitted with the edited settings when the panel closes.
    pub on_close: Callback<Settings>,
}

#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    let time_format = use_state(|| props.settings.time_format);
    let show_ms = use_state(|| props.settings.show_ms);
    let sounds = use_state(|| props.settings.sounds);
    let vibrate = use_state(|| props.settings.vibrate);
    let parse_ring_cycle: Rc<dyn Fn(&str) -> Result<u64, String>> = Rc::new(validate_ring_cycle);
    let ring_cycle = use_validated_field(props.settings.ring_cycle(), parse_ring_cycle);

    let close = {
        let on_close = props.on_close.clone();
        let time_format = time_format.clone();
        let show_ms = show_ms.clone();
        let sounds = sounds.clone();
        let vibrate = vibrate.clone();
        let ring_cycle = ring_cycle.clone();
        Callback::from(move |_: ()| {
            on_close.emit(Settings {
                time_format: *time_format,
                show_ms: *show_ms,
                sounds: *sounds,
                vibrate: *vibrate,
                ring_cycle_ms: ring_cycle.resolve(&validate_ring_cycle),
            });
        })
    };

    let on_backdrop_click = {
        let close = close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                close.emit(());
            }
        })
    };

    let on_format_change = {
        let time_format = time_format.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(kind) = select.value().parse::<TimeFormat>() {
                time_format.set(kind);
            }
        })
    };

    let checkbox = |handle: &UseStateHandle<bool>| {
        let handle = handle.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.checked());
        })
    };

    let ring_commit = ring_cycle.on_commit.clone();

    html! {
        <div id="settingsPanel" class="settings-panel" onclick={on_backdrop_click}>
            <div class="panel">
                <div class="panel-header">
                    <h2>{ "Settings" }</h2>
                    <button id="closeSettings" class="icon-btn" onclick={close.reform(|_: MouseEvent| ())}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>

                <div class="form-group">
                    <label for="timeFormat">{ "Time format" }</label>
                    <select id="timeFormat" onchange={on_format_change}>
                        { for TimeFormat::ALL.iter().map(|kind| html! {
                            <option value={kind.code()} selected={*time_format == *kind}>
                                { kind.label() }
                            </option>
                        }) }
                    </select>
                </div>

                <label class="checkbox">
                    <input type="checkbox" id="showMilliseconds"
                        checked={*show_ms} onchange={checkbox(&show_ms)} />
                    { "Show milliseconds" }
                </label>
                <label class="checkbox">
                    <input type="checkbox" id="enableSounds"
                        checked={*sounds} onchange={checkbox(&sounds)} />
                    { "Sounds" }
                </label>
                <label class="checkbox">
                    <input type="checkbox" id="enableVibration"
                        checked={*vibrate} onchange={checkbox(&vibrate)} />
                    { "Vibration" }
                </label>

                <div class="form-group">
                    <label for="ringCycleMs">{ "Ring cycle" }</label>
                    <input
                        type="text"
                        id="ringCycleMs"
                        value={ring_cycle.text.clone()}
                        class={if ring_cycle.error.is_some() { "invalid" } else { "" }}
                        placeholder={DEFAULT_RING_CYCLE_MS.to_string()}
                        oninput={ring_cycle.on_text_input.clone()}
                        onchange={ring_commit.reform(|_: Event| ())}
                    />
                    if let Some(ref err) = ring_cycle.error {
                        <div class="input-error">{ err }</div>
                    }
                </div>
            </div>
        </div>
    }
}
