use shared::constants::{MAX_SPINS_LIMIT, MAX_SPIN_DURATION_MS, MIN_SPIN_DURATION_MS};
use shared::WheelConfig;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SettingsPanelProps {
    pub config: WheelConfig,
    pub disabled: bool,
    pub on_change: Callback<WheelConfig>,
}

fn seconds_to_ms(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|s| s.is_finite())
        .map(|s| s * 1000.0)
}

fn parse_spins(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    let config = props.config;

    let onchange_duration = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(spin_duration_ms) = seconds_to_ms(&input.value()) {
                on_change.emit(WheelConfig {
                    spin_duration_ms,
                    ..config
                });
            }
        })
    };

    let onchange_min = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(min_spins) = parse_spins(&input.value()) {
                // Dragging the minimum past the maximum carries the maximum along
                let max_spins = config.max_spins.max(min_spins);
                on_change.emit(WheelConfig {
                    min_spins,
                    max_spins,
                    ..config
                });
            }
        })
    };

    let onchange_max = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(max_spins) = parse_spins(&input.value()) {
                on_change.emit(WheelConfig { max_spins, ..config });
            }
        })
    };

    let onclick_reset = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(WheelConfig::default()))
    };

    html! {
        <div class={styles::CARD}>
            <h3 class={classes!(styles::TEXT_H3, "mb-4")}>{"Spin settings"}</h3>
            <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                <div>
                    <label for="spin-duration" class={styles::TEXT_LABEL}>{"Duration (s)"}</label>
                    <input
                        id="spin-duration"
                        type="number"
                        step="0.5"
                        min={(MIN_SPIN_DURATION_MS / 1000.0).to_string()}
                        max={(MAX_SPIN_DURATION_MS / 1000.0).to_string()}
                        class={classes!(styles::INPUT, "mt-1")}
                        value={(config.spin_duration_ms / 1000.0).to_string()}
                        disabled={props.disabled}
                        onchange={onchange_duration}
                    />
                </div>
                <div>
                    <label for="min-spins" class={styles::TEXT_LABEL}>{"Min turns"}</label>
                    <input
                        id="min-spins"
                        type="number"
                        min="1"
                        max={MAX_SPINS_LIMIT.to_string()}
                        class={classes!(styles::INPUT, "mt-1")}
                        value={config.min_spins.to_string()}
                        disabled={props.disabled}
                        onchange={onchange_min}
                    />
                </div>
                <div>
                    <label for="max-spins" class={styles::TEXT_LABEL}>{"Max turns"}</label>
                    <input
                        id="max-spins"
                        type="number"
                        min={config.min_spins.to_string()}
                        max={MAX_SPINS_LIMIT.to_string()}
                        class={classes!(styles::INPUT, "mt-1")}
                        value={config.max_spins.to_string()}
                        disabled={props.disabled}
                        onchange={onchange_max}
                    />
                </div>
            </div>
            <div class="flex items-center justify-between mt-4">
                <p class={styles::TEXT_HINT}>
                    {format!(
                        "Each spin makes {} to {} full turns before landing.",
                        config.min_spins, config.max_spins
                    )}
                </p>
                <button
                    class={classes!(styles::TEXT_SMALL, "underline", "disabled:opacity-50")}
                    disabled={props.disabled}
                    onclick={onclick_reset}
                >
                    {"Reset"}
                </button>
            </div>
        </div>
    }
}
