use shared::constants::MAX_OPTION_NAME_LENGTH;
use shared::OptionList;
use web_sys::{HtmlInputElement, InputEvent, KeyboardEvent};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct OptionsPanelProps {
    pub options: OptionList,
    pub disabled: bool,
    /// Name and raw weight text from the add row.
    pub on_add: Callback<(String, String)>,
    pub on_remove: Callback<usize>,
    pub on_weight: Callback<(usize, String)>,
    pub on_rename: Callback<(usize, String)>,
}

// Share of the total weight, as shown next to each option
pub fn format_percent(probability: f64) -> String {
    let percent = probability * 100.0;
    if percent >= 10.0 || percent == 0.0 {
        format!("{:.0}%", percent)
    } else {
        format!("{:.1}%", percent)
    }
}

#[function_component(OptionsPanel)]
pub fn options_panel(props: &OptionsPanelProps) -> Html {
    let new_name = use_state(String::new);
    let new_weight = use_state(|| "1".to_string());

    let submit = {
        let new_name = new_name.clone();
        let new_weight = new_weight.clone();
        let on_add = props.on_add.clone();
        let disabled = props.disabled;
        Callback::from(move |_: ()| {
            if disabled || new_name.trim().is_empty() {
                return;
            }
            on_add.emit(((*new_name).clone(), (*new_weight).clone()));
            new_name.set(String::new());
            new_weight.set("1".to_string());
        })
    };

    let onclick_add = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };

    let onkeydown_add = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                submit.emit(());
            }
        })
    };

    let oninput_name = {
        let new_name = new_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_name.set(input.value());
        })
    };

    let oninput_weight = {
        let new_weight = new_weight.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_weight.set(input.value());
        })
    };

    let rows = props.options.iter().enumerate().map(|(index, option)| {
        let probability = props.options.probability(index).unwrap_or(0.0);
        let swatch = styles::segment_color(index, props.options.len());

        // The stored value goes back into the field before the edit is sent.
        // An accepted edit re-renders with the new value; a rejected one
        // leaves the last good value showing.
        let onchange_name = {
            let on_rename = props.on_rename.clone();
            let current = option.name.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let raw = input.value();
                input.set_value(&current);
                on_rename.emit((index, raw));
            })
        };
        let onchange_weight = {
            let on_weight = props.on_weight.clone();
            let current = option.weight.to_string();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let raw = input.value();
                input.set_value(&current);
                on_weight.emit((index, raw));
            })
        };
        let onclick_remove = {
            let on_remove = props.on_remove.clone();
            Callback::from(move |_: MouseEvent| on_remove.emit(index))
        };

        html! {
            <li key={format!("{}-{}", index, option.name)} class={styles::OPTION_ROW}>
                <span class={styles::OPTION_SWATCH} style={format!("background-color: {}", swatch)}></span>
                <input
                    type="text"
                    class={styles::INPUT}
                    value={option.name.clone()}
                    maxlength={MAX_OPTION_NAME_LENGTH.to_string()}
                    disabled={props.disabled}
                    onchange={onchange_name}
                />
                <input
                    type="number"
                    min="1"
                    class={styles::INPUT_WEIGHT}
                    value={option.weight.to_string()}
                    disabled={props.disabled}
                    onchange={onchange_weight}
                    title="Weight"
                />
                <span class={classes!(styles::TEXT_SMALL, "w-14", "text-right")}>
                    {format_percent(probability)}
                </span>
                <button
                    class={styles::BUTTON_ICON}
                    disabled={props.disabled}
                    onclick={onclick_remove}
                    title="Delete option"
                >
                    <svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" viewBox="0 0 20 20" fill="currentColor">
                        <path fill-rule="evenodd" d="M9 2a1 1 0 00-.894.553L7.382 4H4a1 1 0 000 2v10a2 2 0 002 2h8a2 2 0 002-2V6a1 1 0 100-2h-3.382l-.724-1.447A1 1 0 0011 2H9zM7 8a1 1 0 012 0v6a1 1 0 11-2 0V8zm5-1a1 1 0 00-1 1v6a1 1 0 102 0V8a1 1 0 00-1-1z" clip-rule="evenodd" />
                    </svg>
                </button>
            </li>
        }
    });

    html! {
        <div class={styles::CARD}>
            <div class="flex items-baseline justify-between mb-4">
                <h3 class={styles::TEXT_H3}>{"Options"}</h3>
                <span class={styles::TEXT_SMALL}>
                    {format!("{} on the wheel", props.options.len())}
                </span>
            </div>

            <div class="flex items-center gap-3 mb-2">
                <input
                    type="text"
                    class={styles::INPUT}
                    placeholder="Add an option"
                    value={(*new_name).clone()}
                    maxlength={MAX_OPTION_NAME_LENGTH.to_string()}
                    disabled={props.disabled}
                    oninput={oninput_name}
                    onkeydown={onkeydown_add.clone()}
                />
                <input
                    type="number"
                    min="1"
                    class={styles::INPUT_WEIGHT}
                    value={(*new_weight).clone()}
                    disabled={props.disabled}
                    oninput={oninput_weight}
                    onkeydown={onkeydown_add}
                    title="Weight"
                />
                <button
                    class={styles::BUTTON_PRIMARY}
                    disabled={props.disabled || new_name.trim().is_empty()}
                    onclick={onclick_add}
                >
                    {"Add"}
                </button>
            </div>
            <p class={styles::TEXT_HINT}>
                {"Higher weights take a bigger share of spins. Press Enter to add."}
            </p>

            if props.options.is_empty() {
                <p class={classes!(styles::TEXT_SMALL, "mt-6", "text-center")}>
                    {"No options yet."}
                </p>
            } else {
                <ul class="mt-4">
                    { for rows }
                </ul>
            }
        </div>
    }
}
