mod spin_driver;
mod wheel_canvas;
mod wheel_utils;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::AnimationFrame;
use shared::validation::parse_weight;
use shared::{OptionList, SpinResult, ThreadRandom, Wheel, WheelConfig, WheelError};
use yew::prelude::*;

use crate::components::{OptionsPanel, SettingsPanel};
use crate::hooks::{use_wheel_options, use_wheel_settings};
use crate::styles;

use spin_driver::{BrowserObserver, SpinDriver};
use wheel_canvas::WheelCanvas;
use wheel_utils::{SpinButton, WinnerToast};

// Runs an option edit against the wheel and mirrors the result into the
// stored list.
fn apply_edit<R>(
    wheel: &Rc<RefCell<Wheel>>,
    options: &UseStateHandle<OptionList>,
    error_message: &UseStateHandle<String>,
    edit: impl FnOnce(&mut OptionList) -> Result<R, WheelError>,
) {
    let result = wheel.borrow_mut().edit_options(edit);
    match result {
        Ok(_) => {
            options.set(wheel.borrow().options().clone());
            error_message.set(String::new());
        }
        Err(e) => {
            log::debug!("Option edit rejected: {}", e);
            error_message.set(e.to_string());
        }
    }
}

#[function_component(WheelPage)]
pub fn wheel_page() -> Html {
    let options = use_wheel_options();
    let settings = use_wheel_settings();

    let wheel = {
        let initial_options = (*options).clone();
        let initial_config = *settings;
        use_mut_ref(move || Wheel::new(initial_options, initial_config))
    };
    let frame = use_mut_ref(|| None::<AnimationFrame>);

    let rotation = use_state(|| 0.0_f64);
    let is_spinning = use_state(|| false);
    let winner = use_state(|| None::<String>);
    let error_message = use_state(String::new);

    // Settings edits only reach the wheel between spins
    {
        let wheel = wheel.clone();
        use_effect_with(*settings, move |config| {
            wheel.borrow_mut().set_config(*config);
            || ()
        });
    }

    // Drop any pending frame when the page goes away
    {
        let frame = frame.clone();
        use_effect_with((), move |_| {
            move || {
                frame.borrow_mut().take();
            }
        });
    }

    let on_spin = {
        let wheel = wheel.clone();
        let frame = frame.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let winner = winner.clone();
        let error_message = error_message.clone();

        Callback::from(move |_: MouseEvent| {
            let ticket = wheel.borrow_mut().request_spin(&mut ThreadRandom);
            if let Err(e) = ticket {
                error_message.set(e.to_string());
                return;
            }

            error_message.set(String::new());
            winner.set(None);
            is_spinning.set(true);

            let on_finished = {
                let is_spinning = is_spinning.clone();
                let error_message = error_message.clone();
                Callback::from(move |result: Result<SpinResult, WheelError>| {
                    is_spinning.set(false);
                    if let Err(e) = result {
                        error_message.set(e.to_string());
                    }
                })
            };
            let on_winner = {
                let winner = winner.clone();
                Callback::from(move |name: String| winner.set(Some(name)))
            };
            let on_rotation = {
                let rotation = rotation.clone();
                Callback::from(move |angle: f64| rotation.set(angle))
            };

            let driver = Rc::new(SpinDriver {
                wheel: wheel.clone(),
                frame: frame.clone(),
                observer: RefCell::new(BrowserObserver { on_winner }),
                on_rotation,
                on_finished,
            });
            driver.start();
        })
    };

    let on_add = {
        let wheel = wheel.clone();
        let options = options.clone();
        let error_message = error_message.clone();
        Callback::from(move |(name, weight): (String, String)| {
            let weight = parse_weight(&weight);
            apply_edit(&wheel, &options, &error_message, |list| {
                list.add_weighted(&name, weight)
            });
        })
    };

    let on_remove = {
        let wheel = wheel.clone();
        let options = options.clone();
        let error_message = error_message.clone();
        Callback::from(move |index: usize| {
            apply_edit(&wheel, &options, &error_message, |list| list.remove(index));
        })
    };

    let on_weight = {
        let wheel = wheel.clone();
        let options = options.clone();
        let error_message = error_message.clone();
        Callback::from(move |(index, raw): (usize, String)| {
            apply_edit(&wheel, &options, &error_message, |list| {
                list.set_weight(index, &raw)
            });
        })
    };

    let on_rename = {
        let wheel = wheel.clone();
        let options = options.clone();
        let error_message = error_message.clone();
        Callback::from(move |(index, name): (usize, String)| {
            apply_edit(&wheel, &options, &error_message, |list| {
                list.rename(index, &name)
            });
        })
    };

    let on_settings = {
        let settings = settings.clone();
        let is_spinning = is_spinning.clone();
        Callback::from(move |config: WheelConfig| {
            if *is_spinning {
                return;
            }
            settings.set(config.sanitized());
        })
    };

    let on_dismiss = {
        let winner = winner.clone();
        Callback::from(move |_: ()| winner.set(None))
    };

    html! {
        <div class={styles::CONTAINER}>
            <WinnerToast winner={(*winner).clone()} on_dismiss={on_dismiss} />
            <div class="max-w-6xl mx-auto pt-8 text-center">
                <h1 class={styles::TEXT_H1}>
                    <span class="bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500">{"Spin the Wheel"}</span>
                </h1>
            </div>
            <div class={styles::PAGE_GRID}>
                <div class={classes!(styles::CARD, "flex", "flex-col", "items-center", "gap-6")}>
                    <div class="w-full max-w-[450px] mx-auto">
                        <WheelCanvas
                            names={options.names()}
                            rotation={*rotation}
                            is_spinning={*is_spinning}
                        />
                    </div>
                    <div class="w-full max-w-[300px]">
                        <SpinButton
                            is_spinning={*is_spinning}
                            has_options={!options.is_empty()}
                            onclick={on_spin}
                        />
                    </div>
                    if !error_message.is_empty() {
                        <div class={classes!(styles::CARD_ERROR, "w-full", "text-center")}>
                            {&*error_message}
                        </div>
                    }
                </div>
                <div class="flex flex-col gap-8">
                    <OptionsPanel
                        options={(*options).clone()}
                        disabled={*is_spinning}
                        on_add={on_add}
                        on_remove={on_remove}
                        on_weight={on_weight}
                        on_rename={on_rename}
                    />
                    <SettingsPanel
                        config={*settings}
                        disabled={*is_spinning}
                        on_change={on_settings}
                    />
                </div>
            </div>
        </div>
    }
}
