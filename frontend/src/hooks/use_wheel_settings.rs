use shared::WheelConfig;
use yew::prelude::*;

use crate::config::{load_wheel_config, save_wheel_config};

#[hook]
pub fn use_wheel_settings() -> UseStateHandle<WheelConfig> {
    let settings = use_state(load_wheel_config);

    use_effect_with(*settings, |settings| {
        save_wheel_config(settings);
        || ()
    });

    settings
}
