use shared::OptionList;
use yew::prelude::*;

use crate::config::{load_options, save_options};

/// Option list mirrored from local storage. Every change is written back.
#[hook]
pub fn use_wheel_options() -> UseStateHandle<OptionList> {
    let options = use_state(load_options);

    use_effect_with((*options).clone(), |options| {
        save_options(options);
        || ()
    });

    options
}
