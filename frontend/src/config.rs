use gloo::storage::{LocalStorage, Storage};
use shared::constants::{OPTIONS_STORAGE_KEY, SETTINGS_STORAGE_KEY};
use shared::{OptionList, WheelConfig, WheelOption};

pub fn default_options() -> OptionList {
    OptionList::from_options(vec![
        WheelOption::new("Pizza", 1),
        WheelOption::new("Tacos", 1),
        WheelOption::new("Sushi", 1),
        WheelOption::new("Burgers", 1),
    ])
}

pub fn load_wheel_config() -> WheelConfig {
    match LocalStorage::get::<WheelConfig>(SETTINGS_STORAGE_KEY) {
        Ok(config) => config.sanitized(),
        Err(e) => {
            log::debug!("Using default wheel settings: {}", e);
            WheelConfig::default()
        }
    }
}

pub fn save_wheel_config(config: &WheelConfig) {
    if let Err(e) = LocalStorage::set(SETTINGS_STORAGE_KEY, config) {
        log::warn!("Failed to save wheel settings: {}", e);
    }
}

pub fn load_options() -> OptionList {
    match LocalStorage::get::<OptionList>(OPTIONS_STORAGE_KEY) {
        Ok(options) => options.sanitized(),
        Err(e) => {
            log::debug!("Using default wheel options: {}", e);
            default_options()
        }
    }
}

pub fn save_options(options: &OptionList) {
    if let Err(e) = LocalStorage::set(OPTIONS_STORAGE_KEY, options) {
        log::warn!("Failed to save wheel options: {}", e);
    }
}
