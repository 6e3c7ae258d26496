pub mod use_wheel_options;
pub mod use_wheel_settings;

pub use use_wheel_options::*;
pub use use_wheel_settings::*;
