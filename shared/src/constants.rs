pub const OPTIONS_STORAGE_KEY: &str = "wheel_options";
pub const SETTINGS_STORAGE_KEY: &str = "wheel_settings";
pub const SPIN_END_EVENT: &str = "wheelSpinEnd";

pub const MAX_OPTION_NAME_LENGTH: usize = 40;
pub const MIN_WEIGHT: u32 = 1;
pub const MAX_WEIGHT: u32 = 1000;

pub const DEFAULT_SPIN_DURATION_MS: f64 = 4000.0;
pub const MIN_SPIN_DURATION_MS: f64 = 500.0;
pub const MAX_SPIN_DURATION_MS: f64 = 20000.0;
pub const DEFAULT_MIN_SPINS: u32 = 5;
pub const DEFAULT_MAX_SPINS: u32 = 8;
pub const MAX_SPINS_LIMIT: u32 = 50;

// Drawing offset that puts wheel-local angle 0 under the top pointer
pub const POINTER_OFFSET_DEG: f64 = -90.0;

pub const EMPTY_NAME_ERROR: &str = "Option name cannot be empty";
pub const NAME_TOO_LONG_ERROR: &str = "Option name cannot exceed 40 characters";
pub const NO_OPTIONS_ERROR: &str = "Add at least one option to spin the wheel";
