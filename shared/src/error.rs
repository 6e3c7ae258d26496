use std::fmt;

use crate::constants::{EMPTY_NAME_ERROR, NAME_TOO_LONG_ERROR, NO_OPTIONS_ERROR};

#[derive(Debug, Clone, PartialEq)]
pub enum WheelError {
    NoOptions,
    AlreadySpinning,
    InvalidName(String),
    IndexOutOfRange { index: usize, len: usize },
    RandomSource(String),
    ClockFault(String),
    Celebration(String),
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelError::NoOptions => write!(f, "{}", NO_OPTIONS_ERROR),
            WheelError::AlreadySpinning => write!(f, "The wheel is already spinning"),
            WheelError::InvalidName(reason) => write!(f, "{}", reason),
            WheelError::IndexOutOfRange { index, len } => {
                write!(f, "Option index {} is out of range for {} options", index, len)
            }
            WheelError::RandomSource(msg) => write!(f, "Random source failed: {}", msg),
            WheelError::ClockFault(msg) => write!(f, "Frame clock failed: {}", msg),
            WheelError::Celebration(msg) => write!(f, "Celebration failed: {}", msg),
        }
    }
}

impl std::error::Error for WheelError {}

impl From<validator::ValidationError> for WheelError {
    fn from(err: validator::ValidationError) -> Self {
        let reason = match err.code.as_ref() {
            "empty_option_name" => EMPTY_NAME_ERROR.to_string(),
            "option_name_too_long" => NAME_TOO_LONG_ERROR.to_string(),
            other => format!("Invalid option name ({})", other),
        };
        WheelError::InvalidName(reason)
    }
}
