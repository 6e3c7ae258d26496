use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Spin tuning the user can change from the settings panel.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct WheelConfig {
    pub spin_duration_ms: f64,
    pub min_spins: u32,
    pub max_spins: u32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: DEFAULT_SPIN_DURATION_MS,
            min_spins: DEFAULT_MIN_SPINS,
            max_spins: DEFAULT_MAX_SPINS,
        }
    }
}

impl WheelConfig {
    pub fn sanitized(self) -> Self {
        let spin_duration_ms = if self.spin_duration_ms.is_finite() {
            self.spin_duration_ms
                .clamp(MIN_SPIN_DURATION_MS, MAX_SPIN_DURATION_MS)
        } else {
            DEFAULT_SPIN_DURATION_MS
        };
        let min_spins = self.min_spins.clamp(1, MAX_SPINS_LIMIT);
        let max_spins = self.max_spins.clamp(min_spins, MAX_SPINS_LIMIT);

        Self {
            spin_duration_ms,
            min_spins,
            max_spins,
        }
    }
}
