pub mod animator;
pub mod config;
pub mod constants;
pub mod error;
pub mod selector;
pub mod shared_wheel_game;
pub mod validation;
pub mod wheel_options;

pub use animator::{segment_at, target_rotation, Animator, Trajectory, WheelState};
pub use config::WheelConfig;
pub use error::WheelError;
pub use selector::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use shared_wheel_game::{FrameUpdate, SpinObserver, SpinResult, SpinTicket, Wheel};
pub use wheel_options::{OptionList, WheelOption};
