use serde::{Deserialize, Serialize};

use crate::error::WheelError;

/// Cubic ease-out: fast start, decelerating to a stop at `t = 1`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

pub fn segment_angle(segment_count: usize) -> f64 {
    360.0 / segment_count as f64
}

/// Absolute rotation that centers `winning_index` under the pointer after
/// `spin_count` extra full turns from the current orientation.
///
/// Segment `i` is centered at wheel-local angle `-i * segment_angle`, so a
/// clockwise rotation of `i * segment_angle` (mod 360) brings it to the pointer.
pub fn target_rotation(
    current_rotation: f64,
    spin_count: u32,
    winning_index: usize,
    segment_count: usize,
) -> f64 {
    let base = (current_rotation / 360.0).floor() * 360.0;
    base + 360.0 * spin_count as f64 + segment_angle(segment_count) * winning_index as f64
}

/// Segment sitting under the pointer at `rotation`, derived purely from geometry.
pub fn segment_at(rotation: f64, segment_count: usize) -> usize {
    if segment_count == 0 {
        return 0;
    }
    let normalized = rotation.rem_euclid(360.0);
    let index = (normalized / segment_angle(segment_count)).round() as usize;
    index % segment_count
}

/// Time-to-angle function for one spin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub start: f64,
    pub target: f64,
    pub duration_ms: f64,
}

impl Trajectory {
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    /// Rotation after `elapsed_ms`. Snaps to the target exactly once complete.
    pub fn rotation_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_complete(elapsed_ms) {
            return self.target;
        }
        self.start + (self.target - self.start) * ease_out_cubic(self.progress(elapsed_ms))
    }
}

/// Snapshot of the wheel for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelState {
    pub is_spinning: bool,
    pub current_rotation: f64,
    pub winning_index: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveSpin {
    trajectory: Trajectory,
    winning_index: usize,
    segment_count: usize,
    started_at: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatorStep {
    Idle,
    Rotating(f64),
    Completed {
        final_rotation: f64,
        winning_index: usize,
        derived_index: usize,
    },
}

/// Owns the wheel's rotation and runs at most one trajectory at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Animator {
    rotation: f64,
    active: Option<ActiveSpin>,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Animator {
    pub fn new(rotation: f64) -> Self {
        Self {
            rotation: if rotation.is_finite() { rotation } else { 0.0 },
            active: None,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.active.is_some()
    }

    pub fn trajectory(&self) -> Option<Trajectory> {
        self.active.map(|spin| spin.trajectory)
    }

    pub fn state(&self) -> WheelState {
        WheelState {
            is_spinning: self.is_spinning(),
            current_rotation: self.rotation,
            winning_index: self.active.map(|spin| spin.winning_index),
        }
    }

    /// Begins a spin towards an already chosen winner. Rejected while another
    /// spin is in flight; the running trajectory is left untouched.
    pub fn start(
        &mut self,
        winning_index: usize,
        segment_count: usize,
        spin_count: u32,
        duration_ms: f64,
    ) -> Result<Trajectory, WheelError> {
        if self.active.is_some() {
            return Err(WheelError::AlreadySpinning);
        }
        if segment_count == 0 {
            return Err(WheelError::NoOptions);
        }
        if winning_index >= segment_count {
            return Err(WheelError::IndexOutOfRange {
                index: winning_index,
                len: segment_count,
            });
        }

        let mut target = target_rotation(self.rotation, spin_count, winning_index, segment_count);
        // The wheel only turns forward; with no extra turns the winner can sit behind us
        if target < self.rotation {
            target += 360.0;
        }

        let trajectory = Trajectory {
            start: self.rotation,
            target,
            duration_ms,
        };
        self.active = Some(ActiveSpin {
            trajectory,
            winning_index,
            segment_count,
            started_at: None,
        });
        Ok(trajectory)
    }

    /// Advances to the frame at `now_ms`. The first frame after `start` fixes
    /// the start time. A timestamp that is not finite or runs backwards is a
    /// clock fault: the spin is dropped and the wheel goes idle.
    pub fn advance(&mut self, now_ms: f64) -> Result<AnimatorStep, WheelError> {
        let Some(mut spin) = self.active else {
            return Ok(AnimatorStep::Idle);
        };

        if !now_ms.is_finite() {
            self.abort();
            return Err(WheelError::ClockFault(format!("frame timestamp {}", now_ms)));
        }

        let started_at = *spin.started_at.get_or_insert(now_ms);
        let elapsed = now_ms - started_at;
        if elapsed < 0.0 {
            self.abort();
            return Err(WheelError::ClockFault(format!(
                "frame timestamp {} precedes spin start {}",
                now_ms, started_at
            )));
        }

        if !spin.trajectory.is_complete(elapsed) {
            self.rotation = spin.trajectory.rotation_at(elapsed);
            self.active = Some(spin);
            return Ok(AnimatorStep::Rotating(self.rotation));
        }

        let final_rotation = spin.trajectory.target;
        let derived_index = segment_at(final_rotation, spin.segment_count);
        if derived_index != spin.winning_index {
            log::error!(
                "Wheel stopped on segment {} but the selected winner is {} (rotation {}, {} segments)",
                derived_index,
                spin.winning_index,
                final_rotation,
                spin.segment_count
            );
        }

        self.rotation = final_rotation.rem_euclid(360.0);
        self.active = None;
        Ok(AnimatorStep::Completed {
            final_rotation,
            winning_index: spin.winning_index,
            derived_index,
        })
    }

    /// Drops any in-flight spin and rests at the current angle.
    pub fn abort(&mut self) {
        if self.active.take().is_some() {
            self.rotation = self.rotation.rem_euclid(360.0);
        }
    }
}
