use serde::{Deserialize, Serialize};

use crate::animator::{Animator, AnimatorStep, Trajectory, WheelState};
use crate::config::WheelConfig;
use crate::error::WheelError;
use crate::selector::{draw_spin_count, select_weighted, RandomSource};
use crate::wheel_options::OptionList;

/// Receives the outcome of a finished spin.
pub trait SpinObserver {
    /// Called exactly once per completed spin with the committed winner.
    fn on_spin_end(&mut self, winner: &str);

    /// Fire-and-forget feedback after the winner is reported. Failures are
    /// logged and never affect the result.
    fn celebrate(&mut self, winner: &str) -> Result<(), WheelError>;
}

/// What was decided when a spin started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinTicket {
    pub winning_index: usize,
    pub winner: String,
    pub spin_count: u32,
    pub trajectory: Trajectory,
}

/// Outcome of a completed spin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinResult {
    pub winning_index: usize,
    pub winner: String,
    pub final_rotation: f64,
    pub derived_index: usize,
}

impl SpinResult {
    pub fn is_consistent(&self) -> bool {
        self.winning_index == self.derived_index
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameUpdate {
    Idle,
    Rotating(f64),
    Finished(SpinResult),
    Aborted(WheelError),
}

#[derive(Debug, Clone, PartialEq)]
struct PendingWinner {
    index: usize,
    name: String,
}

/// The wheel: its options, its tuning and the single animator that owns the
/// rotation. Outcomes are drawn before any animation starts.
#[derive(Debug, Clone)]
pub struct Wheel {
    options: OptionList,
    config: WheelConfig,
    animator: Animator,
    pending: Option<PendingWinner>,
    last_result: Option<SpinResult>,
}

impl Wheel {
    pub fn new(options: OptionList, config: WheelConfig) -> Self {
        Self {
            options,
            config: config.sanitized(),
            animator: Animator::default(),
            pending: None,
            last_result: None,
        }
    }

    pub fn options(&self) -> &OptionList {
        &self.options
    }

    pub fn config(&self) -> WheelConfig {
        self.config
    }

    /// Takes effect from the next spin.
    pub fn set_config(&mut self, config: WheelConfig) {
        self.config = config.sanitized();
    }

    pub fn state(&self) -> WheelState {
        self.animator.state()
    }

    pub fn rotation(&self) -> f64 {
        self.animator.rotation()
    }

    pub fn is_spinning(&self) -> bool {
        self.animator.is_spinning()
    }

    pub fn last_result(&self) -> Option<&SpinResult> {
        self.last_result.as_ref()
    }

    /// Applies an edit to the option list. Segment geometry is frozen while
    /// a spin is in flight, so edits are rejected until it ends.
    pub fn edit_options<R>(
        &mut self,
        edit: impl FnOnce(&mut OptionList) -> Result<R, WheelError>,
    ) -> Result<R, WheelError> {
        if self.is_spinning() {
            return Err(WheelError::AlreadySpinning);
        }
        edit(&mut self.options)
    }

    pub fn replace_options(&mut self, options: OptionList) -> Result<(), WheelError> {
        self.edit_options(|list| {
            *list = options;
            Ok(())
        })
    }

    /// Draws the winner, then the spin count, then starts the animation.
    /// Nothing changes if any step fails.
    pub fn request_spin(
        &mut self,
        source: &mut dyn RandomSource,
    ) -> Result<SpinTicket, WheelError> {
        if self.is_spinning() {
            log::warn!("Ignoring spin request while the wheel is already spinning");
            return Err(WheelError::AlreadySpinning);
        }
        if self.options.is_empty() {
            log::warn!("Ignoring spin request with no options");
            return Err(WheelError::NoOptions);
        }

        let winning_index = select_weighted(&self.options.weights(), source)?;
        let spin_count = draw_spin_count(self.config.min_spins, self.config.max_spins, source)?;
        let trajectory = self.animator.start(
            winning_index,
            self.options.len(),
            spin_count,
            self.config.spin_duration_ms,
        )?;

        let winner = self
            .options
            .get(winning_index)
            .map(|o| o.name.clone())
            .unwrap_or_default();
        self.pending = Some(PendingWinner {
            index: winning_index,
            name: winner.clone(),
        });

        log::debug!(
            "Spin started: winner {} ({:?}), {} turns, target {:.2}",
            winning_index,
            winner,
            spin_count,
            trajectory.target
        );

        Ok(SpinTicket {
            winning_index,
            winner,
            spin_count,
            trajectory,
        })
    }

    /// Advances the animation to `now_ms`. On completion the observer hears
    /// about the winner exactly once, then the celebration fires.
    pub fn on_frame(&mut self, now_ms: f64, observer: &mut dyn SpinObserver) -> FrameUpdate {
        match self.animator.advance(now_ms) {
            Ok(AnimatorStep::Idle) => FrameUpdate::Idle,
            Ok(AnimatorStep::Rotating(angle)) => FrameUpdate::Rotating(angle),
            Ok(AnimatorStep::Completed {
                final_rotation,
                winning_index,
                derived_index,
            }) => {
                let Some(pending) = self.pending.take() else {
                    log::error!("Spin completed without a committed winner");
                    return FrameUpdate::Idle;
                };
                debug_assert_eq!(pending.index, winning_index);

                let result = SpinResult {
                    winning_index: pending.index,
                    winner: pending.name,
                    final_rotation,
                    derived_index,
                };

                log::info!("Winner: {}", result.winner);
                observer.on_spin_end(&result.winner);
                if let Err(e) = observer.celebrate(&result.winner) {
                    log::warn!("{}", e);
                }

                self.last_result = Some(result.clone());
                FrameUpdate::Finished(result)
            }
            Err(e) => {
                self.pending = None;
                log::warn!("Spin abandoned: {}", e);
                FrameUpdate::Aborted(e)
            }
        }
    }

    /// Abandons an in-flight spin without a winner, for host-side failures
    /// such as a missing frame scheduler. Returns whether a spin was dropped.
    pub fn abort(&mut self, reason: WheelError) -> bool {
        if !self.is_spinning() {
            return false;
        }
        log::warn!("Spin abandoned: {}", reason);
        self.animator.abort();
        self.pending = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::{ScriptedRandom, SeededRandom};
    use crate::wheel_options::WheelOption;

    #[derive(Debug, Clone, PartialEq)]
    enum Observed {
        SpinEnd(String),
        Celebrate(String),
    }

    #[derive(Default)]
    struct RecordingObserver {
        events: Vec<Observed>,
        fail_celebration: bool,
    }

    impl RecordingObserver {
        fn winners(&self) -> Vec<String> {
            self.events
                .iter()
                .filter_map(|event| match event {
                    Observed::SpinEnd(name) => Some(name.clone()),
                    Observed::Celebrate(_) => None,
                })
                .collect()
        }

        fn celebrations(&self) -> Vec<String> {
            self.events
                .iter()
                .filter_map(|event| match event {
                    Observed::Celebrate(name) => Some(name.clone()),
                    Observed::SpinEnd(_) => None,
                })
                .collect()
        }
    }

    impl SpinObserver for RecordingObserver {
        fn on_spin_end(&mut self, winner: &str) {
            self.events.push(Observed::SpinEnd(winner.to_string()));
        }

        fn celebrate(&mut self, winner: &str) -> Result<(), WheelError> {
            self.events.push(Observed::Celebrate(winner.to_string()));
            if self.fail_celebration {
                return Err(WheelError::Celebration("no confetti".to_string()));
            }
            Ok(())
        }
    }

    fn abc_wheel(min_spins: u32, max_spins: u32) -> Wheel {
        let options = OptionList::from_options(vec![
            WheelOption::new("A", 1),
            WheelOption::new("B", 1),
            WheelOption::new("C", 2),
        ]);
        Wheel::new(
            options,
            WheelConfig {
                spin_duration_ms: 1000.0,
                min_spins,
                max_spins,
            },
        )
    }

    fn run_to_end(wheel: &mut Wheel, observer: &mut RecordingObserver) -> FrameUpdate {
        let mut now = 0.0;
        loop {
            match wheel.on_frame(now, observer) {
                FrameUpdate::Rotating(_) => now += 16.0,
                other => return other,
            }
        }
    }

    #[test]
    fn test_weighted_spin_scenario() {
        let mut wheel = abc_wheel(6, 6);
        let mut source = ScriptedRandom::new([0.375, 0.5]);
        let ticket = wheel.request_spin(&mut source).unwrap();
        assert_eq!(ticket.winning_index, 1);
        assert_eq!(ticket.winner, "B");
        assert_eq!(ticket.spin_count, 6);
        assert_eq!(ticket.trajectory.target, 2280.0);

        let mut observer = RecordingObserver::default();
        match run_to_end(&mut wheel, &mut observer) {
            FrameUpdate::Finished(result) => {
                assert_eq!(result.winner, "B");
                assert_eq!(result.final_rotation, 2280.0);
                assert!(result.is_consistent());
            }
            other => panic!("unexpected frame update {:?}", other),
        }
        // Winner first, then the celebration, each exactly once
        assert_eq!(
            observer.events,
            vec![
                Observed::SpinEnd("B".to_string()),
                Observed::Celebrate("B".to_string()),
            ]
        );
        assert!(!wheel.is_spinning());
        assert_eq!(wheel.last_result().unwrap().winner, "B");
    }

    #[test]
    fn test_winner_reported_exactly_once() {
        let mut wheel = abc_wheel(5, 8);
        let mut source = SeededRandom::new(3);
        wheel.request_spin(&mut source).unwrap();

        let mut observer = RecordingObserver::default();
        run_to_end(&mut wheel, &mut observer);
        for frame in 0..10 {
            assert_eq!(
                wheel.on_frame(5000.0 + frame as f64 * 16.0, &mut observer),
                FrameUpdate::Idle
            );
        }
        assert_eq!(observer.winners().len(), 1);
        assert_eq!(observer.celebrations().len(), 1);
    }

    #[test]
    fn test_spin_while_spinning_is_rejected() {
        let mut wheel = abc_wheel(5, 5);
        let mut source = ScriptedRandom::new([0.1, 0.0, 0.9, 0.9]);
        let ticket = wheel.request_spin(&mut source).unwrap();
        assert_eq!(ticket.winner, "A");

        let mut observer = RecordingObserver::default();
        wheel.on_frame(0.0, &mut observer);
        wheel.on_frame(200.0, &mut observer);
        let before = wheel.state();

        assert_eq!(
            wheel.request_spin(&mut source),
            Err(WheelError::AlreadySpinning)
        );
        // No draws consumed and nothing in flight changed
        assert_eq!(source.remaining(), 2);
        assert_eq!(wheel.state(), before);

        match run_to_end(&mut wheel, &mut observer) {
            FrameUpdate::Finished(result) => assert_eq!(result.winner, "A"),
            other => panic!("unexpected frame update {:?}", other),
        }
    }

    #[test]
    fn test_empty_wheel_does_not_draw() {
        let mut wheel = Wheel::new(OptionList::new(), WheelConfig::default());
        let mut source = ScriptedRandom::new([0.5, 0.5]);
        assert_eq!(wheel.request_spin(&mut source), Err(WheelError::NoOptions));
        assert_eq!(source.remaining(), 2);
        assert!(!wheel.is_spinning());
    }

    #[test]
    fn test_random_failure_leaves_wheel_idle() {
        let mut wheel = abc_wheel(5, 8);
        // Winner draw succeeds, spin-count draw fails
        let mut source = ScriptedRandom::new([0.2]);
        assert!(matches!(
            wheel.request_spin(&mut source),
            Err(WheelError::RandomSource(_))
        ));
        assert!(!wheel.is_spinning());
        assert_eq!(wheel.state().winning_index, None);
    }

    #[test]
    fn test_celebration_failure_keeps_result() {
        let mut wheel = abc_wheel(5, 5);
        let mut source = ScriptedRandom::new([0.9, 0.0]);
        wheel.request_spin(&mut source).unwrap();

        let mut observer = RecordingObserver {
            fail_celebration: true,
            ..Default::default()
        };
        match run_to_end(&mut wheel, &mut observer) {
            FrameUpdate::Finished(result) => assert_eq!(result.winner, "C"),
            other => panic!("unexpected frame update {:?}", other),
        }
        assert_eq!(observer.winners(), vec!["C".to_string()]);
        assert_eq!(wheel.last_result().unwrap().winner, "C");
    }

    #[test]
    fn test_clock_fault_aborts_without_winner() {
        let mut wheel = abc_wheel(5, 5);
        let mut source = ScriptedRandom::new([0.5, 0.0]);
        wheel.request_spin(&mut source).unwrap();

        let mut observer = RecordingObserver::default();
        wheel.on_frame(100.0, &mut observer);
        assert!(matches!(
            wheel.on_frame(f64::INFINITY, &mut observer),
            FrameUpdate::Aborted(WheelError::ClockFault(_))
        ));
        assert!(!wheel.is_spinning());
        assert!(observer.winners().is_empty());
        assert!(wheel.last_result().is_none());

        // A fresh spin works afterwards
        let mut source = ScriptedRandom::new([0.5, 0.0]);
        assert!(wheel.request_spin(&mut source).is_ok());
    }

    #[test]
    fn test_host_abort() {
        let mut wheel = abc_wheel(5, 5);
        assert!(!wheel.abort(WheelError::ClockFault("no window".to_string())));
        let mut source = ScriptedRandom::new([0.5, 0.0]);
        wheel.request_spin(&mut source).unwrap();
        assert!(wheel.abort(WheelError::ClockFault("no window".to_string())));
        let mut observer = RecordingObserver::default();
        assert_eq!(wheel.on_frame(0.0, &mut observer), FrameUpdate::Idle);
        assert!(observer.winners().is_empty());
    }

    #[test]
    fn test_options_frozen_while_spinning() {
        let mut wheel = abc_wheel(5, 5);
        let mut source = ScriptedRandom::new([0.5, 0.0]);
        wheel.request_spin(&mut source).unwrap();
        assert_eq!(
            wheel.edit_options(|list| list.add("D")),
            Err(WheelError::AlreadySpinning)
        );
        assert_eq!(wheel.options().len(), 3);

        let mut observer = RecordingObserver::default();
        run_to_end(&mut wheel, &mut observer);
        assert_eq!(wheel.edit_options(|list| list.add("D")), Ok(3));
    }

    #[test]
    fn test_single_option_always_wins() {
        let options = OptionList::from_options(vec![WheelOption::new("Solo", 5)]);
        let mut wheel = Wheel::new(options, WheelConfig::default());
        let mut source = SeededRandom::new(11);
        let mut observer = RecordingObserver::default();
        for _ in 0..5 {
            let ticket = wheel.request_spin(&mut source).unwrap();
            assert_eq!(ticket.winning_index, 0);
            let mut now = 0.0;
            while wheel.is_spinning() {
                wheel.on_frame(now, &mut observer);
                now += 100.0;
            }
        }
        assert_eq!(observer.winners(), vec!["Solo".to_string(); 5]);
    }

    #[test]
    fn test_consecutive_spins_stay_consistent() {
        let options = OptionList::from_options(
            (0..7).map(|i| WheelOption::new(format!("Option {}", i), i + 1)).collect(),
        );
        let mut wheel = Wheel::new(options, WheelConfig::default());
        let mut source = SeededRandom::new(2024);
        let mut observer = RecordingObserver::default();
        for _ in 0..20 {
            let ticket = wheel.request_spin(&mut source).unwrap();
            let mut now = 0.0;
            loop {
                match wheel.on_frame(now, &mut observer) {
                    FrameUpdate::Finished(result) => {
                        assert_eq!(result.winning_index, ticket.winning_index);
                        assert!(result.is_consistent());
                        break;
                    }
                    FrameUpdate::Rotating(_) => now += 16.0,
                    other => panic!("unexpected frame update {:?}", other),
                }
            }
            assert!(wheel.rotation() >= 0.0 && wheel.rotation() < 360.0);
        }
        assert_eq!(observer.winners().len(), 20);
    }
}
