use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use shared::constants::SPIN_END_EVENT;
use shared::{FrameUpdate, SpinObserver, SpinResult, Wheel, WheelError};
use wasm_bindgen::JsValue;
use web_sys::{window, CustomEvent, CustomEventInit};
use yew::Callback;

/// Reports the winner to the page and fires the celebration event.
pub struct BrowserObserver {
    pub on_winner: Callback<String>,
}

impl SpinObserver for BrowserObserver {
    fn on_spin_end(&mut self, winner: &str) {
        self.on_winner.emit(winner.to_string());
    }

    fn celebrate(&mut self, winner: &str) -> Result<(), WheelError> {
        let window = window().ok_or_else(|| WheelError::Celebration("no window".to_string()))?;

        let event_init = CustomEventInit::new();
        event_init.set_detail(&JsValue::from_str(winner));
        let event = CustomEvent::new_with_event_init_dict(SPIN_END_EVENT, &event_init)
            .map_err(|e| WheelError::Celebration(format!("{:?}", e)))?;
        window
            .dispatch_event(&event)
            .map_err(|e| WheelError::Celebration(format!("{:?}", e)))?;
        Ok(())
    }
}

/// Everything one spin's frame loop needs. The wheel is the only owner of
/// rotation state; the page just mirrors what each frame reports.
pub struct SpinDriver {
    pub wheel: Rc<RefCell<Wheel>>,
    pub frame: Rc<RefCell<Option<AnimationFrame>>>,
    pub observer: RefCell<BrowserObserver>,
    pub on_rotation: Callback<f64>,
    pub on_finished: Callback<Result<SpinResult, WheelError>>,
}

impl SpinDriver {
    /// Schedules frames until the wheel reports the spin is over.
    pub fn start(self: Rc<Self>) {
        if window().is_none() {
            let reason = WheelError::ClockFault("no window to schedule frames".to_string());
            self.wheel.borrow_mut().abort(reason.clone());
            self.on_finished.emit(Err(reason));
            return;
        }
        self.schedule();
    }

    fn schedule(self: Rc<Self>) {
        let driver = Rc::clone(&self);
        let handle = request_animation_frame(move |timestamp| {
            driver.frame.borrow_mut().take();
            driver.step(timestamp);
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn step(self: Rc<Self>, timestamp: f64) {
        let update = {
            let mut observer = self.observer.borrow_mut();
            self.wheel.borrow_mut().on_frame(timestamp, &mut *observer)
        };

        match update {
            FrameUpdate::Rotating(angle) => {
                self.on_rotation.emit(angle);
                self.schedule();
            }
            FrameUpdate::Finished(result) => {
                let resting = self.wheel.borrow().rotation();
                self.on_rotation.emit(resting);
                self.on_finished.emit(Ok(result));
            }
            FrameUpdate::Aborted(e) => {
                self.on_rotation.emit(self.wheel.borrow().rotation());
                self.on_finished.emit(Err(e));
            }
            FrameUpdate::Idle => {
                self.on_finished.emit(Err(WheelError::ClockFault(
                    "frame arrived with no spin in flight".to_string(),
                )));
            }
        }
    }
}
