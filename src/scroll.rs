use crate::{
    landmarks::{HAND_LANDMARK_COUNT, PALM_CENTER},
    types::{Gesture, GestureEventKind, LandmarkPoint},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollState {
    Idle,
    Scrolling,
}

/// Palm-driven scrolling. An open palm arms the machine, each following
/// palm frame scrolls by how far the palm center moved since the previous
/// one, and a fist disarms it. A fist is reported as a cancel in either
/// state.
#[derive(Debug)]
pub struct ScrollMachine {
    state: ScrollState,
    anchor_y: Option<f32>,
    gain: f32,
    refresh_anchor_on_interrupt: bool,
}

impl ScrollMachine {
    pub fn new(gain: f32, refresh_anchor_on_interrupt: bool) -> Self {
        Self {
            state: ScrollState::Idle,
            anchor_y: None,
            gain,
            refresh_anchor_on_interrupt,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn anchor_y(&self) -> Option<f32> {
        self.anchor_y
    }

    pub fn step(
        &mut self,
        gesture: Gesture,
        landmarks: &[LandmarkPoint],
    ) -> Option<GestureEventKind> {
        if landmarks.len() < HAND_LANDMARK_COUNT {
            return None;
        }
        let current_y = landmarks[PALM_CENTER].y;

        match (self.state, gesture) {
            (ScrollState::Idle, Gesture::Palm) => {
                self.state = ScrollState::Scrolling;
                self.anchor_y = Some(current_y);
                log::debug!("scroll mode armed at y={current_y:.3}");
                Some(GestureEventKind::ScrollModeActivated)
            }
            (ScrollState::Idle, Gesture::Fist) => Some(GestureEventKind::GestureCanceled),
            (ScrollState::Idle, Gesture::Peace | Gesture::Pointing | Gesture::None) => None,
            (ScrollState::Scrolling, Gesture::Palm) => {
                let anchor = self.anchor_y.replace(current_y).unwrap_or(current_y);
                Some(GestureEventKind::ScrollDelta {
                    delta_y: (current_y - anchor) * self.gain,
                })
            }
            (ScrollState::Scrolling, Gesture::Fist) => {
                self.reset();
                log::debug!("scroll mode canceled");
                Some(GestureEventKind::GestureCanceled)
            }
            (ScrollState::Scrolling, Gesture::Peace | Gesture::Pointing | Gesture::None) => {
                if self.refresh_anchor_on_interrupt {
                    self.anchor_y = Some(current_y);
                }
                None
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = ScrollState::Idle;
        self.anchor_y = None;
    }
}
