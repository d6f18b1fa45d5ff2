use crate::{
    geometry::distance,
    landmarks::{HAND_LANDMARK_COUNT, INDEX_TIP},
    types::{LandmarkPoint, ZoomDirection},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zoom {
    pub direction: ZoomDirection,
    /// Signed: positive when the hands move apart.
    pub magnitude: f32,
}

/// Follows the gap between two index fingertips from cycle to cycle.
#[derive(Debug)]
pub struct PinchTracker {
    last_distance: Option<f32>,
    threshold: f32,
    gain: f32,
}

impl PinchTracker {
    pub fn new(threshold: f32, gain: f32) -> Self {
        Self {
            last_distance: None,
            threshold,
            gain,
        }
    }

    pub fn last_distance(&self) -> Option<f32> {
        self.last_distance
    }

    pub fn update(&mut self, first: &[LandmarkPoint], second: &[LandmarkPoint]) -> Option<Zoom> {
        if first.len() < HAND_LANDMARK_COUNT || second.len() < HAND_LANDMARK_COUNT {
            return None;
        }

        let current = distance(first[INDEX_TIP], second[INDEX_TIP]);
        let zoom = self.last_distance.and_then(|last| {
            let delta = current - last;
            (delta.abs() > self.threshold).then(|| Zoom {
                direction: if delta > 0.0 {
                    ZoomDirection::In
                } else {
                    ZoomDirection::Out
                },
                magnitude: delta * self.gain,
            })
        });
        self.last_distance = Some(current);

        if let Some(zoom) = &zoom {
            log::debug!("pinch {current:.3}: {:?} {:+.4}", zoom.direction, zoom.magnitude);
        }
        zoom
    }

    pub fn reset(&mut self) {
        self.last_distance = None;
    }
}
