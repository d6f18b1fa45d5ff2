use crate::{
    geometry::distance,
    landmarks::{EyeContour, FACE_LANDMARK_COUNT, LEFT_EYE, RIGHT_EYE},
    types::LandmarkPoint,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EyeReading {
    pub left: f32,
    pub right: f32,
    /// Mean of both eyes. `f32::INFINITY` when the frame is unusable.
    pub ear: f32,
    pub closed: bool,
}

impl EyeReading {
    const UNUSABLE: EyeReading = EyeReading {
        left: f32::INFINITY,
        right: f32::INFINITY,
        ear: f32::INFINITY,
        closed: false,
    };
}

pub struct EyeAnalyzer {
    threshold: f32,
}

impl EyeAnalyzer {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn analyze(&self, face: &[LandmarkPoint]) -> EyeReading {
        if face.len() < FACE_LANDMARK_COUNT {
            return EyeReading::UNUSABLE;
        }

        let left = eye_aspect_ratio(face, LEFT_EYE);
        let right = eye_aspect_ratio(face, RIGHT_EYE);
        let ear = (left + right) / 2.0;

        EyeReading {
            left,
            right,
            ear,
            closed: ear < self.threshold,
        }
    }
}

/// Vertical lid gap over horizontal eye width. A zero-width eye reads as
/// wide open.
fn eye_aspect_ratio(face: &[LandmarkPoint], eye: EyeContour) -> f32 {
    let width = distance(face[eye.left], face[eye.right]);
    if width <= f32::EPSILON {
        return f32::INFINITY;
    }
    distance(face[eye.top], face[eye.bottom]) / width
}
