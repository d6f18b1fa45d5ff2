use serde::Deserialize;

use crate::{
    landmarks::{
        FINGERTIPS, HAND_LANDMARK_COUNT, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP,
        PINKY_TIP, RING_PIP, RING_TIP, WRIST,
    },
    types::{Gesture, LandmarkPoint},
};

/// Which landmarks the palm and fist rules compare against the wrist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FingertipSampling {
    /// Every landmark from the index tip through the pinky tip (8..=20),
    /// which includes the middle, ring and pinky knuckles and joints.
    #[default]
    Range,
    /// Only the four fingertips {8, 12, 16, 20}.
    Tips,
}

pub struct GestureClassifier {
    sampling: FingertipSampling,
}

impl GestureClassifier {
    pub fn new(sampling: FingertipSampling) -> Self {
        Self { sampling }
    }

    pub fn classify(&self, landmarks: &[LandmarkPoint]) -> Gesture {
        if landmarks.len() < HAND_LANDMARK_COUNT {
            return Gesture::None;
        }

        let wrist_y = landmarks[WRIST].y;
        let index_up = is_raised(landmarks, INDEX_TIP, INDEX_PIP);
        let middle_up = is_raised(landmarks, MIDDLE_TIP, MIDDLE_PIP);
        let ring_down = is_lowered(landmarks, RING_TIP, RING_PIP);
        let pinky_down = is_lowered(landmarks, PINKY_TIP, PINKY_PIP);

        // Peace has to win over pointing: both need the index finger raised.
        let peace = index_up && middle_up && ring_down && pinky_down;
        let palm = self.sampled(landmarks).all(|p| p.y < wrist_y);
        let fist = self.sampled(landmarks).all(|p| p.y > wrist_y);
        let pointing = index_up && !peace;

        if peace {
            Gesture::Peace
        } else if palm {
            Gesture::Palm
        } else if fist {
            Gesture::Fist
        } else if pointing {
            Gesture::Pointing
        } else {
            Gesture::None
        }
    }

    fn sampled<'a>(
        &self,
        landmarks: &'a [LandmarkPoint],
    ) -> Box<dyn Iterator<Item = &'a LandmarkPoint> + 'a> {
        match self.sampling {
            FingertipSampling::Range => Box::new(landmarks[INDEX_TIP..=PINKY_TIP].iter()),
            FingertipSampling::Tips => Box::new(FINGERTIPS.iter().map(move |&i| &landmarks[i])),
        }
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(FingertipSampling::default())
    }
}

fn is_raised(points: &[LandmarkPoint], tip: usize, joint: usize) -> bool {
    points[tip].y < points[joint].y
}

fn is_lowered(points: &[LandmarkPoint], tip: usize, joint: usize) -> bool {
    points[tip].y > points[joint].y
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::{landmarks::*, types::LandmarkPoint};

    /// A hand with every point at `y`, the wrist at `wrist_y`, and each
    /// finger's tip placed relative to its second joint.
    pub fn hand(wrist_y: f32, y: f32, fingers_up: [bool; 4]) -> Vec<LandmarkPoint> {
        let mut points = vec![LandmarkPoint::new(0.5, y, 0.0); HAND_LANDMARK_COUNT];
        points[WRIST].y = wrist_y;
        let pairs = [
            (INDEX_TIP, INDEX_PIP),
            (MIDDLE_TIP, MIDDLE_PIP),
            (RING_TIP, RING_PIP),
            (PINKY_TIP, PINKY_PIP),
        ];
        for ((tip, _joint), up) in pairs.into_iter().zip(fingers_up) {
            points[tip].y = if up { y - 0.05 } else { y + 0.05 };
        }
        points
    }

    pub fn open_palm(palm_y: f32) -> Vec<LandmarkPoint> {
        let mut points = hand(palm_y + 0.3, palm_y - 0.1, [true; 4]);
        points[PALM_CENTER].y = palm_y;
        points
    }

    pub fn fist(palm_y: f32) -> Vec<LandmarkPoint> {
        let mut points = hand(palm_y - 0.3, palm_y + 0.1, [false; 4]);
        points[PALM_CENTER].y = palm_y;
        points
    }

    pub fn pointing(tip_x: f32, tip_y: f32) -> Vec<LandmarkPoint> {
        // Wrist sits between the fingers so neither palm nor fist match.
        let mut points = hand(0.6, 0.6, [true, false, false, false]);
        points[INDEX_TIP] = LandmarkPoint::new(tip_x, tip_y, 0.0);
        points
    }
}
