//! Anatomical landmark indices for the 21-point hand model and the eye
//! contour points of the 468-point face mesh.

pub const HAND_LANDMARK_COUNT: usize = 21;
pub const FACE_LANDMARK_COUNT: usize = 468;

pub const WRIST: usize = 0;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

/// The landmark tracked for scroll displacement.
pub const PALM_CENTER: usize = MIDDLE_MCP;

pub const FINGERTIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EyeContour {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

pub const LEFT_EYE: EyeContour = EyeContour {
    top: 159,
    bottom: 145,
    left: 33,
    right: 133,
};

pub const RIGHT_EYE: EyeContour = EyeContour {
    top: 386,
    bottom: 374,
    left: 362,
    right: 263,
};
