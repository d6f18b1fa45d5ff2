use crate::{
    landmarks::{HAND_LANDMARK_COUNT, INDEX_TIP},
    types::{LandmarkPoint, Viewport},
};

/// Maps the index fingertip into viewport pixels.
pub fn project_pointer(landmarks: &[LandmarkPoint], viewport: Viewport) -> Option<(f32, f32)> {
    if landmarks.len() < HAND_LANDMARK_COUNT {
        return None;
    }
    let tip = landmarks[INDEX_TIP];
    Some((tip.x * viewport.width, tip.y * viewport.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::fixtures::pointing;

    #[test]
    fn test_projects_index_tip() {
        let viewport = Viewport {
            width: 1920.0,
            height: 1080.0,
        };
        let (x, y) = project_pointer(&pointing(0.25, 0.5), viewport).unwrap();
        assert_eq!((x, y), (480.0, 540.0));
    }

    #[test]
    fn test_follows_viewport_resize() {
        let frame = pointing(0.5, 0.5);
        let small = project_pointer(&frame, Viewport { width: 800.0, height: 600.0 });
        let large = project_pointer(&frame, Viewport { width: 1600.0, height: 1200.0 });
        assert_eq!(small, Some((400.0, 300.0)));
        assert_eq!(large, Some((800.0, 600.0)));
    }

    #[test]
    fn test_short_frame() {
        assert_eq!(project_pointer(&[LandmarkPoint::default(); 8], Viewport::default()), None);
    }
}
