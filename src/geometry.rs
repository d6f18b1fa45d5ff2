use crate::types::LandmarkPoint;

/// Euclidean distance in the image plane. Depth is ignored: the model's `z`
/// is relative to a per-hand origin and does not share the x/y scale.
pub fn distance(a: LandmarkPoint, b: LandmarkPoint) -> f32 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}
