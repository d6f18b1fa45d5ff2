use serde::Deserialize;

/// One tracked anatomical point. `x`/`y` are image-normalized with a
/// top-left origin, `z` is depth relative to the wrist (hands) or face
/// center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl LandmarkPoint {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Peace,
    Palm,
    Fist,
    Pointing,
    None,
}

impl Gesture {
    pub fn display_name(&self) -> &'static str {
        match self {
            Gesture::Peace => "peace sign",
            Gesture::Palm => "open palm",
            Gesture::Fist => "fist",
            Gesture::Pointing => "pointing",
            Gesture::None => "no gesture",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Gesture::Peace => "✌️",
            Gesture::Palm => "👋",
            Gesture::Fist => "✊",
            Gesture::Pointing => "👉",
            Gesture::None => "⋯",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEventKind {
    /// Only `Peace` and `Pointing` are reported as poses; palm and fist
    /// surface through the scroll events instead.
    PoseDetected(Gesture),
    ScrollModeActivated,
    ScrollDelta { delta_y: f32 },
    GestureCanceled,
    ZoomDelta { direction: ZoomDirection, magnitude: f32 },
    BlinkDetected { ear: f32 },
    CursorMoved { x: f32, y: f32 },
    VoiceScroll { delta_y: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEvent {
    /// Detection cycle the event was derived from.
    pub frame: u64,
    pub kind: GestureEventKind,
}

impl GestureEvent {
    pub fn display_text(&self) -> String {
        match self.kind {
            GestureEventKind::PoseDetected(gesture) => {
                format!("{} {} detected", gesture.emoji(), gesture.display_name())
            }
            GestureEventKind::ScrollModeActivated => "scroll mode activated 👋".to_string(),
            GestureEventKind::ScrollDelta { delta_y } => format!("scroll by {delta_y:.1}px"),
            GestureEventKind::GestureCanceled => "gesture canceled ✊".to_string(),
            GestureEventKind::ZoomDelta {
                direction,
                magnitude,
            } => match direction {
                ZoomDirection::In => format!("zooming in 🔍 ({magnitude:+.3})"),
                ZoomDirection::Out => format!("zooming out 🔍 ({magnitude:+.3})"),
            },
            GestureEventKind::BlinkDetected { ear } => {
                format!("blink detected 👁️ (EAR {ear:.3})")
            }
            GestureEventKind::CursorMoved { x, y } => format!("cursor at ({x:.0}, {y:.0})"),
            GestureEventKind::VoiceScroll { delta_y } if delta_y >= 0.0 => {
                "scrolling down... 🔽".to_string()
            }
            GestureEventKind::VoiceScroll { .. } => "scrolling up... 🔼".to_string(),
        }
    }
}
