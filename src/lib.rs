//! Turns hand and face landmark frames from a pose-estimation model into
//! discrete interaction events: poses, palm scrolling, two-hand zoom,
//! fingertip pointing, blinks and spoken scroll commands.

pub mod capture;
pub mod config;
pub mod error;
pub mod eye;
pub mod geometry;
pub mod gesture;
pub mod landmarks;
pub mod pinch;
pub mod pipeline;
pub mod pointer;
pub mod scroll;
pub mod session;
pub mod types;
pub mod voice;

pub use config::SessionConfig;
pub use error::{Error, Result};
pub use session::TrackingSession;
pub use types::{Gesture, GestureEvent, GestureEventKind, LandmarkPoint, Viewport, ZoomDirection};
