use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::{
    config::SessionConfig,
    eye::EyeAnalyzer,
    gesture::GestureClassifier,
    pinch::PinchTracker,
    pointer::project_pointer,
    scroll::{ScrollMachine, ScrollState},
    types::{Gesture, GestureEvent, GestureEventKind, LandmarkPoint, Viewport},
    voice::map_transcript,
};

/// Everything one tracking session owns. Each detection cycle, transcript
/// and viewport change goes through here, and the resulting events are
/// pushed to the channel handed out by [`TrackingSession::new`].
///
/// Once stopped, every entry point is a no-op until [`start`] is called,
/// so late model or speech callbacks cannot touch a closed session.
///
/// [`start`]: TrackingSession::start
pub struct TrackingSession {
    config: SessionConfig,
    classifier: GestureClassifier,
    eyes: EyeAnalyzer,
    scroll: ScrollMachine,
    pinch: PinchTracker,
    viewport: Viewport,
    frame: u64,
    active: bool,
    events: Sender<GestureEvent>,
}

impl TrackingSession {
    pub fn new(config: SessionConfig) -> (Self, Receiver<GestureEvent>) {
        let (tx, rx) = unbounded();
        (Self::with_sender(config, tx), rx)
    }

    pub fn with_sender(config: SessionConfig, events: Sender<GestureEvent>) -> Self {
        Self {
            classifier: GestureClassifier::new(config.fingertip_sampling),
            eyes: EyeAnalyzer::new(config.blink_threshold),
            scroll: ScrollMachine::new(config.scroll_gain, config.refresh_anchor_on_interrupt),
            pinch: PinchTracker::new(config.pinch_threshold, config.zoom_gain),
            viewport: Viewport::default(),
            frame: 0,
            active: true,
            events,
            config,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn start(&mut self) {
        if !self.active {
            log::info!("tracking session started");
        }
        self.active = true;
    }

    /// Ends tracking: scrolling drops back to idle and the pinch distance
    /// is forgotten.
    pub fn stop(&mut self) {
        if self.active {
            log::info!("tracking session stopped after {} cycles", self.frame);
        }
        self.active = false;
        self.scroll.reset();
        self.pinch.reset();
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Handles one detection cycle: zero to two hands and at most one face.
    pub fn process_cycle<H>(&mut self, hands: &[H], face: Option<&[LandmarkPoint]>)
    where
        H: AsRef<[LandmarkPoint]>,
    {
        if !self.active {
            log::trace!("dropping detection cycle for stopped session");
            return;
        }
        self.frame += 1;

        match hands {
            [hand] => self.process_single_hand(hand.as_ref()),
            [first, second] => self.process_hand_pair(first.as_ref(), second.as_ref()),
            [] => {}
            _ => log::debug!("ignoring cycle with {} hands", hands.len()),
        }

        self.process_face(face);
    }

    /// Handles a cycle that a newer queued cycle has already overtaken.
    /// Faces and scroll state changes are still processed so no blink,
    /// activation or cancel is lost. Pose, cursor, pinch and in-scroll
    /// palm frames are skipped: the next processed palm or pinch sample
    /// measures from the last one seen, so their movement is not lost.
    pub fn process_superseded_cycle<H>(&mut self, hands: &[H], face: Option<&[LandmarkPoint]>)
    where
        H: AsRef<[LandmarkPoint]>,
    {
        if !self.active {
            log::trace!("dropping superseded cycle for stopped session");
            return;
        }
        self.frame += 1;

        if let [hand] = hands {
            let hand = hand.as_ref();
            let gesture = self.classifier.classify(hand);
            let scrolling = self.scroll.state() == ScrollState::Scrolling;
            if !(scrolling && gesture == Gesture::Palm) {
                if let Some(kind) = self.scroll.step(gesture, hand) {
                    self.emit(kind);
                }
            }
        }

        self.process_face(face);
    }

    pub fn process_transcript(&mut self, transcript: &str) {
        if !self.active {
            log::trace!("dropping transcript for stopped session");
            return;
        }
        if let Some(delta_y) = map_transcript(transcript, self.config.voice_scroll_step) {
            self.emit(GestureEventKind::VoiceScroll { delta_y });
        }
    }

    fn process_single_hand(&mut self, hand: &[LandmarkPoint]) {
        let gesture = self.classifier.classify(hand);
        log::trace!("cycle {}: {}", self.frame, gesture.display_name());

        match gesture {
            Gesture::Peace => self.emit(GestureEventKind::PoseDetected(Gesture::Peace)),
            Gesture::Pointing => {
                self.emit(GestureEventKind::PoseDetected(Gesture::Pointing));
                if let Some((x, y)) = project_pointer(hand, self.viewport) {
                    self.emit(GestureEventKind::CursorMoved { x, y });
                }
            }
            Gesture::Palm | Gesture::Fist | Gesture::None => {}
        }

        if let Some(kind) = self.scroll.step(gesture, hand) {
            self.emit(kind);
        }
    }

    fn process_face(&mut self, face: Option<&[LandmarkPoint]>) {
        let Some(face) = face else {
            return;
        };
        let reading = self.eyes.analyze(face);
        if reading.closed {
            self.emit(GestureEventKind::BlinkDetected { ear: reading.ear });
        }
    }

    fn process_hand_pair(&mut self, first: &[LandmarkPoint], second: &[LandmarkPoint]) {
        if let Some(zoom) = self.pinch.update(first, second) {
            self.emit(GestureEventKind::ZoomDelta {
                direction: zoom.direction,
                magnitude: zoom.magnitude,
            });
        }
    }

    fn emit(&self, kind: GestureEventKind) {
        let event = GestureEvent {
            frame: self.frame,
            kind,
        };
        if self.events.try_send(event).is_err() {
            log::trace!("event receiver gone, dropping {kind:?}");
        }
    }
}
