use std::thread;

use crossbeam_channel::Receiver;

use crate::{
    session::TrackingSession,
    types::{LandmarkPoint, Viewport},
};

#[derive(Clone, Debug, Default)]
pub struct DetectionCycle {
    pub hands: Vec<Vec<LandmarkPoint>>,
    pub face: Option<Vec<LandmarkPoint>>,
}

#[derive(Clone, Debug)]
pub enum SessionInput {
    Cycle(DetectionCycle),
    Transcript(String),
    Viewport(Viewport),
    Start,
    Stop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backlog {
    /// Process every cycle in arrival order.
    KeepAll,
    /// Fully process only the newest queued cycle. Older queued cycles
    /// still get their faces and scroll state changes handled, see
    /// [`TrackingSession::process_superseded_cycle`]. Transcripts,
    /// viewport and start/stop inputs are never coalesced.
    KeepLatest,
}

struct Coalesced {
    superseded: Vec<DetectionCycle>,
    latest: DetectionCycle,
    next: Option<SessionInput>,
}

/// Moves the session onto its own thread. The thread exits once every
/// sender for `input_rx` is dropped, taking the session (and with it the
/// event sender) down.
pub fn start_session_worker(
    session: TrackingSession,
    input_rx: Receiver<SessionInput>,
    backlog: Backlog,
) -> thread::JoinHandle<()> {
    thread::spawn(move || run_worker_loop(session, input_rx, backlog))
}

fn run_worker_loop(
    mut session: TrackingSession,
    input_rx: Receiver<SessionInput>,
    backlog: Backlog,
) {
    let mut pending = None;

    loop {
        let input = match pending.take() {
            Some(input) => input,
            None => match input_rx.recv() {
                Ok(input) => input,
                Err(_) => break,
            },
        };

        match input {
            SessionInput::Cycle(cycle) => {
                let cycle = match backlog {
                    Backlog::KeepAll => cycle,
                    Backlog::KeepLatest => {
                        let coalesced = recv_latest_cycle(cycle, &input_rx);
                        if !coalesced.superseded.is_empty() {
                            log::debug!("coalescing {} stale cycles", coalesced.superseded.len());
                        }
                        for stale in &coalesced.superseded {
                            session.process_superseded_cycle(
                                stale.hands.as_slice(),
                                stale.face.as_deref(),
                            );
                        }
                        pending = coalesced.next;
                        coalesced.latest
                    }
                };
                session.process_cycle(cycle.hands.as_slice(), cycle.face.as_deref());
            }
            SessionInput::Transcript(transcript) => session.process_transcript(&transcript),
            SessionInput::Viewport(viewport) => session.set_viewport(viewport),
            SessionInput::Start => session.start(),
            SessionInput::Stop => session.stop(),
        }
    }

    log::debug!("session worker exiting after {} cycles", session.frame());
}

/// Drains queued cycles, splitting them into the newest and the ones it
/// overtook. Stops at the first input that is not a cycle and hands it back
/// so it is processed in order.
fn recv_latest_cycle(cycle: DetectionCycle, input_rx: &Receiver<SessionInput>) -> Coalesced {
    let mut superseded = Vec::new();
    let mut latest = cycle;
    while let Ok(newer) = input_rx.try_recv() {
        match newer {
            SessionInput::Cycle(newer) => superseded.push(std::mem::replace(&mut latest, newer)),
            other => {
                return Coalesced {
                    superseded,
                    latest,
                    next: Some(other),
                };
            }
        }
    }
    Coalesced {
        superseded,
        latest,
        next: None,
    }
}
