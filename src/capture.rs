//! Recorded landmark captures: one JSON object per line, each describing
//! what the collaborators delivered during one detection cycle.

use std::io::BufRead;

use serde::Deserialize;

use crate::{
    error::{Error, Result},
    pipeline::{DetectionCycle, SessionInput},
    types::{LandmarkPoint, Viewport},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionControl {
    Start,
    Stop,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CaptureRecord {
    #[serde(default)]
    pub hands: Vec<Vec<LandmarkPoint>>,
    pub face: Option<Vec<LandmarkPoint>>,
    pub transcript: Option<String>,
    pub viewport: Option<Viewport>,
    pub control: Option<SessionControl>,
}

impl CaptureRecord {
    /// Splits the record into session inputs. A viewport change applies
    /// before the cycle it arrives with, `stop` after it.
    pub fn into_inputs(self) -> Vec<SessionInput> {
        let mut inputs = Vec::new();
        if self.control == Some(SessionControl::Start) {
            inputs.push(SessionInput::Start);
        }
        if let Some(viewport) = self.viewport {
            inputs.push(SessionInput::Viewport(viewport));
        }
        if !self.hands.is_empty() || self.face.is_some() {
            inputs.push(SessionInput::Cycle(DetectionCycle {
                hands: self.hands,
                face: self.face,
            }));
        }
        if let Some(transcript) = self.transcript {
            inputs.push(SessionInput::Transcript(transcript));
        }
        if self.control == Some(SessionControl::Stop) {
            inputs.push(SessionInput::Stop);
        }
        inputs
    }
}

/// Parses every non-blank line of a capture.
pub fn read_capture<R: BufRead>(reader: R) -> Result<Vec<CaptureRecord>> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| Error::Io {
            path: "<capture>".into(),
            source,
        })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|source| Error::Capture {
            line: idx + 1,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_mixed_records() {
        let capture = r#"
{"viewport": {"width": 800, "height": 600}, "hands": [[{"x": 0.1, "y": 0.2, "z": 0.0}]]}

{"transcript": "scroll up"}
{"face": [{"x": 0.5, "y": 0.5}], "control": "stop"}
"#;
        let records = read_capture(capture.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].hands[0][0], LandmarkPoint::new(0.1, 0.2, 0.0));
        assert_eq!(records[1].transcript.as_deref(), Some("scroll up"));
        assert_eq!(records[2].face.as_ref().map(Vec::len), Some(1));
        assert_eq!(records[2].control, Some(SessionControl::Stop));
    }

    #[test]
    fn test_reports_bad_line() {
        let capture = "{\"hands\": []}\n{not json}\n";
        let err = read_capture(capture.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Capture { line: 2, .. }));
    }

    #[test]
    fn test_input_order() {
        let record = CaptureRecord {
            hands: vec![vec![LandmarkPoint::default()]],
            transcript: Some("scroll down".to_string()),
            viewport: Some(Viewport::default()),
            control: Some(SessionControl::Stop),
            ..Default::default()
        };
        let inputs = record.into_inputs();
        assert!(matches!(
            inputs.as_slice(),
            [
                SessionInput::Viewport(_),
                SessionInput::Cycle(_),
                SessionInput::Transcript(_),
                SessionInput::Stop,
            ]
        ));
    }

    #[test]
    fn test_start_applies_before_cycle() {
        let capture = r#"{"control": "start", "face": [{"x": 0.5, "y": 0.5}]}"#;
        let records = read_capture(capture.as_bytes()).unwrap();
        assert_eq!(records[0].control, Some(SessionControl::Start));
        let inputs = records[0].clone().into_inputs();
        assert!(matches!(
            inputs.as_slice(),
            [SessionInput::Start, SessionInput::Cycle(_)]
        ));
    }

    #[test]
    fn test_empty_record_has_no_inputs() {
        assert!(CaptureRecord::default().into_inputs().is_empty());
    }
}
