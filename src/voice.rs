const SCROLL_DOWN: &str = "scroll down";
const SCROLL_UP: &str = "scroll up";

/// Maps a finalized transcript to a signed scroll distance. Matching is a
/// case-insensitive substring test; "scroll down" is checked first.
pub fn map_transcript(transcript: &str, step: f32) -> Option<f32> {
    let command = transcript.to_lowercase();
    if command.contains(SCROLL_DOWN) {
        Some(step)
    } else if command.contains(SCROLL_UP) {
        Some(-step)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_down_inside_sentence() {
        assert_eq!(map_transcript("please scroll down now", 100.0), Some(100.0));
    }

    #[test]
    fn test_uppercase_scroll_up() {
        assert_eq!(map_transcript("SCROLL UP", 100.0), Some(-100.0));
    }

    #[test]
    fn test_no_command() {
        assert_eq!(map_transcript("hello", 100.0), None);
        assert_eq!(map_transcript("", 100.0), None);
        assert_eq!(map_transcript("scrolldown", 100.0), None);
    }

    #[test]
    fn test_down_wins_when_both_present() {
        assert_eq!(map_transcript("scroll up no scroll down", 100.0), Some(100.0));
    }
}
