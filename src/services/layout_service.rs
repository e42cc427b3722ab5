use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::structured::Layout;

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(19|20)\d{2}").unwrap());
static STEP_CUES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(step\s?\d+|first,|second,|then,|finally)").unwrap());

/// Chooses a visualization shape from surface cues. The year test runs
/// before the step test; with no evidence the caller-supplied default wins.
pub fn detect_layout(text: &str, default: Layout) -> Layout {
    if YEAR.is_match(text) {
        return Layout::Timeline;
    }
    if STEP_CUES.is_match(text) {
        return Layout::Process;
    }
    default
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_classifies_as_timeline() {
        assert_eq!(
            detect_layout("The accord of 2020 changed everything.", Layout::Map),
            Layout::Timeline
        );
    }

    #[test]
    fn date_check_precedes_step_check() {
        let text = "First, the 2020 rollout began. Then, adoption grew.";
        assert_eq!(detect_layout(text, Layout::Map), Layout::Timeline);
    }

    #[test]
    fn step_cues_classify_as_process() {
        assert_eq!(
            detect_layout("First, mix the batter. Then, bake it.", Layout::Map),
            Layout::Process
        );
        assert_eq!(
            detect_layout("Step 3 covers assembly.", Layout::Map),
            Layout::Process
        );
    }

    #[test]
    fn no_evidence_returns_default() {
        assert_eq!(
            detect_layout("Cats are wonderful companions.", Layout::Map),
            Layout::Map
        );
        assert_eq!(
            detect_layout("Cats are wonderful companions.", Layout::Process),
            Layout::Process
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let text = "In 1969 the crew landed.";
        let first = detect_layout(text, Layout::Process);
        let second = detect_layout(text, Layout::Process);
        assert_eq!(first, second);
        assert_eq!(first, Layout::Timeline);
    }
}
