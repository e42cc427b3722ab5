use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Condensed article text for the summary card, paragraph-separated by
/// newlines, with the lead image passed through for the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Summary {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl Summary {
    pub fn new(text: impl Into<String>, image: Option<String>) -> Self {
        Summary {
            text: text.into(),
            image,
            generated_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_carries_lead_image_through() {
        let summary = Summary::new("Short recap.", Some("https://example.com/img.png".into()));
        assert_eq!(summary.image.as_deref(), Some("https://example.com/img.png"));
        assert!(summary.generated_at.is_some());
    }
}
