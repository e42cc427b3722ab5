use serde::{Deserialize, Serialize};

/// Visualization shape chosen for structured content display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Timeline,
    Process,
    Map,
}

impl Layout {
    pub fn parse(value: &str) -> Option<Layout> {
        match value.trim().to_ascii_lowercase().as_str() {
            "timeline" => Some(Layout::Timeline),
            "process" => Some(Layout::Process),
            "map" => Some(Layout::Map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Timeline => "timeline",
            Layout::Process => "process",
            Layout::Map => "map",
        }
    }
}

/// One row of a timeline or process rendering.
///
/// Models label the entry under a handful of different keys; the aliases
/// accept any of them.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StructuredItem {
    #[serde(alias = "title", alias = "topic", alias = "desc", alias = "summary")]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl StructuredItem {
    pub fn new(label: impl Into<String>) -> Self {
        StructuredItem {
            label: label.into(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// The artifact handed to the visualization renderer. Serializes to the
/// `{"layout": ..., "topics"|"items": ...}` shape the renderer expects.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "layout", rename_all = "lowercase")]
pub enum VisualArtifact {
    Map { topics: Vec<String> },
    Timeline { items: Vec<StructuredItem> },
    Process { items: Vec<StructuredItem> },
}

impl VisualArtifact {
    pub fn layout(&self) -> Layout {
        match self {
            VisualArtifact::Map { .. } => Layout::Map,
            VisualArtifact::Timeline { .. } => Layout::Timeline,
            VisualArtifact::Process { .. } => Layout::Process,
        }
    }
}
