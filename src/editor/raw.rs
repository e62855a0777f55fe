use serde::Deserialize;

/// The editor's JSON snapshot, either wrapped in a document object or as a bare
/// array of screens.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum EditorSnapshot {
    Document { screens: Vec<RawScreen> },
    Screens(Vec<RawScreen>),
}

/// A screen whose elements have not been checked against the known kinds yet.
#[derive(Debug, Deserialize)]
pub struct RawScreen {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub elements: Vec<serde_json::Value>,
}

impl EditorSnapshot {
    pub fn into_raw_screens(self) -> Vec<RawScreen> {
        match self {
            EditorSnapshot::Document { screens } | EditorSnapshot::Screens(screens) => screens,
        }
    }
}
