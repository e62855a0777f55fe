//! The platform-facing document model produced by the compiler.

pub mod element;

pub use element::*;

use crate::collections::OrderedMap;
use crate::error::DocumentError;
use serde::{Deserialize, Serialize};
use std::fs;

/// Schema version string understood by the receiving platform.
pub const FLOW_VERSION: &str = "7.3";

/// Name of the synthesized form container on every screen that has one.
pub const FORM_NAME: &str = "flow_path";

pub const LAYOUT_TYPE: &str = "SingleColumnLayout";

/// Screen id -> screen ids it can navigate to.
pub type RoutingModel = OrderedMap<String, Vec<String>>;

/// Field name -> declared type and example value.
pub type DataSchema = OrderedMap<String, DataField>;

/// A compiled flow document, ready to be handed to the upload client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowDocument {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_model: Option<RoutingModel>,
    pub screens: Vec<ScreenWire>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenWire {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<DataSchema>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(rename = "type")]
    pub kind: String,
    pub children: Vec<ElementWire>,
}

impl Layout {
    pub fn single_column(children: Vec<ElementWire>) -> Self {
        Self {
            kind: LAYOUT_TYPE.to_string(),
            children,
        }
    }
}

/// Declaration of one inherited input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataField {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "__example__")]
    pub example: String,
}

impl DataField {
    pub fn string(example: impl Into<String>) -> Self {
        Self {
            kind: "string".to_string(),
            example: example.into(),
        }
    }
}

impl FlowDocument {
    pub fn screen(&self, id: &str) -> Option<&ScreenWire> {
        self.screens.iter().find(|s| s.id == id)
    }

    /// Serializes the document to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, DocumentError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Saves the document to a file as pretty-printed JSON.
    pub fn save(&self, path: &str) -> Result<(), DocumentError> {
        let json = self.to_json(true)?;
        fs::write(path, json).map_err(|source| DocumentError::Io {
            path: path.to_string(),
            source,
        })
    }

    /// Loads a previously saved document.
    pub fn from_file(path: &str) -> Result<Self, DocumentError> {
        let json = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}
