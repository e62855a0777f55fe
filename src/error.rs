use thiserror::Error;

/// Errors that can occur while ingesting an editor snapshot or compiling it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("Failed to parse editor JSON: {0}")]
    JsonParseError(String),

    #[error(
        "Element {position} on screen '{screen_id}' has kind '{kind}', which has no wire mapping"
    )]
    UnmappableElementKind {
        screen_id: String,
        position: usize,
        kind: String,
    },

    #[error("Element {position} ('{kind}') on screen '{screen_id}' is malformed: {message}")]
    InvalidElement {
        screen_id: String,
        position: usize,
        kind: String,
        message: String,
    },

    #[error("Screen id '{0}' is used by more than one screen")]
    DuplicateScreenId(String),
}

/// Errors that can occur while loading a limits configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read limits file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid limits configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur when persisting or loading a compiled flow document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Could not access '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Flow document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
