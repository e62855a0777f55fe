//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the formflow
//! crate. Import this module to get access to the core functionality without having to
//! import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use formflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let editor_json = std::fs::read_to_string("path/to/screens.json")?;
//! let screens = parse_screens(&editor_json)?;
//!
//! let report = validate_document(&screens);
//! println!("{} errors, {} warnings", report.errors.len(), report.warnings.len());
//!
//! let document = compile_flow(&screens)?;
//! document.save("path/to/flow.json")?;
//! # Ok(())
//! # }
//! ```

// Compilation
pub use crate::compiler::{CompilationArtifacts, Compiler, CompilerBuilder, compile_flow};

// Editor model
pub use crate::editor::{Element, ElementKind, IntoScreens, Screen, parse_screens};

// Validation
pub use crate::validator::{
    Limits, Severity, ValidationFinding, ValidationReport, Validator, validate_document,
    validate_element, validate_screen,
};

// Wire model
pub use crate::wire::{ElementWire, FlowDocument, ScreenWire};

// Error types
pub use crate::error::{CompileError, ConfigError, DocumentError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
