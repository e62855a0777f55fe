//! # formflow - Flow Compiler and Limit Validator
//!
//! **formflow** turns the screens of a multi-screen form designer into the JSON flow
//! document (version `7.3`) consumed by a messaging platform, and checks the same
//! screens against the platform's structural and content limits.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Screens**: Parse the editor's JSON snapshot with
//!     [`editor::parse_screens`], or implement [`editor::IntoScreens`] for your own format.
//! 2.  **Validate (optional)**: Run [`validator::validate_document`] to get inline errors
//!     and warnings for the editor. Findings never block compilation.
//! 3.  **Compile**: Use [`compiler::Compiler::builder`] (or [`compiler::compile_flow`]) to
//!     produce a [`wire::FlowDocument`].
//! 4.  **Hand Off**: Serialize the document with [`wire::FlowDocument::to_json`] and give
//!     it to the upload client.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formflow::prelude::*;
//! use formflow::editor::{Action, Element, Footer, HeadingText};
//!
//! fn main() -> Result<()> {
//!     let screens = vec![Screen::new(
//!         "WELCOME",
//!         "Welcome",
//!         vec![
//!             Element::TextHeading(HeadingText {
//!                 text: "Welcome".to_string(),
//!                 visible: None,
//!             }),
//!             Element::Footer(Footer {
//!                 label: "Done".to_string(),
//!                 on_click_action: Some(Action::complete()),
//!                 ..Default::default()
//!             }),
//!         ],
//!     )];
//!
//!     let compiler = Compiler::builder(screens).with_validation().build();
//!     let artifacts = compiler.compile()?;
//!
//!     if let Some(report) = &artifacts.report {
//!         for finding in report.findings() {
//!             println!("{}", finding);
//!         }
//!     }
//!     println!("{}", artifacts.document.to_json(true)?);
//!     Ok(())
//! }
//! ```

pub mod collections;
pub mod compiler;
pub mod editor;
pub mod error;
pub mod prelude;
pub mod validator;
pub mod wire;

#[cfg(feature = "python-bindings")]
mod python;
