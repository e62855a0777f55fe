//! The editor-side model: screens and the closed element union the designer produces.

pub mod conversion;
pub mod element;
pub mod kind;
pub mod raw;
pub mod screen;

pub use conversion::*;
pub use element::*;
pub use kind::*;
pub use raw::*;
pub use screen::*;
