//! Structural and content limit checks run against the editor's screens.
//!
//! Validation never fails and never blocks compilation: every call returns a
//! (possibly empty) [`ValidationReport`]. Findings are aggregated bottom-up, element
//! to screen to document, with positional context prepended at each level.

pub mod finding;
pub mod limits;
mod rules;

pub use finding::{FindingCode, Severity, ValidationFinding, ValidationReport};
pub use limits::Limits;

use crate::editor::{Element, Screen};
use ahash::AHashSet;
use tracing::debug;

/// Checks elements, screens and documents against an injected [`Limits`] table.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    limits: Limits,
}

impl Validator {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn validate_element(&self, element: &Element) -> ValidationReport {
        let mut report = ValidationReport::new();
        rules::check_element(&self.limits, element, &mut report, &|child| {
            self.validate_element(child)
        });
        report
    }

    pub fn validate_screen(&self, screen: &Screen) -> ValidationReport {
        let limits = &self.limits;
        let mut report = ValidationReport::new();

        for (index, element) in screen.elements.iter().enumerate() {
            report.merge(
                self.validate_element(element),
                &format!("Component {}: ", index + 1),
            );
        }

        let count = screen.elements.len();
        if count > limits.components_per_screen {
            report.push(ValidationFinding::exceeded(
                "elements",
                format!(
                    "Screen has {} components; the maximum is {}",
                    count, limits.components_per_screen
                ),
                limits.components_per_screen,
                count,
            ));
        } else if count > limits.components_warning_threshold() {
            report.push(ValidationFinding::approaching(
                "elements",
                format!(
                    "Screen has {} components and is approaching the maximum of {}",
                    count, limits.components_per_screen
                ),
                limits.components_per_screen,
                count,
            ));
        }

        let form_count = screen.elements.iter().filter(|e| e.is_form_class()).count();
        if form_count > limits.form_components_per_screen {
            report.push(ValidationFinding::exceeded(
                "elements",
                format!(
                    "Screen has {} form components; the maximum is {}",
                    form_count, limits.form_components_per_screen
                ),
                limits.form_components_per_screen,
                form_count,
            ));
        }

        let link_count = screen
            .elements
            .iter()
            .filter(|e| matches!(e, Element::EmbeddedLink(_)))
            .count();
        if link_count > limits.embedded_links_per_screen {
            report.push(ValidationFinding::exceeded(
                "elements",
                format!(
                    "Screen has {} embedded links; the maximum is {}",
                    link_count, limits.embedded_links_per_screen
                ),
                limits.embedded_links_per_screen,
                link_count,
            ));
        }

        let footer_count = screen
            .elements
            .iter()
            .filter(|e| matches!(e, Element::Footer(_)))
            .count();
        if footer_count > limits.footers_per_screen {
            report.push(ValidationFinding::exceeded(
                "elements",
                format!(
                    "Screen has {} footers; the maximum is {}",
                    footer_count, limits.footers_per_screen
                ),
                limits.footers_per_screen,
                footer_count,
            ));
        }

        report
    }

    pub fn validate_document(&self, screens: &[Screen]) -> ValidationReport {
        let limits = &self.limits;
        let mut report = ValidationReport::new();

        for screen in screens {
            report.merge(
                self.validate_screen(screen),
                &format!("Screen \"{}\": ", screen.title),
            );
        }

        if screens.len() > limits.screens_per_document {
            report.push(ValidationFinding::exceeded(
                "screens",
                format!(
                    "Document has {} screens; the maximum is {}",
                    screens.len(),
                    limits.screens_per_document
                ),
                limits.screens_per_document,
                screens.len(),
            ));
        }

        let mut ids = AHashSet::new();
        for screen in screens {
            if !ids.insert(screen.id.as_str()) {
                report.push(ValidationFinding::invalid_reference(
                    "id",
                    format!("Screen id \"{}\" is used by more than one screen", screen.id),
                ));
            }
        }

        for screen in screens {
            for target in screen.navigation_targets() {
                if !ids.contains(target) {
                    report.push(
                        ValidationFinding::invalid_reference(
                            "onClickAction",
                            format!("Navigation target \"{}\" does not exist", target),
                        )
                        .in_context(&format!("Screen \"{}\": ", screen.title)),
                    );
                }
            }
        }

        debug!(
            screens = screens.len(),
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "Validated document"
        );
        report
    }
}

/// Validates one element against the default limits.
pub fn validate_element(element: &Element) -> ValidationReport {
    Validator::default().validate_element(element)
}

/// Validates one screen against the default limits.
pub fn validate_screen(screen: &Screen) -> ValidationReport {
    Validator::default().validate_screen(screen)
}

/// Validates a whole screen list against the default limits.
pub fn validate_document(screens: &[Screen]) -> ValidationReport {
    Validator::default().validate_document(screens)
}
