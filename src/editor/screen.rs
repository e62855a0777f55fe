use super::element::Element;
use super::kind::ElementKind;
use ahash::AHashSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One page of the multi-step form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// A value-producing field declared on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamedField<'a> {
    pub name: &'a str,
    pub kind: ElementKind,
}

impl NamedField<'_> {
    /// Sample value advertised for this field in inherited data schemas.
    pub fn example(&self) -> &'static str {
        self.kind.example_value().unwrap_or_default()
    }
}

impl Screen {
    pub fn new(id: impl Into<String>, title: impl Into<String>, elements: Vec<Element>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            elements,
        }
    }

    /// Visits every element of the screen, including those nested in `If`/`Switch`
    /// branches, in document order.
    pub fn walk_elements<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        for element in &self.elements {
            element.walk(visit);
        }
    }

    /// Named fields in first-seen order; a name declared twice is reported once.
    pub fn named_fields(&self) -> Vec<NamedField<'_>> {
        let mut seen = AHashSet::new();
        let mut fields = Vec::new();
        self.walk_elements(&mut |element| {
            if let Some(name) = element.field_name() {
                if seen.insert(name) {
                    fields.push(NamedField {
                        name,
                        kind: element.kind(),
                    });
                }
            }
        });
        fields
    }

    /// A screen is terminal when one of its footers completes the flow.
    pub fn is_terminal(&self) -> bool {
        let mut terminal = false;
        self.walk_elements(&mut |element| {
            if let Element::Footer(footer) = element {
                terminal |= footer.completes_flow();
            }
        });
        terminal
    }

    /// Screen ids reachable from this screen, deduplicated in first-seen order.
    pub fn navigation_targets(&self) -> Vec<&str> {
        let mut targets = Vec::new();
        self.walk_elements(&mut |element| targets.extend(element.navigation_targets()));
        targets.into_iter().unique().collect()
    }
}
