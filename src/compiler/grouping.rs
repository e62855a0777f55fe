use super::mapping::{MappingContext, map_element};
use crate::editor::Element;
use crate::wire::{ElementWire, FORM_NAME, FormWire};
use itertools::{Either, Itertools};

/// A compiled element together with the grouping facts about its source.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedElement {
    pub wire: ElementWire,
    pub form_class: bool,
    pub footer: bool,
}

impl MappedElement {
    pub fn map(element: &Element, ctx: &MappingContext<'_>) -> Self {
        Self {
            wire: map_element(element, ctx),
            form_class: element.is_form_class(),
            footer: matches!(element, Element::Footer(_)),
        }
    }
}

/// Splits a screen's mapped children into plain children followed by one form
/// container. Each group keeps its input order; footers always close the form.
pub fn group_children(mapped: Vec<MappedElement>) -> Vec<ElementWire> {
    let (form, mut children): (Vec<MappedElement>, Vec<ElementWire>) =
        mapped.into_iter().partition_map(|m| {
            if m.form_class {
                Either::Left(m)
            } else {
                Either::Right(m.wire)
            }
        });

    if !form.is_empty() {
        let (footers, fields): (Vec<ElementWire>, Vec<ElementWire>) =
            form.into_iter().partition_map(|m| {
                if m.footer {
                    Either::Left(m.wire)
                } else {
                    Either::Right(m.wire)
                }
            });
        children.push(ElementWire::Form(FormWire {
            name: FORM_NAME.to_string(),
            children: fields.into_iter().chain(footers).collect(),
        }));
    }

    children
}
