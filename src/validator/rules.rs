use super::finding::{FindingCode, Severity, ValidationFinding, ValidationReport};
use super::limits::Limits;
use crate::editor::{Action, ActionKind, Element, Footer, IfBlock, Selector, SwitchBlock};

/// Per-element checks. Nested branch elements are checked through `nested`, which
/// the caller provides so branch findings get the same treatment as top-level ones.
pub(super) fn check_element(
    limits: &Limits,
    element: &Element,
    report: &mut ValidationReport,
    nested: &dyn Fn(&Element) -> ValidationReport,
) {
    match element {
        Element::TextHeading(heading) | Element::TextSubheading(heading) => {
            required_text(report, "text", "Text", &heading.text, limits.heading_text);
        }
        Element::TextBody(body) => {
            required_text(report, "text", "Text", &body.text, limits.body_text);
        }
        Element::TextCaption(caption) => {
            if required_text(report, "text", "Text", &caption.text, limits.caption_text) {
                let current = char_count(&caption.text);
                if current > limits.caption_warning_threshold() {
                    report.push(ValidationFinding::approaching(
                        "text",
                        format!(
                            "Text is approaching the {} character limit ({})",
                            limits.caption_text, current
                        ),
                        limits.caption_text,
                        current,
                    ));
                }
            }
        }
        Element::RichText(rich) => {
            required_text(report, "text", "Text", &rich.text, limits.rich_text);
        }
        Element::TextInput(input)
        | Element::EmailInput(input)
        | Element::PasswordInput(input)
        | Element::PhoneInput(input) => {
            input_identity(report, limits, &input.label, &input.name);
            helper_text(report, limits, input.helper_text.as_deref());
        }
        Element::TextArea(area) => {
            input_identity(report, limits, &area.label, &area.name);
            helper_text(report, limits, area.helper_text.as_deref());
        }
        Element::CheckboxGroup(selector)
        | Element::RadioButtonsGroup(selector)
        | Element::ChipsSelector(selector)
        | Element::Dropdown(selector) => check_selector(report, limits, selector),
        Element::OptIn(opt_in) => {
            required(report, "label", "Label", &opt_in.label);
            required(report, "name", "Name", &opt_in.name);
            action_target(report, "onClickAction", opt_in.on_click_action.as_ref());
        }
        Element::EmbeddedLink(link) => {
            required_text(report, "text", "Text", &link.text, limits.embedded_link_text);
            match &link.on_click_action {
                Some(action) => action_target(report, "onClickAction", Some(action)),
                None => report.push(ValidationFinding::missing(
                    "onClickAction",
                    "Action is required",
                )),
            }
        }
        Element::DatePicker(picker) => {
            input_identity(report, limits, &picker.label, &picker.name);
            helper_text(report, limits, picker.helper_text.as_deref());
            action_target(report, "onSelectAction", picker.on_select_action.as_ref());
        }
        Element::CalendarPicker(picker) => {
            input_identity(report, limits, &picker.label, &picker.name);
            helper_text(report, limits, picker.helper_text.as_deref());
            action_target(report, "onSelectAction", picker.on_select_action.as_ref());
        }
        Element::Image(image) => {
            required(report, "src", "Image source", &image.src);
        }
        Element::ImageCarousel(carousel) => {
            if carousel.images.is_empty() {
                report.push(ValidationFinding::missing(
                    "images",
                    "At least one image is required",
                ));
            }
        }
        Element::PhotoPicker(picker) => {
            input_identity(report, limits, &picker.label, &picker.name);
        }
        Element::DocumentPicker(picker) => {
            input_identity(report, limits, &picker.label, &picker.name);
        }
        Element::NavigationList(list) => {
            required(report, "name", "Name", &list.name);
            let count = list.items.len();
            if count > limits.navigation_list_items {
                report.push(ValidationFinding::exceeded(
                    "items",
                    format!(
                        "Navigation list has {} items; the maximum is {}",
                        count, limits.navigation_list_items
                    ),
                    limits.navigation_list_items,
                    count,
                ));
            }
            for item in &list.items {
                action_target(report, "items.onClickAction", item.on_click_action.as_ref());
            }
            action_target(report, "onClickAction", list.on_click_action.as_ref());
        }
        Element::Footer(footer) => check_footer(report, footer),
        Element::If(block) => check_if(report, block, nested),
        Element::Switch(block) => check_switch(report, block, nested),
    }
}

fn check_selector(report: &mut ValidationReport, limits: &Limits, selector: &Selector) {
    input_identity(report, limits, &selector.label, &selector.name);
    if selector.data_source.is_empty() {
        report.push(ValidationFinding::missing(
            "dataSource",
            "At least one option or a data source is required",
        ));
    }
    action_target(report, "onSelectAction", selector.on_select_action.as_ref());
}

fn check_footer(report: &mut ValidationReport, footer: &Footer) {
    required(report, "label", "Label", &footer.label);
    match &footer.on_click_action {
        Some(action) => action_target(report, "onClickAction", Some(action)),
        None => report.push(ValidationFinding::missing(
            "onClickAction",
            "Action is required",
        )),
    }
}

fn check_if(
    report: &mut ValidationReport,
    block: &IfBlock,
    nested: &dyn Fn(&Element) -> ValidationReport,
) {
    required(report, "condition", "Condition", &block.condition);
    if block.then.is_empty() {
        report.push(
            ValidationFinding::new(
                Severity::Warning,
                FindingCode::MissingRequiredField,
                "Then branch is empty",
            )
            .on_field("then"),
        );
    }
    for (index, child) in block.then.iter().enumerate() {
        report.merge(nested(child), &format!("then[{}]: ", index + 1));
    }
    for (index, child) in block.otherwise.iter().enumerate() {
        report.merge(nested(child), &format!("else[{}]: ", index + 1));
    }
}

fn check_switch(
    report: &mut ValidationReport,
    block: &SwitchBlock,
    nested: &dyn Fn(&Element) -> ValidationReport,
) {
    required(report, "value", "Value", &block.value);
    if block.cases.is_empty() {
        report.push(ValidationFinding::missing(
            "cases",
            "At least one case is required",
        ));
    }
    for (case, children) in &block.cases {
        for (index, child) in children.iter().enumerate() {
            report.merge(nested(child), &format!("case \"{}\"[{}]: ", case, index + 1));
        }
    }
}

/// Label and name of a value-producing input.
fn input_identity(report: &mut ValidationReport, limits: &Limits, label: &str, name: &str) {
    required_text(report, "label", "Label", label, limits.input_label);
    required(report, "name", "Name", name);
}

fn helper_text(report: &mut ValidationReport, limits: &Limits, text: Option<&str>) {
    if let Some(text) = text {
        max_length(report, "helperText", "Helper text", text, limits.helper_text);
    }
}

/// A navigate action must name its target screen.
fn action_target(report: &mut ValidationReport, field: &str, action: Option<&Action>) {
    if let Some(action) = action {
        if action.name == ActionKind::Navigate && action.navigate_target().is_none() {
            report.push(ValidationFinding::missing(
                field,
                "Navigation target screen is required",
            ));
        }
    }
}

/// Reports an empty value; returns whether the value is present.
fn required(report: &mut ValidationReport, field: &str, what: &str, value: &str) -> bool {
    if value.trim().is_empty() {
        report.push(ValidationFinding::missing(field, format!("{} is required", what)));
        false
    } else {
        true
    }
}

fn required_text(
    report: &mut ValidationReport,
    field: &str,
    what: &str,
    value: &str,
    limit: usize,
) -> bool {
    required(report, field, what, value) && max_length(report, field, what, value, limit)
}

/// Reports a value longer than `limit` characters; returns whether it fits.
fn max_length(
    report: &mut ValidationReport,
    field: &str,
    what: &str,
    value: &str,
    limit: usize,
) -> bool {
    let current = char_count(value);
    if current > limit {
        report.push(ValidationFinding::exceeded(
            field,
            format!("{} exceeds {} characters ({})", what, limit, current),
            limit,
            current,
        ));
        false
    } else {
        true
    }
}

fn char_count(value: &str) -> usize {
    value.chars().count()
}
