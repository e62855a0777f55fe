//! Common test utilities for building editor screens.
use formflow::editor::*;

#[allow(dead_code)]
pub fn heading(text: &str) -> Element {
    Element::TextHeading(HeadingText {
        text: text.to_string(),
        visible: None,
    })
}

#[allow(dead_code)]
pub fn body(text: &str) -> Element {
    Element::TextBody(BodyText {
        text: text.to_string(),
        ..Default::default()
    })
}

#[allow(dead_code)]
pub fn caption(text: &str) -> Element {
    Element::TextCaption(BodyText {
        text: text.to_string(),
        ..Default::default()
    })
}

#[allow(dead_code)]
pub fn image(src: &str) -> Element {
    Element::Image(Image {
        src: src.to_string(),
        ..Default::default()
    })
}

#[allow(dead_code)]
pub fn text_input(name: &str) -> Element {
    Element::TextInput(TextInput {
        label: format!("Your {}", name),
        name: name.to_string(),
        ..Default::default()
    })
}

#[allow(dead_code)]
pub fn email_input(name: &str) -> Element {
    Element::EmailInput(TextInput {
        label: "Email".to_string(),
        name: name.to_string(),
        ..Default::default()
    })
}

#[allow(dead_code)]
pub fn date_picker(name: &str) -> Element {
    Element::DatePicker(DatePicker {
        label: "Date".to_string(),
        name: name.to_string(),
        ..Default::default()
    })
}

#[allow(dead_code)]
pub fn options(ids: &[&str]) -> DataSource {
    DataSource::Options(
        ids.iter()
            .map(|id| SelectOption {
                id: id.to_string(),
                title: id.to_uppercase(),
                ..Default::default()
            })
            .collect(),
    )
}

#[allow(dead_code)]
pub fn radio(name: &str) -> Element {
    Element::RadioButtonsGroup(Selector {
        label: "Pick one".to_string(),
        name: name.to_string(),
        data_source: options(&["a", "b"]),
        ..Default::default()
    })
}

#[allow(dead_code)]
pub fn link(text: &str) -> Element {
    Element::EmbeddedLink(EmbeddedLink {
        text: text.to_string(),
        on_click_action: Some(Action {
            url: Some("https://example.com".to_string()),
            ..Action::new(ActionKind::OpenUrl)
        }),
        visible: None,
    })
}

#[allow(dead_code)]
pub fn footer(label: &str, action: Action) -> Element {
    Element::Footer(Footer {
        label: label.to_string(),
        on_click_action: Some(action),
        ..Default::default()
    })
}

#[allow(dead_code)]
pub fn footer_navigate(target: &str) -> Element {
    footer("Continue", Action::navigate(target))
}

#[allow(dead_code)]
pub fn footer_complete() -> Element {
    footer("Done", Action::complete())
}

#[allow(dead_code)]
pub fn navigation_list(name: &str, targets: &[&str]) -> Element {
    Element::NavigationList(NavigationList {
        name: name.to_string(),
        items: targets
            .iter()
            .enumerate()
            .map(|(index, target)| NavigationItem {
                id: format!("item_{}", index),
                title: format!("Go to {}", target),
                on_click_action: Some(Action::navigate(*target)),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    })
}

/// A screen whose title equals its id.
#[allow(dead_code)]
pub fn screen(id: &str, elements: Vec<Element>) -> Screen {
    Screen::new(id, id, elements)
}

/// Two screens: A collects an email and navigates to B, B completes the flow.
#[allow(dead_code)]
pub fn create_two_screen_flow() -> Vec<Screen> {
    vec![
        screen("A", vec![email_input("email"), footer_navigate("B")]),
        screen("B", vec![heading("Thanks"), footer_complete()]),
    ]
}

/// Three screens: two collecting screens followed by a summary screen that navigates on.
#[allow(dead_code)]
pub fn create_three_screen_flow() -> Vec<Screen> {
    vec![
        screen(
            "PERSONAL",
            vec![
                heading("About you"),
                text_input("first_name"),
                email_input("email"),
                footer_navigate("BOOKING"),
            ],
        ),
        screen(
            "BOOKING",
            vec![
                date_picker("visit_date"),
                text_input("first_name"),
                radio("slot"),
                footer_navigate("CONFIRM"),
            ],
        ),
        screen("CONFIRM", vec![body("Please confirm"), footer_complete()]),
    ]
}
