//! Tests for snapshot ingestion, the element kind table and configuration loading.
mod common;
use common::*;
use formflow::editor::*;
use formflow::prelude::*;
use formflow::wire::FLOW_VERSION;

#[test]
fn test_parse_wrapped_and_bare_snapshots() {
    let wrapped = r#"{ "screens": [ { "id": "A", "title": "First", "elements": [
        { "type": "TextHeading", "text": "Hi" }
    ] } ] }"#;
    let bare = r#"[ { "id": "A", "title": "First", "elements": [
        { "type": "TextHeading", "text": "Hi" }
    ] } ]"#;

    let from_wrapped = parse_screens(wrapped).expect("Failed to parse wrapped snapshot");
    let from_bare = parse_screens(bare).expect("Failed to parse bare snapshot");
    assert_eq!(from_wrapped, from_bare);
    assert_eq!(from_wrapped[0], Screen::new("A", "First", vec![heading("Hi")]));
}

#[test]
fn test_parse_camel_case_attributes() {
    let json = r#"[ { "id": "A", "title": "A", "elements": [
        { "type": "TextInput", "label": "Age", "name": "age", "inputType": "number",
          "helperText": "In years", "minChars": 1 },
        { "type": "Dropdown", "label": "City", "name": "city",
          "dataSource": [ { "id": "ber", "title": "Berlin" } ] },
        { "type": "Footer", "label": "Go", "onClickAction": { "name": "navigate", "next": "B" } }
    ] } ]"#;
    let screens = parse_screens(json).unwrap();
    let elements = &screens[0].elements;

    match &elements[0] {
        Element::TextInput(input) => {
            assert_eq!(input.input_type, Some(TextInputType::Number));
            assert_eq!(input.helper_text.as_deref(), Some("In years"));
            assert_eq!(input.min_chars, Some(1));
        }
        other => panic!("Expected a text input, found {:?}", other),
    }
    match &elements[1] {
        Element::Dropdown(selector) => assert!(!selector.data_source.is_empty()),
        other => panic!("Expected a dropdown, found {:?}", other),
    }
    assert_eq!(elements[2].navigation_targets(), vec!["B"]);
}

#[test]
fn test_unknown_kind_is_rejected_with_position() {
    let json = r#"[ { "id": "WELCOME", "title": "Welcome", "elements": [
        { "type": "TextHeading", "text": "Hi" },
        { "type": "Carousel3D", "text": "Spin" }
    ] } ]"#;
    let error = parse_screens(json).unwrap_err();
    assert_eq!(
        error,
        CompileError::UnmappableElementKind {
            screen_id: "WELCOME".to_string(),
            position: 2,
            kind: "Carousel3D".to_string(),
        }
    );
    assert_eq!(
        error.to_string(),
        "Element 2 on screen 'WELCOME' has kind 'Carousel3D', which has no wire mapping"
    );
}

#[test]
fn test_unknown_kind_nested_in_branch_is_rejected() {
    let json = r#"[ { "id": "A", "title": "A", "elements": [
        { "type": "Switch", "value": "${form.x}", "cases": {
            "one": [ { "type": "TextBody", "text": "ok" } ],
            "two": [ { "type": "Hologram" } ]
        } }
    ] } ]"#;
    match parse_screens(json) {
        Err(CompileError::UnmappableElementKind { position, kind, .. }) => {
            assert_eq!(position, 1);
            assert_eq!(kind, "Hologram");
        }
        other => panic!("Expected an unmappable kind error, found {:?}", other),
    }
}

#[test]
fn test_missing_type_tag_is_invalid() {
    let json = r#"[ { "id": "A", "elements": [ { "text": "No type" } ] } ]"#;
    assert!(matches!(
        parse_screens(json),
        Err(CompileError::InvalidElement { position: 1, .. })
    ));
}

#[test]
fn test_malformed_attributes_are_invalid() {
    let json = r#"[ { "id": "A", "elements": [ { "type": "TextHeading", "text": 42 } ] } ]"#;
    match parse_screens(json) {
        Err(CompileError::InvalidElement { kind, .. }) => assert_eq!(kind, "TextHeading"),
        other => panic!("Expected an invalid element error, found {:?}", other),
    }
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        parse_screens("{ not json"),
        Err(CompileError::JsonParseError(_))
    ));
}

#[test]
fn test_kind_table_round_trip() {
    assert_eq!(ElementKind::ALL.len(), 26);
    for kind in ElementKind::ALL {
        assert_eq!(ElementKind::from_name(kind.name()), Some(*kind));
        assert_eq!(kind.to_string(), kind.name());
        // Input kinds, and only input kinds, advertise an example value.
        assert_eq!(
            kind.example_value().is_some(),
            kind.class() == ElementClass::Input,
            "{}",
            kind
        );
    }
    assert_eq!(ElementKind::from_name("Form"), None);
}

#[test]
fn test_control_elements_take_class_from_branches() {
    let static_if = Element::If(IfBlock {
        condition: "${data.vip}".to_string(),
        then: vec![heading("Welcome back")],
        otherwise: vec![body("Hello")],
    });
    assert!(!static_if.is_form_class());

    let input_if = Element::If(IfBlock {
        condition: "${data.vip}".to_string(),
        then: vec![heading("Welcome back")],
        otherwise: vec![text_input("name")],
    });
    assert!(input_if.is_form_class());

    assert!(footer_complete().is_form_class());
    assert!(!navigation_list("menu", &["B"]).is_form_class());
    assert!(!link("Terms").is_form_class());
}

#[test]
fn test_screen_helpers() {
    let screen = screen(
        "A",
        vec![
            text_input("name"),
            navigation_list("menu", &["C", "B"]),
            footer_navigate("B"),
        ],
    );
    assert!(!screen.is_terminal());
    assert_eq!(screen.navigation_targets(), vec!["C", "B"]);
    let names: Vec<_> = screen.named_fields().iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["name"]);
}

#[test]
fn test_into_screens_for_custom_editor_format() {
    struct Wizard {
        steps: Vec<&'static str>,
    }

    impl IntoScreens for Wizard {
        fn into_screens(self) -> std::result::Result<Vec<Screen>, CompileError> {
            Ok(self
                .steps
                .into_iter()
                .map(|step| screen(step, vec![heading(step)]))
                .collect())
        }
    }

    let wizard = Wizard {
        steps: vec!["ONE", "TWO"],
    };
    let compiler = Compiler::from_editor(wizard).unwrap().build();
    assert_eq!(compiler.screens().len(), 2);
    let document = compiler.compile().unwrap().document;
    assert_eq!(document.routing_model.unwrap()["ONE"], Vec::<String>::new());
}

#[test]
fn test_limits_from_partial_json() {
    let limits = Limits::from_json(r#"{ "heading_text": 60, "screens_per_document": 5 }"#)
        .expect("Failed to parse limits");
    assert_eq!(limits.heading_text, 60);
    assert_eq!(limits.screens_per_document, 5);
    assert_eq!(limits.body_text, Limits::default().body_text);
    assert_eq!(limits.caption_warning_threshold(), 360);
    assert_eq!(limits.components_warning_threshold(), 40);

    assert!(matches!(
        Limits::from_json(r#"{ "heading_text": "long" }"#),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        Limits::from_file("/nonexistent/limits.json"),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn test_document_save_and_load() {
    let document = compile_flow(&create_three_screen_flow()).unwrap();
    let path = std::env::temp_dir().join(format!("formflow_doc_{}.json", std::process::id()));
    let path = path.to_str().unwrap();

    document.save(path).expect("Failed to save document");
    let loaded = FlowDocument::from_file(path).expect("Failed to load document");
    std::fs::remove_file(path).ok();

    assert_eq!(loaded, document);
    assert_eq!(loaded.version, FLOW_VERSION);
    assert!(matches!(
        FlowDocument::from_file("/nonexistent/flow.json"),
        Err(DocumentError::Io { .. })
    ));
}

#[test]
fn test_pretty_and_compact_json_agree() {
    let document = compile_flow(&create_two_screen_flow()).unwrap();
    let compact = document.to_json(false).unwrap();
    let pretty = document.to_json(true).unwrap();
    assert!(!compact.contains('\n'));
    assert!(pretty.contains('\n'));
    assert_eq!(
        FlowDocument::from_json(&compact).unwrap(),
        FlowDocument::from_json(&pretty).unwrap()
    );
    // Routing model precedes screens in the serialized document.
    assert!(compact.find("\"routing_model\"").unwrap() < compact.find("\"screens\"").unwrap());
}
