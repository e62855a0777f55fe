//! Tests for the limit validator at element, screen and document level.
mod common;
use common::*;
use formflow::editor::*;
use formflow::prelude::*;
use formflow::validator::FindingCode;

#[test]
fn test_heading_at_limit_is_valid() {
    let report = validate_element(&heading(&"a".repeat(80)));
    assert!(report.is_empty());
}

#[test]
fn test_heading_over_limit() {
    let report = validate_element(&heading(&"a".repeat(81)));
    assert_eq!(report.errors.len(), 1);
    assert!(report.warnings.is_empty());

    let finding = &report.errors[0];
    assert_eq!(finding.code, FindingCode::LimitExceeded);
    assert_eq!(finding.limit, Some(80));
    assert_eq!(finding.current, Some(81));
    assert_eq!(finding.field.as_deref(), Some("text"));
    assert_eq!(finding.message, "Text exceeds 80 characters (81)");
}

#[test]
fn test_length_counts_characters_not_bytes() {
    // 80 two-byte characters fit the heading limit.
    let report = validate_element(&heading(&"é".repeat(80)));
    assert!(report.is_valid());
}

#[test]
fn test_empty_text_is_required() {
    for element in [heading(""), body("   "), caption("")] {
        let report = validate_element(&element);
        assert_eq!(report.errors.len(), 1, "{:?}", element);
        assert_eq!(report.errors[0].code, FindingCode::MissingRequiredField);
        assert_eq!(report.errors[0].message, "Text is required");
    }
}

#[test]
fn test_caption_warning_band() {
    let report = validate_element(&caption(&"c".repeat(360)));
    assert!(report.is_empty());

    let report = validate_element(&caption(&"c".repeat(361)));
    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].kind, Severity::Warning);
    assert_eq!(report.warnings[0].code, FindingCode::ApproachingLimit);

    let report = validate_element(&caption(&"c".repeat(401)));
    assert_eq!(report.errors.len(), 1);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_input_requires_label_and_name() {
    let input = Element::TextInput(TextInput::default());
    let report = validate_element(&input);
    let messages: Vec<_> = report.errors.iter().map(|f| f.message.as_str()).collect();
    assert_eq!(messages, vec!["Label is required", "Name is required"]);
}

#[test]
fn test_input_label_and_helper_text_limits() {
    let input = Element::EmailInput(TextInput {
        label: "L".repeat(41),
        name: "email".to_string(),
        helper_text: Some("h".repeat(81)),
        ..Default::default()
    });
    let report = validate_element(&input);
    let fields: Vec<_> = report.errors.iter().map(|f| f.field.as_deref()).collect();
    assert_eq!(fields, vec![Some("label"), Some("helperText")]);
    assert_eq!(report.errors[1].limit, Some(80));
}

#[test]
fn test_selector_requires_options() {
    let selector = Element::Dropdown(Selector {
        label: "Pick".to_string(),
        name: "choice".to_string(),
        ..Default::default()
    });
    let report = validate_element(&selector);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].field.as_deref(), Some("dataSource"));

    let bound = Element::Dropdown(Selector {
        label: "Pick".to_string(),
        name: "choice".to_string(),
        data_source: DataSource::Reference("${data.choices}".to_string()),
        ..Default::default()
    });
    assert!(validate_element(&bound).is_empty());
}

#[test]
fn test_footer_requires_label_and_action() {
    let report = validate_element(&Element::Footer(Footer::default()));
    let fields: Vec<_> = report.errors.iter().map(|f| f.field.as_deref()).collect();
    assert_eq!(fields, vec![Some("label"), Some("onClickAction")]);
}

#[test]
fn test_navigate_without_target_is_flagged() {
    let element = footer("Next", Action::new(ActionKind::Navigate));
    let report = validate_element(&element);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].message, "Navigation target screen is required");
}

#[test]
fn test_embedded_link_text_limit() {
    assert!(validate_element(&link("Terms")).is_empty());
    let report = validate_element(&link(&"t".repeat(26)));
    assert_eq!(report.errors[0].limit, Some(25));
}

#[test]
fn test_navigation_list_item_limit() {
    let targets: Vec<String> = (0..21).map(|i| format!("S{}", i)).collect();
    let targets: Vec<&str> = targets.iter().map(String::as_str).collect();
    let report = validate_element(&navigation_list("menu", &targets));
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].current, Some(21));
}

#[test]
fn test_if_branch_findings_are_prefixed() {
    let element = Element::If(IfBlock {
        condition: "${form.opt_in}".to_string(),
        then: vec![heading("Fine"), heading("")],
        otherwise: vec![caption(&"x".repeat(401))],
    });
    let report = validate_element(&element);
    let messages: Vec<_> = report.errors.iter().map(|f| f.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "then[2]: Text is required",
            "else[1]: Text exceeds 400 characters (401)"
        ]
    );
}

#[test]
fn test_if_with_empty_then_branch_warns() {
    let element = Element::If(IfBlock {
        condition: "${form.x}".to_string(),
        ..Default::default()
    });
    let report = validate_element(&element);
    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].field.as_deref(), Some("then"));
}

#[test]
fn test_switch_case_findings_are_prefixed() {
    let mut cases = formflow::collections::OrderedMap::default();
    cases.insert("gold".to_string(), vec![heading("Gold")]);
    cases.insert("silver".to_string(), vec![body("")]);
    let element = Element::Switch(SwitchBlock {
        value: "${form.tier}".to_string(),
        cases,
    });
    let report = validate_element(&element);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].message, "case \"silver\"[1]: Text is required");

    let empty = Element::Switch(SwitchBlock::default());
    let fields: Vec<_> = validate_element(&empty)
        .errors
        .iter()
        .map(|f| f.field.clone())
        .collect();
    assert_eq!(fields, vec![Some("value".to_string()), Some("cases".to_string())]);
}

#[test]
fn test_screen_component_count_error() {
    let elements = (0..51).map(|i| heading(&format!("Heading {}", i))).collect();
    let report = validate_screen(&screen("BIG", elements));
    assert_eq!(report.errors.len(), 1);
    assert!(report.warnings.is_empty());
    assert_eq!(report.errors[0].limit, Some(50));
    assert_eq!(report.errors[0].current, Some(51));
}

#[test]
fn test_screen_component_count_warning() {
    let elements = (0..41).map(|i| heading(&format!("Heading {}", i))).collect();
    let report = validate_screen(&screen("BUSY", elements));
    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].current, Some(41));

    let elements = (0..40).map(|i| heading(&format!("Heading {}", i))).collect();
    assert!(validate_screen(&screen("OK", elements)).is_empty());
}

#[test]
fn test_screen_form_component_limit() {
    let elements = (0..21).map(|i| text_input(&format!("field_{}", i))).collect();
    let report = validate_screen(&screen("FORM", elements));
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].limit, Some(20));
    assert_eq!(report.errors[0].current, Some(21));
}

#[test]
fn test_screen_embedded_link_and_footer_limits() {
    let report = validate_screen(&screen(
        "LINKS",
        vec![
            link("One"),
            link("Two"),
            link("Three"),
            footer_complete(),
            footer_complete(),
        ],
    ));
    let limits: Vec<_> = report.errors.iter().map(|f| f.limit).collect();
    assert_eq!(limits, vec![Some(2), Some(1)]);
}

#[test]
fn test_screen_prefixes_component_position() {
    let report = validate_screen(&screen("A", vec![heading("Fine"), heading("")]));
    assert_eq!(report.errors[0].message, "Component 2: Text is required");
}

#[test]
fn test_document_prefixes_screen_title() {
    let screens = vec![Screen::new(
        "A",
        "Contact details",
        vec![heading(&"a".repeat(81)), footer_complete()],
    )];
    let report = validate_document(&screens);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(
        report.errors[0].message,
        "Screen \"Contact details\": Component 1: Text exceeds 80 characters (81)"
    );
    assert_eq!(
        report.errors[0].to_string(),
        "error: Screen \"Contact details\": Component 1: Text exceeds 80 characters (81)"
    );
}

#[test]
fn test_document_screen_limit() {
    let screens: Vec<Screen> = (0..21)
        .map(|i| screen(&format!("S{}", i), vec![heading("Hi")]))
        .collect();
    let report = validate_document(&screens);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].limit, Some(20));
    assert_eq!(report.errors[0].current, Some(21));
}

#[test]
fn test_document_reference_checks() {
    let screens = vec![
        screen("A", vec![footer_navigate("MISSING")]),
        screen("A", vec![footer_complete()]),
    ];
    let report = validate_document(&screens);
    let codes: Vec<_> = report.errors.iter().map(|f| f.code).collect();
    assert_eq!(
        codes,
        vec![FindingCode::InvalidReference, FindingCode::InvalidReference]
    );
    assert!(report.errors[1].message.contains("\"MISSING\""));
}

#[test]
fn test_valid_flow_has_no_findings() {
    assert!(validate_document(&create_three_screen_flow()).is_empty());
    assert!(validate_document(&create_two_screen_flow()).is_empty());
}

#[test]
fn test_custom_limits() {
    let limits = Limits {
        heading_text: 10,
        ..Limits::default()
    };
    let validator = Validator::new(limits);
    let report = validator.validate_element(&heading("Eleven char"));
    assert_eq!(report.errors[0].limit, Some(10));
    assert!(validate_element(&heading("Eleven char")).is_empty());
}

#[test]
fn test_report_serializes_for_the_editor() {
    let report = validate_element(&heading(&"a".repeat(81)));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["errors"][0]["kind"], "error");
    assert_eq!(json["errors"][0]["code"], "LimitExceeded");
    assert_eq!(json["errors"][0]["limit"], 80);
    assert_eq!(json["warnings"], serde_json::json!([]));
}

#[test]
fn test_huge_configured_limits_do_not_overflow() {
    let json = r#"{
        "components_per_screen": 18446744073709551615,
        "caption_text": 1000000000000000000
    }"#;
    let limits = Limits::from_json(json).expect("Failed to parse limits");
    assert_eq!(limits.components_warning_threshold(), usize::MAX / 100);

    let validator = Validator::new(limits);
    assert!(validator.validate_screen(&screen("A", vec![heading("Hi")])).is_empty());
    assert!(validator.validate_element(&caption("hello")).is_empty());
}
