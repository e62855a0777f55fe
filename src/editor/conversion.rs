use super::element::Element;
use super::kind::ElementKind;
use super::raw::{EditorSnapshot, RawScreen};
use super::screen::Screen;
use crate::error::CompileError;
use serde_json::Value;

/// A trait for editor formats that can be converted into formflow `Screen`s.
///
/// This is the extension point for hosts whose editor stores screens in its own
/// shape: implement it on the host's document type and hand the result to
/// [`crate::compiler::Compiler::builder`].
///
/// # Example
///
/// ```rust,no_run
/// use formflow::editor::{Element, HeadingText, IntoScreens, Screen};
/// use formflow::error::CompileError;
///
/// struct Page { key: String, headline: String }
/// struct Wizard { pages: Vec<Page> }
///
/// impl IntoScreens for Wizard {
///     fn into_screens(self) -> Result<Vec<Screen>, CompileError> {
///         Ok(self
///             .pages
///             .into_iter()
///             .map(|page| {
///                 let heading = Element::TextHeading(HeadingText {
///                     text: page.headline.clone(),
///                     visible: None,
///                 });
///                 Screen::new(page.key, page.headline, vec![heading])
///             })
///             .collect())
///     }
/// }
/// ```
pub trait IntoScreens {
    /// Consumes the object and converts it into an ordered screen list.
    fn into_screens(self) -> Result<Vec<Screen>, CompileError>;
}

impl IntoScreens for Vec<Screen> {
    fn into_screens(self) -> Result<Vec<Screen>, CompileError> {
        Ok(self)
    }
}

impl IntoScreens for EditorSnapshot {
    fn into_screens(self) -> Result<Vec<Screen>, CompileError> {
        self.into_raw_screens()
            .into_iter()
            .map(convert_screen)
            .collect()
    }
}

/// Parses an editor JSON snapshot into typed screens.
///
/// Every element, including those nested in `If`/`Switch` branches, must carry a known
/// `type` tag; the first unknown one aborts with [`CompileError::UnmappableElementKind`].
pub fn parse_screens(json: &str) -> Result<Vec<Screen>, CompileError> {
    let snapshot: EditorSnapshot =
        serde_json::from_str(json).map_err(|e| CompileError::JsonParseError(e.to_string()))?;
    snapshot.into_screens()
}

fn convert_screen(raw: RawScreen) -> Result<Screen, CompileError> {
    let elements = raw
        .elements
        .into_iter()
        .enumerate()
        .map(|(index, value)| convert_element(&raw.id, index + 1, value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Screen {
        id: raw.id,
        title: raw.title,
        elements,
    })
}

fn convert_element(
    screen_id: &str,
    position: usize,
    value: Value,
) -> Result<Element, CompileError> {
    let kind = check_kind(screen_id, position, &value)?;
    serde_json::from_value(value).map_err(|e| CompileError::InvalidElement {
        screen_id: screen_id.to_string(),
        position,
        kind: kind.name().to_string(),
        message: e.to_string(),
    })
}

/// Resolves the `type` tag of an element and, for control elements, of every element
/// in its branches.
fn check_kind(
    screen_id: &str,
    position: usize,
    value: &Value,
) -> Result<ElementKind, CompileError> {
    let tag = value.get("type").and_then(Value::as_str).ok_or_else(|| {
        CompileError::InvalidElement {
            screen_id: screen_id.to_string(),
            position,
            kind: "<untyped>".to_string(),
            message: "element has no string `type` tag".to_string(),
        }
    })?;

    let kind = ElementKind::from_name(tag).ok_or_else(|| CompileError::UnmappableElementKind {
        screen_id: screen_id.to_string(),
        position,
        kind: tag.to_string(),
    })?;

    let nested: Vec<&Value> = match kind {
        ElementKind::If => ["then", "else"]
            .iter()
            .filter_map(|key| value.get(*key).and_then(Value::as_array))
            .flatten()
            .collect(),
        ElementKind::Switch => value
            .get("cases")
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|cases| cases.values())
            .filter_map(Value::as_array)
            .flatten()
            .collect(),
        _ => Vec::new(),
    };
    for child in nested {
        check_kind(screen_id, position, child)?;
    }

    Ok(kind)
}
