use super::kind::{ElementClass, ElementKind};
use crate::collections::OrderedMap;
use serde::{Deserialize, Serialize};

/// One typed UI unit of a screen, exactly as the editor holds it.
///
/// The union is closed: every kind the editor can produce has a variant here, and
/// every consumer (mapper, validator, grouper) matches on it exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Element {
    TextHeading(HeadingText),
    TextSubheading(HeadingText),
    TextBody(BodyText),
    TextCaption(BodyText),
    RichText(RichText),
    TextInput(TextInput),
    EmailInput(TextInput),
    PasswordInput(TextInput),
    PhoneInput(TextInput),
    TextArea(TextArea),
    CheckboxGroup(Selector),
    RadioButtonsGroup(Selector),
    ChipsSelector(Selector),
    Dropdown(Selector),
    OptIn(OptIn),
    EmbeddedLink(EmbeddedLink),
    DatePicker(DatePicker),
    CalendarPicker(CalendarPicker),
    Image(Image),
    ImageCarousel(ImageCarousel),
    PhotoPicker(PhotoPicker),
    DocumentPicker(DocumentPicker),
    NavigationList(NavigationList),
    Footer(Footer),
    If(IfBlock),
    Switch(SwitchBlock),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::TextHeading(_) => ElementKind::TextHeading,
            Element::TextSubheading(_) => ElementKind::TextSubheading,
            Element::TextBody(_) => ElementKind::TextBody,
            Element::TextCaption(_) => ElementKind::TextCaption,
            Element::RichText(_) => ElementKind::RichText,
            Element::TextInput(_) => ElementKind::TextInput,
            Element::EmailInput(_) => ElementKind::EmailInput,
            Element::PasswordInput(_) => ElementKind::PasswordInput,
            Element::PhoneInput(_) => ElementKind::PhoneInput,
            Element::TextArea(_) => ElementKind::TextArea,
            Element::CheckboxGroup(_) => ElementKind::CheckboxGroup,
            Element::RadioButtonsGroup(_) => ElementKind::RadioButtonsGroup,
            Element::ChipsSelector(_) => ElementKind::ChipsSelector,
            Element::Dropdown(_) => ElementKind::Dropdown,
            Element::OptIn(_) => ElementKind::OptIn,
            Element::EmbeddedLink(_) => ElementKind::EmbeddedLink,
            Element::DatePicker(_) => ElementKind::DatePicker,
            Element::CalendarPicker(_) => ElementKind::CalendarPicker,
            Element::Image(_) => ElementKind::Image,
            Element::ImageCarousel(_) => ElementKind::ImageCarousel,
            Element::PhotoPicker(_) => ElementKind::PhotoPicker,
            Element::DocumentPicker(_) => ElementKind::DocumentPicker,
            Element::NavigationList(_) => ElementKind::NavigationList,
            Element::Footer(_) => ElementKind::Footer,
            Element::If(_) => ElementKind::If,
            Element::Switch(_) => ElementKind::Switch,
        }
    }

    /// Whether this element belongs inside the synthesized form container.
    ///
    /// Control elements inherit membership from their branches: an `If` that can
    /// render an input must be submitted with the form.
    pub fn is_form_class(&self) -> bool {
        match self.kind().class() {
            ElementClass::Static => false,
            ElementClass::Input | ElementClass::Footer => true,
            ElementClass::Control => self.branches().any(Element::is_form_class),
        }
    }

    /// Direct children of a control element, in branch order. Empty for every other kind.
    pub fn branches(&self) -> Box<dyn Iterator<Item = &Element> + '_> {
        match self {
            Element::If(block) => Box::new(block.then.iter().chain(block.otherwise.iter())),
            Element::Switch(block) => Box::new(block.cases.values().flatten()),
            _ => Box::new(std::iter::empty()),
        }
    }

    /// Visits this element and every element nested in its branches, depth first.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        visit(self);
        for child in self.branches() {
            child.walk(visit);
        }
    }

    /// The name under which this element's value is submitted, if it produces one.
    pub fn field_name(&self) -> Option<&str> {
        let name = match self {
            Element::TextInput(input)
            | Element::EmailInput(input)
            | Element::PasswordInput(input)
            | Element::PhoneInput(input) => &input.name,
            Element::TextArea(area) => &area.name,
            Element::CheckboxGroup(selector)
            | Element::RadioButtonsGroup(selector)
            | Element::ChipsSelector(selector)
            | Element::Dropdown(selector) => &selector.name,
            Element::OptIn(opt_in) => &opt_in.name,
            Element::DatePicker(picker) => &picker.name,
            Element::CalendarPicker(picker) => &picker.name,
            Element::PhotoPicker(picker) => &picker.name,
            Element::DocumentPicker(picker) => &picker.name,
            Element::TextHeading(_)
            | Element::TextSubheading(_)
            | Element::TextBody(_)
            | Element::TextCaption(_)
            | Element::RichText(_)
            | Element::EmbeddedLink(_)
            | Element::Image(_)
            | Element::ImageCarousel(_)
            | Element::NavigationList(_)
            | Element::Footer(_)
            | Element::If(_)
            | Element::Switch(_) => return None,
        };
        Some(name.as_str()).filter(|n| !n.is_empty())
    }

    /// Screen ids this element (not its branches) can navigate to, in declaration order.
    pub fn navigation_targets(&self) -> Vec<&str> {
        match self {
            Element::Footer(footer) => footer
                .on_click_action
                .as_ref()
                .and_then(Action::navigate_target)
                .into_iter()
                .collect(),
            Element::NavigationList(list) => list
                .items
                .iter()
                .filter_map(|item| item.on_click_action.as_ref())
                .chain(list.on_click_action.as_ref())
                .filter_map(Action::navigate_target)
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Text of a heading or subheading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingText {
    #[serde(default)]
    pub text: String,
    pub visible: Option<bool>,
}

/// Body text or caption.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyText {
    #[serde(default)]
    pub text: String,
    pub font_weight: Option<FontWeight>,
    pub strikethrough: Option<bool>,
    pub markdown: Option<bool>,
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichText {
    #[serde(default)]
    pub text: String,
    pub visible: Option<bool>,
}

/// A single-line text input. Shared by the email, password and phone subtypes,
/// which differ only in the `input-type` they compile to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInput {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub name: String,
    pub input_type: Option<TextInputType>,
    pub required: Option<bool>,
    pub min_chars: Option<u32>,
    pub max_chars: Option<u32>,
    pub helper_text: Option<String>,
    pub init_value: Option<String>,
    pub pattern: Option<String>,
    pub enabled: Option<bool>,
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextArea {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub name: String,
    pub required: Option<bool>,
    pub max_length: Option<u32>,
    pub helper_text: Option<String>,
    pub init_value: Option<String>,
    pub enabled: Option<bool>,
    pub visible: Option<bool>,
}

/// Checkbox group, radio group, chips selector or dropdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub data_source: DataSource,
    pub required: Option<bool>,
    /// Only meaningful for multi-select kinds.
    pub min_selected_items: Option<u32>,
    pub max_selected_items: Option<u32>,
    pub enabled: Option<bool>,
    pub visible: Option<bool>,
    pub on_select_action: Option<Action>,
}

/// Options of a selector: either listed inline or bound to a data reference
/// such as `${data.options}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataSource {
    Options(Vec<SelectOption>),
    Reference(String),
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Options(Vec::new())
    }
}

impl DataSource {
    pub fn is_empty(&self) -> bool {
        match self {
            DataSource::Options(options) => options.is_empty(),
            DataSource::Reference(reference) => reference.trim().is_empty(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptIn {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub name: String,
    pub required: Option<bool>,
    pub visible: Option<bool>,
    pub on_click_action: Option<Action>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedLink {
    #[serde(default)]
    pub text: String,
    pub on_click_action: Option<Action>,
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatePicker {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub name: String,
    pub helper_text: Option<String>,
    pub required: Option<bool>,
    pub enabled: Option<bool>,
    pub visible: Option<bool>,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub unavailable_dates: Option<Vec<String>>,
    pub init_value: Option<String>,
    pub on_select_action: Option<Action>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarPicker {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub name: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub helper_text: Option<String>,
    pub required: Option<bool>,
    pub enabled: Option<bool>,
    pub visible: Option<bool>,
    pub mode: Option<CalendarMode>,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub unavailable_dates: Option<Vec<String>>,
    pub include_days: Option<Vec<String>>,
    pub min_days: Option<u32>,
    pub max_days: Option<u32>,
    pub on_select_action: Option<Action>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub src: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub scale_type: Option<ScaleType>,
    pub aspect_ratio: Option<f64>,
    pub alt_text: Option<String>,
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageCarousel {
    #[serde(default)]
    pub images: Vec<CarouselImage>,
    pub aspect_ratio: Option<String>,
    pub scale_type: Option<ScaleType>,
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselImage {
    pub src: String,
    #[serde(default)]
    pub alt_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoPicker {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub photo_source: Option<PhotoSource>,
    pub max_file_size_kb: Option<u32>,
    pub min_uploaded_photos: Option<u32>,
    pub max_uploaded_photos: Option<u32>,
    pub enabled: Option<bool>,
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPicker {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub max_file_size_kb: Option<u32>,
    pub min_uploaded_documents: Option<u32>,
    pub max_uploaded_documents: Option<u32>,
    pub allowed_mime_types: Option<Vec<String>>,
    pub enabled: Option<bool>,
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationList {
    #[serde(default)]
    pub name: String,
    pub label: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<NavigationItem>,
    pub media_size: Option<MediaSize>,
    /// List-level action, fired alongside any item-level action.
    pub on_click_action: Option<Action>,
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub metadata: Option<String>,
    pub badge: Option<String>,
    pub tags: Option<Vec<String>>,
    pub on_click_action: Option<Action>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    #[serde(default)]
    pub label: String,
    pub left_caption: Option<String>,
    pub center_caption: Option<String>,
    pub right_caption: Option<String>,
    pub enabled: Option<bool>,
    pub on_click_action: Option<Action>,
}

impl Footer {
    pub fn completes_flow(&self) -> bool {
        self.on_click_action
            .as_ref()
            .is_some_and(|action| action.name == ActionKind::Complete)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IfBlock {
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub then: Vec<Element>,
    #[serde(default, rename = "else")]
    pub otherwise: Vec<Element>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchBlock {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub cases: OrderedMap<String, Vec<Element>>,
}

/// An action attached to a footer, link, list item or selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub name: ActionKind,
    /// Target screen id for `navigate`.
    pub next: Option<String>,
    /// Target URL for `open_url`.
    pub url: Option<String>,
    pub payload: Option<OrderedMap<String, serde_json::Value>>,
}

impl Action {
    pub fn new(name: ActionKind) -> Self {
        Self {
            name,
            next: None,
            url: None,
            payload: None,
        }
    }

    pub fn navigate(target: impl Into<String>) -> Self {
        Self {
            next: Some(target.into()),
            ..Self::new(ActionKind::Navigate)
        }
    }

    pub fn complete() -> Self {
        Self::new(ActionKind::Complete)
    }

    /// The target screen id when this is a navigate action with a target.
    pub fn navigate_target(&self) -> Option<&str> {
        match self.name {
            ActionKind::Navigate => self.next.as_deref().filter(|t| !t.is_empty()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Navigate,
    Complete,
    DataExchange,
    UpdateData,
    OpenUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Bold,
    Italic,
    BoldItalic,
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextInputType {
    Text,
    Number,
    Email,
    Password,
    Passcode,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarMode {
    Single,
    Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    Cover,
    Contain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoSource {
    CameraGallery,
    Camera,
    Gallery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaSize {
    Regular,
    Large,
}
