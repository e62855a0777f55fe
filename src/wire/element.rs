use crate::collections::OrderedMap;
use crate::editor::{
    ActionKind, CalendarMode, DataSource, FontWeight, MediaSize, PhotoSource, ScaleType,
    TextInputType,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One node of a screen layout in the platform's wire format.
///
/// Optional attributes are left out of the JSON entirely when unset; booleans that
/// were set, whether `true` or `false`, are always written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ElementWire {
    TextHeading(TextWire),
    TextSubheading(TextWire),
    TextBody(BodyTextWire),
    TextCaption(BodyTextWire),
    RichText(TextWire),
    TextInput(TextInputWire),
    TextArea(TextAreaWire),
    CheckboxGroup(SelectorWire),
    RadioButtonsGroup(SelectorWire),
    ChipsSelector(SelectorWire),
    Dropdown(SelectorWire),
    OptIn(OptInWire),
    EmbeddedLink(EmbeddedLinkWire),
    DatePicker(DatePickerWire),
    CalendarPicker(CalendarPickerWire),
    Image(ImageWire),
    ImageCarousel(ImageCarouselWire),
    PhotoPicker(PhotoPickerWire),
    DocumentPicker(DocumentPickerWire),
    NavigationList(NavigationListWire),
    Footer(FooterWire),
    If(IfWire),
    Switch(SwitchWire),
    Form(FormWire),
}

impl ElementWire {
    /// The wire `type` tag of this node.
    pub fn type_name(&self) -> &'static str {
        match self {
            ElementWire::TextHeading(_) => "TextHeading",
            ElementWire::TextSubheading(_) => "TextSubheading",
            ElementWire::TextBody(_) => "TextBody",
            ElementWire::TextCaption(_) => "TextCaption",
            ElementWire::RichText(_) => "RichText",
            ElementWire::TextInput(_) => "TextInput",
            ElementWire::TextArea(_) => "TextArea",
            ElementWire::CheckboxGroup(_) => "CheckboxGroup",
            ElementWire::RadioButtonsGroup(_) => "RadioButtonsGroup",
            ElementWire::ChipsSelector(_) => "ChipsSelector",
            ElementWire::Dropdown(_) => "Dropdown",
            ElementWire::OptIn(_) => "OptIn",
            ElementWire::EmbeddedLink(_) => "EmbeddedLink",
            ElementWire::DatePicker(_) => "DatePicker",
            ElementWire::CalendarPicker(_) => "CalendarPicker",
            ElementWire::Image(_) => "Image",
            ElementWire::ImageCarousel(_) => "ImageCarousel",
            ElementWire::PhotoPicker(_) => "PhotoPicker",
            ElementWire::DocumentPicker(_) => "DocumentPicker",
            ElementWire::NavigationList(_) => "NavigationList",
            ElementWire::Footer(_) => "Footer",
            ElementWire::If(_) => "If",
            ElementWire::Switch(_) => "Switch",
            ElementWire::Form(_) => "Form",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TextWire {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BodyTextWire {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TextInputWire {
    pub label: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<TextInputType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_chars: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TextAreaWire {
    pub label: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SelectorWire {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub data_source: DataSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_selected_items: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selected_items: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_select_action: Option<ActionWire>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OptInWire {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_click_action: Option<ActionWire>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EmbeddedLinkWire {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_click_action: Option<ActionWire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DatePickerWire {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unavailable_dates: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_select_action: Option<ActionWire>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CalendarPickerWire {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<CalendarMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unavailable_dates: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_days: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_select_action: Option<ActionWire>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ImageWire {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<ScaleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ImageCarouselWire {
    pub images: Vec<CarouselImageWire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<ScaleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CarouselImageWire {
    pub src: String,
    pub alt_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PhotoPickerWire {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_source: Option<PhotoSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_size_kb: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_uploaded_photos: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_uploaded_photos: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DocumentPickerWire {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_size_kb: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_uploaded_documents: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_uploaded_documents: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_mime_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NavigationListWire {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub list_items: Vec<NavigationItemWire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_size: Option<MediaSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_click_action: Option<ActionWire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NavigationItemWire {
    pub id: String,
    pub main_content: MainContentWire,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_click_action: Option<ActionWire>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainContentWire {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FooterWire {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_click_action: Option<ActionWire>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfWire {
    pub condition: String,
    pub then: Vec<ElementWire>,
    #[serde(rename = "else", default, skip_serializing_if = "Option::is_none")]
    pub otherwise: Option<Vec<ElementWire>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchWire {
    pub value: String,
    pub cases: OrderedMap<String, Vec<ElementWire>>,
}

/// The container wrapping every form-class element of a screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormWire {
    pub name: String,
    pub children: Vec<ElementWire>,
}

/// An action in wire shape, e.g. `{"name": "navigate", "next": {...}, "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionWire {
    pub name: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<NextScreen>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<OrderedMap<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextScreen {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

impl NextScreen {
    pub fn screen(name: impl Into<String>) -> Self {
        Self {
            kind: "screen".to_string(),
            name: name.into(),
        }
    }
}
