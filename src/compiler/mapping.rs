use crate::collections::OrderedMap;
use crate::editor::{
    Action, ActionKind, BodyText, Element, Footer, HeadingText, NamedField, NavigationList,
    Screen, Selector, TextInput, TextInputType,
};
use crate::wire::*;
use serde_json::Value;

use super::schema::collect_named_fields;

/// Screen-level facts the mapper needs to build footer payloads.
#[derive(Debug, Clone, Default)]
pub struct MappingContext<'a> {
    /// Named fields of the screen being compiled.
    pub current_fields: Vec<NamedField<'a>>,
    /// Union of the named fields of every earlier screen.
    pub prior_fields: Vec<NamedField<'a>>,
}

impl<'a> MappingContext<'a> {
    pub fn for_screen(previous: &'a [Screen], screen: &'a Screen) -> Self {
        Self::with_prior_fields(screen, collect_named_fields(previous))
    }

    /// Builds the context from prior fields the caller already collected.
    pub fn with_prior_fields(screen: &'a Screen, prior_fields: Vec<NamedField<'a>>) -> Self {
        Self {
            current_fields: screen.named_fields(),
            prior_fields,
        }
    }
}

/// Translates one editor element into its wire node.
pub fn map_element(element: &Element, ctx: &MappingContext<'_>) -> ElementWire {
    match element {
        Element::TextHeading(heading) => ElementWire::TextHeading(map_heading(heading)),
        Element::TextSubheading(heading) => ElementWire::TextSubheading(map_heading(heading)),
        Element::TextBody(body) => ElementWire::TextBody(map_body(body)),
        Element::TextCaption(caption) => ElementWire::TextCaption(map_body(caption)),
        Element::RichText(rich) => ElementWire::RichText(TextWire {
            text: rich.text.clone(),
            visible: rich.visible,
        }),
        Element::TextInput(input) => {
            ElementWire::TextInput(map_text_input(input, input.input_type))
        }
        Element::EmailInput(input) => {
            ElementWire::TextInput(map_text_input(input, Some(TextInputType::Email)))
        }
        Element::PasswordInput(input) => {
            ElementWire::TextInput(map_text_input(input, Some(TextInputType::Password)))
        }
        Element::PhoneInput(input) => {
            ElementWire::TextInput(map_text_input(input, Some(TextInputType::Phone)))
        }
        Element::TextArea(area) => ElementWire::TextArea(TextAreaWire {
            label: area.label.clone(),
            name: area.name.clone(),
            required: area.required,
            max_length: area.max_length,
            helper_text: area.helper_text.clone(),
            init_value: area.init_value.clone(),
            enabled: area.enabled,
            visible: area.visible,
        }),
        Element::CheckboxGroup(selector) => {
            ElementWire::CheckboxGroup(map_selector(selector, true))
        }
        Element::RadioButtonsGroup(selector) => {
            ElementWire::RadioButtonsGroup(map_selector(selector, false))
        }
        Element::ChipsSelector(selector) => {
            ElementWire::ChipsSelector(map_selector(selector, true))
        }
        Element::Dropdown(selector) => ElementWire::Dropdown(map_selector(selector, false)),
        Element::OptIn(opt_in) => ElementWire::OptIn(OptInWire {
            name: opt_in.name.clone(),
            label: opt_in.label.clone(),
            required: opt_in.required,
            visible: opt_in.visible,
            on_click_action: opt_in.on_click_action.as_ref().map(map_action),
        }),
        Element::EmbeddedLink(link) => ElementWire::EmbeddedLink(EmbeddedLinkWire {
            text: link.text.clone(),
            on_click_action: link.on_click_action.as_ref().map(map_action),
            visible: link.visible,
        }),
        Element::DatePicker(picker) => ElementWire::DatePicker(DatePickerWire {
            name: picker.name.clone(),
            label: picker.label.clone(),
            helper_text: picker.helper_text.clone(),
            required: picker.required,
            enabled: picker.enabled,
            visible: picker.visible,
            min_date: picker.min_date.clone(),
            max_date: picker.max_date.clone(),
            unavailable_dates: picker.unavailable_dates.clone(),
            init_value: picker.init_value.clone(),
            on_select_action: picker.on_select_action.as_ref().map(map_action),
        }),
        Element::CalendarPicker(picker) => ElementWire::CalendarPicker(CalendarPickerWire {
            name: picker.name.clone(),
            label: picker.label.clone(),
            title: picker.title.clone(),
            description: picker.description.clone(),
            helper_text: picker.helper_text.clone(),
            required: picker.required,
            enabled: picker.enabled,
            visible: picker.visible,
            mode: picker.mode,
            min_date: picker.min_date.clone(),
            max_date: picker.max_date.clone(),
            unavailable_dates: picker.unavailable_dates.clone(),
            include_days: picker.include_days.clone(),
            min_days: picker.min_days,
            max_days: picker.max_days,
            on_select_action: picker.on_select_action.as_ref().map(map_action),
        }),
        Element::Image(image) => ElementWire::Image(ImageWire {
            src: image.src.clone(),
            width: image.width,
            height: image.height,
            scale_type: image.scale_type,
            aspect_ratio: image.aspect_ratio,
            alt_text: image.alt_text.clone(),
            visible: image.visible,
        }),
        Element::ImageCarousel(carousel) => ElementWire::ImageCarousel(ImageCarouselWire {
            images: carousel
                .images
                .iter()
                .map(|image| CarouselImageWire {
                    src: image.src.clone(),
                    alt_text: image.alt_text.clone(),
                })
                .collect(),
            aspect_ratio: carousel.aspect_ratio.clone(),
            scale_type: carousel.scale_type,
            visible: carousel.visible,
        }),
        Element::PhotoPicker(picker) => ElementWire::PhotoPicker(PhotoPickerWire {
            name: picker.name.clone(),
            label: picker.label.clone(),
            description: picker.description.clone(),
            photo_source: picker.photo_source,
            max_file_size_kb: picker.max_file_size_kb,
            min_uploaded_photos: picker.min_uploaded_photos,
            max_uploaded_photos: picker.max_uploaded_photos,
            enabled: picker.enabled,
            visible: picker.visible,
        }),
        Element::DocumentPicker(picker) => ElementWire::DocumentPicker(DocumentPickerWire {
            name: picker.name.clone(),
            label: picker.label.clone(),
            description: picker.description.clone(),
            max_file_size_kb: picker.max_file_size_kb,
            min_uploaded_documents: picker.min_uploaded_documents,
            max_uploaded_documents: picker.max_uploaded_documents,
            allowed_mime_types: picker.allowed_mime_types.clone(),
            enabled: picker.enabled,
            visible: picker.visible,
        }),
        Element::NavigationList(list) => ElementWire::NavigationList(map_navigation_list(list)),
        Element::Footer(footer) => ElementWire::Footer(map_footer(footer, ctx)),
        Element::If(block) => ElementWire::If(IfWire {
            condition: block.condition.clone(),
            then: map_all(&block.then, ctx),
            otherwise: (!block.otherwise.is_empty()).then(|| map_all(&block.otherwise, ctx)),
        }),
        Element::Switch(block) => ElementWire::Switch(SwitchWire {
            value: block.value.clone(),
            cases: block
                .cases
                .iter()
                .map(|(case, children)| (case.clone(), map_all(children, ctx)))
                .collect(),
        }),
    }
}

fn map_all(elements: &[Element], ctx: &MappingContext<'_>) -> Vec<ElementWire> {
    elements.iter().map(|e| map_element(e, ctx)).collect()
}

fn map_heading(heading: &HeadingText) -> TextWire {
    TextWire {
        text: heading.text.clone(),
        visible: heading.visible,
    }
}

fn map_body(body: &BodyText) -> BodyTextWire {
    BodyTextWire {
        text: body.text.clone(),
        font_weight: body.font_weight,
        strikethrough: body.strikethrough,
        markdown: body.markdown,
        visible: body.visible,
    }
}

/// All text input subtypes share one wire type; `input_type` tells them apart.
fn map_text_input(input: &TextInput, input_type: Option<TextInputType>) -> TextInputWire {
    TextInputWire {
        label: input.label.clone(),
        name: input.name.clone(),
        input_type,
        required: input.required,
        min_chars: input.min_chars,
        max_chars: input.max_chars,
        helper_text: input.helper_text.clone(),
        init_value: input.init_value.clone(),
        pattern: input.pattern.clone(),
        enabled: input.enabled,
        visible: input.visible,
    }
}

/// Selection bounds only exist on the wire for multi-select kinds.
fn map_selector(selector: &Selector, multi_select: bool) -> SelectorWire {
    SelectorWire {
        name: selector.name.clone(),
        label: selector.label.clone(),
        description: selector.description.clone(),
        data_source: selector.data_source.clone(),
        required: selector.required,
        min_selected_items: selector.min_selected_items.filter(|_| multi_select),
        max_selected_items: selector.max_selected_items.filter(|_| multi_select),
        enabled: selector.enabled,
        visible: selector.visible,
        on_select_action: selector.on_select_action.as_ref().map(map_action),
    }
}

fn map_navigation_list(list: &NavigationList) -> NavigationListWire {
    NavigationListWire {
        name: list.name.clone(),
        label: list.label.clone(),
        description: list.description.clone(),
        list_items: list
            .items
            .iter()
            .map(|item| NavigationItemWire {
                id: item.id.clone(),
                main_content: MainContentWire {
                    title: item.title.clone(),
                    description: item.description.clone(),
                    metadata: item.metadata.clone(),
                },
                badge: item.badge.clone(),
                tags: item.tags.clone(),
                on_click_action: item.on_click_action.as_ref().map(map_action),
            })
            .collect(),
        media_size: list.media_size,
        on_click_action: list.on_click_action.as_ref().map(map_action),
        visible: list.visible,
    }
}

fn map_footer(footer: &Footer, ctx: &MappingContext<'_>) -> FooterWire {
    let on_click_action = footer.on_click_action.as_ref().map(|action| match action.name {
        ActionKind::Navigate | ActionKind::Complete => ActionWire {
            payload: Some(footer_payload(action, ctx)),
            ..map_action(action)
        },
        _ => map_action(action),
    });

    FooterWire {
        label: footer.label.clone(),
        left_caption: footer.left_caption.clone(),
        center_caption: footer.center_caption.clone(),
        right_caption: footer.right_caption.clone(),
        enabled: footer.enabled,
        on_click_action,
    }
}

/// Payload submitted by a footer: the current screen's fields as form references and,
/// when the flow completes, every earlier screen's fields as data references. Entries
/// the editor declared itself follow, unless the key is already taken.
fn footer_payload(action: &Action, ctx: &MappingContext<'_>) -> OrderedMap<String, Value> {
    let mut payload = OrderedMap::default();

    for field in &ctx.current_fields {
        payload
            .entry(field.name.to_string())
            .or_insert_with(|| form_reference(field.name));
    }
    if action.name == ActionKind::Complete {
        for field in &ctx.prior_fields {
            payload
                .entry(field.name.to_string())
                .or_insert_with(|| data_reference(field.name));
        }
    }
    for (key, value) in action.payload.iter().flatten() {
        payload.entry(key.clone()).or_insert_with(|| value.clone());
    }

    payload
}

/// Maps an action verbatim; navigate targets become `{"type": "screen", "name": ..}`.
pub fn map_action(action: &Action) -> ActionWire {
    ActionWire {
        name: action.name,
        next: action.navigate_target().map(NextScreen::screen),
        url: action.url.clone(),
        payload: action.payload.clone(),
    }
}

pub fn form_reference(name: &str) -> Value {
    Value::String(format!("${{form.{}}}", name))
}

pub fn data_reference(name: &str) -> Value {
    Value::String(format!("${{data.{}}}", name))
}
