/// How an element kind takes part in form grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementClass {
    /// Display-only content, never wrapped in the form.
    Static,
    /// Produces a named value that is submitted with the form.
    Input,
    /// Submits the form.
    Footer,
    /// Conditional container, classified by the elements in its branches.
    Control,
}

/// Master macro declaring every element kind once, together with its class and the
/// sample value advertised for it in inherited data schemas.
macro_rules! define_element_kinds {
    ( $( ($variant:ident, $name:literal, $class:ident, $example:expr) ),* $(,)? ) => {
        /// The fieldless discriminant of [`crate::editor::Element`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ElementKind {
            $( $variant, )*
        }

        impl ElementKind {
            pub const ALL: &'static [ElementKind] = &[ $( ElementKind::$variant, )* ];

            /// The kind's name as written in the `type` tag of editor snapshots.
            pub fn name(self) -> &'static str {
                match self {
                    $( ElementKind::$variant => $name, )*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $name => Some(ElementKind::$variant), )*
                    _ => None,
                }
            }

            pub fn class(self) -> ElementClass {
                match self {
                    $( ElementKind::$variant => ElementClass::$class, )*
                }
            }

            /// Sample value used as `__example__` for fields of this kind.
            /// `None` for kinds that never declare a named field.
            pub fn example_value(self) -> Option<&'static str> {
                match self {
                    $( ElementKind::$variant => $example, )*
                }
            }
        }
    };
}

/// Sample value for photo and document pickers: one uploaded media item.
const UPLOAD_EXAMPLE: &str = r#"[{"file_name":"example","media_id":"0"}]"#;

define_element_kinds! {
    (TextHeading, "TextHeading", Static, None),
    (TextSubheading, "TextSubheading", Static, None),
    (TextBody, "TextBody", Static, None),
    (TextCaption, "TextCaption", Static, None),
    (RichText, "RichText", Static, None),
    (TextInput, "TextInput", Input, Some("Example text")),
    (EmailInput, "EmailInput", Input, Some("user@example.com")),
    (PasswordInput, "PasswordInput", Input, Some("password")),
    (PhoneInput, "PhoneInput", Input, Some("+15550100")),
    (TextArea, "TextArea", Input, Some("Example text")),
    (CheckboxGroup, "CheckboxGroup", Input, Some("[\"option_1\"]")),
    (RadioButtonsGroup, "RadioButtonsGroup", Input, Some("option_1")),
    (ChipsSelector, "ChipsSelector", Input, Some("[\"option_1\"]")),
    (Dropdown, "Dropdown", Input, Some("option_1")),
    (OptIn, "OptIn", Input, Some("true")),
    (EmbeddedLink, "EmbeddedLink", Static, None),
    (DatePicker, "DatePicker", Input, Some("2024-01-01")),
    (CalendarPicker, "CalendarPicker", Input, Some("2024-01-01")),
    (Image, "Image", Static, None),
    (ImageCarousel, "ImageCarousel", Static, None),
    (PhotoPicker, "PhotoPicker", Input, Some(UPLOAD_EXAMPLE)),
    (DocumentPicker, "DocumentPicker", Input, Some(UPLOAD_EXAMPLE)),
    (NavigationList, "NavigationList", Static, None),
    (Footer, "Footer", Footer, None),
    (If, "If", Control, None),
    (Switch, "Switch", Control, None),
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
