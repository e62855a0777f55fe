use crate::editor::{NamedField, Screen};
use crate::wire::{DataField, DataSchema};
use ahash::AHashSet;

/// Terminal flag and inherited data declaration of one compiled screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSchema {
    pub terminal: bool,
    pub data: Option<DataSchema>,
}

/// Union of the named fields of `screens`, first occurrence wins.
pub fn collect_named_fields(screens: &[Screen]) -> Vec<NamedField<'_>> {
    let mut seen = AHashSet::new();
    screens
        .iter()
        .flat_map(Screen::named_fields)
        .filter(|field| seen.insert(field.name))
        .collect()
}

/// The data schema built from the named fields of earlier screens, or `None` when
/// nothing is inherited.
pub fn inherited_schema(prior_fields: &[NamedField<'_>]) -> Option<DataSchema> {
    let schema: DataSchema = prior_fields
        .iter()
        .map(|field| (field.name.to_string(), DataField::string(field.example())))
        .collect();
    (!schema.is_empty()).then_some(schema)
}

/// Terminal screens declare an empty schema and inherit nothing. `prior_fields` is
/// the output of [`collect_named_fields`] over the screens before `screen`.
pub fn screen_schema(screen: &Screen, prior_fields: &[NamedField<'_>]) -> ScreenSchema {
    if screen.is_terminal() {
        ScreenSchema {
            terminal: true,
            data: Some(DataSchema::default()),
        }
    } else {
        ScreenSchema {
            terminal: false,
            data: inherited_schema(prior_fields),
        }
    }
}
