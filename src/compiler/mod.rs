use crate::editor::{IntoScreens, Screen, parse_screens};
use crate::error::CompileError;
use crate::validator::{Limits, ValidationReport, Validator};
use crate::wire::{FLOW_VERSION, FlowDocument, Layout, ScreenWire};
use ahash::AHashSet;
use tracing::{debug, info, warn};

pub mod grouping;
pub mod mapping;
pub mod routing;
pub mod schema;

use grouping::{MappedElement, group_children};
use mapping::MappingContext;
use routing::build_routing_model;
use schema::{collect_named_fields, screen_schema};

/// Everything one compilation run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationArtifacts {
    pub document: FlowDocument,
    /// Present when the compiler was built with validation enabled.
    pub report: Option<ValidationReport>,
}

pub struct Compiler {
    screens: Vec<Screen>,
    validator: Validator,
    validate: bool,
}

pub struct CompilerBuilder {
    screens: Vec<Screen>,
    limits: Limits,
    validate: bool,
}

impl CompilerBuilder {
    pub fn new(screens: Vec<Screen>) -> Self {
        Self {
            screens,
            limits: Limits::default(),
            validate: false,
        }
    }

    /// Replaces the limit table used by the optional validation pass.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Runs the validator before compiling. Findings are reported alongside the
    /// document and never stop compilation.
    pub fn with_validation(mut self) -> Self {
        self.validate = true;
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            screens: self.screens,
            validator: Validator::new(self.limits),
            validate: self.validate,
        }
    }
}

impl Compiler {
    pub fn builder(screens: Vec<Screen>) -> CompilerBuilder {
        CompilerBuilder::new(screens)
    }

    /// Starts a builder from any editor format implementing [`IntoScreens`].
    pub fn from_editor<T: IntoScreens>(source: T) -> Result<CompilerBuilder, CompileError> {
        Ok(CompilerBuilder::new(source.into_screens()?))
    }

    /// Starts a builder from the editor's JSON snapshot.
    pub fn from_json(json: &str) -> Result<CompilerBuilder, CompileError> {
        Ok(CompilerBuilder::new(parse_screens(json)?))
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn compile(&self) -> Result<CompilationArtifacts, CompileError> {
        let report = self.validate.then(|| {
            let report = self.validator.validate_document(&self.screens);
            if !report.is_valid() {
                warn!(
                    errors = report.errors.len(),
                    "Validation reported errors; compiling anyway"
                );
            }
            report
        });

        let document = compile_flow(&self.screens)?;
        Ok(CompilationArtifacts { document, report })
    }
}

/// Compiles an ordered screen list into a flow document.
///
/// The transform is pure and deterministic: the same screens always produce the
/// same document.
pub fn compile_flow(screens: &[Screen]) -> Result<FlowDocument, CompileError> {
    ensure_unique_ids(screens)?;

    let routing_model = build_routing_model(screens);
    let compiled = screens
        .iter()
        .enumerate()
        .map(|(index, screen)| compile_screen(&screens[..index], screen))
        .collect::<Vec<_>>();

    info!(
        screens = compiled.len(),
        routed = routing_model.is_some(),
        "Compiled flow document"
    );
    Ok(FlowDocument {
        version: FLOW_VERSION.to_string(),
        routing_model,
        screens: compiled,
    })
}

/// Compiles one screen given the screens that precede it.
pub fn compile_screen(previous: &[Screen], screen: &Screen) -> ScreenWire {
    let ctx = MappingContext::with_prior_fields(screen, collect_named_fields(previous));
    let mapped = screen
        .elements
        .iter()
        .map(|element| MappedElement::map(element, &ctx))
        .collect();
    let children = group_children(mapped);
    let schema = screen_schema(screen, &ctx.prior_fields);

    debug!(
        screen = %screen.id,
        children = children.len(),
        terminal = schema.terminal,
        "Compiled screen"
    );
    ScreenWire {
        id: screen.id.clone(),
        title: screen.title.clone(),
        terminal: schema.terminal.then_some(true),
        success: schema.terminal.then_some(true),
        data: schema.data,
        layout: Layout::single_column(children),
    }
}

fn ensure_unique_ids(screens: &[Screen]) -> Result<(), CompileError> {
    let mut seen = AHashSet::new();
    match screens.iter().find(|screen| !seen.insert(screen.id.as_str())) {
        Some(duplicate) => Err(CompileError::DuplicateScreenId(duplicate.id.clone())),
        None => Ok(()),
    }
}
