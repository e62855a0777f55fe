use crate::compiler::Compiler;
use crate::editor::{Screen, parse_screens};
use crate::validator::{Limits, Validator};
use pyo3::prelude::*;

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
}

/// Compiles and validates form designer snapshots.
///
/// An instance holds the parsed screens of one editor snapshot, so the same
/// snapshot can be validated and compiled without parsing it twice.
#[pyclass(name = "FlowCompiler")]
struct FlowCompilerPy {
    screens: Vec<Screen>,
    limits: Limits,
}

#[pymethods]
impl FlowCompilerPy {
    /// Parses an editor snapshot.
    ///
    /// Args:
    ///     screens_json (str): The editor snapshot, either `{"screens": [...]}` or
    ///         a bare array of screens.
    ///     limits_json (str | None): Optional JSON object overriding entries of the
    ///         default limit table.
    ///
    /// Raises:
    ///     ValueError: If the snapshot is malformed or contains an element kind
    ///         with no wire mapping, or if the limits are malformed.
    #[new]
    #[pyo3(signature = (screens_json, limits_json=None))]
    fn new(screens_json: &str, limits_json: Option<&str>) -> PyResult<Self> {
        let screens = parse_screens(screens_json).map_err(value_error)?;
        let limits = match limits_json {
            Some(json) => Limits::from_json(json).map_err(value_error)?,
            None => Limits::default(),
        };
        Ok(FlowCompilerPy { screens, limits })
    }

    /// Compiles the snapshot into a flow document. The limit table only affects
    /// `validate`; compilation output never depends on it.
    ///
    /// Returns:
    ///     str: The flow document as JSON.
    ///
    /// Raises:
    ///     ValueError: If compilation fails, e.g. on duplicate screen ids.
    #[pyo3(signature = (pretty=false))]
    fn compile(&self, pretty: bool) -> PyResult<String> {
        let compiler = Compiler::builder(self.screens.clone()).build();
        let artifacts = compiler.compile().map_err(value_error)?;
        artifacts.document.to_json(pretty).map_err(value_error)
    }

    /// Validates the snapshot against the limit table.
    ///
    /// Returns:
    ///     str: A JSON object `{"errors": [...], "warnings": [...]}`.
    fn validate(&self) -> PyResult<String> {
        let report = Validator::new(self.limits.clone()).validate_document(&self.screens);
        serde_json::to_string(&report).map_err(value_error)
    }
}

/// Python bindings to the formflow compiler and limit validator.
#[pymodule]
fn formflow(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<FlowCompilerPy>()?;
    Ok(())
}
