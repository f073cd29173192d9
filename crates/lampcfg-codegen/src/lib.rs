//! lampcfg Code Generator
//!
//! Compiles the configuration schema into two outputs: the form markup and
//! the static stylesheet. Markup generation walks pages → groups → fields
//! in declared order, validating each field and reserving its label
//! identifier before any of its markup is emitted. Problems are collected
//! as diagnostics alongside the output rather than aborting the run, so a
//! single bad field never blocks the rest of the document.
//!
//! ```text
//! Schema → compile() → CompilerOutput { html, css, diagnostics }
//! ```

pub mod css;
pub mod html;
pub mod registry;
pub mod validator;
pub mod widget;

use std::fmt;

use lampcfg_schema::{FieldType, FieldValue, Schema};
use registry::LabelRegistry;

/// The compiled output from a configuration schema.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerOutput {
    pub html: String,
    pub css: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// The problem classes a schema can exhibit.
///
/// All of these are authoring errors in the schema, deterministic and
/// discoverable at generation time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosticKind {
    #[error("label identifier is empty")]
    EmptyLabelIdentifier,

    #[error("duplicate label identifier `{0}`")]
    DuplicateLabelIdentifier(String),

    #[error("label text is empty")]
    MissingLabel,

    #[error("default value `{value}` does not match field type `{expected}`")]
    DefaultTypeMismatch {
        expected: FieldType,
        value: FieldValue,
    },

    #[error("default value {value} is outside the allowed range {min}..={max}")]
    DefaultOutOfRange { value: u16, min: u16, max: u16 },

    #[error("range {min}..={max} is not valid for field type `{field_type}`")]
    InvalidRange {
        field_type: FieldType,
        min: u16,
        max: u16,
    },

    #[error("page title is empty")]
    EmptyPageTitle,
}

/// A schema problem located by page and, for field-level problems, by the
/// field's name in its group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub page_index: usize,
    pub page_title: String,
    pub field: Option<String>,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(
                f,
                "page {} (`{}`), field `{}`: {}",
                self.page_index, self.page_title, field, self.kind
            ),
            None => write!(
                f,
                "page {} (`{}`): {}",
                self.page_index, self.page_title, self.kind
            ),
        }
    }
}

/// Mutable state for one compile: the label registry and the diagnostics
/// collected so far. Constructed fresh per `compile` call and dropped when
/// it returns; never shared between renders.
#[derive(Debug, Default)]
pub struct RenderContext {
    pub labels: LabelRegistry,
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn report(
        &mut self,
        page_index: usize,
        page_title: &str,
        field: Option<&str>,
        kind: DiagnosticKind,
    ) {
        self.diagnostics.push(Diagnostic {
            page_index,
            page_title: page_title.to_string(),
            field: field.map(str::to_string),
            kind,
        });
    }
}

/// Compile a configuration schema into markup + stylesheet.
///
/// Deterministic: the same schema always produces byte-identical output.
pub fn compile(schema: &Schema) -> CompilerOutput {
    let mut ctx = RenderContext::new();
    let html = html::generate(schema, &mut ctx);
    let css = css::generate();

    CompilerOutput {
        html,
        css,
        diagnostics: ctx.diagnostics,
    }
}
