//! Widget mapping.
//!
//! Decides, per field type, which HTML input a field renders as, which
//! extra attributes it carries, and whether the default value is embedded
//! as a literal `value=` attribute. The mapping is the browser-side half
//! of the firmware contract: the device has no server-side parser for
//! these values, so input constraints here are the only validation.

use lampcfg_schema::{FieldDefinition, FieldType, FieldValue};

/// Browser-side validation pattern for dotted-quad IPv4 addresses with
/// each octet in 0..=255.
pub const IPV4_PATTERN: &str =
    r"^((\d{1,2}|1\d\d|2[0-4]\d|25[0-5])\.){3}(\d{1,2}|1\d\d|2[0-4]\d|25[0-5])$";

/// The HTML input kinds the mapper can choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Checkbox,
    Text,
    Password,
    Number,
}

impl InputKind {
    /// The `type=` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Checkbox => "checkbox",
            InputKind::Text => "text",
            InputKind::Password => "password",
            InputKind::Number => "number",
        }
    }
}

/// One extra attribute on the input element.
/// A `None` value renders as a bare boolean attribute (`checked`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: &'static str,
    pub value: Option<String>,
}

impl Attr {
    fn flag(name: &'static str) -> Self {
        Self { name, value: None }
    }

    fn pair(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: Some(value.into()),
        }
    }
}

/// Input semantics chosen for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSpec {
    pub input_kind: InputKind,
    pub attrs: Vec<Attr>,
    pub embeds_default: bool,
}

/// Map a validated field definition to its input semantics.
pub fn widget_for(def: &FieldDefinition) -> WidgetSpec {
    match def.field_type {
        FieldType::Bool => {
            let mut attrs = Vec::new();
            if def.default == FieldValue::Bool(true) {
                attrs.push(Attr::flag("checked"));
            }
            WidgetSpec {
                input_kind: InputKind::Checkbox,
                attrs,
                embeds_default: false,
            }
        }
        FieldType::Text => WidgetSpec {
            input_kind: InputKind::Text,
            attrs: Vec::new(),
            embeds_default: true,
        },
        FieldType::Password => WidgetSpec {
            input_kind: InputKind::Password,
            attrs: vec![
                Attr::pair("autocomplete", "off"),
                Attr::pair("spellcheck", "false"),
            ],
            // Secret defaults are never echoed into markup.
            embeds_default: false,
        },
        FieldType::Ipv4 => WidgetSpec {
            input_kind: InputKind::Text,
            attrs: vec![
                Attr::pair("minlength", "7"),
                Attr::pair("maxlength", "15"),
                Attr::pair("size", "15"),
                Attr::pair("pattern", IPV4_PATTERN),
            ],
            embeds_default: true,
        },
        FieldType::Uint8 | FieldType::Uint16 => {
            let (min, max) = def.effective_bounds().unwrap_or((0, u16::MAX));
            WidgetSpec {
                input_kind: InputKind::Number,
                attrs: vec![
                    Attr::pair("min", min.to_string()),
                    Attr::pair("max", max.to_string()),
                    Attr::pair("step", "1"),
                    Attr::pair("inputmode", "decimal"),
                ],
                embeds_default: true,
            }
        }
    }
}
