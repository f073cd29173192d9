//! Record types for the configuration schema.
//!
//! Pages contain groups, groups contain named fields. Metadata (titles,
//! explanations) lives in named struct fields rather than reserved keys,
//! so a definition is checkable at compile time.

use std::fmt;
use std::net::Ipv4Addr;

// ---------------------------------------------------------------------------
// Field types and values
// ---------------------------------------------------------------------------

/// The value types a configuration field can take.
///
/// Numeric variants mirror the firmware's storage widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// On/off toggle.
    Bool,
    /// Free-form text.
    Text,
    /// Text that must never be echoed back into markup.
    Password,
    /// Unsigned 8-bit number (0–255).
    Uint8,
    /// Unsigned 16-bit number (0–65535).
    Uint16,
    /// Dotted-quad IPv4 address.
    Ipv4,
}

impl FieldType {
    /// Natural bounds for numeric types; `None` for everything else.
    pub fn bounds(self) -> Option<(u16, u16)> {
        match self {
            FieldType::Uint8 => Some((0, 255)),
            FieldType::Uint16 => Some((0, u16::MAX)),
            _ => None,
        }
    }

    pub fn is_numeric(self) -> bool {
        self.bounds().is_some()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Bool => "bool",
            FieldType::Text => "string",
            FieldType::Password => "password",
            FieldType::Uint8 => "uint8",
            FieldType::Uint16 => "uint16",
            FieldType::Ipv4 => "ipv4",
        };
        f.write_str(name)
    }
}

/// A field's default value, tagged by representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
    Number(u16),
    Ipv4(Ipv4Addr),
}

impl fmt::Display for FieldValue {
    /// Renders the value exactly as it is embedded into markup.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Ipv4(addr) => write!(f, "{addr}"),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<u16> for FieldValue {
    fn from(value: u16) -> Self {
        FieldValue::Number(value)
    }
}

impl From<Ipv4Addr> for FieldValue {
    fn from(value: Ipv4Addr) -> Self {
        FieldValue::Ipv4(value)
    }
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// One configuration setting, rendered as a labeled input plus its own
/// submit control.
///
/// `label_for` binds the label to the input and doubles as the wire name
/// the firmware reads back on POST; it must be unique across the whole
/// rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub field_type: FieldType,
    pub label: String,
    pub label_for: String,
    pub default: FieldValue,
    /// Lower bound for numeric types; the type's natural minimum when unset.
    pub min: Option<u16>,
    /// Upper bound for numeric types; the type's natural maximum when unset.
    pub max: Option<u16>,
    /// Whether an empty submitted value is acceptable.
    pub allow_empty: bool,
}

impl FieldDefinition {
    pub fn new(
        field_type: FieldType,
        label: &str,
        label_for: &str,
        default: impl Into<FieldValue>,
    ) -> Self {
        Self {
            field_type,
            label: label.to_string(),
            label_for: label_for.to_string(),
            default: default.into(),
            min: None,
            max: None,
            allow_empty: true,
        }
    }

    /// Restrict a numeric field to `min..=max`.
    pub fn range(mut self, min: u16, max: u16) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Disallow submitting an empty value.
    pub fn required(mut self) -> Self {
        self.allow_empty = false;
        self
    }

    /// A field is required iff empty values are disallowed.
    pub fn is_required(&self) -> bool {
        !self.allow_empty
    }

    /// Effective numeric bounds: declared `min`/`max`, falling back to the
    /// type's natural bounds. `None` for non-numeric types.
    pub fn effective_bounds(&self) -> Option<(u16, u16)> {
        let (lo, hi) = self.field_type.bounds()?;
        Some((self.min.unwrap_or(lo), self.max.unwrap_or(hi)))
    }
}

// ---------------------------------------------------------------------------
// Groups, pages, schema
// ---------------------------------------------------------------------------

/// An ordered run of fields with optional heading text.
///
/// A group with no title/explanation/details renders only its fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Group {
    pub title: Option<String>,
    pub explanation: Option<String>,
    pub details: Option<String>,
    /// Field name → definition, in declared order.
    pub fields: Vec<(String, FieldDefinition)>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titled(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn explained(mut self, text: &str) -> Self {
        self.explanation = Some(text.to_string());
        self
    }

    pub fn detailed(mut self, text: &str) -> Self {
        self.details = Some(text.to_string());
        self
    }

    pub fn field(mut self, name: &str, definition: FieldDefinition) -> Self {
        self.fields.push((name.to_string(), definition));
        self
    }
}

/// One category of settings, rendered with its own heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Must be non-empty; an empty title is a reportable schema error.
    pub title: String,
    pub explanation: Option<String>,
    pub details: Option<String>,
    pub groups: Vec<Group>,
}

impl Page {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            explanation: None,
            details: None,
            groups: Vec::new(),
        }
    }

    pub fn explained(mut self, text: &str) -> Self {
        self.explanation = Some(text.to_string());
        self
    }

    pub fn detailed(mut self, text: &str) -> Self {
        self.details = Some(text.to_string());
        self
    }

    pub fn group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }
}

/// The whole configuration schema: pages in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    pub pages: Vec<Page>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // FieldType
    // =========================================================================

    #[test]
    fn test_numeric_bounds() {
        assert_eq!(FieldType::Uint8.bounds(), Some((0, 255)));
        assert_eq!(FieldType::Uint16.bounds(), Some((0, 65535)));
        assert_eq!(FieldType::Text.bounds(), None);
        assert_eq!(FieldType::Ipv4.bounds(), None);
    }

    #[test]
    fn test_is_numeric() {
        assert!(FieldType::Uint8.is_numeric());
        assert!(FieldType::Uint16.is_numeric());
        assert!(!FieldType::Bool.is_numeric());
        assert!(!FieldType::Password.is_numeric());
    }

    // =========================================================================
    // FieldValue
    // =========================================================================

    #[test]
    fn test_value_display() {
        assert_eq!(FieldValue::Bool(true).to_string(), "true");
        assert_eq!(FieldValue::Bool(false).to_string(), "false");
        assert_eq!(FieldValue::Number(210).to_string(), "210");
        assert_eq!(FieldValue::Text("admin".into()).to_string(), "admin");
        assert_eq!(
            FieldValue::Ipv4(Ipv4Addr::new(192, 168, 72, 12)).to_string(),
            "192.168.72.12"
        );
    }

    #[test]
    fn test_value_from_impls() {
        assert_eq!(FieldValue::from(true), FieldValue::Bool(true));
        assert_eq!(FieldValue::from(42u16), FieldValue::Number(42));
        assert_eq!(FieldValue::from("x"), FieldValue::Text("x".into()));
    }

    // =========================================================================
    // FieldDefinition
    // =========================================================================

    #[test]
    fn test_new_field_allows_empty_by_default() {
        let def = FieldDefinition::new(FieldType::Text, "User", "waun", "admin");
        assert!(def.allow_empty);
        assert!(!def.is_required());
        assert_eq!(def.min, None);
        assert_eq!(def.max, None);
    }

    #[test]
    fn test_required_builder() {
        let def = FieldDefinition::new(FieldType::Text, "User", "waun", "admin").required();
        assert!(def.is_required());
    }

    #[test]
    fn test_effective_bounds_fall_back_to_type_bounds() {
        let def = FieldDefinition::new(FieldType::Uint8, "Step", "stbr", 8u16);
        assert_eq!(def.effective_bounds(), Some((0, 255)));

        let def = def.range(1, 100);
        assert_eq!(def.effective_bounds(), Some((1, 100)));
    }

    #[test]
    fn test_effective_bounds_none_for_non_numeric() {
        let def = FieldDefinition::new(FieldType::Bool, "Allow", "alnl", true);
        assert_eq!(def.effective_bounds(), None);
    }

    // =========================================================================
    // Builders preserve declared order
    // =========================================================================

    #[test]
    fn test_group_keeps_field_order() {
        let group = Group::new()
            .field("A", FieldDefinition::new(FieldType::Uint8, "A", "a", 1u16))
            .field("B", FieldDefinition::new(FieldType::Uint8, "B", "b", 2u16));
        let names: Vec<&str> = group.fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_schema_keeps_page_order() {
        let schema = Schema::new()
            .page(Page::new("Light"))
            .page(Page::new("Network"));
        let titles: Vec<&str> = schema.pages.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Light", "Network"]);
    }
}
