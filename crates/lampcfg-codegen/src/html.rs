//! HTML form renderer.
//!
//! Walks the schema in declared order (pages, then groups, then fields)
//! and emits the form markup. Each field becomes its own `<form>` posting
//! to the firmware endpoint, so every setting is submitted independently.
//! Problems found along the way are reported into the render context and
//! the offending field emits no markup; traversal always continues.

use crate::registry::Registration;
use crate::widget::{widget_for, WidgetSpec};
use crate::{validator, DiagnosticKind, RenderContext};
use lampcfg_schema::{FieldDefinition, FieldType, Group, Page, Schema};

/// Endpoint every per-field form posts to. Firmware contract.
const POST_ACTION: &str = "/v1/post";

/// Generate form markup for the whole schema, reporting problems into the
/// context. Pages, groups, and fields render in declared order.
pub fn generate(schema: &Schema, ctx: &mut RenderContext) -> String {
    let mut out = String::new();

    for (page_index, page) in schema.pages.iter().enumerate() {
        generate_page(page, page_index, ctx, &mut out);
    }

    out
}

fn generate_page(page: &Page, page_index: usize, ctx: &mut RenderContext, out: &mut String) {
    out.push_str("    <div class=\"category\">\n");

    if page.title.is_empty() {
        ctx.report(page_index, &page.title, None, DiagnosticKind::EmptyPageTitle);
    } else {
        out.push_str(&format!("    <h2>{}</h2>\n", escape_text(&page.title)));
    }
    if let Some(explanation) = &page.explanation {
        out.push_str(&format!("    <p>{}</p>\n", escape_text(explanation)));
    }
    if let Some(details) = &page.details {
        out.push_str(&format!("    <p>{}</p>\n", escape_text(details)));
    }

    for group in &page.groups {
        generate_group(group, page, page_index, ctx, out);
    }

    out.push_str("    </div>\n\n");
}

fn generate_group(
    group: &Group,
    page: &Page,
    page_index: usize,
    ctx: &mut RenderContext,
    out: &mut String,
) {
    out.push_str("    <div class=\"group\">\n");

    // Title, explanation, and details are each independently optional.
    if let Some(title) = &group.title {
        out.push_str(&format!("        <h3>{}</h3>\n", escape_text(title)));
    }
    if let Some(explanation) = &group.explanation {
        out.push_str(&format!("        <p>{}</p>\n", escape_text(explanation)));
    }
    if let Some(details) = &group.details {
        out.push_str(&format!("        <p>{}</p>\n", escape_text(details)));
    }

    for (name, def) in &group.fields {
        generate_field(name, def, page, page_index, ctx, out);
    }

    out.push_str("    </div>\n");
}

fn generate_field(
    name: &str,
    def: &FieldDefinition,
    page: &Page,
    page_index: usize,
    ctx: &mut RenderContext,
    out: &mut String,
) {
    if let Err(kind) = validator::validate(def) {
        ctx.report(page_index, &page.title, Some(name), kind);
        return;
    }

    // Reserve the identifier before emitting anything; a collision would
    // break label association and form submission in the rendered DOM.
    match ctx.labels.register(&def.label_for) {
        Registration::Accepted => {}
        Registration::Empty => {
            ctx.report(
                page_index,
                &page.title,
                Some(name),
                DiagnosticKind::EmptyLabelIdentifier,
            );
            return;
        }
        Registration::Duplicate => {
            ctx.report(
                page_index,
                &page.title,
                Some(name),
                DiagnosticKind::DuplicateLabelIdentifier(def.label_for.clone()),
            );
            return;
        }
    }

    let widget = widget_for(def);
    let id = &def.label_for;

    out.push_str(&format!(
        "        <div title=\"{}\"><form action=\"{POST_ACTION}\" method=\"post\">\n",
        escape_attr(&default_hint(def)),
    ));

    let label_class = if def.is_required() {
        " class=\"required\""
    } else {
        ""
    };
    out.push_str(&format!(
        "            <label{label_class} for=\"{id}\">{}: </label>\n",
        escape_text(&def.label),
    ));

    out.push_str("            ");
    out.push_str(&input_element(def, &widget));
    out.push('\n');

    out.push_str(&format!(
        "            <button name=\"b{id}\" value=\"1\">Set</button>\n"
    ));
    out.push_str("        </form></div>\n");
}

/// Build the `<input>` element: `type`, `required`, `id`/`name`, the
/// widget's extra attributes, then the embedded default value.
fn input_element(def: &FieldDefinition, widget: &WidgetSpec) -> String {
    let id = &def.label_for;

    let mut input = format!("<input type=\"{}\"", widget.input_kind.as_str());
    if def.is_required() {
        input.push_str(" required");
    }
    input.push_str(&format!(" id=\"{id}\" name=\"{id}\""));

    for attr in &widget.attrs {
        input.push(' ');
        input.push_str(attr.name);
        if let Some(value) = &attr.value {
            input.push_str(&format!("=\"{}\"", escape_attr(value)));
        }
    }

    if widget.embeds_default {
        input.push_str(&format!(
            " value=\"{}\"",
            escape_attr(&def.default.to_string())
        ));
    }

    input.push('>');
    input
}

/// Tooltip text showing a field's default. Password defaults are masked;
/// secrets never reach the markup.
fn default_hint(def: &FieldDefinition) -> String {
    if def.field_type == FieldType::Password {
        "default: (hidden)".to_string()
    } else {
        format!("default: {}", def.default)
    }
}

/// Escape text placed inside element content.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text placed inside a double-quoted attribute value.
fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}
