//! Field codec primitives.
//!
//! The handling schema encodes every leaf value one of five ways: a scalar in
//! a `value` attribute, a scalar as inner text, a vector as `x`/`y`/`z`
//! attributes, a numeric array as newline-joined text labelled with a
//! `content` attribute, or a string array as repeated `Item` children. The
//! readers here never fail: a missing or unparsable scalar yields the zero
//! value of its type, and a missing or empty array yields `None` (callers
//! must not distinguish "present but empty" from "absent").
//!
//! Floats are always written with exactly 6 fractional digits; this is part
//! of the wire format, not a display choice.

use ragemeta_xml::XmlNode;

use crate::Vector3;

/// Format a float for the wire: exactly 6 fractional digits.
pub(crate) fn format_float(value: f32) -> String {
    format!("{:.6}", value)
}

/// Read a float from the `value` attribute of the named child element.
pub(crate) fn float_attr(node: &XmlNode, name: &str) -> f32 {
    node.child_named(name)
        .and_then(|c| c.attr_value("value"))
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0.0)
}

/// Read an integer from the `value` attribute of the named child element.
pub(crate) fn int_attr(node: &XmlNode, name: &str) -> i32 {
    node.child_named(name)
        .and_then(|c| c.attr_value("value"))
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

/// Read the inner text of the named child element.
pub(crate) fn text(node: &XmlNode, name: &str) -> String {
    node.child_named(name)
        .map(|c| c.content.clone())
        .unwrap_or_default()
}

/// Read a vector from the `x`/`y`/`z` attributes of the named child element.
pub(crate) fn vector3(node: &XmlNode, name: &str) -> Vector3 {
    let Some(child) = node.child_named(name) else {
        return Vector3::ZERO;
    };

    let axis = |key| {
        child
            .attr_value(key)
            .and_then(|v: &str| v.trim().parse().ok())
            .unwrap_or(0.0)
    };

    Vector3::new(axis("x"), axis("y"), axis("z"))
}

/// Read a newline-delimited float array from the named child element.
///
/// Tokens are trimmed; empty and unparsable tokens are dropped. Returns
/// `None` both when the child element is missing and when no token parses.
pub(crate) fn float_array(node: &XmlNode, name: &str) -> Option<Vec<f32>> {
    let child = node.child_named(name)?;
    let values: Vec<f32> = child
        .content
        .split('\n')
        .filter_map(|t| t.trim().parse().ok())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Read a newline-delimited integer array from the named child element.
pub(crate) fn int_array(node: &XmlNode, name: &str) -> Option<Vec<i32>> {
    let child = node.child_named(name)?;
    let values: Vec<i32> = child
        .content
        .split('\n')
        .filter_map(|t| t.trim().parse().ok())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Read a string array from the `Item` children of the named child element.
///
/// Each item's inner text is one entry (blank items yield empty strings).
/// Returns `None` when the container or all of its items are missing.
pub(crate) fn item_array(node: &XmlNode, name: &str) -> Option<Vec<String>> {
    let child = node.child_named(name)?;
    let values: Vec<String> = child
        .children_named("Item")
        .map(|item| item.content.clone())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Append `<name value="..."/>` with a 6-decimal float.
pub(crate) fn push_float_attr(parent: &mut XmlNode, name: &str, value: f32) {
    parent.push_child(XmlNode::new(name).attr("value", format_float(value)));
}

/// Append `<name value="..."/>` with a minimal-decimal integer.
pub(crate) fn push_int_attr(parent: &mut XmlNode, name: &str, value: i32) {
    parent.push_child(XmlNode::new(name).attr("value", value.to_string()));
}

/// Append `<name>text</name>` (self-closing when the text is empty).
pub(crate) fn push_text(parent: &mut XmlNode, name: &str, value: &str) {
    parent.push_child(XmlNode::new(name).content(value));
}

/// Append `<name x="..." y="..." z="..."/>` with 6-decimal components.
pub(crate) fn push_vector3(parent: &mut XmlNode, name: &str, value: Vector3) {
    parent.push_child(
        XmlNode::new(name)
            .attr("x", format_float(value.x))
            .attr("y", format_float(value.y))
            .attr("z", format_float(value.z)),
    );
}

/// Append a `content="float_array"` element with newline-joined values.
/// Absent arrays are omitted entirely.
pub(crate) fn push_float_array(parent: &mut XmlNode, name: &str, values: Option<&[f32]>) {
    let Some(values) = values else { return };
    let joined = values
        .iter()
        .map(|v| format_float(*v))
        .collect::<Vec<_>>()
        .join("\n");

    parent.push_child(
        XmlNode::new(name)
            .attr("content", "float_array")
            .content(joined),
    );
}

/// Append a `content="int_array"` element with newline-joined values.
/// Absent arrays are omitted entirely.
pub(crate) fn push_int_array(parent: &mut XmlNode, name: &str, values: Option<&[i32]>) {
    let Some(values) = values else { return };
    let joined = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\n");

    parent.push_child(
        XmlNode::new(name)
            .attr("content", "int_array")
            .content(joined),
    );
}

/// Append an element with one `Item` child per entry.
/// Absent arrays are omitted entirely.
pub(crate) fn push_item_array(parent: &mut XmlNode, name: &str, values: Option<&[String]>) {
    let Some(values) = values else { return };
    let mut container = XmlNode::new(name);

    for value in values {
        container.push_child(XmlNode::new("Item").content(value.as_str()));
    }

    parent.push_child(container);
}

/// Append an empty `<Item type="NULL"/>` placeholder.
pub(crate) fn push_null_item(parent: &mut XmlNode) {
    parent.push_child(XmlNode::new("Item").attr("type", "NULL"));
}
