//! Attribute cascade.
//!
//! A node's recognized attributes come from three sources, in order of
//! precedence:
//!
//! 1. the node's own attributes,
//! 2. its structural parent's attributes (one level, never further up),
//! 3. the override document entry named after the node's id.
//!
//! After [`resolve`] every [`AttributeKey`] is present on the node under its
//! canonical name, either as a typed value or as [`AttrValue::Null`].
//! Resolving an already resolved node changes nothing.

use crate::error::ArtboardError;
use crate::ir::{
    AttrValue, AttributeKey, Attributes, OverrideTable, RawNode, Rgb, TextAlign, ValueKind,
    NO_PAINT,
};

/// Resolves the recognized attributes of `node`.
///
/// Unrecognized attributes are carried over untouched.
///
/// # Errors
/// Returns [`ArtboardError::Attribute`] if a value cannot be converted to
/// its key's type.
pub fn resolve(
    node: &RawNode,
    ancestor: &Attributes,
    overrides: &OverrideTable,
) -> Result<RawNode, ArtboardError> {
    let override_attrs = overrides.get(&node.id);
    let mut resolved = node.clone();

    for key in AttributeKey::ALL {
        let value = node
            .attrs
            .lookup(key)
            .or_else(|| ancestor.lookup(key))
            .or_else(|| override_attrs.and_then(|attrs| attrs.lookup(key)))
            .cloned()
            .unwrap_or(AttrValue::Null);

        let converted = convert(&node.id, key, value)?;
        resolved.attrs.insert(key.name(), converted);
    }

    combine_opacity(&mut resolved.attrs);
    Ok(resolved)
}

/// Folds fill-opacity into opacity and marks fill-opacity as consumed.
fn combine_opacity(attrs: &mut Attributes) {
    let number = |attrs: &Attributes, key: AttributeKey| match attrs.get(key.name()) {
        Some(AttrValue::Number(value)) => Some(*value),
        _ => None,
    };

    let combined = match (
        number(attrs, AttributeKey::FillOpacity),
        number(attrs, AttributeKey::Opacity),
    ) {
        (Some(fill), Some(layer)) => Some(fill * layer),
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => None,
    };

    attrs.insert(
        AttributeKey::Opacity.name(),
        combined.map_or(AttrValue::Null, AttrValue::Number),
    );
    attrs.insert(AttributeKey::FillOpacity.name(), AttrValue::Null);
}

fn convert(element: &str, key: AttributeKey, value: AttrValue) -> Result<AttrValue, ArtboardError> {
    let invalid = |value: &str, message: &str| ArtboardError::Attribute {
        element: element.to_string(),
        key: key.name().to_string(),
        value: value.to_string(),
        message: message.to_string(),
    };

    let raw = match value {
        AttrValue::Raw(raw) => raw,
        AttrValue::Null => return Ok(AttrValue::Null),
        AttrValue::Color(_) if key.value_kind() == ValueKind::Color => return Ok(value),
        AttrValue::Number(_) if key.value_kind() == ValueKind::Number => return Ok(value),
        AttrValue::Text(_) if key.value_kind() == ValueKind::Text => return Ok(value),
        other => return Err(invalid(&format!("{other:?}"), "value has the wrong type")),
    };
    let trimmed = raw.trim();

    match key.value_kind() {
        ValueKind::Color => {
            if trimmed.eq_ignore_ascii_case(NO_PAINT) {
                return Ok(AttrValue::Null);
            }
            Rgb::from_hex(trimmed)
                .map(AttrValue::Color)
                .ok_or_else(|| invalid(&raw, "expected a #RRGGBB color"))
        }
        ValueKind::Number => parse_number(trimmed)
            .map(AttrValue::Number)
            .ok_or_else(|| invalid(&raw, "expected a number")),
        ValueKind::Text => match key {
            AttributeKey::FontFamily => Ok(AttrValue::Text(first_font(trimmed))),
            AttributeKey::TextAlign => TextAlign::parse(trimmed)
                .map(|align| AttrValue::Text(align.name().to_string()))
                .ok_or_else(|| invalid(&raw, "expected left, center, right, justified or natural")),
            _ => Ok(AttrValue::Text(raw)),
        },
    }
}

/// Fuzz-only entrypoint: converts `input` as the raw value of every
/// recognized key.
#[cfg(feature = "fuzzing")]
pub fn fuzz_convert_value(input: &str) {
    for key in AttributeKey::ALL {
        let _ = convert("<fuzz>", key, AttrValue::Raw(input.to_string()));
    }
}

/// Parses a finite number with an optional `px` suffix.
pub fn parse_number(raw: &str) -> Option<f64> {
    let digits = raw.trim();
    let digits = digits.strip_suffix("px").unwrap_or(digits).trim_end();
    digits.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// First family of a CSS font list, without quotes.
fn first_font(raw: &str) -> String {
    raw.split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
        .to_string()
}
