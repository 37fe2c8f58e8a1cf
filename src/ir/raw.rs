//! Raw document nodes and their attribute bags.
//!
//! A [`RawNode`] is what the canvas walker produces for every element before
//! classification. Its attributes start out as raw strings; the attribute
//! resolver rewrites the recognized ones into typed [`AttrValue`]s.

use std::collections::BTreeMap;
use std::fmt;

use super::color::Rgb;
use super::{Pixel, Rect};

/// Attribute keys the resolver understands.
///
/// After resolution every one of these is present on a node, possibly as
/// [`AttrValue::Null`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKey {
    Fill,
    FillOpacity,
    Opacity,
    StrokeColor,
    StrokeWidth,
    FontFamily,
    FontSize,
    TextAlign,
    BorderRadius,
    TextColor,
    TitleColor,
    Placeholder,
}

/// How a recognized attribute's raw text is converted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Color,
    Number,
    Text,
}

impl AttributeKey {
    pub const ALL: [AttributeKey; 12] = [
        AttributeKey::Fill,
        AttributeKey::FillOpacity,
        AttributeKey::Opacity,
        AttributeKey::StrokeColor,
        AttributeKey::StrokeWidth,
        AttributeKey::FontFamily,
        AttributeKey::FontSize,
        AttributeKey::TextAlign,
        AttributeKey::BorderRadius,
        AttributeKey::TextColor,
        AttributeKey::TitleColor,
        AttributeKey::Placeholder,
    ];

    /// Canonical attribute name, as written on resolved nodes.
    pub fn name(&self) -> &'static str {
        match self {
            AttributeKey::Fill => "fill",
            AttributeKey::FillOpacity => "fill-opacity",
            AttributeKey::Opacity => "opacity",
            AttributeKey::StrokeColor => "stroke-color",
            AttributeKey::StrokeWidth => "stroke-width",
            AttributeKey::FontFamily => "font-family",
            AttributeKey::FontSize => "font-size",
            AttributeKey::TextAlign => "text-align",
            AttributeKey::BorderRadius => "border-radius",
            AttributeKey::TextColor => "text-color",
            AttributeKey::TitleColor => "title-color",
            AttributeKey::Placeholder => "placeholder",
        }
    }

    /// Alternative spellings found in SVG exports and override files.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            AttributeKey::StrokeColor => &["stroke"],
            AttributeKey::TextAlign => &["text_align", "text-anchor"],
            AttributeKey::BorderRadius => &["rx"],
            _ => &[],
        }
    }

    pub fn value_kind(&self) -> ValueKind {
        match self {
            AttributeKey::Fill
            | AttributeKey::StrokeColor
            | AttributeKey::TextColor
            | AttributeKey::TitleColor => ValueKind::Color,
            AttributeKey::FillOpacity
            | AttributeKey::Opacity
            | AttributeKey::StrokeWidth
            | AttributeKey::FontSize
            | AttributeKey::BorderRadius => ValueKind::Number,
            AttributeKey::FontFamily | AttributeKey::TextAlign | AttributeKey::Placeholder => {
                ValueKind::Text
            }
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// Unconverted text straight from a source document.
    Raw(String),
    /// Explicitly absent.
    Null,
    Color(Rgb),
    Number(f64),
    Text(String),
}

impl AttrValue {
    /// Returns the raw text, if this value has not been converted yet.
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            AttrValue::Raw(raw) => Some(raw),
            _ => None,
        }
    }
}

/// A sparse, name-keyed attribute bag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes(BTreeMap<String, AttrValue>);

impl Attributes {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: AttrValue) {
        self.0.insert(name.into(), value);
    }

    /// Inserts a raw string value.
    pub fn insert_raw(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.insert(name, AttrValue::Raw(value.into()));
    }

    /// Builder-style [`Attributes::insert_raw`].
    pub fn with_raw(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_raw(name, value);
        self
    }

    /// Raw text for `name`, trimmed; `None` when missing or already typed.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_raw).map(str::trim)
    }

    /// Looks up a recognized key under its canonical name, then its aliases.
    pub fn lookup(&self, key: AttributeKey) -> Option<&AttrValue> {
        std::iter::once(key.name())
            .chain(key.aliases().iter().copied())
            .find_map(|name| self.get(name))
    }

    /// Copies every entry of `other` that is missing here.
    pub fn fill_from(&mut self, other: &Attributes) {
        for (name, value) in other.iter() {
            self.0
                .entry(name.to_string())
                .or_insert_with(|| value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, AttrValue)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (String, AttrValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A parsed, not yet classified, element of the canvas document.
#[derive(Clone, Debug, PartialEq)]
pub struct RawNode {
    /// Layer name, unique within a canvas.
    pub id: String,
    /// Declared kind: the `type` attribute, or the XML tag when absent.
    pub kind: String,
    /// XML element name (`rect`, `text`, `g`, ...).
    pub tag: String,
    /// Raw geometry in canvas pixels.
    pub frame: Rect<Pixel>,
    pub attrs: Attributes,
    /// Character data of `text` elements, one entry per run.
    pub text_runs: Vec<String>,
    pub children: Vec<RawNode>,
}

impl RawNode {
    /// Creates a childless node whose declared kind is its tag.
    pub fn new(id: impl Into<String>, tag: impl Into<String>, frame: Rect<Pixel>) -> Self {
        let tag = tag.into();
        Self {
            id: id.into(),
            kind: tag.clone(),
            tag,
            frame,
            attrs: Attributes::new(),
            text_runs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert_raw(name, value);
        self
    }

    pub fn with_text(mut self, run: impl Into<String>) -> Self {
        self.text_runs.push(run.into());
        self
    }

    pub fn with_child(mut self, child: RawNode) -> Self {
        self.children.push(child);
        self
    }

    /// Concatenation of all text runs that are not whitespace-only.
    pub fn text_content(&self) -> String {
        self.text_runs
            .iter()
            .filter(|run| !run.trim().is_empty())
            .map(String::as_str)
            .collect()
    }
}
