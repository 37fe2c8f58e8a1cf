//! Layer model for the artboard intermediate representation.
//!
//! The canvas walker produces [`Element`]s (classified, pixel geometry, no
//! anchors); the anchor engine turns top-level elements into [`LayerNode`]s
//! (normalized geometry plus one anchor per axis). A parsed document is a
//! [`Screen`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::color::Rgb;
use super::coord::Coord;
use super::ids::LayerId;
use super::raw::{AttrValue, AttributeKey, Attributes};
use super::rect::Rect;
use super::space::{Normalized, Pixel};

/// A parsed screen: canvas metadata plus top-level layers in final order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub canvas: CanvasMeta,
    pub layers: Vec<LayerNode>,
}

/// Global metadata of the canvas document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasMeta {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    pub background: Rgb,
    /// Id of the page group wrapping the artboard.
    pub page: String,
    /// Id of the artboard group.
    pub artboard: String,
}

impl CanvasMeta {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Rgb::WHITE,
            page: String::new(),
            artboard: String::new(),
        }
    }

    pub fn with_names(mut self, page: impl Into<String>, artboard: impl Into<String>) -> Self {
        self.page = page.into();
        self.artboard = artboard.into();
        self
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }
}

/// Which edge of the element an anchor constrains.
///
/// Only the "nearest predecessor" directions exist: an element hangs below
/// (`Up`) or to the right of (`Left`) its reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorDirection {
    Up,
    Left,
}

impl fmt::Display for AnchorDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnchorDirection::Up => f.write_str("up"),
            AnchorDirection::Left => f.write_str("left"),
        }
    }
}

/// Offset of an element from a sibling's edge or from the container edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub direction: AnchorDirection,
    /// Sibling the element is anchored to; `None` means the container edge.
    pub reference: Option<LayerId>,
    /// Normalized distance, a fraction of the canvas size on the anchor's axis.
    pub distance: f64,
}

impl Anchor {
    pub fn to_edge(direction: AnchorDirection, distance: f64) -> Self {
        Self {
            direction,
            reference: None,
            distance,
        }
    }

    pub fn to_sibling(direction: AnchorDirection, reference: LayerId, distance: f64) -> Self {
        Self {
            direction,
            reference: Some(reference),
            distance,
        }
    }

    pub fn is_container_edge(&self) -> bool {
        self.reference.is_none()
    }
}

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justified,
    Natural,
}

impl TextAlign {
    /// Accepts CSS-style names and SVG `text-anchor` names.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "left" | "start" => Some(TextAlign::Left),
            "center" | "middle" => Some(TextAlign::Center),
            "right" | "end" => Some(TextAlign::Right),
            "justify" | "justified" => Some(TextAlign::Justified),
            "natural" => Some(TextAlign::Natural),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justified => "justified",
            TextAlign::Natural => "natural",
        }
    }
}

/// Fully resolved style of a layer. Absent attributes are `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub fill: Option<Rgb>,
    pub stroke_color: Option<Rgb>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub text_align: Option<TextAlign>,
    pub border_radius: Option<f64>,
    pub text_color: Option<Rgb>,
    pub title_color: Option<Rgb>,
    pub placeholder: Option<String>,
}

impl Style {
    /// Reads the typed view out of an attribute-complete bag.
    ///
    /// Values the resolver has not converted read as `None`.
    pub fn from_resolved(attrs: &Attributes) -> Self {
        let color = |key| match attrs.get(AttributeKey::name(&key)) {
            Some(AttrValue::Color(rgb)) => Some(*rgb),
            _ => None,
        };
        let number = |key| match attrs.get(AttributeKey::name(&key)) {
            Some(AttrValue::Number(value)) => Some(*value),
            _ => None,
        };
        let text = |key| match attrs.get(AttributeKey::name(&key)) {
            Some(AttrValue::Text(value)) => Some(value.clone()),
            _ => None,
        };

        Self {
            fill: color(AttributeKey::Fill),
            stroke_color: color(AttributeKey::StrokeColor),
            stroke_width: number(AttributeKey::StrokeWidth),
            opacity: number(AttributeKey::Opacity),
            font_family: text(AttributeKey::FontFamily),
            font_size: number(AttributeKey::FontSize),
            text_align: text(AttributeKey::TextAlign).and_then(|raw| TextAlign::parse(&raw)),
            border_radius: number(AttributeKey::BorderRadius),
            text_color: color(AttributeKey::TextColor),
            title_color: color(AttributeKey::TitleColor),
            placeholder: text(AttributeKey::Placeholder),
        }
    }
}

/// Type tag shared by every layer variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayerKind {
    PrimitiveShape,
    TextLabel,
    Button,
    Section,
    TableOrCollectionView,
    SliderView,
    Container,
}

impl LayerKind {
    pub const ALL: [LayerKind; 7] = [
        LayerKind::PrimitiveShape,
        LayerKind::TextLabel,
        LayerKind::Button,
        LayerKind::Section,
        LayerKind::TableOrCollectionView,
        LayerKind::SliderView,
        LayerKind::Container,
    ];
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LayerKind::PrimitiveShape => "PrimitiveShape",
            LayerKind::TextLabel => "TextLabel",
            LayerKind::Button => "Button",
            LayerKind::Section => "Section",
            LayerKind::TableOrCollectionView => "TableOrCollectionView",
            LayerKind::SliderView => "SliderView",
            LayerKind::Container => "Container",
        };
        f.write_str(name)
    }
}

/// Variant-specific content of a layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Layer {
    Shape(ShapeLayer),
    Text(TextLabel),
    Button(Button),
    Section(Section),
    Collection(CollectionView),
    Slider(SliderView),
    Container(Container),
}

impl Layer {
    pub fn kind(&self) -> LayerKind {
        match self {
            Layer::Shape(_) => LayerKind::PrimitiveShape,
            Layer::Text(_) => LayerKind::TextLabel,
            Layer::Button(_) => LayerKind::Button,
            Layer::Section(_) => LayerKind::Section,
            Layer::Collection(_) => LayerKind::TableOrCollectionView,
            Layer::Slider(_) => LayerKind::SliderView,
            Layer::Container(_) => LayerKind::Container,
        }
    }

    /// Elements held directly by this layer, in field order.
    pub fn children(&self) -> Vec<&Element> {
        match self {
            Layer::Shape(_) | Layer::Text(_) => Vec::new(),
            Layer::Button(button) => button
                .frame_shape
                .as_deref()
                .into_iter()
                .chain(std::iter::once(button.label.as_ref()))
                .collect(),
            Layer::Section(section) => section
                .header
                .as_deref()
                .into_iter()
                .chain(section.cells.iter())
                .chain(std::iter::once(section.bound.as_ref()))
                .collect(),
            Layer::Collection(view) => view
                .sections
                .iter()
                .chain(view.bound.as_deref())
                .collect(),
            Layer::Slider(slider) => [slider.options.as_ref(), slider.content.as_ref()]
                .into_iter()
                .chain(slider.bound.as_deref())
                .collect(),
            Layer::Container(container) => container.children.iter().collect(),
        }
    }
}

/// Geometric primitive drawn directly on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rect,
    Circle,
    Ellipse,
    Line,
    Path,
    Polygon,
    Polyline,
    Image,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeLayer {
    pub shape: ShapeKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub text: String,
    /// Anchor point of the label, `((x + width) / 2, (y + height) / 2)`.
    ///
    /// This averages the origin with the size rather than taking the
    /// geometric center; emitters position labels with exactly this value.
    pub center: Coord<Pixel>,
    /// Fill set on the label itself or by its override entry, ignoring
    /// anything inherited from its parent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub own_fill: Option<Rgb>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub title: String,
    pub title_color: Option<Rgb>,
    /// Shape drawing the button's background, if any.
    pub frame_shape: Option<Box<Element>>,
    /// Text label carrying the title.
    pub label: Box<Element>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub header: Option<Box<Element>>,
    /// Cells in top-to-bottom order.
    pub cells: Vec<Element>,
    /// First cell of each derived cell type, keyed by cell name.
    pub custom_cells: BTreeMap<String, LayerId>,
    /// Rectangle marking the section's extent.
    pub bound: Box<Element>,
    /// Spacing between cells in pixels, filled in by the enclosing list.
    pub separator: Vec<f64>,
    /// True for table sections whose cells are visually separated.
    pub table_separate: bool,
}

/// Scroll direction of a collection view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    Horizontal,
    Vertical,
}

/// Whether a list is laid out as a table (one column) or a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Table,
    Collection,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectionView {
    pub list: ListKind,
    /// Only ever set on collections.
    pub scroll_dir: Option<ScrollDirection>,
    /// Section elements in top-to-bottom order.
    pub sections: Vec<Element>,
    /// Spacing between the first two sections in pixels.
    pub separator: Vec<f64>,
    /// Headers with custom styling, keyed by derived header name.
    pub custom_headers: BTreeMap<String, LayerId>,
    pub bound: Option<Box<Element>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderView {
    /// The tab strip selecting the visible page. It carries no anchors of
    /// its own and is placed by the enclosing layer's `vertical` and
    /// `horizontal` anchors.
    pub options: Box<Element>,
    /// The paged content, rewritten into a one-cell collection view.
    pub content: Box<Element>,
    pub bound: Option<Box<Element>>,
}

/// What a container stands for in its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerRole {
    View,
    Cell,
    Header,
    SliderOptions,
    SliderContent,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub role: ContainerRole,
    pub children: Vec<Element>,
}

/// A classified element that has not been anchored yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: LayerId,
    pub style: Style,
    pub frame: Rect<Pixel>,
    pub layer: Layer,
}

impl Element {
    pub fn kind(&self) -> LayerKind {
        self.layer.kind()
    }

    pub fn as_section(&self) -> Option<&Section> {
        match &self.layer {
            Layer::Section(section) => Some(section),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match &self.layer {
            Layer::Container(container) => Some(container),
            _ => None,
        }
    }
}

/// A top-level layer in its final, anchored form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerNode {
    pub id: LayerId,
    pub style: Style,
    /// Geometry as fractions of the canvas.
    pub frame: Rect<Normalized>,
    /// Geometry in canvas pixels, as drawn.
    pub pixel_frame: Rect<Pixel>,
    pub vertical: Anchor,
    pub horizontal: Anchor,
    pub layer: Layer,
}

impl LayerNode {
    pub fn kind(&self) -> LayerKind {
        self.layer.kind()
    }
}
