//! SVG canvas reader.
//!
//! This adapter reads the SVG that design tools export for one artboard:
//! - root `<svg>` with `width`/`height` (unit suffix allowed) and a `style`
//!   attribute holding the background color (`background: #RRGGBB;`)
//! - a page `<g>` wrapping an artboard `<g>`
//! - every layer below the artboard carries an `id` plus `x`, `y`, `width`
//!   and `height` attributes (or gets them from the override document)
//!
//! Each top-level layer is resolved and classified, then the anchor engine
//! orders and anchors them into a [`Screen`].

use std::fs;
use std::path::{Path, PathBuf};

use roxmltree::{Document, Node};

use super::io_overrides::{read_overrides, OverrideTable};
use super::model::{CanvasMeta, Element, Screen};
use super::raw::{Attributes, RawNode};
use super::{Pixel, Rect, Rgb};
use crate::anchor::anchor_elements;
use crate::error::ArtboardError;
use crate::layers::{build, prepare};
use crate::resolve::parse_number;

/// Elements that never describe layers.
const METADATA_TAGS: [&str; 4] = ["title", "desc", "defs", "metadata"];

/// Attribute naming a layer's declared kind.
const TYPE_ATTR: &str = "type";

/// Options controlling how a canvas document is read.
#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
    /// Id of the artboard group to read; the page's first group when `None`.
    pub artboard: Option<String>,
}

/// Reads `<dir>/<name>.svg` together with its optional `<dir>/<name>.json`
/// override document.
pub fn read_artboard(dir: &Path, name: &str) -> Result<Screen, ArtboardError> {
    let svg_path = dir.join(format!("{name}.svg"));
    let overrides_path = dir.join(format!("{name}.json"));
    let overrides = overrides_path.is_file().then_some(overrides_path.as_path());
    read_canvas(&svg_path, overrides, &ParseOptions::default())
}

/// Reads a canvas document, with an optional override document.
pub fn read_canvas(
    svg_path: &Path,
    overrides_path: Option<&Path>,
    options: &ParseOptions,
) -> Result<Screen, ArtboardError> {
    let overrides = match overrides_path {
        Some(path) => read_overrides(path)?,
        None => OverrideTable::new(),
    };
    let svg = fs::read_to_string(svg_path).map_err(ArtboardError::Io)?;
    parse_svg_str(&svg, svg_path, &overrides, options)
}

/// Parses a canvas document from a string.
pub fn from_svg_str(svg: &str, overrides: &OverrideTable) -> Result<Screen, ArtboardError> {
    parse_svg_str(svg, Path::new("<string>"), overrides, &ParseOptions::default())
}

/// Parses a canvas document from bytes (must be valid UTF-8).
pub fn from_svg_slice(bytes: &[u8], overrides: &OverrideTable) -> Result<Screen, ArtboardError> {
    let svg = std::str::from_utf8(bytes).map_err(|source| ArtboardError::CanvasParse {
        path: PathBuf::from("<bytes>"),
        message: format!("input is not valid UTF-8: {source}"),
    })?;
    parse_svg_str(svg, Path::new("<bytes>"), overrides, &ParseOptions::default())
}

/// Parses a canvas document from a string with explicit options.
pub fn parse_svg_str(
    svg: &str,
    path: &Path,
    overrides: &OverrideTable,
    options: &ParseOptions,
) -> Result<Screen, ArtboardError> {
    let canvas_error = |message: String| ArtboardError::CanvasParse {
        path: path.to_path_buf(),
        message,
    };

    let document = Document::parse(svg).map_err(|source| canvas_error(source.to_string()))?;
    let root = document.root_element();
    if root.tag_name().name() != "svg" {
        return Err(canvas_error("missing <svg> root element".to_string()));
    }

    let page = child_groups(root)
        .next()
        .ok_or_else(|| canvas_error("missing page group under <svg>".to_string()))?;
    let artboard = match &options.artboard {
        Some(name) => child_groups(page)
            .find(|group| group.attribute("id") == Some(name.as_str()))
            .ok_or_else(|| canvas_error(format!("no artboard named '{name}'")))?,
        None => child_groups(page)
            .next()
            .ok_or_else(|| canvas_error("missing artboard group under page".to_string()))?,
    };

    let canvas = CanvasMeta {
        width: parse_dimension(root, "width")?,
        height: parse_dimension(root, "height")?,
        background: parse_background(root)?,
        page: page.attribute("id").unwrap_or_default().to_string(),
        artboard: artboard.attribute("id").unwrap_or_default().to_string(),
    };
    log::debug!(
        "canvas {}x{} page '{}' artboard '{}'",
        canvas.width,
        canvas.height,
        canvas.page,
        canvas.artboard
    );

    let mut artboard_attrs = attributes_of(artboard);
    artboard_attrs.fill_from(&attributes_of(page));

    let mut elements = Vec::new();
    for child in layer_children(artboard) {
        elements.push(layer_element(child, &artboard_attrs, overrides)?);
    }

    Ok(Screen {
        layers: anchor_elements(elements, &canvas),
        canvas,
    })
}

fn child_groups<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(|child| child.is_element() && child.tag_name().name() == "g")
}

fn layer_children<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| {
        child.is_element() && !METADATA_TAGS.contains(&child.tag_name().name())
    })
}

fn attributes_of(node: Node<'_, '_>) -> Attributes {
    let mut attrs = Attributes::new();
    for attribute in node.attributes() {
        attrs.insert_raw(attribute.name(), attribute.value());
    }
    attrs
}

/// `width`/`height` of the root, with an optional unit suffix.
fn parse_dimension(root: Node<'_, '_>, name: &str) -> Result<u32, ArtboardError> {
    let raw = root
        .attribute(name)
        .ok_or_else(|| ArtboardError::format("canvas", format!("missing {name}")))?;
    let digits = raw.trim().trim_end_matches(|c: char| c.is_ascii_alphabetic());

    match digits.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ArtboardError::format(
            "canvas",
            format!("invalid {name} '{raw}', expected a positive integer"),
        )),
    }
}

/// Background color from the root `style`, e.g. `background: #F7F7F7;`.
fn parse_background(root: Node<'_, '_>) -> Result<Rgb, ArtboardError> {
    let Some(style) = root.attribute("style") else {
        log::warn!("canvas has no style attribute; using a white background");
        return Ok(Rgb::WHITE);
    };

    let Some(token) = style
        .split(|c: char| c.is_whitespace() || c == ':')
        .find(|token| token.starts_with('#'))
    else {
        log::warn!("canvas style '{style}' has no color; using a white background");
        return Ok(Rgb::WHITE);
    };

    let hex = token.trim_end_matches(';');
    Rgb::from_hex(hex).ok_or_else(|| {
        ArtboardError::format("canvas background", format!("invalid color '{hex}'"))
    })
}

/// Reads, resolves and classifies `node` and its descendants in a single
/// document-order walk: a node is fully checked before its first child is
/// read. Required-children rules still run once the children are built.
fn layer_element(
    node: Node<'_, '_>,
    ancestor: &Attributes,
    overrides: &OverrideTable,
) -> Result<Element, ArtboardError> {
    let raw = raw_node(node, overrides)?;
    let prepared = prepare(&raw, ancestor, overrides)?;

    let mut children = Vec::new();
    if raw.tag != "text" {
        for child in layer_children(node) {
            children.push(layer_element(child, &raw.attrs, overrides)?);
        }
    }
    build(prepared, children)
}

/// Converts one SVG element into a raw node, without its children.
fn raw_node(node: Node<'_, '_>, overrides: &OverrideTable) -> Result<RawNode, ArtboardError> {
    let tag = node.tag_name().name();
    let id = node.attribute("id").ok_or_else(|| {
        ArtboardError::format(
            format!("<{tag}> at byte {}", node.range().start),
            "layer has no id",
        )
    })?;
    let attrs = attributes_of(node);
    let entry = overrides.get(id);

    let lookup = |name: &str| {
        attrs
            .raw(name)
            .or_else(|| entry.and_then(|entry| entry.raw(name)))
    };
    let geometry = |name: &str| -> Result<f64, ArtboardError> {
        let raw = lookup(name).ok_or_else(|| {
            ArtboardError::format(format!("layer '{id}'"), format!("missing {name}"))
        })?;
        match parse_number(raw) {
            Some(value) if value >= 0.0 => Ok(value.round()),
            _ => Err(ArtboardError::format(
                format!("layer '{id}'"),
                format!("invalid {name} '{raw}'"),
            )),
        }
    };

    let frame: Rect<Pixel> = Rect::from_xywh(
        geometry("x")?,
        geometry("y")?,
        geometry("width")?,
        geometry("height")?,
    );
    let kind = lookup(TYPE_ATTR).unwrap_or(tag).to_string();

    let mut raw = RawNode::new(id, tag, frame).with_kind(kind);
    raw.attrs = attrs;

    if tag == "text" {
        raw.text_runs = node
            .descendants()
            .filter(|child| child.is_text())
            .filter_map(|child| child.text())
            .map(str::to_string)
            .collect();
    }

    Ok(raw)
}
