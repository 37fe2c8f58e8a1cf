//! Classification of resolved nodes into typed layer variants.
//!
//! A node's declared kind (its `type` attribute, or its SVG tag) selects a
//! constructor. Children are classified first, so every constructor sees
//! its children as finished [`Element`]s and only has to check its own
//! structural rules.

mod button;
mod collection;
mod section;
mod slider;

use crate::error::ArtboardError;
use crate::ir::{
    Attributes, Container, ContainerRole, Coord, Element, Layer, LayerId, ListKind,
    OverrideTable, RawNode, Rgb, ShapeKind, ShapeLayer, Style, TextLabel,
};
use crate::resolve::resolve;

/// What a node declares itself to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclaredKind {
    Shape,
    Text,
    Button,
    Section,
    List(ListKind),
    Slider,
    Container(ContainerRole),
}

impl DeclaredKind {
    /// Maps a declared kind string to its variant. Matching is exact.
    pub fn parse(kind: &str) -> Option<Self> {
        let declared = match kind {
            "rect" | "circle" | "ellipse" | "line" | "path" | "polygon" | "polyline" | "image"
            | "Shape" | "UIImageView" => DeclaredKind::Shape,
            "text" | "Text" | "UILabel" => DeclaredKind::Text,
            "Button" | "UIButton" => DeclaredKind::Button,
            "Section" => DeclaredKind::Section,
            "UITableView" | "TableView" => DeclaredKind::List(ListKind::Table),
            "UICollectionView" | "CollectionView" => DeclaredKind::List(ListKind::Collection),
            "SliderView" => DeclaredKind::Slider,
            "g" | "UIView" | "Container" => DeclaredKind::Container(ContainerRole::View),
            "Cell" => DeclaredKind::Container(ContainerRole::Cell),
            "Header" => DeclaredKind::Container(ContainerRole::Header),
            "SliderOptions" => DeclaredKind::Container(ContainerRole::SliderOptions),
            "SliderContent" => DeclaredKind::Container(ContainerRole::SliderContent),
            _ => return None,
        };
        Some(declared)
    }
}

/// Resolves and classifies `node` and, recursively, its children.
///
/// `ancestor` holds the raw attributes of the node's structural parent.
/// Children inherit from `node`'s own raw attributes, one level only.
///
/// # Errors
/// Returns the first attribute, format or structural error in document
/// order.
pub fn build_tree(
    node: &RawNode,
    ancestor: &Attributes,
    overrides: &OverrideTable,
) -> Result<Element, ArtboardError> {
    let prepared = prepare(node, ancestor, overrides)?;
    let children = node
        .children
        .iter()
        .map(|child| build_tree(child, &node.attrs, overrides))
        .collect::<Result<Vec<_>, _>>()?;
    build(prepared, children)
}

/// A node whose own attributes and kind have been checked, waiting for its
/// children.
#[derive(Clone, Debug)]
pub struct Prepared {
    node: RawNode,
    declared: DeclaredKind,
    own_fill: Option<Rgb>,
}

/// Runs the checks that concern `node` alone: attribute resolution and the
/// declared kind. Callers walking a document run this before descending, so
/// a node's own errors win over those of its children.
///
/// # Errors
/// Returns [`ArtboardError::Attribute`] for unconvertible values and
/// [`ArtboardError::Structural`] for unknown kinds.
pub fn prepare(
    node: &RawNode,
    ancestor: &Attributes,
    overrides: &OverrideTable,
) -> Result<Prepared, ArtboardError> {
    let resolved = resolve(node, ancestor, overrides)?;
    let declared = declared_kind(&resolved)?;

    // A label's own fill decides a button title's color.
    let own_fill = match declared {
        DeclaredKind::Text => {
            let uninherited = resolve(node, &Attributes::new(), overrides)?;
            Style::from_resolved(&uninherited.attrs).fill
        }
        _ => None,
    };

    Ok(Prepared {
        node: resolved,
        declared,
        own_fill,
    })
}

/// Classifies a prepared node whose children are already built.
///
/// # Errors
/// Returns [`ArtboardError::Structural`] when the variant's
/// required-children rule is violated.
pub fn build(prepared: Prepared, children: Vec<Element>) -> Result<Element, ArtboardError> {
    let Prepared {
        node,
        declared,
        own_fill,
    } = prepared;
    let node = &node;

    match declared {
        DeclaredKind::Shape => Ok(build_shape(node, children)),
        DeclaredKind::Text => Ok(build_text(node, own_fill, children)),
        DeclaredKind::Button => button::build_button(node, children),
        DeclaredKind::Section => section::build_section(node, children),
        DeclaredKind::List(list) => collection::build_list(node, children, list),
        DeclaredKind::Slider => slider::build_slider(node, children),
        DeclaredKind::Container(role) => Ok(leaf(
            node,
            Layer::Container(Container { role, children }),
        )),
    }
}

fn declared_kind(node: &RawNode) -> Result<DeclaredKind, ArtboardError> {
    DeclaredKind::parse(&node.kind).ok_or_else(|| {
        ArtboardError::structural(
            &node.id,
            format!("unrecognized element kind '{}'", node.kind),
        )
    })
}

fn leaf(node: &RawNode, layer: Layer) -> Element {
    Element {
        id: LayerId::new(node.id.clone()),
        style: Style::from_resolved(&node.attrs),
        frame: node.frame,
        layer,
    }
}

fn build_shape(node: &RawNode, children: Vec<Element>) -> Element {
    ignore_children(node, &children);
    let shape = match node.kind.as_str() {
        "UIImageView" => ShapeKind::Image,
        kind => shape_from_tag(kind)
            .or_else(|| shape_from_tag(&node.tag))
            .unwrap_or(ShapeKind::Rect),
    };
    leaf(node, Layer::Shape(ShapeLayer { shape }))
}

fn shape_from_tag(tag: &str) -> Option<ShapeKind> {
    match tag {
        "rect" => Some(ShapeKind::Rect),
        "circle" => Some(ShapeKind::Circle),
        "ellipse" => Some(ShapeKind::Ellipse),
        "line" => Some(ShapeKind::Line),
        "path" => Some(ShapeKind::Path),
        "polygon" => Some(ShapeKind::Polygon),
        "polyline" => Some(ShapeKind::Polyline),
        "image" => Some(ShapeKind::Image),
        _ => None,
    }
}

fn build_text(node: &RawNode, own_fill: Option<Rgb>, children: Vec<Element>) -> Element {
    ignore_children(node, &children);
    let frame = node.frame;
    let label = TextLabel {
        text: node.text_content(),
        center: Coord::new((frame.x + frame.width) / 2.0, (frame.y + frame.height) / 2.0),
        own_fill,
    };
    leaf(node, Layer::Text(label))
}

fn ignore_children(node: &RawNode, children: &[Element]) {
    for child in children {
        log::debug!("'{}' cannot hold children; ignoring '{}'", node.id, child.id);
    }
}

/// Case-insensitive "the id marks a bound rectangle" check.
pub(crate) fn is_bound(id: &str) -> bool {
    id.to_ascii_lowercase().contains("bound")
}

/// Derives a type name from an element id: the prefix up to and including
/// `word` (matched case-insensitively), or the whole id when `word` does not
/// occur, with the first letter uppercased.
///
/// `profileCell2` with word `cell` becomes `ProfileCell`.
pub(crate) fn derived_name(id: &str, word: &str) -> String {
    let lowered = id.to_ascii_lowercase();
    let prefix = match lowered.find(&word.to_ascii_lowercase()) {
        Some(index) => &id[..index + word.len()],
        None => id,
    };
    uppercase_first(prefix)
}

pub(crate) fn uppercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::ir::{Pixel, RawNode, Rect};

    /// A raw node of the given declared kind; non-SVG kinds get a `g` tag.
    pub fn raw(id: &str, kind: &str, x: f64, y: f64, w: f64, h: f64) -> RawNode {
        let tag = match kind {
            "rect" | "text" => kind,
            _ => "g",
        };
        RawNode::new(id, tag, Rect::<Pixel>::from_xywh(x, y, w, h)).with_kind(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::raw;
    use super::*;

    #[test]
    fn declared_kinds_cover_aliases() {
        assert_eq!(DeclaredKind::parse("UILabel"), Some(DeclaredKind::Text));
        assert_eq!(DeclaredKind::parse("UIImageView"), Some(DeclaredKind::Shape));
        assert_eq!(
            DeclaredKind::parse("CollectionView"),
            Some(DeclaredKind::List(ListKind::Collection))
        );
        assert_eq!(
            DeclaredKind::parse("Cell"),
            Some(DeclaredKind::Container(ContainerRole::Cell))
        );
        assert_eq!(DeclaredKind::parse("UISwitch"), None);
        assert_eq!(DeclaredKind::parse("section"), None);
    }

    #[test]
    fn unknown_kind_is_structural_error() {
        let node = raw("toggle", "UISwitch", 0.0, 0.0, 10.0, 10.0);
        let err = build_tree(&node, &Attributes::new(), &OverrideTable::new()).unwrap_err();
        match err {
            ArtboardError::Structural { element, rule } => {
                assert_eq!(element, "toggle");
                assert!(rule.contains("UISwitch"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn text_center_averages_origin_and_size() {
        let node = raw("title", "text", 10.0, 20.0, 100.0, 40.0)
            .with_text("Hello")
            .with_text("  ");
        let element = build_tree(&node, &Attributes::new(), &OverrideTable::new()).expect("build");

        match element.layer {
            Layer::Text(label) => {
                assert_eq!(label.text, "Hello");
                assert_eq!(label.center.x, 55.0);
                assert_eq!(label.center.y, 30.0);
            }
            other => panic!("unexpected layer: {other:?}"),
        }
    }

    #[test]
    fn generic_shape_kind_uses_tag() {
        let node = RawNode::new("avatar", "circle", Default::default()).with_kind("Shape");
        let element = build_tree(&node, &Attributes::new(), &OverrideTable::new()).expect("build");
        assert_eq!(
            element.layer,
            Layer::Shape(ShapeLayer {
                shape: ShapeKind::Circle
            })
        );

        let node = RawNode::new("photo", "rect", Default::default()).with_kind("UIImageView");
        let element = build_tree(&node, &Attributes::new(), &OverrideTable::new()).expect("build");
        assert_eq!(
            element.layer,
            Layer::Shape(ShapeLayer {
                shape: ShapeKind::Image
            })
        );
    }

    #[test]
    fn children_inherit_from_parent_only() {
        let grandchild = raw("dot", "rect", 0.0, 0.0, 1.0, 1.0);
        let child = raw("inner", "g", 0.0, 0.0, 5.0, 5.0).with_child(grandchild);
        let root = raw("outer", "g", 0.0, 0.0, 10.0, 10.0)
            .with_attr("fill", "#FF0000")
            .with_child(child);

        let element = build_tree(&root, &Attributes::new(), &OverrideTable::new()).expect("build");
        let inner = &element.as_container().expect("container").children[0];
        let dot = &inner.as_container().expect("container").children[0];

        assert_eq!(inner.style.fill, Some(crate::ir::Rgb::new(255, 0, 0)));
        assert_eq!(dot.style.fill, None);
    }

    #[test]
    fn derived_names() {
        assert_eq!(derived_name("profileCell2", "cell"), "ProfileCell");
        assert_eq!(derived_name("newsHeaderView", "header"), "NewsHeader");
        assert_eq!(derived_name("banner", "header"), "Banner");
        assert_eq!(lowercase_first("FeedCell"), "feedCell");
        assert_eq!(uppercase_first(""), "");
    }

    #[test]
    fn bound_detection_ignores_case() {
        assert!(is_bound("sectionBound"));
        assert!(is_bound("BOUNDS"));
        assert!(!is_bound("background"));
    }
}
