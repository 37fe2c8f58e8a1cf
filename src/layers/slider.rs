use std::collections::BTreeMap;

use super::{is_bound, lowercase_first, uppercase_first};
use crate::error::ArtboardError;
use crate::ir::{
    CollectionView, Container, ContainerRole, Element, Layer, LayerId, ListKind, RawNode, Section,
    ShapeKind, ShapeLayer, SliderView, Style,
};

/// Builds a slider view from one options block and one content block.
///
/// The content block is rewritten into a single-cell collection view named
/// `<id>CollectionView`, so emitters can page through it like any other
/// collection.
pub(super) fn build_slider(node: &RawNode, children: Vec<Element>) -> Result<Element, ArtboardError> {
    let mut options = None;
    let mut content = None;
    let mut bound = None;

    for child in children {
        let role = child.as_container().map(|container| container.role);
        let slot = match role {
            Some(ContainerRole::SliderOptions) => &mut options,
            Some(ContainerRole::SliderContent) => &mut content,
            _ if is_bound(child.id.as_str()) => &mut bound,
            _ => {
                log::debug!("slider '{}' ignores child '{}'", node.id, child.id);
                continue;
            }
        };
        if slot.is_some() {
            return Err(ArtboardError::structural(
                &node.id,
                format!("slider has more than one '{}' block", child.id),
            ));
        }
        *slot = Some(child);
    }

    let options = options
        .ok_or_else(|| ArtboardError::structural(&node.id, "slider has no options block"))?;
    let content = content
        .ok_or_else(|| ArtboardError::structural(&node.id, "slider has no content block"))?;

    Ok(Element {
        id: LayerId::new(node.id.clone()),
        style: Style::from_resolved(&node.attrs),
        frame: node.frame,
        layer: Layer::Slider(SliderView {
            options: Box::new(options),
            content: Box::new(paged_collection(&node.id, content)),
            bound: bound.map(Box::new),
        }),
    })
}

/// Wraps the content block's children in one cell of one section of a
/// collection view.
fn paged_collection(slider_id: &str, content: Element) -> Element {
    let collection_id = format!("{slider_id}CollectionView");
    let cell_name = format!("{}Cell", uppercase_first(&collection_id));
    let cell_id = LayerId::new(lowercase_first(&cell_name));
    let frame = content.frame;

    let children = match content.layer {
        Layer::Container(container) => container.children,
        _ => Vec::new(),
    };

    let cell = Element {
        id: cell_id.clone(),
        style: content.style.clone(),
        frame,
        layer: Layer::Container(Container {
            role: ContainerRole::Cell,
            children,
        }),
    };
    let bound = Element {
        id: LayerId::new(format!("{collection_id}Bound")),
        style: Style::default(),
        frame,
        layer: Layer::Shape(ShapeLayer {
            shape: ShapeKind::Rect,
        }),
    };
    let section = Element {
        id: LayerId::new(format!("{collection_id}Section")),
        style: Style::default(),
        frame,
        layer: Layer::Section(Section {
            header: None,
            cells: vec![cell],
            custom_cells: BTreeMap::from([(cell_name, cell_id)]),
            bound: Box::new(bound),
            separator: vec![0.0],
            table_separate: false,
        }),
    };

    Element {
        id: LayerId::new(collection_id),
        style: content.style,
        frame,
        layer: Layer::Collection(CollectionView {
            list: ListKind::Collection,
            scroll_dir: None,
            sections: vec![section],
            separator: vec![0.0],
            custom_headers: BTreeMap::new(),
            bound: None,
        }),
    }
}
