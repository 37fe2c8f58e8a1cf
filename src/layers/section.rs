use std::collections::BTreeMap;

use super::{derived_name, is_bound};
use crate::error::ArtboardError;
use crate::ir::{ContainerRole, Element, Layer, LayerId, RawNode, Section, Style};

/// Builds a section: one bound rectangle, at least one cell and at most one
/// header. Anything else among the children is ignored.
pub(super) fn build_section(
    node: &RawNode,
    children: Vec<Element>,
) -> Result<Element, ArtboardError> {
    let mut header = None;
    let mut bound = None;
    let mut cells = Vec::new();

    for child in children {
        let role = child.as_container().map(|container| container.role);
        match role {
            Some(ContainerRole::Header) => {
                if header.is_some() {
                    return Err(ArtboardError::structural(
                        &node.id,
                        "only one header allowed per section",
                    ));
                }
                header = Some(child);
            }
            Some(ContainerRole::Cell) => cells.push(child),
            _ if is_bound(child.id.as_str()) => {
                if bound.is_some() {
                    return Err(ArtboardError::structural(
                        &node.id,
                        "only one bound allowed per section",
                    ));
                }
                bound = Some(child);
            }
            _ => log::debug!("section '{}' ignores child '{}'", node.id, child.id),
        }
    }

    if cells.is_empty() {
        return Err(ArtboardError::structural(&node.id, "section has no cells"));
    }
    let bound =
        bound.ok_or_else(|| ArtboardError::structural(&node.id, "section has no bound"))?;

    let mut custom_cells = BTreeMap::new();
    for cell in &cells {
        custom_cells
            .entry(derived_name(cell.id.as_str(), "cell"))
            .or_insert_with(|| cell.id.clone());
    }

    cells.sort_by(|a, b| a.frame.y.total_cmp(&b.frame.y));

    Ok(Element {
        id: LayerId::new(node.id.clone()),
        style: Style::from_resolved(&node.attrs),
        frame: node.frame,
        layer: Layer::Section(Section {
            header: header.map(Box::new),
            cells,
            custom_cells,
            bound: Box::new(bound),
            separator: Vec::new(),
            table_separate: false,
        }),
    })
}
