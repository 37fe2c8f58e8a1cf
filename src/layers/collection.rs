use std::collections::BTreeMap;

use super::{derived_name, is_bound};
use crate::anchor::geometry::{spacing, Axis};
use crate::error::ArtboardError;
use crate::ir::{
    CollectionView, Element, Layer, LayerId, ListKind, RawNode, ScrollDirection, Section, Style,
};

/// Builds a table or collection view from its sections.
///
/// Sections are ordered top to bottom and get their cell spacing filled in.
/// A collection id may end in `:horizontal` or `:vertical`, which sets the
/// scroll direction and is stripped from the id.
pub(super) fn build_list(
    node: &RawNode,
    children: Vec<Element>,
    list: ListKind,
) -> Result<Element, ArtboardError> {
    let (id, scroll_dir) = match list {
        ListKind::Collection => split_scroll_suffix(&node.id)?,
        ListKind::Table => (node.id.clone(), None),
    };

    let mut sections = Vec::new();
    let mut bound = None;
    for child in children {
        if child.as_section().is_some() {
            sections.push(child);
        } else if is_bound(child.id.as_str()) {
            if bound.is_some() {
                return Err(ArtboardError::structural(
                    &node.id,
                    "only one bound allowed per list",
                ));
            }
            bound = Some(child);
        } else {
            log::debug!("list '{}' ignores child '{}'", node.id, child.id);
        }
    }

    if sections.is_empty() {
        return Err(ArtboardError::structural(&node.id, "list has no sections"));
    }
    sections.sort_by(|a, b| a.frame.y.total_cmp(&b.frame.y));

    for element in &mut sections {
        if let Layer::Section(section) = &mut element.layer {
            fill_separator(section, list);
        }
    }

    let separator = match sections.as_slice() {
        [first, second, ..] => vec![spacing(&first.frame, &second.frame, Axis::Vertical)],
        _ => Vec::new(),
    };

    let mut custom_headers = BTreeMap::new();
    for header in sections
        .iter()
        .filter_map(Element::as_section)
        .filter_map(|section| section.header.as_deref())
    {
        custom_headers
            .entry(derived_name(header.id.as_str(), "header"))
            .or_insert_with(|| header.id.clone());
    }

    Ok(Element {
        id: LayerId::new(id),
        style: Style::from_resolved(&node.attrs),
        frame: node.frame,
        layer: Layer::Collection(CollectionView {
            list,
            scroll_dir,
            sections,
            separator,
            custom_headers,
            bound: bound.map(Box::new),
        }),
    })
}

/// Cell spacing of one section.
///
/// Tables record the vertical gap between the first two cells. Collections
/// record the horizontal gap between the first two cells and, when a second
/// row exists, the vertical gap from the first cell to the first cell below
/// it.
fn fill_separator(section: &mut Section, list: ListKind) {
    let separator = match (list, section.cells.as_slice()) {
        (ListKind::Table, [first, second, ..]) => {
            vec![spacing(&first.frame, &second.frame, Axis::Vertical)]
        }
        (ListKind::Collection, [first, second, ..]) => {
            let mut separator = vec![spacing(&first.frame, &second.frame, Axis::Horizontal)];
            if let Some(next_row) = section.cells.iter().find(|cell| cell.frame.y > first.frame.y)
            {
                separator.push(spacing(&first.frame, &next_row.frame, Axis::Vertical));
            }
            separator
        }
        _ => Vec::new(),
    };

    section.table_separate =
        list == ListKind::Table && separator.first().is_some_and(|gap| *gap > 0.0);
    section.separator = separator;
}

fn split_scroll_suffix(id: &str) -> Result<(String, Option<ScrollDirection>), ArtboardError> {
    let Some((base, suffix)) = id.split_once(':') else {
        return Ok((id.to_string(), None));
    };

    let lowered = suffix.to_ascii_lowercase();
    let direction = if lowered.contains("horizontal") {
        ScrollDirection::Horizontal
    } else if lowered.contains("vertical") {
        ScrollDirection::Vertical
    } else {
        return Err(ArtboardError::format(
            format!("collection '{id}'"),
            format!("unknown scroll direction suffix ':{suffix}'"),
        ));
    };
    Ok((base.to_string(), Some(direction)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Attributes, OverrideTable};
    use crate::layers::build_tree;
    use crate::layers::test_support::raw;

    fn cell(id: &str, x: f64, y: f64, w: f64, h: f64) -> RawNode {
        raw(id, "Cell", x, y, w, h)
    }

    fn section(id: &str, y: f64, cells: Vec<RawNode>) -> RawNode {
        let mut node = raw(id, "Section", 0.0, y, 375.0, 200.0)
            .with_child(raw(&format!("{id}Bound"), "rect", 0.0, y, 375.0, 200.0));
        for cell in cells {
            node = node.with_child(cell);
        }
        node
    }

    fn built(node: &RawNode) -> Result<Element, ArtboardError> {
        build_tree(node, &Attributes::new(), &OverrideTable::new())
    }

    fn list(element: &Element) -> &CollectionView {
        match &element.layer {
            Layer::Collection(view) => view,
            other => panic!("unexpected layer: {other:?}"),
        }
    }

    #[test]
    fn table_separator_and_separation() {
        let node = raw("settings", "UITableView", 0.0, 0.0, 375.0, 600.0).with_child(section(
            "general",
            0.0,
            vec![
                cell("rowCell", 0.0, 0.0, 375.0, 44.0),
                cell("rowCell2", 0.0, 52.0, 375.0, 44.0),
            ],
        ));

        let element = built(&node).expect("table");
        let view = list(&element);
        let general = view.sections[0].as_section().expect("section");
        assert_eq!(general.separator, vec![8.0]);
        assert!(general.table_separate);
        assert!(view.separator.is_empty());
        assert_eq!(view.scroll_dir, None);
    }

    #[test]
    fn touching_table_cells_are_not_separated() {
        let node = raw("settings", "TableView", 0.0, 0.0, 375.0, 600.0).with_child(section(
            "general",
            0.0,
            vec![
                cell("rowCell", 0.0, 0.0, 375.0, 44.0),
                cell("rowCell2", 0.0, 44.0, 375.0, 44.0),
            ],
        ));
        let element = built(&node).expect("table");
        let general = list(&element).sections[0].as_section().expect("section");
        assert_eq!(general.separator, vec![0.0]);
        assert!(!general.table_separate);
    }

    #[test]
    fn collection_separator_uses_next_row() {
        let node = raw("grid", "UICollectionView", 0.0, 0.0, 375.0, 600.0).with_child(section(
            "photos",
            0.0,
            vec![
                cell("photoCell", 0.0, 0.0, 100.0, 100.0),
                cell("photoCell2", 110.0, 0.0, 100.0, 100.0),
                cell("photoCell3", 0.0, 115.0, 100.0, 100.0),
            ],
        ));

        let element = built(&node).expect("collection");
        let photos = list(&element).sections[0].as_section().expect("section");
        assert_eq!(photos.separator, vec![10.0, 15.0]);
        assert!(!photos.table_separate);
    }

    #[test]
    fn sections_sorted_and_cross_separator() {
        let node = raw("feed", "UITableView", 0.0, 0.0, 375.0, 600.0)
            .with_child(section("later", 230.0, vec![cell("aCell", 0.0, 230.0, 375.0, 44.0)]))
            .with_child(section("first", 0.0, vec![cell("bCell", 0.0, 0.0, 375.0, 44.0)]));

        let element = built(&node).expect("table");
        let view = list(&element);
        let order: Vec<_> = view.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(order, vec!["first", "later"]);
        assert_eq!(view.separator, vec![30.0]);
    }

    #[test]
    fn custom_headers_first_wins() {
        let with_header = |id: &str, y: f64, header: &str| {
            section(id, y, vec![cell(&format!("{id}Cell"), 0.0, y + 40.0, 375.0, 44.0)])
                .with_child(raw(header, "Header", 0.0, y, 375.0, 40.0))
        };
        let node = raw("feed", "UITableView", 0.0, 0.0, 375.0, 600.0)
            .with_child(with_header("one", 0.0, "newsHeader"))
            .with_child(with_header("two", 250.0, "newsHeader2"));

        let element = built(&node).expect("table");
        let view = list(&element);
        assert_eq!(view.custom_headers.len(), 1);
        assert_eq!(view.custom_headers["NewsHeader"], LayerId::from("newsHeader"));
    }

    #[test]
    fn scroll_suffix_is_parsed_and_stripped() {
        let node = raw("list:horizontal", "UICollectionView", 0.0, 0.0, 375.0, 200.0)
            .with_child(section("s", 0.0, vec![cell("c", 0.0, 0.0, 100.0, 100.0)]));

        let element = built(&node).expect("collection");
        assert_eq!(element.id.as_str(), "list");
        assert_eq!(list(&element).scroll_dir, Some(ScrollDirection::Horizontal));
    }

    #[test]
    fn unknown_scroll_suffix_is_format_error() {
        let node = raw("list:unexpected", "UICollectionView", 0.0, 0.0, 375.0, 200.0)
            .with_child(section("s", 0.0, vec![cell("c", 0.0, 0.0, 100.0, 100.0)]));
        assert!(matches!(built(&node), Err(ArtboardError::Format { .. })));
    }

    #[test]
    fn tables_keep_colons_in_ids() {
        let node = raw("list:odd", "UITableView", 0.0, 0.0, 375.0, 200.0)
            .with_child(section("s", 0.0, vec![cell("c", 0.0, 0.0, 375.0, 44.0)]));
        let element = built(&node).expect("table");
        assert_eq!(element.id.as_str(), "list:odd");
    }

    #[test]
    fn zero_sections_fail() {
        let node = raw("empty", "UICollectionView", 0.0, 0.0, 375.0, 200.0);
        assert!(matches!(
            built(&node),
            Err(ArtboardError::Structural { .. })
        ));
    }
}
