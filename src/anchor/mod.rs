//! Anchor inference for top-level layers.
//!
//! Elements are ordered by a reading-order key (`x + y + width + height`),
//! then anchored in a single forward pass: each element looks back over the
//! already anchored ones, most recent first, and takes the first that it can
//! hang below (vertical anchor) and the first it can sit right of
//! (horizontal anchor). Without such a sibling it is anchored to the
//! container edge at its own offset.
//!
//! The first candidate in scan order wins even when another sibling is
//! geometrically closer. References therefore always point backwards in
//! the output order.

pub mod geometry;

use crate::ir::{Anchor, AnchorDirection, CanvasMeta, Element, LayerNode};

use geometry::gap;

/// Orders and anchors top-level elements.
///
/// Output order is the sort order. Geometry and anchor distances are
/// normalized by the canvas dimension on their axis.
pub fn anchor_elements(elements: Vec<Element>, canvas: &CanvasMeta) -> Vec<LayerNode> {
    let mut ordered = elements;
    // `sort_by` is stable: equal keys keep document order.
    ordered.sort_by(|a, b| {
        a.frame
            .positional_key()
            .total_cmp(&b.frame.positional_key())
    });

    let width = f64::from(canvas.width);
    let height = f64::from(canvas.height);
    let mut placed: Vec<LayerNode> = Vec::with_capacity(ordered.len());

    for element in ordered {
        let mut vertical = None;
        let mut horizontal = None;

        for candidate in placed.iter().rev() {
            if vertical.is_none() {
                vertical = gap(&candidate.pixel_frame, &element.frame, AnchorDirection::Up)
                    .map(|distance| (candidate.id.clone(), distance));
            }
            if horizontal.is_none() {
                horizontal = gap(&candidate.pixel_frame, &element.frame, AnchorDirection::Left)
                    .map(|distance| (candidate.id.clone(), distance));
            }
            if vertical.is_some() && horizontal.is_some() {
                break;
            }
        }

        let vertical = match vertical {
            Some((reference, distance)) => {
                Anchor::to_sibling(AnchorDirection::Up, reference, distance / height)
            }
            None => Anchor::to_edge(AnchorDirection::Up, element.frame.y / height),
        };
        let horizontal = match horizontal {
            Some((reference, distance)) => {
                Anchor::to_sibling(AnchorDirection::Left, reference, distance / width)
            }
            None => Anchor::to_edge(AnchorDirection::Left, element.frame.x / width),
        };

        log::debug!(
            "anchored '{}': vertical {} {:?} {:.4}, horizontal {} {:?} {:.4}",
            element.id,
            vertical.direction,
            vertical.reference.as_ref().map(|id| id.as_str()),
            vertical.distance,
            horizontal.direction,
            horizontal.reference.as_ref().map(|id| id.as_str()),
            horizontal.distance,
        );

        placed.push(LayerNode {
            frame: element.frame.to_normalized(width, height),
            pixel_frame: element.frame,
            id: element.id,
            style: element.style,
            vertical,
            horizontal,
            layer: element.layer,
        });
    }

    placed
}
