//! Screen inspection.
//!
//! This module summarizes a parsed screen for a human reader: the canvas,
//! how many layers of each variant it holds, and where every top-level
//! layer is anchored.

mod report;

pub use report::{AnchorRow, CanvasSection, InspectReport, KindCount};

use crate::ir::{Element, LayerKind, Screen};

/// Options for screen inspection.
#[derive(Clone, Debug)]
pub struct InspectOptions {
    /// Width of histogram bars (in characters).
    pub bar_width: usize,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self { bar_width: 16 }
    }
}

/// Inspect a screen and produce a report.
///
/// This computes:
/// - Canvas summary (names, size, background, layer and element totals)
/// - Top-level layer counts per variant
/// - The anchor table, one row per top-level layer in final order
pub fn inspect_screen(screen: &Screen, opts: &InspectOptions) -> InspectReport {
    let elements = screen
        .layers
        .iter()
        .map(|layer| 1 + layer.layer.children().into_iter().map(count_elements).sum::<usize>())
        .sum();

    let canvas = CanvasSection {
        page: screen.canvas.page.clone(),
        artboard: screen.canvas.artboard.clone(),
        width: screen.canvas.width,
        height: screen.canvas.height,
        background: screen.canvas.background.to_hex(),
        layers: screen.layers.len(),
        elements,
    };

    let kinds = LayerKind::ALL
        .iter()
        .map(|&kind| KindCount {
            kind,
            count: screen.layers.iter().filter(|l| l.kind() == kind).count(),
        })
        .collect();

    let anchors = screen
        .layers
        .iter()
        .map(|layer| AnchorRow {
            id: layer.id.to_string(),
            kind: layer.kind(),
            vertical_ref: layer.vertical.reference.as_ref().map(ToString::to_string),
            vertical_distance: layer.vertical.distance,
            horizontal_ref: layer.horizontal.reference.as_ref().map(ToString::to_string),
            horizontal_distance: layer.horizontal.distance,
        })
        .collect();

    InspectReport {
        canvas,
        kinds,
        anchors,
        bar_width: opts.bar_width,
    }
}

/// Counts `element` and everything nested inside it.
fn count_elements(element: &Element) -> usize {
    1 + element
        .layer
        .children()
        .into_iter()
        .map(count_elements)
        .sum::<usize>()
}
