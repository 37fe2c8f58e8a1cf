//! Screen validation for artboard.
//!
//! A screen produced by the parser satisfies these checks by construction.
//! They exist for IR JSON that was cached, hand-edited or produced by
//! another tool before it reaches an emitter:
//! - Canvas integrity (positive dimensions)
//! - Layer identity (unique ids)
//! - Anchor integrity (known, earlier references on the right axis)
//! - Geometric sanity (finite frames inside the canvas)

mod report;

pub use report::{IssueCode, IssueContext, Severity, ValidationIssue, ValidationReport};

use std::collections::HashMap;

use crate::ir::{Anchor, AnchorDirection, CanvasMeta, LayerNode, Screen};

/// Relative tolerance when comparing normalized and pixel frames.
const FRAME_TOLERANCE: f64 = 1e-6;

/// Options for validation behavior.
#[derive(Clone, Debug, Default)]
pub struct ValidateOptions {
    /// If true, treat warnings as errors.
    pub strict: bool,
}

/// Validates a screen and returns a report of all issues found.
pub fn validate_screen(screen: &Screen, _opts: &ValidateOptions) -> ValidationReport {
    let mut report = ValidationReport::new();

    let canvas_ok = validate_canvas(&screen.canvas, &mut report);

    // First position of each id, in final order.
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for (index, layer) in screen.layers.iter().enumerate() {
        let id = layer.id.as_str();
        if let Some(first) = positions.get(id) {
            report.add(ValidationIssue::error(
                IssueCode::DuplicateLayerId,
                format!("Duplicate layer id (first seen at index {})", first),
                IssueContext::Layer { id: id.to_string() },
            ));
        } else {
            positions.insert(id, index);
        }
    }

    for (index, layer) in screen.layers.iter().enumerate() {
        validate_anchor(layer, &layer.vertical, Axis::Vertical, index, &positions, &mut report);
        validate_anchor(
            layer,
            &layer.horizontal,
            Axis::Horizontal,
            index,
            &positions,
            &mut report,
        );
        validate_frame(layer, &screen.canvas, canvas_ok, &mut report);
    }

    report
}

#[derive(Clone, Copy)]
enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    fn name(self) -> &'static str {
        match self {
            Axis::Vertical => "vertical",
            Axis::Horizontal => "horizontal",
        }
    }

    fn direction(self) -> AnchorDirection {
        match self {
            Axis::Vertical => AnchorDirection::Up,
            Axis::Horizontal => AnchorDirection::Left,
        }
    }
}

/// Returns true if the canvas can be used to check layer geometry.
fn validate_canvas(canvas: &CanvasMeta, report: &mut ValidationReport) -> bool {
    if canvas.width == 0 || canvas.height == 0 {
        report.add(ValidationIssue::error(
            IssueCode::InvalidCanvasDimensions,
            format!(
                "Invalid dimensions {}x{} (must be positive)",
                canvas.width, canvas.height
            ),
            IssueContext::Canvas,
        ));
        return false;
    }
    true
}

fn validate_anchor(
    layer: &LayerNode,
    anchor: &Anchor,
    axis: Axis,
    index: usize,
    positions: &HashMap<&str, usize>,
    report: &mut ValidationReport,
) {
    let context = || IssueContext::Anchor {
        id: layer.id.to_string(),
        axis: axis.name(),
    };

    if anchor.direction != axis.direction() {
        report.add(ValidationIssue::error(
            IssueCode::WrongAnchorAxis,
            format!("Direction '{}' on the {} axis", anchor.direction, axis.name()),
            context(),
        ));
    }

    if !anchor.distance.is_finite() || anchor.distance < 0.0 {
        report.add(ValidationIssue::error(
            IssueCode::InvalidAnchorDistance,
            format!("Distance {} (must be finite and non-negative)", anchor.distance),
            context(),
        ));
    }

    if let Some(reference) = &anchor.reference {
        match positions.get(reference.as_str()) {
            None => report.add(ValidationIssue::error(
                IssueCode::UnknownAnchorRef,
                format!("References unknown layer '{}'", reference),
                context(),
            )),
            Some(&position) if position >= index => report.add(ValidationIssue::error(
                IssueCode::ForwardAnchorRef,
                format!(
                    "References '{}' at index {}, which is not before index {}",
                    reference, position, index
                ),
                context(),
            )),
            Some(_) => {}
        }
    }
}

fn validate_frame(
    layer: &LayerNode,
    canvas: &CanvasMeta,
    canvas_ok: bool,
    report: &mut ValidationReport,
) {
    let context = || IssueContext::Layer {
        id: layer.id.to_string(),
    };

    if !layer.frame.is_finite() || !layer.pixel_frame.is_finite() {
        report.add(ValidationIssue::error(
            IssueCode::FrameNotFinite,
            format!(
                "Frame has non-finite components: normalized {:?}, pixel {:?}",
                layer.frame, layer.pixel_frame
            ),
            context(),
        ));
        return;
    }

    if !layer.frame.is_within_unit() {
        report.add(ValidationIssue::warning(
            IssueCode::FrameOutOfUnit,
            format!(
                "Normalized frame ({:.4}, {:.4}, {:.4}, {:.4}) is outside the unit square",
                layer.frame.x, layer.frame.y, layer.frame.width, layer.frame.height
            ),
            context(),
        ));
    }

    if !canvas_ok {
        return;
    }

    let width = f64::from(canvas.width);
    let height = f64::from(canvas.height);
    let pixel = &layer.pixel_frame;

    if pixel.x < 0.0 || pixel.y < 0.0 || pixel.right() > width || pixel.bottom() > height {
        report.add(ValidationIssue::warning(
            IssueCode::LayerOutOfCanvas,
            format!(
                "Frame ({}, {}, {}, {}) extends outside the {}x{} canvas",
                pixel.x, pixel.y, pixel.width, pixel.height, canvas.width, canvas.height
            ),
            context(),
        ));
    }

    let expected = layer.frame.to_pixel(width, height);
    let close = |a: f64, b: f64| (a - b).abs() <= FRAME_TOLERANCE * a.abs().max(b.abs()).max(1.0);
    if !(close(expected.x, pixel.x)
        && close(expected.y, pixel.y)
        && close(expected.width, pixel.width)
        && close(expected.height, pixel.height))
    {
        report.add(ValidationIssue::warning(
            IssueCode::FrameMismatch,
            "Normalized frame does not match the pixel frame",
            context(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::anchor_elements;
    use crate::ir::{Element, Layer, LayerId, Pixel, Rect, ShapeKind, ShapeLayer, Style};

    fn shape(id: &str, x: f64, y: f64, w: f64, h: f64) -> Element {
        Element {
            id: LayerId::from(id),
            style: Style::default(),
            frame: Rect::<Pixel>::from_xywh(x, y, w, h),
            layer: Layer::Shape(ShapeLayer {
                shape: ShapeKind::Rect,
            }),
        }
    }

    /// Anchored order: icon, label, header.
    fn valid_screen() -> Screen {
        let canvas = CanvasMeta::new(375, 667).with_names("Page 1", "Home");
        let layers = anchor_elements(
            vec![
                shape("header", 0.0, 0.0, 375.0, 64.0),
                shape("icon", 16.0, 80.0, 24.0, 24.0),
                shape("label", 48.0, 80.0, 200.0, 24.0),
            ],
            &canvas,
        );
        Screen { canvas, layers }
    }

    fn opts() -> ValidateOptions {
        ValidateOptions::default()
    }

    #[test]
    fn test_valid_screen() {
        let report = validate_screen(&valid_screen(), &opts());
        assert!(report.is_ok_strict(), "{report}");
    }

    #[test]
    fn test_invalid_canvas_dimensions() {
        let mut screen = valid_screen();
        screen.canvas.height = 0;

        let report = validate_screen(&screen, &opts());
        assert!(report.has(IssueCode::InvalidCanvasDimensions));
        assert!(!report.has(IssueCode::LayerOutOfCanvas));
    }

    #[test]
    fn test_duplicate_layer_id() {
        let mut screen = valid_screen();
        screen.layers[2].id = LayerId::from("icon");

        let report = validate_screen(&screen, &opts());
        assert_eq!(report.error_count(), 1, "{report}");
        assert!(report.has(IssueCode::DuplicateLayerId));
    }

    #[test]
    fn test_unknown_anchor_ref() {
        let mut screen = valid_screen();
        screen.layers[1].vertical.reference = Some(LayerId::from("ghost"));

        let report = validate_screen(&screen, &opts());
        assert!(report.has(IssueCode::UnknownAnchorRef));
    }

    #[test]
    fn test_forward_anchor_ref() {
        let mut screen = valid_screen();
        screen.layers[0].horizontal.reference = Some(LayerId::from("label"));

        let report = validate_screen(&screen, &opts());
        assert!(report.has(IssueCode::ForwardAnchorRef));
    }

    #[test]
    fn test_self_reference_is_forward() {
        let mut screen = valid_screen();
        screen.layers[1].vertical.reference = Some(LayerId::from("label"));

        let report = validate_screen(&screen, &opts());
        assert!(report.has(IssueCode::ForwardAnchorRef));
    }

    #[test]
    fn test_invalid_anchor_distance() {
        let mut screen = valid_screen();
        screen.layers[1].vertical.distance = -0.1;
        screen.layers[2].horizontal.distance = f64::NAN;

        let report = validate_screen(&screen, &opts());
        let count = report
            .issues
            .iter()
            .filter(|issue| issue.code == IssueCode::InvalidAnchorDistance)
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_wrong_anchor_axis() {
        let mut screen = valid_screen();
        screen.layers[1].vertical.direction = AnchorDirection::Left;

        let report = validate_screen(&screen, &opts());
        assert!(report.has(IssueCode::WrongAnchorAxis));
    }

    #[test]
    fn test_layer_out_of_canvas_is_warning() {
        let canvas = CanvasMeta::new(100, 100);
        let layers = anchor_elements(vec![shape("offside", 120.0, 0.0, 10.0, 10.0)], &canvas);
        let screen = Screen { canvas, layers };

        let report = validate_screen(&screen, &opts());
        assert!(report.is_ok());
        assert!(report.has(IssueCode::LayerOutOfCanvas));
        assert!(report.has(IssueCode::FrameOutOfUnit));
        assert!(!report.is_ok_strict());
    }

    #[test]
    fn test_frame_mismatch() {
        let mut screen = valid_screen();
        screen.layers[0].frame.width = 0.5;

        let report = validate_screen(&screen, &opts());
        assert!(report.has(IssueCode::FrameMismatch));
    }

    #[test]
    fn test_frame_not_finite() {
        let mut screen = valid_screen();
        screen.layers[0].frame.x = f64::INFINITY;

        let report = validate_screen(&screen, &opts());
        assert!(report.has(IssueCode::FrameNotFinite));
    }

    #[test]
    fn test_report_display() {
        let mut screen = valid_screen();
        screen.layers[1].vertical.reference = Some(LayerId::from("ghost"));

        let text = validate_screen(&screen, &opts()).to_string();
        assert!(text.contains("1 error(s)"));
        assert!(text.contains("UnknownAnchorRef"));
        assert!(text.contains("vertical anchor of 'label'"));
    }
}
