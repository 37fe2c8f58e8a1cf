#![allow(dead_code)]

use artboard::ir::{
    CanvasMeta, Coord, Element, Layer, LayerId, Pixel, Rect, Rgb, Screen, ShapeKind, ShapeLayer,
    Style, TextAlign, TextLabel,
};
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

/// Tolerance for comparing normalized distances after a pixel round trip.
pub const EPS_NORMALIZED: f64 = 1e-12;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Canvas sizes of common phone and tablet artboards, plus odd ones.
pub fn arb_canvas() -> BoxedStrategy<CanvasMeta> {
    prop_oneof![
        Just((375u32, 667u32)),
        Just((414, 896)),
        Just((768, 1024)),
        (1u32..2000, 1u32..3000),
    ]
    .prop_map(|(w, h)| CanvasMeta::new(w, h).with_names("Page-1", "Artboard"))
    .boxed()
}

/// Whole-pixel frames, as the parser produces them.
pub fn arb_pixel_frame(max_w: u32, max_h: u32) -> BoxedStrategy<Rect<Pixel>> {
    let max_w = f64::from(max_w.max(1));
    let max_h = f64::from(max_h.max(1));
    (0.0..max_w, 0.0..max_h, 0.0..max_w, 0.0..max_h)
        .prop_map(|(x, y, w, h): (f64, f64, f64, f64)| {
            Rect::from_xywh(x.round(), y.round(), w.round(), h.round())
        })
        .boxed()
}

pub fn arb_style() -> BoxedStrategy<Style> {
    (
        proptest::option::of(any::<(u8, u8, u8)>()),
        proptest::option::of(0.0f64..=1.0),
        proptest::option::of(8.0f64..64.0),
        proptest::option::of(prop_oneof![
            Just(TextAlign::Left),
            Just(TextAlign::Center),
            Just(TextAlign::Right),
        ]),
        proptest::option::of("[A-Z][a-z]{2,10}"),
    )
        .prop_map(|(fill, opacity, font_size, text_align, font_family)| Style {
            fill: fill.map(|(r, g, b)| Rgb::new(r, g, b)),
            opacity,
            font_size,
            text_align,
            font_family,
            ..Style::default()
        })
        .boxed()
}

/// Leaf elements (shapes and text labels) with unique ids.
pub fn arb_elements(canvas: &CanvasMeta, max: usize) -> BoxedStrategy<Vec<Element>> {
    let frame = arb_pixel_frame(canvas.width, canvas.height);
    proptest::collection::vec((frame, arb_style(), any::<bool>(), "[a-z ]{0,12}"), 0..=max)
        .prop_map(|parts| {
            parts
                .into_iter()
                .enumerate()
                .map(|(index, (frame, style, is_text, text))| {
                    let layer = if is_text {
                        Layer::Text(TextLabel {
                            center: Coord::new(
                                (frame.x + frame.width) / 2.0,
                                (frame.y + frame.height) / 2.0,
                            ),
                            text,
                            own_fill: style.fill,
                        })
                    } else {
                        Layer::Shape(ShapeLayer {
                            shape: ShapeKind::Rect,
                        })
                    };
                    Element {
                        id: LayerId::new(format!("layer{index}")),
                        style,
                        frame,
                        layer,
                    }
                })
                .collect()
        })
        .boxed()
}

/// A canvas with anchored leaf layers.
pub fn arb_screen(max_layers: usize) -> BoxedStrategy<Screen> {
    arb_canvas()
        .prop_flat_map(move |canvas| {
            let elements = arb_elements(&canvas, max_layers);
            (Just(canvas), elements)
        })
        .prop_map(|(canvas, elements)| Screen {
            layers: artboard::anchor::anchor_elements(elements, &canvas),
            canvas,
        })
        .boxed()
}
