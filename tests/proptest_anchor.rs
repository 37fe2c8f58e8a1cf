use std::collections::HashMap;

use artboard::anchor::anchor_elements;
use artboard::validation::{validate_screen, ValidateOptions};
use proptest::prelude::*;

mod proptest_helpers;

use proptest_helpers::EPS_NORMALIZED;

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn references_point_backwards(screen in proptest_helpers::arb_screen(12)) {
        let positions: HashMap<&str, usize> = screen
            .layers
            .iter()
            .enumerate()
            .map(|(index, layer)| (layer.id.as_str(), index))
            .collect();

        for (index, layer) in screen.layers.iter().enumerate() {
            for anchor in [&layer.vertical, &layer.horizontal] {
                if let Some(reference) = &anchor.reference {
                    let position = positions[reference.as_str()];
                    prop_assert!(position < index, "{} -> {}", layer.id, reference);
                }
            }
        }
    }

    #[test]
    fn output_is_sorted_by_reading_order(screen in proptest_helpers::arb_screen(12)) {
        for pair in screen.layers.windows(2) {
            prop_assert!(
                pair[0].pixel_frame.positional_key() <= pair[1].pixel_frame.positional_key()
            );
        }
    }

    #[test]
    fn edge_anchors_use_own_offset(screen in proptest_helpers::arb_screen(12)) {
        let width = f64::from(screen.canvas.width);
        let height = f64::from(screen.canvas.height);

        for layer in &screen.layers {
            if layer.vertical.is_container_edge() {
                prop_assert!((layer.vertical.distance - layer.pixel_frame.y / height).abs() <= EPS_NORMALIZED);
            }
            if layer.horizontal.is_container_edge() {
                prop_assert!((layer.horizontal.distance - layer.pixel_frame.x / width).abs() <= EPS_NORMALIZED);
            }
        }
    }

    #[test]
    fn sibling_distances_are_non_negative(screen in proptest_helpers::arb_screen(12)) {
        for layer in &screen.layers {
            prop_assert!(layer.vertical.distance >= 0.0);
            prop_assert!(layer.horizontal.distance >= 0.0);
        }
    }

    #[test]
    fn anchored_screens_have_no_validation_errors(screen in proptest_helpers::arb_screen(12)) {
        let report = validate_screen(&screen, &ValidateOptions::default());
        prop_assert!(report.is_ok(), "{}", report);
    }

    #[test]
    fn anchoring_keeps_every_layer(
        (canvas, elements) in proptest_helpers::arb_canvas().prop_flat_map(|canvas| {
            let elements = proptest_helpers::arb_elements(&canvas, 12);
            (Just(canvas), elements)
        })
    ) {
        let mut expected: Vec<String> = elements.iter().map(|e| e.id.to_string()).collect();
        let layers = anchor_elements(elements, &canvas);
        let mut actual: Vec<String> = layers.iter().map(|l| l.id.to_string()).collect();

        expected.sort();
        actual.sort();
        prop_assert_eq!(expected, actual);
    }
}
