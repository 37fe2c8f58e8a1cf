use crate::error::ArtboardError;
use crate::ir::{Button, Element, Layer, LayerId, RawNode, Style};

/// Builds a button from exactly one text label and at most one background
/// shape, searched for through plain containers.
pub(super) fn build_button(node: &RawNode, children: Vec<Element>) -> Result<Element, ArtboardError> {
    let mut shapes = Vec::new();
    let mut labels = Vec::new();
    collect_parts(children, &mut shapes, &mut labels);

    if labels.len() > 1 {
        return Err(ArtboardError::structural(
            &node.id,
            format!("button has {} text labels, expected exactly one", labels.len()),
        ));
    }
    if shapes.len() > 1 {
        return Err(ArtboardError::structural(
            &node.id,
            format!("button has {} shapes, expected at most one", shapes.len()),
        ));
    }
    let label = labels
        .pop()
        .ok_or_else(|| ArtboardError::structural(&node.id, "button has no text label"))?;
    let frame_shape = shapes.pop();

    let mut style = Style::from_resolved(&node.attrs);
    let own_fill = match &label.layer {
        Layer::Text(text) => text.own_fill,
        _ => None,
    };
    let title_color = own_fill.or(style.fill);

    match &frame_shape {
        Some(shape) => {
            if shape.style.border_radius.is_some() {
                style.border_radius = shape.style.border_radius;
            }
            if shape.style.stroke_color.is_some() {
                style.stroke_color = shape.style.stroke_color;
            }
            if shape.style.stroke_width.is_some() {
                style.stroke_width = shape.style.stroke_width;
            }
        }
        None => {
            style.fill = None;
            style.stroke_color = None;
            style.stroke_width = None;
        }
    }

    let title = match &label.layer {
        Layer::Text(text) => text.text.clone(),
        _ => String::new(),
    };

    Ok(Element {
        id: LayerId::new(node.id.clone()),
        style,
        frame: node.frame,
        layer: Layer::Button(Button {
            title,
            title_color,
            frame_shape: frame_shape.map(Box::new),
            label: Box::new(label),
        }),
    })
}

fn collect_parts(children: Vec<Element>, shapes: &mut Vec<Element>, labels: &mut Vec<Element>) {
    for child in children {
        match child.layer {
            Layer::Shape(_) => shapes.push(child),
            Layer::Text(_) => labels.push(child),
            Layer::Container(container) => collect_parts(container.children, shapes, labels),
            _ => log::debug!("button part '{}' is neither shape nor text; ignored", child.id),
        }
    }
}
