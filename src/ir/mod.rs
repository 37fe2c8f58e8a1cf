//! Intermediate Representation (IR) for artboard.
//!
//! This module defines the typed representation of a design canvas, from
//! the raw nodes read out of the SVG to the anchored layers handed to code
//! emitters.
//!
//! # Design Principles
//!
//! 1. **Type Safety**: Use newtypes and marker types to prevent common errors
//!    at compile time (e.g., mixing pixel and normalized geometry).
//!
//! 2. **Closed Variants**: Every layer is one of a fixed set of variants, so
//!    consumers can match exhaustively instead of probing dictionaries.
//!
//! 3. **Permissive Deserialization**: IR JSON may hold "invalid" data (e.g.,
//!    dangling anchor references), so that validation can report issues
//!    rather than panic.
//!
//! # Example
//!
//! ```
//! use artboard::ir::{Anchor, AnchorDirection, Rect, Pixel};
//!
//! let frame: Rect<Pixel> = Rect::from_xywh(16.0, 88.0, 343.0, 44.0);
//! let normalized = frame.to_normalized(375.0, 667.0);
//! assert!(normalized.is_within_unit());
//!
//! let anchor = Anchor::to_edge(AnchorDirection::Left, normalized.x);
//! assert!(anchor.is_container_edge());
//! ```

mod color;
mod coord;
mod ids;
pub mod io_json;
pub mod io_overrides;
pub mod io_svg;
mod model;
mod raw;
mod rect;
mod space;

// Re-export core types for convenient access
pub use color::{Rgb, NO_PAINT};
pub use coord::Coord;
pub use ids::LayerId;
pub use io_overrides::OverrideTable;
pub use io_svg::ParseOptions;
pub use model::{
    Anchor, AnchorDirection, Button, CanvasMeta, CollectionView, Container, ContainerRole,
    Element, Layer, LayerKind, LayerNode, ListKind, Screen, ScrollDirection, Section, ShapeKind,
    ShapeLayer, SliderView, Style, TextAlign, TextLabel,
};
pub use raw::{AttrValue, AttributeKey, Attributes, RawNode, ValueKind};
pub use rect::Rect;
pub use space::{Normalized, Pixel};
