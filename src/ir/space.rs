//! Coordinate space markers for canvas geometry.
//!
//! Zero-sized type parameters keep raw canvas pixels and canvas-relative
//! fractions apart at compile time.

use std::fmt;

/// Raw pixel geometry as drawn on the canvas, origin at the artboard's
/// top-left corner.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {}

/// Geometry expressed as a fraction of the canvas width (x axis) or
/// height (y axis).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalized {}

impl fmt::Debug for Pixel {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl fmt::Debug for Normalized {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}
