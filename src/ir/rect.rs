//! Axis-aligned element frames in XYWH form.

use serde::{Deserialize, Serialize};

use super::{Normalized, Pixel};

/// An element frame: top-left corner plus size.
///
/// The `TSpace` parameter is either [`Pixel`] or [`Normalized`], so raw
/// canvas geometry and canvas-relative fractions cannot be mixed up.
#[derive(Clone, Copy, PartialEq)]
pub struct Rect<TSpace> {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    _space: std::marker::PhantomData<TSpace>,
}

impl<TSpace> Rect<TSpace> {
    /// Creates a frame from its top-left corner and size.
    #[inline]
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            _space: std::marker::PhantomData,
        }
    }

    /// Right edge x coordinate.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y coordinate.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Returns true if all four components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

impl Rect<Pixel> {
    /// Cheap reading-order surrogate: `x + y + width + height`.
    ///
    /// Smaller keys sit closer to the top-left corner of the canvas.
    #[inline]
    pub fn positional_key(&self) -> f64 {
        self.x + self.y + self.width + self.height
    }

    /// Divides every component by the canvas dimension on the same axis.
    pub fn to_normalized(&self, canvas_width: f64, canvas_height: f64) -> Rect<Normalized> {
        Rect::from_xywh(
            self.x / canvas_width,
            self.y / canvas_height,
            self.width / canvas_width,
            self.height / canvas_height,
        )
    }
}

impl Rect<Normalized> {
    /// Multiplies back by the canvas dimensions.
    pub fn to_pixel(&self, canvas_width: f64, canvas_height: f64) -> Rect<Pixel> {
        Rect::from_xywh(
            self.x * canvas_width,
            self.y * canvas_height,
            self.width * canvas_width,
            self.height * canvas_height,
        )
    }

    /// Returns true for a well-formed frame: x, y in [0, 1) and
    /// width, height in (0, 1].
    pub fn is_within_unit(&self) -> bool {
        (0.0..1.0).contains(&self.x)
            && (0.0..1.0).contains(&self.y)
            && self.width > 0.0
            && self.width <= 1.0
            && self.height > 0.0
            && self.height <= 1.0
    }
}

impl<TSpace> std::fmt::Debug for Rect<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rect")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl<TSpace> Default for Rect<TSpace> {
    fn default() -> Self {
        Self::from_xywh(0.0, 0.0, 0.0, 0.0)
    }
}

// Manual serde impls so TSpace needs no Serialize/Deserialize bound.
impl<TSpace> Serialize for Rect<TSpace> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Rect", 4)?;
        state.serialize_field("x", &self.x)?;
        state.serialize_field("y", &self.y)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.end()
    }
}

impl<'de, TSpace> Deserialize<'de> for Rect<TSpace> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RectData {
            x: f64,
            y: f64,
            width: f64,
            height: f64,
        }
        let data = RectData::deserialize(deserializer)?;
        Ok(Rect::from_xywh(data.x, data.y, data.width, data.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_follow_size() {
        let rect: Rect<Pixel> = Rect::from_xywh(10.0, 20.0, 90.0, 60.0);
        assert_eq!(rect.right(), 100.0);
        assert_eq!(rect.bottom(), 80.0);
        assert_eq!(rect.positional_key(), 180.0);
    }

    #[test]
    fn normalizes_per_axis() {
        let rect: Rect<Pixel> = Rect::from_xywh(0.0, 60.0, 100.0, 50.0);
        let normalized = rect.to_normalized(100.0, 200.0);
        assert_eq!(normalized.x, 0.0);
        assert_eq!(normalized.y, 0.3);
        assert_eq!(normalized.width, 1.0);
        assert_eq!(normalized.height, 0.25);
        assert!(normalized.is_within_unit());
    }

    #[test]
    fn full_width_frame_at_right_edge_is_out_of_unit() {
        let rect: Rect<Normalized> = Rect::from_xywh(1.0, 0.0, 0.5, 0.5);
        assert!(!rect.is_within_unit());
    }

    #[test]
    fn normalized_frame_maps_back_to_pixels() {
        let original: Rect<Pixel> = Rect::from_xywh(16.0, 88.0, 343.0, 44.0);
        let restored = original.to_normalized(375.0, 667.0).to_pixel(375.0, 667.0);
        assert!((restored.x - original.x).abs() < 1e-9);
        assert!((restored.y - original.y).abs() < 1e-9);
        assert!((restored.width - original.width).abs() < 1e-9);
        assert!((restored.height - original.height).abs() < 1e-9);
    }
}
