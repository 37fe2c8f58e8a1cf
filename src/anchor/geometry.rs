//! Pure geometric predicates over pixel frames.

use crate::ir::{AnchorDirection, Pixel, Rect};

/// A canvas axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Axis {
    /// `(start, length)` of the frame's projection onto this axis.
    #[inline]
    fn project<TSpace>(self, rect: &Rect<TSpace>) -> (f64, f64) {
        match self {
            Axis::Horizontal => (rect.x, rect.width),
            Axis::Vertical => (rect.y, rect.height),
        }
    }
}

/// Returns true iff the projections of `a` and `b` onto `axis` share a
/// segment of positive length. Touching edges do not overlap.
pub fn overlaps<TSpace>(a: &Rect<TSpace>, b: &Rect<TSpace>, axis: Axis) -> bool {
    let (a_start, a_len) = axis.project(a);
    let (b_start, b_len) = axis.project(b);
    a_start.max(b_start) < (a_start + a_len).min(b_start + b_len)
}

/// Distance from `a` to `b` when `b` can hang off `a` in `direction`.
///
/// For [`AnchorDirection::Up`], `a` must end at or above the top of `b` and
/// the two must overlap horizontally; the gap is `b.y - a.y - a.height`.
/// For [`AnchorDirection::Left`], `a` must end at or left of `b` and the two
/// must overlap vertically; the gap is `b.x - a.x - a.width`.
///
/// Returns `None` when `b` cannot be anchored to `a` that way.
pub fn gap(a: &Rect<Pixel>, b: &Rect<Pixel>, direction: AnchorDirection) -> Option<f64> {
    match direction {
        AnchorDirection::Up => (a.bottom() <= b.y && overlaps(a, b, Axis::Horizontal))
            .then(|| spacing(a, b, Axis::Vertical)),
        AnchorDirection::Left => (a.right() <= b.x && overlaps(a, b, Axis::Vertical))
            .then(|| spacing(a, b, Axis::Horizontal)),
    }
}

/// Signed gap between the end of `a` and the start of `b` along `axis`,
/// with no validity checks. Negative when the two overlap.
#[inline]
pub fn spacing<TSpace>(a: &Rect<TSpace>, b: &Rect<TSpace>, axis: Axis) -> f64 {
    let (a_start, a_len) = axis.project(a);
    let (b_start, _) = axis.project(b);
    b_start - a_start - a_len
}
