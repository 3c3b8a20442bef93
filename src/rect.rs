use std::cmp::{max, min};
use std::fmt;

/// Axis-aligned rectangle with 16-bit coordinates.
///
/// The box is half-open: it covers `[left, right) x [top, bottom)`.
/// A rectangle with `left >= right` or `top >= bottom` covers no point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: u16,
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
}

impl Rect {
    /// The degenerate zero rectangle, used as the extents of an empty region.
    pub const EMPTY: Rect = Rect {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub const fn new(left: u16, top: u16, right: u16, bottom: u16) -> Self {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Builds a rectangle from an origin and a size.
    ///
    /// The far edges saturate at `u16::MAX`.
    pub fn from_xywh(x: u16, y: u16, width: u16, height: u16) -> Self {
        Rect {
            left: x,
            top: y,
            right: x.saturating_add(width),
            bottom: y.saturating_add(height),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    pub fn width(&self) -> u16 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u16 {
        self.bottom.saturating_sub(self.top)
    }

    /// Number of points covered by the rectangle.
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Computes the overlap box of two rectangles without checking it.
    ///
    /// The result is always deterministic, even when the rectangles are
    /// disjoint; callers test it with [`Rect::is_empty`].
    pub fn clip(&self, other: &Rect) -> Rect {
        Rect {
            left: max(self.left, other.left),
            top: max(self.top, other.top),
            right: min(self.right, other.right),
            bottom: min(self.bottom, other.bottom),
        }
    }

    /// Computes the intersection of two rectangles.
    /// Returns `None` if they share no point.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let common = self.clip(other);
        if common.is_empty() {
            None
        } else {
            Some(common)
        }
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        !self.clip(other).is_empty()
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn bounding(&self, other: &Rect) -> Rect {
        Rect {
            left: min(self.left, other.left),
            top: min(self.top, other.top),
            right: max(self.right, other.right),
            bottom: max(self.bottom, other.bottom),
        }
    }

    /// Returns `true` if every point of `other` lies in `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        self.left <= other.left
            && self.top <= other.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    pub fn contains_point(&self, x: u16, y: u16) -> bool {
        self.left <= x && x < self.right && self.top <= y && y < self.bottom
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{}-{},{})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
