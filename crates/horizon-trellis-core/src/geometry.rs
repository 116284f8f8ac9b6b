//! Geometry primitives for layout.
//!
//! All layout arithmetic goes through these types. Dimensions never go
//! negative: subtraction saturates at zero, and clamping always lets the
//! minimum win over the maximum. Unbounded space is represented by
//! [`f32::INFINITY`] and checked with [`Size::is_finite`]; it is legal as
//! *available* space but never as a *measured* size.

use serde::{Deserialize, Serialize};

/// Clamp a single dimension into `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics: when `min > max` the minimum
/// wins. A NaN input collapses to `min`.
#[inline]
pub fn clamp_dimension(value: f32, min: f32, max: f32) -> f32 {
    let value = if value.is_nan() { min } else { value };
    value.min(max).max(min)
}

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Translate the point by the given deltas.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Unbounded size, used for "measure without constraint".
    pub const INFINITE: Self = Self {
        width: f32::INFINITY,
        height: f32::INFINITY,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check that neither dimension is infinite or NaN.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// Remove a thickness from both axes, saturating at zero.
    ///
    /// Infinite dimensions stay infinite.
    #[inline]
    pub fn shrink(self, thickness: Thickness) -> Self {
        Self {
            width: (self.width - thickness.horizontal()).max(0.0),
            height: (self.height - thickness.vertical()).max(0.0),
        }
    }

    /// Add a thickness to both axes.
    #[inline]
    pub fn grow(self, thickness: Thickness) -> Self {
        Self {
            width: self.width + thickness.horizontal(),
            height: self.height + thickness.vertical(),
        }
    }

    /// Clamp both axes into `[min, max]`; the minimum wins on conflict.
    #[inline]
    pub fn clamp(self, min: Size, max: Size) -> Self {
        Self {
            width: clamp_dimension(self.width, min.width, max.width),
            height: clamp_dimension(self.height, min.height, max.height),
        }
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Size) -> Self {
        Self::new(self.width.min(other.width), self.height.min(other.height))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Size) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Replace negative or NaN components with zero.
    #[inline]
    pub fn non_negative(self) -> Self {
        Self::new(
            clamp_dimension(self.width, 0.0, f32::INFINITY),
            clamp_dimension(self.height, 0.0, f32::INFINITY),
        )
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::ZERO,
            size,
        }
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Left edge x coordinate.
    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    /// Top edge y coordinate.
    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// Right edge x coordinate.
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge y coordinate.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Check if the rectangle is empty (zero or negative size).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Check if a point is inside the rectangle.
    ///
    /// The right and bottom edges are exclusive.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Compute the intersection of two rectangles.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if left < right && top < bottom {
            Some(Rect::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }

    /// Compute the union (bounding box) of two rectangles.
    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(left, top, right - left, bottom - top)
    }

    /// Offset the rectangle by the given amount.
    #[inline]
    pub fn offset(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            origin: self.origin.offset(dx, dy),
            size: self.size,
        }
    }

    /// Shrink the rectangle by a thickness; the size saturates at zero.
    #[inline]
    pub fn deflate(&self, thickness: Thickness) -> Rect {
        Rect {
            origin: self.origin.offset(thickness.left, thickness.top),
            size: self.size.shrink(thickness),
        }
    }

    /// Grow the rectangle outward by a thickness.
    #[inline]
    pub fn inflate(&self, thickness: Thickness) -> Rect {
        Rect {
            origin: self.origin.offset(-thickness.left, -thickness.top),
            size: self.size.grow(thickness),
        }
    }
}

/// Per-edge spacing, used for both margins and padding.
///
/// A margin is consumed by the parent before a control is measured; padding
/// insets a control's own children.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Thickness {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl Thickness {
    /// No spacing on any edge.
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Create a new thickness.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same value on all sides.
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Same horizontal and vertical values.
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Total horizontal spacing (left + right).
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical spacing (top + bottom).
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Size occupied by the spacing.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.horizontal(), self.vertical())
    }

    /// Replace negative or NaN edges with zero.
    pub fn non_negative(self) -> Self {
        let fix = |v: f32| clamp_dimension(v, 0.0, f32::INFINITY);
        Self::new(fix(self.left), fix(self.top), fix(self.right), fix(self.bottom))
    }
}

static_assertions::assert_impl_all!(Point: Copy, Send, Sync);
static_assertions::assert_impl_all!(Size: Copy, Send, Sync);
static_assertions::assert_impl_all!(Rect: Copy, Send, Sync);
static_assertions::assert_impl_all!(Thickness: Copy, Send, Sync);
