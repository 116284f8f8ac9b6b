//! Placement modes: dock, alignment, anchors and desired bounds.
//!
//! These types tell a parent how to place a child. Which of them matters
//! depends on the parent: dock-aware containers read [`Dock`] and the
//! alignments, [`AnchorLayout`](crate::layout::AnchorLayout) reads
//! [`Anchor`] and the anchor bounds.

use horizon_trellis_core::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Where a child is placed inside a dock-aware container.
///
/// Exactly one mode holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dock {
    /// Self-positioned at the explicit left/top of its desired bounds.
    #[default]
    None,
    /// Carved from the leading horizontal edge, full remaining height.
    Left,
    /// Carved from the leading vertical edge, full remaining width.
    Top,
    /// Carved from the trailing horizontal edge, full remaining height.
    Right,
    /// Carved from the trailing vertical edge, full remaining width.
    Bottom,
    /// Takes whatever interior space the edge-docked siblings left.
    Fill,
}

impl Dock {
    /// Returns true for Left, Top, Right and Bottom.
    #[inline]
    pub fn is_edge(self) -> bool {
        matches!(self, Self::Left | Self::Top | Self::Right | Self::Bottom)
    }

    /// Returns true for Left and Right, which consume width.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Horizontal placement of a control inside the slot its parent offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HorizontalAlignment {
    /// Flush with the left edge, measured width.
    Left,
    /// Centered, measured width.
    Center,
    /// Flush with the right edge, measured width.
    Right,
    /// Fill the slot width.
    #[default]
    Stretch,
}

/// Vertical placement of a control inside the slot its parent offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VerticalAlignment {
    /// Flush with the top edge, measured height.
    Top,
    /// Centered, measured height.
    Center,
    /// Flush with the bottom edge, measured height.
    Bottom,
    /// Fill the slot height.
    #[default]
    Stretch,
}

impl HorizontalAlignment {
    /// Offset of content of `used` width within `available` width.
    #[inline]
    pub(crate) fn offset(self, available: f32, used: f32) -> f32 {
        let leftover = (available - used).max(0.0);
        match self {
            Self::Left | Self::Stretch => 0.0,
            Self::Center => leftover / 2.0,
            Self::Right => leftover,
        }
    }
}

impl VerticalAlignment {
    /// Offset of content of `used` height within `available` height.
    #[inline]
    pub(crate) fn offset(self, available: f32, used: f32) -> f32 {
        let leftover = (available - used).max(0.0);
        match self {
            Self::Top | Self::Stretch => 0.0,
            Self::Center => leftover / 2.0,
            Self::Bottom => leftover,
        }
    }
}

/// Fractional attachment of each edge to its anchor-layout parent.
///
/// When the parent grows by `dw × dh` relative to its design size, each
/// edge of the child moves by `fraction × delta`. A left and right fraction
/// of 0 pins the child to the left; 1 and 1 pins it to the right; 0 and 1
/// stretches it with the parent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Anchor {
    /// Fraction of the width delta applied to the left edge.
    pub left: f32,
    /// Fraction of the height delta applied to the top edge.
    pub top: f32,
    /// Fraction of the width delta applied to the right edge.
    pub right: f32,
    /// Fraction of the height delta applied to the bottom edge.
    pub bottom: f32,
}

impl Anchor {
    /// Pinned to the top-left corner.
    pub const TOP_LEFT: Self = Self::fixed(0.0, 0.0, 0.0, 0.0);
    /// Pinned to the top-right corner.
    pub const TOP_RIGHT: Self = Self::fixed(1.0, 0.0, 1.0, 0.0);
    /// Pinned to the bottom-left corner.
    pub const BOTTOM_LEFT: Self = Self::fixed(0.0, 1.0, 0.0, 1.0);
    /// Pinned to the bottom-right corner.
    pub const BOTTOM_RIGHT: Self = Self::fixed(1.0, 1.0, 1.0, 1.0);
    /// Keeps its relative position to the center.
    pub const CENTER: Self = Self::fixed(0.5, 0.5, 0.5, 0.5);
    /// Stretches horizontally, pinned to the top.
    pub const STRETCH_HORIZONTAL: Self = Self::fixed(0.0, 0.0, 1.0, 0.0);
    /// Stretches vertically, pinned to the left.
    pub const STRETCH_VERTICAL: Self = Self::fixed(0.0, 0.0, 0.0, 1.0);
    /// Stretches in both directions.
    pub const STRETCH: Self = Self::fixed(0.0, 0.0, 1.0, 1.0);

    const fn fixed(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a new anchor. Fractions are clamped into `[0, 1]`.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left: left.clamp(0.0, 1.0),
            top: top.clamp(0.0, 1.0),
            right: right.clamp(0.0, 1.0),
            bottom: bottom.clamp(0.0, 1.0),
        }
    }

    /// Move the authored rectangle for a parent size change of `delta`.
    ///
    /// Widths and heights never go negative.
    pub fn apply(&self, authored: Rect, delta: Size) -> Rect {
        let left = authored.left() + delta.width * self.left;
        let top = authored.top() + delta.height * self.top;
        let right = authored.right() + delta.width * self.right;
        let bottom = authored.bottom() + delta.height * self.bottom;
        Rect::new(left, top, (right - left).max(0.0), (bottom - top).max(0.0))
    }
}

/// User-requested geometry. Unspecified components are left to the layout.
///
/// An explicit width or height caps the space offered during measure and
/// overrides the computed size afterwards. An explicit left/top positions a
/// child with [`Dock::None`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DesiredBounds {
    /// Explicit left offset.
    pub left: Option<f32>,
    /// Explicit top offset.
    pub top: Option<f32>,
    /// Explicit width.
    pub width: Option<f32>,
    /// Explicit height.
    pub height: Option<f32>,
}

impl DesiredBounds {
    /// Nothing specified.
    pub const UNSPECIFIED: Self = Self {
        left: None,
        top: None,
        width: None,
        height: None,
    };

    /// Fully specified bounds.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            left: Some(rect.left()),
            top: Some(rect.top()),
            width: Some(rect.width()),
            height: Some(rect.height()),
        }
    }

    /// Explicit position, or the origin where unspecified.
    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.left.unwrap_or(0.0), self.top.unwrap_or(0.0))
    }

    /// Use explicit dimensions as an upper bound on `size`.
    #[inline]
    pub(crate) fn cap(&self, size: Size) -> Size {
        Size::new(
            self.width.map_or(size.width, |w| size.width.min(w)),
            self.height.map_or(size.height, |h| size.height.min(h)),
        )
    }

    /// Replace dimensions of `size` with the explicit ones.
    #[inline]
    pub(crate) fn override_size(&self, size: Size) -> Size {
        Size::new(
            self.width.unwrap_or(size.width),
            self.height.unwrap_or(size.height),
        )
    }
}
