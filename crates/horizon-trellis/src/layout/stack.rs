//! Stack layout: children placed one after another along an axis.
//!
//! Each child gets its measured extent along the stacking axis and the full
//! cross-axis extent. Once the available length runs out, remaining
//! children receive zero-sized rectangles.

use horizon_trellis_core::{LayoutResult, Rect, Size};
use serde::{Deserialize, Serialize};

use super::LayoutContext;
use crate::control::Control;

/// Stacking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    #[default]
    Vertical,
}

impl Orientation {
    /// Split a size into (main, cross) extents.
    #[inline]
    fn split(self, size: Size) -> (f32, f32) {
        match self {
            Self::Horizontal => (size.width, size.height),
            Self::Vertical => (size.height, size.width),
        }
    }

    /// Build a size from (main, cross) extents.
    #[inline]
    fn join(self, main: f32, cross: f32) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }
}

/// A container that stacks its children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackLayout {
    orientation: Orientation,
    spacing: f32,
}

impl StackLayout {
    /// Create a stack layout.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            spacing: 0.0,
        }
    }

    /// Set the gap between adjacent children.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = spacing.max(0.0);
    }
}

impl Control for StackLayout {
    fn measure(&mut self, cx: &mut LayoutContext<'_>, available: Size) -> LayoutResult<Size> {
        let padding = cx.padding();
        let (main_available, cross_available) = self.orientation.split(available.shrink(padding));

        let mut main = 0.0_f32;
        let mut cross = 0.0_f32;
        for (index, child) in cx.children().into_iter().enumerate() {
            if index > 0 {
                main += self.spacing;
            }
            let remaining = (main_available - main).max(0.0);
            let size = cx.measure_child(child, self.orientation.join(remaining, cross_available))?;
            let (child_main, child_cross) = self.orientation.split(size);
            main += child_main;
            cross = cross.max(child_cross);
        }

        Ok(self.orientation.join(main, cross).grow(padding))
    }

    fn arrange(&mut self, cx: &mut LayoutContext<'_>, final_size: Size) -> LayoutResult<Size> {
        let padding = cx.padding();
        let content = final_size.shrink(padding);
        let (main_total, cross) = self.orientation.split(content);

        let mut offset = 0.0_f32;
        for (index, child) in cx.children().into_iter().enumerate() {
            if index > 0 {
                offset += self.spacing;
            }
            let remaining = (main_total - offset).max(0.0);
            let (measured_main, _) = self.orientation.split(cx.child(child)?.measured_size);
            let extent = measured_main.min(remaining);
            let slot_size = if remaining > 0.0 {
                self.orientation.join(extent, cross)
            } else {
                Size::ZERO
            };

            let position = self.orientation.join(offset.min(main_total), 0.0);
            cx.arrange_child(
                child,
                Rect::new(
                    padding.left + position.width,
                    padding.top + position.height,
                    slot_size.width,
                    slot_size.height,
                ),
            )?;
            offset += extent;
        }

        cx.set_inner_bounds(Rect::new(
            padding.left,
            padding.top,
            content.width,
            content.height,
        ))?;
        Ok(final_size)
    }
}
