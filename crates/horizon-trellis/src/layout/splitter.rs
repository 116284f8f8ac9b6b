//! A four-pane splitter with one horizontal and one vertical bar.
//!
//! Slots are filled in child order: top-left, top-right, bottom-left,
//! bottom-right. The container has room for exactly four children.

use horizon_trellis_core::{ControlId, LayoutError, LayoutResult, Rect, Size};

use super::LayoutContext;
use crate::control::Control;
use crate::tree::ControlTree;

/// A grid of four panes separated by draggable bars.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSplitter {
    horizontal_split: f32,
    vertical_split: f32,
    bar_thickness: f32,
}

impl Default for CrossSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl CrossSplitter {
    /// Number of panes.
    pub const CAPACITY: usize = 4;

    /// Default bar thickness in pixels.
    pub const DEFAULT_BAR_THICKNESS: f32 = 4.0;

    /// Create a splitter with both bars centered.
    pub fn new() -> Self {
        Self {
            horizontal_split: 0.5,
            vertical_split: 0.5,
            bar_thickness: Self::DEFAULT_BAR_THICKNESS,
        }
    }

    /// Fraction of the width given to the left column.
    #[inline]
    pub fn horizontal_split(&self) -> f32 {
        self.horizontal_split
    }

    /// Fraction of the height given to the top row.
    #[inline]
    pub fn vertical_split(&self) -> f32 {
        self.vertical_split
    }

    /// Move the bars. Fractions are clamped into `[0, 1]`.
    pub fn set_split(&mut self, horizontal: f32, vertical: f32) {
        self.horizontal_split = horizontal.clamp(0.0, 1.0);
        self.vertical_split = vertical.clamp(0.0, 1.0);
    }

    #[inline]
    pub fn bar_thickness(&self) -> f32 {
        self.bar_thickness
    }

    pub fn set_bar_thickness(&mut self, thickness: f32) {
        self.bar_thickness = thickness.max(0.0);
    }

    /// Pane rectangles for a content area of `size`, in slot order.
    pub fn panes(&self, size: Size) -> [Rect; 4] {
        let bar_w = self.bar_thickness.min(size.width);
        let bar_h = self.bar_thickness.min(size.height);
        let left_w = ((size.width - bar_w) * self.horizontal_split).max(0.0);
        let right_w = (size.width - bar_w - left_w).max(0.0);
        let top_h = ((size.height - bar_h) * self.vertical_split).max(0.0);
        let bottom_h = (size.height - bar_h - top_h).max(0.0);
        let right_x = left_w + bar_w;
        let bottom_y = top_h + bar_h;

        [
            Rect::new(0.0, 0.0, left_w, top_h),
            Rect::new(right_x, 0.0, right_w, top_h),
            Rect::new(0.0, bottom_y, left_w, bottom_h),
            Rect::new(right_x, bottom_y, right_w, bottom_h),
        ]
    }
}

impl Control for CrossSplitter {
    fn measure(&mut self, cx: &mut LayoutContext<'_>, available: Size) -> LayoutResult<Size> {
        let padding = cx.padding();
        let inner = available.shrink(padding);
        let panes = if inner.is_finite() {
            self.panes(inner).map(|pane| pane.size)
        } else {
            [inner; 4]
        };

        let mut columns = [0.0_f32; 2];
        let mut rows = [0.0_f32; 2];
        for (slot, child) in cx.children().into_iter().take(Self::CAPACITY).enumerate() {
            let size = cx.measure_child(child, panes[slot])?;
            columns[slot % 2] = columns[slot % 2].max(size.width);
            rows[slot / 2] = rows[slot / 2].max(size.height);
        }

        let natural = Size::new(
            columns[0] + columns[1] + self.bar_thickness,
            rows[0] + rows[1] + self.bar_thickness,
        );
        Ok(natural.grow(padding))
    }

    fn arrange(&mut self, cx: &mut LayoutContext<'_>, final_size: Size) -> LayoutResult<Size> {
        let padding = cx.padding();
        let content = final_size.shrink(padding);
        let panes = self.panes(content);

        for (slot, child) in cx.children().into_iter().take(Self::CAPACITY).enumerate() {
            cx.arrange_child(child, panes[slot].offset(padding.left, padding.top))?;
        }
        cx.set_inner_bounds(Rect::new(
            padding.left,
            padding.top,
            content.width,
            content.height,
        ))?;
        Ok(final_size)
    }

    fn on_child_added(
        &mut self,
        tree: &ControlTree,
        this: ControlId,
        _child: ControlId,
    ) -> LayoutResult<()> {
        if tree.children_of(this)?.len() > Self::CAPACITY {
            return Err(LayoutError::ContainerFull {
                id: this,
                capacity: Self::CAPACITY,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Panel;

    #[test]
    fn test_panes_split_evenly() {
        let splitter = CrossSplitter::new();
        let panes = splitter.panes(Size::new(104.0, 54.0));
        assert_eq!(panes[0], Rect::new(0.0, 0.0, 50.0, 25.0));
        assert_eq!(panes[1], Rect::new(54.0, 0.0, 50.0, 25.0));
        assert_eq!(panes[2], Rect::new(0.0, 29.0, 50.0, 25.0));
        assert_eq!(panes[3], Rect::new(54.0, 29.0, 50.0, 25.0));
    }

    #[test]
    fn test_panes_tiny_area_clamps() {
        let mut splitter = CrossSplitter::new();
        splitter.set_split(2.0, -1.0);
        assert_eq!(splitter.horizontal_split(), 1.0);
        assert_eq!(splitter.vertical_split(), 0.0);

        for pane in splitter.panes(Size::new(2.0, 2.0)) {
            assert!(pane.width() >= 0.0);
            assert!(pane.height() >= 0.0);
        }
    }

    #[test]
    fn test_fifth_child_rejected() {
        let mut tree = ControlTree::new();
        let splitter = tree.insert(CrossSplitter::new());
        for _ in 0..CrossSplitter::CAPACITY {
            tree.insert_child(splitter, Panel).unwrap();
        }

        let err = tree.insert_child(splitter, Panel).unwrap_err();
        assert_eq!(
            err,
            LayoutError::ContainerFull {
                id: splitter,
                capacity: 4
            }
        );
        assert_eq!(tree.children_of(splitter).unwrap().len(), 4);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_moving_child_into_full_splitter_keeps_old_parent() {
        let mut tree = ControlTree::new();
        let splitter = tree.insert(CrossSplitter::new());
        for _ in 0..CrossSplitter::CAPACITY {
            tree.insert_child(splitter, Panel).unwrap();
        }
        let holder = tree.insert(Panel);
        let first = tree.insert_child(holder, Panel).unwrap();
        let moving = tree.insert_child(holder, Panel).unwrap();
        let last = tree.insert_child(holder, Panel).unwrap();

        let err = tree.set_parent(moving, Some(splitter)).unwrap_err();
        assert!(matches!(err, LayoutError::ContainerFull { .. }));
        assert_eq!(tree.parent_of(moving).unwrap(), Some(holder));
        assert_eq!(tree.actual_parent_of(moving).unwrap(), Some(holder));
        assert_eq!(tree.children_of(holder).unwrap(), &[first, moving, last]);
        assert_eq!(tree.children_of(splitter).unwrap().len(), 4);
    }

    #[test]
    fn test_arrange_places_panes() {
        let mut tree = ControlTree::new();
        let splitter = tree.insert(CrossSplitter::new());
        let panes: Vec<_> = (0..4)
            .map(|_| tree.insert_child(splitter, Panel).unwrap())
            .collect();

        tree.measure(splitter, Size::new(104.0, 54.0)).unwrap();
        tree.arrange(splitter, Rect::new(0.0, 0.0, 104.0, 54.0)).unwrap();
        assert_eq!(tree.base(panes[3]).unwrap().bounds(), Rect::new(54.0, 29.0, 50.0, 25.0));
    }
}
