//! Anchor-based layout for proportional repositioning on resize.
//!
//! `AnchorLayout` is authored at a fixed design size. Each child records the
//! rectangle it occupied at that size (its anchor bounds) and an
//! [`Anchor`](crate::Anchor) with one fraction per edge. When the layout is
//! arranged at a different size, every edge moves by its fraction of the size
//! difference:
//!
//! - `Anchor::TOP_LEFT` keeps the child where it was authored
//! - `Anchor::BOTTOM_RIGHT` moves it with the bottom-right corner
//! - `Anchor::STRETCH` grows and shrinks it with the layout
//!
//! # Example
//!
//! ```
//! use horizon_trellis::{Anchor, ControlTree, Rect, Size};
//! use horizon_trellis::layout::AnchorLayout;
//! use horizon_trellis::widgets::Panel;
//!
//! let mut tree = ControlTree::new();
//! let layout = tree.insert(AnchorLayout::new(Size::new(100.0, 100.0)));
//! let ok = tree.insert_child(layout, Panel).unwrap();
//! tree.set_anchor_bounds(ok, Some(Rect::new(70.0, 80.0, 20.0, 10.0))).unwrap();
//! tree.set_anchor(ok, Anchor::BOTTOM_RIGHT).unwrap();
//!
//! tree.measure(layout, Size::new(200.0, 150.0)).unwrap();
//! tree.arrange(layout, Rect::new(0.0, 0.0, 200.0, 150.0)).unwrap();
//! assert_eq!(tree.base(ok).unwrap().bounds(), Rect::new(170.0, 130.0, 20.0, 10.0));
//! ```

use horizon_trellis_core::{ControlId, LayoutResult, Rect, Size};

use super::LayoutContext;
use crate::control::Control;

/// A container that repositions children by anchor fractions.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorLayout {
    design_size: Size,
}

impl AnchorLayout {
    /// Create an anchor layout authored at `design_size` (content area,
    /// padding excluded).
    pub fn new(design_size: Size) -> Self {
        Self {
            design_size: design_size.non_negative(),
        }
    }

    /// The size children's anchor bounds were authored against.
    #[inline]
    pub fn design_size(&self) -> Size {
        self.design_size
    }

    pub fn set_design_size(&mut self, size: Size) {
        self.design_size = size.non_negative();
    }

    /// The rectangle a child occupies at the design size.
    ///
    /// Children without anchor bounds use their desired position and
    /// measured size.
    fn authored(cx: &LayoutContext<'_>, child: ControlId) -> LayoutResult<Rect> {
        let base = cx.child(child)?;
        Ok(base.anchor_bounds.unwrap_or_else(|| {
            let position = base.desired.position();
            let size = base.measured_size;
            Rect::new(position.x, position.y, size.width, size.height)
        }))
    }
}

impl Control for AnchorLayout {
    fn measure(&mut self, cx: &mut LayoutContext<'_>, available: Size) -> LayoutResult<Size> {
        let padding = cx.padding();
        let inner = available.shrink(padding);
        for child in cx.children() {
            let offered = match cx.child(child)?.anchor_bounds {
                Some(bounds) => bounds.size,
                None => inner,
            };
            cx.measure_child(child, offered)?;
        }
        Ok(self.design_size.grow(padding))
    }

    fn arrange(&mut self, cx: &mut LayoutContext<'_>, final_size: Size) -> LayoutResult<Size> {
        let padding = cx.padding();
        let content = final_size.shrink(padding);
        let delta = Size::new(
            content.width - self.design_size.width,
            content.height - self.design_size.height,
        );

        for child in cx.children() {
            let authored = Self::authored(cx, child)?;
            let rect = cx.child(child)?.anchor.apply(authored, delta);
            cx.arrange_child(child, rect.offset(padding.left, padding.top))?;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Anchor;
    use crate::tree::ControlTree;
    use crate::widgets::Panel;
    use horizon_trellis_core::Thickness;

    fn setup(anchor: Anchor) -> (ControlTree, ControlId, ControlId) {
        let mut tree = ControlTree::new();
        let layout = tree.insert(AnchorLayout::new(Size::new(100.0, 100.0)));
        let child = tree.insert_child(layout, Panel).unwrap();
        tree.set_anchor_bounds(child, Some(Rect::new(10.0, 10.0, 20.0, 20.0)))
            .unwrap();
        tree.set_anchor(child, anchor).unwrap();
        (tree, layout, child)
    }

    fn layout_at(tree: &mut ControlTree, layout: ControlId, size: Size) {
        tree.measure(layout, size).unwrap();
        tree.arrange(layout, Rect::from_size(size)).unwrap();
    }

    #[test]
    fn test_anchor_layout_creation() {
        let layout = AnchorLayout::new(Size::new(-5.0, 40.0));
        assert_eq!(layout.design_size(), Size::new(0.0, 40.0));
    }

    #[test]
    fn test_measure_returns_design_size() {
        let (mut tree, layout, _) = setup(Anchor::TOP_LEFT);
        tree.set_padding(layout, Thickness::uniform(5.0)).unwrap();
        let measured = tree.measure(layout, Size::new(500.0, 500.0)).unwrap();
        assert_eq!(measured, Size::new(110.0, 110.0));
    }

    #[test]
    fn test_anchor_top_left_stays() {
        let (mut tree, layout, child) = setup(Anchor::TOP_LEFT);
        layout_at(&mut tree, layout, Size::new(300.0, 200.0));
        assert_eq!(tree.base(child).unwrap().bounds(), Rect::new(10.0, 10.0, 20.0, 20.0));
    }

    #[test]
    fn test_anchor_stretch_grows() {
        let (mut tree, layout, child) = setup(Anchor::STRETCH);
        layout_at(&mut tree, layout, Size::new(300.0, 200.0));
        assert_eq!(tree.base(child).unwrap().bounds(), Rect::new(10.0, 10.0, 220.0, 120.0));
    }

    #[test]
    fn test_anchor_center_moves_half() {
        let (mut tree, layout, child) = setup(Anchor::CENTER);
        layout_at(&mut tree, layout, Size::new(200.0, 100.0));
        assert_eq!(tree.base(child).unwrap().bounds(), Rect::new(60.0, 10.0, 20.0, 20.0));
    }

    #[test]
    fn test_anchor_shrink_never_negative() {
        let (mut tree, layout, child) = setup(Anchor::STRETCH);
        tree.set_minimum_size(child, Size::ZERO).unwrap();
        layout_at(&mut tree, layout, Size::new(50.0, 50.0));
        let bounds = tree.base(child).unwrap().bounds();
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
    }

    #[test]
    fn test_padding_offsets_children() {
        let (mut tree, layout, child) = setup(Anchor::TOP_LEFT);
        tree.set_padding(layout, Thickness::uniform(4.0)).unwrap();
        layout_at(&mut tree, layout, Size::new(108.0, 108.0));
        assert_eq!(tree.base(child).unwrap().bounds(), Rect::new(14.0, 14.0, 20.0, 20.0));
    }
}
