//! The view of the tree a layout hook works through.

use horizon_trellis_core::{ControlId, LayoutResult, Rect, Size, Thickness};
use smallvec::SmallVec;

use crate::config::GlyphMetrics;
use crate::control::ControlBase;
use crate::tree::ControlTree;

/// Snapshot of a control's children, copied so hooks can recurse freely.
pub type ChildList = SmallVec<[ControlId; 8]>;

/// Handle passed to [`Control::measure`](crate::Control::measure) and
/// [`Control::arrange`](crate::Control::arrange).
///
/// It identifies the control being laid out and lets its hook measure and
/// arrange children through the same wrappers the tree uses, so margin,
/// desired bounds and min/max clamps apply uniformly at every level.
pub struct LayoutContext<'a> {
    tree: &'a mut ControlTree,
    id: ControlId,
}

impl<'a> LayoutContext<'a> {
    pub(crate) fn new(tree: &'a mut ControlTree, id: ControlId) -> Self {
        Self { tree, id }
    }

    /// The control being laid out.
    #[inline]
    pub fn id(&self) -> ControlId {
        self.id
    }

    /// Read-only access to the whole tree.
    #[inline]
    pub fn tree(&self) -> &ControlTree {
        self.tree
    }

    /// Shared state of the control being laid out.
    pub fn base(&self) -> LayoutResult<&ControlBase> {
        self.tree.base(self.id)
    }

    /// Padding of the control being laid out.
    pub fn padding(&self) -> Thickness {
        self.tree
            .base(self.id)
            .map(|base| base.padding)
            .unwrap_or(Thickness::ZERO)
    }

    /// Text metrics shared by the tree.
    #[inline]
    pub fn glyph_metrics(&self) -> GlyphMetrics {
        self.tree.glyph_metrics()
    }

    /// Children that take part in layout, in z-order.
    ///
    /// Collapsed controls and controls queued for deletion are left out.
    pub fn children(&self) -> ChildList {
        let Ok(base) = self.tree.base(self.id) else {
            return ChildList::new();
        };
        base.children
            .iter()
            .copied()
            .filter(|&child| {
                self.tree
                    .base(child)
                    .is_ok_and(|child| child.participates_in_layout())
            })
            .collect()
    }

    /// Shared state of a child.
    pub fn child(&self, child: ControlId) -> LayoutResult<&ControlBase> {
        self.tree.base(child)
    }

    /// Measure a child; the result includes its margin.
    pub fn measure_child(&mut self, child: ControlId, available: Size) -> LayoutResult<Size> {
        self.tree.measure(child, available)
    }

    /// Arrange a child into `slot`, given in this control's coordinates and
    /// including the child's margin.
    pub fn arrange_child(&mut self, child: ControlId, slot: Rect) -> LayoutResult<()> {
        self.tree.arrange(child, slot)
    }

    /// Record the content area left after placing edge-docked children.
    pub fn set_inner_bounds(&mut self, rect: Rect) -> LayoutResult<()> {
        self.tree.base_mut(self.id)?.inner_bounds = rect;
        Ok(())
    }
}
