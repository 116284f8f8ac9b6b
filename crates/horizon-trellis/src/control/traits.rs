//! The `Control` trait: per-type behaviour plugged into the tree.

use std::any::Any;

use horizon_trellis_core::{ControlId, LayoutResult, Rect, Size};

use crate::layout::{LayoutContext, arrange_docked, measure_docked};
use crate::render::{RenderContext, Skin};
use crate::tree::ControlTree;

/// Behaviour of one kind of control.
///
/// The tree owns a [`ControlBase`](super::ControlBase) for every node and,
/// next to it, a boxed `Control` that customises layout and drawing. All
/// hooks have defaults, so a plain container is just:
///
/// ```
/// use horizon_trellis::Control;
///
/// struct Group;
/// impl Control for Group {}
/// ```
///
/// # Layout Algorithm
///
/// Layout is two passes, both driven by the tree:
///
/// 1. **Measure (bottom-up)**: [`measure`](Self::measure) receives the space
///    left after margin, desired bounds and min/max clamps, and returns the
///    size it wants. Measure children through [`LayoutContext::measure_child`].
/// 2. **Arrange (top-down)**: [`arrange`](Self::arrange) receives the final
///    size and places children with [`LayoutContext::arrange_child`].
///
/// The default implementations are the dock layout: edge-docked children
/// first, then `Fill` children in the remaining interior, then
/// self-positioned children at their desired left/top.
pub trait Control: Any + Send {
    /// Compute the natural size for `available` space.
    ///
    /// `available` is already reduced by margin and clamped. A returned size
    /// that is not finite is an error.
    fn measure(&mut self, cx: &mut LayoutContext<'_>, available: Size) -> LayoutResult<Size> {
        measure_docked(cx, available)
    }

    /// Place children inside `final_size` and return the size actually used.
    fn arrange(&mut self, cx: &mut LayoutContext<'_>, final_size: Size) -> LayoutResult<Size> {
        arrange_docked(cx, final_size)
    }

    /// Draw this control. Children are drawn afterwards by the tree.
    fn render(&self, skin: &mut dyn Skin, cx: &RenderContext<'_>) {
        skin.draw(cx);
    }

    /// Called after `child` was attached to `this`.
    ///
    /// Returning an error rejects the child; the tree detaches it again.
    fn on_child_added(
        &mut self,
        tree: &ControlTree,
        this: ControlId,
        child: ControlId,
    ) -> LayoutResult<()> {
        let _ = (tree, this, child);
        Ok(())
    }

    /// Called when arrange moved or resized this control.
    fn on_bounds_changed(&mut self, old: Rect, new: Rect) {
        let _ = (old, new);
    }

    /// Whether the control claims pointer hits by default.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Whether the control takes part in keyboard tab order by default.
    fn is_tab_stop(&self) -> bool {
        false
    }

    /// Whether invalidation stops at this control and re-lays it out locally.
    fn is_virtual(&self) -> bool {
        false
    }
}

impl dyn Control {
    /// Downcast to a concrete control type.
    pub fn downcast_ref<T: Control>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }

    /// Downcast to a concrete control type, mutably.
    pub fn downcast_mut<T: Control>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = self;
        any.downcast_mut::<T>()
    }
}
