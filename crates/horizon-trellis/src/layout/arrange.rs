//! The arrange wrapper shared by every control.

use horizon_trellis_core::{ControlId, LayoutResult, Rect, Size, logging::targets};

use super::LayoutContext;
use crate::control::{HorizontalAlignment, VerticalAlignment};
use crate::tree::ControlTree;

impl ControlTree {
    /// Arrange a control into `slot`, given in its actual parent's
    /// coordinates and including the control's margin.
    ///
    /// Non-stretch alignments use the measured size on their axis. Explicit
    /// desired dimensions override the size, which is then capped at the
    /// slot and clamped into the min/max range, so the minimum wins and the
    /// control may overflow a slot smaller than it. Any leftover space is
    /// distributed by alignment.
    ///
    /// Collapsed controls are skipped.
    pub fn arrange(&mut self, id: ControlId, slot: Rect) -> LayoutResult<()> {
        let base = self.base(id)?;
        if !base.participates_in_layout() {
            return Ok(());
        }

        let margin = base.margin;
        let padding = base.padding;
        let desired = base.desired;
        let (minimum, maximum) = (base.minimum_size, base.maximum_size);
        let (halign, valign) = (base.horizontal_alignment, base.vertical_alignment);
        let measured = base.measured_size.shrink(margin);

        let area = slot.deflate(margin);
        let fit = |size: Size| {
            desired
                .override_size(size.non_negative())
                .min(area.size)
                .clamp(minimum, maximum)
        };

        let mut size = area.size;
        if halign != HorizontalAlignment::Stretch {
            size.width = measured.width;
        }
        if valign != VerticalAlignment::Stretch {
            size.height = measured.height;
        }
        let size = fit(size);

        self.base_mut(id)?.inner_bounds = Rect::from_size(size).deflate(padding);
        let used = self.with_control(id, |control, tree| {
            let mut cx = LayoutContext::new(tree, id);
            control.arrange(&mut cx, size)
        })??;
        let size = if used.is_finite() { fit(used) } else { size };

        let bounds = Rect::new(
            area.left() + halign.offset(area.width(), size.width),
            area.top() + valign.offset(area.height(), size.height),
            size.width,
            size.height,
        );
        self.set_bounds(id, bounds)?;

        let base = self.base_mut(id)?;
        base.arranged_slot = slot;
        base.needs_layout = false;
        base.layout_done = true;
        Ok(())
    }

    /// Store new bounds, notify the control and request a redraw if they
    /// changed.
    pub(crate) fn set_bounds(&mut self, id: ControlId, bounds: Rect) -> LayoutResult<()> {
        let base = self.base_mut(id)?;
        let old = base.bounds;
        if old == bounds {
            return Ok(());
        }
        base.bounds = bounds;

        self.with_control(id, |control, _| control.on_bounds_changed(old, bounds))?;
        tracing::trace!(target: targets::LAYOUT, ?id, ?old, new = ?bounds, "bounds changed");
        self.request_redraw(id)
    }

    /// Re-run measure and arrange for one control inside the slot its parent
    /// last gave it, without touching the rest of the tree.
    pub(crate) fn layout_in_place(&mut self, id: ControlId) -> LayoutResult<()> {
        let slot = self.base(id)?.arranged_slot;
        self.measure(id, slot.size)?;
        self.arrange(id, slot)
    }
}
