//! The boundary to the drawing backend.
//!
//! The tree never draws anything itself. A render traversal visits visible
//! controls in paint order and hands each one a [`RenderContext`]; the
//! control's [`render`](crate::Control::render) hook forwards whatever it
//! wants drawn to a [`Skin`].

use horizon_trellis_core::{ControlId, LayoutResult, Point, Rect, Size, logging::targets};

use crate::layout::ChildList;
use crate::tree::ControlTree;

/// What a control is drawn into.
pub trait Skin {
    /// Draw the control's chrome (background, border, focus cue).
    fn draw(&mut self, cx: &RenderContext<'_>);

    /// Draw a run of text inside the control's inner bounds.
    fn draw_text(&mut self, cx: &RenderContext<'_>, text: &str) {
        let _ = (cx, text);
    }

    /// Draw an image of the given intrinsic size inside the inner bounds.
    fn draw_image(&mut self, cx: &RenderContext<'_>, image_size: Size) {
        let _ = (cx, image_size);
    }
}

/// Read-only geometry for one control during a render traversal.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// The control being drawn.
    pub id: ControlId,
    /// Concrete control type.
    pub type_name: &'static str,
    /// User-assigned name.
    pub name: &'a str,
    /// Absolute position of the control's parent.
    pub origin: Point,
    /// Absolute bounds of the control.
    pub render_bounds: Rect,
    /// Absolute content area (bounds inset by padding or the inner rect
    /// recorded by the last arrange).
    pub inner_bounds: Rect,
    /// Distance from the traversal's starting control.
    pub depth: usize,
}

impl ControlTree {
    /// Render `id` and its visible descendants in paint order.
    ///
    /// Clears the repaint flag of every control drawn and returns how many
    /// were drawn.
    pub fn render(&mut self, id: ControlId, skin: &mut dyn Skin) -> LayoutResult<usize> {
        let origin = match self.base(id)?.actual_parent {
            Some(parent) => self.absolute_bounds(parent)?.origin,
            None => Point::ZERO,
        };
        let count = self.render_recursive(id, skin, origin, 0);
        tracing::trace!(target: targets::RENDER, ?id, count, "rendered");
        Ok(count)
    }

    fn render_recursive(&mut self, id: ControlId, skin: &mut dyn Skin, origin: Point, depth: usize) -> usize {
        let Some(node) = self.nodes.get(id) else {
            return 0;
        };
        let base = &node.base;
        if !base.is_visible() {
            return 0;
        }

        let render_bounds = base.bounds.offset(origin.x, origin.y);
        let absolute = render_bounds.origin;
        let cx = RenderContext {
            id,
            type_name: base.type_name,
            name: &base.name,
            origin,
            render_bounds,
            inner_bounds: base.inner_bounds.offset(absolute.x, absolute.y),
            depth,
        };
        if let Some(control) = node.control.as_deref() {
            control.render(skin, &cx);
        }
        let children: ChildList = base.children.iter().copied().collect();

        if let Some(node) = self.nodes.get_mut(id) {
            node.base.needs_repaint = false;
        }

        let mut count = 1;
        for child in children {
            count += self.render_recursive(child, skin, absolute, depth + 1);
        }
        count
    }
}
