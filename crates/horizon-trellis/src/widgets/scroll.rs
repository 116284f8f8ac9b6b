use horizon_trellis_core::{ControlId, LayoutResult, Point, Rect, Size};

use super::Panel;
use crate::control::Control;
use crate::layout::{LayoutContext, arrange_docked, measure_docked};
use crate::tree::ControlTree;

/// A viewport onto content that may be larger than itself.
///
/// Children added to a scroll container are redirected into an inner content
/// panel. The content is measured without limit along the scrollable axes
/// and arranged at the negated scroll offset.
///
/// A scroll container is a virtual control: once laid out, changes inside it
/// (including scrolling) only re-lay out the container on the next tick
/// instead of the whole tree.
///
/// # Example
///
/// ```
/// use horizon_trellis::{Canvas, Point, Size};
/// use horizon_trellis::widgets::{Label, ScrollContainer};
///
/// let mut canvas = Canvas::new(Size::new(200.0, 100.0));
/// let root = canvas.root();
/// let scroll = ScrollContainer::create(canvas.tree_mut(), Some(root)).unwrap();
/// canvas.tree_mut().insert_child(scroll, Label::new("line\n".repeat(50))).unwrap();
/// canvas.tick().unwrap();
///
/// canvas.tree_mut()
///     .update_control::<ScrollContainer, _>(scroll, |s| s.scroll_to(Point::new(0.0, 40.0)))
///     .unwrap();
/// let stats = canvas.tick().unwrap();
/// assert!(!stats.full_layout);
/// assert_eq!(stats.deferred_measures, 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollContainer {
    offset: Point,
    horizontal: bool,
    vertical: bool,
    extent: Size,
    viewport: Size,
}

impl Default for ScrollContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollContainer {
    /// A container scrolling vertically only.
    pub fn new() -> Self {
        Self {
            offset: Point::ZERO,
            horizontal: false,
            vertical: true,
            extent: Size::ZERO,
            viewport: Size::ZERO,
        }
    }

    /// Choose the scrollable axes.
    pub fn with_axes(mut self, horizontal: bool, vertical: bool) -> Self {
        self.horizontal = horizontal;
        self.vertical = vertical;
        self
    }

    /// Insert a scroll container with its content panel.
    ///
    /// Returns the container; the content panel is its inner panel.
    pub fn create(tree: &mut ControlTree, parent: Option<ControlId>) -> LayoutResult<ControlId> {
        Self::create_with(tree, parent, Self::new())
    }

    /// Like [`create`](Self::create) with a configured container.
    pub fn create_with(
        tree: &mut ControlTree,
        parent: Option<ControlId>,
        container: Self,
    ) -> LayoutResult<ControlId> {
        let id = tree.insert(container);
        let content = tree.insert_child(id, Panel)?;
        tree.set_inner_panel(id, Some(content))?;
        if let Some(parent) = parent
            && let Err(err) = tree.set_parent(id, Some(parent))
        {
            tree.destroy(id)?;
            return Err(err);
        }
        Ok(id)
    }

    /// Requested scroll offset; clamped on the next arrange.
    #[inline]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Scroll so that `offset` of the content is at the viewport origin.
    pub fn scroll_to(&mut self, offset: Point) {
        self.offset = offset;
    }

    /// Scroll by a delta.
    pub fn scroll_by(&mut self, dx: f32, dy: f32) {
        self.offset = self.offset.offset(dx, dy);
    }

    /// Size of the content after the last measure.
    #[inline]
    pub fn extent(&self) -> Size {
        self.extent
    }

    /// Size of the visible area after the last arrange.
    #[inline]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Largest offset that keeps the viewport inside the content.
    pub fn max_offset(&self) -> Point {
        Point::new(
            (self.extent.width - self.viewport.width).max(0.0),
            (self.extent.height - self.viewport.height).max(0.0),
        )
    }

    fn clamp_offset(&mut self) {
        let max = self.max_offset();
        self.offset = Point::new(
            if self.horizontal { self.offset.x.clamp(0.0, max.x) } else { 0.0 },
            if self.vertical { self.offset.y.clamp(0.0, max.y) } else { 0.0 },
        );
    }
}

impl Control for ScrollContainer {
    fn measure(&mut self, cx: &mut LayoutContext<'_>, available: Size) -> LayoutResult<Size> {
        let Some(content) = cx.base()?.inner_panel() else {
            return measure_docked(cx, available);
        };
        let padding = cx.padding();
        let inner = available.shrink(padding);
        let offered = Size::new(
            if self.horizontal { f32::INFINITY } else { inner.width },
            if self.vertical { f32::INFINITY } else { inner.height },
        );

        self.extent = cx.measure_child(content, offered)?;
        Ok(self.extent.min(inner).grow(padding))
    }

    fn arrange(&mut self, cx: &mut LayoutContext<'_>, final_size: Size) -> LayoutResult<Size> {
        let Some(content) = cx.base()?.inner_panel() else {
            return arrange_docked(cx, final_size);
        };
        let padding = cx.padding();
        self.viewport = final_size.shrink(padding);
        self.clamp_offset();

        let size = Size::new(
            if self.horizontal { self.extent.width.max(self.viewport.width) } else { self.viewport.width },
            if self.vertical { self.extent.height.max(self.viewport.height) } else { self.viewport.height },
        );
        cx.arrange_child(
            content,
            Rect::new(
                padding.left - self.offset.x,
                padding.top - self.offset.y,
                size.width,
                size.height,
            ),
        )?;
        cx.set_inner_bounds(Rect::new(
            padding.left,
            padding.top,
            self.viewport.width,
            self.viewport.height,
        ))?;
        Ok(final_size)
    }

    fn is_virtual(&self) -> bool {
        true
    }
}
