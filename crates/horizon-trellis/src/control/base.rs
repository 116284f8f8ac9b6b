//! Per-node state shared by every control.
//!
//! `ControlBase` holds everything the layout engine, the invalidation walk,
//! hit testing and rendering read or write. Behaviour specific to a control
//! type lives in its [`Control`](super::Control) implementation instead.

use horizon_trellis_core::{ControlId, Rect, Size, Thickness};

use super::placement::{Anchor, DesiredBounds, Dock, HorizontalAlignment, VerticalAlignment};

/// The common state of one node in a [`ControlTree`](crate::ControlTree).
///
/// Fields are read through accessors; mutation goes through the tree so
/// that every change that affects layout also invalidates it.
#[derive(Debug, Clone)]
pub struct ControlBase {
    pub(crate) type_name: &'static str,
    pub(crate) name: String,

    /// Logical parent (who the user added this control to).
    pub(crate) parent: Option<ControlId>,
    /// Actual parent (whose `children` list holds this control).
    pub(crate) actual_parent: Option<ControlId>,
    pub(crate) children: Vec<ControlId>,
    /// Receives children added to this control, if set.
    pub(crate) inner_panel: Option<ControlId>,

    /// Position and size relative to the actual parent.
    pub(crate) bounds: Rect,
    /// Content area left after the last arrange, in local coordinates.
    pub(crate) inner_bounds: Rect,
    /// Last rectangle the parent arranged this control into, margin included.
    pub(crate) arranged_slot: Rect,
    /// Result of the last measure, margin included.
    pub(crate) measured_size: Size,

    pub(crate) desired: DesiredBounds,
    pub(crate) minimum_size: Size,
    pub(crate) maximum_size: Size,
    pub(crate) padding: Thickness,
    pub(crate) margin: Thickness,
    pub(crate) dock: Dock,
    pub(crate) horizontal_alignment: HorizontalAlignment,
    pub(crate) vertical_alignment: VerticalAlignment,
    pub(crate) anchor: Anchor,
    pub(crate) anchor_bounds: Option<Rect>,

    pub(crate) needs_layout: bool,
    pub(crate) layout_done: bool,
    pub(crate) is_virtual: bool,
    pub(crate) collapsed: bool,
    pub(crate) hidden: bool,
    pub(crate) needs_repaint: bool,
    pub(crate) mouse_input_enabled: bool,
    pub(crate) tab_stop: bool,
    pub(crate) pending_delete: bool,
}

impl ControlBase {
    pub(crate) fn new(type_name: &'static str, minimum_size: Size, maximum_size: Size) -> Self {
        Self {
            type_name,
            name: String::new(),
            parent: None,
            actual_parent: None,
            children: Vec::new(),
            inner_panel: None,
            bounds: Rect::ZERO,
            inner_bounds: Rect::ZERO,
            arranged_slot: Rect::ZERO,
            measured_size: Size::ZERO,
            desired: DesiredBounds::UNSPECIFIED,
            minimum_size,
            maximum_size: maximum_size.max(minimum_size),
            padding: Thickness::ZERO,
            margin: Thickness::ZERO,
            dock: Dock::None,
            horizontal_alignment: HorizontalAlignment::Stretch,
            vertical_alignment: VerticalAlignment::Stretch,
            anchor: Anchor::TOP_LEFT,
            anchor_bounds: None,
            needs_layout: true,
            layout_done: false,
            is_virtual: false,
            collapsed: false,
            hidden: false,
            needs_repaint: true,
            mouse_input_enabled: false,
            tab_stop: false,
            pending_delete: false,
        }
    }

    /// Name of the concrete control type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Short type name without the module path.
    pub fn short_type_name(&self) -> &'static str {
        self.type_name.rsplit("::").next().unwrap_or(self.type_name)
    }

    /// User-assigned name, empty by default.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The control the user added this one to.
    #[inline]
    pub fn parent(&self) -> Option<ControlId> {
        self.parent
    }

    /// The control whose children list holds this one.
    #[inline]
    pub fn actual_parent(&self) -> Option<ControlId> {
        self.actual_parent
    }

    /// Children in z-order (first is bottom-most).
    #[inline]
    pub fn children(&self) -> &[ControlId] {
        &self.children
    }

    /// Panel that receives children added to this control.
    #[inline]
    pub fn inner_panel(&self) -> Option<ControlId> {
        self.inner_panel
    }

    /// Bounds relative to the actual parent.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Content area after the last arrange, relative to this control.
    #[inline]
    pub fn inner_bounds(&self) -> Rect {
        self.inner_bounds
    }

    /// Size from the last measure, margin included.
    #[inline]
    pub fn measured_size(&self) -> Size {
        self.measured_size
    }

    /// User-requested geometry.
    #[inline]
    pub fn desired_bounds(&self) -> DesiredBounds {
        self.desired
    }

    #[inline]
    pub fn minimum_size(&self) -> Size {
        self.minimum_size
    }

    #[inline]
    pub fn maximum_size(&self) -> Size {
        self.maximum_size
    }

    #[inline]
    pub fn padding(&self) -> Thickness {
        self.padding
    }

    #[inline]
    pub fn margin(&self) -> Thickness {
        self.margin
    }

    #[inline]
    pub fn dock(&self) -> Dock {
        self.dock
    }

    #[inline]
    pub fn horizontal_alignment(&self) -> HorizontalAlignment {
        self.horizontal_alignment
    }

    #[inline]
    pub fn vertical_alignment(&self) -> VerticalAlignment {
        self.vertical_alignment
    }

    #[inline]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Authored rectangle for anchor layouts, if one was set.
    #[inline]
    pub fn anchor_bounds(&self) -> Option<Rect> {
        self.anchor_bounds
    }

    /// Whether the next layout pass must visit this control.
    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Whether this control has been laid out at least once.
    #[inline]
    pub fn layout_done(&self) -> bool {
        self.layout_done
    }

    /// Whether invalidation stops here and queues a node-local re-layout.
    #[inline]
    pub fn is_virtual(&self) -> bool {
        self.is_virtual
    }

    /// Collapsed controls take no space and are not drawn or hit.
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Hidden controls keep their space but are not drawn or hit.
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    #[inline]
    pub fn mouse_input_enabled(&self) -> bool {
        self.mouse_input_enabled
    }

    #[inline]
    pub fn is_tab_stop(&self) -> bool {
        self.tab_stop
    }

    /// Whether this control is waiting in the deferred delete queue.
    #[inline]
    pub fn is_pending_delete(&self) -> bool {
        self.pending_delete
    }

    /// Whether a layout pass gives this control any space.
    #[inline]
    pub fn participates_in_layout(&self) -> bool {
        !self.collapsed && !self.pending_delete
    }

    /// Whether this control is drawn and can be hit.
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.hidden && self.participates_in_layout()
    }
}
