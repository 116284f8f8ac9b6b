//! Arena storage for controls and their parent/child relationships.
//!
//! Every control lives in a [`ControlTree`] keyed by [`ControlId`]. A node
//! has two parents:
//!
//! - the **logical parent**, the control the user added it to, which drives
//!   invalidation and canvas lookup;
//! - the **actual parent**, the control whose children list holds it, which
//!   drives layout, rendering and hit testing.
//!
//! They differ only when a container designates an inner panel: children
//! added to the container are physically placed into the panel.

use std::any::type_name;

use horizon_trellis_core::{
    ControlId, LayoutError, LayoutResult, Rect, Size, Thickness, logging::targets,
};
use slotmap::SlotMap;

use crate::config::GlyphMetrics;
use crate::control::{
    Anchor, Control, ControlBase, DesiredBounds, Dock, HorizontalAlignment, VerticalAlignment,
};
use crate::invalidation::LayoutInvalidator;

/// One arena slot: shared state plus the type-specific behaviour.
///
/// The behaviour is taken out while one of its hooks runs so the hook can
/// borrow the rest of the tree mutably.
pub(crate) struct ControlNode {
    pub(crate) base: ControlBase,
    pub(crate) control: Option<Box<dyn Control>>,
}

/// The control tree.
///
/// # Example
///
/// ```
/// use horizon_trellis::{ControlTree, Dock};
/// use horizon_trellis::widgets::Panel;
///
/// let mut tree = ControlTree::new();
/// let window = tree.insert(Panel);
/// let sidebar = tree.insert_child(window, Panel).unwrap();
/// tree.set_dock(sidebar, Dock::Left).unwrap();
///
/// assert_eq!(tree.parent_of(sidebar).unwrap(), Some(window));
/// assert_eq!(tree.children_of(window).unwrap(), &[sidebar]);
/// ```
pub struct ControlTree {
    pub(crate) nodes: SlotMap<ControlId, ControlNode>,
    pub(crate) root: Option<ControlId>,
    pub(crate) invalidator: LayoutInvalidator,
    default_minimum_size: Size,
    default_maximum_size: Size,
    pub(crate) glyph_metrics: GlyphMetrics,
}

impl Default for ControlTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlTree {
    /// Default minimum size of a new control.
    pub const DEFAULT_MINIMUM_SIZE: Size = Size::new(1.0, 1.0);

    /// Create an empty tree with the default size limits.
    pub fn new() -> Self {
        Self::with_size_limits(Self::DEFAULT_MINIMUM_SIZE, Size::INFINITE)
    }

    /// Create an empty tree whose new controls start with the given limits.
    pub fn with_size_limits(minimum: Size, maximum: Size) -> Self {
        let minimum = minimum.non_negative();
        Self {
            nodes: SlotMap::with_key(),
            root: None,
            invalidator: LayoutInvalidator::new(),
            default_minimum_size: minimum,
            default_maximum_size: maximum.max(minimum),
            glyph_metrics: GlyphMetrics::default(),
        }
    }

    /// Metrics text controls measure with unless they carry their own.
    #[inline]
    pub fn glyph_metrics(&self) -> GlyphMetrics {
        self.glyph_metrics
    }

    /// Change the shared text metrics and invalidate every text control.
    pub fn set_glyph_metrics(&mut self, metrics: GlyphMetrics) -> LayoutResult<()> {
        if self.glyph_metrics == metrics {
            return Ok(());
        }
        self.glyph_metrics = metrics;
        let ids: Vec<ControlId> = self.nodes.keys().collect();
        for id in ids {
            self.invalidate(id)?;
        }
        Ok(())
    }

    /// Add a detached control and return its handle.
    pub fn insert<C: Control>(&mut self, control: C) -> ControlId {
        let mut base = ControlBase::new(
            type_name::<C>(),
            self.default_minimum_size,
            self.default_maximum_size,
        );
        base.mouse_input_enabled = control.is_interactive();
        base.tab_stop = control.is_tab_stop();
        base.is_virtual = control.is_virtual();

        let id = self.nodes.insert(ControlNode {
            base,
            control: Some(Box::new(control)),
        });
        tracing::trace!(target: targets::TREE, ?id, type_name = type_name::<C>(), "inserted control");
        id
    }

    /// Add a control as the last child of `parent`.
    ///
    /// If the parent rejects the child, the new control is discarded and the
    /// error returned.
    pub fn insert_child<C: Control>(&mut self, parent: ControlId, control: C) -> LayoutResult<ControlId> {
        self.ensure(parent)?;
        let id = self.insert(control);
        if let Err(err) = self.set_parent(id, Some(parent)) {
            self.nodes.remove(id);
            return Err(err);
        }
        Ok(id)
    }

    /// Check if a control exists in the tree.
    #[inline]
    pub fn contains(&self, id: ControlId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of live controls.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root control, once a canvas has been attached.
    #[inline]
    pub fn root(&self) -> Option<ControlId> {
        self.root
    }

    pub(crate) fn ensure(&self, id: ControlId) -> LayoutResult<()> {
        if self.nodes.contains_key(id) {
            Ok(())
        } else {
            Err(LayoutError::InvalidControl { id })
        }
    }

    /// Shared state of a control.
    pub fn base(&self, id: ControlId) -> LayoutResult<&ControlBase> {
        self.nodes
            .get(id)
            .map(|node| &node.base)
            .ok_or(LayoutError::InvalidControl { id })
    }

    pub(crate) fn base_mut(&mut self, id: ControlId) -> LayoutResult<&mut ControlBase> {
        self.nodes
            .get_mut(id)
            .map(|node| &mut node.base)
            .ok_or(LayoutError::InvalidControl { id })
    }

    /// Run `f` with the behaviour of `id` taken out of the arena.
    ///
    /// The behaviour is restored before returning, whatever `f` returned.
    pub(crate) fn with_control<R>(
        &mut self,
        id: ControlId,
        f: impl FnOnce(&mut dyn Control, &mut Self) -> R,
    ) -> LayoutResult<R> {
        let mut control = self
            .nodes
            .get_mut(id)
            .and_then(|node| node.control.take())
            .ok_or(LayoutError::InvalidControl { id })?;
        let result = f(control.as_mut(), self);
        if let Some(node) = self.nodes.get_mut(id) {
            node.control = Some(control);
        }
        Ok(result)
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    /// Set the logical parent of a control.
    ///
    /// The control is removed from its old actual parent and appended to the
    /// new parent, or to the new parent's inner panel if it has one. Passing
    /// `None` detaches the control.
    pub fn set_parent(&mut self, id: ControlId, new_parent: Option<ControlId>) -> LayoutResult<()> {
        self.ensure(id)?;

        let actual = match new_parent {
            Some(parent) => {
                let actual = self.resolve_inner_panel(parent)?;
                if self.is_ancestor_of(id, actual) || self.is_logical_ancestor_of(id, parent) {
                    return Err(LayoutError::CircularParentage { id, parent });
                }
                Some(actual)
            }
            None => None,
        };

        let previous = self.placement(id)?;
        let old_parent = self.detach(id)?;

        let (Some(parent), Some(actual)) = (new_parent, actual) else {
            if let Some(old_parent) = old_parent {
                self.invalidate(old_parent)?;
            }
            tracing::trace!(target: targets::TREE, ?id, "detached control");
            return Ok(());
        };

        {
            let base = self.base_mut(id)?;
            base.parent = Some(parent);
            base.actual_parent = Some(actual);
            base.needs_layout = true;
        }
        self.base_mut(actual)?.children.push(id);

        let accepted = self
            .with_control(parent, |control, tree| control.on_child_added(tree, parent, id))
            .and_then(|result| result);
        if let Err(err) = accepted {
            tracing::debug!(target: targets::TREE, ?id, ?parent, %err, "parent rejected child");
            self.detach(id)?;
            self.restore_placement(id, previous)?;
            return Err(err);
        }

        tracing::trace!(target: targets::TREE, ?id, ?parent, ?actual, "attached control");
        if let Some(old_parent) = old_parent
            && self.contains(old_parent)
        {
            self.invalidate(old_parent)?;
        }
        self.invalidator.mark_structure_changed();
        self.invalidate(parent)?;
        self.request_redraw(actual)
    }

    /// Where a control currently sits: logical parent, actual parent and
    /// index among the actual parent's children.
    fn placement(&self, id: ControlId) -> LayoutResult<Option<(ControlId, ControlId, usize)>> {
        let base = self.base(id)?;
        let (Some(parent), Some(actual)) = (base.parent, base.actual_parent) else {
            return Ok(None);
        };
        let index = self
            .base(actual)?
            .children
            .iter()
            .position(|&child| child == id)
            .unwrap_or(0);
        Ok(Some((parent, actual, index)))
    }

    /// Put a detached control back where [`placement`](Self::placement) found it.
    fn restore_placement(
        &mut self,
        id: ControlId,
        placement: Option<(ControlId, ControlId, usize)>,
    ) -> LayoutResult<()> {
        let Some((parent, actual, index)) = placement else {
            return Ok(());
        };
        let children = &mut self.base_mut(actual)?.children;
        let index = index.min(children.len());
        children.insert(index, id);
        let base = self.base_mut(id)?;
        base.parent = Some(parent);
        base.actual_parent = Some(actual);
        Ok(())
    }

    /// Follow inner-panel redirection from `parent` to the control that will
    /// actually hold new children.
    fn resolve_inner_panel(&self, parent: ControlId) -> LayoutResult<ControlId> {
        let mut actual = parent;
        while let Some(panel) = self.base(actual)?.inner_panel {
            if panel == actual || !self.is_ancestor_of(actual, panel) {
                break;
            }
            actual = panel;
        }
        Ok(actual)
    }

    /// Remove `id` from its actual parent's children and clear both parents.
    ///
    /// Returns the old logical parent.
    fn detach(&mut self, id: ControlId) -> LayoutResult<Option<ControlId>> {
        let base = self.base_mut(id)?;
        let old_parent = base.parent.take();
        let old_actual = base.actual_parent.take();

        if let Some(actual) = old_actual
            && let Some(node) = self.nodes.get_mut(actual)
        {
            node.base.children.retain(|&child| child != id);
            node.base.needs_repaint = true;
            self.invalidator.mark_structure_changed();
        }
        Ok(old_parent)
    }

    /// Whether `ancestor` is `id` or one of its actual ancestors.
    pub fn is_ancestor_of(&self, ancestor: ControlId, id: ControlId) -> bool {
        let mut current = Some(id);
        while let Some(current_id) = current {
            if current_id == ancestor {
                return true;
            }
            current = self.nodes.get(current_id).and_then(|n| n.base.actual_parent);
        }
        false
    }

    /// Whether `ancestor` is `id` or one of its logical ancestors.
    fn is_logical_ancestor_of(&self, ancestor: ControlId, id: ControlId) -> bool {
        let mut current = Some(id);
        while let Some(current_id) = current {
            if current_id == ancestor {
                return true;
            }
            current = self.nodes.get(current_id).and_then(|n| n.base.parent);
        }
        false
    }

    /// Logical parent of a control.
    pub fn parent_of(&self, id: ControlId) -> LayoutResult<Option<ControlId>> {
        self.base(id).map(|base| base.parent)
    }

    /// Actual parent of a control.
    pub fn actual_parent_of(&self, id: ControlId) -> LayoutResult<Option<ControlId>> {
        self.base(id).map(|base| base.actual_parent)
    }

    /// Children of a control in z-order.
    pub fn children_of(&self, id: ControlId) -> LayoutResult<&[ControlId]> {
        self.base(id).map(|base| base.children.as_slice())
    }

    /// Redirect children added to `container` into `panel` from now on.
    ///
    /// The panel must already sit below the container. Children already
    /// attached stay where they are.
    pub fn set_inner_panel(&mut self, container: ControlId, panel: Option<ControlId>) -> LayoutResult<()> {
        self.ensure(container)?;
        if let Some(panel) = panel {
            self.ensure(panel)?;
            if panel == container || !self.is_ancestor_of(container, panel) {
                return Err(LayoutError::InnerPanelOutsideContainer { container, panel });
            }
        }
        self.base_mut(container)?.inner_panel = panel;
        Ok(())
    }

    /// Remove a control from its parent.
    ///
    /// Without `dispose` the control is detached immediately and may be
    /// attached elsewhere. With `dispose` it is queued for destruction on the
    /// next canvas tick; until then it takes no space and is neither drawn
    /// nor hit.
    pub fn remove(&mut self, id: ControlId, dispose: bool) -> LayoutResult<()> {
        if !dispose {
            return self.set_parent(id, None);
        }
        if !self.contains(id) {
            return Err(LayoutError::AlreadyDestroyed { id });
        }

        let base = self.base_mut(id)?;
        base.pending_delete = true;
        let parent = base.parent;
        let actual = base.actual_parent;

        self.invalidator.queue_delete(id);
        self.invalidator.mark_structure_changed();
        tracing::trace!(target: targets::TREE, ?id, "queued control for deletion");

        if let Some(parent) = parent {
            self.invalidate(parent)?;
        }
        if let Some(actual) = actual {
            self.request_redraw(actual)?;
        }
        Ok(())
    }

    /// Destroy a control and all its descendants immediately.
    ///
    /// Destroying a handle that is no longer live is an error.
    pub fn destroy(&mut self, id: ControlId) -> LayoutResult<()> {
        self.destroy_subtree(id).map(|_| ())
    }

    /// Destroy a subtree and return every destroyed handle, children first.
    #[tracing::instrument(skip(self), target = "horizon_trellis::tree", level = "trace")]
    pub(crate) fn destroy_subtree(&mut self, id: ControlId) -> LayoutResult<Vec<ControlId>> {
        if !self.contains(id) {
            return Err(LayoutError::AlreadyDestroyed { id });
        }

        let mut doomed = Vec::new();
        self.collect_descendants(id, &mut doomed);
        doomed.push(id);
        tracing::trace!(target: targets::TREE, ?id, descendant_count = doomed.len() - 1, "destroying control tree");

        if let Some(parent) = self.detach(id)? {
            self.invalidate(parent)?;
        }

        for &doomed_id in &doomed {
            self.nodes.remove(doomed_id);
            self.invalidator.forget(doomed_id);
        }
        if self.root.is_some_and(|root| doomed.contains(&root)) {
            self.root = None;
        }
        self.invalidator.mark_structure_changed();
        Ok(doomed)
    }

    /// Collect all descendants in depth-first order (children before parents).
    fn collect_descendants(&self, id: ControlId, result: &mut Vec<ControlId>) {
        if let Some(node) = self.nodes.get(id) {
            for &child in &node.base.children {
                self.collect_descendants(child, result);
                result.push(child);
            }
        }
    }

    /// Walk logical parents to the top and return the canvas root.
    pub fn canvas_of(&self, id: ControlId) -> LayoutResult<ControlId> {
        let mut current = id;
        loop {
            match self.base(current)?.parent {
                Some(parent) => current = parent,
                None => break,
            }
        }
        match self.root {
            Some(root) if root == current => Ok(root),
            _ => Err(LayoutError::NoCanvas { id }),
        }
    }

    /// Bounds of a control relative to the root.
    pub fn absolute_bounds(&self, id: ControlId) -> LayoutResult<Rect> {
        let mut rect = self.base(id)?.bounds;
        let mut current = self.base(id)?.actual_parent;
        while let Some(parent) = current {
            let base = self.base(parent)?;
            rect = rect.offset(base.bounds.origin.x, base.bounds.origin.y);
            current = base.actual_parent;
        }
        Ok(rect)
    }

    // -------------------------------------------------------------------------
    // Typed access
    // -------------------------------------------------------------------------

    /// Borrow the behaviour of a control as its concrete type.
    pub fn control<T: Control>(&self, id: ControlId) -> LayoutResult<&T> {
        let node = self.nodes.get(id).ok_or(LayoutError::InvalidControl { id })?;
        node.control
            .as_deref()
            .ok_or(LayoutError::InvalidControl { id })?
            .downcast_ref::<T>()
            .ok_or(LayoutError::TypeMismatch {
                id,
                expected: type_name::<T>(),
            })
    }

    /// Mutate the behaviour of a control and invalidate its layout.
    pub fn update_control<T: Control, R>(
        &mut self,
        id: ControlId,
        f: impl FnOnce(&mut T) -> R,
    ) -> LayoutResult<R> {
        let node = self.nodes.get_mut(id).ok_or(LayoutError::InvalidControl { id })?;
        let control = node
            .control
            .as_deref_mut()
            .ok_or(LayoutError::InvalidControl { id })?
            .downcast_mut::<T>()
            .ok_or(LayoutError::TypeMismatch {
                id,
                expected: type_name::<T>(),
            })?;
        let result = f(control);
        self.invalidate(id)?;
        self.request_redraw(id)?;
        Ok(result)
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    /// Apply a layout-affecting change and invalidate.
    fn update_layout(&mut self, id: ControlId, f: impl FnOnce(&mut ControlBase)) -> LayoutResult<()> {
        f(self.base_mut(id)?);
        self.invalidate(id)
    }

    /// Apply a change to how the parent places this control.
    ///
    /// The logical parent is invalidated too, so a laid-out virtual control
    /// cannot absorb a change its parent has to act on.
    fn update_placement(&mut self, id: ControlId, f: impl FnOnce(&mut ControlBase)) -> LayoutResult<()> {
        self.update_layout(id, f)?;
        match self.base(id)?.parent {
            Some(parent) => self.invalidate(parent),
            None => Ok(()),
        }
    }

    pub fn set_name(&mut self, id: ControlId, name: impl Into<String>) -> LayoutResult<()> {
        self.base_mut(id)?.name = name.into();
        Ok(())
    }

    pub fn set_desired_bounds(&mut self, id: ControlId, desired: DesiredBounds) -> LayoutResult<()> {
        self.update_placement(id, |base| base.desired = desired)
    }

    /// Set the explicit left/top, keeping the explicit size.
    pub fn set_desired_position(&mut self, id: ControlId, left: Option<f32>, top: Option<f32>) -> LayoutResult<()> {
        self.update_placement(id, |base| {
            base.desired.left = left;
            base.desired.top = top;
        })
    }

    /// Set the explicit width/height, keeping the explicit position.
    pub fn set_desired_size(&mut self, id: ControlId, width: Option<f32>, height: Option<f32>) -> LayoutResult<()> {
        self.update_placement(id, |base| {
            base.desired.width = width;
            base.desired.height = height;
        })
    }

    /// Set the minimum size, raising the maximum if needed.
    pub fn set_minimum_size(&mut self, id: ControlId, size: Size) -> LayoutResult<()> {
        let size = size.non_negative();
        self.update_placement(id, |base| {
            base.minimum_size = size;
            base.maximum_size = base.maximum_size.max(size);
        })
    }

    /// Set the maximum size, lowering the minimum if needed.
    pub fn set_maximum_size(&mut self, id: ControlId, size: Size) -> LayoutResult<()> {
        let size = size.non_negative();
        self.update_placement(id, |base| {
            base.maximum_size = size;
            base.minimum_size = base.minimum_size.min(size);
        })
    }

    pub fn set_padding(&mut self, id: ControlId, padding: Thickness) -> LayoutResult<()> {
        self.update_placement(id, |base| base.padding = padding.non_negative())
    }

    pub fn set_margin(&mut self, id: ControlId, margin: Thickness) -> LayoutResult<()> {
        self.update_placement(id, |base| base.margin = margin.non_negative())
    }

    pub fn set_dock(&mut self, id: ControlId, dock: Dock) -> LayoutResult<()> {
        self.update_placement(id, |base| base.dock = dock)
    }

    pub fn set_horizontal_alignment(&mut self, id: ControlId, alignment: HorizontalAlignment) -> LayoutResult<()> {
        self.update_layout(id, |base| base.horizontal_alignment = alignment)
    }

    pub fn set_vertical_alignment(&mut self, id: ControlId, alignment: VerticalAlignment) -> LayoutResult<()> {
        self.update_layout(id, |base| base.vertical_alignment = alignment)
    }

    pub fn set_anchor(&mut self, id: ControlId, anchor: Anchor) -> LayoutResult<()> {
        self.update_placement(id, |base| base.anchor = anchor)
    }

    /// Set the rectangle an anchor layout positions this control from.
    pub fn set_anchor_bounds(&mut self, id: ControlId, rect: Option<Rect>) -> LayoutResult<()> {
        self.update_placement(id, |base| base.anchor_bounds = rect)
    }

    /// Collapse or restore a control. Collapsed controls take no space.
    pub fn set_collapsed(&mut self, id: ControlId, collapsed: bool) -> LayoutResult<()> {
        if self.base(id)?.collapsed == collapsed {
            return Ok(());
        }
        self.invalidator.mark_structure_changed();
        self.update_placement(id, |base| base.collapsed = collapsed)?;
        match self.base(id)?.actual_parent {
            Some(actual) => self.request_redraw(actual),
            None => Ok(()),
        }
    }

    /// Hide or show a control. Hidden controls keep their space.
    pub fn set_hidden(&mut self, id: ControlId, hidden: bool) -> LayoutResult<()> {
        let base = self.base_mut(id)?;
        if base.hidden == hidden {
            return Ok(());
        }
        base.hidden = hidden;
        let actual = base.actual_parent;
        self.invalidator.mark_structure_changed();
        match actual {
            Some(actual) => self.request_redraw(actual),
            None => self.request_redraw(id),
        }
    }

    pub fn set_mouse_input_enabled(&mut self, id: ControlId, enabled: bool) -> LayoutResult<()> {
        self.base_mut(id)?.mouse_input_enabled = enabled;
        Ok(())
    }

    pub fn set_tab_stop(&mut self, id: ControlId, tab_stop: bool) -> LayoutResult<()> {
        self.base_mut(id)?.tab_stop = tab_stop;
        self.invalidator.mark_structure_changed();
        Ok(())
    }

    /// Mark a control as a layout boundary for invalidation.
    pub fn set_virtual(&mut self, id: ControlId, is_virtual: bool) -> LayoutResult<()> {
        self.base_mut(id)?.is_virtual = is_virtual;
        Ok(())
    }
}

static_assertions::assert_impl_all!(ControlTree: Send);
