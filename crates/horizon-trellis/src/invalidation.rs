//! Layout invalidation and deferred work queues.
//!
//! The invalidation system ensures that layout recalculations happen efficiently:
//! - Changes mark a control and its logical ancestors as dirty
//! - The upward walk stops at the first ancestor that is already dirty
//! - A virtual control that has been laid out before absorbs the walk and is
//!   queued for a node-local re-layout instead of dirtying the whole tree
//! - Actual recalculation is deferred to the next canvas tick
//!
//! Deletions are deferred the same way so that no structural mutation happens
//! while a traversal is running.

use horizon_trellis_core::{ControlId, LayoutResult, logging::targets};
use indexmap::IndexSet;

use crate::tree::ControlTree;

/// Pending work collected between canvas ticks.
///
/// Both queues preserve insertion order and ignore duplicates.
#[derive(Debug, Default)]
pub struct LayoutInvalidator {
    /// Virtual controls awaiting a node-local re-layout.
    measure_queue: IndexSet<ControlId>,

    /// Controls awaiting destruction.
    delete_queue: IndexSet<ControlId>,

    /// Whether tab order must be recomputed.
    structure_changed: bool,
}

impl LayoutInvalidator {
    /// Create an empty invalidator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a virtual control for node-local re-layout.
    pub fn queue_measure(&mut self, id: ControlId) -> bool {
        self.measure_queue.insert(id)
    }

    /// Queue a control for destruction on the next tick.
    pub fn queue_delete(&mut self, id: ControlId) -> bool {
        self.delete_queue.insert(id)
    }

    /// Take the measure queue, leaving it empty.
    pub fn take_measure_queue(&mut self) -> IndexSet<ControlId> {
        std::mem::take(&mut self.measure_queue)
    }

    /// Take the delete queue, leaving it empty.
    pub fn take_delete_queue(&mut self) -> IndexSet<ControlId> {
        std::mem::take(&mut self.delete_queue)
    }

    /// Drop a destroyed control from both queues.
    pub fn forget(&mut self, id: ControlId) {
        self.measure_queue.shift_remove(&id);
        self.delete_queue.shift_remove(&id);
    }

    #[inline]
    pub fn is_queued_for_measure(&self, id: ControlId) -> bool {
        self.measure_queue.contains(&id)
    }

    #[inline]
    pub fn pending_measures(&self) -> usize {
        self.measure_queue.len()
    }

    #[inline]
    pub fn pending_deletes(&self) -> usize {
        self.delete_queue.len()
    }

    /// Record that children, visibility or tab stops changed.
    #[inline]
    pub fn mark_structure_changed(&mut self) {
        self.structure_changed = true;
    }

    /// Return and clear the structure-changed flag.
    #[inline]
    pub fn take_structure_changed(&mut self) -> bool {
        std::mem::take(&mut self.structure_changed)
    }
}

impl ControlTree {
    /// Mark a control as needing layout and propagate to its ancestors.
    ///
    /// The walk follows logical parents. It stops when it reaches an
    /// ancestor that is already dirty, or a virtual control that has been
    /// laid out at least once; such a control is queued for a node-local
    /// re-layout on the next tick when it belongs to a canvas.
    pub fn invalidate(&mut self, id: ControlId) -> LayoutResult<()> {
        self.ensure(id)?;
        let mut current = id;
        loop {
            let base = self.base_mut(current)?;
            base.needs_layout = true;
            let boundary = base.is_virtual && base.layout_done;
            let parent = base.parent;

            if boundary {
                if self.canvas_of(current).is_ok() && self.invalidator.queue_measure(current) {
                    tracing::trace!(target: targets::INVALIDATION, ?current, "queued virtual control for measure");
                }
                return Ok(());
            }

            let Some(parent) = parent else {
                return Ok(());
            };
            match self.nodes.get(parent) {
                Some(node) if node.base.needs_layout => return Ok(()),
                Some(_) => current = parent,
                None => return Ok(()),
            }
        }
    }

    /// Flag a control and its actual ancestors as needing repaint.
    ///
    /// The walk stops at the first ancestor already flagged.
    pub fn request_redraw(&mut self, id: ControlId) -> LayoutResult<()> {
        let base = self.base_mut(id)?;
        base.needs_repaint = true;
        let mut current = base.actual_parent;
        while let Some(parent) = current {
            let Some(node) = self.nodes.get_mut(parent) else {
                break;
            };
            if node.base.needs_repaint {
                break;
            }
            node.base.needs_repaint = true;
            current = node.base.actual_parent;
        }
        Ok(())
    }
}
