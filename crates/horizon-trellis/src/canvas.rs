//! The canvas: root of a control tree and its frame driver.
//!
//! A [`Canvas`] owns a [`ControlTree`] whose root is a generic dock panel
//! sized to the canvas. Mutations made between frames only record work;
//! [`Canvas::tick`] performs it in a fixed order:
//!
//! 1. destroy controls queued by [`ControlTree::remove`] with `dispose`
//! 2. rebuild the tab order if the structure changed
//! 3. run a full measure and arrange if the root is dirty
//! 4. re-lay out each queued virtual control in place

use std::collections::HashSet;

use horizon_trellis_core::{
    ControlId, LayoutError, LayoutResult, PerfSpan, Point, Rect, Size,
    logging::{span_names, targets},
};

use crate::config::LayoutConfig;
use crate::debug::{ControlTreeDebug, TreeFormatOptions};
use crate::render::Skin;
use crate::tree::ControlTree;
use crate::widgets::Panel;

/// What one [`Canvas::tick`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Controls destroyed from the delete queue, descendants included.
    pub destroyed: usize,
    /// Whether a full layout pass ran from the root.
    pub full_layout: bool,
    /// Virtual controls re-laid out in place.
    pub deferred_measures: usize,
    /// Whether the tab order was recomputed.
    pub tab_order_rebuilt: bool,
}

/// A sized surface hosting a control tree.
///
/// # Example
///
/// ```
/// use horizon_trellis::{Canvas, Dock, Rect, Size};
/// use horizon_trellis::widgets::Panel;
///
/// let mut canvas = Canvas::new(Size::new(200.0, 100.0));
/// let root = canvas.root();
/// let sidebar = canvas.tree_mut().insert_child(root, Panel).unwrap();
/// canvas.tree_mut().set_dock(sidebar, Dock::Left).unwrap();
/// canvas.tree_mut().set_desired_bounds(sidebar, horizon_trellis::DesiredBounds {
///     width: Some(50.0),
///     ..Default::default()
/// }).unwrap();
///
/// let stats = canvas.tick().unwrap();
/// assert!(stats.full_layout);
/// assert_eq!(canvas.tree().base(sidebar).unwrap().bounds(), Rect::new(0.0, 0.0, 50.0, 100.0));
/// ```
pub struct Canvas {
    tree: ControlTree,
    root: ControlId,
    size: Size,
    tab_order: Vec<ControlId>,
    config: LayoutConfig,
}

static_assertions::assert_impl_all!(Canvas: Send);

impl Canvas {
    /// Create a canvas with the default configuration.
    pub fn new(size: Size) -> Self {
        Self::with_config(size, &LayoutConfig::default())
    }

    /// Create a canvas whose controls start with the configured defaults.
    pub fn with_config(size: Size, config: &LayoutConfig) -> Self {
        let mut tree =
            ControlTree::with_size_limits(config.default_minimum_size, config.maximum_size());
        tree.glyph_metrics = config.glyph_metrics;
        let root = tree.insert(Panel);
        tree.root = Some(root);
        tree.invalidator.mark_structure_changed();
        tracing::debug!(target: targets::CANVAS, ?root, ?size, "created canvas");

        Self {
            tree,
            root,
            size: size.non_negative(),
            tab_order: Vec::new(),
            config: config.clone(),
        }
    }

    /// The root panel; attach top-level controls here.
    #[inline]
    pub fn root(&self) -> ControlId {
        self.root
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn tree(&self) -> &ControlTree {
        &self.tree
    }

    #[inline]
    pub fn tree_mut(&mut self) -> &mut ControlTree {
        &mut self.tree
    }

    #[inline]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Change the canvas size; the next tick lays out the whole tree.
    pub fn resize(&mut self, size: Size) -> LayoutResult<()> {
        let size = size.non_negative();
        if size == self.size {
            return Ok(());
        }
        tracing::debug!(target: targets::CANVAS, old = ?self.size, new = ?size, "canvas resized");
        self.size = size;
        self.tree.invalidate(self.root)
    }

    /// Run one frame of deferred work.
    ///
    /// Any error aborts the frame and is returned; work already done stays
    /// done.
    pub fn tick(&mut self) -> LayoutResult<FrameStats> {
        let _span = PerfSpan::new(span_names::TICK);

        let destroyed = self.drain_deletes().inspect_err(|err| {
            tracing::error!(target: targets::CANVAS, %err, "deferred delete failed");
        })?;

        let tab_order_rebuilt = self.tree.invalidator.take_structure_changed();
        if tab_order_rebuilt {
            self.rebuild_tab_order();
        }

        let full_layout = self.tree.base(self.root)?.needs_layout;
        if full_layout {
            let _span = PerfSpan::new(span_names::FULL_LAYOUT);
            self.full_layout().inspect_err(|err| {
                tracing::error!(target: targets::CANVAS, %err, "full layout failed");
            })?;
        }

        let deferred_measures = self.drain_measures().inspect_err(|err| {
            tracing::error!(target: targets::CANVAS, %err, "deferred measure failed");
        })?;

        let stats = FrameStats {
            destroyed,
            full_layout,
            deferred_measures,
            tab_order_rebuilt,
        };
        tracing::debug!(
            target: targets::CANVAS,
            destroyed = stats.destroyed,
            full_layout = stats.full_layout,
            deferred_measures = stats.deferred_measures,
            tab_order_rebuilt = stats.tab_order_rebuilt,
            "frame complete"
        );
        Ok(stats)
    }

    fn drain_deletes(&mut self) -> LayoutResult<usize> {
        let queue = self.tree.invalidator.take_delete_queue();
        if queue.is_empty() {
            return Ok(0);
        }
        let _span = PerfSpan::new(span_names::DEFERRED_DELETE);

        // A queued control may already have gone with a queued ancestor.
        let mut destroyed: HashSet<ControlId> = HashSet::new();
        for id in queue {
            if destroyed.contains(&id) {
                continue;
            }
            destroyed.extend(self.tree.destroy_subtree(id)?);
        }
        Ok(destroyed.len())
    }

    fn full_layout(&mut self) -> LayoutResult<()> {
        let bounds = Rect::from_size(self.size);
        self.tree.measure(self.root, self.size)?;
        self.tree.arrange(self.root, bounds)
    }

    fn drain_measures(&mut self) -> LayoutResult<usize> {
        let queue = self.tree.invalidator.take_measure_queue();
        if queue.is_empty() {
            return Ok(0);
        }
        let _span = PerfSpan::new(span_names::DEFERRED_MEASURE);

        let mut count = 0;
        for id in queue {
            let Ok(base) = self.tree.base(id) else {
                continue;
            };
            if !base.needs_layout || !base.participates_in_layout() {
                continue;
            }
            if self.tree.canvas_of(id).is_err() {
                continue;
            }
            self.tree.layout_in_place(id)?;
            count += 1;
        }
        Ok(count)
    }

    fn rebuild_tab_order(&mut self) {
        let mut order = Vec::new();
        self.collect_tab_stops(self.root, &mut order);
        tracing::trace!(target: targets::CANVAS, count = order.len(), "rebuilt tab order");
        self.tab_order = order;
    }

    fn collect_tab_stops(&self, id: ControlId, order: &mut Vec<ControlId>) {
        let Ok(base) = self.tree.base(id) else {
            return;
        };
        if !base.is_visible() {
            return;
        }
        if base.tab_stop {
            order.push(id);
        }
        for &child in &base.children {
            self.collect_tab_stops(child, order);
        }
    }

    /// Lay out one control now, in the slot its parent last gave it.
    ///
    /// The root (or a control never laid out) triggers a full pass instead.
    /// Fails with [`LayoutError::NoCanvas`] when `id` is not attached to this
    /// canvas.
    pub fn layout_control(&mut self, id: ControlId) -> LayoutResult<()> {
        let canvas = self.tree.canvas_of(id)?;
        if canvas != self.root {
            return Err(LayoutError::NoCanvas { id });
        }
        if id == self.root || !self.tree.base(id)?.layout_done {
            return self.full_layout();
        }
        self.tree.layout_in_place(id)
    }

    /// Top-most interactive control under `point` in canvas coordinates.
    pub fn hit_test(&self, point: Point) -> Option<ControlId> {
        self.tree.hit_test_root(point)
    }

    /// Render the whole tree and return how many controls were drawn.
    pub fn render(&mut self, skin: &mut dyn Skin) -> LayoutResult<usize> {
        let _span = PerfSpan::new(span_names::RENDER);
        self.tree.render(self.root, skin)
    }

    /// Focus-eligible controls in depth-first order, as of the last tick.
    #[inline]
    pub fn tab_order(&self) -> &[ControlId] {
        &self.tab_order
    }

    /// Whether anything requested a redraw since the last render.
    pub fn needs_repaint(&self) -> bool {
        self.tree
            .base(self.root)
            .is_ok_and(|base| base.needs_repaint)
    }

    /// Dump the tree in the configured style.
    pub fn debug_tree(&self) -> LayoutResult<String> {
        ControlTreeDebug::with_options(
            &self.tree,
            TreeFormatOptions::with_style(self.config.tree_style),
        )
        .format_subtree(self.root)
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("root", &self.root)
            .field("size", &self.size)
            .field("controls", &self.tree.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlyphMetrics;
    use crate::control::{DesiredBounds, Dock};
    use crate::render::tests::RecordingSkin;
    use crate::widgets::{Button, Label, ScrollContainer};

    fn fixed(tree: &mut ControlTree, id: ControlId, width: Option<f32>, height: Option<f32>) {
        tree.set_desired_bounds(
            id,
            DesiredBounds {
                width,
                height,
                ..DesiredBounds::UNSPECIFIED
            },
        )
        .unwrap();
    }

    #[test]
    fn test_first_tick_lays_out_root() {
        let mut canvas = Canvas::new(Size::new(320.0, 240.0));
        let stats = canvas.tick().unwrap();
        assert!(stats.full_layout);
        assert!(stats.tab_order_rebuilt);
        assert_eq!(
            canvas.tree().base(canvas.root()).unwrap().bounds(),
            Rect::new(0.0, 0.0, 320.0, 240.0)
        );

        let stats = canvas.tick().unwrap();
        assert_eq!(stats, FrameStats::default());
    }

    #[test]
    fn test_left_and_fill_scenario() {
        let mut canvas = Canvas::new(Size::new(200.0, 100.0));
        let root = canvas.root();
        let tree = canvas.tree_mut();
        let left = tree.insert_child(root, Panel).unwrap();
        tree.set_dock(left, Dock::Left).unwrap();
        fixed(tree, left, Some(50.0), None);
        let fill = tree.insert_child(root, Panel).unwrap();
        tree.set_dock(fill, Dock::Fill).unwrap();

        canvas.tick().unwrap();
        assert_eq!(canvas.tree().base(left).unwrap().bounds(), Rect::new(0.0, 0.0, 50.0, 100.0));
        assert_eq!(canvas.tree().base(fill).unwrap().bounds(), Rect::new(50.0, 0.0, 150.0, 100.0));
    }

    #[test]
    fn test_resize_relayouts() {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        let root = canvas.root();
        let fill = canvas.tree_mut().insert_child(root, Panel).unwrap();
        canvas.tree_mut().set_dock(fill, Dock::Fill).unwrap();
        canvas.tick().unwrap();

        canvas.resize(Size::new(300.0, 50.0)).unwrap();
        assert!(canvas.tick().unwrap().full_layout);
        assert_eq!(canvas.tree().base(fill).unwrap().bounds(), Rect::new(0.0, 0.0, 300.0, 50.0));

        canvas.resize(Size::new(300.0, 50.0)).unwrap();
        assert!(!canvas.tick().unwrap().full_layout);
    }

    #[test]
    fn test_deferred_delete_parent_then_child() {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        let root = canvas.root();
        let parent = canvas.tree_mut().insert_child(root, Panel).unwrap();
        let child = canvas.tree_mut().insert_child(parent, Panel).unwrap();
        canvas.tick().unwrap();

        canvas.tree_mut().remove(parent, true).unwrap();
        canvas.tree_mut().remove(child, true).unwrap();
        assert!(canvas.tree().contains(parent));
        assert!(canvas.tree().base(parent).unwrap().is_pending_delete());

        let stats = canvas.tick().unwrap();
        assert_eq!(stats.destroyed, 2);
        assert!(stats.full_layout);
        assert!(!canvas.tree().contains(parent));
        assert!(!canvas.tree().contains(child));
        assert!(canvas.tree().children_of(root).unwrap().is_empty());
    }

    #[test]
    fn test_deferred_delete_child_then_parent() {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        let root = canvas.root();
        let parent = canvas.tree_mut().insert_child(root, Panel).unwrap();
        let child = canvas.tree_mut().insert_child(parent, Panel).unwrap();

        canvas.tree_mut().remove(child, true).unwrap();
        canvas.tree_mut().remove(parent, true).unwrap();
        assert_eq!(canvas.tick().unwrap().destroyed, 2);
        assert_eq!(canvas.tree().len(), 1);
    }

    #[test]
    fn test_double_destruction_is_fatal() {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        let root = canvas.root();
        let doomed = canvas.tree_mut().insert_child(root, Panel).unwrap();
        canvas.tree_mut().remove(doomed, true).unwrap();
        assert_eq!(canvas.tick().unwrap().destroyed, 1);

        assert_eq!(
            canvas.tree_mut().destroy(doomed),
            Err(LayoutError::AlreadyDestroyed { id: doomed })
        );
        assert_eq!(
            canvas.tree_mut().remove(doomed, true),
            Err(LayoutError::AlreadyDestroyed { id: doomed })
        );
    }

    #[test]
    fn test_direct_destroy_drops_queued_descendant() {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        let root = canvas.root();
        let parent = canvas.tree_mut().insert_child(root, Panel).unwrap();
        let child = canvas.tree_mut().insert_child(parent, Panel).unwrap();
        canvas.tree_mut().remove(child, true).unwrap();
        canvas.tree_mut().destroy(parent).unwrap();
        assert_eq!(canvas.tree().invalidator.pending_deletes(), 0);

        let stats = canvas.tick().unwrap();
        assert_eq!(stats.destroyed, 0);
        assert!(!canvas.tree().contains(child));
        assert_eq!(canvas.tree().len(), 1);
    }

    #[test]
    fn test_tab_order_depth_first() {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        let root = canvas.root();
        let tree = canvas.tree_mut();
        let a = tree.insert_child(root, Button::new("a")).unwrap();
        let group = tree.insert_child(root, Panel).unwrap();
        let b = tree.insert_child(group, Button::new("b")).unwrap();
        tree.insert_child(group, Label::new("not focusable")).unwrap();
        let c = tree.insert_child(root, Button::new("c")).unwrap();

        canvas.tick().unwrap();
        assert_eq!(canvas.tab_order(), &[a, b, c]);

        canvas.tree_mut().set_hidden(group, true).unwrap();
        assert!(canvas.tick().unwrap().tab_order_rebuilt);
        assert_eq!(canvas.tab_order(), &[a, c]);
    }

    #[test]
    fn test_layout_control_requires_canvas() {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        let orphan = canvas.tree_mut().insert(Panel);
        assert_eq!(
            canvas.layout_control(orphan),
            Err(LayoutError::NoCanvas { id: orphan })
        );

        let root = canvas.root();
        canvas.tree_mut().set_parent(orphan, Some(root)).unwrap();
        canvas.layout_control(orphan).unwrap();
        assert_eq!(
            canvas.tree().base(orphan).unwrap().bounds(),
            Rect::new(0.0, 0.0, 1.0, 1.0)
        );
    }

    #[test]
    fn test_virtual_control_relayout_is_local() {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        let root = canvas.root();
        let scroll = ScrollContainer::create(canvas.tree_mut(), Some(root)).unwrap();
        canvas.tree_mut().set_dock(scroll, Dock::Fill).unwrap();
        let item = canvas.tree_mut().insert_child(scroll, Panel).unwrap();
        canvas.tree_mut().set_dock(item, Dock::Top).unwrap();
        fixed(canvas.tree_mut(), item, None, Some(400.0));
        canvas.tick().unwrap();

        canvas
            .tree_mut()
            .update_control::<ScrollContainer, _>(scroll, |s| s.scroll_to(Point::new(0.0, 100.0)))
            .unwrap();
        assert!(!canvas.tree().base(root).unwrap().needs_layout());
        assert_eq!(canvas.tree().invalidator.pending_measures(), 1);

        let stats = canvas.tick().unwrap();
        assert!(!stats.full_layout);
        assert_eq!(stats.deferred_measures, 1);
        assert_eq!(canvas.tree().absolute_bounds(item).unwrap().top(), -100.0);
    }

    #[test]
    fn test_render_and_repaint_flag() {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        let root = canvas.root();
        let button = canvas.tree_mut().insert_child(root, Button::new("ok")).unwrap();
        canvas.tree_mut().set_dock(button, Dock::Fill).unwrap();
        canvas.tick().unwrap();
        assert!(canvas.needs_repaint());

        let mut skin = RecordingSkin::default();
        assert_eq!(canvas.render(&mut skin).unwrap(), 2);
        assert_eq!(skin.texts, vec!["ok".to_string()]);
        assert!(!canvas.needs_repaint());

        assert_eq!(canvas.hit_test(Point::new(50.0, 50.0)), Some(button));
        assert_eq!(canvas.hit_test(Point::new(150.0, 50.0)), None);
    }

    #[test]
    fn test_config_applies_defaults() {
        let config = LayoutConfig {
            default_minimum_size: Size::ZERO,
            ..LayoutConfig::default()
        };
        let mut canvas = Canvas::with_config(Size::new(50.0, 50.0), &config);
        let root = canvas.root();
        let empty = canvas.tree_mut().insert_child(root, Panel).unwrap();
        canvas.tick().unwrap();
        assert_eq!(canvas.tree().base(empty).unwrap().bounds().size, Size::ZERO);
        assert!(canvas.debug_tree().unwrap().contains("Panel"));
    }

    #[test]
    fn test_config_glyph_metrics_size_text() {
        let config = LayoutConfig {
            glyph_metrics: GlyphMetrics::new(20.0, 30.0),
            ..LayoutConfig::default()
        };
        let mut canvas = Canvas::with_config(Size::new(200.0, 100.0), &config);
        let root = canvas.root();
        let label = canvas.tree_mut().insert_child(root, Label::new("ab")).unwrap();
        let button = canvas.tree_mut().insert_child(root, Button::new("ok")).unwrap();

        let tree = canvas.tree_mut();
        assert_eq!(tree.measure(label, Size::INFINITE).unwrap(), Size::new(40.0, 30.0));
        assert_eq!(tree.measure(button, Size::INFINITE).unwrap(), Size::new(40.0, 30.0));
    }

    #[test]
    fn test_virtual_control_placement_change_reaches_parent() {
        let mut canvas = Canvas::new(Size::new(200.0, 100.0));
        let root = canvas.root();
        let scroll = ScrollContainer::create(canvas.tree_mut(), Some(root)).unwrap();
        canvas.tree_mut().set_dock(scroll, Dock::Left).unwrap();
        canvas.tree_mut().set_desired_size(scroll, Some(50.0), None).unwrap();
        let fill = canvas.tree_mut().insert_child(root, Panel).unwrap();
        canvas.tree_mut().set_dock(fill, Dock::Fill).unwrap();
        canvas.tick().unwrap();
        assert_eq!(canvas.tree().base(fill).unwrap().bounds(), Rect::new(50.0, 0.0, 150.0, 100.0));

        canvas.tree_mut().set_desired_size(scroll, Some(80.0), None).unwrap();
        assert!(canvas.tree().base(root).unwrap().needs_layout());
        assert!(canvas.tick().unwrap().full_layout);
        assert_eq!(canvas.tree().base(scroll).unwrap().bounds().width(), 80.0);
        assert_eq!(canvas.tree().base(fill).unwrap().bounds(), Rect::new(80.0, 0.0, 120.0, 100.0));

        canvas.tree_mut().set_collapsed(scroll, true).unwrap();
        assert!(canvas.tick().unwrap().full_layout);
        assert_eq!(canvas.tree().base(fill).unwrap().bounds(), Rect::new(0.0, 0.0, 200.0, 100.0));
    }
}
