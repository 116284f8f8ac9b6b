//! Property tests for layout, invalidation and hit-test invariants.

use horizon_trellis::prelude::*;
use proptest::prelude::*;

fn dock_strategy() -> impl Strategy<Value = Dock> {
    prop_oneof![
        Just(Dock::None),
        Just(Dock::Left),
        Just(Dock::Top),
        Just(Dock::Right),
        Just(Dock::Bottom),
        Just(Dock::Fill),
    ]
}

/// Whole-number dimensions keep float arithmetic exact.
fn dimension(max: u16) -> impl Strategy<Value = f32> {
    (0..=max).prop_map(f32::from)
}

fn desired(width: Option<f32>, height: Option<f32>) -> DesiredBounds {
    DesiredBounds {
        width,
        height,
        ..DesiredBounds::UNSPECIFIED
    }
}

fn chain(canvas: &mut Canvas, depth: usize) -> Vec<ControlId> {
    let mut ids = vec![canvas.root()];
    for _ in 0..depth {
        let parent = *ids.last().unwrap();
        let child = canvas.tree_mut().insert_child(parent, Panel).unwrap();
        canvas.tree_mut().set_dock(child, Dock::Fill).unwrap();
        ids.push(child);
    }
    ids
}

proptest! {
    #[test]
    fn bounds_within_min_and_max(
        min_w in dimension(50),
        min_h in dimension(50),
        extra_w in dimension(50),
        extra_h in dimension(50),
        slot_w in dimension(200),
        slot_h in dimension(200),
    ) {
        let mut tree = ControlTree::new();
        let id = tree.insert(Panel);
        tree.set_minimum_size(id, Size::new(min_w, min_h)).unwrap();
        tree.set_maximum_size(id, Size::new(min_w + extra_w, min_h + extra_h)).unwrap();

        let slot = Rect::new(0.0, 0.0, slot_w, slot_h);
        tree.measure(id, slot.size).unwrap();
        tree.arrange(id, slot).unwrap();

        let size = tree.base(id).unwrap().bounds().size;
        prop_assert!(size.width >= min_w && size.width <= min_w + extra_w);
        prop_assert!(size.height >= min_h && size.height <= min_h + extra_h);
    }

    #[test]
    fn measured_within_offered_space(
        image_w in dimension(500),
        image_h in dimension(500),
        available_w in dimension(300),
        available_h in dimension(300),
        margin in dimension(20),
        min in dimension(30),
        extra in dimension(100),
    ) {
        let mut tree = ControlTree::new();
        let id = tree.insert(ImageBox::new(Size::new(image_w, image_h)));
        let margin = Thickness::uniform(margin);
        tree.set_margin(id, margin).unwrap();
        let minimum = Size::new(min, min);
        let maximum = Size::new(min + extra, min + extra);
        tree.set_minimum_size(id, minimum).unwrap();
        tree.set_maximum_size(id, maximum).unwrap();

        let available = Size::new(available_w, available_h);
        let measured = tree.measure(id, available).unwrap().shrink(margin);
        let offered = available.shrink(margin).clamp(minimum, maximum);
        prop_assert!(measured.width <= offered.width);
        prop_assert!(measured.height <= offered.height);
    }

    #[test]
    fn arrange_is_idempotent(
        children in prop::collection::vec(
            (dock_strategy(), dimension(80), dimension(80), dimension(40), dimension(40)),
            1..8,
        ),
        width in dimension(300),
        height in dimension(300),
    ) {
        let mut tree = ControlTree::new();
        let root = tree.insert(Panel);
        let mut ids = Vec::new();
        for (dock, w, h, left, top) in children {
            let id = tree.insert_child(root, Panel).unwrap();
            tree.set_dock(id, dock).unwrap();
            tree.set_desired_bounds(id, DesiredBounds {
                left: Some(left),
                top: Some(top),
                width: Some(w),
                height: Some(h),
            }).unwrap();
            ids.push(id);
        }

        let slot = Rect::new(0.0, 0.0, width, height);
        tree.measure(root, slot.size).unwrap();
        tree.arrange(root, slot).unwrap();
        let first: Vec<Rect> = ids.iter().map(|&id| tree.base(id).unwrap().bounds()).collect();

        tree.measure(root, slot.size).unwrap();
        tree.arrange(root, slot).unwrap();
        let second: Vec<Rect> = ids.iter().map(|&id| tree.base(id).unwrap().bounds()).collect();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn fill_never_overlaps_edges(
        total_w in 10u16..=400,
        total_h in 10u16..=200,
        padding in dimension(5),
        shares in prop::array::uniform4(0.0f32..=1.0),
    ) {
        let (width, height) = (f32::from(total_w), f32::from(total_h));
        let usable = Size::new(width - 2.0 * padding, height - 2.0 * padding);
        let left_w = (usable.width * shares[0] / 2.0).floor();
        let right_w = (usable.width * shares[1] / 2.0).floor();
        let top_h = (usable.height * shares[2] / 2.0).floor();
        let bottom_h = (usable.height * shares[3] / 2.0).floor();

        let mut tree = ControlTree::with_size_limits(Size::ZERO, Size::INFINITE);
        let root = tree.insert(Panel);
        tree.set_padding(root, Thickness::uniform(padding)).unwrap();
        let mut edge = |dock: Dock, size: DesiredBounds| {
            let id = tree.insert_child(root, Panel).unwrap();
            tree.set_dock(id, dock).unwrap();
            tree.set_desired_bounds(id, size).unwrap();
            id
        };
        let left = edge(Dock::Left, desired(Some(left_w), None));
        let top = edge(Dock::Top, desired(None, Some(top_h)));
        let right = edge(Dock::Right, desired(Some(right_w), None));
        let bottom = edge(Dock::Bottom, desired(None, Some(bottom_h)));
        let fill = edge(Dock::Fill, DesiredBounds::UNSPECIFIED);

        let slot = Rect::new(0.0, 0.0, width, height);
        tree.measure(root, slot.size).unwrap();
        tree.arrange(root, slot).unwrap();

        let rect = |id| tree.base(id).unwrap().bounds();
        let f = rect(fill);
        for docked in [left, top, right, bottom] {
            let d = rect(docked);
            let disjoint = f.right() <= d.left()
                || d.right() <= f.left()
                || f.bottom() <= d.top()
                || d.bottom() <= f.top();
            prop_assert!(disjoint, "fill {:?} overlaps {:?}", f, d);
        }
        prop_assert_eq!(rect(left).width() + f.width() + rect(right).width(), usable.width);
    }

    #[test]
    fn later_visible_sibling_wins_hit(
        hidden in prop::collection::vec(any::<bool>(), 1..6),
        x in 0.0f32..100.0,
        y in 0.0f32..100.0,
    ) {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        let root = canvas.root();
        let mut ids = Vec::new();
        for _ in &hidden {
            let id = canvas.tree_mut().insert_child(root, Button::new("b")).unwrap();
            canvas.tree_mut().set_dock(id, Dock::Fill).unwrap();
            ids.push(id);
        }
        canvas.tick().unwrap();
        for (&id, &hide) in ids.iter().zip(&hidden) {
            canvas.tree_mut().set_hidden(id, hide).unwrap();
        }

        let expected = ids
            .iter()
            .zip(&hidden)
            .rev()
            .find(|(_, hide)| !**hide)
            .map(|(&id, _)| id);
        prop_assert_eq!(canvas.hit_test(Point::new(x, y)), expected);
    }

    #[test]
    fn dirty_leaf_reaches_canvas(depth in 1usize..=50) {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        let ids = chain(&mut canvas, depth);
        canvas.tick().unwrap();
        prop_assert!(ids.iter().all(|&id| !canvas.tree().base(id).unwrap().needs_layout()));

        let leaf = *ids.last().unwrap();
        canvas.tree_mut().set_margin(leaf, Thickness::uniform(1.0)).unwrap();
        prop_assert!(ids.iter().all(|&id| canvas.tree().base(id).unwrap().needs_layout()));
        prop_assert!(canvas.tick().unwrap().full_layout);
    }

    #[test]
    fn virtual_control_isolates_and_queues_once(
        depth in 0usize..10,
        updates in 1usize..5,
    ) {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0));
        let ids = chain(&mut canvas, depth);
        let parent = *ids.last().unwrap();
        let scroll = ScrollContainer::create(canvas.tree_mut(), Some(parent)).unwrap();
        canvas.tree_mut().set_dock(scroll, Dock::Fill).unwrap();
        canvas.tick().unwrap();

        for step in 0..updates {
            canvas
                .tree_mut()
                .update_control::<ScrollContainer, _>(scroll, |s| s.scroll_by(0.0, step as f32))
                .unwrap();
        }
        prop_assert!(!canvas.tree().base(parent).unwrap().needs_layout());
        prop_assert!(!canvas.tree().base(canvas.root()).unwrap().needs_layout());

        let stats = canvas.tick().unwrap();
        prop_assert!(!stats.full_layout);
        prop_assert_eq!(stats.deferred_measures, 1);
    }
}
