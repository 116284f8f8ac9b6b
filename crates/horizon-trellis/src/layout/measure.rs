//! The measure wrapper shared by every control.

use horizon_trellis_core::{ControlId, LayoutError, LayoutResult, Size, logging::targets};

use super::LayoutContext;
use crate::tree::ControlTree;

impl ControlTree {
    /// Measure a control against `available` space, margin included.
    ///
    /// The space offered to the control's own [`measure`](crate::Control::measure)
    /// is `available` minus margin, capped by an explicit desired width or
    /// height and clamped into the min/max range. The returned size is then
    /// overridden by explicit desired dimensions, clamped again and capped at
    /// the offered space. The minimum size wins over the available space.
    ///
    /// The result, margin added back, is cached as the measured size.
    /// Collapsed controls measure as zero.
    pub fn measure(&mut self, id: ControlId, available: Size) -> LayoutResult<Size> {
        let base = self.base(id)?;
        if !base.participates_in_layout() {
            self.base_mut(id)?.measured_size = Size::ZERO;
            return Ok(Size::ZERO);
        }

        let margin = base.margin;
        let desired = base.desired;
        let (minimum, maximum) = (base.minimum_size, base.maximum_size);

        let offered = desired
            .cap(available.non_negative().shrink(margin))
            .clamp(minimum, maximum);

        let natural = self.with_control(id, |control, tree| {
            let mut cx = LayoutContext::new(tree, id);
            control.measure(&mut cx, offered)
        })??;

        if !natural.is_finite() {
            tracing::error!(target: targets::LAYOUT, ?id, width = natural.width, height = natural.height, "measure produced an infinite size");
            return Err(LayoutError::InfiniteMeasure {
                id,
                width: natural.width,
                height: natural.height,
            });
        }

        let size = desired
            .override_size(natural.non_negative())
            .clamp(minimum, maximum)
            .min(offered);
        let measured = size.grow(margin);

        self.base_mut(id)?.measured_size = measured;
        tracing::trace!(target: targets::LAYOUT, ?id, ?available, ?measured, "measured");
        Ok(measured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Control, DesiredBounds};
    use crate::widgets::Panel;
    use horizon_trellis_core::Thickness;

    struct Greedy;

    impl Control for Greedy {
        fn measure(&mut self, _cx: &mut LayoutContext<'_>, available: Size) -> LayoutResult<Size> {
            Ok(available)
        }
    }

    struct Fixed(Size);

    impl Control for Fixed {
        fn measure(&mut self, _cx: &mut LayoutContext<'_>, _available: Size) -> LayoutResult<Size> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_minimum_wins_over_available() {
        let mut tree = ControlTree::new();
        let id = tree.insert(Panel);
        tree.set_minimum_size(id, Size::new(20.0, 20.0)).unwrap();
        tree.set_maximum_size(id, Size::new(40.0, 40.0)).unwrap();

        let measured = tree.measure(id, Size::new(10.0, 10.0)).unwrap();
        assert_eq!(measured, Size::new(20.0, 20.0));
    }

    #[test]
    fn test_margin_subtracted_and_added_back() {
        let mut tree = ControlTree::new();
        let id = tree.insert(Fixed(Size::new(30.0, 10.0)));
        tree.set_margin(id, Thickness::uniform(5.0)).unwrap();

        let measured = tree.measure(id, Size::new(100.0, 100.0)).unwrap();
        assert_eq!(measured, Size::new(40.0, 20.0));
    }

    #[test]
    fn test_result_capped_at_offered_space() {
        let mut tree = ControlTree::new();
        let id = tree.insert(Fixed(Size::new(500.0, 500.0)));

        let measured = tree.measure(id, Size::new(100.0, 50.0)).unwrap();
        assert_eq!(measured, Size::new(100.0, 50.0));
    }

    #[test]
    fn test_desired_is_upper_bound_then_override() {
        let mut tree = ControlTree::new();
        let id = tree.insert(Greedy);
        tree.set_desired_bounds(
            id,
            DesiredBounds {
                width: Some(30.0),
                ..DesiredBounds::UNSPECIFIED
            },
        )
        .unwrap();

        let measured = tree.measure(id, Size::new(100.0, 60.0)).unwrap();
        assert_eq!(measured, Size::new(30.0, 60.0));
    }

    #[test]
    fn test_infinite_measure_is_error() {
        let mut tree = ControlTree::new();
        let id = tree.insert(Greedy);

        let err = tree.measure(id, Size::INFINITE).unwrap_err();
        assert!(matches!(err, LayoutError::InfiniteMeasure { id: failed, .. } if failed == id));
        // The behaviour survives the failed hook.
        assert!(tree.control::<Greedy>(id).is_ok());
    }

    #[test]
    fn test_collapsed_measures_zero() {
        let mut tree = ControlTree::new();
        let id = tree.insert(Fixed(Size::new(30.0, 30.0)));
        tree.set_collapsed(id, true).unwrap();

        assert_eq!(tree.measure(id, Size::new(100.0, 100.0)).unwrap(), Size::ZERO);
        assert_eq!(tree.base(id).unwrap().measured_size(), Size::ZERO);
    }

    #[test]
    fn test_negative_available_is_clamped() {
        let mut tree = ControlTree::new();
        let id = tree.insert(Panel);

        let measured = tree.measure(id, Size::new(-50.0, -50.0)).unwrap();
        assert_eq!(measured, ControlTree::DEFAULT_MINIMUM_SIZE);
    }
}
