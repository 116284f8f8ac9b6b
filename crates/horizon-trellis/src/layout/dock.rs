//! The default dock layout used by generic containers.
//!
//! Children are handled in three ordered groups:
//!
//! 1. Edge-docked children (`Left`, `Top`, `Right`, `Bottom`) carve space
//!    from the remaining rectangle in child order.
//! 2. `Fill` children share the interior the edge docks left.
//! 3. Undocked children sit at their explicit left/top and can overlap the
//!    docked ones without affecting them.

use horizon_trellis_core::{LayoutResult, Rect, Size};

use super::LayoutContext;
use crate::control::Dock;

/// Natural size of a dock container for `available` space.
pub fn measure_docked(cx: &mut LayoutContext<'_>, available: Size) -> LayoutResult<Size> {
    let padding = cx.padding();
    let inner = available.shrink(padding);
    let children = cx.children();

    let mut consumed = Size::ZERO;
    let mut natural = Size::ZERO;
    let remaining = |consumed: Size| {
        Size::new(
            (inner.width - consumed.width).max(0.0),
            (inner.height - consumed.height).max(0.0),
        )
    };

    for &child in &children {
        let dock = cx.child(child)?.dock;
        if !dock.is_edge() {
            continue;
        }
        let size = cx.measure_child(child, remaining(consumed))?;
        natural = natural.max(Size::new(
            consumed.width + size.width,
            consumed.height + size.height,
        ));
        if dock.is_horizontal() {
            consumed.width += size.width;
        } else {
            consumed.height += size.height;
        }
    }

    for &child in &children {
        if cx.child(child)?.dock != Dock::Fill {
            continue;
        }
        let size = cx.measure_child(child, remaining(consumed))?;
        natural = natural.max(Size::new(
            consumed.width + size.width,
            consumed.height + size.height,
        ));
    }

    for &child in &children {
        let base = cx.child(child)?;
        if base.dock != Dock::None {
            continue;
        }
        let position = base.desired.position();
        let size = cx.measure_child(child, inner)?;
        natural = natural.max(Size::new(
            position.x + size.width,
            position.y + size.height,
        ));
    }

    Ok(natural.grow(padding))
}

/// Place the children of a dock container inside `final_size`.
///
/// Records the rectangle left for `Fill` children as the inner bounds.
pub fn arrange_docked(cx: &mut LayoutContext<'_>, final_size: Size) -> LayoutResult<Size> {
    let padding = cx.padding();
    let children = cx.children();

    let mut left = padding.left;
    let mut top = padding.top;
    let mut right = (final_size.width - padding.right).max(left);
    let mut bottom = (final_size.height - padding.bottom).max(top);

    for &child in &children {
        let base = cx.child(child)?;
        let dock = base.dock;
        let measured = base.measured_size;
        let width = (right - left).max(0.0);
        let height = (bottom - top).max(0.0);

        match dock {
            Dock::Left => {
                let w = measured.width.min(width);
                cx.arrange_child(child, Rect::new(left, top, w, height))?;
                left += w;
            }
            Dock::Right => {
                let w = measured.width.min(width);
                cx.arrange_child(child, Rect::new(right - w, top, w, height))?;
                right -= w;
            }
            Dock::Top => {
                let h = measured.height.min(height);
                cx.arrange_child(child, Rect::new(left, top, width, h))?;
                top += h;
            }
            Dock::Bottom => {
                let h = measured.height.min(height);
                cx.arrange_child(child, Rect::new(left, bottom - h, width, h))?;
                bottom -= h;
            }
            Dock::Fill | Dock::None => {}
        }
    }

    let interior = Rect::new(left, top, (right - left).max(0.0), (bottom - top).max(0.0));
    cx.set_inner_bounds(interior)?;

    for &child in &children {
        let base = cx.child(child)?;
        match base.dock {
            Dock::Fill => cx.arrange_child(child, interior)?,
            Dock::None => {
                let position = base.desired.position();
                let size = base.measured_size;
                cx.arrange_child(
                    child,
                    Rect::new(
                        padding.left + position.x,
                        padding.top + position.y,
                        size.width,
                        size.height,
                    ),
                )?;
            }
            _ => {}
        }
    }

    Ok(final_size)
}
