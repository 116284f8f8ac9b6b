//! Controls: per-node state, placement modes and the behaviour trait.

mod base;
mod placement;
mod traits;

pub use base::ControlBase;
pub use placement::{Anchor, DesiredBounds, Dock, HorizontalAlignment, VerticalAlignment};
pub use traits::Control;
