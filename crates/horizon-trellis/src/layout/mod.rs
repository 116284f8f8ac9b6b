//! The measure/arrange layout engine and its containers.
//!
//! Layout is a two-pass protocol driven from the canvas root:
//!
//! 1. [`ControlTree::measure`](crate::ControlTree::measure) offers space
//!    top-down and collects natural sizes bottom-up.
//! 2. [`ControlTree::arrange`](crate::ControlTree::arrange) assigns final
//!    rectangles top-down.
//!
//! Both wrappers apply margin, desired bounds, min/max clamps and alignment
//! before and after calling a control's own hooks, so containers only
//! implement their placement policy:
//!
//! - the default dock layout ([`measure_docked`], [`arrange_docked`])
//! - [`AnchorLayout`] for proportional repositioning
//! - [`StackLayout`] for sequential placement
//! - [`CrossSplitter`] for a fixed four-pane grid

mod anchor;
mod arrange;
mod context;
mod dock;
mod measure;
mod splitter;
mod stack;

pub use anchor::AnchorLayout;
pub use context::{ChildList, LayoutContext};
pub use dock::{arrange_docked, measure_docked};
pub use splitter::CrossSplitter;
pub use stack::{Orientation, StackLayout};
