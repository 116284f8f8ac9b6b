//! Horizon Trellis - a retained-mode control tree with measure/arrange layout.
//!
//! This crate provides the layout core of a GUI toolkit, independent of any
//! windowing or drawing backend:
//!
//! - **Control tree**: arena-allocated controls with logical and actual
//!   parents ([`ControlTree`])
//! - **Layout**: a two-pass measure/arrange protocol with docking, alignment,
//!   margin, padding and min/max clamping ([`layout`])
//! - **Invalidation**: dirty propagation with a virtual-control fast path and
//!   deferred measure and delete queues ([`invalidation`])
//! - **Hit testing**: top-most interactive control under a point
//! - **Canvas**: the root and its per-frame driver ([`Canvas`])
//! - **Rendering**: a traversal that hands geometry to a [`Skin`]
//!
//! # Example
//!
//! ```
//! use horizon_trellis::prelude::*;
//!
//! let mut canvas = Canvas::new(Size::new(200.0, 100.0));
//! let root = canvas.root();
//!
//! let tree = canvas.tree_mut();
//! let sidebar = tree.insert_child(root, Panel).unwrap();
//! tree.set_dock(sidebar, Dock::Left).unwrap();
//! tree.set_desired_bounds(sidebar, DesiredBounds { width: Some(50.0), ..Default::default() }).unwrap();
//! let content = tree.insert_child(root, Button::new("OK")).unwrap();
//! tree.set_dock(content, Dock::Fill).unwrap();
//!
//! canvas.tick().unwrap();
//! assert_eq!(canvas.tree().base(content).unwrap().bounds(), Rect::new(50.0, 0.0, 150.0, 100.0));
//! assert_eq!(canvas.hit_test(Point::new(120.0, 40.0)), Some(content));
//! ```

pub use horizon_trellis_core::{
    ControlId, LayoutError, LayoutResult, PerfSpan, Point, Rect, Size, Thickness, logging,
};

mod canvas;
pub mod config;
pub mod control;
pub mod debug;
pub mod invalidation;
pub mod layout;
pub mod prelude;
pub mod render;
mod tree;
pub mod widgets;

pub use canvas::{Canvas, FrameStats};
pub use config::{ConfigError, GlyphMetrics, LayoutConfig};
pub use control::{
    Anchor, Control, ControlBase, DesiredBounds, Dock, HorizontalAlignment, VerticalAlignment,
};
pub use debug::{ControlTreeDebug, TreeFormatOptions, TreeStyle};
pub use invalidation::LayoutInvalidator;
pub use layout::{
    AnchorLayout, ChildList, CrossSplitter, LayoutContext, Orientation, StackLayout,
    arrange_docked, measure_docked,
};
pub use render::{RenderContext, Skin};
pub use tree::ControlTree;
