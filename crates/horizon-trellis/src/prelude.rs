//! Prelude module for Horizon Trellis.
//!
//! ```ignore
//! use horizon_trellis::prelude::*;
//! ```
//!
//! This provides access to:
//! - The canvas and control tree (`Canvas`, `ControlTree`, `Control`)
//! - Placement types (`Dock`, alignments, `Anchor`, `DesiredBounds`)
//! - Containers and leaf controls
//! - Geometry types (`Point`, `Size`, `Rect`, `Thickness`)

// ============================================================================
// Tree and Canvas
// ============================================================================

pub use crate::canvas::{Canvas, FrameStats};
pub use crate::control::{Control, ControlBase};
pub use crate::tree::ControlTree;
pub use horizon_trellis_core::{ControlId, LayoutError, LayoutResult};

// ============================================================================
// Placement
// ============================================================================

pub use crate::control::{Anchor, DesiredBounds, Dock, HorizontalAlignment, VerticalAlignment};

// ============================================================================
// Layout and Controls
// ============================================================================

pub use crate::layout::{AnchorLayout, CrossSplitter, LayoutContext, Orientation, StackLayout};
pub use crate::widgets::{Button, ImageBox, Label, Panel, ScrollContainer};

// ============================================================================
// Rendering
// ============================================================================

pub use crate::render::{RenderContext, Skin};

// ============================================================================
// Geometry
// ============================================================================

pub use horizon_trellis_core::{Point, Rect, Size, Thickness};
