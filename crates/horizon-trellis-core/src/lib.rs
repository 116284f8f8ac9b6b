//! Core types for Horizon Trellis.
//!
//! This crate provides the leaf-level building blocks shared by the layout
//! engine and its collaborators (skins, input routers, declarative builders):
//!
//! - **Geometry**: [`Point`], [`Size`], [`Rect`] and [`Thickness`] with
//!   saturating, clamping arithmetic
//! - **Identity**: [`ControlId`], a generational handle into a control tree
//! - **Errors**: [`LayoutError`] and the [`LayoutResult`] alias
//! - **Logging**: `tracing` targets, span names and [`PerfSpan`]
//!
//! # Example
//!
//! ```
//! use horizon_trellis_core::{Size, Thickness};
//!
//! let available = Size::new(100.0, 40.0);
//! let inner = available.shrink(Thickness::uniform(8.0));
//! assert_eq!(inner, Size::new(84.0, 24.0));
//!
//! // Clamping never panics; the minimum wins when bounds conflict.
//! let clamped = Size::new(10.0, 10.0).clamp(Size::new(20.0, 20.0), Size::new(40.0, 40.0));
//! assert_eq!(clamped, Size::new(20.0, 20.0));
//! ```

mod error;
pub mod geometry;
mod id;
pub mod logging;

pub use error::{LayoutError, LayoutResult};
pub use geometry::{Point, Rect, Size, Thickness, clamp_dimension};
pub use id::ControlId;
pub use logging::PerfSpan;
