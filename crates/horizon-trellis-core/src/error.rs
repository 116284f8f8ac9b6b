//! Error types for Horizon Trellis.
//!
//! Every variant of [`LayoutError`] is a programmer-contract violation. The
//! layout engine never returns an error for conditions it can clamp (negative
//! space, space below the minimum size, alignment overflow); those are
//! normalised silently so a frame always produces drawable geometry.

use thiserror::Error;

use crate::id::ControlId;

/// Fatal errors raised by tree and layout operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The control handle is not (or no longer) part of the tree.
    #[error("invalid or destroyed control {id:?}")]
    InvalidControl {
        /// The offending handle.
        id: ControlId,
    },

    /// A measure implementation produced an infinite or NaN size.
    #[error("control {id:?} measured an infinite size ({width} x {height})")]
    InfiniteMeasure {
        /// The control whose measure hook misbehaved.
        id: ControlId,
        /// Width returned by the hook.
        width: f32,
        /// Height returned by the hook.
        height: f32,
    },

    /// A control was finalized twice.
    #[error("control {id:?} has already been destroyed")]
    AlreadyDestroyed {
        /// The handle that was destroyed earlier.
        id: ControlId,
    },

    /// A fixed-capacity container received one child too many.
    #[error("container {id:?} is full (capacity {capacity})")]
    ContainerFull {
        /// The container.
        id: ControlId,
        /// How many children it accepts.
        capacity: usize,
    },

    /// A layout pass was requested for a control with no reachable canvas.
    #[error("control {id:?} is not attached to a canvas")]
    NoCanvas {
        /// The unattached control.
        id: ControlId,
    },

    /// Re-parenting would make a control its own ancestor.
    #[error("cannot make {parent:?} the parent of its ancestor {id:?}")]
    CircularParentage {
        /// The control being re-parented.
        id: ControlId,
        /// The requested parent.
        parent: ControlId,
    },

    /// An inner panel must be a descendant of its container.
    #[error("{panel:?} is not inside container {container:?}")]
    InnerPanelOutsideContainer {
        /// The redirecting container.
        container: ControlId,
        /// The rejected panel.
        panel: ControlId,
    },

    /// Typed access to a control with the wrong concrete type.
    #[error("control {id:?} is not a {expected}")]
    TypeMismatch {
        /// The control.
        id: ControlId,
        /// Name of the requested type.
        expected: &'static str,
    },
}

/// Result type for tree and layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
