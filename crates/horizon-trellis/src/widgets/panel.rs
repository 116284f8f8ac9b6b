use crate::control::Control;

/// A plain container using the default dock layout.
///
/// Canvases use a `Panel` as their root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Panel;

impl Control for Panel {}
