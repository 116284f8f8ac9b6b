use horizon_trellis_core::{LayoutResult, Size};

use crate::config::GlyphMetrics;
use crate::control::Control;
use crate::layout::LayoutContext;
use crate::render::{RenderContext, Skin};

/// A clickable text button.
///
/// Sized like a [`Label`](super::Label); claims pointer hits and takes part
/// in tab order.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    label: String,
    metrics: Option<GlyphMetrics>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            metrics: None,
        }
    }

    pub fn with_metrics(label: impl Into<String>, metrics: GlyphMetrics) -> Self {
        Self {
            label: label.into(),
            metrics: Some(metrics),
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }
}

impl Control for Button {
    fn measure(&mut self, cx: &mut LayoutContext<'_>, _available: Size) -> LayoutResult<Size> {
        let metrics = self.metrics.unwrap_or_else(|| cx.glyph_metrics());
        Ok(metrics.measure(&self.label).grow(cx.padding()))
    }

    fn render(&self, skin: &mut dyn Skin, cx: &RenderContext<'_>) {
        skin.draw(cx);
        skin.draw_text(cx, &self.label);
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn is_tab_stop(&self) -> bool {
        true
    }
}
