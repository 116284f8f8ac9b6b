use horizon_trellis_core::{LayoutResult, Size};

use crate::config::GlyphMetrics;
use crate::control::Control;
use crate::layout::LayoutContext;
use crate::render::{RenderContext, Skin};

/// A run of static text.
///
/// Measures to the size of its text under fixed-pitch [`GlyphMetrics`] plus
/// padding. Without metrics of its own a label uses the tree's. Labels
/// ignore the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    metrics: Option<GlyphMetrics>,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metrics: None,
        }
    }

    pub fn with_metrics(text: impl Into<String>, metrics: GlyphMetrics) -> Self {
        Self {
            text: text.into(),
            metrics: Some(metrics),
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[inline]
    pub fn metrics(&self) -> Option<GlyphMetrics> {
        self.metrics
    }
}

impl Control for Label {
    fn measure(&mut self, cx: &mut LayoutContext<'_>, _available: Size) -> LayoutResult<Size> {
        let metrics = self.metrics.unwrap_or_else(|| cx.glyph_metrics());
        Ok(metrics.measure(&self.text).grow(cx.padding()))
    }

    fn render(&self, skin: &mut dyn Skin, cx: &RenderContext<'_>) {
        skin.draw(cx);
        skin.draw_text(cx, &self.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ControlTree;
    use horizon_trellis_core::Thickness;

    #[test]
    fn test_label_intrinsic_size() {
        let mut tree = ControlTree::new();
        let label = tree.insert(Label::with_metrics("hello", GlyphMetrics::new(6.0, 12.0)));
        tree.set_padding(label, Thickness::symmetric(4.0, 2.0)).unwrap();

        let measured = tree.measure(label, Size::new(500.0, 500.0)).unwrap();
        assert_eq!(measured, Size::new(38.0, 16.0));
    }

    #[test]
    fn test_label_truncated_by_available() {
        let mut tree = ControlTree::new();
        let label = tree.insert(Label::with_metrics("a long label", GlyphMetrics::new(10.0, 10.0)));

        let measured = tree.measure(label, Size::new(50.0, 50.0)).unwrap();
        assert_eq!(measured, Size::new(50.0, 10.0));
    }

    #[test]
    fn test_set_text_remeasures() {
        let mut tree = ControlTree::new();
        let label = tree.insert(Label::with_metrics("ab", GlyphMetrics::new(5.0, 10.0)));
        tree.update_control::<Label, _>(label, |l| l.set_text("abcd"))
            .unwrap();

        let measured = tree.measure(label, Size::INFINITE).unwrap();
        assert_eq!(measured.width, 20.0);
        assert!(tree.base(label).unwrap().needs_layout());
    }

    #[test]
    fn test_label_uses_tree_metrics() {
        let mut tree = ControlTree::new();
        let shared = tree.insert(Label::new("ab"));
        let own = tree.insert(Label::with_metrics("ab", GlyphMetrics::new(5.0, 10.0)));
        tree.set_glyph_metrics(GlyphMetrics::new(20.0, 30.0)).unwrap();

        assert!(tree.base(shared).unwrap().needs_layout());
        assert_eq!(tree.measure(shared, Size::INFINITE).unwrap(), Size::new(40.0, 30.0));
        assert_eq!(tree.measure(own, Size::INFINITE).unwrap(), Size::new(10.0, 10.0));
    }
}
