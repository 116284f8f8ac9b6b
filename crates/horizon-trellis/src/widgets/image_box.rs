use horizon_trellis_core::{LayoutResult, Size};

use crate::control::Control;
use crate::layout::LayoutContext;
use crate::render::{RenderContext, Skin};

/// Displays an image of a fixed intrinsic size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageBox {
    image_size: Size,
}

impl ImageBox {
    pub fn new(image_size: Size) -> Self {
        Self {
            image_size: image_size.non_negative(),
        }
    }

    #[inline]
    pub fn image_size(&self) -> Size {
        self.image_size
    }

    pub fn set_image_size(&mut self, size: Size) {
        self.image_size = size.non_negative();
    }
}

impl Control for ImageBox {
    fn measure(&mut self, cx: &mut LayoutContext<'_>, _available: Size) -> LayoutResult<Size> {
        Ok(self.image_size.grow(cx.padding()))
    }

    fn render(&self, skin: &mut dyn Skin, cx: &RenderContext<'_>) {
        skin.draw(cx);
        skin.draw_image(cx, self.image_size);
    }
}
