//! Ready-made controls.
//!
//! - [`Panel`]: generic dock container
//! - [`Label`] and [`Button`]: text leafs sized by glyph metrics
//! - [`ImageBox`]: leaf with a fixed intrinsic size
//! - [`ScrollContainer`]: virtual control that scrolls an inner panel

mod button;
mod image_box;
mod label;
mod panel;
mod scroll;

pub use button::Button;
pub use image_box::ImageBox;
pub use label::Label;
pub use panel::Panel;
pub use scroll::ScrollContainer;
