// Rendering pipeline: normalize fields, resolve the theme, assemble one HTML document.
// Preview and export both go through `render_document`.

pub mod assembler;
pub mod handlers;
pub mod layouts;
pub mod normalize;
pub mod styles;

pub use assembler::{render_document, try_render_document, RenderError};
