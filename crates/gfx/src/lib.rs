//! egui widgets and render plumbing for the showcase shell.
//!
//! `carousel` is the interactive centerpiece; `renderer` owns the
//! egui/wgpu surface plumbing the platform host drives.

pub mod carousel;
pub mod renderer;

pub use carousel::Carousel;
pub use renderer::Renderer;
