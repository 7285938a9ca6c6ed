//! Contract between the platform host and the application layer.

use egui::Context;

/// An application the platform host drives once per frame.
///
/// The host owns the window, the event loop, and the frame ticker; the
/// application only builds UI. Everything the page needs per frame (input,
/// repaint requests, animation time) flows through the egui [`Context`].
pub trait UiApp {
    fn ui(&mut self, ctx: &Context);
}
