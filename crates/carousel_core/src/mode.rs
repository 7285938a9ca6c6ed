//! Carousel input-arbitration mode.

/// What currently owns the carousel's scroll position.
///
/// Transitions are externally triggered (pointer, hover, and button events
/// routed by the host); the only implicit default is [`Mode::Autoplay`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// The per-frame autoplay increment advances the position.
    #[default]
    Autoplay,
    /// Hover or the sticky pause toggle suspended autoplay; the position
    /// is still written to the viewport every frame.
    Paused,
    /// An active pointer drag owns the position. Drag always wins over
    /// autoplay while engaged.
    Dragging,
}
