//! Tuning constants for a carousel instance.

/// Per-carousel tuning constants.
///
/// All values are in pixels (or pixels per frame for `speed`). Frames are
/// whatever the host's repaint scheduler delivers; the controller does not
/// convert to wall-clock time.
#[derive(Clone, Copy, Debug)]
pub struct CarouselConfig {
    /// Autoplay advance per frame, in px.
    pub speed: f32,
    /// Multiplier applied to pointer drag deltas. Values above 1.0 make the
    /// strip move faster than the pointer.
    pub drag_gain: f32,
    /// Magnitude of a prev/next button jump, in px.
    pub jump_step: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            speed: 0.5,
            drag_gain: 2.0,
            jump_step: 300.0,
        }
    }
}
