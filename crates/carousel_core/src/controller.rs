//! The carousel controller: one scroll position, three competing inputs.
//!
//! The controller is the primary API of this crate. It owns the scroll
//! position of one carousel and arbitrates between the autonomous per-frame
//! increment, pointer-drag deltas, and out-of-band jumps, then hands the
//! winning value to the host viewport.

use crate::config::CarouselConfig;
use crate::mode::Mode;
use crate::viewport::ScrollViewport;

/// State machine for a single auto-scrolling carousel.
///
/// The host is responsible for:
/// - duplicating the item set once in the track, and feeding the width of
///   one copy via [`set_loop_length`](Self::set_loop_length)
/// - calling [`on_frame`](Self::on_frame) once per repaint
/// - routing hover, drag, and button events to the transition methods
///
/// Position is kept in `[0, loop_length)` at the end of every update;
/// wraparound is modular, never a clamp, so motion continuity is preserved
/// across the loop boundary.
///
/// # Example
///
/// ```
/// use carousel_core::{CarouselConfig, CarouselController, Mode, ScrollViewport};
///
/// struct Plain(f32);
/// impl ScrollViewport for Plain {
///     fn offset(&self) -> f32 { self.0 }
///     fn set_offset(&mut self, px: f32) { self.0 = px; }
/// }
///
/// let mut carousel = CarouselController::new(CarouselConfig {
///     speed: 1.0,
///     ..CarouselConfig::default()
/// });
/// carousel.set_loop_length(1000.0);
///
/// let mut viewport = Plain(0.0);
/// carousel.on_frame(&mut viewport);
/// assert_eq!(viewport.offset(), 1.0);
/// assert_eq!(carousel.mode(), Mode::Autoplay);
/// ```
#[derive(Clone, Debug)]
pub struct CarouselController {
    config: CarouselConfig,

    /// Current horizontal offset, in `[0, loop_length)`.
    position: f32,

    /// Width of one copy of the duplicated content. Zero means the track
    /// is absent or empty; the controller is inert in that case.
    loop_length: f32,

    mode: Mode,

    /// Pointer x captured at drag start. Meaningful only while dragging.
    drag_origin: f32,

    /// `position` captured at drag start. Meaningful only while dragging.
    drag_start_position: f32,

    /// The pointer is currently over the carousel.
    hovered: bool,

    /// The manual pause toggle, independent of hover.
    sticky_paused: bool,
}

impl CarouselController {
    /// Create an inert controller in autoplay mode.
    ///
    /// The controller stays inert (position pinned to zero) until the host
    /// measures the track and calls [`set_loop_length`](Self::set_loop_length).
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            position: 0.0,
            loop_length: 0.0,
            mode: Mode::Autoplay,
            drag_origin: 0.0,
            drag_start_position: 0.0,
            hovered: false,
            sticky_paused: false,
        }
    }

    /// The tuning constants this controller was created with.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Current scroll position, in `[0, loop_length)`.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Width of one copy of the duplicated content.
    pub fn loop_length(&self) -> f32 {
        self.loop_length
    }

    /// Who currently owns the position.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the manual pause toggle is engaged.
    pub fn sticky_paused(&self) -> bool {
        self.sticky_paused
    }

    /// Effective pause state: hover-paused OR sticky-paused.
    pub fn effectively_paused(&self) -> bool {
        self.hovered || self.sticky_paused
    }

    /// Feed the measured width of one content copy.
    ///
    /// The host re-measures every frame (layout may change with resizes);
    /// the position is re-wrapped so the invariant holds under shrinking
    /// loops. Non-positive lengths mark the track as absent and pin the
    /// position to zero.
    pub fn set_loop_length(&mut self, len: f32) {
        self.loop_length = if len.is_finite() { len.max(0.0) } else { 0.0 };
        self.position = self.wrap(self.position);
    }

    // =========================================================================
    // Per-frame update
    // =========================================================================

    /// Advance one frame and write the result to the viewport.
    ///
    /// If the mode is [`Mode::Autoplay`], the position advances by
    /// `config.speed` and wraps modularly at the loop length. In any other
    /// mode the increment is skipped, but the position is written to the
    /// viewport regardless, every frame, so manual positions stay in sync
    /// while autoplay is inactive.
    pub fn on_frame<V: ScrollViewport + ?Sized>(&mut self, viewport: &mut V) {
        self.advance_frame();
        viewport.set_offset(self.position);
    }

    /// The arithmetic half of [`on_frame`](Self::on_frame): advance without
    /// touching a viewport. Returns the new position.
    pub fn advance_frame(&mut self) -> f32 {
        if self.mode == Mode::Autoplay {
            self.position = self.wrap(self.position + self.config.speed);
        }
        self.position
    }

    // =========================================================================
    // Hover & sticky pause
    // =========================================================================

    /// The pointer entered the carousel. Suspends autoplay.
    ///
    /// A drag in progress is not interrupted; the hover flag still updates
    /// so the post-drag mode lands correctly.
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        if self.mode == Mode::Autoplay {
            self.mode = Mode::Paused;
        }
    }

    /// The pointer left the carousel. Resumes autoplay unless the manual
    /// pause toggle is engaged.
    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        if self.mode == Mode::Paused && !self.sticky_paused {
            self.mode = Mode::Autoplay;
        }
    }

    /// Flip the manual pause toggle. Returns the new toggle state.
    ///
    /// The toggle combines with hover: releasing it only resumes autoplay
    /// if the pointer is not currently over the carousel.
    pub fn toggle_sticky_pause(&mut self) -> bool {
        self.sticky_paused = !self.sticky_paused;
        if self.sticky_paused {
            if self.mode == Mode::Autoplay {
                self.mode = Mode::Paused;
            }
        } else if self.mode == Mode::Paused && !self.hovered {
            self.mode = Mode::Autoplay;
        }
        self.sticky_paused
    }

    // =========================================================================
    // Drag
    // =========================================================================

    /// A pointer drag started at `pointer_x`. Always wins over autoplay.
    pub fn begin_drag(&mut self, pointer_x: f32) {
        self.drag_origin = pointer_x;
        self.drag_start_position = self.position;
        self.mode = Mode::Dragging;
    }

    /// The pointer moved to `pointer_x` during a drag.
    ///
    /// Computes `delta = (pointer_x - drag_origin) * drag_gain` and moves
    /// the position to `drag_start_position - delta`, wrapped into range.
    /// Returns the new position; the host applies it to the viewport
    /// immediately rather than waiting for the next frame. Ignored when no
    /// drag is active.
    pub fn drag_to(&mut self, pointer_x: f32) -> f32 {
        if self.mode == Mode::Dragging {
            let delta = (pointer_x - self.drag_origin) * self.config.drag_gain;
            self.position = self.wrap(self.drag_start_position - delta);
        }
        self.position
    }

    /// The drag ended.
    ///
    /// The mode returns to [`Mode::Autoplay`] or [`Mode::Paused`] per the
    /// effective pause state, and the position resynchronizes from the
    /// viewport's true offset to absorb any host-side clamping that
    /// happened during the drag.
    pub fn end_drag<V: ScrollViewport + ?Sized>(&mut self, viewport: &V) {
        if self.mode != Mode::Dragging {
            return;
        }
        self.mode = if self.effectively_paused() {
            Mode::Paused
        } else {
            Mode::Autoplay
        };
        self.resync(viewport);
    }

    // =========================================================================
    // Out-of-band resynchronization
    // =========================================================================

    /// Adopt the viewport's true offset as the current position.
    ///
    /// Called after any position change the controller did not compute
    /// itself (a host smooth-scroll jump finishing, a drag ending), so the
    /// next autoplay increment resumes from where the content actually is
    /// instead of snapping backward.
    pub fn resync<V: ScrollViewport + ?Sized>(&mut self, viewport: &V) {
        self.position = self.wrap(viewport.offset());
    }

    fn wrap(&self, value: f32) -> f32 {
        if self.loop_length <= 0.0 {
            return 0.0;
        }
        let wrapped = value.rem_euclid(self.loop_length);
        // rem_euclid can round up to the modulus itself for tiny negative
        // inputs; keep the upper bound exclusive.
        if wrapped >= self.loop_length {
            0.0
        } else {
            wrapped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Viewport fake that clamps writes like a real scroll host.
    struct ClampedViewport {
        offset: f32,
        max: f32,
        writes: usize,
    }

    impl ClampedViewport {
        fn new(max: f32) -> Self {
            Self {
                offset: 0.0,
                max,
                writes: 0,
            }
        }
    }

    impl ScrollViewport for ClampedViewport {
        fn offset(&self) -> f32 {
            self.offset
        }

        fn set_offset(&mut self, px: f32) {
            self.offset = px.clamp(0.0, self.max);
            self.writes += 1;
        }
    }

    fn controller(speed: f32, loop_length: f32) -> CarouselController {
        let mut c = CarouselController::new(CarouselConfig {
            speed,
            ..CarouselConfig::default()
        });
        c.set_loop_length(loop_length);
        c
    }

    #[test]
    fn autoplay_position_matches_modular_formula() {
        // speed and loop chosen so every intermediate value is exactly
        // representable; the per-frame wrap must equal (k * speed) mod loop.
        let mut c = controller(7.0, 1000.0);
        for k in 1..=500u32 {
            c.advance_frame();
            assert_eq!(c.position(), (k as f32 * 7.0).rem_euclid(1000.0), "frame {k}");
        }
    }

    #[test]
    fn wrap_resets_without_stalling() {
        let mut c = controller(1.0, 1000.0);
        c.position = 998.0;

        assert_eq!(c.advance_frame(), 999.0);
        assert_eq!(c.advance_frame(), 0.0);
        assert_eq!(c.advance_frame(), 1.0);
    }

    #[test]
    fn overshooting_speed_wraps_modularly() {
        // The increment past the boundary is preserved, not discarded.
        let mut c = controller(3.0, 1000.0);
        c.position = 999.0;

        assert_eq!(c.advance_frame(), 2.0);
    }

    #[test]
    fn drag_applies_gain_against_start_position() {
        let mut c = controller(1.0, 1000.0);
        c.position = 50.0;

        c.begin_drag(100.0);
        // delta = (60 - 100) * 2 = -80; position = 50 - (-80) = 130
        assert_eq!(c.drag_to(60.0), 130.0);
    }

    #[test]
    fn drag_result_wraps_into_range() {
        let mut c = controller(1.0, 1000.0);
        c.position = 10.0;

        c.begin_drag(0.0);
        // delta = 100 * 2 = 200; raw position = 10 - 200 = -190 -> wraps
        assert_eq!(c.drag_to(100.0), 810.0);
        assert!(c.position() >= 0.0 && c.position() < c.loop_length());
    }

    #[test]
    fn begin_drag_wins_from_any_mode() {
        let setups: [fn(&mut CarouselController); 4] = [
            |_c| {},
            |c| c.pointer_enter(),
            |c| {
                c.toggle_sticky_pause();
            },
            |c| c.begin_drag(0.0),
        ];
        for setup in setups {
            let mut c = controller(1.0, 1000.0);
            setup(&mut c);
            c.begin_drag(42.0);
            assert_eq!(c.mode(), Mode::Dragging);
        }
    }

    #[test]
    fn end_drag_never_leaves_dragging_mode() {
        let vp = ClampedViewport::new(500.0);

        let mut c = controller(1.0, 1000.0);
        c.begin_drag(0.0);
        c.end_drag(&vp);
        assert_eq!(c.mode(), Mode::Autoplay);

        let mut c = controller(1.0, 1000.0);
        c.pointer_enter();
        c.begin_drag(0.0);
        c.end_drag(&vp);
        assert_eq!(c.mode(), Mode::Paused);

        let mut c = controller(1.0, 1000.0);
        c.toggle_sticky_pause();
        c.begin_drag(0.0);
        c.end_drag(&vp);
        assert_eq!(c.mode(), Mode::Paused);
    }

    #[test]
    fn end_drag_resyncs_from_clamped_viewport() {
        let mut c = controller(1.0, 1000.0);
        let mut vp = ClampedViewport::new(400.0);

        c.begin_drag(0.0);
        let requested = c.drag_to(-300.0); // 600 px with the default 2x gain
        vp.set_offset(requested);
        assert_eq!(vp.offset(), 400.0); // host clamped the write

        c.end_drag(&vp);
        assert_eq!(c.position(), 400.0);
    }

    #[test]
    fn hover_enter_pauses_and_leave_resumes() {
        let mut c = controller(1.0, 1000.0);

        c.pointer_enter();
        assert_eq!(c.mode(), Mode::Paused);

        c.pointer_leave();
        assert_eq!(c.mode(), Mode::Autoplay);
    }

    #[test]
    fn hover_leave_respects_sticky_pause() {
        let mut c = controller(1.0, 1000.0);

        c.toggle_sticky_pause();
        c.pointer_enter();
        c.pointer_leave();
        assert_eq!(c.mode(), Mode::Paused);

        // Releasing the toggle while not hovered resumes.
        c.toggle_sticky_pause();
        assert_eq!(c.mode(), Mode::Autoplay);
    }

    #[test]
    fn sticky_toggle_round_trip_restores_effective_pause() {
        let mut c = controller(1.0, 1000.0);
        let before = c.effectively_paused();

        c.toggle_sticky_pause();
        c.toggle_sticky_pause();

        assert_eq!(c.effectively_paused(), before);
        assert_eq!(c.mode(), Mode::Autoplay);
    }

    #[test]
    fn releasing_sticky_while_hovered_stays_paused() {
        let mut c = controller(1.0, 1000.0);

        c.pointer_enter();
        c.toggle_sticky_pause();
        c.toggle_sticky_pause();

        assert_eq!(c.mode(), Mode::Paused);
        assert!(c.effectively_paused());
    }

    #[test]
    fn paused_frames_still_write_the_offset() {
        let mut c = controller(1.0, 1000.0);
        c.position = 123.0;
        c.pointer_enter();

        let mut vp = ClampedViewport::new(1000.0);
        c.on_frame(&mut vp);
        c.on_frame(&mut vp);

        assert_eq!(vp.writes, 2);
        assert_eq!(vp.offset(), 123.0);
        assert_eq!(c.position(), 123.0);
    }

    #[test]
    fn frame_advances_then_writes_within_one_update() {
        let mut c = controller(5.0, 1000.0);
        let mut vp = ClampedViewport::new(1000.0);

        c.on_frame(&mut vp);

        // The increment lands in the same frame's viewport write.
        assert_eq!(vp.offset(), 5.0);
        assert_eq!(c.position(), 5.0);
    }

    #[test]
    fn zero_loop_length_is_inert() {
        let mut c = controller(1.0, 0.0);
        let mut vp = ClampedViewport::new(1000.0);

        c.on_frame(&mut vp);
        c.begin_drag(100.0);
        c.drag_to(50.0);

        assert_eq!(c.position(), 0.0);
        assert_eq!(vp.offset(), 0.0);
    }

    #[test]
    fn shrinking_loop_rewraps_position() {
        let mut c = controller(1.0, 1000.0);
        c.position = 900.0;

        c.set_loop_length(400.0);

        assert_eq!(c.position(), 100.0);
        assert!(c.position() < c.loop_length());
    }

    #[test]
    fn resync_adopts_viewport_truth() {
        let mut c = controller(1.0, 1000.0);
        c.position = 10.0;

        let mut vp = ClampedViewport::new(2000.0);
        vp.set_offset(1234.0);
        c.resync(&vp);

        assert_eq!(c.position(), 234.0);
    }

    #[test]
    fn drag_to_is_ignored_outside_drag_mode() {
        let mut c = controller(1.0, 1000.0);
        c.position = 50.0;

        assert_eq!(c.drag_to(500.0), 50.0);
        assert_eq!(c.mode(), Mode::Autoplay);
    }
}
