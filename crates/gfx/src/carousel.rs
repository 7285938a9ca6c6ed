//! The auto-scroll carousel widget.
//!
//! Renders a horizontally scrolling strip whose item set is laid out twice,
//! so the wrap at `loop_length` lands on pixel-identical content. The
//! widget routes hover/drag/button input to the [`CarouselController`] and
//! drives its per-frame update; all policy lives in `carousel_core`, this
//! module only adapts it to egui.

use carousel_core::{CarouselConfig, CarouselController, ScrollViewport};
use egui::scroll_area::{ScrollBarVisibility, State as ScrollState};
use egui::{Align, Id, Layout, ScrollArea, Sense, Ui};

/// How long a prev/next jump animates before the controller resyncs.
const JUMP_SECONDS: f32 = 0.35;

/// Adapter over the egui scroll-area state.
///
/// Writes are clamped to the valid scroll range, as a real scroll host
/// would clamp them; reads return the clamped truth.
struct ScrollStateViewport<'a> {
    state: &'a mut ScrollState,
    max_scroll: f32,
}

impl ScrollViewport for ScrollStateViewport<'_> {
    fn offset(&self) -> f32 {
        self.state.offset.x.clamp(0.0, self.max_scroll)
    }

    fn set_offset(&mut self, px: f32) {
        self.state.offset.x = px.clamp(0.0, self.max_scroll);
    }
}

/// In-flight prev/next smooth jump.
///
/// While a jump is animating it owns the viewport; the controller adopts
/// the landing offset when the animation completes.
#[derive(Clone, Copy, Debug)]
struct JumpAnim {
    from: f32,
    target: f32,
    /// Normalized progress in `[0, 1]`.
    t: f32,
}

impl JumpAnim {
    fn offset_at(&self) -> f32 {
        let t = self.t.clamp(0.0, 1.0);
        let eased = t * t * (3.0 - 2.0 * t);
        self.from + (self.target - self.from) * eased
    }
}

/// A persistent auto-scroll carousel.
///
/// Owned by the page for as long as the carousel exists; create once and
/// call [`ui`](Self::ui) every frame.
pub struct Carousel {
    id_salt: String,
    pub controller: CarouselController,
    show_controls: bool,
    jump: Option<JumpAnim>,
    was_hovered: bool,
}

impl Carousel {
    pub fn new(id_salt: impl Into<String>, config: CarouselConfig) -> Self {
        Self {
            id_salt: id_salt.into(),
            controller: CarouselController::new(config),
            show_controls: false,
            jump: None,
            was_hovered: false,
        }
    }

    /// Show the prev/pause/next control row above the strip.
    pub fn with_controls(mut self) -> Self {
        self.show_controls = true;
        self
    }

    /// Render the carousel and advance its state by one frame.
    ///
    /// `add_item` is invoked once per item per copy (`2 * item_count`
    /// calls). An empty item set renders nothing and mutates nothing:
    /// the feature is simply not present on this page.
    pub fn ui(&mut self, ui: &mut Ui, item_count: usize, mut add_item: impl FnMut(&mut Ui, usize)) {
        if item_count == 0 {
            return;
        }

        let mut jump_dir: f32 = 0.0;
        let mut toggle_pause = false;
        if self.show_controls {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                // First widget lands rightmost.
                if ui.button("▶").clicked() {
                    jump_dir = 1.0;
                }
                let glyph = if self.controller.sticky_paused() {
                    "⏵"
                } else {
                    "⏸"
                };
                if ui.button(glyph).clicked() {
                    toggle_pause = true;
                }
                if ui.button("◀").clicked() {
                    jump_dir = -1.0;
                }
            });
        }

        let output = ScrollArea::horizontal()
            .id_salt(self.id_salt.as_str())
            .auto_shrink([false, true])
            .scroll_bar_visibility(ScrollBarVisibility::AlwaysHidden)
            .enable_scrolling(false)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    // Two passes over the item set: the duplicate copy makes
                    // the wrap land on identical content.
                    for _copy in 0..2 {
                        for index in 0..item_count {
                            add_item(ui, index);
                        }
                    }
                });
            });

        let viewport_w = output.inner_rect.width();
        let content_w = output.content_size.x;
        let max_scroll = (content_w - viewport_w).max(0.0);
        self.controller.set_loop_length(content_w * 0.5);

        let mut state = output.state;
        let mut viewport = ScrollStateViewport {
            state: &mut state,
            max_scroll,
        };

        let resp = ui.interact(
            output.inner_rect,
            Id::new(&self.id_salt).with("pointer"),
            Sense::drag(),
        );

        // Touch and mouse arrive as the same pointer stream; only the x
        // coordinate matters past this point.
        let hovered = resp.hovered() || resp.dragged();
        if hovered != self.was_hovered {
            if hovered {
                self.controller.pointer_enter();
            } else {
                self.controller.pointer_leave();
            }
            self.was_hovered = hovered;
        }

        if resp.drag_started() {
            if let Some(pos) = resp.interact_pointer_pos() {
                // Manual input overrides an in-flight jump.
                self.jump = None;
                self.controller.begin_drag(pos.x);
            }
        } else if resp.dragged() {
            if let Some(pos) = resp.interact_pointer_pos() {
                let position = self.controller.drag_to(pos.x);
                // Applied immediately for responsive feel, not on the next
                // frame.
                viewport.set_offset(position);
            }
        } else if resp.drag_stopped() {
            self.controller.end_drag(&viewport);
        }

        if toggle_pause {
            self.controller.toggle_sticky_pause();
        }

        if jump_dir != 0.0 {
            let from = viewport.offset();
            self.jump = Some(JumpAnim {
                from,
                target: from + jump_dir * self.controller.config().jump_step,
                t: 0.0,
            });
        }

        // Per-frame update: an animating jump owns the viewport, otherwise
        // the controller advances (autoplay) and writes unconditionally.
        if let Some(anim) = &mut self.jump {
            anim.t += ui.input(|i| i.stable_dt) / JUMP_SECONDS;
            if anim.t >= 1.0 {
                viewport.set_offset(anim.target);
                self.controller.resync(&viewport);
                self.jump = None;
                log::trace!(
                    target: "gfx.carousel",
                    "jump finished, resynced to {}",
                    self.controller.position()
                );
            } else {
                let offset = anim.offset_at();
                viewport.set_offset(offset);
            }
        } else {
            self.controller.on_frame(&mut viewport);
        }

        state.store(ui.ctx(), output.id);

        // Re-schedule for the next frame as long as the carousel is shown.
        ui.ctx().request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_state_viewport_clamps_writes_and_reads_truth() {
        let mut state = ScrollState::default();
        let mut vp = ScrollStateViewport {
            state: &mut state,
            max_scroll: 250.0,
        };

        vp.set_offset(400.0);
        assert_eq!(vp.offset(), 250.0);

        vp.set_offset(-10.0);
        assert_eq!(vp.offset(), 0.0);

        vp.set_offset(100.0);
        assert_eq!(vp.offset(), 100.0);
    }

    #[test]
    fn jump_anim_eases_between_endpoints() {
        let anim = JumpAnim {
            from: 100.0,
            target: 400.0,
            t: 0.0,
        };
        assert_eq!(anim.offset_at(), 100.0);

        let done = JumpAnim { t: 1.0, ..anim };
        assert_eq!(done.offset_at(), 400.0);

        let mid = JumpAnim { t: 0.5, ..anim };
        assert!(mid.offset_at() > 100.0 && mid.offset_at() < 400.0);
    }
}
