//! Headless smoke test: the page renders and the carousels autoplay.

use app_api::UiApp;
use site::SiteApp;

fn frame_input() -> egui::RawInput {
    egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(1280.0, 720.0),
        )),
        ..Default::default()
    }
}

#[test]
fn autoplay_advances_across_frames() {
    let ctx = egui::Context::default();
    let mut app = SiteApp::new();

    for _ in 0..6 {
        let _ = ctx.run(frame_input(), |ctx| app.ui(ctx));
    }

    // Both strips measured a real loop and moved under autoplay.
    assert!(app.logos.controller.loop_length() > 0.0);
    assert!(app.testimonials.controller.loop_length() > 0.0);
    assert!(app.logos.controller.position() > 0.0);
    // The testimonial strip is tuned faster than the logo band.
    assert!(app.testimonials.controller.position() > app.logos.controller.position());
}

#[test]
fn positions_stay_inside_the_loop() {
    let ctx = egui::Context::default();
    let mut app = SiteApp::new();

    for _ in 0..120 {
        let _ = ctx.run(frame_input(), |ctx| app.ui(ctx));
    }

    let logos = &app.logos.controller;
    assert!(logos.position() >= 0.0 && logos.position() < logos.loop_length());

    let testimonials = &app.testimonials.controller;
    assert!(
        testimonials.position() >= 0.0 && testimonials.position() < testimonials.loop_length()
    );
}
