//! winit host: window, event loop, and the frame ticker.
//!
//! The ticker is the page's rendering scheduler: a thread that posts a
//! `Tick` user event at roughly display rate, each of which requests a
//! redraw. It carries an explicit stop handle so teardown is deterministic
//! instead of relying on the event-loop proxy dying underneath it.

use app_api::UiApp;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    window::{Window, WindowId},
};

enum UserEvent {
    Tick,
}

/// Recurring redraw requester with an explicit stop handle.
///
/// Keeps posting [`UserEvent::Tick`] at ~60 Hz until [`stop`](Self::stop)
/// is called or the event loop goes away. Dropping the ticker stops it.
struct FrameTicker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl FrameTicker {
    fn spawn(proxy: EventLoopProxy<UserEvent>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            let frame = Duration::from_millis(16); // ~60Hz
            while !stop_flag.load(Ordering::Relaxed) {
                if proxy.send_event(UserEvent::Tick).is_err() {
                    break;
                }
                thread::sleep(frame);
            }
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }

    fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for FrameTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Run `app` in a window until it is closed.
pub fn run(app: impl UiApp) {
    let event_loop = EventLoop::<UserEvent>::with_user_event()
        .build()
        .expect("failed to create event loop");

    let proxy = event_loop.create_proxy();

    let mut host = PlatformApp {
        window: None,
        renderer: None,
        ticker: None,
        proxy: Some(proxy),
        app,
    };
    event_loop.run_app(&mut host).expect("event loop crashed");
}

struct PlatformApp<A: UiApp> {
    window: Option<Arc<Window>>,
    renderer: Option<gfx::Renderer>,
    ticker: Option<FrameTicker>,
    proxy: Option<EventLoopProxy<UserEvent>>,
    app: A,
}

impl<A: UiApp> ApplicationHandler<UserEvent> for PlatformApp<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let raw_window = event_loop
                .create_window(Window::default_attributes().with_title("Vitrine"))
                .expect("create window");
            let window = Arc::new(raw_window);
            self.renderer = Some(gfx::Renderer::new(&window));
            self.window = Some(window);
        }

        if self.ticker.is_none()
            && let Some(proxy) = self.proxy.take()
        {
            self.ticker = Some(FrameTicker::spawn(proxy));
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Tick => {
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(window), Some(renderer)) = (self.window.as_ref(), self.renderer.as_mut()) {
            renderer.on_window_event(window, &event);
        }
        match event {
            WindowEvent::CloseRequested => {
                // Stop the scheduler before the loop (and its proxy) go away.
                if let Some(mut ticker) = self.ticker.take() {
                    ticker.stop();
                }
                log::debug!(target: "platform", "close requested, frame ticker stopped");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                if let (Some(window), Some(renderer)) =
                    (self.window.as_ref(), self.renderer.as_mut())
                {
                    let app = &mut self.app;
                    renderer.render(window, |ctx| app.ui(ctx));
                }
            }
            _ => {}
        }
    }
}
