//! # carousel_core
//!
//! UI-agnostic state machine for an infinitely looping, user-interruptible
//! carousel.
//!
//! This crate provides the building blocks for driving a horizontally
//! scrolling strip of duplicated content:
//! - [`CarouselController`]: owns the scroll position and arbitrates between
//!   autoplay, pointer drags, and out-of-band jumps
//! - [`CarouselConfig`]: the tuning constants (autoplay speed, drag gain,
//!   jump step)
//! - [`ScrollViewport`]: the seam to the host's scrollable element
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any graphics framework (egui, wgpu, etc.)
//! - Layout or hit-testing systems
//! - Platform-specific APIs or clocks
//!
//! It depends only on `std` and provides pure scrolling semantics that can
//! be tested frame-by-frame and reused across different UI hosts. The
//! controller never schedules itself: the host calls [`CarouselController::on_frame`]
//! once per repaint, and the host decides when repaints stop.
//!
//! ## Integration
//!
//! The host supplies a [`ScrollViewport`] adapter over its scrollable
//! element. Writes through the adapter may be silently clamped by the host;
//! reads must return the true current offset. Every out-of-band position
//! change (drag end, jump completion) resynchronizes the controller from
//! that true offset rather than trusting its own arithmetic.

mod config;
mod controller;
mod mode;
mod viewport;

pub use config::CarouselConfig;
pub use controller::CarouselController;
pub use mode::Mode;
pub use viewport::ScrollViewport;
