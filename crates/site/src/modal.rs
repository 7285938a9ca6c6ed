//! The registration modal component.
//!
//! An explicit component object owned by the page — no ambient globals.
//! The selected package is carried as state rather than a hidden form
//! field.

use std::time::{Duration, Instant};

/// Delay between a successful registration and the modal closing itself.
const AUTO_CLOSE: Duration = Duration::from_secs(3);

/// Open/close state for the registration dialog.
#[derive(Clone, Debug, Default)]
pub struct RegistrationModal {
    open: bool,
    package: Option<String>,
    close_at: Option<Instant>,
}

impl RegistrationModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog for the given package.
    pub fn open(&mut self, package: impl Into<String>) {
        self.open = true;
        self.package = Some(package.into());
        self.close_at = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.close_at = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The package the dialog was opened for.
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    /// Schedule the automatic close that follows a successful registration.
    pub fn schedule_close(&mut self, now: Instant) {
        if self.open {
            self.close_at = Some(now + AUTO_CLOSE);
        }
    }

    /// Advance time-based behavior. Returns `true` if the modal closed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.close_at {
            Some(at) if self.open && now >= at => {
                self.close();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_records_the_package() {
        let mut modal = RegistrationModal::new();
        modal.open("Tech Leadership");

        assert!(modal.is_open());
        assert_eq!(modal.package(), Some("Tech Leadership"));
    }

    #[test]
    fn poll_closes_only_after_the_deadline() {
        let mut modal = RegistrationModal::new();
        let now = Instant::now();

        modal.open("Foundations Program");
        modal.schedule_close(now);

        assert!(!modal.poll(now + Duration::from_secs(1)));
        assert!(modal.is_open());

        assert!(modal.poll(now + AUTO_CLOSE));
        assert!(!modal.is_open());
    }

    #[test]
    fn close_clears_a_pending_auto_close() {
        let mut modal = RegistrationModal::new();
        let now = Instant::now();

        modal.open("Foundations Program");
        modal.schedule_close(now);
        modal.close();

        assert!(!modal.poll(now + AUTO_CLOSE));
        assert!(!modal.is_open());
    }

    #[test]
    fn reopening_cancels_a_pending_auto_close() {
        let mut modal = RegistrationModal::new();
        let now = Instant::now();

        modal.open("Foundations Program");
        modal.schedule_close(now);
        modal.open("Tech Leadership");

        assert!(!modal.poll(now + AUTO_CLOSE));
        assert!(modal.is_open());
    }

    #[test]
    fn schedule_is_a_noop_while_closed() {
        let mut modal = RegistrationModal::new();
        let now = Instant::now();

        modal.schedule_close(now);
        assert!(!modal.poll(now + AUTO_CLOSE));
    }
}
