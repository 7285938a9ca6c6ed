//! Form submission logic for the contact and registration forms.
//!
//! The relay endpoint and the payment checkout are external collaborators:
//! nothing in here talks to a network. The machines own the user-visible
//! status text and the busy/terminal phases; whoever owns the external
//! side reports back via [`SubmissionState::payment_verified`],
//! [`SubmissionState::payment_cancelled`], and [`SubmissionState::complete`].

mod config;
mod state;

pub use config::{FormConfig, FormId, PACKAGES, config_for, package_price_ghs};
pub use state::{SubmissionPhase, SubmissionState};
