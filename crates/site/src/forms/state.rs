//! The submission state machine shared by both forms.

use crate::forms::config::FormConfig;

/// Where a submission currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// Nothing in flight; the submit control is armed.
    #[default]
    Idle,
    /// Payment flow only: the external checkout is open.
    AwaitingPayment,
    /// The external relay has the data.
    Processing,
    Succeeded,
    Failed,
}

/// Submission machine for one form.
///
/// Owns the phase and the user-visible status line. All external outcomes
/// (checkout verdicts, relay completion) are delivered from outside; the
/// machine never initiates anything.
#[derive(Clone, Debug, Default)]
pub struct SubmissionState {
    phase: SubmissionPhase,
    status: String,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// The user-visible status line. Empty until the first submission.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// True while an external collaborator owes us an answer; the submit
    /// control stays disabled.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            SubmissionPhase::AwaitingPayment | SubmissionPhase::Processing
        )
    }

    /// Begin a submission. Returns `true` if one actually started.
    ///
    /// Callable from any non-busy phase (a failed or succeeded form can be
    /// submitted again). Payment flows check the package price first: an
    /// unknown package fails immediately without contacting anything.
    pub fn submit(&mut self, config: &FormConfig, package_price: Option<u32>) -> bool {
        if self.is_busy() {
            return false;
        }
        if config.payment_flow {
            if package_price.is_none() {
                self.phase = SubmissionPhase::Failed;
                self.status = "Error: invalid package selected".into();
                return false;
            }
            self.phase = SubmissionPhase::AwaitingPayment;
        } else {
            self.phase = SubmissionPhase::Processing;
        }
        self.status = "Processing…".into();
        true
    }

    /// The external checkout reported a verified payment.
    pub fn payment_verified(&mut self) {
        if self.phase == SubmissionPhase::AwaitingPayment {
            self.phase = SubmissionPhase::Processing;
            self.status = "Payment verified. Registering…".into();
        }
    }

    /// The external checkout was dismissed without paying. Re-arms the form.
    pub fn payment_cancelled(&mut self) {
        if self.phase == SubmissionPhase::AwaitingPayment {
            self.phase = SubmissionPhase::Idle;
            self.status = "Payment cancelled.".into();
        }
    }

    /// The external relay finished. Returns `true` on success.
    ///
    /// The configured messages are what the page shows; error detail goes
    /// to the log only.
    pub fn complete(&mut self, config: &FormConfig, result: Result<(), String>) -> bool {
        if self.phase != SubmissionPhase::Processing {
            return false;
        }
        match result {
            Ok(()) => {
                self.phase = SubmissionPhase::Succeeded;
                self.status = config.message_on_success.into();
                true
            }
            Err(detail) => {
                log::error!(target: "site.forms", "relay error: {detail}");
                self.phase = SubmissionPhase::Failed;
                self.status = config.message_on_error.into();
                false
            }
        }
    }
}
