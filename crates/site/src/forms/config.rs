//! Enumerated per-form configuration.

/// The two live forms on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormId {
    Contact,
    Registration,
}

/// Static settings for one form.
///
/// Each form's behavior is fully described by these four fields.
#[derive(Clone, Copy, Debug)]
pub struct FormConfig {
    /// Layout id of the status line this form writes to.
    pub status_target: &'static str,
    pub message_on_success: &'static str,
    pub message_on_error: &'static str,
    /// Whether submission must clear a payment checkout first.
    pub payment_flow: bool,
}

pub fn config_for(form: FormId) -> FormConfig {
    match form {
        FormId::Contact => FormConfig {
            status_target: "contact-status",
            message_on_success: "Success! Check your email.",
            message_on_error: "Error! Please try again.",
            payment_flow: false,
        },
        FormId::Registration => FormConfig {
            status_target: "registration-status",
            message_on_success: "Success! Check your email.",
            message_on_error: "Error! Please try again.",
            payment_flow: true,
        },
    }
}

/// The paid programs, in display order.
pub const PACKAGES: [&str; 3] = [
    "Foundations Program",
    "Career Accelerator Program",
    "Tech Leadership",
];

/// Price table for the paid programs, in GHS.
///
/// Unknown packages have no price; a payment-flow submission for one fails
/// before anything external is contacted.
pub fn package_price_ghs(package: &str) -> Option<u32> {
    match package {
        "Foundations Program" => Some(800),
        "Career Accelerator Program" => Some(2500),
        "Tech Leadership" => Some(6000),
        _ => None,
    }
}
