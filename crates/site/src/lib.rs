//! Page composition for the Vitrine showcase shell.
//!
//! `SiteApp` owns everything with state: the two carousels, the
//! registration modal, and the form machines. Section rendering is plain
//! composition over those components; the carousels' behavior lives in
//! `carousel_core`/`gfx`, the form rules in [`forms`].

pub mod forms;
pub mod modal;

use app_api::UiApp;
use carousel_core::CarouselConfig;
use egui::{
    Button, CentralPanel, Color32, Context, RichText, ScrollArea, TextEdit, TopBottomPanel, Ui,
};
use forms::{FormId, PACKAGES, SubmissionPhase, SubmissionState, config_for, package_price_ghs};
use gfx::Carousel;
use modal::RegistrationModal;
use std::time::{Duration, Instant};

/// Stand-in latency for the external form relay.
const RELAY_LATENCY: Duration = Duration::from_millis(600);
/// Stand-in latency for the external payment checkout.
const CHECKOUT_LATENCY: Duration = Duration::from_millis(800);

const LOGOS: [&str; 8] = [
    "Acme Analytics",
    "Harbor & Co",
    "Kumasi Digital",
    "Meridian Labs",
    "Northwind",
    "Osei Ventures",
    "Pinnacle Cloud",
    "Volta Systems",
];

struct Testimonial {
    quote: &'static str,
    author: &'static str,
}

const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        quote: "The mentorship completely changed how I approach interviews. \
                I went from no callbacks to three offers in two months.",
        author: "Abena O., Product Engineer",
    },
    Testimonial {
        quote: "Clear, practical, and honest about the work it takes. \
                Worth every cedi.",
        author: "Daniel K., Data Analyst",
    },
    Testimonial {
        quote: "I joined for the curriculum and stayed for the community. \
                My team still uses the review rituals we learned.",
        author: "Efua M., Engineering Manager",
    },
    Testimonial {
        quote: "Six months after the leadership track I was running my own \
                platform group.",
        author: "Yaw A., Director of Engineering",
    },
];

struct ContactForm {
    name: String,
    email: String,
    message: String,
    submission: SubmissionState,
}

impl ContactForm {
    fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            submission: SubmissionState::new(),
        }
    }

    fn reset_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

struct RegistrationForm {
    name: String,
    email: String,
    submission: SubmissionState,
}

impl RegistrationForm {
    fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            submission: SubmissionState::new(),
        }
    }

    fn reset_fields(&mut self) {
        self.name.clear();
        self.email.clear();
    }
}

/// The whole page.
pub struct SiteApp {
    nav_open: bool,
    pub logos: Carousel,
    pub testimonials: Carousel,
    pub modal: RegistrationModal,
    contact: ContactForm,
    registration: RegistrationForm,
    /// Deadlines at which the demo shell answers for the external
    /// relay/checkout collaborators.
    contact_relay_due: Option<Instant>,
    registration_relay_due: Option<Instant>,
    checkout_due: Option<Instant>,
}

impl Default for SiteApp {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteApp {
    pub fn new() -> Self {
        Self {
            nav_open: false,
            // The strips are tuned independently: the logo band crawls,
            // the testimonials move at reading pace.
            logos: Carousel::new(
                "logo_strip",
                CarouselConfig {
                    speed: 0.4,
                    ..CarouselConfig::default()
                },
            ),
            testimonials: Carousel::new(
                "testimonial_strip",
                CarouselConfig {
                    speed: 0.8,
                    ..CarouselConfig::default()
                },
            )
            .with_controls(),
            modal: RegistrationModal::new(),
            contact: ContactForm::new(),
            registration: RegistrationForm::new(),
            contact_relay_due: None,
            registration_relay_due: None,
            checkout_due: None,
        }
    }

    /// Answer for the external collaborators and run time-based behavior.
    ///
    /// The relay endpoint and payment checkout live outside this repo; the
    /// demo shell approves them locally after a short latency so the full
    /// status flow is visible.
    fn pump_external(&mut self, now: Instant) {
        if let Some(at) = self.checkout_due
            && now >= at
        {
            self.checkout_due = None;
            log::info!(target: "site.forms", "checkout is external; approving locally");
            self.registration.submission.payment_verified();
            self.registration_relay_due = Some(now + RELAY_LATENCY);
        }

        if let Some(at) = self.contact_relay_due
            && now >= at
        {
            self.contact_relay_due = None;
            let cfg = config_for(FormId::Contact);
            if self.contact.submission.complete(&cfg, Ok(())) {
                self.contact.reset_fields();
            }
        }

        if let Some(at) = self.registration_relay_due
            && now >= at
        {
            self.registration_relay_due = None;
            let cfg = config_for(FormId::Registration);
            if self.registration.submission.complete(&cfg, Ok(())) {
                self.registration.reset_fields();
                self.modal.schedule_close(now);
            }
        }

        if self.modal.poll(now) {
            log::debug!(target: "site.modal", "registration modal auto-closed");
        }
    }

    fn top_bar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.heading("Vitrine Studio");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let glyph = if self.nav_open { "✕" } else { "☰" };
                if ui.button(glyph).clicked() {
                    self.nav_open = !self.nav_open;
                }
            });
        });
        if self.nav_open {
            ui.horizontal(|ui| {
                for link in ["About", "Programs", "Testimonials", "Contact"] {
                    if ui.link(link).clicked() {
                        self.nav_open = false;
                    }
                }
            });
        }
    }

    fn hero(&mut self, ui: &mut Ui) {
        ui.add_space(24.0);
        ui.heading(RichText::new("Build a career you can point at.").size(28.0));
        ui.label(
            "Mentorship programs and hands-on training for engineers at \
             every stage, from first portfolio to first platform team.",
        );
    }

    fn logo_section(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("TRUSTED BY").weak().small());
        ui.add_space(4.0);
        self.logos.ui(ui, LOGOS.len(), |ui, index| {
            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::symmetric(18, 12))
                .show(ui, |ui| {
                    ui.set_min_width(140.0);
                    ui.label(RichText::new(LOGOS[index]).strong());
                });
        });
    }

    fn testimonial_section(&mut self, ui: &mut Ui) {
        ui.heading("What alumni say");
        ui.add_space(4.0);
        self.testimonials.ui(ui, TESTIMONIALS.len(), |ui, index| {
            let t = &TESTIMONIALS[index];
            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::same(14))
                .show(ui, |ui| {
                    ui.set_width(300.0);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("\u{201c}{}\u{201d}", t.quote)).italics());
                        ui.add_space(6.0);
                        ui.label(RichText::new(t.author).weak());
                    });
                });
        });
    }

    fn program_section(&mut self, ui: &mut Ui) {
        ui.heading("Programs");
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            for package in PACKAGES {
                egui::Frame::group(ui.style())
                    .inner_margin(egui::Margin::same(14))
                    .show(ui, |ui| {
                        ui.set_width(220.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(package).strong());
                            if let Some(price) = package_price_ghs(package) {
                                ui.label(format!("GHS {price}"));
                            }
                            ui.add_space(6.0);
                            if ui.button("Register").clicked() {
                                self.modal.open(package);
                            }
                        });
                    });
            }
        });
    }

    fn contact_section(&mut self, ui: &mut Ui) {
        ui.heading("Get in touch");
        ui.add_space(4.0);
        ui.add(TextEdit::singleline(&mut self.contact.name).hint_text("Name"));
        ui.add(TextEdit::singleline(&mut self.contact.email).hint_text("Email"));
        ui.add(TextEdit::multiline(&mut self.contact.message).hint_text("How can we help?"));
        ui.add_space(4.0);

        let busy = self.contact.submission.is_busy();
        let label = if busy { "Processing…" } else { "Send Message" };
        if ui.add_enabled(!busy, Button::new(label)).clicked() {
            let cfg = config_for(FormId::Contact);
            if self.contact.submission.submit(&cfg, None) {
                self.contact_relay_due = Some(Instant::now() + RELAY_LATENCY);
            }
        }
        status_line(ui, &self.contact.submission);
    }

    fn registration_modal(&mut self, ctx: &Context, now: Instant) {
        let response = egui::Modal::new(egui::Id::new("registration_modal")).show(ctx, |ui| {
            ui.set_width(360.0);
            ui.heading("Register");
            if let Some(package) = self.modal.package() {
                ui.label(RichText::new(package).strong());
                if let Some(price) = package_price_ghs(package) {
                    ui.label(format!("GHS {price}"));
                }
            }
            ui.add_space(8.0);
            ui.add(TextEdit::singleline(&mut self.registration.name).hint_text("Full name"));
            ui.add(TextEdit::singleline(&mut self.registration.email).hint_text("Email"));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let busy = self.registration.submission.is_busy();
                let label = if busy { "Processing…" } else { "Pay & Register" };
                if ui.add_enabled(!busy, Button::new(label)).clicked() {
                    let cfg = config_for(FormId::Registration);
                    let price = self.modal.package().and_then(package_price_ghs);
                    if self.registration.submission.submit(&cfg, price) {
                        self.checkout_due = Some(now + CHECKOUT_LATENCY);
                    }
                }
                if ui.button("Cancel").clicked() {
                    if self.registration.submission.phase() == SubmissionPhase::AwaitingPayment {
                        // Same as dismissing the checkout: the form re-arms,
                        // the modal stays up.
                        self.checkout_due = None;
                        self.registration.submission.payment_cancelled();
                    } else {
                        self.modal.close();
                    }
                }
            });
            status_line(ui, &self.registration.submission);
        });

        // Backdrop click or Esc.
        if response.should_close() {
            self.modal.close();
        }
    }
}

impl UiApp for SiteApp {
    fn ui(&mut self, ctx: &Context) {
        let now = Instant::now();
        self.pump_external(now);

        TopBottomPanel::top("topbar").show(ctx, |ui| self.top_bar(ui));
        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().id_salt("page").show(ui, |ui| {
                self.hero(ui);
                ui.add_space(24.0);
                self.logo_section(ui);
                ui.add_space(24.0);
                self.testimonial_section(ui);
                ui.add_space(24.0);
                self.program_section(ui);
                ui.add_space(24.0);
                self.contact_section(ui);
                ui.add_space(32.0);
            });
        });

        if self.modal.is_open() {
            self.registration_modal(ctx, now);
        }
    }
}

/// Status line under a submit control, colored by outcome.
fn status_line(ui: &mut Ui, submission: &SubmissionState) {
    if submission.status().is_empty() {
        return;
    }
    let color = match submission.phase() {
        SubmissionPhase::Succeeded => Color32::from_rgb(0x4a, 0xde, 0x80),
        SubmissionPhase::Failed => Color32::from_rgb(0xf8, 0x71, 0x71),
        _ => ui.visuals().weak_text_color(),
    };
    ui.colored_label(color, submission.status());
}
