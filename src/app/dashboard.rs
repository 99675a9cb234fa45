//! Dashboard and sign-in screens

use eframe::egui;

use super::{card_frame, ExamForgeApp, Route};
use crate::auth::UserProfile;
use crate::theme::colors;

impl ExamForgeApp {
    pub(crate) fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        let mut start = false;
        let mut sign_in = false;

        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            ui.set_max_width(560.0);
            card_frame().show(ui, |ui| {
                if let Some(user) = self.auth.current_user() {
                    ui.label(
                        egui::RichText::new(format!("Welcome, {}", user.name))
                            .color(colors::TEXT_PRIMARY)
                            .size(20.0)
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new("Set up and generate a question paper for your course.")
                            .color(colors::TEXT_MUTED),
                    );
                    ui.add_space(14.0);
                    if ui.button("Create Question Paper >").clicked() {
                        start = true;
                    }
                } else {
                    ui.label(
                        egui::RichText::new("Welcome")
                            .color(colors::TEXT_PRIMARY)
                            .size(20.0)
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new("Sign in to set up question papers.")
                            .color(colors::TEXT_MUTED),
                    );
                    ui.add_space(14.0);
                    if ui.button("Go to sign in").clicked() {
                        sign_in = true;
                    }
                }
            });
        });

        if start {
            self.navigate(Route::Selection);
        }
        if sign_in {
            self.navigate(Route::Login);
        }
    }

    pub(crate) fn render_login(&mut self, ui: &mut egui::Ui) {
        let mut demo_session = false;
        let mut proceed = false;

        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            ui.set_max_width(480.0);
            card_frame().show(ui, |ui| {
                ui.label(
                    egui::RichText::new("Sign In")
                        .color(colors::TEXT_PRIMARY)
                        .size(20.0)
                        .strong(),
                );
                ui.label(
                    egui::RichText::new(
                        "examforge delegates authentication to the institution portal. \
                         Point EXAMFORGE_PROFILE at a profile file, or continue locally.",
                    )
                    .color(colors::TEXT_MUTED),
                );
                ui.add_space(14.0);

                if self.auth.is_authenticated() {
                    ui.label(egui::RichText::new("Already signed in.").color(colors::OK));
                    if ui.button("Continue to dashboard").clicked() {
                        proceed = true;
                    }
                } else if ui.button("Continue with a demo session").clicked() {
                    demo_session = true;
                }
            });
        });

        if demo_session {
            self.auth.sign_in(UserProfile {
                name: "Demo Examiner".into(),
                semester: None,
                courses: Vec::new(),
            });
            self.navigate(Route::Dashboard);
        }
        if proceed {
            self.navigate(Route::Dashboard);
        }
    }
}
