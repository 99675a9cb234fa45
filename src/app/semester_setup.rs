//! Semester-end (SEE) setup screen
//!
//! SEE papers are configured by the paper service; this route exists as the
//! navigation target for SEE selections and shows what was carried in.

use eframe::egui;

use super::{card_frame, ExamForgeApp, Route};
use crate::exam::types::ExamSelection;
use crate::theme::colors;

pub(crate) struct SemesterSetupScreen {
    pub(crate) exam: ExamSelection,
}

impl SemesterSetupScreen {
    pub(crate) fn open(exam: ExamSelection) -> Self {
        Self { exam }
    }
}

impl ExamForgeApp {
    pub(crate) fn render_semester_setup(&mut self, ui: &mut egui::Ui) {
        let Some(screen) = self.semester.as_ref() else {
            return;
        };

        let mut back = false;

        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            ui.set_max_width(560.0);
            card_frame().show(ui, |ui| {
                ui.label(
                    egui::RichText::new(screen.exam.exam_type.describe())
                        .color(colors::TEXT_PRIMARY)
                        .size(18.0)
                        .strong(),
                );
                ui.label(
                    egui::RichText::new(format!(
                        "Semester {} / {}",
                        screen.exam.semester, screen.exam.course
                    ))
                    .color(colors::TEXT_ACCENT),
                );
                ui.add_space(10.0);
                ui.label(
                    egui::RichText::new(
                        "Semester-end paper setup is handled by the paper service.",
                    )
                    .color(colors::TEXT_MUTED),
                );
                ui.add_space(14.0);
                if ui.button("< Back to dashboard").clicked() {
                    back = true;
                }
            });
        });

        if back {
            self.navigate(Route::Dashboard);
        }
    }
}
