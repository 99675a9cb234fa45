//! Generation hand-off summary screen
//!
//! Question generation itself lives in the paper service; this screen shows
//! the plan exactly as it would be submitted.

use eframe::egui;

use super::{card_frame, ExamForgeApp};
use crate::exam::types::{PaperPlan, SECTIONS};
use crate::exam::validate::section_total;
use crate::theme::colors;

pub(crate) struct GenerateScreen {
    pub(crate) plan: PaperPlan,
}

impl GenerateScreen {
    pub(crate) fn open(plan: PaperPlan) -> Self {
        Self { plan }
    }
}

impl ExamForgeApp {
    pub(crate) fn render_generate(&mut self, ui: &mut egui::Ui) {
        let Some(screen) = self.generate.as_ref() else {
            return;
        };
        let plan = &screen.plan;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.set_max_width(720.0);

                card_frame().show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("Paper Plan")
                            .color(colors::TEXT_PRIMARY)
                            .size(18.0)
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new(format!(
                            "{} / Semester {} / {}",
                            plan.exam.exam_type.describe(),
                            plan.exam.semester,
                            plan.exam.course
                        ))
                        .color(colors::TEXT_ACCENT),
                    );
                });

                ui.add_space(12.0);

                card_frame().show(ui, |ui| {
                    for &section in &SECTIONS {
                        ui.label(
                            egui::RichText::new(format!("Section {section}"))
                                .color(colors::TEXT_ACCENT)
                                .size(14.0),
                        );
                        for question in plan.questions.iter().filter(|q| q.slot.section == section)
                        {
                            let slot = question.slot.to_string().to_uppercase();
                            let line = if question.slot.is_optional() && !question.include_c {
                                format!("{slot} - excluded")
                            } else {
                                format!(
                                    "{slot} - {}, {} marks",
                                    question.level.label(),
                                    question.marks
                                )
                            };
                            let color = if question.slot.is_optional() && !question.include_c {
                                colors::TEXT_MUTED
                            } else {
                                colors::TEXT_PRIMARY
                            };
                            ui.label(egui::RichText::new(line).color(color).monospace());
                        }
                        ui.label(
                            egui::RichText::new(format!(
                                "total {} marks",
                                section_total(&plan.questions, section)
                            ))
                            .color(colors::TEXT_MUTED)
                            .small(),
                        );
                        ui.add_space(8.0);
                    }
                });

                ui.add_space(12.0);

                card_frame().show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} question options per section will be requested from the paper \
                             service.",
                            plan.per_section
                        ))
                        .color(colors::TEXT_PRIMARY),
                    );
                });
                ui.add_space(24.0);
            });
        });
    }
}
