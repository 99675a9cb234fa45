//! CIE per-question setup screen
//!
//! Nine slots (1a..3c) grouped into three sections; every section's
//! included marks must total exactly 15 before the plan is handed to the
//! generation screen.

use eframe::egui;
use tracing::{info, warn};

use super::{card_frame, ExamForgeApp, Handoff, Route};
use crate::exam::types::{
    Difficulty, ExamSelection, PaperPlan, QuestionConfig, DEFAULT_PER_SECTION, MARKS_MAX,
    MARKS_MIN, SECTIONS,
};
use crate::exam::validate::{
    section_total, validate_marks, validate_per_section, SetupError, PER_SECTION_MAX,
    PER_SECTION_MIN, SECTION_TOTAL,
};
use crate::theme::colors;

/// Local form state; only constructed once the entry guard has passed.
pub(crate) struct CieSetupScreen {
    pub(crate) exam: ExamSelection,
    pub(crate) questions: Vec<QuestionConfig>,
    pub(crate) per_section: u32,
}

impl CieSetupScreen {
    pub(crate) fn open(exam: ExamSelection) -> Self {
        Self {
            exam,
            questions: crate::exam::default_question_configs(),
            per_section: DEFAULT_PER_SECTION,
        }
    }
}

impl ExamForgeApp {
    pub(crate) fn render_cie_setup(&mut self, ui: &mut egui::Ui) {
        let Some(screen) = self.cie.as_mut() else {
            return;
        };

        let mut submit = false;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                ui.set_max_width(960.0);

                card_frame().show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("Exam Information")
                            .color(colors::TEXT_PRIMARY)
                            .size(16.0)
                            .strong(),
                    );
                    ui.add_space(8.0);
                    ui.columns(3, |cols| {
                        info_field(&mut cols[0], "Exam Type", screen.exam.exam_type.short());
                        info_field(
                            &mut cols[1],
                            "Semester",
                            &screen.exam.semester.to_string(),
                        );
                        info_field(&mut cols[2], "Course", &screen.exam.course);
                    });
                });

                ui.add_space(12.0);

                card_frame().show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("Question Configuration")
                            .color(colors::TEXT_PRIMARY)
                            .size(16.0)
                            .strong(),
                    );

                    for &section in &SECTIONS {
                        ui.add_space(10.0);
                        let total = section_total(&screen.questions, section);
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(format!("Section {section}"))
                                    .color(colors::TEXT_ACCENT)
                                    .size(14.0),
                            );
                            let total_color = if total == SECTION_TOTAL {
                                colors::OK
                            } else {
                                colors::ERROR
                            };
                            ui.label(
                                egui::RichText::new(format!(
                                    "{total} / {SECTION_TOTAL} marks included"
                                ))
                                .color(total_color)
                                .small(),
                            );
                        });
                        ui.add_space(4.0);

                        ui.columns(3, |cols| {
                            let mut col = 0;
                            for question in screen
                                .questions
                                .iter_mut()
                                .filter(|q| q.slot.section == section)
                            {
                                slot_editor(&mut cols[col], question);
                                col += 1;
                            }
                        });
                    }
                });

                ui.add_space(12.0);

                card_frame().show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("Generation Settings")
                            .color(colors::TEXT_PRIMARY)
                            .size(16.0)
                            .strong(),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("Number of questions to generate per section")
                            .color(colors::TEXT_ACCENT)
                            .small(),
                    );
                    ui.add(
                        egui::DragValue::new(&mut screen.per_section)
                            .range(PER_SECTION_MIN..=PER_SECTION_MAX),
                    );
                    ui.label(
                        egui::RichText::new(format!(
                            "{} question options will be generated for each section",
                            screen.per_section
                        ))
                        .color(colors::TEXT_MUTED)
                        .small(),
                    );
                });

                ui.add_space(14.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Generate Question Paper").clicked() {
                        submit = true;
                    }
                });
                ui.add_space(24.0);
            });
        });

        if submit {
            self.submit_cie_setup();
        }
    }

    fn submit_cie_setup(&mut self) {
        let Some(screen) = self.cie.as_ref() else {
            return;
        };

        let checked = validate_per_section(screen.per_section)
            .and_then(|()| validate_marks(&screen.questions));

        match checked {
            Err(e) => {
                warn!(error = %e, "Setup rejected");
                let title = match &e {
                    SetupError::SectionTotal { .. } => "Invalid marks distribution",
                    SetupError::PerSectionCount { .. } => "Invalid generation count",
                };
                self.toasts.error(title, e.to_string());
            }
            Ok(()) => {
                let plan = PaperPlan {
                    exam: screen.exam.clone(),
                    questions: screen.questions.clone(),
                    per_section: screen.per_section,
                };
                info!(
                    course = %plan.exam.course,
                    per_section = plan.per_section,
                    "Setup accepted"
                );
                self.navigate_with(Route::Generate, Handoff::Plan(plan));
            }
        }
    }
}

fn info_field(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(
        egui::RichText::new(label)
            .color(colors::TEXT_ACCENT)
            .small(),
    );
    ui.label(egui::RichText::new(value).color(colors::TEXT_PRIMARY));
}

fn slot_editor(ui: &mut egui::Ui, question: &mut QuestionConfig) {
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, colors::BORDER))
        .corner_radius(4.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(format!(
                    "Question {}",
                    question.slot.to_string().to_uppercase()
                ))
                .color(colors::TEXT_PRIMARY),
            );
            ui.add_space(4.0);

            ui.label(
                egui::RichText::new("Difficulty Level")
                    .color(colors::TEXT_MUTED)
                    .small(),
            );
            egui::ComboBox::from_id_salt(("level", question.slot))
                .width(ui.available_width())
                .selected_text(question.level.label())
                .show_ui(ui, |ui| {
                    for level in Difficulty::ALL {
                        ui.selectable_value(&mut question.level, level, level.label());
                    }
                });

            ui.label(
                egui::RichText::new("Marks")
                    .color(colors::TEXT_MUTED)
                    .small(),
            );
            ui.add(egui::DragValue::new(&mut question.marks).range(MARKS_MIN..=MARKS_MAX));

            if question.slot.is_optional() {
                ui.add_space(2.0);
                ui.checkbox(
                    &mut question.include_c,
                    format!("Include {}", question.slot.to_string().to_uppercase()),
                );
            }
        });
}
