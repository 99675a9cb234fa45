//! Exam type / semester / course selection screen

use eframe::egui;
use tracing::info;

use super::{card_frame, ExamForgeApp, Handoff, Route};
use crate::auth::AuthContext;
use crate::config::AppConfig;
use crate::courses::{filter_entitled, CourseRequest, FetchState};
use crate::exam::types::{Course, ExamSelection, ExamType, Semester};
use crate::theme::colors;

/// Local state for one visit. Opening the screen starts the catalog fetch;
/// leaving and coming back starts a new one.
pub(crate) struct SelectionScreen {
    pub(crate) exam_type: Option<ExamType>,
    pub(crate) semester: Option<Semester>,
    pub(crate) course: Option<String>,
    pub(crate) courses: Vec<Course>,
    pub(crate) fetch: FetchState,
    pub(crate) request: Option<CourseRequest>,
}

impl SelectionScreen {
    pub(crate) fn open(config: &AppConfig, auth: &AuthContext) -> Self {
        Self {
            exam_type: None,
            semester: auth.current_user().and_then(|u| u.semester),
            course: None,
            courses: Vec::new(),
            fetch: FetchState::Loading,
            request: Some(CourseRequest::spawn(&config.api_url)),
        }
    }

    /// All three fields chosen; gates the continue button.
    fn ready(&self) -> bool {
        self.exam_type.is_some() && self.semester.is_some() && self.course.is_some()
    }
}

impl ExamForgeApp {
    /// Drain the catalog request, if one is in flight. Called once per frame
    /// from the update loop.
    pub(crate) fn poll_courses(&mut self) {
        let Some(screen) = self.selection.as_mut() else {
            return;
        };
        let Some(request) = screen.request.as_ref() else {
            return;
        };
        let Some(result) = request.poll() else {
            return;
        };

        screen.request = None;
        match result {
            Ok(catalog) => {
                let entitled = self
                    .auth
                    .current_user()
                    .map(|u| u.courses.as_slice())
                    .unwrap_or(&[]);
                screen.courses = filter_entitled(catalog, entitled);
                screen.fetch = FetchState::Loaded;
                info!(offered = screen.courses.len(), "Course catalog ready");
            }
            Err(e) => {
                screen.fetch = FetchState::Failed(e);
                self.toasts
                    .error("Error", "Failed to load courses. Please try again.");
            }
        }
    }

    pub(crate) fn render_selection(&mut self, ui: &mut egui::Ui) {
        let Some(screen) = self.selection.as_mut() else {
            return;
        };

        let mut submit: Option<ExamSelection> = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(32.0);
            ui.vertical_centered(|ui| {
                ui.set_max_width(560.0);

                card_frame().show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("Select Exam Type")
                            .color(colors::TEXT_PRIMARY)
                            .size(20.0)
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new("Configure the type of exam you want to create")
                            .color(colors::TEXT_MUTED),
                    );
                    ui.add_space(16.0);

                    ui.label(
                        egui::RichText::new("Exam Type")
                            .color(colors::TEXT_ACCENT)
                            .small(),
                    );
                    egui::ComboBox::from_id_salt("exam_type")
                        .width(ui.available_width())
                        .selected_text(
                            screen
                                .exam_type
                                .map(|t| t.describe())
                                .unwrap_or("Select exam type"),
                        )
                        .show_ui(ui, |ui| {
                            for exam_type in ExamType::ALL {
                                ui.selectable_value(
                                    &mut screen.exam_type,
                                    Some(exam_type),
                                    exam_type.describe(),
                                );
                            }
                        });
                    ui.add_space(10.0);

                    ui.label(
                        egui::RichText::new("Semester")
                            .color(colors::TEXT_ACCENT)
                            .small(),
                    );
                    egui::ComboBox::from_id_salt("semester")
                        .width(ui.available_width())
                        .selected_text(
                            screen
                                .semester
                                .map(|s| format!("Semester {s}"))
                                .unwrap_or_else(|| "Select semester".to_string()),
                        )
                        .show_ui(ui, |ui| {
                            for semester in Semester::all() {
                                ui.selectable_value(
                                    &mut screen.semester,
                                    Some(semester),
                                    format!("Semester {semester}"),
                                );
                            }
                        });
                    ui.add_space(10.0);

                    ui.label(
                        egui::RichText::new("Course")
                            .color(colors::TEXT_ACCENT)
                            .small(),
                    );
                    if screen.fetch.is_loading() {
                        ui.horizontal(|ui| {
                            ui.add(egui::Spinner::new().size(14.0));
                            ui.label(
                                egui::RichText::new("Loading courses...")
                                    .color(colors::TEXT_MUTED),
                            );
                        });
                    } else {
                        let selected_label = screen
                            .course
                            .as_ref()
                            .and_then(|code| screen.courses.iter().find(|c| &c.code == code))
                            .map(|c| format!("{} ({})", c.name, c.code))
                            .unwrap_or_else(|| "Select course".to_string());

                        egui::ComboBox::from_id_salt("course")
                            .width(ui.available_width())
                            .selected_text(selected_label)
                            .show_ui(ui, |ui| {
                                if screen.courses.is_empty() {
                                    ui.label(
                                        egui::RichText::new("No courses available")
                                            .color(colors::TEXT_MUTED),
                                    );
                                }
                                for course in &screen.courses {
                                    ui.selectable_value(
                                        &mut screen.course,
                                        Some(course.code.clone()),
                                        format!("{} ({})", course.name, course.code),
                                    );
                                }
                            });
                    }

                    ui.add_space(18.0);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let enabled = screen.ready();
                        if ui
                            .add_enabled(enabled, egui::Button::new("Continue >"))
                            .clicked()
                        {
                            if let (Some(exam_type), Some(semester), Some(course)) =
                                (screen.exam_type, screen.semester, screen.course.clone())
                            {
                                submit = Some(ExamSelection {
                                    exam_type,
                                    semester,
                                    course,
                                });
                            }
                        }
                    });
                });
            });
        });

        if let Some(selection) = submit {
            info!(
                exam = %selection.exam_type,
                semester = %selection.semester,
                course = %selection.course,
                "Selection complete"
            );
            let route = Route::setup_for(selection.exam_type);
            self.navigate_with(route, Handoff::Selection(selection));
        }
    }
}
