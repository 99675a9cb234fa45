//! Persistent header bar with back control, title and status

use eframe::egui;
use std::collections::VecDeque;

use super::{ExamForgeApp, Route};
use crate::courses::FetchState;
use crate::theme::colors;
use crate::time::app_seconds;

impl ExamForgeApp {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        self.fps_counter.tick();

        let mut back: Option<Route> = None;

        ui.horizontal(|ui| {
            if let Some(target) = self.router.route().back_target() {
                if ui.button(egui::RichText::new("< Back")).clicked() {
                    back = Some(target);
                }
                ui.add_space(8.0);
            }

            ui.label(
                egui::RichText::new(self.router.route().title())
                    .color(colors::TEXT_PRIMARY)
                    .size(18.0)
                    .strong(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("{:.0} fps", self.fps_counter.fps()))
                        .color(colors::TEXT_MUTED)
                        .size(12.0),
                );
                ui.add_space(10.0);

                if let Some(screen) = &self.selection {
                    match &screen.fetch {
                        FetchState::Loading => {
                            ui.colored_label(
                                colors::BUSY,
                                egui::RichText::new("Loading courses...").size(12.0),
                            );
                        }
                        FetchState::Loaded => {
                            ui.colored_label(
                                colors::OK,
                                egui::RichText::new("Catalog ready").size(12.0),
                            );
                        }
                        FetchState::Failed(e) => {
                            ui.colored_label(
                                colors::ERROR,
                                egui::RichText::new("Catalog unavailable").size(12.0),
                            )
                            .on_hover_text(e);
                        }
                    }
                    ui.add_space(10.0);
                }

                if let Some(user) = self.auth.current_user() {
                    ui.label(
                        egui::RichText::new(&user.name)
                            .color(colors::TEXT_MUTED)
                            .size(12.0),
                    );
                }
            });
        });

        if let Some(target) = back {
            self.navigate(target);
        }
    }
}

/// Rolling frame-rate estimate over the last 60 frames.
pub(crate) struct FpsCounter {
    stamps: VecDeque<f64>,
}

impl FpsCounter {
    pub(crate) fn new() -> Self {
        Self {
            stamps: VecDeque::with_capacity(60),
        }
    }

    pub(crate) fn tick(&mut self) {
        self.stamps.push_back(app_seconds());
        if self.stamps.len() > 60 {
            self.stamps.pop_front();
        }
    }

    pub(crate) fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.stamps.front(), self.stamps.back()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if self.stamps.len() < 2 || elapsed <= 0.0 {
            return 0.0;
        }
        (self.stamps.len() as f64 - 1.0) / elapsed
    }
}
