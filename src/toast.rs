//! Dismissable notification overlay
//!
//! Missing selections, validation failures and fetch errors all surface
//! here; nothing in the queue is ever fatal to the process.

use eframe::egui;

use crate::theme::colors;
use crate::time::app_seconds;

/// How long a toast stays up without being clicked.
const TOAST_TTL: f64 = 5.0;
/// Oldest entries drop first beyond this depth.
const MAX_STACK: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub kind: ToastKind,
    born: f64,
}

#[derive(Default)]
pub struct Toasts {
    queue: Vec<Toast>,
}

impl Toasts {
    #[allow(dead_code)]
    pub fn info(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.push(ToastKind::Info, title, body);
    }

    pub fn error(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.push(ToastKind::Error, title, body);
    }

    fn push(&mut self, kind: ToastKind, title: impl Into<String>, body: impl Into<String>) {
        self.queue.push(Toast {
            title: title.into(),
            body: body.into(),
            kind,
            born: app_seconds(),
        });
        if self.queue.len() > MAX_STACK {
            self.queue.remove(0);
        }
    }

    fn prune(&mut self, now: f64) {
        self.queue.retain(|t| now - t.born < TOAST_TTL);
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.prune(app_seconds());
        if self.queue.is_empty() {
            return;
        }

        let mut dismissed: Option<usize> = None;
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for (i, toast) in self.queue.iter().enumerate() {
                    let accent = match toast.kind {
                        ToastKind::Info => colors::TEXT_ACCENT,
                        ToastKind::Error => colors::ERROR,
                    };
                    let response = egui::Frame::new()
                        .fill(colors::PANEL_RAISED)
                        .stroke(egui::Stroke::new(1.0, accent))
                        .corner_radius(4.0)
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.set_max_width(320.0);
                            ui.label(egui::RichText::new(&toast.title).color(accent).strong());
                            ui.label(
                                egui::RichText::new(&toast.body)
                                    .color(colors::TEXT_PRIMARY)
                                    .size(12.0),
                            );
                        })
                        .response;
                    if response.interact(egui::Sense::click()).clicked() {
                        dismissed = Some(i);
                    }
                    ui.add_space(6.0);
                }
            });

        if let Some(i) = dismissed {
            self.queue.remove(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_expire_after_ttl() {
        let mut toasts = Toasts::default();
        toasts.error("Error", "something broke");
        toasts.info("Note", "something happened");
        assert_eq!(toasts.queue.len(), 2);

        let now = toasts.queue[0].born;
        toasts.prune(now + TOAST_TTL / 2.0);
        assert_eq!(toasts.queue.len(), 2);

        toasts.prune(now + TOAST_TTL + 1.0);
        assert!(toasts.queue.is_empty());
    }

    #[test]
    fn stack_depth_is_bounded() {
        let mut toasts = Toasts::default();
        for i in 0..10 {
            toasts.error("Error", format!("number {i}"));
        }
        assert_eq!(toasts.queue.len(), MAX_STACK);
        assert_eq!(toasts.queue.last().map(|t| t.body.as_str()), Some("number 9"));
    }
}
