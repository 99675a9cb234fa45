//! The examforge application shell
//!
//! Router, the one-shot navigation hand-off, and the frame loop that paints
//! the backdrop behind whichever screen is active.

mod cie_setup;
mod dashboard;
mod generate;
mod header;
mod selection;
mod semester_setup;

use eframe::egui;
use tracing::info;

use crate::auth::AuthContext;
use crate::backdrop::Backdrop;
use crate::config::AppConfig;
use crate::exam::types::{ExamSelection, ExamType, PaperPlan};
use crate::theme::{colors, night_visuals};
use crate::toast::Toasts;

/// Screens reachable by navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Selection,
    CieSetup,
    SemesterSetup,
    Generate,
}

impl Route {
    /// Downstream setup screen for an exam type.
    pub fn setup_for(exam_type: ExamType) -> Route {
        match exam_type {
            ExamType::Cie => Route::CieSetup,
            ExamType::See => Route::SemesterSetup,
        }
    }

    pub(crate) fn title(&self) -> &'static str {
        match self {
            Route::Login => "Sign In",
            Route::Dashboard => "Dashboard",
            Route::Selection => "Select Exam Type",
            Route::CieSetup => "CIE Exam Configuration",
            Route::SemesterSetup => "Semester Exam Configuration",
            Route::Generate => "Generate Question Paper",
        }
    }

    /// Where the header back control leads; None hides it.
    pub(crate) fn back_target(&self) -> Option<Route> {
        match self {
            Route::Login | Route::Dashboard => None,
            Route::Selection | Route::CieSetup | Route::SemesterSetup | Route::Generate => {
                Some(Route::Dashboard)
            }
        }
    }
}

/// State carried alongside a navigation. The slot is read-once: taking it
/// empties it, and a downstream screen finding it empty redirects upstream.
#[derive(Clone, Debug, PartialEq)]
pub enum Handoff {
    Selection(ExamSelection),
    Plan(PaperPlan),
}

/// Current route plus the single hand-off slot.
pub struct Router {
    route: Route,
    handoff: Option<Handoff>,
}

impl Router {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            handoff: None,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn go(&mut self, route: Route) {
        info!(from = ?self.route, to = ?route, "Navigate");
        self.route = route;
        self.handoff = None;
    }

    pub fn go_with(&mut self, route: Route, handoff: Handoff) {
        info!(from = ?self.route, to = ?route, "Navigate with state");
        self.route = route;
        self.handoff = Some(handoff);
    }

    /// Take the carried state; a second read returns None.
    pub fn take_handoff(&mut self) -> Option<Handoff> {
        self.handoff.take()
    }
}

/// Decision taken before a setup form renders.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum EntryGuard {
    RedirectLogin,
    RedirectDashboard,
    Proceed(ExamSelection),
}

pub(crate) fn setup_entry_guard(authenticated: bool, handoff: Option<Handoff>) -> EntryGuard {
    if !authenticated {
        return EntryGuard::RedirectLogin;
    }
    match handoff {
        Some(Handoff::Selection(selection)) => EntryGuard::Proceed(selection),
        _ => EntryGuard::RedirectDashboard,
    }
}

pub struct ExamForgeApp {
    config: AppConfig,
    auth: AuthContext,
    router: Router,
    backdrop: Backdrop,
    toasts: Toasts,
    fps_counter: header::FpsCounter,
    /// Per-route screen state; only the active route's slot is Some.
    selection: Option<selection::SelectionScreen>,
    cie: Option<cie_setup::CieSetupScreen>,
    semester: Option<semester_setup::SemesterSetupScreen>,
    generate: Option<generate::GenerateScreen>,
}

impl ExamForgeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        cc.egui_ctx.set_visuals(night_visuals());

        let auth = AuthContext::from_profile_file(config.profile_path.as_deref());
        let start = if auth.is_authenticated() {
            Route::Dashboard
        } else {
            Route::Login
        };

        Self {
            config,
            auth,
            router: Router::new(start),
            backdrop: Backdrop::new(),
            toasts: Toasts::default(),
            fps_counter: header::FpsCounter::new(),
            selection: None,
            cie: None,
            semester: None,
            generate: None,
        }
    }

    /// Navigate and remount the destination screen; every visit starts
    /// fresh, and the selection screen re-fetches the catalog on each one.
    pub(crate) fn navigate(&mut self, route: Route) {
        self.router.go(route);
        self.mount_route();
    }

    pub(crate) fn navigate_with(&mut self, route: Route, handoff: Handoff) {
        self.router.go_with(route, handoff);
        self.mount_route();
    }

    /// (Re)build local state for the screen the router now points at,
    /// running entry guards before any form state exists.
    fn mount_route(&mut self) {
        self.selection = None;
        self.cie = None;
        self.semester = None;
        self.generate = None;

        match self.router.route() {
            Route::Login | Route::Dashboard => {}
            Route::Selection => {
                self.selection = Some(selection::SelectionScreen::open(&self.config, &self.auth));
            }
            Route::CieSetup => {
                match setup_entry_guard(self.auth.is_authenticated(), self.router.take_handoff()) {
                    EntryGuard::RedirectLogin => self.navigate(Route::Login),
                    EntryGuard::RedirectDashboard => {
                        self.toasts.error("Error", "No exam configuration provided");
                        self.navigate(Route::Dashboard);
                    }
                    EntryGuard::Proceed(exam) => {
                        self.cie = Some(cie_setup::CieSetupScreen::open(exam));
                    }
                }
            }
            Route::SemesterSetup => {
                match setup_entry_guard(self.auth.is_authenticated(), self.router.take_handoff()) {
                    EntryGuard::RedirectLogin => self.navigate(Route::Login),
                    EntryGuard::RedirectDashboard => {
                        self.toasts.error("Error", "No exam configuration provided");
                        self.navigate(Route::Dashboard);
                    }
                    EntryGuard::Proceed(exam) => {
                        self.semester = Some(semester_setup::SemesterSetupScreen::open(exam));
                    }
                }
            }
            Route::Generate => match self.router.take_handoff() {
                Some(Handoff::Plan(plan)) => {
                    self.generate = Some(generate::GenerateScreen::open(plan));
                }
                _ => {
                    self.toasts.error("Error", "No paper plan provided");
                    self.navigate(Route::Dashboard);
                }
            },
        }
    }
}

/// Shared card styling for the screen panels.
pub(crate) fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::PANEL.gamma_multiply(0.92))
        .stroke(egui::Stroke::new(1.0, colors::BORDER))
        .corner_radius(6.0)
        .inner_margin(16.0)
}

impl eframe::App for ExamForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The backdrop animates every frame.
        ctx.request_repaint();

        self.poll_courses();

        let screen_rect = ctx.screen_rect();
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Background,
            egui::Id::new("backdrop"),
        ));
        self.backdrop
            .paint(&painter, screen_rect, ctx.pixels_per_point());

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(colors::PANEL.gamma_multiply(0.88))
                    .inner_margin(8.0),
            )
            .show(ctx, |ui| self.render_header(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| match self.router.route() {
                Route::Login => self.render_login(ui),
                Route::Dashboard => self.render_dashboard(ui),
                Route::Selection => self.render_selection(ui),
                Route::CieSetup => self.render_cie_setup(ui),
                Route::SemesterSetup => self.render_semester_setup(ui),
                Route::Generate => self.render_generate(ui),
            });

        self.toasts.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exam::types::Semester;

    fn selection() -> ExamSelection {
        ExamSelection {
            exam_type: ExamType::Cie,
            semester: Semester::new(3).unwrap(),
            course: "CS301".into(),
        }
    }

    #[test]
    fn setup_route_keyed_by_exam_type() {
        assert_eq!(Route::setup_for(ExamType::Cie), Route::CieSetup);
        assert_eq!(Route::setup_for(ExamType::See), Route::SemesterSetup);
    }

    #[test]
    fn handoff_is_read_once() {
        let mut router = Router::new(Route::Dashboard);
        router.go_with(Route::CieSetup, Handoff::Selection(selection()));

        assert_eq!(router.route(), Route::CieSetup);
        assert_eq!(router.take_handoff(), Some(Handoff::Selection(selection())));
        assert_eq!(router.take_handoff(), None);
    }

    #[test]
    fn plain_navigation_clears_stale_handoff() {
        let mut router = Router::new(Route::Dashboard);
        router.go_with(Route::CieSetup, Handoff::Selection(selection()));
        router.go(Route::Dashboard);
        router.go(Route::CieSetup);
        assert_eq!(router.take_handoff(), None);
    }

    #[test]
    fn guard_redirects_unauthenticated_first() {
        let guard = setup_entry_guard(false, Some(Handoff::Selection(selection())));
        assert_eq!(guard, EntryGuard::RedirectLogin);
    }

    #[test]
    fn guard_redirects_on_missing_state() {
        assert_eq!(setup_entry_guard(true, None), EntryGuard::RedirectDashboard);
    }

    #[test]
    fn guard_rejects_mismatched_handoff() {
        let plan = PaperPlan {
            exam: selection(),
            questions: crate::exam::default_question_configs(),
            per_section: 5,
        };
        assert_eq!(
            setup_entry_guard(true, Some(Handoff::Plan(plan))),
            EntryGuard::RedirectDashboard
        );
    }

    #[test]
    fn guard_passes_the_carried_selection_through() {
        let guard = setup_entry_guard(true, Some(Handoff::Selection(selection())));
        assert_eq!(guard, EntryGuard::Proceed(selection()));
    }

    #[test]
    fn back_targets() {
        assert_eq!(Route::Login.back_target(), None);
        assert_eq!(Route::Dashboard.back_target(), None);
        assert_eq!(Route::CieSetup.back_target(), Some(Route::Dashboard));
        assert_eq!(Route::Generate.back_target(), Some(Route::Dashboard));
    }
}
