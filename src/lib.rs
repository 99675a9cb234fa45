//! examforge: exam question paper setup flows
//!
//! Two user-facing flows over an animated network-grid backdrop:
//! - exam type / semester / course selection (catalog fetched over HTTP)
//! - CIE per-question setup with per-section mark validation

pub mod app;
pub mod auth;
pub mod backdrop;
pub mod config;
pub mod courses;
pub mod exam;
pub mod theme;
pub mod time;
pub mod toast;

pub use app::ExamForgeApp;
pub use config::AppConfig;
