//! Auth context collaborator
//!
//! examforge does not authenticate anyone itself. A signed-in profile is
//! supplied from outside: a JSON file named by EXAMFORGE_PROFILE at startup,
//! or the login screen's local demo session.

use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

use crate::exam::types::Semester;

/// The signed-in user as supplied by the institution's auth service.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub semester: Option<Semester>,
    /// Entitled course ids; empty means the full catalog is offered.
    #[serde(default)]
    pub courses: Vec<String>,
}

#[derive(Default)]
pub struct AuthContext {
    user: Option<UserProfile>,
}

impl AuthContext {
    /// Load the optional startup profile. A missing or unreadable file means
    /// starting unauthenticated, never a startup failure.
    pub fn from_profile_file(path: Option<&Path>) -> Self {
        let user = path.and_then(|p| match load_profile(p) {
            Ok(user) => {
                info!(name = %user.name, "Profile loaded");
                Some(user)
            }
            Err(e) => {
                warn!(path = %p.display(), error = %e, "Could not load profile");
                None
            }
        });
        Self { user }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn current_user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn sign_in(&mut self, user: UserProfile) {
        info!(name = %user.name, "Signed in");
        self.user = Some(user);
    }

    #[allow(dead_code)]
    pub fn sign_out(&mut self) {
        self.user = None;
    }
}

fn load_profile(path: &Path) -> Result<UserProfile, String> {
    let body = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&body).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_decodes_with_semester_and_entitlements() {
        let body = r#"{
            "name": "A. Examiner",
            "semester": 4,
            "courses": ["c-101", "c-202"]
        }"#;

        let profile: UserProfile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.name, "A. Examiner");
        assert_eq!(profile.semester, Semester::new(4));
        assert_eq!(profile.courses, vec!["c-101", "c-202"]);
    }

    #[test]
    fn profile_fields_default_when_absent() {
        let profile: UserProfile = serde_json::from_str(r#"{"name": "B"}"#).unwrap();
        assert_eq!(profile.semester, None);
        assert!(profile.courses.is_empty());
    }

    #[test]
    fn out_of_range_semester_is_rejected() {
        let result = serde_json::from_str::<UserProfile>(r#"{"name": "C", "semester": 9}"#);
        assert!(result.is_err());
    }

    #[test]
    fn context_tracks_sign_in() {
        let mut auth = AuthContext::default();
        assert!(!auth.is_authenticated());

        auth.sign_in(UserProfile {
            name: "Demo".into(),
            semester: None,
            courses: Vec::new(),
        });
        assert!(auth.is_authenticated());
        assert_eq!(auth.current_user().map(|u| u.name.as_str()), Some("Demo"));

        auth.sign_out();
        assert!(!auth.is_authenticated());
    }
}
