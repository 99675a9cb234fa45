//! Course catalog client
//!
//! One background thread per request performs the blocking HTTP call and
//! delivers the decoded result over a channel; the UI loop polls the
//! receiver each frame. One request per screen visit, no retry.

use std::sync::mpsc::{self, Receiver};
use tracing::{error, info};

use crate::exam::types::{Course, CourseList};

/// Catalog fetch lifecycle for one selection-screen visit.
#[derive(Clone, Debug)]
pub enum FetchState {
    Loading,
    Loaded,
    Failed(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// An in-flight catalog request.
pub struct CourseRequest {
    rx: Receiver<Result<Vec<Course>, String>>,
}

impl CourseRequest {
    /// Start fetching `{base_url}/courses` on a background thread.
    pub fn spawn(base_url: &str) -> Self {
        let (tx, rx) = mpsc::channel();
        let url = format!("{}/courses", base_url.trim_end_matches('/'));

        std::thread::spawn(move || {
            info!(url = %url, "Fetching course catalog");
            let result = fetch_courses(&url);
            match &result {
                Ok(catalog) => info!(count = catalog.len(), "Course catalog fetched"),
                Err(e) => error!(error = %e, "Course catalog fetch failed"),
            }
            // Receiver may be gone if the user already navigated away.
            let _ = tx.send(result);
        });

        Self { rx }
    }

    /// Non-blocking poll; Some once the request has finished.
    pub fn poll(&self) -> Option<Result<Vec<Course>, String>> {
        self.rx.try_recv().ok()
    }
}

fn fetch_courses(url: &str) -> Result<Vec<Course>, String> {
    let body = ureq::get(url)
        .call()
        .map_err(|e| format!("request failed: {e}"))?
        .into_body()
        .read_to_string()
        .map_err(|e| format!("failed to read response: {e}"))?;
    decode_catalog(&body)
}

/// Decode the catalog payload `{ "data": [Course] }`.
pub fn decode_catalog(body: &str) -> Result<Vec<Course>, String> {
    let list: CourseList =
        serde_json::from_str(body).map_err(|e| format!("invalid catalog payload: {e}"))?;
    Ok(list.data)
}

/// Restrict the catalog to the user's entitled course ids. An empty
/// entitlement list offers the full catalog.
pub fn filter_entitled(catalog: Vec<Course>, entitled: &[String]) -> Vec<Course> {
    if entitled.is_empty() {
        return catalog;
    }
    catalog
        .into_iter()
        .filter(|course| entitled.contains(&course.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, name: &str, code: &str) -> Course {
        Course {
            id: id.into(),
            name: name.into(),
            code: code.into(),
        }
    }

    #[test]
    fn decode_catalog_with_upstream_id_spelling() {
        let body = r#"{
            "data": [
                {"_id": "c1", "name": "Operating Systems", "code": "CS301"},
                {"_id": "c2", "name": "Computer Networks", "code": "CS305"}
            ]
        }"#;

        let catalog = decode_catalog(body).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].id, "c1");
        assert_eq!(catalog[1].code, "CS305");
    }

    #[test]
    fn decode_catalog_rejects_malformed_payload() {
        assert!(decode_catalog("not json").is_err());
        assert!(decode_catalog(r#"{"data": "nope"}"#).is_err());
    }

    #[test]
    fn empty_entitlements_offer_everything() {
        let catalog = vec![course("c1", "OS", "CS301"), course("c2", "CN", "CS305")];
        let offered = filter_entitled(catalog.clone(), &[]);
        assert_eq!(offered, catalog);
    }

    #[test]
    fn entitlements_filter_by_course_id() {
        let catalog = vec![
            course("c1", "OS", "CS301"),
            course("c2", "CN", "CS305"),
            course("c3", "DB", "CS310"),
        ];
        let entitled = vec!["c3".to_string(), "c1".to_string()];

        let offered = filter_entitled(catalog, &entitled);
        let ids: Vec<&str> = offered.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c3"]);
    }

    #[test]
    fn unknown_entitlements_offer_nothing() {
        let catalog = vec![course("c1", "OS", "CS301")];
        let offered = filter_entitled(catalog, &["missing".to_string()]);
        assert!(offered.is_empty());
    }
}
