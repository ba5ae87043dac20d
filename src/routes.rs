//! Client-side route table — the six paths the application exposes.

/// One client route. `ReportDetail` carries the record id from the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    SymptomChecker,
    UploadRecords,
    Reports,
    ReportDetail { record_id: String },
    Chat,
}

impl Route {
    /// Parse a location path. Unknown paths yield `None` (no 404 route
    /// exists; the host decides what to do).
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim_end_matches('/');
        match path {
            "" => Some(Route::Home),
            "/symptom-checker" => Some(Route::SymptomChecker),
            "/upload-records" => Some(Route::UploadRecords),
            "/reports" => Some(Route::Reports),
            "/chat" => Some(Route::Chat),
            _ => {
                let record_id = path.strip_prefix("/reports/")?;
                if record_id.is_empty() || record_id.contains('/') {
                    return None;
                }
                Some(Route::ReportDetail {
                    record_id: record_id.to_string(),
                })
            }
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::SymptomChecker => "/symptom-checker".to_string(),
            Route::UploadRecords => "/upload-records".to_string(),
            Route::Reports => "/reports".to_string(),
            Route::ReportDetail { record_id } => format!("/reports/{record_id}"),
            Route::Chat => "/chat".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_routes_round_trip() {
        for (path, route) in [
            ("/", Route::Home),
            ("/symptom-checker", Route::SymptomChecker),
            ("/upload-records", Route::UploadRecords),
            ("/reports", Route::Reports),
            ("/chat", Route::Chat),
        ] {
            assert_eq!(Route::parse(path), Some(route.clone()));
            // "/" normalizes back to itself, others are exact.
            assert_eq!(Route::parse(&route.to_path()), Some(route));
        }
    }

    #[test]
    fn report_detail_captures_record_id() {
        let route = Route::parse("/reports/rec-42").unwrap();
        assert_eq!(
            route,
            Route::ReportDetail {
                record_id: "rec-42".into()
            }
        );
        assert_eq!(route.to_path(), "/reports/rec-42");
    }

    #[test]
    fn unknown_paths_do_not_parse() {
        assert_eq!(Route::parse("/settings"), None);
        assert_eq!(Route::parse("/reports/a/b"), None);
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Route::parse("/reports/"), Some(Route::Reports));
        assert_eq!(Route::parse("/chat/"), Some(Route::Chat));
    }
}
