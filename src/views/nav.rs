//! Top navigation bar links.

use serde::Serialize;

use crate::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: String,
    pub active: bool,
}

/// The primary nav, with the link matching the current route marked
/// active. Record detail highlights nothing (no nav entry of its own).
pub fn primary_nav(current: &Route) -> Vec<NavLink> {
    [
        ("Home", Route::Home),
        ("Symptom Checker", Route::SymptomChecker),
        ("Upload Records", Route::UploadRecords),
        ("My Reports", Route::Reports),
        ("Health Chat", Route::Chat),
    ]
    .into_iter()
    .map(|(label, route)| NavLink {
        label,
        path: route.to_path(),
        active: route == *current,
    })
    .collect()
}
