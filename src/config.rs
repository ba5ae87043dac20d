/// Application-level constants
pub const APP_NAME: &str = "HealthSense AI";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV: &str = "HEALTHSENSE_API_URL";

/// Default backend base URL when the environment provides none.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

/// Resolve the backend base URL: environment override, else default.
/// An empty or whitespace-only override is treated as unset.
pub fn api_base_url() -> String {
    match std::env::var(API_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_API_URL.to_string(),
    }
}

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "info,healthsense=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_points_at_local_api_v1() {
        assert_eq!(DEFAULT_API_URL, "http://localhost:8000/api/v1");
    }

    #[test]
    fn app_name_is_healthsense() {
        assert_eq!(APP_NAME, "HealthSense AI");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_enables_crate_debug() {
        assert!(default_log_filter().contains("healthsense=debug"));
    }
}
