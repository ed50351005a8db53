/// API route configuration
pub struct ApiConfig {
    // When empty, the SPA assumes same-origin and builds relative REST URLs
    // ("/api/...").
    base_url: String,
}

impl Default for ApiConfig {
    /// Same-origin configuration.  Used by unit tests and by start-up phases
    /// that run before `init_api_config()`.
    fn default() -> Self {
        Self {
            base_url: String::new(),
        }
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from the API_BASE_URL environment variable
    /// captured at compile time.  Missing → same-origin.
    pub fn new() -> Self {
        Self::from_url(option_env!("API_BASE_URL").unwrap_or(""))
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full API URL for a path such as `/users/me`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}/api{}", self.base_url, path)
        } else {
            format!("{}/api/{}", self.base_url, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_rooted_under_api() {
        let cfg = ApiConfig::from_url("https://metrilive.example.com/");
        assert_eq!(cfg.base_url(), "https://metrilive.example.com");
        assert_eq!(
            cfg.url("/users/me"),
            "https://metrilive.example.com/api/users/me"
        );
        assert_eq!(cfg.url("users"), "https://metrilive.example.com/api/users");
    }

    #[test]
    fn default_is_same_origin() {
        assert_eq!(ApiConfig::default().url("/dashboard/metrics"), "/api/dashboard/metrics");
    }
}
