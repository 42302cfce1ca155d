use std::env;

/// Client-side configuration. The backend base URL is the only required
/// piece of environment; everything else has a default.
#[derive(Debug, Clone)]
pub struct DeskConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl DeskConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        // Try to load .env file if it exists (ignore if it doesn't)
        let _ = dotenvy::dotenv();

        let base_url = env::var("DESK_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());

        let timeout_seconds = env::var("DESK_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_seconds,
        }
    }

    /// Create a configuration with an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_strips_trailing_slash() {
        let config = DeskConfig::new("http://desk.example.com/");
        assert_eq!(config.base_url, "http://desk.example.com");
    }

    #[test]
    fn default_points_at_localhost() {
        let config = DeskConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_seconds, 30);
    }
}
