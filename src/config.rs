use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Environment
    pub environment: String,

    // Server
    pub host: String,
    pub port: u16,

    // Backend API
    /// Base URL of the backend API; empty means same origin as this site
    pub backend_url: String,
    /// Origin of this site, used as the API base when `backend_url` is empty
    pub public_origin: String,
    pub request_timeout_secs: u64,

    // Content
    pub news_limit: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", value))?,
            Err(_) => 8080,
        };

        Ok(Self {
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),

            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,

            backend_url: std::env::var("BACKEND_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or_default(),
            public_origin: std::env::var("PUBLIC_ORIGIN")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|_| format!("http://127.0.0.1:{}", port)),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),

            news_limit: std::env::var("NEWS_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|limit| *limit > 0)
                .unwrap_or(10),
        })
    }

    /// Base URL the API client prefixes to every request path.
    pub fn api_base_url(&self) -> &str {
        if self.backend_url.is_empty() {
            &self.public_origin
        } else {
            &self.backend_url
        }
    }

    /// Address the HTTP server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 7] = [
        "ENVIRONMENT",
        "HOST",
        "PORT",
        "BACKEND_URL",
        "PUBLIC_ORIGIN",
        "REQUEST_TIMEOUT_SECS",
        "NEWS_LIMIT",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().expect("defaults should load");
        assert_eq!(config.environment, "development");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.backend_url, "");
        assert_eq!(config.public_origin, "http://127.0.0.1:8080");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.news_limit, 10);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    #[serial]
    fn test_empty_backend_url_means_same_origin() {
        clear_env();
        std::env::set_var("PORT", "3000");

        let config = Config::from_env().expect("should load");
        assert_eq!(config.api_base_url(), "http://127.0.0.1:3000");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_backend_url_trailing_slash_trimmed() {
        clear_env();
        std::env::set_var("BACKEND_URL", "https://api.example.com/");

        let config = Config::from_env().expect("should load");
        assert_eq!(config.api_base_url(), "https://api.example.com");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_an_error() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PORT"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_optional_values_fall_back() {
        clear_env();
        std::env::set_var("REQUEST_TIMEOUT_SECS", "soon");
        std::env::set_var("NEWS_LIMIT", "0");

        let config = Config::from_env().expect("should load");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.news_limit, 10);

        clear_env();
    }
}
