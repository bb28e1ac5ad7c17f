use crashlens::OrchestratorConfig;
use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Prediction backend host (e.g., "127.0.0.1" or "api.example.com")
    pub api_host: String,

    /// Prediction backend port (e.g., 5000)
    pub api_port: u16,

    /// API path prefix, empty when the endpoints sit at the root
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Request timeout in milliseconds
    pub request_timeout_ms: u32,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "127.0.0.1".to_string(),
            api_port: 5000,
            api_path: String::new(),
            api_use_https: false,
            log_level: Level::Info,
            request_timeout_ms: 30000,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                let read = |key: &str| storage.get_item(key).ok().flatten();
                settings.apply_overrides(read);
            }
        }

        settings
    }

    /// Applies `crashlens_*` overrides; unparsable values are ignored
    fn apply_overrides<F>(&mut self, read: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_host) = read("crashlens_api_host") {
            self.api_host = api_host;
        }

        if let Some(port_val) = read("crashlens_api_port").and_then(|v| v.parse::<u16>().ok()) {
            self.api_port = port_val;
        }

        if let Some(api_path) = read("crashlens_api_path") {
            self.api_path = api_path;
        }

        if let Some(use_https) = read("crashlens_api_use_https") {
            self.api_use_https = use_https.to_lowercase() == "true";
        }

        if let Some(log_level) = read("crashlens_log_level") {
            self.log_level = match log_level.to_lowercase().as_str() {
                "error" => Level::Error,
                "warn" => Level::Warn,
                "info" => Level::Info,
                "debug" => Level::Debug,
                "trace" => Level::Trace,
                _ => self.log_level,
            };
        }

        if let Some(timeout_val) =
            read("crashlens_request_timeout_ms").and_then(|v| v.parse::<u32>().ok())
        {
            self.request_timeout_ms = timeout_val;
        }
    }

    /// Get the base API URL (protocol + host + port + path)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }

    pub fn orchestrator_config(&self) -> OrchestratorConfig {
        OrchestratorConfig {
            request_timeout_ms: u64::from(self.request_timeout_ms),
            ..OrchestratorConfig::default()
        }
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
