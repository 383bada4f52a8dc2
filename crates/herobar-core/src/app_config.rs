use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub pages_path: PathBuf,
    /// Display name for the wired location, substituted for `[location]`.
    pub location_name: Option<String>,
    /// Site-wide phone number for the wired location.
    pub site_phone: Option<String>,
}

impl AppConfig {
    /// True when either location field is configured, meaning a static
    /// location provider should be wired instead of the null one.
    #[must_use]
    pub fn has_location(&self) -> bool {
        self.location_name.is_some() || self.site_phone.is_some()
    }
}
