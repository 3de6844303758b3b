use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Application-level constants
pub const APP_NAME: &str = "Matrubot";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default user store file, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "users.json";

/// Default listen address for the local API.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8501";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "matrubot=info,matrubot_lib=info,tower_http=warn"
}

/// Who may read the hospital dashboard.
///
/// `Open` exposes every user's full history to anyone who can reach the
/// API. It is the behavior existing deployments rely on, so it stays the
/// default, but startup logs a warning while it is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAccess {
    Open,
    LoggedIn,
}

impl std::str::FromStr for DashboardAccess {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "logged-in" => Ok(Self::LoggedIn),
            other => Err(format!("Unknown dashboard access policy: {other}")),
        }
    }
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub store_path: PathBuf,
    pub report_dir: PathBuf,
    pub addr: SocketAddr,
    pub greeting_delay: Duration,
    pub dashboard_access: DashboardAccess,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            report_dir: PathBuf::from("."),
            addr: SocketAddr::from(([127, 0, 0, 1], 8501)),
            greeting_delay: crate::greeting::DEFAULT_DELAY,
            dashboard_access: DashboardAccess::Open,
        }
    }
}

impl Config {
    /// Defaults, overridden by `MATRUBOT_STORE`, `MATRUBOT_REPORT_DIR`,
    /// `MATRUBOT_ADDR` and `MATRUBOT_DASHBOARD` when set.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut config = Self::default();

        if let Some(path) = lookup("MATRUBOT_STORE") {
            config.store_path = PathBuf::from(path);
        }
        if let Some(dir) = lookup("MATRUBOT_REPORT_DIR") {
            config.report_dir = PathBuf::from(dir);
        }
        if let Some(addr) = lookup("MATRUBOT_ADDR") {
            config.addr = addr
                .parse()
                .map_err(|e| format!("Invalid MATRUBOT_ADDR {addr:?}: {e}"))?;
        }
        if let Some(policy) = lookup("MATRUBOT_DASHBOARD") {
            config.dashboard_access = policy.parse()?;
        }

        Ok(config)
    }
}
