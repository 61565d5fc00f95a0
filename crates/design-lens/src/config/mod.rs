mod theme;

pub use theme::ThemeConfig;

use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scan: ScanTiming,
    pub sessions: SessionRetention,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = ScanTiming::default();
        let scan = ScanTiming {
            principle_dwell: millis_from_env("APP_SCAN_DWELL_MS", defaults.principle_dwell)?,
            completion_pause: millis_from_env("APP_SCAN_PAUSE_MS", defaults.completion_pause)?,
            scoring_delay: millis_from_env("APP_SCORING_DELAY_MS", defaults.scoring_delay)?,
        };

        let retention = SessionRetention::default();
        let sessions = SessionRetention {
            idle_timeout: millis_from_env("APP_SESSION_IDLE_MS", retention.idle_timeout)?,
            sweep_interval: millis_from_env("APP_SESSION_SWEEP_MS", retention.sweep_interval)?,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            scan,
            sessions,
        })
    }
}

fn millis_from_env(key: &'static str, default: Duration) -> Result<Duration, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidDuration { key }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Waits that pace the analyzing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTiming {
    /// How long each selected principle is shown as "currently scanning".
    pub principle_dwell: Duration,
    /// Pause after the last principle before results appear.
    pub completion_pause: Duration,
    /// Delay before scoring starts, running alongside the animation.
    pub scoring_delay: Duration,
}

impl Default for ScanTiming {
    fn default() -> Self {
        Self {
            principle_dwell: Duration::from_millis(1_200),
            completion_pause: Duration::from_millis(500),
            scoring_delay: Duration::from_millis(100),
        }
    }
}

impl ScanTiming {
    /// No waits at all, for batch runs and tests that don't care about pacing.
    pub const fn instant() -> Self {
        Self {
            principle_dwell: Duration::ZERO,
            completion_pause: Duration::ZERO,
            scoring_delay: Duration::ZERO,
        }
    }

    /// Length of the animation for `principles` selected principles.
    pub fn animation_for(&self, principles: usize) -> Duration {
        self.principle_dwell * principles as u32 + self.completion_pause
    }

    /// Earliest point results can appear: the animation or the scoring delay, whichever is longer.
    pub fn total_for(&self, principles: usize) -> Duration {
        self.animation_for(principles).max(self.scoring_delay)
    }
}

/// How long HTTP sessions may sit untouched before the sweep drops them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionRetention {
    pub idle_timeout: Duration,
    pub sweep_interval: Duration,
}

impl Default for SessionRetention {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(30 * 60),
            sweep_interval: Duration::from_secs(60),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidDuration { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidDuration { key } => {
                write!(f, "{key} must be a whole number of milliseconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidDuration { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
