#![forbid(unsafe_code)]

//! Runtime configuration for the landing page.
//!
//! Loaded in three layers: defaults, an optional TOML file, then `NDL_*`
//! environment variables. The result is checked with
//! [`LandingConfig::validate`].
//!
//! ```toml
//! locale = "en"
//!
//! [carousel]
//! page_size = 3
//! transition_ms = 300
//!
//! [statistics]
//! duration_ms = 2000
//!
//! [runtime]
//! frame_interval_ms = 16
//! poll_timeout_ms = 100
//! alt_screen = true
//!
//! [logging]
//! filter = "ndl_landing=debug,info"
//! file = "ndl-landing.log"
//! json = false
//! ```

use std::path::{Path, PathBuf};

use ndl_i18n::Locale;
use serde::Deserialize;
use web_time::Duration;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "NDL_CONFIG";

/// Errors raised while loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading the file.
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// TOML parse error.
    Toml(toml::de::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::Validation(errors) => write!(f, "validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Toml(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LandingConfig {
    /// Initial interface language tag (`en` or `fr`).
    pub locale: String,
    /// Latest-additions carousel.
    pub carousel: CarouselConfig,
    /// Statistics count-up.
    pub statistics: StatisticsConfig,
    /// Host loop.
    pub runtime: RuntimeConfig,
    /// Log output.
    pub logging: LoggingConfig,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default().tag().to_string(),
            carousel: CarouselConfig::default(),
            statistics: StatisticsConfig::default(),
            runtime: RuntimeConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Carousel parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Cards per page.
    pub page_size: usize,
    /// How long the grid stays dimmed after navigation.
    pub transition_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            page_size: 4,
            transition_ms: 300,
        }
    }
}

/// Count-up parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatisticsConfig {
    /// Animation length.
    pub duration_ms: u64,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self { duration_ms: 2000 }
    }
}

/// Host loop parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Delay between animation frames.
    pub frame_interval_ms: u64,
    /// Upper bound on one input poll.
    pub poll_timeout_ms: u64,
    /// Draw on the alternate screen.
    pub alt_screen: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            poll_timeout_ms: 100,
            alt_screen: true,
        }
    }
}

/// Log output parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directives; `RUST_LOG` takes precedence.
    pub filter: String,
    /// Log file. Without one, logs are discarded.
    pub file: Option<PathBuf>,
    /// Emit JSON lines instead of text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: None,
            json: false,
        }
    }
}

impl LandingConfig {
    /// Parse a TOML document. Missing fields keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Full load: file (if any), environment overrides, validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_toml_file(p)?,
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok());
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Apply `NDL_*` overrides read through `lookup`.
    ///
    /// Unparseable numbers are ignored and the previous value kept.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("NDL_LOCALE") {
            self.locale = v;
        }
        if let Some(v) = lookup("NDL_PAGE_SIZE").and_then(|v| v.trim().parse().ok()) {
            self.carousel.page_size = v;
        }
        if let Some(v) = lookup("NDL_TRANSITION_MS").and_then(|v| v.trim().parse().ok()) {
            self.carousel.transition_ms = v;
        }
        if let Some(v) = lookup("NDL_COUNT_UP_MS").and_then(|v| v.trim().parse().ok()) {
            self.statistics.duration_ms = v;
        }
        if let Some(v) = lookup("NDL_FRAME_MS").and_then(|v| v.trim().parse().ok()) {
            self.runtime.frame_interval_ms = v;
        }
        if let Some(v) = lookup("NDL_POLL_MS").and_then(|v| v.trim().parse().ok()) {
            self.runtime.poll_timeout_ms = v;
        }
        if let Some(v) = lookup("NDL_ALT_SCREEN") {
            self.runtime.alt_screen = is_truthy(&v);
        }
        if let Some(v) = lookup("NDL_LOG") {
            self.logging.filter = v;
        }
        if let Some(v) = lookup("NDL_LOG_FILE") {
            self.logging.file = if v.is_empty() { None } else { Some(PathBuf::from(v)) };
        }
        if let Some(v) = lookup("NDL_LOG_JSON") {
            self.logging.json = is_truthy(&v);
        }
    }

    /// Check every parameter. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if let Err(e) = self.locale.parse::<Locale>() {
            errors.push(format!("locale: {e}"));
        }
        if self.carousel.page_size == 0 {
            errors.push("carousel.page_size must be > 0".into());
        }
        if self.statistics.duration_ms == 0 {
            errors.push("statistics.duration_ms must be > 0".into());
        }
        if self.runtime.frame_interval_ms == 0 || self.runtime.frame_interval_ms > 1000 {
            errors.push(format!(
                "runtime.frame_interval_ms must be in (0, 1000], got {}",
                self.runtime.frame_interval_ms
            ));
        }
        if self.runtime.poll_timeout_ms == 0 {
            errors.push("runtime.poll_timeout_ms must be > 0".into());
        }

        errors
    }

    /// The configured locale, falling back to the default when invalid.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale.parse().unwrap_or_default()
    }

    /// Carousel transition delay.
    #[must_use]
    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.carousel.transition_ms)
    }

    /// Count-up duration.
    #[must_use]
    pub fn count_up_duration(&self) -> Duration {
        Duration::from_millis(self.statistics.duration_ms)
    }

    /// Delay between animation frames.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.runtime.frame_interval_ms)
    }

    /// Upper bound on one input poll.
    #[must_use]
    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.runtime.poll_timeout_ms)
    }
}

fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// Config file path: first CLI argument, else `NDL_CONFIG`.
#[must_use]
pub fn config_path(args: &[String], env: Option<String>) -> Option<PathBuf> {
    args.first()
        .map(PathBuf::from)
        .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
}
