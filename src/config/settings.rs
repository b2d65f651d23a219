use std::path::PathBuf;

use log::warn;

pub const OUTPUT_DIR_VAR: &str = "PLAYOFF_SITE_OUTPUT_DIR";
pub const LOCALE_VAR: &str = "PLAYOFF_SITE_LOCALE";
pub const PORT_VAR: &str = "PLAYOFF_SITE_PORT";

#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub output_dir: PathBuf,
    pub locale: String,
    pub index_file: &'static str,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("site"),
            locale: "en_US".to_string(),
            index_file: "index.html",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

#[derive(Debug, Clone)]
pub struct RatingSettings {
    /// Used for players listed in the ratings file without a value
    pub default_rating: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            default_rating: 1500.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub site: SiteSettings,
    pub server: ServerSettings,
    pub ratings: RatingSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `PLAYOFF_SITE_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(dir) = lookup(OUTPUT_DIR_VAR).filter(|v| !v.is_empty()) {
            config.site.output_dir = PathBuf::from(dir);
        }
        if let Some(locale) = lookup(LOCALE_VAR) {
            config.site.locale = locale;
        }
        if let Some(port) = lookup(PORT_VAR) {
            match port.parse() {
                Ok(port) => config.server.port = port,
                Err(_) => warn!("Ignoring invalid {}={}", PORT_VAR, port),
            }
        }

        config
    }
}
