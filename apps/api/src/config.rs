use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::layout::a4_geometry;

/// Default cap on palette entries per request. Evaluation is quadratic in this.
pub const DEFAULT_MAX_PALETTE_SIZE: usize = 256;

/// Grid capacity handed to the page packer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct LayoutConfig {
    pub max_cols: usize,
    pub max_rows_per_page: usize,
}

impl Default for LayoutConfig {
    /// Capacity of the A4 reference geometry (6 × 6).
    fn default() -> Self {
        let geometry = a4_geometry();
        LayoutConfig {
            max_cols: geometry.max_cols(),
            max_rows_per_page: geometry.max_rows_per_page(),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Single allowed CORS origin. `None` means permissive CORS.
    pub cors_allowed_origin: Option<String>,
    pub max_palette_size: usize,
    pub layout: LayoutConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            cors_allowed_origin: None,
            max_palette_size: DEFAULT_MAX_PALETTE_SIZE,
            layout: LayoutConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let config = Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
            max_palette_size: parse_env("MAX_PALETTE_SIZE", defaults.max_palette_size)?,
            layout: LayoutConfig {
                max_cols: parse_env("LAYOUT_MAX_COLS", defaults.layout.max_cols)?,
                max_rows_per_page: parse_env(
                    "LAYOUT_MAX_ROWS_PER_PAGE",
                    defaults.layout.max_rows_per_page,
                )?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_palette_size == 0 {
            bail!("MAX_PALETTE_SIZE must be at least 1");
        }
        if self.layout.max_cols == 0 {
            bail!("LAYOUT_MAX_COLS must be at least 1");
        }
        if self.layout.max_rows_per_page == 0 {
            bail!("LAYOUT_MAX_ROWS_PER_PAGE must be at least 1");
        }
        Ok(())
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_reference_page() {
        let config = Config::default();
        assert_eq!(config.layout.max_cols, 6);
        assert_eq!(config.layout.max_rows_per_page, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let config = Config {
            layout: LayoutConfig {
                max_cols: 0,
                max_rows_per_page: 6,
            },
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("LAYOUT_MAX_COLS"));

        let config = Config {
            max_palette_size: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_env_falls_back_and_reports_bad_values() {
        // Keys unique to this test so parallel tests do not race on them.
        std::env::remove_var("PALETTE_API_TEST_UNSET");
        assert_eq!(parse_env("PALETTE_API_TEST_UNSET", 7usize).unwrap(), 7);

        std::env::set_var("PALETTE_API_TEST_BAD", "six");
        let err = parse_env::<usize>("PALETTE_API_TEST_BAD", 6).unwrap_err();
        assert!(err.to_string().contains("PALETTE_API_TEST_BAD"));

        std::env::set_var("PALETTE_API_TEST_GOOD", " 12 ");
        assert_eq!(parse_env::<usize>("PALETTE_API_TEST_GOOD", 6).unwrap(), 12);
    }
}
