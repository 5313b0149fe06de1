//! Build-time configuration
//!
//! A browser bundle has no process environment, so values are baked in when
//! the UI is compiled.

use std::str::FromStr;

use log::LevelFilter;

use crate::api::DEFAULT_BASE_URL;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub page_size: usize,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Reads `COMIC_ADMIN_API_BASE_URL`, `COMIC_ADMIN_PAGE_SIZE` and
    /// `COMIC_ADMIN_LOG` as set at compile time
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("COMIC_ADMIN_API_BASE_URL"),
            option_env!("COMIC_ADMIN_PAGE_SIZE"),
            option_env!("COMIC_ADMIN_LOG"),
        )
    }

    /// Unset, blank or invalid values fall back to the defaults
    pub fn from_values(base_url: Option<&str>, page_size: Option<&str>, log: Option<&str>) -> Self {
        let defaults = Self::default();

        let api_base_url = base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.api_base_url);
        let page_size = page_size
            .and_then(|p| p.trim().parse::<usize>().ok())
            .filter(|p| *p > 0)
            .unwrap_or(defaults.page_size);
        let log_level = log
            .and_then(|l| LevelFilter::from_str(l.trim()).ok())
            .unwrap_or(defaults.log_level);

        Self { api_base_url, page_size, log_level }
    }
}
