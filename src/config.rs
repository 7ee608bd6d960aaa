use std::collections::HashSet;

use log::Level;
use serde::Deserialize;
use thiserror::Error;

use crate::faq::{FaqEntry, FaqTable};

const SITE_JSON: &str = include_str!("../assets/site.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site config has no FAQ entries")]
    NoFaqEntries,
    #[error("FAQ question listed twice: {0:?}")]
    DuplicateQuestion(String),
}

/// Copy that drives page behaviour, embedded at build time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub brand_name: String,
    pub support_title: String,
    pub faq: Vec<FaqEntry>,
}

impl SiteConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.check()?;
        Ok(config)
    }

    /// Used when the embedded config can't be read. Every chat question
    /// resolves to the fallback answer.
    pub fn degraded() -> Self {
        Self {
            brand_name: "SoftSell".to_string(),
            support_title: "SoftSell Support".to_string(),
            faq: Vec::new(),
        }
    }

    pub fn faq_table(&self) -> FaqTable {
        FaqTable::new(self.faq.clone())
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.faq.is_empty() {
            return Err(ConfigError::NoFaqEntries);
        }
        let mut seen = HashSet::new();
        for entry in &self.faq {
            if !seen.insert(entry.question.as_str()) {
                return Err(ConfigError::DuplicateQuestion(entry.question.clone()));
            }
        }
        Ok(())
    }
}
