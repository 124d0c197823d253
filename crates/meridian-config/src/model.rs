//! Persisted record schema and built-in defaults.

use serde::{Deserialize, Serialize};

/// Default remote model identifier.
pub const DEFAULT_MODEL_NAME: &str = "gemini-2.5-flash-lite";
/// Default instruction suffix appended to every outbound question.
pub const DEFAULT_PROMPT_RULE: &str = "Answer in 50 words or fewer and cite your sources.";

/// Environment variable consulted as the last-resort credential source.
pub(crate) const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// The durable record, fully resolved against overrides and defaults.
///
/// `last_used` is a snapshot from load time only; cooldown checks re-read the
/// file because another process may have updated it since.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreRecord {
    /// Remote API credential. Always non-empty once a store opens.
    pub api_key: String,
    /// Remote model identifier.
    pub model_name: String,
    /// Instruction suffix appended to every question; may be empty.
    pub prompt_rule: String,
    /// Epoch seconds of the last successful remote call.
    pub last_used: Option<f64>,
}

/// Constructor-supplied values consulted when the store has no explicit field.
#[derive(Debug, Clone, Default)]
pub struct StoreOverrides {
    /// API key override (below stored value, above the env fallback).
    pub api_key: Option<String>,
    /// Model override (below stored value, above the built-in default).
    pub model_name: Option<String>,
}

/// Raw on-disk shape; every field optional so partial files load cleanly.
/// Field names are part of the on-disk contract and must not change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct RawRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_rule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<f64>,
}

impl RawRecord {
    /// Resolve a raw record into a full one.
    ///
    /// Precedence per field: stored value, then constructor override, then
    /// built-in default. The credential additionally falls back to the
    /// `GEMINI_API_KEY` environment variable; resolving nothing is fatal.
    pub(crate) fn resolve(self, overrides: &StoreOverrides) -> Result<StoreRecord, crate::ConfigError> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .or_else(|| overrides.api_key.clone())
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.is_empty())
            .ok_or(crate::ConfigError::MissingCredential)?;
        let model_name = self
            .model_name
            .or_else(|| overrides.model_name.clone())
            .unwrap_or_else(|| DEFAULT_MODEL_NAME.to_string());
        let prompt_rule = self
            .prompt_rule
            .unwrap_or_else(|| DEFAULT_PROMPT_RULE.to_string());
        Ok(StoreRecord {
            api_key,
            model_name,
            prompt_rule,
            last_used: self.last_used,
        })
    }
}

impl From<&StoreRecord> for RawRecord {
    fn from(record: &StoreRecord) -> Self {
        Self {
            api_key: Some(record.api_key.clone()),
            model_name: Some(record.model_name.clone()),
            prompt_rule: Some(record.prompt_rule.clone()),
            last_used: record.last_used,
        }
    }
}
