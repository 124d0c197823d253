//! Orchestration of a single ask: gate, augment, call, record, classify.

use crate::classify::classify;
use crate::cooldown::remaining_wait;
use crate::provider::{GenerateProvider, ProviderError};
use crate::types::{AskOutcome, ClassifiedFailure, FailureCategory};
use log::{debug, info, warn};
use meridian_config::ConfigStore;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Default sampling temperature when the caller has no preference.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Composes the cooldown gate, prompt augmentation, the remote provider, and
/// usage recording. Holds its dependencies explicitly; there is no
/// process-wide singleton.
pub struct QueryOrchestrator {
    store: ConfigStore,
    provider: Arc<dyn GenerateProvider>,
}

impl QueryOrchestrator {
    /// Build an orchestrator over an opened store and a remote provider.
    pub fn new(store: ConfigStore, provider: Arc<dyn GenerateProvider>) -> Self {
        Self { store, provider }
    }

    /// The store backing this orchestrator.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Ask a question and return a structured outcome.
    ///
    /// The gate check re-reads the store so a cooldown started by another
    /// invocation is honored; the check and the eventual usage recording are
    /// not atomic across processes, an accepted tradeoff for a single-user
    /// tool.
    pub async fn ask(&self, question: &str, temperature: f32) -> AskOutcome {
        if let Some(remaining_secs) = remaining_wait(self.store.read_last_used(), epoch_now()) {
            info!("call gated by cooldown (remaining_secs={remaining_secs})");
            return AskOutcome::CooldownBlocked { remaining_secs };
        }

        let record = self.store.record();
        let prompt = augment_question(question, &record.prompt_rule);
        debug!(
            "dispatching question (model={}, prompt_len={}, temperature={temperature})",
            record.model_name,
            prompt.len()
        );

        match self
            .provider
            .generate_with_search(&record.model_name, &prompt, temperature)
            .await
        {
            Ok(Some(text)) if !text.is_empty() => {
                if let Err(err) = self.store.record_usage(epoch_now()) {
                    // The call already succeeded; persistence is best-effort.
                    warn!("failed to record usage time: {err}");
                }
                AskOutcome::Answer(text)
            }
            Ok(_) => {
                info!("remote call returned no usable text");
                AskOutcome::NoAnswer
            }
            Err(ProviderError::Api(failure)) => {
                let category = classify(&failure);
                info!("remote call failed (category={category})");
                AskOutcome::Failed(ClassifiedFailure {
                    category,
                    message: failure.message,
                })
            }
            Err(ProviderError::Transport(message)) => {
                info!("remote call failed in transport");
                AskOutcome::Failed(ClassifiedFailure {
                    category: FailureCategory::Transport,
                    message,
                })
            }
        }
    }

    /// History-free chat alias for [`Self::ask`].
    pub async fn chat(&self, message: &str, temperature: f32) -> AskOutcome {
        self.ask(message, temperature).await
    }
}

/// Append the prompt rule to the question, separated by a blank line. An
/// empty rule leaves the question untouched.
fn augment_question(question: &str, prompt_rule: &str) -> String {
    if prompt_rule.is_empty() {
        return question.to_string();
    }
    format!("{question}\n\n{prompt_rule}")
}

/// Current time as fractional epoch seconds.
fn epoch_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or(0.0)
}
