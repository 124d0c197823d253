use async_trait::async_trait;
use meridian_core::{GenerateProvider, ProviderError, RemoteFailure};
use parking_lot::Mutex;
use std::sync::Arc;

/// Provider returning a fixed answer for every question.
#[derive(Debug, Clone)]
pub struct FixedProvider {
    text: String,
}

impl FixedProvider {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl GenerateProvider for FixedProvider {
    async fn generate_with_search(
        &self,
        _model: &str,
        _question: &str,
        _temperature: f32,
    ) -> Result<Option<String>, ProviderError> {
        Ok(Some(self.text.clone()))
    }
}

/// Provider that succeeds at the transport level but carries no text.
#[derive(Debug, Clone, Default)]
pub struct EmptyProvider;

#[async_trait]
impl GenerateProvider for EmptyProvider {
    async fn generate_with_search(
        &self,
        _model: &str,
        _question: &str,
        _temperature: f32,
    ) -> Result<Option<String>, ProviderError> {
        Ok(None)
    }
}

/// Provider raising a configured failure for every call.
#[derive(Debug, Clone)]
pub struct FailingProvider {
    failure: Failure,
}

#[derive(Debug, Clone)]
enum Failure {
    Api(RemoteFailure),
    Transport(String),
}

impl FailingProvider {
    /// Fail with a remote API failure.
    pub fn api(status: Option<u16>, code: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            failure: Failure::Api(RemoteFailure {
                status,
                code: code.map(str::to_string),
                message: message.into(),
            }),
        }
    }

    /// Fail at the transport level.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            failure: Failure::Transport(message.into()),
        }
    }
}

#[async_trait]
impl GenerateProvider for FailingProvider {
    async fn generate_with_search(
        &self,
        _model: &str,
        _question: &str,
        _temperature: f32,
    ) -> Result<Option<String>, ProviderError> {
        Err(match self.failure.clone() {
            Failure::Api(failure) => ProviderError::Api(failure),
            Failure::Transport(message) => ProviderError::Transport(message),
        })
    }
}

/// One captured call as seen by a [`RecordingProvider`].
#[derive(Debug, Clone, PartialEq)]
pub struct SeenCall {
    pub model: String,
    pub question: String,
    pub temperature: f32,
}

/// Provider answering with fixed text while recording every call it sees.
#[derive(Debug, Clone)]
pub struct RecordingProvider {
    text: String,
    calls: Arc<Mutex<Vec<SeenCall>>>,
}

impl RecordingProvider {
    pub fn new(text: impl Into<String>) -> (Self, Arc<Mutex<Vec<SeenCall>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                text: text.into(),
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl GenerateProvider for RecordingProvider {
    async fn generate_with_search(
        &self,
        model: &str,
        question: &str,
        temperature: f32,
    ) -> Result<Option<String>, ProviderError> {
        self.calls.lock().push(SeenCall {
            model: model.to_string(),
            question: question.to_string(),
            temperature,
        });
        Ok(Some(self.text.clone()))
    }
}
