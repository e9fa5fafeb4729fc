//! Response Resolver — turns an outgoing message into reply text.
//!
//! One health probe, at most one completion call, then the local fallback
//! table. Every failure degrades to a fallback reply; `resolve` never errors.

use std::rc::Rc;
use chat_types::{ChatError, Result, message::Message};
use crate::fallback::FallbackResponder;
use crate::ports::CompletionPort;

/// Where a resolved reply came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Provider,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub text: String,
    pub source: ReplySource,
}

pub struct ResponseResolver {
    provider: Rc<dyn CompletionPort>,
    fallback: FallbackResponder,
}

impl ResponseResolver {
    pub fn new(provider: Rc<dyn CompletionPort>) -> Self {
        Self::with_fallback(provider, FallbackResponder::new())
    }

    pub fn with_fallback(provider: Rc<dyn CompletionPort>, fallback: FallbackResponder) -> Self {
        Self { provider, fallback }
    }

    pub fn provider(&self) -> Rc<dyn CompletionPort> {
        self.provider.clone()
    }

    pub fn label(&self) -> &str {
        self.provider.label()
    }

    pub async fn resolve(&self, message: &str, history: &[Message]) -> String {
        self.resolve_detailed(message, history).await.text
    }

    pub async fn resolve_detailed(&self, message: &str, history: &[Message]) -> Resolution {
        match self.ask_provider(message, history).await {
            Ok(text) => Resolution {
                text,
                source: ReplySource::Provider,
            },
            Err(e) => {
                log::warn!("{} provider failed, using fallback reply: {}", self.label(), e);
                Resolution {
                    text: self.fallback.reply(message),
                    source: ReplySource::Fallback,
                }
            }
        }
    }

    async fn ask_provider(&self, message: &str, history: &[Message]) -> Result<String> {
        let health = self
            .provider
            .health()
            .await
            .map_err(|e| ChatError::ProviderUnavailable(e.to_string()))?;
        if !health.is_ok() {
            return Err(ChatError::ProviderUnavailable(format!(
                "health status {:?}",
                health.status
            )));
        }

        log::debug!(
            "Requesting completion from {} with {} history messages",
            self.label(),
            history.len()
        );
        self.provider.complete(message, history).await?.into_text()
    }
}
