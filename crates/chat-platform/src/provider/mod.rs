pub mod timeout;
pub mod http;
pub mod openai_compat;
pub mod echo;

use std::rc::Rc;
use chat_core::ports::CompletionPort;
use chat_types::config::{BackendConfig, BackendKind};

pub use echo::{EchoProvider, OfflineProvider};
pub use http::HttpCompletionProvider;
pub use openai_compat::OpenAiCompatProvider;

/// Construct the provider selected by `config.kind`.
pub fn build_provider(config: &BackendConfig) -> Rc<dyn CompletionPort> {
    log::info!("Completion backend: {}", config.kind.label());
    match config.kind {
        BackendKind::Http => Rc::new(HttpCompletionProvider::new(config)),
        BackendKind::OpenAiCompat => Rc::new(OpenAiCompatProvider::new(
            config.openai.clone(),
            config.timeout_ms,
        )),
        BackendKind::Echo => Rc::new(EchoProvider),
        BackendKind::Offline => Rc::new(OfflineProvider),
    }
}
