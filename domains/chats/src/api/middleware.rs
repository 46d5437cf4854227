//! Chats domain state and auth config integration

use std::sync::Arc;

use axum::extract::FromRef;
use chatline_auth::AuthConfig;
use chatline_llm::LlmService;

use crate::ChatsRepositories;

/// Application state for the Chats domain
#[derive(Clone)]
pub struct ChatsState {
    pub repos: ChatsRepositories,
    pub auth_config: AuthConfig,
    pub llm: Arc<dyn LlmService>,
}

impl FromRef<ChatsState> for AuthConfig {
    fn from_ref(state: &ChatsState) -> Self {
        state.auth_config.clone()
    }
}
