//! Accounts domain state and auth config integration

use crate::AccountsRepositories;
use axum::extract::FromRef;
use chatline_auth::AuthConfig;

/// Application state for the Accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub repos: AccountsRepositories,
    pub auth_config: AuthConfig,
}

impl FromRef<AccountsState> for AuthConfig {
    fn from_ref(state: &AccountsState) -> Self {
        state.auth_config.clone()
    }
}
