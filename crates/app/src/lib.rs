//! Chatline application composition root
//!
//! Composes all domain routers into a single application.

use axum::Router;
use chatline_accounts::{AccountsRepositories, AccountsState};
use chatline_auth::AuthConfig;
use chatline_chats::{ChatsRepositories, ChatsState};
use chatline_common::Config;
use chatline_llm::{LlmConfig, LlmServiceFactory};
use sqlx::PgPool;

/// Create the main application router with all routes and middleware
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    let auth_config = AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        subject: config.jwt_subject.clone(),
        issuer: config.jwt_issuer.clone(),
        audience: config.jwt_audience.clone(),
    };

    let llm = LlmServiceFactory::create(
        &config.llm_provider,
        LlmConfig {
            api_key: config.llm_api_key.clone(),
            base_url: config.llm_base_url.clone(),
            default_model: config.llm_model.clone(),
        },
    )
    .map_err(|e| anyhow::anyhow!("Failed to create LLM service: {}", e))?;

    let accounts_state = AccountsState {
        repos: AccountsRepositories::new(pool.clone()),
        auth_config: auth_config.clone(),
    };

    let chats_state = ChatsState {
        repos: ChatsRepositories::new(pool),
        auth_config,
        llm,
    };

    // Build router: compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .merge(chatline_accounts::routes().with_state(accounts_state))
        .merge(chatline_chats::routes().with_state(chats_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
