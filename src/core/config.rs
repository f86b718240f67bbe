use std::env;

/// Server-held secrets, resolved once per invocation.
///
/// Every credential is optional at this level; each handler decides whether
/// absence is a configuration error (chat, verify-admin) or degrades the
/// feature to a no-op (telegram).
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub anthropic_api_key: Option<String>,
    pub telegram_bot_token: Option<String>,
    pub admin_password: Option<String>,
    pub claude_model: Option<String>,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            anthropic_api_key: env::var("ANTHROPIC_API_KEY").ok(),
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN").ok(),
            admin_password: env::var("ADMIN_PASSWORD").ok(),
            claude_model: env::var("CLAUDE_MODEL").ok(),
        }
    }
}
