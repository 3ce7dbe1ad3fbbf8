use std::sync::Arc;

use time::Duration;
use tracing::{info, warn};

use crate::auth::password::hash_password;
use crate::auth::session::SessionStore;
use crate::auth::user::NewUser;
use crate::config::AppConfig;
use crate::contact::mailer::{ContactMailer, DisabledMailer, SmtpMailer};
use crate::store::{memory::MemoryStore, ContentStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub sessions: SessionStore,
    pub mailer: Arc<dyn ContactMailer>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        // In-memory backend; the rest of the app only sees the trait.
        let store: Arc<dyn ContentStore> = Arc::new(MemoryStore::new());

        let sessions = SessionStore::new(Duration::hours(config.session_ttl_hours));

        let mailer: Arc<dyn ContactMailer> = if config.email.is_configured() {
            Arc::new(SmtpMailer::new(config.email.clone()))
        } else {
            warn!("SMTP not configured; contact notifications will be reported as not sent");
            Arc::new(DisabledMailer)
        };

        let state = Self {
            store,
            sessions,
            mailer,
            config,
        };
        state.seed_admin().await?;
        Ok(state)
    }

    pub fn from_parts(
        store: Arc<dyn ContentStore>,
        sessions: SessionStore,
        mailer: Arc<dyn ContactMailer>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            store,
            sessions,
            mailer,
            config,
        }
    }

    /// Admin routes are unreachable without at least one admin account.
    async fn seed_admin(&self) -> anyhow::Result<()> {
        if self
            .store
            .user_by_username(&self.config.admin_username)
            .await?
            .is_some()
        {
            return Ok(());
        }
        let password_hash = hash_password(&self.config.admin_password)?;
        let user = self
            .store
            .create_user(NewUser {
                username: self.config.admin_username.clone(),
                password_hash,
                is_admin: true,
            })
            .await?;
        info!(user_id = user.id, username = %user.username, "seeded admin user");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::config::EmailConfig;

    pub const ADMIN_PASSWORD: &str = "Adm1n-pass!";
    pub const EDITOR_PASSWORD: &str = "Ed1tor-pass!";

    fn test_config() -> AppConfig {
        AppConfig {
            admin_username: "admin".into(),
            admin_password: ADMIN_PASSWORD.into(),
            session_ttl_hours: 24,
            email: EmailConfig {
                smtp_host: None,
                smtp_port: 587,
                smtp_username: None,
                smtp_password: None,
                smtp_tls: true,
                from_name: "Vitrine".into(),
                from_address: None,
                contact_recipient: None,
            },
        }
    }

    /// State backed by a fresh in-memory store, seeded with the admin account
    /// and one non-admin account ("editor").
    pub async fn state_with_mailer(mailer: Arc<dyn ContactMailer>) -> AppState {
        let config = Arc::new(test_config());
        let state = AppState::from_parts(
            Arc::new(MemoryStore::new()),
            SessionStore::new(Duration::hours(config.session_ttl_hours)),
            mailer,
            config,
        );
        state.seed_admin().await.expect("seed admin");
        state
            .store
            .create_user(NewUser {
                username: "editor".into(),
                password_hash: hash_password(EDITOR_PASSWORD).expect("hash"),
                is_admin: false,
            })
            .await
            .expect("seed editor");
        state
    }

    pub async fn test_state() -> AppState {
        state_with_mailer(Arc::new(DisabledMailer)).await
    }
}
