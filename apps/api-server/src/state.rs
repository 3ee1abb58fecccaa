//! Application state - shared across all handlers.

use std::sync::Arc;

use inkpost_core::ports::{Clock, MailSender, PostRepository, UserRepository, UuidGenerator};
use inkpost_core::services::{CertificationService, PostService, UserService};
use inkpost_infra::{
    InMemoryMailSender, InMemoryPostRepository, InMemoryUserRepository, RandomUuidGenerator,
    SystemClock,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub posts: PostService,
    /// Redirect target after a successful certification.
    pub frontend_url: String,
}

/// Everything the services are built from.
pub struct Dependencies {
    pub user_repo: Arc<dyn UserRepository>,
    pub post_repo: Arc<dyn PostRepository>,
    pub mail_sender: Arc<dyn MailSender>,
    pub clock: Arc<dyn Clock>,
    pub uuid: Arc<dyn UuidGenerator>,
}

impl Dependencies {
    /// In-memory repositories and mail outbox with the given clock and token source.
    pub fn in_memory(clock: Arc<dyn Clock>, uuid: Arc<dyn UuidGenerator>) -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let posts = Arc::new(InMemoryPostRepository::new(users.clone()));

        Self {
            user_repo: users,
            post_repo: posts,
            mail_sender: Arc::new(InMemoryMailSender::new()),
            clock,
            uuid,
        }
    }
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let deps = Dependencies::in_memory(Arc::new(SystemClock), Arc::new(RandomUuidGenerator));

        #[cfg(feature = "postgres")]
        let deps = with_postgres(deps, config).await;

        #[cfg(not(feature = "postgres"))]
        tracing::info!("Running without postgres feature - using in-memory repositories");

        #[cfg(feature = "smtp")]
        let deps = with_smtp(deps, config);

        tracing::info!("Application state initialized");

        Self::from_dependencies(deps, &config.public_base_url, &config.frontend_url)
    }

    /// Wire the services once; handlers share them through `web::Data`.
    pub fn from_dependencies(deps: Dependencies, public_base_url: &str, frontend_url: &str) -> Self {
        let certification = CertificationService::new(deps.mail_sender, public_base_url);

        Self {
            users: UserService::new(
                deps.user_repo.clone(),
                certification,
                deps.clock.clone(),
                deps.uuid,
            ),
            posts: PostService::new(deps.post_repo, deps.user_repo, deps.clock),
            frontend_url: frontend_url.to_string(),
        }
    }
}

/// Swap in the Postgres repositories when a database is configured and reachable.
#[cfg(feature = "postgres")]
async fn with_postgres(mut deps: Dependencies, config: &AppConfig) -> Dependencies {
    let Some(db_config) = &config.database else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return deps;
    };

    match inkpost_infra::database::connect(db_config).await {
        Ok(conn) => {
            deps.user_repo = Arc::new(inkpost_infra::PostgresUserRepository::new(conn.clone()));
            deps.post_repo = Arc::new(inkpost_infra::PostgresPostRepository::new(conn));
        }
        Err(e) => {
            tracing::error!("Failed to connect to database: {}. Using in-memory fallback.", e);
        }
    }
    deps
}

/// Swap in SMTP delivery when `SMTP_HOST` is configured.
#[cfg(feature = "smtp")]
fn with_smtp(mut deps: Dependencies, config: &AppConfig) -> Dependencies {
    let Some(smtp) = &config.smtp else {
        tracing::warn!("SMTP_HOST not set. Certification mails go to the in-memory outbox.");
        return deps;
    };

    match inkpost_infra::SmtpMailSender::new(smtp) {
        Ok(sender) => deps.mail_sender = Arc::new(sender),
        Err(e) => {
            tracing::error!("Failed to configure SMTP: {}. Using in-memory outbox.", e);
        }
    }
    deps
}
