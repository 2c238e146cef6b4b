//! Application state and composition.

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::api::auth::AdminCredentials;
use crate::infrastructure::{
    ports::{
        CharacterRepo, ClockPort, ContentRepo, MageGroupRepo, MeritRepo, ResourceRepo, RoteRepo,
    },
    sqlite::{
        SqliteCharacterRepo, SqliteContentRepo, SqliteMageGroupRepo, SqliteMeritRepo,
        SqliteResourceRepo, SqliteRoteRepo,
    },
};
use crate::use_cases::{
    self,
    management::{CharacterCrud, MageGroupCrud, MeritCrud, ResourceCrud, RoteCrud},
};

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
    pub admin: AdminCredentials,
}

/// Port traits injected directly, one per stored collection.
pub struct Repositories {
    pub character: Arc<dyn CharacterRepo>,
    pub rote: Arc<dyn RoteRepo>,
    pub merit: Arc<dyn MeritRepo>,
    pub resource: Arc<dyn ResourceRepo>,
    pub mage_group: Arc<dyn MageGroupRepo>,
    pub content: Arc<dyn ContentRepo>,
}

impl Repositories {
    /// Every repository backed by the same SQLite pool.
    pub fn sqlite(pool: SqlitePool, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            character: Arc::new(SqliteCharacterRepo::new(pool.clone())),
            rote: Arc::new(SqliteRoteRepo::new(pool.clone())),
            merit: Arc::new(SqliteMeritRepo::new(pool.clone())),
            resource: Arc::new(SqliteResourceRepo::new(pool.clone())),
            mage_group: Arc::new(SqliteMageGroupRepo::new(pool.clone())),
            content: Arc::new(SqliteContentRepo::new(pool, clock)),
        }
    }
}

/// Container for all use cases.
pub struct UseCases {
    pub management: use_cases::ManagementUseCases,
    pub content: use_cases::ContentOps,
    pub build: use_cases::BuildOps,
}

impl App {
    pub fn new(
        repositories: Repositories,
        clock: Arc<dyn ClockPort>,
        admin: AdminCredentials,
    ) -> Self {
        let management = use_cases::ManagementUseCases::new(
            CharacterCrud::new(
                repositories.character.clone(),
                repositories.rote.clone(),
                clock.clone(),
            ),
            RoteCrud::new(repositories.rote.clone()),
            MeritCrud::new(repositories.merit.clone()),
            ResourceCrud::new(repositories.resource.clone(), clock.clone()),
            MageGroupCrud::new(repositories.mage_group.clone()),
        );
        let content = use_cases::ContentOps::new(repositories.content.clone());
        let build = use_cases::BuildOps::new(repositories.character.clone(), clock);

        let use_cases = UseCases {
            management,
            content,
            build,
        };

        Self {
            repositories,
            use_cases,
            admin,
        }
    }
}

impl FromRef<Arc<App>> for AdminCredentials {
    fn from_ref(app: &Arc<App>) -> Self {
        app.admin.clone()
    }
}
