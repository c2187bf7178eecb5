//! Application state shared by all handlers.

use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::catalog::WordCatalog;
use crate::config::Config;
use crate::db::{self, words, DbPool, LogOnError, SqliteStore, Store};
use crate::error::CatalogError;
use crate::identity::IdentityCache;
use crate::selection::RandomSampler;

/// Process-wide handles. Cloning is cheap; everything sits behind `Arc`.
///
/// The catalog is only ever placed here after a successful load, so handlers
/// never observe a missing or partial catalog.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub catalog: Arc<WordCatalog>,
    pub identities: Arc<IdentityCache>,
    pub sampler: Arc<RandomSampler>,
    pub default_word_count: NonZeroUsize,
}

impl AppState {
    pub fn new(
        store: Arc<dyn Store>,
        catalog: WordCatalog,
        sampler: RandomSampler,
        default_word_count: NonZeroUsize,
    ) -> Self {
        Self {
            store,
            catalog: Arc::new(catalog),
            identities: Arc::new(IdentityCache::new()),
            sampler: Arc::new(sampler),
            default_word_count,
        }
    }
}

/// Seed the catalog if configured, then load it and assemble the state.
///
/// Any catalog failure is returned to the caller, which must not start
/// serving.
pub fn build_state(pool: DbPool, config: &Config) -> Result<AppState, CatalogError> {
    if let Some(seed_path) = &config.catalog_seed_path {
        if let Some(conn) = db::try_lock(&pool).log_warn("Cannot lock database for seeding") {
            words::seed_words_from_file(&conn, seed_path).log_warn("Catalog seeding failed");
        }
    }

    let store: Arc<dyn Store> = Arc::new(SqliteStore::new(pool));
    let catalog = WordCatalog::load(store.as_ref())?;

    Ok(AppState::new(
        store,
        catalog,
        RandomSampler::from_os_rng(),
        config.default_word_count,
    ))
}
