use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::errors::AppError;
use super::queries;

#[derive(Debug, Default)]
struct CacheState {
    count: Option<i64>,
    // Survives invalidation; only used when storage cannot be read.
    last_known: Option<i64>,
    generation: u64,
}

/// Cached opinion count for the landing page.
///
/// The write path calls [`ListingCache::invalidate`] after every insert. A load
/// that started before an invalidation does not store its result, so the page
/// never serves a count older than the latest write.
#[derive(Debug, Default)]
pub struct ListingCache {
    state: RwLock<CacheState>,
}

impl ListingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached count, loading it from storage when stale.
    pub async fn count(&self, pool: &PgPool) -> Result<i64, AppError> {
        let generation = {
            let state = self.state.read().await;
            if let Some(n) = state.count {
                return Ok(n);
            }
            state.generation
        };

        let n = queries::count(pool).await?;

        let mut state = self.state.write().await;
        if state.generation == generation {
            state.count = Some(n);
            state.last_known = Some(n);
        }
        Ok(n)
    }

    /// Count for rendering paths that must not fail: the cached or freshly loaded
    /// count, else the last count ever loaded. `None` only if nothing was ever loaded.
    pub async fn count_or_last_known(&self, pool: &PgPool) -> Option<i64> {
        match self.count(pool).await {
            Ok(n) => Some(n),
            Err(e) => {
                log::warn!("Could not load opinion count, using last known value: {e}");
                self.last_known().await
            }
        }
    }

    /// Last loaded count, without touching storage.
    pub async fn peek(&self) -> Option<i64> {
        self.state.read().await.count
    }

    /// Last count ever loaded, kept across invalidations.
    pub async fn last_known(&self) -> Option<i64> {
        self.state.read().await.last_known
    }

    pub async fn invalidate(&self) {
        let mut state = self.state.write().await;
        state.count = None;
        state.generation = state.generation.wrapping_add(1);
    }
}
