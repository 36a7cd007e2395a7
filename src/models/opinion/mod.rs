pub mod choices;
pub mod listing;
pub mod queries;
pub mod types;
pub mod validate;

pub use listing::ListingCache;
pub use queries::*;
pub use types::*;

use sqlx::PgPool;
use crate::errors::AppError;

/// Store a validated opinion, then mark the cached listing stale.
/// Both steps complete before this returns; a failed insert leaves the cache untouched.
pub async fn record(
    pool: &PgPool,
    cache: &ListingCache,
    new: &NewOpinion,
) -> Result<Opinion, AppError> {
    let opinion = queries::create(pool, new).await?;
    cache.invalidate().await;
    log::info!("Recorded opinion {} (building={})", opinion.id, opinion.building);
    Ok(opinion)
}
