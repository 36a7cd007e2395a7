use sqlx::PgPool;
use crate::errors::AppError;
use super::types::*;

/// Insert one opinion. `id` and `created_at` come from the column defaults.
pub async fn create(pool: &PgPool, new: &NewOpinion) -> Result<Opinion, AppError> {
    let opinion = sqlx::query_as::<_, Opinion>(
        "INSERT INTO opinions \
             (name, email, is_anonymous, building, status, willing_to_change, message) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         RETURNING id, name, email, is_anonymous, building, status, willing_to_change, \
                   message, created_at",
    )
    .bind(&new.name)
    .bind(&new.email)
    .bind(new.is_anonymous)
    .bind(&new.building)
    .bind(&new.status)
    .bind(&new.willing_to_change)
    .bind(&new.message)
    .fetch_one(pool)
    .await?;

    Ok(opinion)
}

/// Every stored opinion, oldest first.
pub async fn find_all(pool: &PgPool) -> Result<Vec<Opinion>, AppError> {
    let rows = sqlx::query_as::<_, Opinion>(
        "SELECT id, name, email, is_anonymous, building, status, willing_to_change, \
                message, created_at \
         FROM opinions \
         ORDER BY created_at ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn count(pool: &PgPool) -> Result<i64, AppError> {
    let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM opinions")
        .fetch_one(pool)
        .await?;
    Ok(n)
}
