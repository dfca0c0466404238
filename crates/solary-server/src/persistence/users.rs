//! User and subscription persistence operations.

use anyhow::Result;
use chrono::{DateTime, Utc};
use solary_core::models::{Subscription, User};
use sqlx::SqlitePool;

/// Look up a user by API key, attaching every subscription grant with its
/// type's period already resolved.
pub async fn find_user_by_apikey(pool: &SqlitePool, apikey: &str) -> Result<Option<User>> {
    let row = sqlx::query_as::<_, UserRow>("SELECT id, apikey FROM users WHERE apikey = ?1")
        .bind(apikey)
        .fetch_optional(pool)
        .await?;

    let Some(user) = row else {
        return Ok(None);
    };

    let grants = sqlx::query_as::<_, SubscriptionRow>(
        r#"
        SELECT s.created_at, t.period
        FROM subscriptions s
        JOIN subscription_types t ON t.id = s.subscription_type_id
        WHERE s.user_id = ?1
        "#,
    )
    .bind(user.id)
    .fetch_all(pool)
    .await?;

    Ok(Some(User {
        id: user.id,
        apikey: user.apikey,
        subscriptions: grants.into_iter().map(|r| r.into()).collect(),
    }))
}

/// Insert a user, returning its row id. Fails on duplicate API keys.
pub async fn insert_user(pool: &SqlitePool, apikey: &str) -> Result<i64> {
    let result = sqlx::query("INSERT INTO users (apikey) VALUES (?1)")
        .bind(apikey)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

/// Insert a subscription type, returning its row id.
pub async fn insert_subscription_type(pool: &SqlitePool, name: &str, period_days: i64) -> Result<i64> {
    let result = sqlx::query("INSERT INTO subscription_types (name, period) VALUES (?1, ?2)")
        .bind(name)
        .bind(period_days)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

/// Grant a subscription of the given type to a user.
pub async fn insert_subscription(
    pool: &SqlitePool,
    user_id: i64,
    subscription_type_id: i64,
    created_at: DateTime<Utc>,
) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO subscriptions (user_id, subscription_type_id, created_at) VALUES (?1, ?2, ?3)",
    )
    .bind(user_id)
    .bind(subscription_type_id)
    .bind(created_at.to_rfc3339())
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    apikey: String,
}

#[derive(sqlx::FromRow)]
struct SubscriptionRow {
    created_at: String,
    period: i64,
}

impl From<SubscriptionRow> for Subscription {
    fn from(row: SubscriptionRow) -> Self {
        // A malformed timestamp degrades the grant to epoch (always expired)
        // rather than failing the whole lookup.
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

        Subscription {
            created_at,
            period_days: row.period,
        }
    }
}
