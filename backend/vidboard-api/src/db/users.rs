/// User database operations
use crate::error::Result;
use crate::models::User;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a user holding an externally-issued access token
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    access_token: &str,
    avatar_url: Option<&str>,
) -> Result<User> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, access_token, avatar_url)
        VALUES ($1, $2, $3)
        RETURNING id, username, access_token, avatar_url, created_at, updated_at
        "#,
    )
    .bind(username)
    .bind(access_token)
    .bind(avatar_url)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Find a user by ID
pub async fn find_by_id(pool: &PgPool, user_id: Uuid) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, access_token, avatar_url, created_at, updated_at
         FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Find the user holding this access token (the sole login factor)
pub async fn find_by_access_token(pool: &PgPool, access_token: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, access_token, avatar_url, created_at, updated_at
         FROM users WHERE access_token = $1",
    )
    .bind(access_token)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// All users, no pagination
pub async fn list_users(pool: &PgPool) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id, username, access_token, avatar_url, created_at, updated_at
         FROM users ORDER BY created_at",
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}
