/// Post database operations
///
/// Update and delete match on both the post id and the author id in a
/// single statement, so the ownership check and the write are one atomic
/// operation with no check/act window.
use crate::error::Result;
use crate::models::Post;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new post owned by `author_id`
pub async fn create_post(
    pool: &PgPool,
    author_id: Uuid,
    title: &str,
    youtube_url: &str,
) -> Result<Post> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (author_id, title, youtube_url)
        VALUES ($1, $2, $3)
        RETURNING id, author_id, title, youtube_url, created_at, updated_at
        "#,
    )
    .bind(author_id)
    .bind(title)
    .bind(youtube_url)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Find a post by ID
pub async fn find_post_by_id(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>> {
    let post = sqlx::query_as::<_, Post>(
        "SELECT id, author_id, title, youtube_url, created_at, updated_at
         FROM posts WHERE id = $1",
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// All posts, newest first
pub async fn list_posts(pool: &PgPool) -> Result<Vec<Post>> {
    let posts = sqlx::query_as::<_, Post>(
        "SELECT id, author_id, title, youtube_url, created_at, updated_at
         FROM posts ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Replace title and URL of a post, but only when `author_id` owns it.
/// `None` covers both "no such post" and "not the author".
pub async fn update_post_for_author(
    pool: &PgPool,
    post_id: Uuid,
    author_id: Uuid,
    title: &str,
    youtube_url: &str,
) -> Result<Option<Post>> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = $3, youtube_url = $4, updated_at = NOW()
        WHERE id = $1 AND author_id = $2
        RETURNING id, author_id, title, youtube_url, created_at, updated_at
        "#,
    )
    .bind(post_id)
    .bind(author_id)
    .bind(title)
    .bind(youtube_url)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Hard-delete a post, but only when `author_id` owns it.
/// Returns whether a row was removed.
pub async fn delete_post_for_author(
    pool: &PgPool,
    post_id: Uuid,
    author_id: Uuid,
) -> Result<bool> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1 AND author_id = $2")
        .bind(post_id)
        .bind(author_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
