/// Comment database operations
///
/// Ownership-scoped update/delete follow the same single-statement pattern
/// as posts, with `user_id` as the owner column.
use crate::error::Result;
use crate::models::Comment;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new comment on a post, owned by `user_id`
pub async fn create_comment(
    pool: &PgPool,
    user_id: Uuid,
    post_id: Uuid,
    comment: &str,
) -> Result<Comment> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (user_id, post_id, comment)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, post_id, comment, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(post_id)
    .bind(comment)
    .fetch_one(pool)
    .await?;

    Ok(comment)
}

/// All comments on a post, newest first
pub async fn find_comments_by_post(pool: &PgPool, post_id: Uuid) -> Result<Vec<Comment>> {
    let comments = sqlx::query_as::<_, Comment>(
        "SELECT id, user_id, post_id, comment, created_at, updated_at
         FROM comments WHERE post_id = $1 ORDER BY created_at DESC",
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Replace the text of a comment, but only when `user_id` owns it
pub async fn update_comment_for_author(
    pool: &PgPool,
    comment_id: Uuid,
    user_id: Uuid,
    comment: &str,
) -> Result<Option<Comment>> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        UPDATE comments
        SET comment = $3, updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING id, user_id, post_id, comment, created_at, updated_at
        "#,
    )
    .bind(comment_id)
    .bind(user_id)
    .bind(comment)
    .fetch_optional(pool)
    .await?;

    Ok(comment)
}

/// Hard-delete a comment, but only when `user_id` owns it
pub async fn delete_comment_for_author(
    pool: &PgPool,
    comment_id: Uuid,
    user_id: Uuid,
) -> Result<bool> {
    let result = sqlx::query("DELETE FROM comments WHERE id = $1 AND user_id = $2")
        .bind(comment_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
