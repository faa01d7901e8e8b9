//! Comment schema and resolvers
//!
//! Same ownership rules as posts, with `user_id` as the owner field.

use async_graphql::{ComplexObject, Context, Object, Result as GraphQLResult, SimpleObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::error::ApiError;
use crate::models;
use crate::schema::context::require_auth;
use crate::schema::user::User;

#[derive(SimpleObject, Clone, Debug, Serialize, Deserialize)]
#[graphql(complex)]
pub struct Comment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[ComplexObject]
impl Comment {
    /// The user who wrote this comment; null if the user record is gone
    async fn user(&self, ctx: &Context<'_>) -> GraphQLResult<Option<User>> {
        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;

        Ok(db::users::find_by_id(pool, self.user_id)
            .await?
            .map(Into::into))
    }
}

impl From<models::Comment> for Comment {
    fn from(comment: models::Comment) -> Self {
        Comment {
            id: comment.id,
            user_id: comment.user_id,
            post_id: comment.post_id,
            comment: comment.comment,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

#[derive(Default)]
pub struct CommentMutation;

#[Object]
impl CommentMutation {
    /// Create a new comment on a post, owned by the caller
    async fn add_comment(
        &self,
        ctx: &Context<'_>,
        comment: String,
        post_id: Uuid,
    ) -> GraphQLResult<Comment> {
        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;
        let user = require_auth(ctx)?;

        let comment = db::comments::create_comment(pool, user.id, post_id, &comment).await?;
        Ok(comment.into())
    }

    /// Update a comment; only its author can update it
    async fn update_comment(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        comment: String,
    ) -> GraphQLResult<Comment> {
        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;
        let user = require_auth(ctx)?;

        let comment = db::comments::update_comment_for_author(pool, id, user.id, &comment)
            .await?
            .ok_or(ApiError::NotFoundForAuthor("comment"))?;

        Ok(comment.into())
    }

    /// Delete a comment; only its author can delete it
    async fn delete_comment(&self, ctx: &Context<'_>, id: Uuid) -> GraphQLResult<String> {
        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;
        let user = require_auth(ctx)?;

        let deleted = db::comments::delete_comment_for_author(pool, id, user.id).await?;
        if !deleted {
            return Err(ApiError::NotFoundForAuthor("comment").into());
        }

        Ok("Comment deleted".to_string())
    }
}
