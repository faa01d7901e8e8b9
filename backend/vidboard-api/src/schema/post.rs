//! Post schema and resolvers
//!
//! Mutations take the external argument name `youtube_uri` and store it in
//! the `youtube_url` field, matching the public API shape this service
//! replaces. `author_id` always comes from the authenticated identity,
//! never from client input.

use async_graphql::{ComplexObject, Context, Object, Result as GraphQLResult, SimpleObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::error::ApiError;
use crate::models;
use crate::schema::comment::Comment;
use crate::schema::context::require_auth;
use crate::schema::user::User;

#[derive(SimpleObject, Clone, Debug, Serialize, Deserialize)]
#[graphql(complex)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    #[graphql(name = "youtube_url")]
    pub youtube_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[ComplexObject]
impl Post {
    /// The user who created this post; null if the author record is gone
    async fn author(&self, ctx: &Context<'_>) -> GraphQLResult<Option<User>> {
        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;

        Ok(db::users::find_by_id(pool, self.author_id)
            .await?
            .map(Into::into))
    }

    /// Comments on this post, newest first
    async fn comments(&self, ctx: &Context<'_>) -> GraphQLResult<Vec<Comment>> {
        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;

        let comments = db::comments::find_comments_by_post(pool, self.id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}

impl From<models::Post> for Post {
    fn from(post: models::Post) -> Self {
        Post {
            id: post.id,
            author_id: post.author_id,
            title: post.title,
            youtube_url: post.youtube_url,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Default)]
pub struct PostQuery;

#[Object]
impl PostQuery {
    /// Retrieves list of posts
    async fn posts(&self, ctx: &Context<'_>) -> GraphQLResult<Vec<Post>> {
        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;

        let posts = db::posts::list_posts(pool).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }

    /// Retrieves one post; null when no post has this id
    async fn post(&self, ctx: &Context<'_>, id: Uuid) -> GraphQLResult<Option<Post>> {
        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;

        Ok(db::posts::find_post_by_id(pool, id).await?.map(Into::into))
    }
}

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    /// Create a new post owned by the caller
    async fn add_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        #[graphql(name = "youtube_uri")] youtube_uri: String,
    ) -> GraphQLResult<Post> {
        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;
        let user = require_auth(ctx)?;

        let post = db::posts::create_post(pool, user.id, &title, &youtube_uri).await?;
        Ok(post.into())
    }

    /// Update a post; only the author can update it
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        title: String,
        #[graphql(name = "youtube_uri")] youtube_uri: String,
    ) -> GraphQLResult<Post> {
        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;
        let user = require_auth(ctx)?;

        let post = db::posts::update_post_for_author(pool, id, user.id, &title, &youtube_uri)
            .await?
            .ok_or(ApiError::NotFoundForAuthor("post"))?;

        Ok(post.into())
    }

    /// Delete a post; only the author can delete it
    async fn delete_post(&self, ctx: &Context<'_>, id: Uuid) -> GraphQLResult<String> {
        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;
        let user = require_auth(ctx)?;

        let deleted = db::posts::delete_post_for_author(pool, id, user.id).await?;
        if !deleted {
            return Err(ApiError::NotFoundForAuthor("post").into());
        }

        Ok("Post deleted".to_string())
    }
}
