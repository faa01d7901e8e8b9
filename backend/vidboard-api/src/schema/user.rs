//! User schema and resolvers

use async_graphql::{Context, Object, Result as GraphQLResult, SimpleObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::models;

/// Public view of a user. The stored access token stays out of the API
/// surface: it is a live credential, not profile data.
#[derive(SimpleObject, Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[graphql(name = "avatar_url")]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<models::User> for User {
    fn from(user: models::User) -> Self {
        User {
            id: user.id,
            username: user.username,
            avatar_url: user.avatar_url,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// Retrieves list of users
    async fn users(&self, ctx: &Context<'_>) -> GraphQLResult<Vec<User>> {
        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;

        let users = db::users::list_users(pool).await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    /// Retrieves one user; null when no user has this id
    async fn user(&self, ctx: &Context<'_>, id: Uuid) -> GraphQLResult<Option<User>> {
        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;

        Ok(db::users::find_by_id(pool, id).await?.map(Into::into))
    }
}
