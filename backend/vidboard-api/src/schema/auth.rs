//! Registration and login mutations
//!
//! Both return the bare signed token string. Trust in the supplied
//! access token is delegated to the external OAuth provider; the backend
//! never sees a password.

use async_graphql::{Context, Object, Result as GraphQLResult};
use sqlx::PgPool;
use tracing::info;

use crate::auth::TokenIssuer;
use crate::db;
use crate::error::ApiError;

#[derive(Default)]
pub struct AuthMutation;

#[Object]
impl AuthMutation {
    /// Register a user and return a signed token for them
    async fn register(
        &self,
        ctx: &Context<'_>,
        username: String,
        #[graphql(name = "access_token")] access_token: String,
        #[graphql(name = "avatar_url")] avatar_url: Option<String>,
    ) -> GraphQLResult<String> {
        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;
        let issuer = ctx
            .data::<TokenIssuer>()
            .map_err(|_| "Token issuer not available")?;

        let user = db::users::create_user(pool, &username, &access_token, avatar_url.as_deref())
            .await?;

        info!(user_id = %user.id, username = %user.username, "user registered");

        Ok(issuer.issue_token(user.id)?)
    }

    /// Log in with a previously registered access token
    async fn login(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "access_token")] access_token: String,
    ) -> GraphQLResult<String> {
        let pool = ctx
            .data::<PgPool>()
            .map_err(|_| "Database pool not available")?;
        let issuer = ctx
            .data::<TokenIssuer>()
            .map_err(|_| "Token issuer not available")?;

        let user = db::users::find_by_access_token(pool, &access_token)
            .await?
            .ok_or(ApiError::UserNotFound)?;

        Ok(issuer.issue_token(user.id)?)
    }
}
