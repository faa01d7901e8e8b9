//! Authentication helpers for resolver context

use async_graphql::Context;

use crate::auth::AuthenticatedUser;
use crate::error::{ApiError, Result};

/// Verify the request carries an authenticated identity and return it.
///
/// The HTTP handler injects `AuthenticatedUser` into the request context
/// only when a valid bearer token was presented, so absence here means
/// unauthenticated.
pub fn require_auth(ctx: &Context<'_>) -> Result<AuthenticatedUser> {
    ctx.data_opt::<AuthenticatedUser>()
        .copied()
        .ok_or(ApiError::Unauthenticated)
}
