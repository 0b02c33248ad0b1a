//! Bearer-token extractors — pull the JWT from the Authorization header,
//! validate it, and inject a `RequestContext`.
//!
//! `AuthEmployer` and `AuthJobSeeker` additionally enforce the account
//! type, replacing per-page role guards from the classic web flow.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use jobconnect_core::error::AppError;
use jobconnect_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated account context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthAccount(pub RequestContext);

impl std::ops::Deref for AuthAccount {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Like [`AuthAccount`] but yields `None` instead of rejecting when no
/// valid bearer token is present. Used on public endpoints that behave
/// differently for logged-in callers.
#[derive(Debug, Clone)]
pub struct OptionalAuthAccount(pub Option<RequestContext>);

/// An authenticated employer.
#[derive(Debug, Clone)]
pub struct AuthEmployer(pub RequestContext);

impl std::ops::Deref for AuthEmployer {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// An authenticated job seeker.
#[derive(Debug, Clone)]
pub struct AuthJobSeeker(pub RequestContext);

impl std::ops::Deref for AuthJobSeeker {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Decode the bearer token from the Authorization header into a context.
fn context_from_parts(parts: &Parts, state: &AppState) -> Result<RequestContext, AppError> {
    let auth_header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

    let claims = state.jwt_decoder.decode_access_token(token)?;

    Ok(RequestContext::new(
        claims.account_id(),
        claims.account_type,
        claims.email,
    ))
}

impl FromRequestParts<AppState> for AuthAccount {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(AuthAccount(context_from_parts(parts, state)?))
    }
}

impl FromRequestParts<AppState> for OptionalAuthAccount {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuthAccount(context_from_parts(parts, state).ok()))
    }
}

impl FromRequestParts<AppState> for AuthEmployer {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ctx = context_from_parts(parts, state)?;
        ctx.require_employer()?;
        Ok(AuthEmployer(ctx))
    }
}

impl FromRequestParts<AppState> for AuthJobSeeker {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ctx = context_from_parts(parts, state)?;
        ctx.require_jobseeker()?;
        Ok(AuthJobSeeker(ctx))
    }
}
