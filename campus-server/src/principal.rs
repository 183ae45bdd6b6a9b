//! Resolving the caller's identity from request headers.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use campus_core::{Principal, Role};
use serde::Deserialize;
use tracing::debug;

/// Maps request headers to the principal the call runs as.
pub trait PrincipalResolver: Send + Sync {
    /// Returns the caller's principal; unknown callers are anonymous.
    fn resolve(&self, headers: &HeaderMap) -> Principal;
}

/// Token table file: `{"principals":[{"token":..,"email":..,"roles":[..]}]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrincipalFile {
    #[serde(default)]
    pub principals: Vec<PrincipalEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrincipalEntry {
    pub token: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// Resolves `Authorization: Bearer <token>` against a fixed token table.
#[derive(Debug, Clone, Default)]
pub struct TokenResolver {
    by_token: HashMap<String, Principal>,
}

impl TokenResolver {
    /// A resolver that knows no tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a token table from its JSON form.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let file: PrincipalFile = serde_json::from_str(text)?;
        Ok(file.into())
    }

    /// Registers a token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>, principal: Principal) -> Self {
        self.by_token.insert(token.into(), principal);
        self
    }

    pub fn len(&self) -> usize {
        self.by_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_token.is_empty()
    }
}

impl From<PrincipalFile> for TokenResolver {
    fn from(file: PrincipalFile) -> Self {
        file.principals.into_iter().fold(Self::new(), |resolver, entry| {
            let principal = Principal::with_roles(entry.email, entry.roles);
            resolver.with_token(entry.token, principal)
        })
    }
}

impl PrincipalResolver for TokenResolver {
    fn resolve(&self, headers: &HeaderMap) -> Principal {
        let Some(token) = bearer_token(headers) else {
            return Principal::anonymous();
        };
        match self.by_token.get(token) {
            Some(principal) => principal.clone(),
            None => {
                debug!("unknown bearer token");
                Principal::anonymous()
            }
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Middleware attaching the resolved [`Principal`] to the request.
pub async fn attach_principal(
    State(resolver): State<Arc<dyn PrincipalResolver>>,
    mut request: Request,
    next: Next,
) -> Response {
    let principal = resolver.resolve(request.headers());
    request.extensions_mut().insert(principal);
    next.run(request).await
}
