//! HTTP API for the campus CRUD backend.
//!
//! Every entity is served by the same generic handlers over a
//! [`ResourceService`]; its routes come from the service's route table.
//! A middleware resolves the caller's [`Principal`](campus_core::Principal)
//! before any handler runs.

mod handlers;
mod principal;

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use campus_core::{Operation, ResourceService};
use campus_model::{Article, DiningCommonsMenuItem, MenuItemReview, Organization};
use campus_storage::{MemoryStore, RecordStore, SqliteStore};
use tower_http::trace::TraceLayer;

pub use handlers::{HttpError, mount};
pub use principal::{
    PrincipalEntry, PrincipalFile, PrincipalResolver, TokenResolver, attach_principal,
};

/// Record stores backing each entity.
#[derive(Clone)]
pub struct Stores {
    pub reviews: Arc<dyn RecordStore<MenuItemReview>>,
    pub menu_items: Arc<dyn RecordStore<DiningCommonsMenuItem>>,
    pub organizations: Arc<dyn RecordStore<Organization>>,
    pub articles: Arc<dyn RecordStore<Article>>,
}

impl Stores {
    /// Empty in-process stores.
    pub fn in_memory() -> Self {
        Self {
            reviews: Arc::new(MemoryStore::new()),
            menu_items: Arc::new(MemoryStore::new()),
            organizations: Arc::new(MemoryStore::new()),
            articles: Arc::new(MemoryStore::new()),
        }
    }

    /// Every entity in one SQLite database.
    pub fn sqlite(store: SqliteStore) -> Self {
        Self {
            reviews: Arc::new(store.clone()),
            menu_items: Arc::new(store.clone()),
            organizations: Arc::new(store.clone()),
            articles: Arc::new(store),
        }
    }
}

/// Builds the HTTP API router over the given stores.
///
/// Every entity is served with list, get and create. Update and delete are
/// not mounted; a caller wanting them builds its own router with
/// [`mount`] and [`Operation::ALL`], then wraps it with [`with_principals`].
pub fn build_router(stores: Stores, resolver: Arc<dyn PrincipalResolver>) -> Router {
    let routes = Router::new()
        .merge(mount(ResourceService::new(stores.reviews), &Operation::READ_CREATE))
        .merge(mount(ResourceService::new(stores.menu_items), &Operation::READ_CREATE))
        .merge(mount(ResourceService::new(stores.organizations), &Operation::READ_CREATE))
        .merge(mount(ResourceService::new(stores.articles), &Operation::READ_CREATE));
    with_principals(routes, resolver)
}

/// Wraps endpoint routes with principal resolution and request tracing.
pub fn with_principals(routes: Router, resolver: Arc<dyn PrincipalResolver>) -> Router {
    routes
        .layer(middleware::from_fn_with_state(resolver, attach_principal))
        .layer(TraceLayer::new_for_http())
}
