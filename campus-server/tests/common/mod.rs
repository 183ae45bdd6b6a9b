//! Test server plumbing shared by the HTTP tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use campus_core::{Operation, Principal, ResourceService};
use campus_model::{MenuItemReview, Organization, Resource};
use campus_server::{Stores, TokenResolver, build_router, mount, with_principals};
use campus_storage::{MemoryStore, RecordStore, StorageResult};
use campus_types::{Code, RecordId, parse_local_datetime};

pub const USER_TOKEN: &str = "user-token";
pub const ADMIN_TOKEN: &str = "admin-token";

/// Memory store that counts every call it receives.
pub struct CountingStore<R: Resource> {
    inner: MemoryStore<R>,
    pub calls: AtomicUsize,
    pub saves: AtomicUsize,
}

impl<R: Resource> CountingStore<R> {
    pub fn seeded(records: Vec<R>) -> Arc<Self> {
        Arc::new(Self {
            inner: MemoryStore::with_records(records).unwrap(),
            calls: AtomicUsize::new(0),
            saves: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl<R: Resource> RecordStore<R> for CountingStore<R> {
    fn find_all(&self) -> StorageResult<Vec<R>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_all()
    }

    fn find_by_id(&self, key: &R::Key) -> StorageResult<Option<R>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(key)
    }

    fn save(&self, record: R) -> StorageResult<R> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(record)
    }

    fn delete(&self, record: &R) -> StorageResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(record)
    }
}

pub fn resolver() -> TokenResolver {
    TokenResolver::new()
        .with_token(USER_TOKEN, Principal::user("user@ucsb.edu"))
        .with_token(ADMIN_TOKEN, Principal::admin("admin@ucsb.edu"))
}

/// Spin up the default router on an OS-assigned port, returning the base URL.
pub async fn spawn_test_server(stores: Stores) -> String {
    spawn_router(build_router(stores, Arc::new(resolver()))).await
}

/// Spin up a single entity with every operation mounted, update and delete
/// included.
pub async fn spawn_full_crud_server<R: Resource>(store: Arc<dyn RecordStore<R>>) -> String {
    let routes = mount(ResourceService::new(store), &Operation::ALL);
    spawn_router(with_principals(routes, Arc::new(resolver()))).await
}

pub async fn spawn_router(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

pub fn pizza_review() -> MenuItemReview {
    MenuItemReview {
        id: RecordId::UNASSIGNED,
        item_id: 1,
        reviewer_email: "yl@ucsb.edu".into(),
        stars: 2,
        date_reviewed: parse_local_datetime("2022-04-28T14:35:00").unwrap(),
        comments: "pizzaReview1".into(),
    }
}

pub fn zpr() -> Organization {
    Organization {
        org_code: Code::from("ZPR"),
        org_translation_short: "ZETA PHI RHO".into(),
        org_translation: "ZETA PHI RHO".into(),
        inactive: false,
    }
}
