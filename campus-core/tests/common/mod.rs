//! Shared test helpers for endpoint-set tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use campus_model::{
    Article, DiningCommonsMenuItem, FieldParams, MenuItemReview, Organization, Resource,
};
use campus_storage::{MemoryStore, RecordStore, StorageError, StorageResult};
use campus_types::{Code, RecordId, parse_local_datetime};

/// Record store that counts calls before delegating to a memory store.
pub struct CountingStore<R: Resource> {
    inner: MemoryStore<R>,
    fail: bool,
    pub find_all_calls: AtomicUsize,
    pub find_by_id_calls: AtomicUsize,
    pub save_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
}

impl<R: Resource> CountingStore<R> {
    pub fn new() -> Arc<Self> {
        Self::seeded(Vec::new())
    }

    pub fn seeded(records: Vec<R>) -> Arc<Self> {
        Arc::new(Self {
            inner: MemoryStore::with_records(records).unwrap(),
            fail: false,
            find_all_calls: AtomicUsize::new(0),
            find_by_id_calls: AtomicUsize::new(0),
            save_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        })
    }

    /// A store whose every call fails.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            inner: MemoryStore::new(),
            fail: true,
            find_all_calls: AtomicUsize::new(0),
            find_by_id_calls: AtomicUsize::new(0),
            save_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        })
    }

    pub fn total_calls(&self) -> usize {
        self.find_all_calls.load(Ordering::SeqCst)
            + self.find_by_id_calls.load(Ordering::SeqCst)
            + self.save_calls.load(Ordering::SeqCst)
            + self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn saves(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn lookups(&self) -> usize {
        self.find_by_id_calls.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> StorageResult<()> {
        if self.fail {
            Err(StorageError::InvalidData("disk on fire".into()))
        } else {
            Ok(())
        }
    }
}

impl<R: Resource> RecordStore<R> for CountingStore<R> {
    fn find_all(&self) -> StorageResult<Vec<R>> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.find_all()
    }

    fn find_by_id(&self, key: &R::Key) -> StorageResult<Option<R>> {
        self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.find_by_id(key)
    }

    fn save(&self, record: R) -> StorageResult<R> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.save(record)
    }

    fn delete(&self, record: &R) -> StorageResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.delete(record)
    }
}

pub fn params(pairs: &[(&str, &str)]) -> FieldParams {
    pairs.iter().copied().collect()
}

pub fn pizza_review(stars: i32, comments: &str) -> MenuItemReview {
    MenuItemReview {
        id: RecordId::UNASSIGNED,
        item_id: 1,
        reviewer_email: "yl@ucsb.edu".into(),
        stars,
        date_reviewed: parse_local_datetime("2022-04-28T14:35:00").unwrap(),
        comments: comments.into(),
    }
}

pub fn review_fields() -> FieldParams {
    params(&[
        ("itemId", "1"),
        ("reviewerEmail", "yl@ucsb.edu"),
        ("stars", "2"),
        ("dateReviewed", "2022-04-28T14:35:00"),
        ("comments", "pizzaReview1"),
    ])
}

pub fn dragon_noodles() -> DiningCommonsMenuItem {
    DiningCommonsMenuItem {
        id: RecordId::UNASSIGNED,
        dining_commons_code: "Carrillo".into(),
        name: "Dragon Noodles".into(),
        station: "Euro".into(),
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

pub fn first_day_article() -> Article {
    Article {
        id: RecordId::new(7),
        title: "firstDayOfClasses".into(),
        url: "20222".into(),
        explanation: "explanation".into(),
        email: "email".into(),
        date_added: parse_local_datetime("2022-01-03T00:00:00").unwrap(),
    }
}
