//! Shared record builders for store tests.

#![allow(dead_code)]

use campus_model::{MenuItemReview, Organization};
use campus_types::{Code, RecordId, parse_local_datetime};

pub fn review(comments: &str, stars: i32) -> MenuItemReview {
    MenuItemReview {
        id: RecordId::UNASSIGNED,
        item_id: 1,
        reviewer_email: "yl@ucsb.edu".into(),
        stars,
        date_reviewed: parse_local_datetime("2022-04-28T14:35:00").unwrap(),
        comments: comments.into(),
    }
}

pub fn organization(code: &str, inactive: bool) -> Organization {
    Organization {
        org_code: Code::from(code),
        org_translation_short: format!("{code} SHORT"),
        org_translation: format!("{code} FULL NAME"),
        inactive,
    }
}
