//! Entity records served by the campus API.
//!
//! Each record is a flat value with a key and scalar attributes. The JSON
//! field order follows the struct declaration order, key first.

mod article;
mod dining_commons_menu_item;
mod menu_item_review;
mod organization;

pub use article::Article;
pub use dining_commons_menu_item::DiningCommonsMenuItem;
pub use menu_item_review::MenuItemReview;
pub use organization::Organization;
