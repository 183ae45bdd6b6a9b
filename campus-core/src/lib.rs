//! Generic CRUD endpoint sets for the campus API.
//!
//! One [`ResourceService`] per entity type exposes list, get-by-id, create,
//! update and delete. Every call checks the caller's [`Principal`] against
//! the operation's required [`Role`] before the record store is touched,
//! and every failure is an [`ApiError`] that knows its wire form.
//!
//! The HTTP boundary is not part of this crate: it consumes the explicit
//! [`RouteTable`] to decide which paths exist, which method each uses and
//! which role each requires.

mod auth;
mod error;
mod routes;
mod service;

pub use auth::{AccessPolicy, Principal, Role};
pub use error::{ApiError, ApiResult, ErrorBody, MessageBody};
pub use routes::{Method, Operation, RouteSpec, RouteTable};
pub use service::{ID_PARAM, ResourceService};
