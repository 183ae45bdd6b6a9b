//! Role-based access for endpoint sets.
//!
//! Two roles:
//! - `user`: any signed-in campus member, may read
//! - `admin`: may create, update and delete
//!
//! Role checks are plain set membership. An admin principal normally
//! carries both roles; holding `admin` alone does not grant reads.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{ApiError, ApiResult, Operation};

/// A role a principal may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(alias = "ROLE_USER", alias = "USER")]
    User,
    #[serde(alias = "ROLE_ADMIN", alias = "ADMIN")]
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resolved identity attached to a call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: BTreeSet<Role>,
}

impl Principal {
    /// A caller with no verified identity.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A signed-in caller holding exactly `roles`.
    pub fn with_roles(email: impl Into<String>, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            authenticated: true,
            email: Some(email.into()),
            roles: roles.into_iter().collect(),
        }
    }

    /// A signed-in caller with the base role.
    pub fn user(email: impl Into<String>) -> Self {
        Self::with_roles(email, [Role::User])
    }

    /// A signed-in caller with both roles.
    pub fn admin(email: impl Into<String>) -> Self {
        Self::with_roles(email, [Role::User, Role::Admin])
    }

    /// Returns true if the principal is signed in and holds `role`.
    pub fn has_role(&self, role: Role) -> bool {
        self.authenticated && self.roles.contains(&role)
    }
}

/// Required role per operation for one endpoint set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    required: BTreeMap<Operation, Role>,
}

impl AccessPolicy {
    /// Reads need `user`; writes need `admin`.
    pub fn standard() -> Self {
        let required = Operation::ALL
            .iter()
            .map(|&op| {
                let role = if op.is_read() { Role::User } else { Role::Admin };
                (op, role)
            })
            .collect();
        Self { required }
    }

    /// Overrides the role required for one operation.
    #[must_use]
    pub fn with_role(mut self, operation: Operation, role: Role) -> Self {
        self.required.insert(operation, role);
        self
    }

    pub fn required_role(&self, operation: Operation) -> Role {
        self.required.get(&operation).copied().unwrap_or(Role::Admin)
    }

    /// Rejects the call unless the principal holds the operation's role.
    pub fn authorize(
        &self,
        entity: &str,
        principal: &Principal,
        operation: Operation,
    ) -> ApiResult<()> {
        let required = self.required_role(operation);
        if principal.has_role(required) {
            return Ok(());
        }

        warn!(
            entity,
            %operation,
            %required,
            authenticated = principal.authenticated,
            "access denied"
        );
        Err(ApiError::AccessDenied { operation, required })
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
