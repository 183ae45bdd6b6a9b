//! Explicit route declarations.
//!
//! Each endpoint set publishes a [`RouteTable`]: one [`RouteSpec`] per
//! enabled operation, naming its method, path and required role. The HTTP
//! boundary builds its router from these tables and nothing else.

use std::fmt;

use campus_model::Resource;

use crate::{AccessPolicy, Role};

/// An endpoint-set operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Self::List,
        Self::Get,
        Self::Create,
        Self::Update,
        Self::Delete,
    ];

    /// Operations every entity exposes.
    pub const READ_CREATE: [Operation; 3] = [Self::List, Self::Get, Self::Create];

    pub fn is_read(&self) -> bool {
        matches!(self, Self::List | Self::Get)
    }

    /// HTTP method the operation is served on.
    pub fn method(&self) -> Method {
        match self {
            Self::List | Self::Get => Method::Get,
            Self::Create => Method::Post,
            Self::Update => Method::Put,
            Self::Delete => Method::Delete,
        }
    }

    /// Path of the operation for an entity wire name.
    pub fn path(&self, entity: &str) -> String {
        match self {
            Self::List => format!("/api/{entity}/all"),
            Self::Create => format!("/api/{entity}/post"),
            Self::Get | Self::Update | Self::Delete => format!("/api/{entity}"),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// HTTP method, independent of any web framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// One declared route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    pub operation: Operation,
    pub method: Method,
    pub path: String,
    pub required_role: Role,
}

/// Declared routes of one endpoint set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    pub entity: &'static str,
    pub routes: Vec<RouteSpec>,
}

impl RouteTable {
    /// Declares `operations` for resource `R` with roles from `policy`.
    ///
    /// Repeated operations are declared once.
    pub fn for_resource<R: Resource>(policy: &AccessPolicy, operations: &[Operation]) -> Self {
        let entity = R::name();
        let mut routes: Vec<RouteSpec> = Vec::with_capacity(operations.len());
        for &operation in operations {
            if routes.iter().any(|r| r.operation == operation) {
                continue;
            }
            routes.push(RouteSpec {
                operation,
                method: operation.method(),
                path: operation.path(entity),
                required_role: policy.required_role(operation),
            });
        }
        Self { entity, routes }
    }

    pub fn is_enabled(&self, operation: Operation) -> bool {
        self.route(operation).is_some()
    }

    pub fn route(&self, operation: Operation) -> Option<&RouteSpec> {
        self.routes.iter().find(|r| r.operation == operation)
    }
}
