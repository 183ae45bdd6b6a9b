//! Generic axum handlers, one set instantiated per entity.

use std::collections::BTreeMap;

use axum::body::Bytes;
use axum::extract::{Extension, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{MethodFilter, MethodRouter};
use axum::{Json, Router};
use campus_core::{ApiError, Method, MessageBody, Operation, Principal, ResourceService};
use campus_model::{FieldParams, Resource};
use tracing::debug;

/// An [`ApiError`] rendered as an HTTP response.
#[derive(Debug)]
pub struct HttpError(pub ApiError);

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0.body())).into_response()
    }
}

type HttpResult<T> = Result<Json<T>, HttpError>;

/// Query-string pairs in arrival order.
type Fields = Query<Vec<(String, String)>>;

fn field_params(Query(pairs): Fields) -> FieldParams {
    pairs.into_iter().collect()
}

async fn list<R: Resource>(
    State(service): State<ResourceService<R>>,
    Extension(principal): Extension<Principal>,
) -> HttpResult<Vec<R>> {
    Ok(Json(service.list(&principal)?))
}

async fn get_by_id<R: Resource>(
    State(service): State<ResourceService<R>>,
    Extension(principal): Extension<Principal>,
    fields: Fields,
) -> HttpResult<R> {
    Ok(Json(service.get_by_id(&principal, &field_params(fields))?))
}

async fn create<R: Resource>(
    State(service): State<ResourceService<R>>,
    Extension(principal): Extension<Principal>,
    fields: Fields,
) -> HttpResult<R> {
    Ok(Json(service.create(&principal, &field_params(fields))?))
}

async fn update<R: Resource>(
    State(service): State<ResourceService<R>>,
    Extension(principal): Extension<Principal>,
    fields: Fields,
    body: Bytes,
) -> HttpResult<R> {
    Ok(Json(service.update(&principal, &field_params(fields), &body)?))
}

async fn delete<R: Resource>(
    State(service): State<ResourceService<R>>,
    Extension(principal): Extension<Principal>,
    fields: Fields,
) -> HttpResult<MessageBody> {
    Ok(Json(service.delete(&principal, &field_params(fields))?))
}

fn method_filter(method: Method) -> MethodFilter {
    match method {
        Method::Get => MethodFilter::GET,
        Method::Post => MethodFilter::POST,
        Method::Put => MethodFilter::PUT,
        Method::Delete => MethodFilter::DELETE,
    }
}

/// Builds the router for one endpoint set from its route table.
///
/// Operations sharing a path are served by one method router.
pub fn mount<R: Resource>(service: ResourceService<R>, operations: &[Operation]) -> Router {
    let table = service.routes(operations);
    let mut by_path: BTreeMap<String, MethodRouter<ResourceService<R>>> = BTreeMap::new();

    for spec in &table.routes {
        let filter = method_filter(spec.method);
        let slot = by_path.remove(&spec.path).unwrap_or_else(MethodRouter::new);
        let routed = match spec.operation {
            Operation::List => slot.on(filter, list::<R>),
            Operation::Get => slot.on(filter, get_by_id::<R>),
            Operation::Create => slot.on(filter, create::<R>),
            Operation::Update => slot.on(filter, update::<R>),
            Operation::Delete => slot.on(filter, delete::<R>),
        };
        debug!(
            entity = table.entity,
            method = %spec.method,
            path = %spec.path,
            role = %spec.required_role,
            "mounted route"
        );
        by_path.insert(spec.path.clone(), routed);
    }

    by_path
        .into_iter()
        .fold(Router::new(), |router, (path, routed)| router.route(&path, routed))
        .with_state(service)
}
