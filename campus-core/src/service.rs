use std::sync::Arc;

use campus_model::{FieldParams, Resource, ValidationError};
use campus_storage::{RecordStore, StorageError};
use tracing::{debug, info, warn};

use crate::{AccessPolicy, ApiError, ApiResult, MessageBody, Operation, Principal, RouteTable};

/// Request field naming the record key on get, update and delete.
pub const ID_PARAM: &str = "id";

/// CRUD endpoint set for one entity type.
///
/// Stateless between calls: every operation authorizes, then goes straight
/// to the record store.
pub struct ResourceService<R: Resource> {
    store: Arc<dyn RecordStore<R>>,
    policy: AccessPolicy,
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            policy: self.policy.clone(),
        }
    }
}

impl<R: Resource> ResourceService<R> {
    /// Creates an endpoint set with the standard access policy.
    pub fn new(store: Arc<dyn RecordStore<R>>) -> Self {
        Self::with_policy(store, AccessPolicy::standard())
    }

    pub fn with_policy(store: Arc<dyn RecordStore<R>>, policy: AccessPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Declares routes for `operations` under this set's policy.
    pub fn routes(&self, operations: &[Operation]) -> RouteTable {
        RouteTable::for_resource::<R>(&self.policy, operations)
    }

    /// Returns every record in store order.
    pub fn list(&self, principal: &Principal) -> ApiResult<Vec<R>> {
        self.authorize(principal, Operation::List)?;
        let records = self.store.find_all().map_err(store_failure::<R>)?;
        debug!(entity = R::name(), count = records.len(), "listed records");
        Ok(records)
    }

    /// Returns the record named by the `id` field.
    pub fn get_by_id(&self, principal: &Principal, params: &FieldParams) -> ApiResult<R> {
        self.authorize(principal, Operation::Get)?;
        let key = params.key::<R::Key>(ID_PARAM)?;
        self.find_existing(&key)
    }

    /// Builds a record from the create fields and saves it.
    ///
    /// Returns the record as the store echoed it, with any assigned key.
    pub fn create(&self, principal: &Principal, params: &FieldParams) -> ApiResult<R> {
        self.authorize(principal, Operation::Create)?;
        R::SCHEMA.validate(params)?;
        let record = R::from_params(params)?;

        let saved = self.store.save(record).map_err(store_failure::<R>)?;
        info!(entity = R::name(), key = %saved.key(), "created record");
        Ok(saved)
    }

    /// Replaces every attribute of an existing record with those in `body`.
    ///
    /// The key always comes from the `id` field, never from the body.
    pub fn update(
        &self,
        principal: &Principal,
        params: &FieldParams,
        body: &[u8],
    ) -> ApiResult<R> {
        self.authorize(principal, Operation::Update)?;
        let key = params.key::<R::Key>(ID_PARAM)?;
        let mut record = self.find_existing(&key)?;

        let incoming: R = serde_json::from_slice(body).map_err(ValidationError::from)?;
        record.apply_update(incoming);

        let saved = self.store.save(record).map_err(store_failure::<R>)?;
        info!(entity = R::name(), key = %saved.key(), "updated record");
        Ok(saved)
    }

    /// Removes the record named by the `id` field.
    pub fn delete(&self, principal: &Principal, params: &FieldParams) -> ApiResult<MessageBody> {
        self.authorize(principal, Operation::Delete)?;
        let key = params.key::<R::Key>(ID_PARAM)?;
        let record = self.find_existing(&key)?;

        self.store.delete(&record).map_err(store_failure::<R>)?;
        info!(entity = R::name(), %key, "deleted record");
        Ok(MessageBody::new(format!("{} with id {key} deleted", R::name())))
    }

    fn authorize(&self, principal: &Principal, operation: Operation) -> ApiResult<()> {
        self.policy.authorize(R::name(), principal, operation)
    }

    fn find_existing(&self, key: &R::Key) -> ApiResult<R> {
        match self.store.find_by_id(key).map_err(store_failure::<R>)? {
            Some(record) => Ok(record),
            None => {
                debug!(entity = R::name(), %key, "record not found");
                Err(ApiError::not_found::<R>(key))
            }
        }
    }
}

fn store_failure<R: Resource>(err: StorageError) -> ApiError {
    warn!(entity = R::name(), error = %err, "record store failure");
    ApiError::Store(err)
}
