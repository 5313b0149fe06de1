//! Backend seam for managers
//!
//! `ApiClient` is the real implementation; `MockBackend` is the in-memory one.

use async_trait::async_trait;

use crate::api::ApiResult;
use crate::domain::{EntityId, Resource};

/// CRUD operations over one entity kind
///
/// Futures are not `Send`: in the browser they run on the JS event loop.
#[async_trait(?Send)]
pub trait CrudBackend<T: Resource> {
    /// Whole collection, in backend order
    async fn list(&self) -> ApiResult<Vec<T>>;

    /// Create from a draft; returns the stored record if the backend sends one
    async fn create(&self, draft: &T) -> ApiResult<Option<T>>;

    /// Overwrite record `id`
    async fn update(&self, id: EntityId, draft: &T) -> ApiResult<Option<T>>;

    async fn delete(&self, id: EntityId) -> ApiResult<()>;
}
