//! In-memory backend
//!
//! Records every call and can fail the next call of a given kind. Created
//! records are stored as sent; the mock does not assign ids.

use std::cell::RefCell;

use async_trait::async_trait;

use super::backend::CrudBackend;
use crate::api::{ApiError, ApiResult};
use crate::domain::{EntityId, Resource};

/// A call received by `MockBackend`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    List,
    Create,
    Update(EntityId),
    Delete(EntityId),
}

impl Call {
    fn same_kind(&self, other: &Call) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

pub struct MockBackend<T> {
    items: RefCell<Vec<T>>,
    calls: RefCell<Vec<Call>>,
    failures: RefCell<Vec<(Call, ApiError)>>,
}

impl<T: Resource> Default for MockBackend<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> MockBackend<T> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: RefCell::new(items),
            calls: RefCell::new(Vec::new()),
            failures: RefCell::new(Vec::new()),
        }
    }

    /// Fail the next call of the same kind as `call` (ids are ignored)
    pub fn fail_next(&self, call: Call, error: ApiError) {
        self.failures.borrow_mut().push((call, error));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: Call) -> usize {
        self.calls.borrow().iter().filter(|c| c.same_kind(&call)).count()
    }

    pub fn items(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        let mut failures = self.failures.borrow_mut();
        match failures.iter().position(|(c, _)| c.same_kind(&call)) {
            Some(index) => Err(failures.remove(index).1),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl<T: Resource> CrudBackend<T> for MockBackend<T> {
    async fn list(&self) -> ApiResult<Vec<T>> {
        self.record(Call::List)?;
        Ok(self.items())
    }

    async fn create(&self, draft: &T) -> ApiResult<Option<T>> {
        self.record(Call::Create)?;
        self.items.borrow_mut().push(draft.clone());
        Ok(Some(draft.clone()))
    }

    async fn update(&self, id: EntityId, draft: &T) -> ApiResult<Option<T>> {
        self.record(Call::Update(id))?;
        let mut items = self.items.borrow_mut();
        match items.iter_mut().find(|item| item.id() == Some(id)) {
            Some(item) => {
                *item = draft.clone();
                Ok(Some(draft.clone()))
            }
            None => Err(ApiError::Status { status: 404, message: None }),
        }
    }

    async fn delete(&self, id: EntityId) -> ApiResult<()> {
        self.record(Call::Delete(id))?;
        let mut items = self.items.borrow_mut();
        let before = items.len();
        items.retain(|item| item.id() != Some(id));
        if items.len() == before {
            return Err(ApiError::Status { status: 404, message: None });
        }
        Ok(())
    }
}
