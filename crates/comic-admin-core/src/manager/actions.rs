//! Manager actions
//!
//! Every mutation is followed by exactly one full refetch. The local
//! collection is never patched.

use std::fmt;

use thiserror::Error;

use super::backend::CrudBackend;
use crate::api::ApiError;
use crate::domain::{EntityId, Resource};

/// Which step of an action failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Fetching the collection (also the refetch after a mutation)
    Load,
    Save,
    Delete,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Load => "load",
            Stage::Save => "save",
            Stage::Delete => "delete",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{stage} failed: {source}")]
pub struct ActionError {
    pub stage: Stage,
    pub source: ApiError,
}

impl ActionError {
    fn at(stage: Stage) -> impl FnOnce(ApiError) -> Self {
        move |source| Self { stage, source }
    }
}

pub type ActionResult<T> = Result<Vec<T>, ActionError>;

pub async fn load<T, B>(backend: &B) -> ActionResult<T>
where
    T: Resource,
    B: CrudBackend<T> + ?Sized,
{
    backend.list().await.map_err(ActionError::at(Stage::Load))
}

/// Update when `editing` names a record, create otherwise; then refetch
pub async fn save<T, B>(backend: &B, editing: Option<EntityId>, draft: &T) -> ActionResult<T>
where
    T: Resource,
    B: CrudBackend<T> + ?Sized,
{
    let stored = match editing {
        Some(id) => backend.update(id, draft).await,
        None => backend.create(draft).await,
    };
    stored.map_err(ActionError::at(Stage::Save))?;
    load(backend).await
}

pub async fn remove<T, B>(backend: &B, id: EntityId) -> ActionResult<T>
where
    T: Resource,
    B: CrudBackend<T> + ?Sized,
{
    backend.delete(id).await.map_err(ActionError::at(Stage::Delete))?;
    load(backend).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Subscription, SubscriptionPlan};
    use crate::manager::{Call, MockBackend};

    fn plan(id: EntityId, plan: SubscriptionPlan) -> Subscription {
        Subscription { id: Some(id), plan }
    }

    #[tokio::test]
    async fn test_save_without_target_creates() {
        let backend = MockBackend::with_items(vec![plan(1, SubscriptionPlan::Monthly)]);
        let draft = Subscription { id: None, plan: SubscriptionPlan::Yearly };

        let items = save(&backend, None, &draft).await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(backend.calls(), vec![Call::Create, Call::List]);
    }

    #[tokio::test]
    async fn test_save_with_target_updates() {
        let backend = MockBackend::with_items(vec![plan(4, SubscriptionPlan::Monthly)]);

        let items = save(&backend, Some(4), &plan(4, SubscriptionPlan::Quarterly)).await.unwrap();

        assert_eq!(items, vec![plan(4, SubscriptionPlan::Quarterly)]);
        assert_eq!(backend.calls(), vec![Call::Update(4), Call::List]);
    }

    #[tokio::test]
    async fn test_failed_save_skips_refetch() {
        let backend = MockBackend::<Subscription>::new();
        backend.fail_next(Call::Create, ApiError::Status { status: 500, message: None });

        let err = save(&backend, None, &Subscription::draft()).await.unwrap_err();

        assert_eq!(err.stage, Stage::Save);
        assert_eq!(backend.calls(), vec![Call::Create]);
    }

    #[tokio::test]
    async fn test_refetch_failure_reported_as_load() {
        let backend = MockBackend::with_items(vec![plan(1, SubscriptionPlan::Monthly)]);
        backend.fail_next(Call::List, ApiError::Network("connection refused".into()));

        let err = remove::<Subscription, _>(&backend, 1).await.unwrap_err();

        assert_eq!(err.stage, Stage::Load);
        assert_eq!(err.to_string(), "load failed: network error: connection refused");
    }
}
