use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

/// Stand-in store for degraded deployments that run without a database.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnconfiguredStore;

impl UnconfiguredStore {
    fn unavailable<T>(op: &'static str) -> AppResult<T> {
        tracing::warn!(op, "Record store not configured, waitlist functionality disabled");
        Err(AppError::StoreUnavailable)
    }
}

#[async_trait]
impl WaitlistRepo for UnconfiguredStore {
    async fn exists_by_email(&self, _email: &str) -> AppResult<bool> {
        Self::unavailable("exists_by_email")
    }

    async fn count_all(&self) -> AppResult<i64> {
        Self::unavailable("count_all")
    }

    async fn count_founders(&self) -> AppResult<i64> {
        Self::unavailable("count_founders")
    }

    async fn insert(&self, _entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        Self::unavailable("insert")
    }
}
