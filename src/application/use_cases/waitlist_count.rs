use std::sync::Arc;

use tracing::instrument;

use crate::{
    app_error::AppResult, application::use_cases::waitlist::WaitlistRepo,
    domain::entities::failure_policy::FailurePolicy,
};

/// Read-only aggregates over the waitlist.
#[derive(Clone)]
pub struct WaitlistCountUseCases {
    repo: Arc<dyn WaitlistRepo>,
    policy: FailurePolicy,
}

impl WaitlistCountUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>, policy: FailurePolicy) -> Self {
        Self { repo, policy }
    }

    #[instrument(skip(self))]
    pub async fn total_count(&self) -> AppResult<i64> {
        self.apply_policy("total", self.repo.count_all().await)
    }

    #[instrument(skip(self))]
    pub async fn founder_count(&self) -> AppResult<i64> {
        self.apply_policy("founder", self.repo.count_founders().await)
    }

    fn apply_policy(&self, which: &'static str, result: AppResult<i64>) -> AppResult<i64> {
        match result {
            Err(err) if self.policy.is_degraded() && err.is_store_failure() => {
                tracing::warn!(count = which, error = %err, "Record store unavailable, reporting zero");
                Ok(0)
            }
            other => other,
        }
    }
}
