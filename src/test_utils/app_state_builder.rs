//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates an `AppState`
//! backed by `InMemoryWaitlistRepo`, wired through the same
//! `build_app_state` used at startup.

use std::sync::Arc;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::waitlist::AdmissionLimits,
    domain::entities::{failure_policy::FailurePolicy, waitlist_entry::WaitlistEntry},
    infra::{config::AppConfig, setup::build_app_state},
    test_utils::InMemoryWaitlistRepo,
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let app_state = TestAppStateBuilder::new()
///     .with_entries(create_test_entries(50))
///     .with_policy(FailurePolicy::Degraded)
///     .build();
/// ```
pub struct TestAppStateBuilder {
    entries: Vec<WaitlistEntry>,
    limits: AdmissionLimits,
    policy: FailurePolicy,
    repo: Option<Arc<InMemoryWaitlistRepo>>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            entries: vec![],
            limits: AdmissionLimits::default(),
            policy: FailurePolicy::Strict,
            repo: None,
        }
    }

    /// Seed the store. Ignored when a repo is supplied with `with_repo`.
    pub fn with_entries(mut self, entries: Vec<WaitlistEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    pub fn with_limits(mut self, limits: AdmissionLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use a specific repo, e.g. to inspect it or inject failures.
    pub fn with_repo(mut self, repo: Arc<InMemoryWaitlistRepo>) -> Self {
        self.repo = Some(repo);
        self
    }

    pub fn build(self) -> AppState {
        let Self {
            entries,
            limits,
            policy,
            repo,
        } = self;

        let repo = repo.unwrap_or_else(|| Arc::new(InMemoryWaitlistRepo::with_entries(entries)));
        let config = AppConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            store: None,
            failure_policy: policy,
            limits,
        };

        build_app_state(config, repo)
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
