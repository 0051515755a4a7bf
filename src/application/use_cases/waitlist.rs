use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult, StoreStage},
    application::validators::{is_valid_email, normalize_email},
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

pub const DEFAULT_CAPACITY: i64 = 50;
pub const DEFAULT_FOUNDER_THRESHOLD: i64 = 50;

// ============================================================================
// Repository Trait
// ============================================================================

/// Port onto the record store holding waitlist rows.
///
/// Each method is one independent round-trip; nothing here is transactional.
#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Exact-match lookup on the (already normalized) email.
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    async fn count_all(&self) -> AppResult<i64>;

    async fn count_founders(&self) -> AppResult<i64>;

    /// Insert one row and return it as stored.
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry>;
}

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionLimits {
    /// Signups are refused once this many entries exist.
    pub capacity: i64,
    /// Entries accepted while the count is below this are founders.
    pub founder_threshold: i64,
}

impl Default for AdmissionLimits {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            founder_threshold: DEFAULT_FOUNDER_THRESHOLD,
        }
    }
}

/// Result of an accepted signup.
#[derive(Debug, Clone, Serialize)]
pub struct Admission {
    pub entry: WaitlistEntry,
    pub is_founder: bool,
    pub total_count: i64,
}

// ============================================================================
// Use Cases
// ============================================================================

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    limits: AdmissionLimits,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>, limits: AdmissionLimits) -> Self {
        Self { repo, limits }
    }

    /// Admit an email to the waitlist.
    ///
    /// The lookup, count and insert are three separate store calls. Two
    /// concurrent signups can both observe `capacity - 1` and both get in, so
    /// the capacity is a soft limit under concurrent writers.
    #[instrument(skip(self, raw_email))]
    pub async fn join(&self, raw_email: &str) -> AppResult<Admission> {
        if !is_valid_email(raw_email) {
            return Err(AppError::InvalidInput("Valid email is required".into()));
        }
        let email = normalize_email(raw_email);

        let exists = self
            .repo
            .exists_by_email(&email)
            .await
            .map_err(|e| e.at_stage(StoreStage::LookupEmail))?;
        if exists {
            return Err(AppError::DuplicateEmail);
        }

        let current = self
            .repo
            .count_all()
            .await
            .map_err(|e| e.at_stage(StoreStage::Count))?;
        if current >= self.limits.capacity {
            tracing::info!(current, capacity = self.limits.capacity, "Waitlist closed, signup refused");
            return Err(AppError::WaitlistClosed);
        }

        // Kept independent of the capacity check: with the default limits it
        // is always true here.
        let is_founder = current < self.limits.founder_threshold;

        let entry = self
            .repo
            .insert(&NewWaitlistEntry::new(email, is_founder))
            .await
            .map_err(|e| e.at_stage(StoreStage::Insert))?;

        tracing::info!(entry_id = entry.id, is_founder, "Waitlist signup accepted");

        Ok(Admission {
            entry,
            is_founder,
            total_count: current + 1,
        })
    }
}
