//! In-memory mock implementation of the waitlist store.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

/// Which store call should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Lookup,
    /// Both total and founder counts.
    Count,
    Insert,
}

/// In-memory implementation of WaitlistRepo for testing.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
    calls: AtomicUsize,
    fail_on: Option<FailOn>,
    unavailable: bool,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial entries for testing.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            ..Self::default()
        }
    }

    /// Make one kind of store call fail with a database error.
    pub fn failing_on(mut self, fail_on: FailOn) -> Self {
        self.fail_on = Some(fail_on);
        self
    }

    /// Behave like a store that was never configured.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Get all entries (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Number of store calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self, op: FailOn) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            return Err(AppError::StoreUnavailable);
        }
        if self.fail_on == Some(op) {
            return Err(AppError::Database("injected failure".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        self.enter(FailOn::Lookup)?;
        Ok(self.entries.lock().unwrap().iter().any(|e| e.email == email))
    }

    async fn count_all(&self) -> AppResult<i64> {
        self.enter(FailOn::Count)?;
        Ok(self.entries.lock().unwrap().len() as i64)
    }

    async fn count_founders(&self) -> AppResult<i64> {
        self.enter(FailOn::Count)?;
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.founder_member)
            .count() as i64)
    }

    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        self.enter(FailOn::Insert)?;
        let mut entries = self.entries.lock().unwrap();

        // Mirrors the unique index on email
        if entries.iter().any(|e| e.email == entry.email) {
            return Err(AppError::DuplicateEmail);
        }

        let id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let row = WaitlistEntry {
            id,
            email: entry.email.clone(),
            founder_member: entry.founder_member,
            created_at: entry.created_at,
        };
        entries.push(row.clone());
        Ok(row)
    }
}
