//! Test data factories for creating valid test fixtures.
//!
//! Use the closure parameter to override specific fields as needed.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::waitlist_entry::WaitlistEntry;

static NEXT_TEST_ID: AtomicI64 = AtomicI64::new(1_000);

/// Create a founder waitlist entry with a unique id.
pub fn create_test_entry(overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let id = NEXT_TEST_ID.fetch_add(1, Ordering::Relaxed);
    let mut entry = WaitlistEntry {
        id,
        email: format!("user{id}@example.com"),
        founder_member: true,
        created_at: test_datetime(),
    };
    overrides(&mut entry);
    entry
}

/// Create `n` distinct founder entries.
pub fn create_test_entries(n: usize) -> Vec<WaitlistEntry> {
    (0..n).map(|_| create_test_entry(|_| {})).collect()
}

/// Fixed timestamp for reproducible fixtures.
pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}
