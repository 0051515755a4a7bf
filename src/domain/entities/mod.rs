pub mod failure_policy;
pub mod waitlist_entry;
