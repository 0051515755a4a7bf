//! Test utilities.
//!
//! This module provides:
//! - Test data factories for waitlist rows
//! - An in-memory `WaitlistRepo` with failure injection
//! - `TestAppStateBuilder` for HTTP-level tests

mod app_state_builder;
mod factories;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use waitlist_mocks::*;
