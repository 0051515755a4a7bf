use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// How read paths behave when the record store is missing or unreachable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[derive(Default)]
pub enum FailurePolicy {
    /// Store failures surface as errors.
    #[default]
    Strict,
    /// Counts fall back to zero; a missing store is tolerated at startup.
    Degraded,
}

impl FailurePolicy {
    pub fn is_degraded(&self) -> bool {
        matches!(self, FailurePolicy::Degraded)
    }
}
