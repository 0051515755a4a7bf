use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Waitlist is now closed")]
    WaitlistClosed,

    #[error("Record store is not configured")]
    StoreUnavailable,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Store error during {stage}: {message}")]
    Store { stage: StoreStage, message: String },
}

/// Step of the admission sequence a store failure happened in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum StoreStage {
    LookupEmail,
    Count,
    Insert,
}

impl StoreStage {
    /// Message shown to clients when this step fails.
    pub fn public_message(&self) -> &'static str {
        match self {
            StoreStage::LookupEmail | StoreStage::Count => "Failed to check waitlist status",
            StoreStage::Insert => "Failed to save to waitlist",
        }
    }
}

impl AppError {
    /// Tag a raw store failure with the admission step it came from.
    ///
    /// Errors that already carry a meaning of their own pass through untouched.
    pub fn at_stage(self, stage: StoreStage) -> Self {
        match self {
            AppError::Database(message) => AppError::Store { stage, message },
            other => other,
        }
    }

    /// Whether the error means the store could not serve the request.
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            AppError::StoreUnavailable | AppError::Database(_) | AppError::Store { .. }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
