use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    infra::config::AppConfig,
    use_cases::{waitlist::WaitlistUseCases, waitlist_count::WaitlistCountUseCases},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub waitlist_use_cases: Arc<WaitlistUseCases>,
    pub waitlist_count_use_cases: Arc<WaitlistCountUseCases>,
}

impl FromRef<AppState> for Arc<WaitlistUseCases> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.waitlist_use_cases.clone()
    }
}

impl FromRef<AppState> for Arc<WaitlistCountUseCases> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.waitlist_count_use_cases.clone()
    }
}
