use crate::{
    adapters::{
        http::app_state::AppState, persistence::unconfigured::UnconfiguredStore,
        supabase::SupabaseRestStore,
    },
    infra::{
        config::{AppConfig, StoreConfig},
        db::run_migrations,
        error::InfraError,
        http_client::try_build_client,
        lazy_postgres_persistence, postgres_persistence,
    },
    use_cases::{
        waitlist::{WaitlistRepo, WaitlistUseCases},
        waitlist_count::WaitlistCountUseCases,
    },
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> Result<AppState, InfraError> {
    let config = AppConfig::from_env();
    let repo = init_store(&config).await?;
    Ok(build_app_state(config, repo))
}

/// Wire the use cases around an already constructed store.
pub fn build_app_state(config: AppConfig, repo: Arc<dyn WaitlistRepo>) -> AppState {
    let waitlist_use_cases = WaitlistUseCases::new(repo.clone(), config.limits);
    let waitlist_count_use_cases = WaitlistCountUseCases::new(repo, config.failure_policy);

    AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
        waitlist_count_use_cases: Arc::new(waitlist_count_use_cases),
    }
}

/// Construct the record store client once for the lifetime of the process.
pub async fn init_store(config: &AppConfig) -> Result<Arc<dyn WaitlistRepo>, InfraError> {
    let Some(store) = &config.store else {
        if config.failure_policy.is_degraded() {
            tracing::warn!("Record store not configured. Waitlist functionality will be disabled.");
            return Ok(Arc::new(UnconfiguredStore));
        }
        return Err(InfraError::ConfigMissing {
            var: "DATABASE_URL or SUPABASE_URL/SUPABASE_ANON_KEY",
        });
    };

    tracing::info!(
        store = store.kind(),
        policy = %config.failure_policy,
        capacity = config.limits.capacity,
        founder_threshold = config.limits.founder_threshold,
        "Initializing record store"
    );

    match store {
        StoreConfig::Postgres {
            database_url,
            max_connections,
            run_migrations: migrate,
        } => {
            // Degraded deployments must come up even when the database is down.
            if config.failure_policy.is_degraded() {
                let persistence = lazy_postgres_persistence(database_url, *max_connections)?;
                if *migrate {
                    if let Err(e) = run_migrations(persistence.pool()).await {
                        tracing::warn!(error = %e, "Skipping migrations, database unreachable");
                    }
                }
                return Ok(Arc::new(persistence));
            }

            let persistence = postgres_persistence(database_url, *max_connections).await?;
            if *migrate {
                run_migrations(persistence.pool()).await?;
            }
            Ok(Arc::new(persistence))
        }
        StoreConfig::Supabase { url, anon_key } => {
            let client = try_build_client().map_err(InfraError::HttpClient)?;
            let store = SupabaseRestStore::new(client, url, anon_key.clone())
                .map_err(InfraError::StoreUrl)?;
            Ok(Arc::new(store))
        }
    }
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs), skipped if the file can't be created
    let json_layer = File::create("app.log").ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
