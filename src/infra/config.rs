use std::net::SocketAddr;

use env_helpers::get_env_default;
use secrecy::SecretString;
use url::Url;

use crate::{
    application::use_cases::waitlist::{AdmissionLimits, DEFAULT_CAPACITY, DEFAULT_FOUNDER_THRESHOLD},
    domain::entities::failure_policy::FailurePolicy,
};

/// Placeholder values shipped in `.env.example`; treated as unset.
const PLACEHOLDER_URL: &str = "your_supabase_url_here";
const PLACEHOLDER_KEY: &str = "your_supabase_anon_key_here";

/// Which record store backs the waitlist.
pub enum StoreConfig {
    Postgres {
        database_url: SecretString,
        max_connections: u32,
        /// Apply `migrations/` on startup.
        run_migrations: bool,
    },
    Supabase {
        url: Url,
        anon_key: SecretString,
    },
}

impl StoreConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            StoreConfig::Postgres { .. } => "postgres",
            StoreConfig::Supabase { .. } => "supabase",
        }
    }
}

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// `None` when neither a database URL nor a valid REST pair is set.
    pub store: Option<StoreConfig>,
    pub failure_policy: FailurePolicy,
    pub limits: AdmissionLimits,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)));
        let failure_policy: FailurePolicy = get_env_default("WAITLIST_FAILURE_POLICY", FailurePolicy::Strict);
        let capacity: i64 = get_env_default("WAITLIST_CAPACITY", DEFAULT_CAPACITY);
        let founder_threshold: i64 =
            get_env_default("WAITLIST_FOUNDER_THRESHOLD", DEFAULT_FOUNDER_THRESHOLD);
        let max_connections: u32 = get_env_default("DB_MAX_CONNECTIONS", 5);
        // Schema is normally managed out-of-band
        let run_migrations: bool = get_env_default("RUN_MIGRATIONS", false);

        let database_url = non_empty_var("DATABASE_URL");
        let supabase = supabase_pair(non_empty_var("SUPABASE_URL"), non_empty_var("SUPABASE_ANON_KEY"));

        let store = match (database_url, supabase) {
            (Some(database_url), _) => Some(StoreConfig::Postgres {
                database_url: SecretString::new(database_url.into()),
                max_connections,
                run_migrations,
            }),
            (None, Some((url, anon_key))) => Some(StoreConfig::Supabase { url, anon_key }),
            (None, None) => None,
        };

        Self {
            bind_addr,
            store,
            failure_policy,
            limits: AdmissionLimits {
                capacity,
                founder_threshold,
            },
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Accept the REST credentials only when both are real values and the URL is HTTPS.
pub fn supabase_pair(url: Option<String>, anon_key: Option<String>) -> Option<(Url, SecretString)> {
    let url = url.filter(|u| u != PLACEHOLDER_URL && u.starts_with("https://"))?;
    let anon_key = anon_key.filter(|k| k != PLACEHOLDER_KEY)?;
    let url = Url::parse(&url).ok()?;
    Some((url, SecretString::new(anon_key.into())))
}
