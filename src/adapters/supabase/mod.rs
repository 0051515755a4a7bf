//! Waitlist store backed by the hosted database's REST interface (PostgREST dialect).
//!
//! Rows are inserted with `Prefer: return=representation`, looked up with
//! `column=eq.value` filters, and counted with head-only requests carrying
//! `Prefer: count=exact`, where the total comes back in `Content-Range`.

use async_trait::async_trait;
use reqwest::{
    Client, Method, RequestBuilder, Response, StatusCode,
    header::{AUTHORIZATION, CONTENT_RANGE},
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, de::DeserializeOwned};
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

pub const WAITLIST_TABLE: &str = "waitlist";

#[derive(Clone)]
pub struct SupabaseRestStore {
    client: Client,
    endpoint: Url,
    anon_key: SecretString,
}

#[derive(Deserialize)]
struct EmailRow {
    #[allow(dead_code)]
    email: String,
}

impl SupabaseRestStore {
    /// `base_url` is the project URL, e.g. `https://abc.supabase.co`. A path
    /// prefix (`https://proxy.example/supabase`) is kept with or without a
    /// trailing slash.
    pub fn new(client: Client, base_url: &Url, anon_key: SecretString) -> Result<Self, url::ParseError> {
        let mut base = base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join(&format!("rest/v1/{WAITLIST_TABLE}"))?;
        Ok(Self {
            client,
            endpoint,
            anon_key,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let key = self.anon_key.expose_secret();
        self.client
            .request(method, url)
            .header("apikey", key)
            .header(AUTHORIZATION, format!("Bearer {key}"))
    }

    async fn send(&self, builder: RequestBuilder, op: &'static str) -> AppResult<Response> {
        builder.send().await.map_err(|e| {
            tracing::error!(op, error = %e, "Record store request failed");
            AppError::Database(format!("{op} request failed"))
        })
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
        op: &'static str,
    ) -> AppResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Database(format!("Failed to read {op} response: {e}")))?;

        if !status.is_success() {
            tracing::error!(op, status = %status, body = %body, "Record store API error");
            return Err(AppError::Database(format!("{op} returned {status}")));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(op, body = %body, error = %e, "Failed to parse record store response");
            AppError::Database(format!("Failed to parse {op} response"))
        })
    }

    async fn head_count(&self, founders_only: bool) -> AppResult<i64> {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("select", "*");
            if founders_only {
                query.append_pair("founder_member", "eq.true");
            }
        }

        let response = self
            .send(
                self.request(Method::HEAD, url).header("Prefer", "count=exact"),
                "count",
            )
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, "Record store count failed");
            return Err(AppError::Database(format!("count returned {status}")));
        }

        response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range_total)
            .ok_or_else(|| {
                tracing::error!("Record store count response had no usable Content-Range");
                AppError::Database("count response missing total".into())
            })
    }
}

/// Total from a `Content-Range` value such as `0-24/3573` or `*/0`.
///
/// Returns `None` when the total is unknown (`*/*`) or malformed.
pub fn parse_content_range_total(value: &str) -> Option<i64> {
    let (_, total) = value.trim().rsplit_once('/')?;
    total.parse::<i64>().ok().filter(|n| *n >= 0)
}

#[async_trait]
impl WaitlistRepo for SupabaseRestStore {
    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("select", "email")
            .append_pair("email", &format!("eq.{email}"))
            .append_pair("limit", "1");

        let response = self
            .send(self.request(Method::GET, url), "lookup")
            .await?;
        let rows: Vec<EmailRow> = self.handle_response(response, "lookup").await?;
        Ok(!rows.is_empty())
    }

    async fn count_all(&self) -> AppResult<i64> {
        self.head_count(false).await
    }

    async fn count_founders(&self) -> AppResult<i64> {
        self.head_count(true).await
    }

    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let builder = self
            .request(Method::POST, self.endpoint.clone())
            .header("Prefer", "return=representation")
            .json(&[entry]);
        let response = self.send(builder, "insert").await?;

        // Unique violation on the email index
        if response.status() == StatusCode::CONFLICT {
            return Err(AppError::DuplicateEmail);
        }

        let rows: Vec<WaitlistEntry> = self.handle_response(response, "insert").await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| AppError::Database("insert returned no rows".into()))
    }
}
