use async_trait::async_trait;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::AppResult,
    application::use_cases::waitlist::WaitlistRepo,
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS (SELECT 1 FROM waitlist WHERE email = $1)"#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn count_all(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM waitlist"#)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn count_founders(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM waitlist WHERE founder_member = TRUE"#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let rec = sqlx::query_as::<_, WaitlistEntry>(
            r#"INSERT INTO waitlist (email, founder_member, created_at)
               VALUES ($1, $2, $3)
               RETURNING id, email, founder_member, created_at"#,
        )
        .bind(&entry.email)
        .bind(entry.founder_member)
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(rec)
    }
}
