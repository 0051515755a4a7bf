use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the `waitlist` table, as returned by the store after insert.
///
/// Serialized with the store's column names so the signup response carries
/// the row unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct WaitlistEntry {
    pub id: i64,
    pub email: String,
    pub founder_member: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new waitlist row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewWaitlistEntry {
    pub email: String,
    pub founder_member: bool,
    pub created_at: DateTime<Utc>,
}

impl NewWaitlistEntry {
    pub fn new(email: impl Into<String>, founder_member: bool) -> Self {
        Self {
            email: email.into(),
            founder_member,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serializes_with_column_names() {
        let entry = WaitlistEntry {
            id: 7,
            email: "ada@example.com".to_string(),
            founder_member: true,
            created_at: "2024-05-01T12:00:00Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["founder_member"], true);
        assert!(json["created_at"].as_str().unwrap().starts_with("2024-05-01T12:00:00"));
    }

    #[test]
    fn entry_accepts_store_timestamps_with_offset() {
        let row = serde_json::json!({
            "id": 1,
            "email": "ada@example.com",
            "founder_member": false,
            "created_at": "2024-05-01T12:00:00.123456+00:00"
        });

        let entry: WaitlistEntry = serde_json::from_value(row).unwrap();
        assert_eq!(entry.id, 1);
        assert!(!entry.founder_member);
    }
}
