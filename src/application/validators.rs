/// Minimal email check used for waitlist signups: non-empty and contains `@`.
///
/// Deliberately permissive. No length cap and no RFC 5322 parsing.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.contains('@')
}

/// Canonical form an email is stored and compared under.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
