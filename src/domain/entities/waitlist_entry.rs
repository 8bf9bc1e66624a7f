use chrono::{DateTime, Utc};

/// One accepted waitlist signup. Created once per accepted request,
/// never updated or deleted; duplicates are allowed.
#[derive(Debug, Clone)]
pub struct WaitlistEntry {
    /// Trimmed and lowercased before validation and storage.
    pub email: String,
    pub name: Option<String>,
    pub age: Option<u8>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub school: Option<String>,
    pub is_early_access: Option<bool>,
    pub created_at: DateTime<Utc>,
}
