use async_trait::async_trait;
use tracing::info;

use crate::{
    app_error::AppResult, entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::WaitlistSink,
};

/// Writes each accepted entry as one structured log event. No durability
/// beyond the process's own log retention.
pub struct StructuredLogSink;

#[async_trait]
impl WaitlistSink for StructuredLogSink {
    async fn append(&self, entry: &WaitlistEntry) -> AppResult<()> {
        info!(
            email = %entry.email,
            name = entry.name.as_deref().unwrap_or(""),
            age = entry.age,
            city = entry.city.as_deref().unwrap_or(""),
            country = entry.country.as_deref().unwrap_or(""),
            school = entry.school.as_deref().unwrap_or(""),
            early_access = entry.is_early_access.unwrap_or(false),
            created_at = %entry.created_at.to_rfc3339(),
            "new waitlist submission"
        );
        Ok(())
    }
}
