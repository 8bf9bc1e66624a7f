use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::{is_valid_email, normalize_email},
    entities::waitlist_entry::WaitlistEntry,
};

/// Destination a validated entry is written to. One deployment configures
/// exactly one sink; strategies never cascade or fall back to each other.
#[async_trait]
pub trait WaitlistSink: Send + Sync {
    async fn append(&self, entry: &WaitlistEntry) -> AppResult<()>;
}

/// Raw signup fields as submitted by the form, before normalization.
#[derive(Debug)]
pub struct NewSignup {
    pub email: String,
    pub name: Option<String>,
    pub age: Option<u8>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub school: Option<String>,
    pub is_early_access: Option<bool>,
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    sink: Arc<dyn WaitlistSink>,
    fail_on_sink_error: bool,
}

impl WaitlistUseCases {
    pub fn new(sink: Arc<dyn WaitlistSink>, fail_on_sink_error: bool) -> Self {
        Self {
            sink,
            fail_on_sink_error,
        }
    }

    /// Normalizes and validates the signup, stamps it, and makes exactly one
    /// write attempt against the configured sink. No retries, no queueing.
    ///
    /// A sink failure either surfaces to the caller or is logged and
    /// swallowed, depending on `fail_on_sink_error`.
    #[instrument(skip(self, signup))]
    pub async fn submit(&self, signup: NewSignup) -> AppResult<WaitlistEntry> {
        let email = normalize_email(&signup.email);
        if !is_valid_email(&email) {
            return Err(AppError::InvalidInput("Invalid email address".to_string()));
        }

        let entry = WaitlistEntry {
            email,
            name: signup.name,
            age: signup.age,
            city: signup.city,
            country: signup.country,
            school: signup.school,
            is_early_access: signup.is_early_access,
            created_at: Utc::now(),
        };

        match self.sink.append(&entry).await {
            Ok(()) => {}
            Err(err) if !self.fail_on_sink_error => {
                // Never block a signup on a sink outage in this mode.
                tracing::error!(error = ?err, email = %entry.email, "waitlist sink write failed; accepting anyway");
            }
            Err(err) => return Err(err),
        }

        Ok(entry)
    }
}
