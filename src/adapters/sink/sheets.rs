use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::WaitlistSink,
};

/// Relays each accepted entry as one appended row on an external sheet.
/// The credential and target come from configuration; this adapter knows
/// nothing about the sheet beyond its append endpoint.
pub struct SheetAppendSink {
    client: Client,
    append_url: Url,
    api_token: SecretString,
}

impl SheetAppendSink {
    pub fn new(append_url: Url, api_token: SecretString) -> Self {
        Self {
            client: Client::new(),
            append_url,
            api_token,
        }
    }
}

#[derive(Serialize)]
struct AppendRowReq {
    values: Vec<Vec<String>>,
}

/// Fixed column layout: name, age, city, country, email, early-access
/// flag as Yes/No, ISO timestamp. Absent optionals become empty cells.
fn row(entry: &WaitlistEntry) -> Vec<String> {
    vec![
        entry.name.clone().unwrap_or_default(),
        entry.age.map(|a| a.to_string()).unwrap_or_default(),
        entry.city.clone().unwrap_or_default(),
        entry.country.clone().unwrap_or_default(),
        entry.email.clone(),
        if entry.is_early_access == Some(true) {
            "Yes".to_string()
        } else {
            "No".to_string()
        },
        entry.created_at.to_rfc3339(),
    ]
}

#[async_trait]
impl WaitlistSink for SheetAppendSink {
    async fn append(&self, entry: &WaitlistEntry) -> AppResult<()> {
        let body = AppendRowReq {
            values: vec![row(entry)],
        };
        self.client
            .post(self.append_url.clone())
            .bearer_auth(self.api_token.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Sink(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::Sink(e.to_string()))?;
        Ok(())
    }
}
