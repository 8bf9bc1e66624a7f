//! Test utilities: an in-memory recording sink and a state builder for
//! exercising the real router without touching the filesystem or network.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use axum::http::HeaderValue;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    entities::waitlist_entry::WaitlistEntry,
    infra::config::{AppConfig, SinkKind},
    use_cases::waitlist::{WaitlistSink, WaitlistUseCases},
};

/// Records appended entries in memory. Can be told to fail every append,
/// for exercising the sink-failure policies.
pub struct MemorySink {
    entries: Mutex<Vec<WaitlistEntry>>,
    fail: AtomicBool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }

    pub fn fail_next_appends(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn recorded(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WaitlistSink for MemorySink {
    async fn append(&self, entry: &WaitlistEntry) -> AppResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::Sink("simulated sink outage".to_string()));
        }
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

pub fn test_config(fail_on_sink_error: bool) -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        sink: SinkKind::Log,
        waitlist_file_path: "./.data/waitlist.jsonl".into(),
        sheets_append_url: None,
        sheets_api_token: None,
        fail_on_sink_error,
    }
}

pub fn test_app_state(sink: Arc<MemorySink>, fail_on_sink_error: bool) -> AppState {
    let waitlist = WaitlistUseCases::new(sink, fail_on_sink_error);
    AppState {
        config: Arc::new(test_config(fail_on_sink_error)),
        waitlist: Arc::new(waitlist),
    }
}
