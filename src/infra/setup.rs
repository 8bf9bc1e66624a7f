use std::fs::File;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::{
        http::app_state::AppState,
        sink::{jsonl::JsonlFileSink, log::StructuredLogSink, sheets::SheetAppendSink},
    },
    infra::config::{AppConfig, SinkKind},
    use_cases::waitlist::{WaitlistSink, WaitlistUseCases},
};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let sink: Arc<dyn WaitlistSink> = match config.sink {
        SinkKind::Log => Arc::new(StructuredLogSink),
        SinkKind::File => Arc::new(JsonlFileSink::new(config.waitlist_file_path.clone())),
        SinkKind::Sheets => {
            let append_url = config
                .sheets_append_url
                .clone()
                .context("SHEETS_APPEND_URL must be set when WAITLIST_SINK=sheets")?;
            let api_token = config
                .sheets_api_token
                .clone()
                .context("SHEETS_API_TOKEN must be set when WAITLIST_SINK=sheets")?;
            Arc::new(SheetAppendSink::new(append_url, api_token))
        }
    };

    let waitlist = WaitlistUseCases::new(sink, config.fail_on_sink_error);

    Ok(AppState {
        config: Arc::new(config),
        waitlist: Arc::new(waitlist),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "youthpay_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs)
    let file = File::create("app.log").expect("cannot create log file");
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
