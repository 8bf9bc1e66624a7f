use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;
use url::Url;

/// Which sink a deployment writes accepted entries to. Exactly one is
/// active per process; there is no fallback between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Log,
    File,
    Sheets,
}

impl FromStr for SinkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "log" => Ok(SinkKind::Log),
            "file" => Ok(SinkKind::File),
            "sheets" => Ok(SinkKind::Sheets),
            other => Err(format!(
                "unknown sink '{other}' (expected log, file, or sheets)"
            )),
        }
    }
}

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    pub sink: SinkKind,
    /// Target of the `file` sink; the parent directory is created on demand.
    pub waitlist_file_path: PathBuf,
    /// Append-row endpoint of the `sheets` sink. Required when that sink is
    /// selected, ignored otherwise.
    pub sheets_append_url: Option<Url>,
    pub sheets_api_token: Option<SecretString>,
    /// Strict mode: a sink write failure fails the request with a 500.
    /// Default is to log the failure and still accept the signup.
    pub fail_on_sink_error: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3001".parse().unwrap());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");

        let sink: SinkKind = get_env_default("WAITLIST_SINK", SinkKind::Log);
        let waitlist_file_path: PathBuf =
            get_env_default("WAITLIST_FILE_PATH", PathBuf::from("./.data/waitlist.jsonl"));

        let sheets_append_url: Option<Url> = std::env::var("SHEETS_APPEND_URL")
            .ok()
            .and_then(|s| s.parse().ok());
        let sheets_api_token: Option<SecretString> = std::env::var("SHEETS_API_TOKEN")
            .ok()
            .map(|s| SecretString::new(s.into()));

        let fail_on_sink_error: bool = get_env_default("WAITLIST_FAIL_ON_SINK_ERROR", false);

        Self {
            bind_addr,
            cors_origin,
            sink,
            waitlist_file_path,
            sheets_append_url,
            sheets_api_token,
            fail_on_sink_error,
        }
    }
}
