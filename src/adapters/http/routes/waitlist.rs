use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::post,
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    use_cases::waitlist::NewSignup,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignupPayload {
    email: String,
    name: Option<String>,
    age: Option<u8>,
    city: Option<String>,
    country: Option<String>,
    school: Option<String>,
    is_early_access: Option<bool>,
}

#[derive(Serialize)]
struct AckResponse {
    ok: bool,
    message: String,
}

// The body is parsed by hand rather than with the `Json` extractor so that
// malformed JSON and a wrong content type map onto the public envelope
// instead of the framework's default rejections.
async fn join(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    if !is_json_content_type(&headers) {
        return Err(AppError::UnsupportedMediaType);
    }

    let payload: SignupPayload = serde_json::from_slice(&body)
        .map_err(|_| AppError::InvalidInput("Invalid JSON body".to_string()))?;

    app_state
        .waitlist
        .submit(NewSignup {
            email: payload.email,
            name: payload.name,
            age: payload.age,
            city: payload.city,
            country: payload.country,
            school: payload.school,
            is_early_access: payload.is_early_access,
        })
        .await?;

    Ok(Json(AckResponse {
        ok: true,
        message: "Added to waitlist".to_string(),
    }))
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or("").trim())
        .is_some_and(|mime| mime.eq_ignore_ascii_case("application/json"))
}
