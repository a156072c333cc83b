use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use crate::app::server::AppState;
use crate::core::profile::calculate;
use crate::core::{AssetStore, CalcRequest, CalcResponse};
use crate::utils::error::Result;

impl CalcRequest {
    /// 容錯解析：非 JSON、非物件或欄位不是字串時一律當作空字串
    pub fn from_json_body(body: &[u8]) -> Self {
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            my_date: field("my_date"),
            partner_date: field("partner_date"),
        }
    }
}

pub async fn calc(body: Bytes) -> Json<CalcResponse> {
    let request = CalcRequest::from_json_body(&body);
    let response = calculate(&request);

    tracing::debug!(
        "🔮 calc me={:?} partner={:?} score={}",
        response.me.western.map(|sign| sign.key),
        response.partner.western.map(|sign| sign.key),
        response.compatibility.score
    );

    Json(response)
}

pub async fn landing<S: AssetStore + Clone + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Html<Vec<u8>>> {
    let page = state.pages.read_file(&state.index_name).await?;
    Ok(Html(page))
}

pub async fn static_asset<S: AssetStore + Clone + 'static>(
    State(state): State<AppState<S>>,
    Path(path): Path<String>,
) -> Result<Response> {
    let data = state.statics.read_file(&path).await?;
    Ok(([(header::CONTENT_TYPE, content_type_for(&path))], data).into_response())
}

pub fn content_type_for(path: &str) -> &'static str {
    let extension = std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
