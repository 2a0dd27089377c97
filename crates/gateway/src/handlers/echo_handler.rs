//! Echo handler.

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::StatusCode,
    routing::post,
    Router,
};
use httpkit::{
    is_json_request, is_plain_text_request, media_type, write_json, write_plain_text,
    RequestView, ResponseBuffer, CONTENT_TYPE_HEADER,
};

use crate::config::MAX_ECHO_BODY_BYTES;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Create echo routes
pub fn echo_routes() -> Router<AppState> {
    Router::new().route("/echo", post(echo))
}

/// Echo a JSON or plain-text body back in the same media type
pub async fn echo(request: Request) -> AppResult<ResponseBuffer> {
    let mut buffer = ResponseBuffer::new();

    if is_json_request(&request) {
        let body = read_body(request.into_body()).await?;
        let value: serde_json::Value = serde_json::from_slice(&body)
            .map_err(|e| AppError::bad_request(format!("malformed JSON body: {}", e)))?;
        write_json(&mut buffer, StatusCode::OK, Some(&value))?;
    } else if is_plain_text_request(&request) {
        let body = read_body(request.into_body()).await?;
        write_plain_text(&mut buffer, StatusCode::OK, body)?;
    } else {
        let header = request.header_bytes(CONTENT_TYPE_HEADER).unwrap_or_default();
        return Err(AppError::UnsupportedMediaType(media_type(
            &String::from_utf8_lossy(header),
        )));
    }

    Ok(buffer)
}

async fn read_body(body: Body) -> AppResult<Vec<u8>> {
    let bytes = to_bytes(body, MAX_ECHO_BODY_BYTES)
        .await
        .map_err(|e| AppError::bad_request(format!("unreadable body: {}", e)))?;
    Ok(bytes.to_vec())
}
