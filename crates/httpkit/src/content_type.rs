//! Content-Type inspection.

use crate::constants::{
    CONTENT_TYPE_HEADER, CONTENT_TYPE_HTML, CONTENT_TYPE_JSON, CONTENT_TYPE_PLAIN_TEXT,
};
use crate::request::RequestView;

/// Split a Content-Type header value into its media type and parameters.
///
/// Both halves are lowercased and trimmed. Everything after the first `;`
/// is the parameters string, empty when there is none:
///
/// ```
/// use httpkit::split_content_type;
///
/// let (media_type, parameters) = split_content_type("Application/JSON; Charset=UTF-8");
/// assert_eq!(media_type, "application/json");
/// assert_eq!(parameters, "charset=utf-8");
/// ```
pub fn split_content_type(header: &str) -> (String, String) {
    let header = header.trim().to_lowercase();

    match header.split_once(';') {
        Some((media_type, parameters)) => {
            (media_type.trim().to_string(), parameters.trim().to_string())
        }
        None => (header, String::new()),
    }
}

/// Normalized media type of a Content-Type header value
pub fn media_type(header: &str) -> String {
    split_content_type(header).0
}

/// Check whether the request's Content-Type media type equals `content_type`.
///
/// Parameters such as `charset` are ignored, whatever bytes they contain; a
/// missing header never matches.
pub fn is_content_type<R>(request: &R, content_type: &str) -> bool
where
    R: RequestView + ?Sized,
{
    let header = request.header_bytes(CONTENT_TYPE_HEADER).unwrap_or_default();
    let media_type_bytes = match header.iter().position(|&b| b == b';') {
        Some(idx) => &header[..idx],
        None => header,
    };

    media_type(&String::from_utf8_lossy(media_type_bytes)) == content_type.trim().to_lowercase()
}

pub fn is_json_request<R: RequestView + ?Sized>(request: &R) -> bool {
    is_content_type(request, CONTENT_TYPE_JSON)
}

pub fn is_html_request<R: RequestView + ?Sized>(request: &R) -> bool {
    is_content_type(request, CONTENT_TYPE_HTML)
}

pub fn is_plain_text_request<R: RequestView + ?Sized>(request: &R) -> bool {
    is_content_type(request, CONTENT_TYPE_PLAIN_TEXT)
}
