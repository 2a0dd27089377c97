//! Response writers.
//!
//! Each writer sets its headers, commits the status and then writes the
//! body, in that order. They are single-shot: calling two writers on the
//! same sink leaves the outcome to the sink.

use axum::http::{
    header::{CONTENT_TYPE, LOCATION},
    HeaderValue, StatusCode,
};
use serde::Serialize;

use crate::constants::{
    CONTENT_TYPE_HTML_WITH_CHARSET, CONTENT_TYPE_JSON_WITH_CHARSET,
    CONTENT_TYPE_PLAIN_TEXT_WITH_CHARSET,
};
use crate::error::{ResponseError, ResponseResult};
use crate::request::RequestView;
use crate::sink::ResponseSink;

/// Write `value` as a JSON response with the given status.
///
/// `None` produces a bare `204 No Content` without a Content-Type header.
///
/// The status and headers are committed before the value is serialized, so
/// when serialization fails the sink has already received them (but no body).
pub fn write_json<S, T>(sink: &mut S, status: StatusCode, value: Option<&T>) -> ResponseResult<()>
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    let Some(value) = value else {
        sink.write_status(StatusCode::NO_CONTENT);
        return Ok(());
    };

    sink.set_header(
        CONTENT_TYPE,
        HeaderValue::from_static(CONTENT_TYPE_JSON_WITH_CHARSET),
    );
    sink.write_status(status);

    let mut body = serde_json::to_vec(value).map_err(ResponseError::Serialize)?;
    body.push(b'\n');

    sink.write_body(&body).map_err(ResponseError::Write)
}

/// Write `payload` verbatim as a `text/plain` response.
pub fn write_plain_text<S, P>(sink: &mut S, status: StatusCode, payload: P) -> ResponseResult<()>
where
    S: ResponseSink + ?Sized,
    P: AsRef<[u8]>,
{
    write_text(
        sink,
        status,
        CONTENT_TYPE_PLAIN_TEXT_WITH_CHARSET,
        payload.as_ref(),
    )
}

/// Write `payload` verbatim as a `text/html` response.
///
/// An empty payload is rejected with [`ResponseError::PayloadNil`] before
/// anything reaches the sink; use [`write_no_content`] for empty responses.
pub fn write_html<S, P>(sink: &mut S, status: StatusCode, payload: P) -> ResponseResult<()>
where
    S: ResponseSink + ?Sized,
    P: AsRef<[u8]>,
{
    let payload = payload.as_ref();
    if payload.is_empty() {
        return Err(ResponseError::PayloadNil);
    }

    write_text(sink, status, CONTENT_TYPE_HTML_WITH_CHARSET, payload)
}

/// Write a bare `204 No Content`.
pub fn write_no_content<S: ResponseSink + ?Sized>(sink: &mut S) -> ResponseResult<()> {
    sink.write_status(StatusCode::NO_CONTENT);
    Ok(())
}

/// Redirect to `url` with the given status.
///
/// The caller picks the redirect code (301, 302, 303, 307 or 308). A target
/// without scheme or host is resolved against the request path; no body is
/// written.
pub fn redirect<S, R>(sink: &mut S, request: &R, status: StatusCode, url: &str) -> ResponseResult<()>
where
    S: ResponseSink + ?Sized,
    R: RequestView + ?Sized,
{
    let location = resolve_location(request.path(), url);
    let location = HeaderValue::from_str(&escape_location(&location))?;

    sink.set_header(LOCATION, location);
    sink.write_status(status);
    Ok(())
}

fn write_text<S>(
    sink: &mut S,
    status: StatusCode,
    content_type: &'static str,
    payload: &[u8],
) -> ResponseResult<()>
where
    S: ResponseSink + ?Sized,
{
    sink.set_header(CONTENT_TYPE, HeaderValue::from_static(content_type));
    sink.write_status(status);
    sink.write_body(payload).map_err(ResponseError::Write)
}

/// Resolve a scheme-less, host-less redirect target against `request_path`.
fn resolve_location(request_path: &str, target: &str) -> String {
    if is_opaque_target(target) {
        return target.to_string();
    }

    let request_path = if request_path.is_empty() { "/" } else { request_path };

    let joined = if target.starts_with('/') {
        target.to_string()
    } else {
        let dir = match request_path.rfind('/') {
            Some(idx) => &request_path[..=idx],
            None => "",
        };
        format!("{}{}", dir, target)
    };

    let (path, query) = match joined.find('?') {
        Some(idx) => joined.split_at(idx),
        None => (joined.as_str(), ""),
    };

    let mut location = clean_path(path);
    if path.ends_with('/') && !location.ends_with('/') {
        location.push('/');
    }
    location.push_str(query);
    location
}

/// Targets that are not a plain path: a network path (`//host`) or anything
/// with a `:` in its first segment. That covers `scheme:` prefixes as well as
/// malformed targets such as `:foo`, which are passed through untouched.
fn is_opaque_target(target: &str) -> bool {
    if target.starts_with("//") {
        return true;
    }

    target
        .split(|c| matches!(c, '/' | '?' | '#'))
        .next()
        .is_some_and(|segment| segment.contains(':'))
}

/// Lexically clean a slash-separated path: drop empty and `.` segments and
/// fold `..` into its parent.
fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if !rooted => segments.push(".."),
                _ => {}
            },
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Percent-escape bytes that cannot appear in a header value.
fn escape_location(location: &str) -> String {
    let mut escaped = String::with_capacity(location.len());
    for &byte in location.as_bytes() {
        if byte < 0x20 || byte >= 0x7f {
            escaped.push_str(&format!("%{:02X}", byte));
        } else {
            escaped.push(byte as char);
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::http::Request;
    use serde::ser::Error as _;
    use serde::Serializer;

    use super::*;
    use crate::error::ErrorKind;
    use crate::sink::ResponseBuffer;

    #[derive(Serialize)]
    struct Message {
        message: String,
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("channels cannot be serialized"))
        }
    }

    fn request(uri: &str) -> Request<()> {
        Request::builder().uri(uri).body(()).unwrap()
    }

    #[test]
    fn test_json_without_value_is_no_content() {
        let mut sink = ResponseBuffer::new();
        write_json(&mut sink, StatusCode::OK, None::<&Message>).unwrap();

        assert_eq!(sink.status(), StatusCode::NO_CONTENT);
        assert!(sink.header("content-type").is_none());
        assert!(sink.body().is_empty());
    }

    #[test]
    fn test_json_with_value() {
        let mut sink = ResponseBuffer::new();
        let message = Message {
            message: "Hello, World!".to_string(),
        };
        write_json(&mut sink, StatusCode::OK, Some(&message)).unwrap();

        assert_eq!(sink.status(), StatusCode::OK);
        assert_eq!(
            sink.header("content-type"),
            Some("application/json; charset=utf-8")
        );
        assert_eq!(sink.body(), b"{\"message\":\"Hello, World!\"}\n");

        let decoded: HashMap<String, String> = serde_json::from_slice(sink.body()).unwrap();
        assert_eq!(decoded["message"], "Hello, World!");
    }

    #[test]
    fn test_json_keeps_html_characters_unescaped() {
        let mut sink = ResponseBuffer::new();
        let value = HashMap::from([("h", "<b>&")]);
        write_json(&mut sink, StatusCode::OK, Some(&value)).unwrap();

        assert_eq!(sink.body(), b"{\"h\":\"<b>&\"}\n");
        let decoded: HashMap<String, String> = serde_json::from_slice(sink.body()).unwrap();
        assert_eq!(decoded["h"], "<b>&");
    }

    #[test]
    fn test_json_encode_failure_after_commit() {
        let mut sink = ResponseBuffer::new();
        let err = write_json(&mut sink, StatusCode::OK, Some(&Unserializable)).unwrap_err();

        assert!(matches!(err, ResponseError::Serialize(_)));
        assert!(err.is(ErrorKind::EncodingFailed));
        assert!(sink.is_committed());
        assert_eq!(sink.status(), StatusCode::OK);
        assert_eq!(
            sink.header("content-type"),
            Some("application/json; charset=utf-8")
        );
        assert!(sink.body().is_empty());
    }

    #[test]
    fn test_plain_text_accepts_str_and_bytes() {
        let mut sink = ResponseBuffer::new();
        write_plain_text(&mut sink, StatusCode::CREATED, "Hello").unwrap();
        assert_eq!(sink.status(), StatusCode::CREATED);
        assert_eq!(sink.header("content-type"), Some("text/plain; charset=utf-8"));
        assert_eq!(sink.body(), b"Hello");

        let mut sink = ResponseBuffer::new();
        write_plain_text(&mut sink, StatusCode::OK, vec![0xF0u8, 0x9F, 0xA6, 0x80]).unwrap();
        assert_eq!(sink.body(), "🦀".as_bytes());
    }

    #[test]
    fn test_plain_text_empty_payload_is_allowed() {
        let mut sink = ResponseBuffer::new();
        write_plain_text(&mut sink, StatusCode::OK, "").unwrap();
        assert!(sink.is_committed());
        assert!(sink.body().is_empty());
    }

    #[test]
    fn test_html_empty_payload_writes_nothing() {
        let mut sink = ResponseBuffer::new();
        let err = write_html(&mut sink, StatusCode::OK, "").unwrap_err();

        assert!(err.is(ErrorKind::PayloadNil));
        assert!(err.is(ErrorKind::EncodingFailed));
        assert!(!sink.is_committed());
        assert!(sink.headers().is_empty());
    }

    #[test]
    fn test_html_with_payload() {
        let html = "<html><body>Hello</body></html>";
        let mut sink = ResponseBuffer::new();
        write_html(&mut sink, StatusCode::OK, html).unwrap();

        assert_eq!(sink.status(), StatusCode::OK);
        assert_eq!(sink.header("content-type"), Some("text/html; charset=utf-8"));
        assert_eq!(sink.body(), html.as_bytes());
    }

    #[test]
    fn test_no_content() {
        let mut sink = ResponseBuffer::new();
        write_no_content(&mut sink).unwrap();

        assert_eq!(sink.status(), StatusCode::NO_CONTENT);
        assert!(sink.headers().is_empty());
        assert!(sink.body().is_empty());
    }

    #[test]
    fn test_redirect_absolute_url() {
        let mut sink = ResponseBuffer::new();
        redirect(
            &mut sink,
            &request("/"),
            StatusCode::FOUND,
            "https://example.com",
        )
        .unwrap();

        assert_eq!(sink.status(), StatusCode::FOUND);
        assert_eq!(sink.header("location"), Some("https://example.com"));
        assert!(sink.header("content-type").is_none());
        assert!(sink.body().is_empty());
    }

    #[test]
    fn test_resolve_location() {
        let cases = [
            ("/a/b", "c", "/a/c"),
            ("/a/b/", "c", "/a/b/c"),
            ("/a/b", "../c", "/c"),
            ("/a/b", "./", "/a/"),
            ("/a/b", "", "/a/"),
            ("/a/b", "/x//y/./z", "/x/y/z"),
            ("/a/b", "/x/../../y", "/y"),
            ("/a/b", "c?next=/d/../e", "/a/c?next=/d/../e"),
            ("", "c", "/c"),
            ("/a", "//cdn.example.com/x", "//cdn.example.com/x"),
            ("/a", "mailto:someone@example.com", "mailto:someone@example.com"),
            ("/a", "http://example.com/../x", "http://example.com/../x"),
            ("/a/b", ":foo", ":foo"),
            ("/a/b", "1a:b", "1a:b"),
            ("/a/b", "c/d:e", "/a/c/d:e"),
            ("/a/b", "c?at=12:00", "/a/c?at=12:00"),
        ];

        for (path, target, expected) in cases {
            assert_eq!(resolve_location(path, target), expected, "{} + {}", path, target);
        }
    }

    #[test]
    fn test_clean_path_relative() {
        assert_eq!(clean_path("a/b/.."), "a");
        assert_eq!(clean_path("../a"), "../a");
        assert_eq!(clean_path(""), ".");
        assert_eq!(clean_path("/.."), "/");
    }

    #[test]
    fn test_redirect_escapes_non_ascii() {
        let mut sink = ResponseBuffer::new();
        redirect(
            &mut sink,
            &request("/"),
            StatusCode::SEE_OTHER,
            "/caf\u{e9}\nx",
        )
        .unwrap();

        assert_eq!(sink.header("location"), Some("/caf%C3%A9%0Ax"));
    }
}
