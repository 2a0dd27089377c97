//! Read-only view over an inbound request.

use axum::extract::Query;
use axum::http::{request::Parts, HeaderMap, Request, Uri};

/// The lookups the helpers need from a request.
pub trait RequestView {
    /// Raw bytes of the first value of header `name` (case-insensitive)
    fn header_bytes(&self, name: &str) -> Option<&[u8]>;

    /// First value of header `name` as text.
    ///
    /// Values that are not valid UTF-8 are reported as missing; use
    /// [`RequestView::header_bytes`] to see them.
    fn header(&self, name: &str) -> Option<&str> {
        self.header_bytes(name)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    /// First value of the decoded query parameter `key`
    fn query_param(&self, key: &str) -> Option<String>;

    /// Request path, used to resolve relative redirect targets
    fn path(&self) -> &str;
}

impl<B> RequestView for Request<B> {
    fn header_bytes(&self, name: &str) -> Option<&[u8]> {
        header_value(self.headers(), name)
    }

    fn query_param(&self, key: &str) -> Option<String> {
        query_value(self.uri(), key)
    }

    fn path(&self) -> &str {
        self.uri().path()
    }
}

impl RequestView for Parts {
    fn header_bytes(&self, name: &str) -> Option<&[u8]> {
        header_value(&self.headers, name)
    }

    fn query_param(&self, key: &str) -> Option<String> {
        query_value(&self.uri, key)
    }

    fn path(&self) -> &str {
        self.uri.path()
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a [u8]> {
    headers.get(name).map(|value| value.as_bytes())
}

fn query_value(uri: &Uri, key: &str) -> Option<String> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri).ok()?;
    pairs
        .into_iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value)
}
