//! Header names, media types and pagination defaults shared by the helpers.

// =============================================================================
// Header Names
// =============================================================================

/// Name of the Content-Type header
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// Name of the Accept header
pub const ACCEPT_HEADER: &str = "Accept";

/// Name of the Location header used by redirects
pub const LOCATION_HEADER: &str = "Location";

// =============================================================================
// Media Types
// =============================================================================

/// Charset parameter appended to every text response
pub const CHARSET_UTF8: &str = "charset=utf-8";

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_HTML: &str = "text/html";
pub const CONTENT_TYPE_PLAIN_TEXT: &str = "text/plain";

/// `application/json; charset=utf-8`
pub const CONTENT_TYPE_JSON_WITH_CHARSET: &str = "application/json; charset=utf-8";

/// `text/html; charset=utf-8`
pub const CONTENT_TYPE_HTML_WITH_CHARSET: &str = "text/html; charset=utf-8";

/// `text/plain; charset=utf-8`
pub const CONTENT_TYPE_PLAIN_TEXT_WITH_CHARSET: &str = "text/plain; charset=utf-8";

// =============================================================================
// Pagination
// =============================================================================

/// Query parameter carrying the 1-indexed page number
pub const PAGE_QUERY_PARAM: &str = "page";

/// Query parameter carrying the page size
pub const PER_PAGE_QUERY_PARAM: &str = "per_page";

/// Starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Page size used when the caller passes a non-positive default
pub const DEFAULT_PAGE_SIZE: u64 = 10;
