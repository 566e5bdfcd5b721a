//! Input normalization: reduce a URL or bare path to the path that is matched.
//!
//! Accepted forms:
//! - Absolute URLs (`https://app.example.com/feature/1?x=2`): the URL path.
//! - Absolute paths (`/feature/1?x=2#top`): resolved the same way, as if
//!   they were the path of an absolute URL.
//! - Anything else without a scheme (`feature/1`, the empty string): the
//!   input up to `?` or `#`, otherwise untouched.
//!
//! Both absolute forms go through the same URL parser, so dot-segments are
//! removed and characters outside the path set are percent-encoded
//! (`/feature/a b` is matched as `/feature/a%20b`). Captured parameters keep
//! that encoding.
//!
//! Unparsable URLs and URLs without a path hierarchy (`mailto:`) yield
//! `None` and are treated as unmatched.

use std::borrow::Cow;
use url::{ParseError, Url};

/// Host used to resolve absolute paths; only the resulting path is kept.
const PATH_ORIGIN: &str = "http://localhost";

/// Extract the routable path from `input`.
pub fn route_path(input: &str) -> Option<Cow<'_, str>> {
    match Url::parse(input) {
        Ok(url) => url_path(&url),
        Err(ParseError::RelativeUrlWithoutBase) if input.starts_with('/') => {
            Url::parse(&format!("{PATH_ORIGIN}{input}"))
                .ok()
                .and_then(|url| url_path(&url))
        }
        Err(ParseError::RelativeUrlWithoutBase) => Some(Cow::Borrowed(bare_path(input))),
        Err(_) => None,
    }
}

fn url_path(url: &Url) -> Option<Cow<'static, str>> {
    if url.cannot_be_a_base() {
        None
    } else {
        Some(Cow::Owned(url.path().to_string()))
    }
}

fn bare_path(input: &str) -> &str {
    match input.find(|c: char| c == '?' || c == '#') {
        Some(end) => &input[..end],
        None => input,
    }
}
