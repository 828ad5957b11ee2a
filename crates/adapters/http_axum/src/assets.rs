//! `/assets/*` handlers.
//!
//! The in-memory snapshot is served by [`get`], which answers conditional
//! and single-range requests itself. Hot-reload mode delegates to
//! [`ServeDir`], which does the same from disk.

use std::ops::RangeInclusive;
use std::path::Path as FsPath;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeader;

use crate::error::AssetError;
use crate::store::{Asset, MemoryStore};

/// Lifetime granted to assets served from memory.
const LONG_LIVED: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Disk-backed asset service forcing clients to revalidate.
pub type HotReloadService = SetResponseHeader<ServeDir, HeaderValue>;

/// Serve `root` from disk with `Cache-Control: no-cache`.
///
/// [`ServeDir`] reports each file's modification time and handles
/// `If-Modified-Since` and `Range`. Directories are not listed.
pub fn hot_reload(root: &FsPath) -> HotReloadService {
    SetResponseHeader::overriding(
        ServeDir::new(root).append_index_html_on_directories(false),
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache"),
    )
}

/// Possible responses from the in-memory asset endpoint.
pub enum AssetResponse {
    Ok(Asset),
    Partial {
        asset: Asset,
        range: RangeInclusive<usize>,
    },
    NotModified(Asset),
    RangeNotSatisfiable {
        len: usize,
    },
}

impl IntoResponse for AssetResponse {
    fn into_response(self) -> Response {
        let now = SystemTime::now();
        match self {
            Self::Ok(asset) => {
                let headers = content_headers(&asset, now);
                (StatusCode::OK, headers, asset.body).into_response()
            }
            Self::Partial { asset, range } => {
                let mut headers = content_headers(&asset, now);
                let content_range =
                    format!("bytes {}-{}/{}", range.start(), range.end(), asset.body.len());
                if let Ok(value) = HeaderValue::from_str(&content_range) {
                    headers.insert(header::CONTENT_RANGE, value);
                }
                let body = asset.body.slice(range);
                (StatusCode::PARTIAL_CONTENT, headers, body).into_response()
            }
            Self::NotModified(asset) => {
                (StatusCode::NOT_MODIFIED, cache_headers(&asset, now)).into_response()
            }
            Self::RangeNotSatisfiable { len } => {
                let mut headers = HeaderMap::new();
                if let Ok(value) = HeaderValue::from_str(&format!("bytes */{len}")) {
                    headers.insert(header::CONTENT_RANGE, value);
                }
                (StatusCode::RANGE_NOT_SATISFIABLE, headers).into_response()
            }
        }
    }
}

/// `GET /assets/{*path}` from the in-memory snapshot.
#[allow(clippy::missing_errors_doc)]
pub async fn get(
    State(store): State<Arc<MemoryStore>>,
    Path(path): Path<String>,
    request_headers: HeaderMap,
) -> Result<AssetResponse, AssetError> {
    let asset = store.open(&path)?;
    if is_fresh(&request_headers, asset.last_modified) {
        return Ok(AssetResponse::NotModified(asset));
    }

    let range = request_headers
        .get(header::RANGE)
        .and_then(|value| value.to_str().ok());
    Ok(match range.map(|value| parse_range(value, asset.body.len())) {
        None | Some(ByteRange::Full) => AssetResponse::Ok(asset),
        Some(ByteRange::Partial(range)) => AssetResponse::Partial { asset, range },
        Some(ByteRange::Unsatisfiable) => AssetResponse::RangeNotSatisfiable {
            len: asset.body.len(),
        },
    })
}

/// Outcome of interpreting a `Range` header against a body length.
#[derive(Debug, PartialEq, Eq)]
enum ByteRange {
    /// Serve the whole body.
    Full,
    Partial(RangeInclusive<usize>),
    Unsatisfiable,
}

/// Interpret a `bytes=` range header.
///
/// Only single ranges are honoured; a multi-range request gets the full
/// body. Malformed or out-of-bounds ranges are unsatisfiable.
fn parse_range(value: &str, len: usize) -> ByteRange {
    let Some(spec) = value.trim().strip_prefix("bytes=") else {
        return ByteRange::Unsatisfiable;
    };
    if spec.contains(',') {
        return ByteRange::Full;
    }
    let Some((start, end)) = spec.trim().split_once('-') else {
        return ByteRange::Unsatisfiable;
    };

    let range = match (start.trim(), end.trim()) {
        ("", suffix) => match suffix.parse::<usize>() {
            Ok(suffix) if suffix > 0 && len > 0 => len.saturating_sub(suffix)..=len - 1,
            _ => return ByteRange::Unsatisfiable,
        },
        (start, "") => match start.parse::<usize>() {
            Ok(start) if start < len => start..=len - 1,
            _ => return ByteRange::Unsatisfiable,
        },
        (start, end) => match (start.parse::<usize>(), end.parse::<usize>()) {
            (Ok(start), Ok(end)) if start <= end && start < len => start..=end.min(len - 1),
            _ => return ByteRange::Unsatisfiable,
        },
    };
    ByteRange::Partial(range)
}

/// Whether the client's `If-Modified-Since` covers `last_modified`.
///
/// HTTP dates have second precision, so sub-second parts are ignored.
fn is_fresh(headers: &HeaderMap, last_modified: SystemTime) -> bool {
    let Some(since) = headers
        .get(header::IF_MODIFIED_SINCE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| DateTime::parse_from_rfc2822(value).ok())
    else {
        return false;
    };
    DateTime::<Utc>::from(last_modified).timestamp() <= since.timestamp()
}

fn content_headers(asset: &Asset, now: SystemTime) -> HeaderMap {
    let mut headers = cache_headers(asset, now);
    headers.insert(header::CONTENT_TYPE, content_type(&asset.path));
    headers.insert(header::ACCEPT_RANGES, HeaderValue::from_static("bytes"));
    headers
}

fn cache_headers(asset: &Asset, now: SystemTime) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("max-age=31536000"),
    );
    insert_date(&mut headers, header::EXPIRES, now + LONG_LIVED);
    insert_date(&mut headers, header::LAST_MODIFIED, asset.last_modified);
    headers
}

fn insert_date(headers: &mut HeaderMap, name: header::HeaderName, time: SystemTime) {
    if let Ok(value) = HeaderValue::from_str(&http_date(time)) {
        headers.insert(name, value);
    }
}

/// Format as an IMF-fixdate (`Sun, 06 Nov 1994 08:49:37 GMT`).
fn http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

/// MIME type guessed from the extension; textual types are sent as UTF-8.
fn content_type(path: &str) -> HeaderValue {
    let mime = mime_guess2::from_path(path).first_or_octet_stream();
    let value = if mime.type_().as_str() == "text" && mime.params().next().is_none() {
        format!("{}; charset=utf-8", mime.essence_str())
    } else {
        mime.to_string()
    };
    HeaderValue::from_str(&value)
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;

    fn asset() -> Asset {
        Asset {
            path: "js/theme.js".to_string(),
            body: Bytes::from_static(b""),
            last_modified: SystemTime::UNIX_EPOCH + Duration::from_secs(784_111_777),
        }
    }

    #[test]
    fn should_format_imf_fixdate() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(784_111_777);
        assert_eq!(http_date(time), "Sun, 06 Nov 1994 08:49:37 GMT");
    }

    #[test]
    fn should_guess_text_types_with_utf8_charset() {
        assert_eq!(content_type("hello.txt"), "text/plain; charset=utf-8");
        assert_eq!(content_type("index.html"), "text/html; charset=utf-8");
        assert_eq!(content_type("css/theme.css"), "text/css; charset=utf-8");
    }

    #[test]
    fn should_guess_binary_types_from_extension() {
        assert_eq!(content_type("img/logo.png"), "image/png");
        assert_eq!(content_type("img/photo.jpg"), "image/jpeg");
        assert_eq!(content_type("LICENSE"), "application/octet-stream");
    }

    #[test]
    fn should_recognise_script_bundle() {
        let value = content_type("js/theme.js");
        assert!(value.to_str().unwrap().contains("javascript"));
    }

    #[test]
    fn should_expire_assets_in_a_year() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(784_111_777);
        let headers = cache_headers(&asset(), now);
        assert_eq!(headers[header::CACHE_CONTROL], "max-age=31536000");
        assert_eq!(headers[header::EXPIRES], "Mon, 06 Nov 1995 08:49:37 GMT");
        assert_eq!(
            headers[header::LAST_MODIFIED],
            "Sun, 06 Nov 1994 08:49:37 GMT"
        );
    }

    #[test]
    fn should_be_fresh_when_client_copy_is_as_recent() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::IF_MODIFIED_SINCE,
            HeaderValue::from_static("Sun, 06 Nov 1994 08:49:37 GMT"),
        );
        let modified = SystemTime::UNIX_EPOCH + Duration::from_millis(784_111_777_500);
        assert!(is_fresh(&headers, modified));
    }

    #[test]
    fn should_be_stale_when_file_is_newer_or_header_invalid() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::IF_MODIFIED_SINCE,
            HeaderValue::from_static("Sun, 06 Nov 1994 08:49:36 GMT"),
        );
        let modified = SystemTime::UNIX_EPOCH + Duration::from_secs(784_111_777);
        assert!(!is_fresh(&headers, modified));

        headers.insert(header::IF_MODIFIED_SINCE, HeaderValue::from_static("yesterday"));
        assert!(!is_fresh(&headers, modified));
        assert!(!is_fresh(&HeaderMap::new(), modified));
    }

    #[test]
    fn should_parse_bounded_range() {
        assert_eq!(parse_range("bytes=0-4", 10), ByteRange::Partial(0..=4));
    }

    #[test]
    fn should_clamp_range_end_to_body() {
        assert_eq!(parse_range("bytes=5-100", 10), ByteRange::Partial(5..=9));
    }

    #[test]
    fn should_parse_open_and_suffix_ranges() {
        assert_eq!(parse_range("bytes=7-", 10), ByteRange::Partial(7..=9));
        assert_eq!(parse_range("bytes=-3", 10), ByteRange::Partial(7..=9));
        assert_eq!(parse_range("bytes=-30", 10), ByteRange::Partial(0..=9));
    }

    #[test]
    fn should_reject_out_of_bounds_or_malformed_ranges() {
        assert_eq!(parse_range("bytes=10-12", 10), ByteRange::Unsatisfiable);
        assert_eq!(parse_range("bytes=4-2", 10), ByteRange::Unsatisfiable);
        assert_eq!(parse_range("bytes=-0", 10), ByteRange::Unsatisfiable);
        assert_eq!(parse_range("bytes=0-0", 0), ByteRange::Unsatisfiable);
        assert_eq!(parse_range("items=0-4", 10), ByteRange::Unsatisfiable);
        assert_eq!(parse_range("bytes=a-b", 10), ByteRange::Unsatisfiable);
    }

    #[test]
    fn should_serve_whole_body_for_multiple_ranges() {
        assert_eq!(parse_range("bytes=0-1,4-5", 10), ByteRange::Full);
    }
}
