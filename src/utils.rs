use serde_json::Value;

use crate::types::{FileType, Metadata};

/// Prefix of metadata keys reserved for SecureTransport internals.
pub(crate) const RESERVED_PREFIX: &str = "stfs";

/// Base path of the files resource on the server.
const FILES_BASE: &str = "api/v1.0/files";

/// Builds the URL of a files resource from the server base URL and path
/// segments, normalizing slashes between segments.
pub(crate) fn files_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in std::iter::once(&FILES_BASE).chain(segments) {
        for part in segment.split('/').filter(|p| !p.is_empty()) {
            url.push('/');
            url.push_str(part);
        }
    }
    url
}

/// Builds the `?status` URL used to fetch a path's metadata view.
pub(crate) fn status_url(base: &str, path: &str) -> String {
    format!("{}?status", files_url(base, &[path]))
}

/// Joins a folder and a filename into a relative remote path.
pub(crate) fn join_path(folder: &str, filename: &str) -> String {
    let folder = folder.trim_matches('/');
    if folder.is_empty() {
        filename.trim_start_matches('/').to_string()
    } else {
        format!("{}/{}", folder, filename.trim_start_matches('/'))
    }
}

/// Strips service-internal keys from a raw status view, keeping only
/// namespaced custom metadata.
///
/// A key survives when it contains a `.` separator and does not carry the
/// reserved prefix. This drops the fixed status fields (`fileName`, `size`,
/// `isDirectory`) along with every reserved key.
pub(crate) fn filter_metadata(raw: Metadata) -> Metadata {
    raw.into_iter()
        .filter(|(key, _)| key.contains('.') && !key.starts_with(RESERVED_PREFIX))
        .collect()
}

/// Reads the service's `isDirectory` flag.
///
/// SecureTransport reports the flag as the string `"true"`/`"false"`; a
/// JSON boolean is accepted equivalently. Anything else means a regular file.
pub(crate) fn file_type_of(value: Option<&Value>) -> FileType {
    match value {
        Some(Value::String(s)) if s == "true" => FileType::Directory,
        Some(Value::Bool(true)) => FileType::Directory,
        _ => FileType::File,
    }
}

/// Reads a size field that may arrive as a JSON number or a numeric string.
pub(crate) fn size_of(value: Option<&Value>) -> Option<u64> {
    match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    }
}
