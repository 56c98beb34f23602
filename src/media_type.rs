/// Media type → file extension table. Substring containment, first match
/// wins, so a `charset` parameter on the header does not defeat the lookup.
const EXTENSION_TABLE: &[(&str, &str)] = &[
    ("application/zip", ".zip"),
    ("application/pdf", ".pdf"),
    ("image/jpeg", ".jpg"),
    ("image/png", ".png"),
    ("application/x-msdownload", ".exe"),
    ("text/plain", ".txt"),
];

pub const FALLBACK_EXTENSION: &str = ".bin";

/// Picks a file extension for a declared media type. Absent, empty, or
/// unrecognized types fall back to `.bin`.
pub fn extension_for(media_type: Option<&str>) -> &'static str {
    let Some(media_type) = media_type else {
        return FALLBACK_EXTENSION;
    };
    if media_type.is_empty() {
        return FALLBACK_EXTENSION;
    }

    EXTENSION_TABLE
        .iter()
        .find(|(needle, _)| media_type.contains(needle))
        .map(|(_, ext)| *ext)
        .unwrap_or(FALLBACK_EXTENSION)
}
