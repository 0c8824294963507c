//! MIME type classification module
//!
//! Resolves the Content-Type for a request path: a fixed override table is
//! consulted first, then a pinned extension table, then the default type.

/// Content-Type used when no table entry matches.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Suffix overrides, tested in order against the full path; first match wins.
///
/// These extensions are not reliably recognized by general-purpose
/// extension databases, so their types are fixed here.
const OVERRIDES: [(&str, &str); 5] = [
    (".mjs", "application/javascript"),
    (".js", "application/javascript"),
    (".json", "application/json"),
    (".webp", "image/webp"),
    (".ktx2", "image/ktx2"),
];

/// Resolve the Content-Type for a path
///
/// # Examples
/// ```
/// use webroot::http::mime::resolve_content_type;
/// assert_eq!(resolve_content_type("app/main.mjs"), "application/javascript");
/// assert_eq!(resolve_content_type("index.html"), "text/html; charset=utf-8");
/// assert_eq!(resolve_content_type("data.bin"), "application/octet-stream");
/// ```
pub fn resolve_content_type(path: &str) -> &'static str {
    for (suffix, content_type) in OVERRIDES {
        if path.ends_with(suffix) {
            return content_type;
        }
    }

    let extension = path.rsplit_once('.').map(|(_, ext)| ext);
    infer_content_type(extension)
}

/// Pinned extension-to-type table for everything outside the override set.
///
/// Deliberately in-crate rather than delegated to a platform MIME database,
/// so inference is identical on every host.
fn infer_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        // WASM
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",

        // Video
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("ogg" | "ogv") => "video/ogg",

        // Audio
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("flac") => "audio/flac",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Documents
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("gz" | "gzip") => "application/gzip",
        Some("tar") => "application/x-tar",

        // Default
        _ => DEFAULT_CONTENT_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_table() {
        assert_eq!(resolve_content_type("a.mjs"), "application/javascript");
        assert_eq!(resolve_content_type("a.js"), "application/javascript");
        assert_eq!(resolve_content_type("a.json"), "application/json");
        assert_eq!(resolve_content_type("a.webp"), "image/webp");
        assert_eq!(resolve_content_type("a.ktx2"), "image/ktx2");
    }

    #[test]
    fn test_override_applies_to_nested_paths() {
        assert_eq!(
            resolve_content_type("/assets/textures/rock.ktx2"),
            "image/ktx2"
        );
        assert_eq!(
            resolve_content_type("/modules/three.module.mjs"),
            "application/javascript"
        );
    }

    #[test]
    fn test_pinned_fallback_table() {
        assert_eq!(
            resolve_content_type("index.html"),
            "text/html; charset=utf-8"
        );
        assert_eq!(resolve_content_type("style.css"), "text/css");
        assert_eq!(resolve_content_type("logo.png"), "image/png");
        assert_eq!(resolve_content_type("clip.mp4"), "video/mp4");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(resolve_content_type("data.xyz"), DEFAULT_CONTENT_TYPE);
        assert_eq!(resolve_content_type("no_extension"), DEFAULT_CONTENT_TYPE);
    }
}
