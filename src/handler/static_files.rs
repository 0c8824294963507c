//! Static file responder module
//!
//! Maps request paths to files under a fixed root directory and builds the
//! responses, with MIME classification and header augmentation supplied as
//! injected strategies.

use crate::http::{self, cors, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{HeaderMap, Response};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Content-type resolution strategy
pub type ClassifyFn = fn(&str) -> &'static str;

/// Header augmentation strategy, applied to every outgoing response
pub type AugmentFn = fn(&mut HeaderMap);

/// Static file responder
///
/// Serves files from an explicit root directory. The two customization
/// points — how a path maps to a Content-Type and which headers are appended
/// before a response is sent — are plain function values, defaulting to the
/// override-table classifier and the permissive CORS set.
pub struct StaticResponder {
    root: PathBuf,
    index_files: Vec<String>,
    classify: ClassifyFn,
    augment: AugmentFn,
}

impl StaticResponder {
    /// Create a responder serving files under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            index_files: vec!["index.html".to_string(), "index.htm".to_string()],
            classify: mime::resolve_content_type,
            augment: cors::apply_cors_headers,
        }
    }

    /// Replace the index file list tried for directory requests
    #[must_use]
    pub fn with_index_files(mut self, index_files: Vec<String>) -> Self {
        self.index_files = index_files;
        self
    }

    /// Replace the content-type resolution strategy
    #[must_use]
    pub fn with_classifier(mut self, classify: ClassifyFn) -> Self {
        self.classify = classify;
        self
    }

    /// Replace the header augmentation strategy
    #[must_use]
    pub fn with_augmenter(mut self, augment: AugmentFn) -> Self {
        self.augment = augment;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Serve a request path: 200 with the file's bytes, 403 on permission
    /// denial, 404 otherwise
    pub async fn respond(&self, path: &str, is_head: bool) -> Response<Full<Bytes>> {
        match self.load(path).await {
            Ok((content, content_type)) => {
                http::build_file_response(content, content_type, is_head)
            }
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => http::build_403_response(),
            Err(_) => http::build_404_response(),
        }
    }

    /// Apply the header augmentation strategy
    ///
    /// Every response leaving the service passes through here, regardless of
    /// method or status.
    pub fn finalize(&self, response: &mut Response<Full<Bytes>>) {
        (self.augment)(response.headers_mut());
    }

    /// Load a file and classify its content type
    async fn load(&self, path: &str) -> io::Result<(Vec<u8>, &'static str)> {
        let file_path = self.resolve(path)?;
        let content = fs::read(&file_path).await?;
        let content_type = (self.classify)(&file_path.to_string_lossy());
        Ok((content, content_type))
    }

    /// Resolve a request path to a file under the root directory
    ///
    /// Rejects any path whose canonical form escapes the root. Directory
    /// requests fall back to the index file list; a directory with no index
    /// file is not served.
    fn resolve(&self, path: &str) -> io::Result<PathBuf> {
        // Remove leading slash and prevent directory traversal
        let clean_path = path.trim_start_matches('/').replace("..", "");
        let mut file_path = self.root.join(&clean_path);

        let root_canonical = match self.root.canonicalize() {
            Ok(p) => p,
            Err(e) => {
                logger::log_warning(&format!(
                    "Root directory not found or inaccessible '{}': {e}",
                    self.root.display()
                ));
                return Err(e);
            }
        };

        // Directory request: try index files
        if file_path.is_dir() || clean_path.is_empty() || clean_path.ends_with('/') {
            for index_file in &self.index_files {
                let index_path = file_path.join(index_file);
                if index_path.is_file() {
                    file_path = index_path;
                    break;
                }
            }
        }

        let file_path_canonical = file_path.canonicalize()?;
        if !file_path_canonical.starts_with(&root_canonical) {
            logger::log_warning(&format!(
                "Path traversal attempt blocked: {} -> {}",
                path,
                file_path_canonical.display()
            ));
            return Err(io::Error::new(io::ErrorKind::NotFound, "path escapes root"));
        }

        if file_path_canonical.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "directory without index file",
            ));
        }

        Ok(file_path_canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    /// Create a populated root directory unique to the calling test
    fn test_root(name: &str) -> PathBuf {
        let root = std::env::temp_dir()
            .join(format!("webroot-tests-{}", std::process::id()))
            .join(name);
        std::fs::create_dir_all(root.join("assets")).unwrap();
        std::fs::create_dir_all(root.join("bare")).unwrap();
        std::fs::write(root.join("index.html"), "<h1>home</h1>").unwrap();
        std::fs::write(root.join("app.js"), "console.log(1)").unwrap();
        std::fs::write(root.join("assets").join("data.json"), "{}").unwrap();
        root
    }

    async fn body_bytes(response: Response<Full<Bytes>>) -> Bytes {
        response.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_serves_existing_file() {
        let responder = StaticResponder::new(test_root("existing"));
        let resp = responder.respond("/app.js", false).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/javascript");
        assert_eq!(resp.headers()["Content-Length"], "14");
        assert_eq!(body_bytes(resp).await, Bytes::from("console.log(1)"));
    }

    #[tokio::test]
    async fn test_serves_nested_file() {
        let responder = StaticResponder::new(test_root("nested"));
        let resp = responder.respond("/assets/data.json", false).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let responder = StaticResponder::new(test_root("missing"));
        let resp = responder.respond("/nope.txt", false).await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_404_carries_cors_headers_after_finalize() {
        let responder = StaticResponder::new(test_root("cors404"));
        let mut resp = responder.respond("/nope.txt", false).await;
        responder.finalize(&mut resp);

        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
        assert_eq!(
            resp.headers()["access-control-allow-methods"],
            "GET, POST, OPTIONS"
        );
        assert_eq!(resp.headers()["access-control-allow-headers"], "*");
    }

    #[tokio::test]
    async fn test_traversal_is_rejected() {
        let root = test_root("traversal");
        std::fs::write(root.parent().unwrap().join("secret.txt"), "secret").unwrap();

        let responder = StaticResponder::new(root);
        let resp = responder.respond("/../secret.txt", false).await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_directory_serves_index_file() {
        let responder = StaticResponder::new(test_root("index"));
        let resp = responder.respond("/", false).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/html; charset=utf-8");
        assert_eq!(body_bytes(resp).await, Bytes::from("<h1>home</h1>"));
    }

    #[tokio::test]
    async fn test_directory_without_index_is_404() {
        let responder = StaticResponder::new(test_root("noindex"));
        let resp = responder.respond("/bare/", false).await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_head_has_empty_body_and_full_length() {
        let responder = StaticResponder::new(test_root("head"));
        let resp = responder.respond("/index.html", true).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "13");
        assert_eq!(body_bytes(resp).await.len(), 0);
    }

    #[tokio::test]
    async fn test_injected_strategies() {
        fn classify_all_text(_: &str) -> &'static str {
            "text/x-custom"
        }
        fn stamp(headers: &mut HeaderMap) {
            headers.insert("x-stamp", hyper::header::HeaderValue::from_static("1"));
        }

        let responder = StaticResponder::new(test_root("strategies"))
            .with_classifier(classify_all_text)
            .with_augmenter(stamp);

        let mut resp = responder.respond("/app.js", false).await;
        responder.finalize(&mut resp);

        assert_eq!(resp.headers()["Content-Type"], "text/x-custom");
        assert_eq!(resp.headers()["x-stamp"], "1");
    }
}
