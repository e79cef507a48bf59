//! Single-page app delivery with an `index.html` fallback.

use std::path::{Component, Path, PathBuf};

use actix_web::http::{Method, header};
use actix_web::{HttpRequest, HttpResponse, web};

const INDEX_FILE: &str = "index.html";

/// Root directory of a built client bundle.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    root: PathBuf,
}

impl StaticAssets {
    /// Serve assets from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a request path to the file that should answer it.
    ///
    /// Unknown files and paths escaping the root resolve to `index.html` so
    /// client-side routing keeps working.
    pub fn resolve(&self, request_path: &str) -> PathBuf {
        let relative = Path::new(request_path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_)));
        if escapes || relative.as_os_str().is_empty() {
            return self.index();
        }

        let candidate = self.root.join(relative);
        if candidate.is_file() {
            candidate
        } else {
            self.index()
        }
    }

    fn index(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }
}

/// Fallback service answering every non-API GET with a bundle file.
pub async fn serve_spa(req: HttpRequest, assets: web::Data<StaticAssets>) -> HttpResponse {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return HttpResponse::NotFound().finish();
    }

    let path = assets.resolve(req.path());
    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    let read_path = path.clone();
    match web::block(move || std::fs::read(read_path)).await {
        Ok(Ok(contents)) => HttpResponse::Ok()
            .insert_header((header::CONTENT_TYPE, mime.essence_str().to_string()))
            .body(contents),
        Ok(Err(err)) => {
            log::warn!("static asset {} unavailable: {err}", path.display());
            HttpResponse::NotFound().body("404 Not Found")
        }
        Err(err) => {
            log::error!("static asset task failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
