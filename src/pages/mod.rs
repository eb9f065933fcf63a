// src/pages/mod.rs

use axum::extract::{Path, State};
use axum::response::Html;
use std::path::{Path as FsPath, PathBuf};
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::server::AppState;

pub const INDEX_PAGE: &str = "index.html";

/// Resolves `<name>.html` inside `pages_dir`. Only plain file names are accepted.
pub fn resolve_page(pages_dir: &FsPath, file_name: &str) -> Option<PathBuf> {
    let stem = file_name.strip_suffix(".html")?;
    if stem.is_empty() || stem.contains("..") || stem.contains(['/', '\\']) {
        return None;
    }
    Some(pages_dir.join(file_name))
}

pub async fn load_page(pages_dir: &FsPath, file_name: &str) -> AppResult<Html<String>> {
    let path = resolve_page(pages_dir, file_name)
        .ok_or_else(|| AppError::NotFound(file_name.to_string()))?;

    match tokio::fs::read_to_string(&path).await {
        Ok(body) => Ok(Html(body)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(AppError::NotFound(file_name.to_string()))
        }
        Err(e) => Err(AppError::Internal(format!("reading {}: {e}", path.display()))),
    }
}

pub async fn index_handler(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    load_page(&state.pages_dir, INDEX_PAGE).await
}

pub async fn page_handler(
    State(state): State<Arc<AppState>>,
    Path(file_name): Path<String>,
) -> AppResult<Html<String>> {
    load_page(&state.pages_dir, &file_name).await
}
