use crate::http::compression::negotiate_text;
use crate::http::status::Status;
use crate::http::{Response, bad_request, created, not_found};
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

pub fn echo(text: &str, accept_encoding: Option<&str>) -> Response {
    negotiate_text(
        Status::OK,
        Bytes::copy_from_slice(text.as_bytes()),
        accept_encoding,
    )
}

pub fn user_agent(ua: Option<&str>) -> Response {
    let ua = ua.unwrap_or_default();
    Response::with_body(
        Status::OK,
        "text/plain",
        Bytes::copy_from_slice(ua.as_bytes()),
    )
}

/// Joins `file_name` under `dir`. Root and prefix components are dropped so
/// an absolute name still lands inside `dir`; `..` is kept as-is.
fn resolve(dir: &Path, file_name: &str) -> PathBuf {
    Path::new(file_name)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .fold(dir.to_path_buf(), |mut path, c| {
            path.push(c);
            path
        })
}

pub async fn get_file(dir: &Path, file_name: &str) -> Response {
    let file_path = resolve(dir, file_name);

    match fs::read(&file_path).await {
        Ok(content) => {
            info!(path = %file_path.display(), size = content.len(), "Serving file");
            Response::with_body(
                Status::OK,
                "application/octet-stream",
                Bytes::from(content),
            )
        }
        Err(e) => {
            warn!(path = %file_path.display(), error = %e, "File not readable");
            not_found()
        }
    }
}

/// Creates or truncates the file and writes `content` to it.
pub async fn post_file(dir: &Path, file_name: &str, content: &[u8]) -> Response {
    let file_path = resolve(dir, file_name);

    match fs::write(&file_path, content).await {
        Ok(()) => {
            info!(path = %file_path.display(), size = content.len(), "Created file");
            created()
        }
        Err(e) => {
            warn!(path = %file_path.display(), error = %e, "Error creating file");
            bad_request()
        }
    }
}
