use crate::handlers;
use crate::http::method::Method;
use crate::http::request::Request;
use crate::http::{Response, method_not_allowed, not_found, ok};
use std::path::{Path, PathBuf};

/// Picks the handler for a request from a fixed, ordered list of path
/// checks. The first match wins; there is no routing table.
#[derive(Debug, Clone)]
pub struct Router {
    directory: PathBuf,
}

impl Router {
    pub fn new(directory: impl Into<PathBuf>) -> Router {
        Router {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub async fn dispatch(&self, req: &Request) -> Response {
        let path = req.path.as_str();

        if path == "/" {
            ok()
        } else if path.starts_with("/echo") {
            handlers::echo(
                trim_prefix(path, "/echo/"),
                req.get_header("accept-encoding"),
            )
        } else if path.starts_with("/user-agent") {
            handlers::user_agent(req.get_header("user-agent"))
        } else if path.starts_with("/files") {
            let file_name = trim_prefix(path, "/files/");
            match req.method {
                Method::GET => handlers::get_file(&self.directory, file_name).await,
                Method::POST => handlers::post_file(&self.directory, file_name, &req.body).await,
                Method::Other(_) => method_not_allowed("GET, POST"),
            }
        } else {
            not_found()
        }
    }
}

/// Removes `prefix` if present, otherwise returns `s` unchanged.
fn trim_prefix<'a>(s: &'a str, prefix: &str) -> &'a str {
    s.strip_prefix(prefix).unwrap_or(s)
}
