use crate::http::Response;
use crate::http::encoding::{Encoding, accepted_encodings};
use crate::http::status::Status;
use bytes::Bytes;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::Write;
use tracing::warn;

/// Builds a `text/plain` response, gzip-compressing `body` when the
/// client's `Accept-Encoding` lists `gzip`.
///
/// Compression is best-effort: if it fails the plain body goes out and no
/// `Content-Encoding` is set. `Content-Length` always matches the body
/// actually sent.
pub fn negotiate_text(status: Status, body: Bytes, accept_encoding: Option<&str>) -> Response {
    let wants_gzip = accept_encoding
        .map(|h| accepted_encodings(h).contains(&Encoding::Gzip))
        .unwrap_or(false);

    if !wants_gzip {
        return Response::with_body(status, "text/plain", body);
    }

    match gzip(&body) {
        Ok(compressed) => {
            let mut resp = Response::with_body(status, "text/plain", compressed);
            let coding: &'static str = Encoding::Gzip.into();
            resp.set_header("Content-Encoding", coding);
            resp
        }
        Err(e) => {
            warn!(error = %e, "gzip compression failed, sending plain body");
            Response::with_body(status, "text/plain", body)
        }
    }
}

pub fn gzip(data: &[u8]) -> std::io::Result<Bytes> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data)?;
    Ok(Bytes::from(encoder.finish()?))
}
