use crate::http::status::Status;
use bytes::{BufMut, Bytes, BytesMut};

pub mod compression;
pub mod encoding;
pub mod method;
pub mod parse;
pub mod request;
pub mod router;
pub mod server;
pub mod status;


/// Capacity of the single read performed per connection.
pub const BUFFER_SIZE: usize = 1024;

/// A response built by a handler.
///
/// Headers keep insertion order. Nothing is added at serialization time,
/// so handlers that send a body must set `Content-Type` and
/// `Content-Length` themselves (see [`Response::with_body`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: Status,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

impl Response {
    pub fn from_parts(status: Status, headers: Vec<(String, String)>, body: Bytes) -> Response {
        Response {
            status,
            headers,
            body,
        }
    }

    pub fn empty(status: Status) -> Response {
        Response::from_parts(status, Vec::new(), Bytes::new())
    }

    /// Response carrying `body` with its `Content-Type` and a byte-accurate
    /// `Content-Length`.
    pub fn with_body(status: Status, content_type: &str, body: Bytes) -> Response {
        let mut resp = Response::empty(status);
        resp.set_header("Content-Type", content_type);
        resp.set_header("Content-Length", &body.len().to_string());
        resp.body = body;
        resp
    }

    /// Sets a header, replacing any existing one with the same name.
    pub fn set_header(&mut self, key: &str, value: &str) {
        match self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
        {
            Some((_, v)) => *v = value.to_string(),
            None => self.headers.push((key.to_string(), value.to_string())),
        }
    }

    pub fn get_header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

pub fn ok() -> Response {
    Response::empty(Status::OK)
}

pub fn created() -> Response {
    Response::empty(Status::CREATED)
}

pub fn not_found() -> Response {
    Response::empty(Status::NOT_FOUND)
}

pub fn bad_request() -> Response {
    Response::empty(Status::BAD_REQUEST)
}

pub fn method_not_allowed(allow: &str) -> Response {
    let mut resp = Response::empty(Status::METHOD_NOT_ALLOWED);
    resp.set_header("Allow", allow);
    resp
}

/// Renders the status line, the headers in order, a blank line and the raw
/// body.
pub fn serialize_response(response: &Response) -> Bytes {
    let capacity = response.body.len() + response.headers.len() * 32 + 32;
    let mut resp_bytes = BytesMut::with_capacity(capacity);

    resp_bytes.put_slice(format!("HTTP/1.1 {}\r\n", response.status).as_bytes());

    for (key, value) in &response.headers {
        resp_bytes.put_slice(format!("{}: {}\r\n", key, value).as_bytes());
    }

    resp_bytes.put_slice(b"\r\n");
    resp_bytes.put_slice(&response.body);

    resp_bytes.freeze()
}

#[cfg(test)]
mod serialize_tests {
    use super::*;

    #[test]
    fn empty_ok() {
        assert_eq!(
            serialize_response(&ok()),
            Bytes::from_static(b"HTTP/1.1 200 OK\r\n\r\n")
        );
    }

    #[test]
    fn not_found_has_no_implicit_headers() {
        assert_eq!(
            serialize_response(&not_found()),
            Bytes::from_static(b"HTTP/1.1 404 Not Found\r\n\r\n")
        );
    }

    #[test]
    fn headers_then_body() {
        let resp = Response::with_body(Status::OK, "text/plain", Bytes::from_static(b"abc"));

        assert_eq!(
            serialize_response(&resp),
            Bytes::from_static(
                b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 3\r\n\r\nabc"
            )
        );
    }

    #[test]
    fn body_bytes_are_untouched() {
        let body = Bytes::from_static(&[0x1f, 0x8b, 0x00, b'\r', b'\n']);
        let resp = Response::from_parts(Status::OK, Vec::new(), body.clone());
        let out = serialize_response(&resp);

        assert!(out.ends_with(&body));
    }

    #[test]
    fn content_length_counts_bytes() {
        let resp = Response::with_body(Status::OK, "text/plain", Bytes::from("héllo"));
        assert_eq!(resp.get_header("content-length"), Some("6"));
    }

    #[test]
    fn set_header_replaces_case_insensitively() {
        let mut resp = ok();
        resp.set_header("Content-Type", "text/plain");
        resp.set_header("content-type", "application/octet-stream");

        assert_eq!(resp.headers.len(), 1);
        assert_eq!(
            resp.get_header("Content-Type"),
            Some("application/octet-stream")
        );
    }

    #[test]
    fn method_not_allowed_lists_allow() {
        let out = serialize_response(&method_not_allowed("GET, POST"));
        assert_eq!(
            out,
            Bytes::from_static(b"HTTP/1.1 405 Method Not Allowed\r\nAllow: GET, POST\r\n\r\n")
        );
    }
}
