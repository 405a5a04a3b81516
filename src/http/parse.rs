use crate::http::method::Method;
use crate::http::request::Request;
use bytes::Bytes;
use std::collections::HashMap;
use std::str::FromStr;

const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Parses the bytes of a single request.
///
/// The parser never fails. A missing path token leaves `path` empty, header
/// lines without a colon are skipped, and without a blank line the whole
/// input is treated as the head and the body is empty. Nothing past the
/// buffer is read, so the body is whatever followed the head in it.
///
/// The head is decoded as lossy UTF-8: non-UTF-8 bytes in the path or
/// headers become U+FFFD. The body is kept as raw bytes.
pub fn parse_request(raw: &Bytes) -> Request {
    let (head, body) = match find_head_end(raw) {
        Some(end) => (&raw[..end], raw.slice(end + HEAD_TERMINATOR.len()..)),
        None => (&raw[..], Bytes::new()),
    };

    let head = String::from_utf8_lossy(head);
    let mut lines = head.split('\n');

    let request_line = lines.next().unwrap_or_default().trim();
    let mut tokens = request_line.split(' ');
    let method = tokens.next().unwrap_or_default();
    let path = tokens.next().unwrap_or_default().to_string();

    let method = match Method::from_str(method) {
        Ok(m) => m,
        Err(_) => Method::Other(method.to_string()),
    };

    Request {
        method,
        path,
        headers: parse_headers(lines),
        body,
    }
}

fn parse_headers<'a>(lines: impl Iterator<Item = &'a str>) -> HashMap<String, String> {
    let mut headers = HashMap::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }

        if let Some((k, v)) = line.split_once(':') {
            headers.insert(k.trim().to_lowercase(), v.trim().to_string());
        }
    }

    headers
}

fn find_head_end(raw: &[u8]) -> Option<usize> {
    raw.windows(HEAD_TERMINATOR.len())
        .position(|w| w == HEAD_TERMINATOR)
}
