use crate::http::method::Method;
use bytes::Bytes;
use std::borrow::Cow;
use std::collections::HashMap;

/// A request parsed from one connection's read buffer.
///
/// Header names are stored lower-cased, so lookups through
/// [`Request::get_header`] ignore the client's casing.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

impl Request {
    pub fn get_header(&self, k: &str) -> Option<&str> {
        self.headers.get(&k.to_lowercase()).map(|v| v.as_str())
    }

    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
