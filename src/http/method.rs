use strum::EnumString;

/// Request method token. Anything that isn't GET or POST is kept verbatim,
/// since most routes accept any method.
#[derive(EnumString, Debug, Clone, PartialEq, Eq)]
pub enum Method {
    #[strum(serialize = "GET")]
    GET,
    #[strum(serialize = "POST")]
    POST,
    #[strum(default)]
    Other(String),
}

impl Method {
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::Other(m) => m,
        }
    }
}
