use std::collections::HashSet;
use std::str::FromStr;
use strum::{EnumString, IntoStaticStr};

/// Content codings the server can produce. Any other `Accept-Encoding`
/// token is ignored.
#[derive(EnumString, IntoStaticStr, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Encoding {
    #[strum(serialize = "gzip")]
    Gzip,
}

/// Splits an `Accept-Encoding` value into the set of codings it names.
///
/// All whitespace is dropped before splitting on commas, and a token only
/// counts on an exact match: `gzip;q=0.5` or `GZIP` name nothing we know.
/// Quality values are not interpreted.
pub fn accepted_encodings(header: &str) -> HashSet<Encoding> {
    let compact: String = header.chars().filter(|c| !c.is_whitespace()).collect();

    compact
        .split(',')
        .filter_map(|token| Encoding::from_str(token).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_token() {
        assert_eq!(accepted_encodings("gzip"), HashSet::from([Encoding::Gzip]));
    }

    #[test]
    fn whitespace_and_extra_tokens() {
        let set = accepted_encodings(" deflate ,  gzip , invalid-1 ");
        assert_eq!(set, HashSet::from([Encoding::Gzip]));
    }

    #[test]
    fn weighted_token_is_not_exact() {
        assert!(!accepted_encodings("gzip;q=0.8").contains(&Encoding::Gzip));
        assert!(!accepted_encodings("GZIP").contains(&Encoding::Gzip));
    }

    #[test]
    fn unsupported_codings_are_ignored() {
        assert!(accepted_encodings("identity, *, br").is_empty());
    }

    #[test]
    fn empty_value() {
        assert!(accepted_encodings("").is_empty());
    }
}
