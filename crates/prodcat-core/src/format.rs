use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Wire format negotiated with the catalog API through the `Accept` header.
///
/// The response body is parsed according to the requested format; the client
/// never sniffs the body to guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Xml,
}

impl Format {
    /// Value sent in the `Accept` request header.
    #[must_use]
    pub fn accept_header(self) -> &'static str {
        match self {
            Format::Json => "application/json",
            Format::Xml => "application/xml",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "json" | "application/json" => Ok(Format::Json),
            "xml" | "application/xml" => Ok(Format::Xml),
            _ => Err(format!("unsupported format \"{s}\" (expected json or xml)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_header_matches_format() {
        assert_eq!(Format::Json.accept_header(), "application/json");
        assert_eq!(Format::Xml.accept_header(), "application/xml");
    }

    #[test]
    fn parses_short_and_mime_forms() {
        assert_eq!("json".parse::<Format>(), Ok(Format::Json));
        assert_eq!(" XML ".parse::<Format>(), Ok(Format::Xml));
        assert_eq!("application/json".parse::<Format>(), Ok(Format::Json));
        assert_eq!("Application/XML".parse::<Format>(), Ok(Format::Xml));
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "yaml".parse::<Format>().unwrap_err();
        assert!(err.contains("yaml"), "error should name the value: {err}");
    }

    #[test]
    fn default_is_json() {
        assert_eq!(Format::default(), Format::Json);
    }
}
