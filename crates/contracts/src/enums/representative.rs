use serde::{Deserialize, Serialize};
use std::fmt;

/// Sales representatives
///
/// The known set drives the entry form select and the dashboard grouping.
/// A stored `repName` outside that set reads as `Other` and is written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Representative {
    #[default]
    Naito,
    Yokosaka,
    Sagawa,
    Other(String),
}

impl Representative {
    /// Stored code (the value persisted as `repName`)
    pub fn code(&self) -> &str {
        match self {
            Representative::Naito => "Naito",
            Representative::Yokosaka => "Yokosaka",
            Representative::Sagawa => "Sagawa",
            Representative::Other(code) => code,
        }
    }

    /// Human-readable name; unknown codes show as stored
    pub fn display_name(&self) -> &str {
        match self {
            Representative::Naito => "内藤",
            Representative::Yokosaka => "横坂",
            Representative::Sagawa => "佐川",
            Representative::Other(code) => code,
        }
    }

    /// All known representatives in dashboard order
    pub fn all() -> Vec<Representative> {
        vec![
            Representative::Naito,
            Representative::Yokosaka,
            Representative::Sagawa,
        ]
    }

    /// Parse a known representative from its stored code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Naito" => Some(Representative::Naito),
            "Yokosaka" => Some(Representative::Yokosaka),
            "Sagawa" => Some(Representative::Sagawa),
            _ => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Representative::Other(_))
    }
}

impl From<String> for Representative {
    fn from(code: String) -> Self {
        Representative::from_code(&code).unwrap_or(Representative::Other(code))
    }
}

impl From<Representative> for String {
    fn from(rep: Representative) -> Self {
        match rep {
            Representative::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for Representative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip() {
        for rep in Representative::all() {
            assert_eq!(Representative::from_code(rep.code()), Some(rep.clone()));
            assert!(rep.is_known());
        }
        assert_eq!(Representative::from_code("Unknown"), None);
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&Representative::Yokosaka).unwrap();
        assert_eq!(json, "\"Yokosaka\"");
        let rep: Representative = serde_json::from_str("\"Sagawa\"").unwrap();
        assert_eq!(rep, Representative::Sagawa);
    }

    #[test]
    fn test_unknown_code_is_kept() {
        let rep: Representative = serde_json::from_str("\"Tanaka\"").unwrap();
        assert_eq!(rep, Representative::Other("Tanaka".to_string()));
        assert!(!rep.is_known());
        assert_eq!(rep.display_name(), "Tanaka");
        assert_eq!(serde_json::to_string(&rep).unwrap(), "\"Tanaka\"");
    }
}
