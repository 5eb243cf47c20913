use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};

/// DNS record type accepted by the ipv64 API.
///
/// Serialized as uppercase strings (`"TXT"`, `"A"`, `"AAAA"`, etc.), matching the
/// `type` form field of the API. The set is closed: everything the API would
/// reject is unrepresentable, so a typed call can never fail record-type
/// validation. String input from config or callers goes through
/// [`RecordType::parse`], which rejects unknown types before any request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// Text record. The only type the challenge flow uses.
    Txt,
    /// IPv4 address record.
    A,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Name server record.
    Ns,
    /// Pointer (reverse lookup) record.
    Ptr,
    /// Service locator record.
    Srv,
    /// Start of authority record.
    Soa,
    /// IPv6 address record.
    Aaaa,
}

impl RecordType {
    /// Parse a record type string the way the API validates its `type` field.
    pub fn parse(record_type: &str) -> Result<Self> {
        match record_type.to_uppercase().as_str() {
            "TXT" => Ok(Self::Txt),
            "A" => Ok(Self::A),
            "CNAME" => Ok(Self::Cname),
            "MX" => Ok(Self::Mx),
            "NS" => Ok(Self::Ns),
            "PTR" => Ok(Self::Ptr),
            "SRV" => Ok(Self::Srv),
            "SOA" => Ok(Self::Soa),
            "AAAA" => Ok(Self::Aaaa),
            _ => Err(ProviderError::UnsupportedRecordType {
                record_type: record_type.to_string(),
            }),
        }
    }

    /// The uppercase wire representation used in the `type` form field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Txt => "TXT",
            Self::A => "A",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Ptr => "PTR",
            Self::Srv => "SRV",
            Self::Soa => "SOA",
            Self::Aaaa => "AAAA",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_supported_types() {
        let cases = [
            ("TXT", RecordType::Txt),
            ("A", RecordType::A),
            ("CNAME", RecordType::Cname),
            ("MX", RecordType::Mx),
            ("NS", RecordType::Ns),
            ("PTR", RecordType::Ptr),
            ("SRV", RecordType::Srv),
            ("SOA", RecordType::Soa),
            ("AAAA", RecordType::Aaaa),
        ];
        for (s, expected) in cases {
            let parsed = RecordType::parse(s);
            assert!(
                matches!(parsed, Ok(t) if t == expected),
                "unexpected parse result for {s}: {parsed:?}"
            );
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        let parsed = RecordType::parse("txt");
        assert!(matches!(parsed, Ok(RecordType::Txt)));
    }

    #[test]
    fn parse_unknown_type_fails() {
        for s in ["LOC", "CAA", "SPF", ""] {
            let parsed = RecordType::parse(s);
            assert!(
                matches!(
                    &parsed,
                    Err(ProviderError::UnsupportedRecordType { record_type }) if record_type == s
                ),
                "unexpected parse result for {s}: {parsed:?}"
            );
        }
    }

    #[test]
    fn as_str_round_trips() {
        let types = [
            RecordType::Txt,
            RecordType::A,
            RecordType::Cname,
            RecordType::Mx,
            RecordType::Ns,
            RecordType::Ptr,
            RecordType::Srv,
            RecordType::Soa,
            RecordType::Aaaa,
        ];
        for t in types {
            let back = RecordType::parse(t.as_str());
            assert!(matches!(back, Ok(b) if b == t), "round trip failed for {t}");
        }
    }

    #[test]
    fn serde_uses_uppercase_strings() {
        let json_res = serde_json::to_string(&RecordType::Aaaa);
        assert!(json_res.is_ok(), "serde_json::to_string failed: {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        assert_eq!(json, "\"AAAA\"");
    }
}
