//! Serde helpers that strip surrounding whitespace at deserialization, so
//! `validator` length rules see the value that will be stored.

use serde::{Deserialize, Deserializer};

/// `#[serde(deserialize_with = "trimmed::string")]`
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(trim_owned)
}

/// Optional variant. Pair it with `#[serde(default)]` so a missing field stays `None`.
pub fn option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.map(trim_owned))
}

fn trim_owned(s: String) -> String {
    let trimmed = s.trim();
    if trimmed.len() == s.len() {
        s
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Named {
        #[serde(deserialize_with = "string")]
        name: String,
        #[serde(default, deserialize_with = "option")]
        nick: Option<String>,
    }

    #[test]
    fn test_strips_whitespace() {
        let named: Named = serde_json::from_str(r#"{"name": "  Ada \t", "nick": " ada "}"#).unwrap();

        assert_eq!(named.name, "Ada");
        assert_eq!(named.nick.as_deref(), Some("ada"));
    }

    #[test]
    fn test_blank_becomes_empty() {
        let named: Named = serde_json::from_str(r#"{"name": "   "}"#).unwrap();

        assert_eq!(named.name, "");
        assert!(named.nick.is_none());
    }

    #[test]
    fn test_null_option_stays_none() {
        let named: Named = serde_json::from_str(r#"{"name": "x", "nick": null}"#).unwrap();
        assert!(named.nick.is_none());
    }
}
