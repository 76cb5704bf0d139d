use std::convert::TryFrom;
use std::ops::Deref;

use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};

/// A compiled regex that serializes as its pattern string and is recompiled
/// on deserialization, so trained models stay plain data on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "String")]
pub struct SerializableRegex {
    pattern: String,
    regex: Regex,
}

impl SerializableRegex {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(SerializableRegex {
            pattern: pattern.to_string(),
            regex: Regex::new(pattern)?,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl TryFrom<String> for SerializableRegex {
    type Error = regex::Error;

    fn try_from(pattern: String) -> Result<Self, regex::Error> {
        SerializableRegex::new(&pattern)
    }
}

impl Serialize for SerializableRegex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.pattern)
    }
}

impl PartialEq for SerializableRegex {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for SerializableRegex {}

impl Deref for SerializableRegex {
    type Target = Regex;

    fn deref(&self) -> &Self::Target {
        &self.regex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_bincode() {
        let regex = SerializableRegex::new(r"^-?\d+(.\d+)?$").unwrap();
        let bytes = bincode::serialize(&regex).unwrap();
        let restored: SerializableRegex = bincode::deserialize(&bytes).unwrap();

        assert_eq!(restored, regex);
        assert_eq!(restored.pattern(), regex.pattern());
        assert!(restored.is_match("-3.14"));
    }

    #[test]
    fn invalid_pattern_fails_to_compile() {
        assert!(SerializableRegex::new("(unclosed").is_err());
    }
}
