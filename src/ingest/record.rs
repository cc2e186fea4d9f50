//! Raw input record.
//!
//! A record is one row of named string fields, exactly as a tabular
//! source hands it over before any typing. Field names are matched
//! case-insensitively so that `Ruimte`, `RUIMTE` and `ruimte` all address
//! the same column; names are folded to lowercase at insertion.

use std::collections::HashMap;

/// One untyped row of named fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from name/value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new();
        for (name, value) in pairs {
            record.set(name, value);
        }
        record
    }

    /// Sets a field, replacing any earlier value under the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields
            .insert(name.into().to_lowercase(), value.into());
    }

    /// Sets a field (builder style).
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Raw field value, if the field is present at all.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Trimmed field value; blank and whitespace-only values read as absent.
    pub fn get_trimmed(&self, name: &str) -> Option<&str> {
        self.get(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Iterates over field names and raw values, in no particular order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_names() {
        let record = Record::from_pairs([("Ruimte", "A1.01"), ("CAPACITEIT", "30")]);
        assert_eq!(record.get("ruimte"), Some("A1.01"));
        assert_eq!(record.get("Ruimte"), Some("A1.01"));
        assert_eq!(record.get("capaciteit"), Some("30"));
    }

    #[test]
    fn test_same_name_different_case_collapses() {
        let record = Record::from_pairs([("ruimte", "A1.01"), ("Ruimte", "B2.01")]);
        assert_eq!(record.get("ruimte"), Some("B2.01"));
        assert_eq!(record.fields().count(), 1);
    }

    #[test]
    fn test_get_trimmed() {
        let record = Record::new()
            .with_field("ruimte", "  A1.01  ")
            .with_field("activiteit", "   ")
            .with_field("groepgrootte", "");
        assert_eq!(record.get_trimmed("ruimte"), Some("A1.01"));
        assert_eq!(record.get_trimmed("activiteit"), None);
        assert_eq!(record.get_trimmed("groepgrootte"), None);
        assert_eq!(record.get_trimmed("startdatum"), None);
        // get still sees the raw value
        assert_eq!(record.get("activiteit"), Some("   "));
    }
}
