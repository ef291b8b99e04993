//! Presence-normalized text fields
//!
//! The registry encodes "no data" three different ways: a missing key, an
//! empty string, and the literal text `"null"`. [`TextField`] collapses all
//! three into a single absent state at the deserialization boundary so the
//! rest of the pipeline never has to test raw strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Literal text the registry uses for "no data", distinct from a missing key.
pub const NULL_SENTINEL: &str = "null";

/// The value meaning "yes" for boolean-like service/accessibility flags.
pub const AFFIRMATIVE: &str = "так";

/// Optional text with the registry's presence semantics baked in.
///
/// A value is present iff the raw text, after trimming, is non-empty and not
/// case-insensitively equal to [`NULL_SENTINEL`]. The stored form is always
/// the trimmed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField(Option<String>);

impl TextField {
    /// Normalize a raw registry value into present/absent form.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NULL_SENTINEL) {
                    TextField(None)
                } else {
                    TextField(Some(trimmed.to_string()))
                }
            }
            None => TextField(None),
        }
    }

    /// An absent field.
    pub fn absent() -> Self {
        TextField(None)
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// The normalized text, if present.
    pub fn text(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// The normalized text, or `fallback` when absent.
    pub fn display<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.0.as_deref().unwrap_or(fallback)
    }

    /// Whether this flag field holds the affirmative token, case-insensitively.
    ///
    /// Absent fields and any other text (including the null sentinel) are
    /// "not satisfied" — there is no third state.
    pub fn is_affirmative(&self) -> bool {
        match &self.0 {
            Some(s) => s.to_lowercase() == AFFIRMATIVE,
            None => false,
        }
    }
}

impl From<&str> for TextField {
    fn from(raw: &str) -> Self {
        TextField::from_raw(Some(raw))
    }
}

impl<'de> Deserialize<'de> for TextField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(TextField::from_raw(raw.as_deref()))
    }
}

impl Serialize for TextField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_empty_and_sentinel_are_all_absent() {
        assert!(!TextField::from_raw(None).is_present());
        assert!(!TextField::from_raw(Some("")).is_present());
        assert!(!TextField::from_raw(Some("   ")).is_present());
        assert!(!TextField::from_raw(Some("null")).is_present());
        assert!(!TextField::from_raw(Some("NULL")).is_present());
        assert!(!TextField::from_raw(Some("  Null  ")).is_present());
    }

    #[test]
    fn present_values_are_trimmed() {
        let f = TextField::from_raw(Some("  Київ  "));
        assert!(f.is_present());
        assert_eq!(f.text(), Some("Київ"));
    }

    #[test]
    fn display_falls_back_when_absent() {
        assert_eq!(TextField::absent().display("Не вказано"), "Не вказано");
        assert_eq!(TextField::from("Бровари").display("Не вказано"), "Бровари");
    }

    #[test]
    fn affirmative_is_case_insensitive() {
        assert!(TextField::from("так").is_affirmative());
        assert!(TextField::from("Так").is_affirmative());
        assert!(TextField::from("ТАК").is_affirmative());
        assert!(!TextField::from("ні").is_affirmative());
        assert!(!TextField::from("null").is_affirmative());
        assert!(!TextField::absent().is_affirmative());
    }

    #[test]
    fn deserializes_from_json_null_and_strings() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(default)]
            a: TextField,
            #[serde(default)]
            b: TextField,
            #[serde(default)]
            c: TextField,
        }

        let row: Row = serde_json::from_str(r#"{"a": "так", "b": null, "c": "null"}"#).unwrap();
        assert!(row.a.is_present());
        assert!(!row.b.is_present());
        assert!(!row.c.is_present());
    }
}
