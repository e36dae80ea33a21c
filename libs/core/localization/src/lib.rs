//! Language-keyed text containers and the resolution rules that turn them
//! into single-language values.
//!
//! Every user-facing text field in the content model is a map from language
//! code ("en", "bn", ...) to a value. English is the mandatory fallback:
//! creation-time validation requires an "en" entry, and resolution degrades
//! to it silently for unknown or empty translations. Resolution never fails.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToSchema;
use validator::ValidationError;

/// The mandatory fallback language.
pub const DEFAULT_LANG: &str = "en";

/// A translated text field: language code mapped to a string value.
///
/// Stored as a plain map; key order is irrelevant. The "en" entry is
/// required at the DTO boundary (see [`require_en`]), never re-checked
/// during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = BTreeMap<String, String>, example = json!({"en": "Hot Milk Tea", "bn": "গরম দুধ চা"}))]
pub struct LocalizedText(pub BTreeMap<String, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (language, value) pairs. Handy in tests and fixtures.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn insert(&mut self, lang: impl Into<String>, value: impl Into<String>) {
        self.0.insert(lang.into(), value.into());
    }

    pub fn get(&self, lang: &str) -> Option<&str> {
        self.0.get(lang).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a non-empty "en" translation exists.
    pub fn has_default(&self) -> bool {
        self.0
            .get(DEFAULT_LANG)
            .is_some_and(|value| !value.is_empty())
    }

    /// Resolve this field to a single language.
    ///
    /// Returns the requested language's value when present and non-empty,
    /// otherwise the "en" value when present and non-empty, otherwise "".
    pub fn resolve(&self, lang: &str) -> &str {
        self.0
            .get(lang)
            .filter(|value| !value.is_empty())
            .or_else(|| self.0.get(DEFAULT_LANG).filter(|value| !value.is_empty()))
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocalizedText {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

/// Resolve an optional field, treating an absent map as empty.
///
/// Legacy and partially-migrated documents may lack optional translated
/// fields entirely; those resolve to "".
pub fn resolve<'a>(field: Option<&'a LocalizedText>, lang: &str) -> &'a str {
    field.map(|text| text.resolve(lang)).unwrap_or("")
}

/// Language-keyed keyword lists, used by page SEO metadata.
///
/// Fallback differs from [`LocalizedText`]: only a *missing* language key
/// falls back to "en". An empty list stored under the requested language is
/// returned as-is, matching the behavior clients already depend on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = BTreeMap<String, Vec<String>>, example = json!({"en": ["tea"], "bn": ["চা"]}))]
pub struct LocalizedKeywords(pub BTreeMap<String, Vec<String>>);

impl LocalizedKeywords {
    pub fn resolve(&self, lang: &str) -> Vec<String> {
        self.0
            .get(lang)
            .or_else(|| self.0.get(DEFAULT_LANG))
            .cloned()
            .unwrap_or_default()
    }
}

/// An open-ended set of extra translated labels, keyed by label name.
///
/// Pages carry arbitrary per-page labels (button captions, section
/// headings); each resolves independently through the string rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = BTreeMap<String, BTreeMap<String, String>>)]
pub struct LabelMap(pub BTreeMap<String, LocalizedText>);

impl LabelMap {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flatten every label into `label -> resolved string`.
    pub fn resolve_all(&self, lang: &str) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(label, text)| (label.clone(), text.resolve(lang).to_string()))
            .collect()
    }
}

/// `validator` hook enforcing the mandatory "en" entry on a translated field.
///
/// ```ignore
/// #[derive(Validate)]
/// struct CreateFaq {
///     #[validate(custom(function = localization::require_en))]
///     question: LocalizedText,
/// }
/// ```
pub fn require_en(text: &LocalizedText) -> Result<(), ValidationError> {
    if text.has_default() {
        Ok(())
    } else {
        Err(ValidationError::new("required_en")
            .with_message("English (en) translation is mandatory".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LocalizedText {
        LocalizedText::from_pairs([("en", "Tea"), ("bn", "চা")])
    }

    #[test]
    fn resolves_requested_language() {
        assert_eq!(sample().resolve("bn"), "চা");
    }

    #[test]
    fn falls_back_to_english_for_unknown_language() {
        assert_eq!(sample().resolve("fr"), "Tea");
    }

    #[test]
    fn falls_back_to_english_for_empty_translation() {
        let text = LocalizedText::from_pairs([("en", "Tea"), ("bn", "")]);
        assert_eq!(text.resolve("bn"), "Tea");
    }

    #[test]
    fn empty_english_resolves_to_empty_string() {
        let text = LocalizedText::from_pairs([("en", "")]);
        assert_eq!(text.resolve("bn"), "");
        assert_eq!(text.resolve("en"), "");
    }

    #[test]
    fn empty_map_resolves_to_empty_string() {
        assert_eq!(LocalizedText::new().resolve("en"), "");
    }

    #[test]
    fn absent_field_resolves_to_empty_string() {
        assert_eq!(resolve(None, "en"), "");
        assert_eq!(resolve(Some(&sample()), "bn"), "চা");
    }

    #[test]
    fn resolve_never_panics_on_odd_inputs() {
        let text = sample();
        for lang in ["", "EN", "bn-BD", "zz", "ঢাকা"] {
            let _ = text.resolve(lang);
        }
    }

    #[test]
    fn keywords_fall_back_only_on_missing_key() {
        let mut keywords = LocalizedKeywords::default();
        keywords
            .0
            .insert("en".to_string(), vec!["tea".to_string(), "chai".to_string()]);
        keywords.0.insert("bn".to_string(), Vec::new());

        // Missing key falls back to English...
        assert_eq!(keywords.resolve("hi"), vec!["tea", "chai"]);
        // ...but a present-and-empty list does not.
        assert!(keywords.resolve("bn").is_empty());
    }

    #[test]
    fn keywords_empty_map_resolves_to_empty_list() {
        assert!(LocalizedKeywords::default().resolve("en").is_empty());
    }

    #[test]
    fn label_map_flattens_through_string_rules() {
        let mut labels = LabelMap::default();
        labels.0.insert(
            "cta".to_string(),
            LocalizedText::from_pairs([("en", "Order now"), ("bn", "অর্ডার করুন")]),
        );
        labels
            .0
            .insert("footer".to_string(), LocalizedText::from_pairs([("en", "Visit us")]));

        let resolved = labels.resolve_all("bn");
        assert_eq!(resolved["cta"], "অর্ডার করুন");
        assert_eq!(resolved["footer"], "Visit us");
    }

    #[test]
    fn require_en_accepts_present_translation() {
        assert!(require_en(&sample()).is_ok());
    }

    #[test]
    fn require_en_rejects_missing_or_empty_translation() {
        assert!(require_en(&LocalizedText::from_pairs([("bn", "চা")])).is_err());
        assert!(require_en(&LocalizedText::from_pairs([("en", "")])).is_err());
    }

    #[test]
    fn serializes_as_plain_map() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json, serde_json::json!({"bn": "চা", "en": "Tea"}));
    }
}
