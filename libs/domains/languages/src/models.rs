use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Language entity - reference data stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Native display label, e.g. "বাংলা"
    pub label: String,
    /// Language code, unique, stored lowercase, e.g. "bn"
    pub code: String,
    /// Country code, stored uppercase, e.g. "BD"
    pub country_code: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for registering a language
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLanguage {
    #[validate(length(min = 1))]
    pub label: String,
    /// ISO-like short code, e.g. "bn"; folded to lowercase
    #[validate(length(min = 2, max = 5))]
    pub code: String,
    /// Two-letter country code; folded to uppercase
    #[validate(length(equal = 2))]
    pub country_code: String,
}

/// DTO for updating a language
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLanguage {
    #[validate(length(min = 1))]
    pub label: Option<String>,
    #[validate(length(min = 2, max = 5))]
    pub code: Option<String>,
    #[validate(length(equal = 2))]
    pub country_code: Option<String>,
}

impl Language {
    /// Build a new entry, folding code casing at the boundary.
    pub fn new(input: CreateLanguage) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            label: input.label,
            code: input.code.to_lowercase(),
            country_code: input.country_code.to_uppercase(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates, folding code casing the same way as creation.
    pub fn apply_update(&mut self, update: UpdateLanguage) {
        if let Some(label) = update.label {
            self.label = label;
        }
        if let Some(code) = update.code {
            self.code = code.to_lowercase();
        }
        if let Some(country_code) = update.country_code {
            self.country_code = country_code.to_uppercase();
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn create_input() -> CreateLanguage {
        CreateLanguage {
            label: "বাংলা".to_string(),
            code: "BN".to_string(),
            country_code: "bd".to_string(),
        }
    }

    #[test]
    fn new_folds_casing() {
        let language = Language::new(create_input());
        assert_eq!(language.code, "bn");
        assert_eq!(language.country_code, "BD");
    }

    #[test]
    fn update_folds_casing() {
        let mut language = Language::new(create_input());
        language.apply_update(UpdateLanguage {
            code: Some("Hi".to_string()),
            country_code: Some("in".to_string()),
            ..Default::default()
        });
        assert_eq!(language.code, "hi");
        assert_eq!(language.country_code, "IN");
    }

    #[test]
    fn create_validates_code_lengths() {
        use validator::Validate;
        let mut input = create_input();
        input.code = "x".to_string();
        assert!(input.validate().is_err());

        let mut input = create_input();
        input.country_code = "BGD".to_string();
        assert!(input.validate().is_err());
    }
}
