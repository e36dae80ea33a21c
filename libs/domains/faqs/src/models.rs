use chrono::{DateTime, Utc};
use localization::LocalizedText;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// FAQ entity - a multilingual question/answer pair stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Public identifier: `faq--{position}--{random6}`, unique.
    /// Absent on documents created before the scheme existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_id: Option<String>,
    /// Translated question; "en" is mandatory
    pub question: LocalizedText,
    /// Translated answer; "en" is mandatory
    pub answer: LocalizedText,
    /// Hidden entries never reach the public read path
    #[serde(default)]
    pub hide: bool,
    /// Display order
    #[serde(default)]
    pub position: i32,
    /// Optional related link
    #[serde(default)]
    pub link: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new FAQ
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateFaq {
    #[validate(custom(function = localization::require_en))]
    pub question: LocalizedText,
    #[validate(custom(function = localization::require_en))]
    pub answer: LocalizedText,
    #[serde(default)]
    pub hide: bool,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub link: String,
}

/// DTO for updating an existing FAQ
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateFaq {
    #[validate(custom(function = crate::models::validate_optional_en))]
    pub question: Option<LocalizedText>,
    #[validate(custom(function = crate::models::validate_optional_en))]
    pub answer: Option<LocalizedText>,
    pub hide: Option<bool>,
    pub position: Option<i32>,
    pub link: Option<String>,
}

/// An updated question/answer must still carry the "en" entry.
pub fn validate_optional_en(text: &LocalizedText) -> Result<(), validator::ValidationError> {
    localization::require_en(text)
}

/// Language-resolved public representation of an FAQ
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FaqView {
    pub id: Uuid,
    pub short_id: String,
    pub question: String,
    pub answer: String,
    pub position: i32,
    pub link: String,
    pub updated_at: DateTime<Utc>,
}

impl FaqView {
    /// Resolve one FAQ into the requested language.
    ///
    /// Documents predating the public-id scheme get a deterministic
    /// placeholder so clients always see a non-empty identifier.
    pub fn project(faq: &Faq, lang: &str) -> Self {
        Self {
            id: faq.id,
            short_id: faq
                .short_id
                .clone()
                .unwrap_or_else(|| format!("faq--{}--legacy", faq.position)),
            question: faq.question.resolve(lang).to_string(),
            answer: faq.answer.resolve(lang).to_string(),
            position: faq.position,
            link: faq.link.clone(),
            updated_at: faq.updated_at,
        }
    }
}

impl Faq {
    /// Build a new entry from the create DTO, minting the public id.
    pub fn new(input: CreateFaq) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            short_id: Some(short_id::random_id("faq", input.position)),
            question: input.question,
            answer: input.answer,
            hide: input.hide,
            position: input.position,
            link: input.link,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from the update DTO.
    ///
    /// Any position update mints a fresh public id - even to the same
    /// position value. Clients caching the old id are forced to refetch;
    /// the id is deliberately NOT a stable key across position edits.
    pub fn apply_update(&mut self, update: UpdateFaq) {
        if let Some(question) = update.question {
            self.question = question;
        }
        if let Some(answer) = update.answer {
            self.answer = answer;
        }
        if let Some(hide) = update.hide {
            self.hide = hide;
        }
        if let Some(position) = update.position {
            self.position = position;
            self.short_id = Some(short_id::random_id("faq", position));
        }
        if let Some(link) = update.link {
            self.link = link;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn create_input() -> CreateFaq {
        CreateFaq {
            question: LocalizedText::from_pairs([("en", "Do you deliver?"), ("bn", "ডেলিভারি হয়?")]),
            answer: LocalizedText::from_pairs([("en", "Yes, within the city.")]),
            hide: false,
            position: 4,
            link: String::new(),
        }
    }

    #[test]
    fn new_mints_random_short_id() {
        let faq = Faq::new(create_input());
        let short_id = faq.short_id.unwrap();
        assert!(short_id.starts_with("faq--4--"));
        assert_eq!(short_id.len(), "faq--4--".len() + 6);
    }

    #[test]
    fn rotates_short_id_when_position_changes() {
        // Position edits rotate the random suffix: the old public id goes
        // stale on purpose, so clients caching it must refetch. The flip
        // side is that the id is not a durable key across reordering.
        let mut faq = Faq::new(create_input());
        let before = faq.short_id.clone().unwrap();

        faq.apply_update(UpdateFaq {
            position: Some(7),
            ..Default::default()
        });

        let after = faq.short_id.clone().unwrap();
        assert!(after.starts_with("faq--7--"));
        assert_ne!(before, after);
    }

    #[test]
    fn same_position_value_still_rotates() {
        let mut faq = Faq::new(create_input());
        let before = faq.short_id.clone().unwrap();

        faq.apply_update(UpdateFaq {
            position: Some(4),
            ..Default::default()
        });

        assert_ne!(faq.short_id.unwrap(), before);
    }

    #[test]
    fn non_position_updates_keep_short_id() {
        let mut faq = Faq::new(create_input());
        let before = faq.short_id.clone().unwrap();

        faq.apply_update(UpdateFaq {
            hide: Some(true),
            link: Some("/delivery".to_string()),
            ..Default::default()
        });

        assert_eq!(faq.short_id.unwrap(), before);
        assert!(faq.hide);
    }

    #[test]
    fn view_resolves_language_with_fallback() {
        let faq = Faq::new(create_input());
        let view = FaqView::project(&faq, "bn");
        assert_eq!(view.question, "ডেলিভারি হয়?");
        // No Bengali answer: English fallback
        assert_eq!(view.answer, "Yes, within the city.");
    }

    #[test]
    fn view_backfills_legacy_short_id() {
        let mut faq = Faq::new(create_input());
        faq.short_id = None;
        let view = FaqView::project(&faq, "en");
        assert_eq!(view.short_id, "faq--4--legacy");
    }

    #[test]
    fn create_requires_english_question() {
        use validator::Validate;
        let mut input = create_input();
        input.question = LocalizedText::from_pairs([("bn", "প্রশ্ন?")]);
        assert!(input.validate().is_err());
    }
}
