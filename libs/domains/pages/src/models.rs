use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use localization::{LabelMap, LocalizedKeywords, LocalizedText};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// SEO metadata block
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    /// Language-keyed keyword lists
    #[serde(default)]
    pub keywords: LocalizedKeywords,
    #[serde(default)]
    pub og_image: String,
    #[serde(default)]
    pub is_no_index: bool,
}

/// Page entity - static-page metadata stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Stable public identifier, unique, never regenerated
    pub key: String,
    /// Route the page is served under
    pub link: String,
    /// Translated title; "en" is mandatory
    pub title: LocalizedText,
    /// Translated description; "en" is mandatory
    pub description: LocalizedText,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
    /// Open-ended set of extra translated labels for this page
    #[serde(default, skip_serializing_if = "LabelMap::is_empty")]
    pub content: LabelMap,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new page
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePage {
    /// Stable internal identifier, e.g. "home"
    #[validate(length(min = 1, max = 100))]
    pub key: String,
    #[validate(length(min = 1))]
    pub link: String,
    #[validate(custom(function = localization::require_en))]
    pub title: LocalizedText,
    #[validate(custom(function = localization::require_en))]
    pub description: LocalizedText,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub video_url: String,
    pub seo: Option<Seo>,
    #[serde(default)]
    pub content: LabelMap,
}

/// DTO for updating an existing page. The key itself is immutable.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePage {
    pub link: Option<String>,
    #[validate(custom(function = crate::models::validate_optional_en))]
    pub title: Option<LocalizedText>,
    #[validate(custom(function = crate::models::validate_optional_en))]
    pub description: Option<LocalizedText>,
    pub icon: Option<String>,
    pub video_url: Option<String>,
    pub seo: Option<Seo>,
    pub content: Option<LabelMap>,
}

/// An updated title/description must still carry the "en" entry.
pub fn validate_optional_en(text: &LocalizedText) -> Result<(), validator::ValidationError> {
    localization::require_en(text)
}

/// Language-resolved SEO block
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeoView {
    pub keywords: Vec<String>,
    pub og_image: String,
    pub is_no_index: bool,
}

/// Language-resolved public representation of a page.
///
/// The page's extra labels are flattened to the top level next to the
/// fixed fields, so clients read `view.cta` rather than `view.labels.cta`.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub key: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub icon: String,
    pub video: String,
    pub seo: SeoView,
    #[serde(flatten)]
    pub labels: BTreeMap<String, String>,
}

impl PageView {
    pub fn project(page: &Page, lang: &str) -> Self {
        let seo = page.seo.clone().unwrap_or_default();
        Self {
            key: page.key.clone(),
            title: page.title.resolve(lang).to_string(),
            description: page.description.resolve(lang).to_string(),
            link: page.link.clone(),
            icon: page.icon.clone(),
            video: page.video_url.clone(),
            seo: SeoView {
                keywords: seo.keywords.resolve(lang),
                og_image: seo.og_image,
                is_no_index: seo.is_no_index,
            },
            labels: page.content.resolve_all(lang),
        }
    }
}

impl Page {
    /// Build a new page from the create DTO.
    pub fn new(input: CreatePage) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            key: input.key,
            link: input.link,
            title: input.title,
            description: input.description,
            icon: input.icon,
            video_url: input.video_url,
            seo: input.seo,
            content: input.content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from the update DTO. The key never changes.
    pub fn apply_update(&mut self, update: UpdatePage) {
        if let Some(link) = update.link {
            self.link = link;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(icon) = update.icon {
            self.icon = icon;
        }
        if let Some(video_url) = update.video_url {
            self.video_url = video_url;
        }
        if let Some(seo) = update.seo {
            self.seo = Some(seo);
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use localization::LocalizedText;

    pub(crate) fn create_input() -> CreatePage {
        let mut content = LabelMap::default();
        content.0.insert(
            "cta".to_string(),
            LocalizedText::from_pairs([("en", "Order now"), ("bn", "অর্ডার করুন")]),
        );

        let mut keywords = LocalizedKeywords::default();
        keywords
            .0
            .insert("en".to_string(), vec!["tea".to_string(), "chai".to_string()]);
        keywords.0.insert("bn".to_string(), vec!["চা".to_string()]);

        CreatePage {
            key: "home".to_string(),
            link: "/".to_string(),
            title: LocalizedText::from_pairs([("en", "Home"), ("bn", "হোম")]),
            description: LocalizedText::from_pairs([("en", "Welcome")]),
            icon: "home.svg".to_string(),
            video_url: String::new(),
            seo: Some(Seo {
                keywords,
                og_image: "https://cdn.example.com/og/home.jpg".to_string(),
                is_no_index: false,
            }),
            content,
        }
    }

    #[test]
    fn view_resolves_fixed_fields() {
        let page = Page::new(create_input());
        let view = PageView::project(&page, "bn");
        assert_eq!(view.title, "হোম");
        // No Bengali description: English fallback
        assert_eq!(view.description, "Welcome");
        assert_eq!(view.seo.keywords, vec!["চা"]);
    }

    #[test]
    fn view_flattens_content_labels() {
        let page = Page::new(create_input());
        let view = PageView::project(&page, "bn");
        assert_eq!(view.labels["cta"], "অর্ডার করুন");

        // Serde flattening puts labels next to the fixed fields
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["cta"], "অর্ডার করুন");
        assert_eq!(json["title"], "হোম");
    }

    #[test]
    fn view_keyword_fallback_for_unknown_language() {
        let page = Page::new(create_input());
        let view = PageView::project(&page, "hi");
        assert_eq!(view.seo.keywords, vec!["tea", "chai"]);
    }

    #[test]
    fn view_without_seo_defaults() {
        let mut input = create_input();
        input.seo = None;
        let page = Page::new(input);
        let view = PageView::project(&page, "en");
        assert!(view.seo.keywords.is_empty());
        assert_eq!(view.seo.og_image, "");
        assert!(!view.seo.is_no_index);
    }

    #[test]
    fn update_cannot_touch_key() {
        let mut page = Page::new(create_input());
        page.apply_update(UpdatePage {
            link: Some("/start".to_string()),
            ..Default::default()
        });
        assert_eq!(page.key, "home");
        assert_eq!(page.link, "/start");
    }

    #[test]
    fn create_requires_english_title() {
        use validator::Validate;
        let mut input = create_input();
        input.title = LocalizedText::from_pairs([("bn", "হোম")]);
        assert!(input.validate().is_err());
    }
}
