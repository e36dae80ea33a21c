use chrono::{DateTime, Utc};
use localization::LocalizedText;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Language variants searched by the free-text filter, matching the
/// languages the catalog is actually authored in.
pub const SEARCH_LANGS: &[&str] = &["en", "bn", "hi", "es"];

/// Menu category
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Tea,
    Coffee,
    Beverage,
    Desert,
    Snacks,
}

/// Serving unit selector: "c" serves in a cup, anything else in a glass
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UnitKey {
    #[default]
    C,
    G,
}

/// Stock, availability and pricing block
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Logistics {
    /// Units on hand
    #[serde(default)]
    pub stock: i32,
    /// Whether the entry shows up on the public menu
    #[serde(default)]
    pub is_available: bool,
    /// Selling price
    #[serde(default)]
    pub grand_total: f64,
    /// Serving unit selector
    #[serde(default)]
    pub u_key: UnitKey,
    /// Energy per serving
    #[serde(default)]
    pub calories: i32,
}

/// Thumbnail plus ordered gallery of asset URLs
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ProductMedia {
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub gallery: Vec<String>,
}

/// Product entity - a multilingual catalog entry stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Public identifier: `{category}--{position:02}--{slug}`, unique
    pub short_id: String,
    /// Display order on the menu; also feeds the short id
    #[serde(default)]
    pub position: i32,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Translated name; "en" is mandatory
    pub title: LocalizedText,
    /// Translated description; "en" is mandatory
    pub description: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_benefit: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fun_fact: Option<LocalizedText>,
    pub logistics: Logistics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<ProductMedia>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    /// Explicit public identifier; generated from category/position/title
    /// when absent
    pub short_id: Option<String>,
    #[serde(default)]
    pub position: i32,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(custom(function = localization::require_en))]
    pub title: LocalizedText,
    #[validate(custom(function = localization::require_en))]
    pub description: LocalizedText,
    pub ingredients: Option<LocalizedText>,
    pub health_benefit: Option<LocalizedText>,
    pub origin: Option<LocalizedText>,
    pub fun_fact: Option<LocalizedText>,
    pub logistics: Logistics,
    pub media: Option<ProductMedia>,
}

/// DTO for updating an existing product
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    /// Explicit public identifier override
    pub short_id: Option<String>,
    pub position: Option<i32>,
    pub category: Option<Category>,
    pub tags: Option<Vec<String>>,
    #[validate(custom(function = crate::models::validate_optional_en))]
    pub title: Option<LocalizedText>,
    #[validate(custom(function = crate::models::validate_optional_en))]
    pub description: Option<LocalizedText>,
    pub ingredients: Option<LocalizedText>,
    pub health_benefit: Option<LocalizedText>,
    pub origin: Option<LocalizedText>,
    pub fun_fact: Option<LocalizedText>,
    pub logistics: Option<Logistics>,
    pub media: Option<ProductMedia>,
}

/// An updated title/description must still carry the "en" entry.
pub fn validate_optional_en(text: &LocalizedText) -> Result<(), validator::ValidationError> {
    localization::require_en(text)
}

/// Filter predicates compiled by the query engine
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Availability filter; public listings force `Some(true)`,
    /// admin listings leave it unset
    pub available: Option<bool>,
    /// Exact category match
    pub category: Option<Category>,
    /// Case-insensitive substring over every configured language variant of
    /// title/description, over tags, and over the short id
    pub search: Option<String>,
}

/// Public menu listing query
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct MenuQuery {
    /// Narrow to one category
    pub cat: Option<Category>,
}

/// Public search query
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, IntoParams)]
pub struct SearchQuery {
    /// Search keywords
    #[validate(length(min = 1))]
    pub q: String,
    /// Narrow to one category
    pub cat: Option<Category>,
}

/// Desired media arrangement: which URL leads, and the gallery order
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct MediaOrder {
    /// The URL that should become the thumbnail
    #[validate(length(min = 1))]
    pub thumbnail: String,
    /// Gallery URLs in the desired serial order
    pub gallery: Vec<String>,
}

/// One file received from a multipart upload
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Per-category slice of the catalog statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryCount {
    pub category: Category,
    pub count: u64,
}

/// Catalog statistics computed in one aggregation pass
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CatalogStats {
    /// Total number of products
    pub total: u64,
    /// Products flagged available
    pub available: u64,
    /// Per-category counts, largest first
    pub breakdown: Vec<CategoryCount>,
    pub timestamp: DateTime<Utc>,
}

impl Product {
    /// Build a new entry from the create DTO, composing the public id
    /// unless the caller supplied one.
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        let short_id = input.short_id.unwrap_or_else(|| {
            short_id::slug_id(
                &input.category.to_string(),
                input.position,
                input.title.resolve(localization::DEFAULT_LANG),
            )
        });
        Self {
            id: Uuid::now_v7(),
            short_id,
            position: input.position,
            category: input.category,
            tags: input.tags,
            title: input.title,
            description: input.description,
            ingredients: input.ingredients,
            health_benefit: input.health_benefit,
            origin: input.origin,
            fun_fact: input.fun_fact,
            logistics: input.logistics,
            media: input.media,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from the update DTO.
    ///
    /// A position change recomposes the public id from the post-update
    /// category/position/title; an explicit short id in the patch wins.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        let position_changed = update
            .position
            .is_some_and(|position| position != self.position);

        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(ingredients) = update.ingredients {
            self.ingredients = Some(ingredients);
        }
        if let Some(health_benefit) = update.health_benefit {
            self.health_benefit = Some(health_benefit);
        }
        if let Some(origin) = update.origin {
            self.origin = Some(origin);
        }
        if let Some(fun_fact) = update.fun_fact {
            self.fun_fact = Some(fun_fact);
        }
        if let Some(logistics) = update.logistics {
            self.logistics = logistics;
        }
        if let Some(media) = update.media {
            self.media = Some(media);
        }

        if let Some(short_id) = update.short_id {
            self.short_id = short_id;
        } else if position_changed {
            self.short_id = short_id::slug_id(
                &self.category.to_string(),
                self.position,
                self.title.resolve(localization::DEFAULT_LANG),
            );
        }

        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn create_input(position: i32, title_en: &str) -> CreateProduct {
        CreateProduct {
            short_id: None,
            position,
            category: Category::Tea,
            tags: vec!["hot".to_string()],
            title: LocalizedText::from_pairs([("en", title_en), ("bn", "গরম দুধ চা")]),
            description: LocalizedText::from_pairs([("en", "Classic milk tea")]),
            ingredients: None,
            health_benefit: None,
            origin: None,
            fun_fact: None,
            logistics: Logistics {
                stock: 10,
                is_available: true,
                grand_total: 30.0,
                u_key: UnitKey::C,
                calories: 120,
            },
            media: None,
        }
    }

    #[test]
    fn new_composes_short_id_from_category_position_title() {
        let product = Product::new(create_input(3, "Hot Milk Tea"));
        assert_eq!(product.short_id, "tea--03--hot-milk-tea");
    }

    #[test]
    fn new_keeps_explicit_short_id() {
        let mut input = create_input(3, "Hot Milk Tea");
        input.short_id = Some("tea--legacy".to_string());
        let product = Product::new(input);
        assert_eq!(product.short_id, "tea--legacy");
    }

    #[test]
    fn update_without_position_keeps_short_id() {
        let mut product = Product::new(create_input(3, "Hot Milk Tea"));
        product.apply_update(UpdateProduct {
            tags: Some(vec!["sweet".to_string()]),
            ..Default::default()
        });
        assert_eq!(product.short_id, "tea--03--hot-milk-tea");
        assert_eq!(product.tags, vec!["sweet"]);
    }

    #[test]
    fn position_change_recomposes_short_id() {
        let mut product = Product::new(create_input(3, "Hot Milk Tea"));
        product.apply_update(UpdateProduct {
            position: Some(12),
            ..Default::default()
        });
        assert_eq!(product.short_id, "tea--12--hot-milk-tea");
    }

    #[test]
    fn position_change_uses_post_update_title() {
        let mut product = Product::new(create_input(3, "Hot Milk Tea"));
        product.apply_update(UpdateProduct {
            position: Some(4),
            title: Some(LocalizedText::from_pairs([("en", "Iced Lemon Tea")])),
            ..Default::default()
        });
        assert_eq!(product.short_id, "tea--04--iced-lemon-tea");
    }

    #[test]
    fn explicit_short_id_wins_over_regeneration() {
        let mut product = Product::new(create_input(3, "Hot Milk Tea"));
        product.apply_update(UpdateProduct {
            position: Some(9),
            short_id: Some("tea--pinned".to_string()),
            ..Default::default()
        });
        assert_eq!(product.short_id, "tea--pinned");
    }

    #[test]
    fn create_requires_english_title_and_description() {
        use validator::Validate;
        let mut input = create_input(1, "Hot Milk Tea");
        input.description = LocalizedText::from_pairs([("bn", "বর্ণনা")]);
        assert!(input.validate().is_err());
    }

    #[test]
    fn unit_key_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UnitKey::C).unwrap(), "\"c\"");
        assert_eq!(serde_json::to_string(&UnitKey::G).unwrap(), "\"g\"");
    }

    #[test]
    fn category_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Desert).unwrap(), "\"desert\"");
        assert_eq!("snacks".parse::<Category>().unwrap(), Category::Snacks);
    }
}
