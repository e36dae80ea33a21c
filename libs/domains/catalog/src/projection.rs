//! Language-specific views of catalog entries.
//!
//! Two shapes leave the service: the compact card for listings and the full
//! detail view for a single entry. Both resolve every translated field into
//! the requested language with silent English fallback.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Category, Product, ProductMedia, UnitKey};

/// Per-language serving-unit vocabulary.
struct UnitLabels {
    cup: &'static str,
    glass: &'static str,
}

/// Serving-unit labels; unknown languages fall back to English.
fn unit_labels(lang: &str) -> &'static UnitLabels {
    const EN: UnitLabels = UnitLabels {
        cup: "Cup",
        glass: "Glass",
    };
    const BN: UnitLabels = UnitLabels {
        cup: "কাপ",
        glass: "গ্লাস",
    };

    match lang {
        "bn" => &BN,
        _ => &EN,
    }
}

/// The label for a serving unit in the requested language.
pub fn unit_label(key: UnitKey, lang: &str) -> &'static str {
    let labels = unit_labels(lang);
    match key {
        UnitKey::C => labels.cup,
        UnitKey::G => labels.glass,
    }
}

/// Compact list-view representation of a catalog entry
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub short_id: String,
    pub category: Category,
    pub tags: Vec<String>,
    /// Title resolved into the requested language
    pub title: String,
    pub price: f64,
    /// Serving unit label in the requested language
    pub unit: String,
    /// Thumbnail URL, empty when no media is attached
    pub thumbnail: String,
}

impl ProductCard {
    pub fn project(product: &Product, lang: &str) -> Self {
        Self {
            short_id: product.short_id.clone(),
            category: product.category,
            tags: product.tags.clone(),
            title: product.title.resolve(lang).to_string(),
            price: product.logistics.grand_total,
            unit: unit_label(product.logistics.u_key, lang).to_string(),
            thumbnail: product
                .media
                .as_ref()
                .map(|media| media.thumbnail.clone())
                .unwrap_or_default(),
        }
    }
}

/// Resolved descriptive sub-fields of the detail view
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductDetails {
    pub ingredients: String,
    pub benefit: String,
    pub origin: String,
    pub fact: String,
}

/// Full single-entry representation of a catalog entry
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub short_id: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub unit: String,
    /// Formatted energy per serving, e.g. "120 kcal"
    pub calories: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<ProductMedia>,
    pub details: ProductDetails,
    /// "In Stock" when stock > 0, otherwise "Out of Stock"
    pub stock_status: String,
    pub updated_at: DateTime<Utc>,
}

impl ProductDetail {
    pub fn project(product: &Product, lang: &str) -> Self {
        Self {
            short_id: product.short_id.clone(),
            category: product.category,
            tags: product.tags.clone(),
            title: product.title.resolve(lang).to_string(),
            description: product.description.resolve(lang).to_string(),
            price: product.logistics.grand_total,
            unit: unit_label(product.logistics.u_key, lang).to_string(),
            calories: format!("{} kcal", product.logistics.calories),
            media: product.media.clone(),
            details: ProductDetails {
                ingredients: localization::resolve(product.ingredients.as_ref(), lang).to_string(),
                benefit: localization::resolve(product.health_benefit.as_ref(), lang).to_string(),
                origin: localization::resolve(product.origin.as_ref(), lang).to_string(),
                fact: localization::resolve(product.fun_fact.as_ref(), lang).to_string(),
            },
            stock_status: if product.logistics.stock > 0 {
                "In Stock".to_string()
            } else {
                "Out of Stock".to_string()
            },
            updated_at: product.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateProduct, Logistics};
    use localization::LocalizedText;

    fn product() -> Product {
        Product::new(CreateProduct {
            short_id: None,
            position: 3,
            category: Category::Tea,
            tags: vec!["hot".to_string()],
            title: LocalizedText::from_pairs([("en", "Hot Milk Tea"), ("bn", "গরম দুধ চা")]),
            description: LocalizedText::from_pairs([("en", "Classic milk tea")]),
            ingredients: Some(LocalizedText::from_pairs([("en", "Tea, milk, sugar")])),
            health_benefit: None,
            origin: Some(LocalizedText::from_pairs([("en", "Sylhet"), ("bn", "সিলেট")])),
            fun_fact: None,
            logistics: Logistics {
                stock: 5,
                is_available: true,
                grand_total: 30.0,
                u_key: UnitKey::C,
                calories: 120,
            },
            media: Some(ProductMedia {
                thumbnail: "https://cdn.example.com/thumb.webp".to_string(),
                gallery: vec!["https://cdn.example.com/1.webp".to_string()],
            }),
        })
    }

    #[test]
    fn card_resolves_title_and_unit() {
        let card = ProductCard::project(&product(), "bn");
        assert_eq!(card.title, "গরম দুধ চা");
        assert_eq!(card.unit, "কাপ");
        assert_eq!(card.price, 30.0);
        assert_eq!(card.thumbnail, "https://cdn.example.com/thumb.webp");
    }

    #[test]
    fn card_falls_back_to_english() {
        let card = ProductCard::project(&product(), "fr");
        assert_eq!(card.title, "Hot Milk Tea");
        assert_eq!(card.unit, "Cup");
    }

    #[test]
    fn card_without_media_has_empty_thumbnail() {
        let mut entry = product();
        entry.media = None;
        let card = ProductCard::project(&entry, "en");
        assert_eq!(card.thumbnail, "");
    }

    #[test]
    fn card_carries_no_description_or_details() {
        // The card is the compact shape; description and the details block
        // belong to the detail view only.
        let card = ProductCard::project(&product(), "en");
        let json = serde_json::to_value(&card).unwrap();
        assert!(json.get("description").is_none());
        assert!(json.get("details").is_none());
        assert!(json.get("stockStatus").is_none());
    }

    #[test]
    fn detail_formats_calories_and_stock() {
        let detail = ProductDetail::project(&product(), "en");
        assert_eq!(detail.calories, "120 kcal");
        assert_eq!(detail.stock_status, "In Stock");
        assert_eq!(detail.description, "Classic milk tea");
    }

    #[test]
    fn detail_out_of_stock_at_zero() {
        let mut entry = product();
        entry.logistics.stock = 0;
        let detail = ProductDetail::project(&entry, "en");
        assert_eq!(detail.stock_status, "Out of Stock");
    }

    #[test]
    fn detail_resolves_optional_fields_to_empty_strings() {
        let detail = ProductDetail::project(&product(), "en");
        assert_eq!(detail.details.ingredients, "Tea, milk, sugar");
        // Absent fields degrade silently
        assert_eq!(detail.details.benefit, "");
        assert_eq!(detail.details.fact, "");
    }

    #[test]
    fn detail_resolves_localized_sub_fields() {
        let detail = ProductDetail::project(&product(), "bn");
        assert_eq!(detail.details.origin, "সিলেট");
        // No Bengali ingredients: English fallback
        assert_eq!(detail.details.ingredients, "Tea, milk, sugar");
    }

    #[test]
    fn glass_unit_for_non_cup_keys() {
        let mut entry = product();
        entry.logistics.u_key = UnitKey::G;
        assert_eq!(ProductCard::project(&entry, "en").unit, "Glass");
        assert_eq!(ProductCard::project(&entry, "bn").unit, "গ্লাস");
    }
}
