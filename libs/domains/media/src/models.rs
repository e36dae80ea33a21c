use chrono::{DateTime, Utc};
use media_store::StoredObject;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// What a stored asset is used for.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MediaPurpose {
    /// Site-wide alerts/news
    Announcement,
    /// Favicons, SEO images
    Metadata,
    /// Business logos
    Logo,
    /// Hero/home page sliders
    Banner,
    /// Photos of tools/machinery
    Equipment,
    /// Food and drink images
    MenuItem,
    /// User/staff avatars
    Profile,
    /// Chat/support attachments
    Message,
    /// Internal warehouse stock photos
    Inventory,
    /// HR/staff documentation
    Employee,
    /// Delivery proof/receipts
    Order,
    /// General store products
    Product,
    /// Iconography for menu categories
    Category,
    /// Images from customer reviews
    Feedback,
    /// Licenses or certifications
    Legal,
    #[default]
    General,
}

/// Media record - metadata for an asset held by the object-storage backend
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Original file name (or a derived name for remote uploads)
    pub name: String,
    /// Public HTTPS URL
    pub url: String,
    /// Backend identifier, unique, required for deletion
    pub public_id: String,
    /// File format as reported by the backend
    pub format: String,
    /// Backend resource class ("image", "video", "raw")
    pub resource_type: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    /// width / height, 0 when the height is 0
    #[serde(default)]
    pub aspect_ratio: f64,
    #[serde(default)]
    pub bytes: u64,
    #[serde(default)]
    pub purpose: MediaPurpose,
    /// Back-reference to the owning entity (e.g. a product shortId).
    /// Lookup key only; nothing cascades through it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Media {
    /// Build a record from a completed upload.
    pub fn from_stored(
        object: StoredObject,
        name: String,
        purpose: MediaPurpose,
        ref_id: Option<String>,
    ) -> Self {
        let now = Utc::now();
        let aspect_ratio = if object.height > 0 {
            f64::from(object.width) / f64::from(object.height)
        } else {
            0.0
        };
        Self {
            id: Uuid::now_v7(),
            name,
            url: object.url,
            public_id: object.public_id,
            format: object.format,
            resource_type: object.resource_type,
            width: object.width,
            height: object.height,
            aspect_ratio,
            bytes: object.bytes,
            purpose,
            ref_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// DTO for registering a remote asset by URL
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoteUpload {
    /// Source URL (or data URI) the backend should fetch
    #[validate(length(min = 1))]
    pub url: String,
    /// Optional display name; derived from the public id when absent
    pub name: Option<String>,
    #[serde(default)]
    pub purpose: MediaPurpose,
    /// Optional back-reference to the owning entity
    pub ref_id: Option<String>,
}

/// Query filter for listing media records
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct MediaFilter {
    /// Filter by purpose
    pub purpose: Option<MediaPurpose>,
}

/// Count response, optionally narrowed by purpose
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MediaCount {
    pub count: u64,
    /// The purpose that was counted, or "all"
    pub purpose: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(width: u32, height: u32) -> StoredObject {
        StoredObject {
            url: "https://cdn.example.com/x.webp".to_string(),
            public_id: "menu-item-abc123".to_string(),
            format: "webp".to_string(),
            resource_type: "image".to_string(),
            width,
            height,
            bytes: 1024,
        }
    }

    #[test]
    fn from_stored_derives_aspect_ratio() {
        let media = Media::from_stored(stored(1600, 900), "x.webp".to_string(), MediaPurpose::Banner, None);
        assert!((media.aspect_ratio - 16.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn from_stored_zero_height_yields_zero_ratio() {
        let media = Media::from_stored(stored(0, 0), "doc.pdf".to_string(), MediaPurpose::Legal, None);
        assert_eq!(media.aspect_ratio, 0.0);
    }

    #[test]
    fn purpose_round_trips_kebab_case() {
        let json = serde_json::to_string(&MediaPurpose::MenuItem).unwrap();
        assert_eq!(json, "\"menu-item\"");
        let parsed: MediaPurpose = "menu-item".parse().unwrap();
        assert_eq!(parsed, MediaPurpose::MenuItem);
    }

    #[test]
    fn purpose_defaults_to_general() {
        assert_eq!(MediaPurpose::default(), MediaPurpose::General);
    }
}
