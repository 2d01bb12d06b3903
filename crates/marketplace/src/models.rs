//! Response models for the marketplace API.
//!
//! The API returns the wish and offer collections as ordered arrays with the
//! newest record first. Matches are computed server-side and embedded in each
//! record: a wish carries the offers it matched, an offer carries the wishes.
//! Embedded records omit their own nested match lists, which is why those
//! fields default to empty on deserialization.

use serde::{Deserialize, Serialize};

/// Numeric identifier assigned to a record by the marketplace API.
pub type ListingId = i64;

/// A buyer-side request record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WishRecord {
    pub id: ListingId,

    pub title: String,

    /// Category label, when the author picked one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Offers the server matched against this wish, best match first.
    #[serde(default)]
    pub matched_offers: Vec<OfferRecord>,

    /// Server-computed match score (0-100). Absent until the server has
    /// scored the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_percentage: Option<f64>,
}

/// A seller-side listing record, symmetric to [`WishRecord`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OfferRecord {
    pub id: ListingId,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Wishes the server matched against this offer, best match first.
    #[serde(default)]
    pub matched_wishes: Vec<WishRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_percentage: Option<f64>,
}

impl WishRecord {
    /// Create a wish with no category, matches, or score.
    pub fn new(id: ListingId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            category: None,
            matched_offers: Vec::new(),
            match_percentage: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_matched_offer(mut self, offer: OfferRecord) -> Self {
        self.matched_offers.push(offer);
        self
    }

    pub fn with_match_percentage(mut self, percentage: f64) -> Self {
        self.match_percentage = Some(percentage);
        self
    }
}

impl OfferRecord {
    /// Create an offer with no category, matches, or score.
    pub fn new(id: ListingId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            category: None,
            matched_wishes: Vec::new(),
            match_percentage: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_matched_wish(mut self, wish: WishRecord) -> Self {
        self.matched_wishes.push(wish);
        self
    }

    pub fn with_match_percentage(mut self, percentage: f64) -> Self {
        self.match_percentage = Some(percentage);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wish_with_embedded_match() {
        let json = r#"{
            "id": 1,
            "title": "Vintage road bike",
            "category": "sports",
            "matched_offers": [
                { "id": 9, "title": "Road bike, 1982 frame", "match_percentage": 91.5 }
            ],
            "match_percentage": 91.5
        }"#;

        let wish: WishRecord = serde_json::from_str(json).unwrap();
        assert_eq!(wish.id, 1);
        assert_eq!(wish.category.as_deref(), Some("sports"));
        assert_eq!(wish.matched_offers.len(), 1);
        assert_eq!(wish.matched_offers[0].id, 9);
        // Embedded records omit their own nested lists
        assert!(wish.matched_offers[0].matched_wishes.is_empty());
        assert_eq!(wish.match_percentage, Some(91.5));
    }

    #[test]
    fn test_parse_wish_with_absent_fields() {
        let json = r#"{ "id": 4, "title": "Piano lessons" }"#;

        let wish: WishRecord = serde_json::from_str(json).unwrap();
        assert!(wish.category.is_none());
        assert!(wish.matched_offers.is_empty());
        assert!(wish.match_percentage.is_none());
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let offer = OfferRecord::new(9, "Road bike, 1982 frame");
        let json = serde_json::to_string(&offer).unwrap();

        assert!(!json.contains("category"));
        assert!(!json.contains("match_percentage"));
        // The match list is part of the contract even when empty
        assert!(json.contains("\"matched_wishes\":[]"));
    }

    #[test]
    fn test_offer_roundtrip_with_matched_wish() {
        let offer = OfferRecord::new(9, "Road bike, 1982 frame")
            .with_matched_wish(WishRecord::new(1, "Vintage road bike"))
            .with_match_percentage(91.5);

        let json = serde_json::to_string(&offer).unwrap();
        let parsed: OfferRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, offer);
    }
}
