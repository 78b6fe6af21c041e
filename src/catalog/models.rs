//! Data models for art-catalog records.
//!
//! These mirror the record shapes returned by the collection API. Field
//! names are snake_case in Rust and camelCase on the wire.

use serde::{Deserialize, Serialize};

/// Image resource attached to an art piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WebImage {
    /// Locator of a displayable image. Not validated.
    pub url: String,
}

/// An art piece as shown in the gallery listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ArtPiece {
    /// Opaque unique identifier.
    pub id: String,
    /// Catalog-assigned identifier, distinct from `id`.
    pub object_number: String,
    /// Display title.
    pub title: String,
    /// Primary image of the piece.
    pub web_image: WebImage,
}

/// Dating information of an art piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Dating {
    /// Human-readable date or era, e.g. "c. 1665".
    pub presenting_date: String,
}

/// Extended record shown on a detail view.
///
/// Carries every summary field plus plaque text and dating. The summary is
/// flattened so the serialized shape is a single flat object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ArtPieceDetail {
    /// Summary fields shared with `ArtPiece`.
    #[serde(flatten)]
    pub summary: ArtPiece,
    /// Free-text plaque description in English.
    pub plaque_description_english: String,
    /// Dating information.
    pub dating: Dating,
}

impl ArtPieceDetail {
    /// Returns the summary part of this record.
    #[must_use]
    pub fn summary(&self) -> &ArtPiece {
        &self.summary
    }
}

impl From<ArtPieceDetail> for ArtPiece {
    fn from(detail: ArtPieceDetail) -> Self {
        detail.summary
    }
}

/// Envelope of a collection search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResponse {
    /// Total number of matches reported by the catalog, across all pages.
    #[serde(default)]
    pub count: u64,
    /// Art pieces on the requested page, in catalog order.
    #[serde(default)]
    pub art_objects: Vec<ArtPiece>,
}

/// Envelope of a single-object detail response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailResponse {
    /// The requested record.
    pub art_object: ArtPieceDetail,
}

#[cfg(test)]
mod tests {
    use serde_json::{from_str, json, to_value};

    use crate::catalog::models::{
        ArtPiece, ArtPieceDetail, CollectionResponse, Dating, DetailResponse, WebImage,
    };

    fn starry_night() -> ArtPiece {
        ArtPiece {
            id: "1".to_string(),
            object_number: "A.1".to_string(),
            title: "Starry Night".to_string(),
            web_image: WebImage {
                url: "http://x/1.jpg".to_string(),
            },
        }
    }

    #[test]
    fn test_art_piece_uses_camel_case_fields() {
        let piece: ArtPiece = from_str(
            r#"{"id":"1","objectNumber":"A.1","title":"Starry Night","webImage":{"url":"http://x/1.jpg"}}"#,
        )
        .unwrap();

        assert_eq!(piece, starry_night());
        assert_eq!(
            to_value(&piece).unwrap(),
            json!({
                "id": "1",
                "objectNumber": "A.1",
                "title": "Starry Night",
                "webImage": { "url": "http://x/1.jpg" }
            })
        );
    }

    #[test]
    fn test_detail_decodes_from_flat_object() {
        let detail: ArtPieceDetail = from_str(
            r#"{
                "id": "1",
                "objectNumber": "A.1",
                "title": "Starry Night",
                "webImage": {"url": "http://x/1.jpg"},
                "plaqueDescriptionEnglish": "A swirling night sky.",
                "dating": {"presentingDate": "1889"}
            }"#,
        )
        .unwrap();

        assert_eq!(detail.summary(), &starry_night());
        assert_eq!(detail.plaque_description_english, "A swirling night sky.");
        assert_eq!(
            detail.dating,
            Dating {
                presenting_date: "1889".to_string()
            }
        );

        let flat = to_value(&detail).unwrap();
        assert_eq!(flat["objectNumber"], "A.1");
        assert_eq!(flat["dating"]["presentingDate"], "1889");
        assert!(flat.get("summary").is_none());
    }

    #[test]
    fn test_detail_converts_into_summary() {
        let detail = ArtPieceDetail {
            summary: starry_night(),
            plaque_description_english: String::new(),
            dating: Dating::default(),
        };

        assert_eq!(ArtPiece::from(detail), starry_night());
    }

    #[test]
    fn test_collection_response_envelope() {
        let response: CollectionResponse = from_str(
            r#"{"count": 2, "artObjects": [
                {"id":"1","objectNumber":"A.1","title":"Starry Night","webImage":{"url":"http://x/1.jpg"}},
                {"id":"2","objectNumber":"B.2","title":"The Milkmaid","webImage":{"url":""}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(response.count, 2);
        assert_eq!(response.art_objects[0], starry_night());
        assert_eq!(response.art_objects[1].object_number, "B.2");
    }

    #[test]
    fn test_collection_response_missing_fields_default() {
        let response: CollectionResponse = from_str("{}").unwrap();
        assert!(response.art_objects.is_empty());
        assert_eq!(response.count, 0);
    }

    #[test]
    fn test_detail_response_envelope() {
        let response: DetailResponse = from_str(
            r#"{"artObject": {
                "id": "2", "objectNumber": "B.2", "title": "The Milkmaid",
                "webImage": {"url": "http://x/2.jpg"},
                "plaqueDescriptionEnglish": "A maid pours milk.",
                "dating": {"presentingDate": "c. 1660"}
            }}"#,
        )
        .unwrap();

        assert_eq!(response.art_object.summary.title, "The Milkmaid");
        assert_eq!(response.art_object.dating.presenting_date, "c. 1660");
    }

    #[test]
    fn test_missing_web_image_is_rejected() {
        let result = from_str::<ArtPiece>(r#"{"id":"1","objectNumber":"A.1","title":"x"}"#);
        assert!(result.is_err());
    }
}
