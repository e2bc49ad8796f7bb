//! Frontend Models
//!
//! Records as the REST backend sends them, and how each one is listed.

use collection_view::Listable;
use serde::{Deserialize, Serialize};

/// Gallery photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub date: String,
    pub url: String,
    #[serde(default)]
    pub featured: bool,
}

/// Downloadable document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(rename = "type", default)]
    pub doc_type: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub publish_date: String,
    #[serde(default)]
    pub downloads: u32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Member success story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub location: String,
    pub category: String,
    #[serde(default)]
    pub rating: u8,
    pub story: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub year: u16,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub featured: bool,
}

/// Team directory entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub category: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub bio: Option<String>,
}

// ========================
// Response Envelopes
// ========================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryResponse {
    pub gallery_items: Vec<GalleryItem>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentsResponse {
    pub documents: Vec<Document>,
}

#[derive(Debug, Deserialize)]
pub struct TestimonialsResponse {
    pub testimonials: Vec<Testimonial>,
}

/// Body for creating a gallery photo from the admin screen
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NewGalleryItem {
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub url: String,
    pub featured: bool,
}

impl NewGalleryItem {
    /// Fields the backend will reject when blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("form.title");
        }
        if self.category.trim().is_empty() {
            missing.push("form.category");
        }
        if self.url.trim().is_empty() {
            missing.push("form.url");
        }
        missing
    }
}

// ========================
// Listing
// ========================

impl Listable for GalleryItem {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}

impl Listable for Document {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}

impl Listable for Testimonial {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}

// Team members are never featured
impl Listable for TeamMember {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn category(&self) -> &str {
        &self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_envelope() {
        let body = r#"{"galleryItems":[
            {"id":1,"title":"AGM 2024","description":"Annual meeting","category":"Events","date":"2024-05-01","url":"/img/agm.jpg","featured":true},
            {"id":2,"title":"Workshop","category":"Training","url":"/img/ws.jpg"}
        ]}"#;
        let response: GalleryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.gallery_items.len(), 2);
        assert!(response.gallery_items[0].is_featured());
        assert!(!response.gallery_items[1].featured);
        assert_eq!(response.gallery_items[1].description, "");
    }

    #[test]
    fn test_document_field_names() {
        let body = r#"{"documents":[{"id":9,"title":"Bylaws","description":"","category":"Governance",
            "type":"PDF","size":"1.2 MB","pages":14,"publishDate":"2023-11-02","downloads":311,
            "featured":false,"imageUrl":"/img/bylaws.png"}]}"#;
        let response: DocumentsResponse = serde_json::from_str(body).unwrap();
        let doc = &response.documents[0];
        assert_eq!(doc.doc_type, "PDF");
        assert_eq!(doc.publish_date, "2023-11-02");
        assert_eq!(doc.image_url.as_deref(), Some("/img/bylaws.png"));
        assert_eq!(doc.pages, 14);
    }

    #[test]
    fn test_testimonial_and_team() {
        let body = r#"{"testimonials":[{"id":3,"name":"Ana","location":"Lima","category":"Youth",
            "rating":5,"story":"Joined in 2019","impact":"Mentors 12 students","year":2022,
            "image":"/img/ana.jpg","featured":true}]}"#;
        let response: TestimonialsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.testimonials[0].rating, 5);
        assert_eq!(response.testimonials[0].category(), "Youth");

        let team: Vec<TeamMember> = serde_json::from_str(
            r#"[{"id":1,"name":"Sam","position":"Director","category":"Board","photo":"/img/sam.jpg"}]"#,
        )
        .unwrap();
        assert_eq!(team[0].bio, None);
        assert!(!team[0].is_featured());
    }

    #[test]
    fn test_new_gallery_item_missing_fields() {
        let item = NewGalleryItem {
            title: "Picnic".into(),
            category: "  ".into(),
            ..Default::default()
        };
        assert_eq!(item.missing_fields(), vec!["form.category", "form.url"]);
    }
}
