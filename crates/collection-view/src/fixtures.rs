//! Test fixtures shared by the module tests

use crate::entity::Listable;

#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: u32,
    pub category: String,
    pub featured: bool,
}

impl Listable for Photo {
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

pub fn photo(id: u32, category: &str, featured: bool) -> Photo {
    Photo { id, category: category.to_string(), featured }
}

/// Resolver standing in for the translation layer
pub fn label(key: &str) -> String {
    match key {
        "categories.all" => "All".to_string(),
        other => other.to_string(),
    }
}

/// Five gallery photos: two Events, three Training, one featured of each
pub fn events_and_training() -> Vec<Photo> {
    vec![
        photo(1, "Events", true),
        photo(2, "Events", false),
        photo(3, "Training", false),
        photo(4, "Training", true),
        photo(5, "Training", false),
    ]
}
