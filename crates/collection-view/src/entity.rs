//! Listable Item Trait
//!
//! The contract every fetched record must meet to be grouped, filtered and
//! shown in a lightbox.

use std::fmt::Debug;
use std::hash::Hash;

/// A record in a fetched content list
pub trait Listable {
    /// The type of the record's identifier
    type Id: Clone + Eq + Hash + Debug;

    /// Returns the record's identifier
    fn id(&self) -> Self::Id;

    /// Display name of the category the record belongs to
    fn category(&self) -> &str;

    /// Whether the record is promoted to the featured strip
    fn is_featured(&self) -> bool {
        false
    }
}

impl<T: Listable> Listable for &T {
    type Id = T::Id;

    fn id(&self) -> Self::Id {
        (**self).id()
    }

    fn category(&self) -> &str {
        (**self).category()
    }

    fn is_featured(&self) -> bool {
        (**self).is_featured()
    }
}
