//! Collection View
//!
//! Derived views over a fetched content list:
//! - category tabs with live counts (synthetic "all" first)
//! - the filtered subset for the active category
//! - a bounded featured subset
//! - a lightbox/carousel state machine over the filtered subset
//! - fetch generations so stale or orphaned results are dropped
//!
//! No browser dependency: everything here is plain data and pure functions.

mod entity;
mod category;
mod view;
mod lightbox;
mod load;

#[cfg(test)]
mod fixtures;

pub use entity::Listable;
pub use category::{derive_categories, slugify, Category, ALL_CATEGORY_ID, ALL_LABEL_KEY};
pub use view::{featured_subset, filter_by_category, CollectionView};
pub use lightbox::Lightbox;
pub use load::{FetchGate, FetchTicket, LoadState};
