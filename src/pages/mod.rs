//! Pages
//!
//! One component per route.

mod home;
mod gallery;
mod documents;
mod testimonials;
mod team;
mod admin_gallery;

pub use home::HomePage;
pub use gallery::GalleryPage;
pub use documents::DocumentsPage;
pub use testimonials::TestimonialsPage;
pub use team::TeamPage;
pub use admin_gallery::AdminGalleryPage;
