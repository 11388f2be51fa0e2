//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&SqlitePool` as the first argument. Ordered collections implement
//! [`position::PositionedTable`] and delegate move/delete bookkeeping to the
//! shared protocol in [`position`].

pub mod banner_repo;
pub mod class_repo;
pub mod faq_repo;
pub mod gallery_image_repo;
pub mod position;
pub mod review_repo;
pub mod user_repo;

pub use banner_repo::BannerRepo;
pub use class_repo::ClassRepo;
pub use faq_repo::FaqRepo;
pub use gallery_image_repo::GalleryImageRepo;
pub use position::PositionedTable;
pub use review_repo::ReviewRepo;
pub use user_repo::UserRepo;
