//! Repository layer for data access.

mod directory;
pub mod entities;
mod notice_repository;
mod property_repository;

pub use directory::{Directory, DirectoryStore};
pub use notice_repository::{NoticeRepository, NoticeStore};
pub use property_repository::{PropertyRepository, PropertyStore};

#[cfg(any(test, feature = "test-utils"))]
pub use directory::MockDirectory;
#[cfg(any(test, feature = "test-utils"))]
pub use notice_repository::MockNoticeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use property_repository::MockPropertyRepository;
