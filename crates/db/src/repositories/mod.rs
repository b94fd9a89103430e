//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod alert_repo;
pub mod reading_repo;

pub use alert_repo::AlertRepo;
pub use reading_repo::ReadingRepo;
