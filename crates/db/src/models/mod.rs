//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts, where the entity is
//!   client-created

pub mod alert;
pub mod reading;

pub use alert::Alert;
pub use reading::{CreateReading, Reading};
