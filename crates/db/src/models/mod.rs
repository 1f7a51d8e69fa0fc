//! Domain model structs and insert DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `New*` insert DTO consumed by the get-or-create repositories

pub mod education;
pub mod experience;
pub mod personal_info;
pub mod project;
pub mod skill;
