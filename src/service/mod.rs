//! Business logic layer between the HTTP controllers and the repositories.
//!
//! Services own the cross-entity rules: resolving name references to rows,
//! enforcing uniqueness ahead of the database, and shaping repository results
//! into the enriched models the wire layer renders. Controllers stay thin and
//! repositories stay single-entity.

pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod pilot;
pub mod token;
pub mod toy;

/// Error message for a unique field that already holds the submitted value.
pub const MUST_BE_UNIQUE: &str = "This field must be unique.";

/// Error message for a name reference that resolves to no row.
pub fn does_not_exist(name: &str) -> String {
    format!("Object with name={} does not exist.", name)
}
