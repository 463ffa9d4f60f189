//! Domain models and operation parameter types.
//!
//! Write parameter structs are the validated form of request bodies, produced by
//! the DTO layer and consumed by services and repositories. Composite models
//! bundle an entity with the related rows its wire representation needs.

pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod page;
pub mod pilot;
pub mod toy;
