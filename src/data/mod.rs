//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! resource in the API. Repositories use SeaORM entity models internally and return
//! enriched models from the model layer so the service layer never deals with raw joins.
//! All database queries, inserts, updates, and deletes are performed through these
//! repositories.

pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod pilot;
pub mod toy;
pub mod user;

#[cfg(test)]
mod test;
