use chrono::{DateTime, Utc};

/// A drone together with the name of its category, which the wire
/// representation uses in place of the foreign key.
#[derive(Debug, Clone)]
pub struct DroneWithCategory {
    pub drone: entity::drone::Model,
    pub category_name: String,
}

/// Validated user-settable fields of a drone.
///
/// `drone_category` carries the category *name*; the service resolves it to a
/// row and rejects unknown names as a validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct DroneWriteParams {
    pub name: String,
    pub drone_category: String,
    pub manufacturing_date: DateTime<Utc>,
    pub has_it_competed: bool,
}

/// Filters applied to the drone list.
#[derive(Debug, Clone, Default)]
pub struct DroneListFilter {
    pub name: Option<String>,
    pub drone_category: Option<String>,
    pub has_it_competed: Option<bool>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}
