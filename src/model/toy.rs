use chrono::{DateTime, Utc};

/// Validated user-settable fields of a toy.
///
/// Produced by the request body codec; `id` and `created` are never client
/// supplied. POST inserts a new row from these fields, PUT replaces every
/// field of an existing row with them.
#[derive(Debug, Clone, PartialEq)]
pub struct ToyWriteParams {
    pub name: String,
    pub description: String,
    pub release_date: DateTime<Utc>,
    pub toy_category: String,
    pub was_included_in_home: bool,
}
