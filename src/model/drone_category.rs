/// A drone category together with the ids of the drones assigned to it,
/// which the wire representation renders as `/drones/{id}` links.
#[derive(Debug, Clone)]
pub struct CategoryWithDrones {
    pub category: entity::drone_category::Model,
    pub drone_ids: Vec<i32>,
}

/// Validated user-settable fields of a drone category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryWriteParams {
    pub name: String,
}

/// Filters applied to the drone category list.
#[derive(Debug, Clone, Default)]
pub struct CategoryListFilter {
    pub name: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}
