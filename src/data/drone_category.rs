use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::collections::HashMap;

use crate::model::{
    drone_category::{CategoryListFilter, CategoryWithDrones, CategoryWriteParams},
    page::{Page, PageRequest},
};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of categories with the ids of their drones, applying
    /// exact-name filtering, prefix search, and client ordering.
    pub async fn get_page(
        &self,
        page: PageRequest,
        filter: &CategoryListFilter,
    ) -> Result<Page<CategoryWithDrones>, DbErr> {
        let mut query = entity::prelude::DroneCategory::find();

        if let Some(ref name) = filter.name {
            query = query.filter(entity::drone_category::Column::Name.eq(name));
        }
        if let Some(ref search) = filter.search {
            query = query.filter(entity::drone_category::Column::Name.starts_with(search));
        }

        query = apply_ordering(query, filter.ordering.as_deref());

        let count = query.clone().count(self.db).await?;
        let categories = query
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        let mut drone_ids = self.drone_ids_by_category(&categories).await?;
        let items = categories
            .into_iter()
            .map(|category| CategoryWithDrones {
                drone_ids: drone_ids.remove(&category.id).unwrap_or_default(),
                category,
            })
            .collect();

        Ok(Page {
            count,
            limit: page.limit,
            offset: page.offset,
            items,
        })
    }

    /// Gets a category by ID with the ids of its drones
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CategoryWithDrones>, DbErr> {
        let Some(category) = entity::prelude::DroneCategory::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut drone_ids = self
            .drone_ids_by_category(std::slice::from_ref(&category))
            .await?;

        Ok(Some(CategoryWithDrones {
            drone_ids: drone_ids.remove(&category.id).unwrap_or_default(),
            category,
        }))
    }

    /// Gets a category by its unique name
    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::drone_category::Model>, DbErr> {
        entity::prelude::DroneCategory::find()
            .filter(entity::drone_category::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Creates a new category
    pub async fn create(
        &self,
        params: CategoryWriteParams,
    ) -> Result<entity::drone_category::Model, DbErr> {
        entity::drone_category::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Replaces the name of an existing category
    pub async fn update(
        &self,
        category: entity::drone_category::Model,
        params: CategoryWriteParams,
    ) -> Result<entity::drone_category::Model, DbErr> {
        let mut active_model: entity::drone_category::ActiveModel = category.into();
        active_model.name = ActiveValue::Set(params.name);

        active_model.update(self.db).await
    }

    /// Deletes a category, reporting whether a row was actually removed.
    /// Drones assigned to the category are removed by the cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::DroneCategory::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Fetches the drone ids for a batch of categories in one query
    async fn drone_ids_by_category(
        &self,
        categories: &[entity::drone_category::Model],
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        let category_ids: Vec<i32> = categories.iter().map(|category| category.id).collect();
        let mut drone_ids: HashMap<i32, Vec<i32>> = HashMap::new();

        if !category_ids.is_empty() {
            let drones = entity::prelude::Drone::find()
                .filter(entity::drone::Column::DroneCategoryId.is_in(category_ids))
                .order_by_asc(entity::drone::Column::Id)
                .all(self.db)
                .await?;

            for drone in drones {
                drone_ids
                    .entry(drone.drone_category_id)
                    .or_default()
                    .push(drone.id);
            }
        }

        Ok(drone_ids)
    }
}

fn apply_ordering(
    query: Select<entity::prelude::DroneCategory>,
    ordering: Option<&str>,
) -> Select<entity::prelude::DroneCategory> {
    // Unknown ordering fields are ignored and the default order applies.
    match ordering {
        Some("name") => query.order_by_asc(entity::drone_category::Column::Name),
        Some("-name") => query.order_by_desc(entity::drone_category::Column::Name),
        Some("id") => query.order_by_asc(entity::drone_category::Column::Id),
        Some("-id") => query.order_by_desc(entity::drone_category::Column::Id),
        _ => query.order_by_asc(entity::drone_category::Column::Name),
    }
}
