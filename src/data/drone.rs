use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SelectTwo,
};

use crate::model::{
    drone::{DroneListFilter, DroneWithCategory, DroneWriteParams},
    page::{Page, PageRequest},
};

pub struct DroneRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DroneRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of drones with their category names, applying the list
    /// filters, prefix search, and client ordering.
    pub async fn get_page(
        &self,
        page: PageRequest,
        filter: &DroneListFilter,
    ) -> Result<Page<DroneWithCategory>, DbErr> {
        let mut query =
            entity::prelude::Drone::find().find_also_related(entity::prelude::DroneCategory);

        if let Some(ref name) = filter.name {
            query = query.filter(entity::drone::Column::Name.eq(name));
        }
        if let Some(ref category_name) = filter.drone_category {
            query = query.filter(entity::drone_category::Column::Name.eq(category_name));
        }
        if let Some(has_it_competed) = filter.has_it_competed {
            query = query.filter(entity::drone::Column::HasItCompeted.eq(has_it_competed));
        }
        if let Some(ref search) = filter.search {
            query = query.filter(entity::drone::Column::Name.starts_with(search));
        }

        query = apply_ordering(query, filter.ordering.as_deref());

        let count = query.clone().count(self.db).await?;
        let items = query
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(with_category)
            .collect();

        Ok(Page {
            count,
            limit: page.limit,
            offset: page.offset,
            items,
        })
    }

    /// Gets a drone by ID with its category name
    pub async fn get_by_id(&self, id: i32) -> Result<Option<DroneWithCategory>, DbErr> {
        let result = entity::prelude::Drone::find_by_id(id)
            .find_also_related(entity::prelude::DroneCategory)
            .one(self.db)
            .await?;

        Ok(result.map(with_category))
    }

    /// Gets a drone by its unique name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::drone::Model>, DbErr> {
        entity::prelude::Drone::find()
            .filter(entity::drone::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Creates a new drone under an already-resolved category, owned by the
    /// authenticated user. The insertion time is stamped server-side.
    pub async fn create(
        &self,
        params: DroneWriteParams,
        category_id: i32,
        owner_id: Option<i32>,
    ) -> Result<entity::drone::Model, DbErr> {
        entity::drone::ActiveModel {
            name: ActiveValue::Set(params.name),
            drone_category_id: ActiveValue::Set(category_id),
            manufacturing_date: ActiveValue::Set(params.manufacturing_date),
            has_it_competed: ActiveValue::Set(params.has_it_competed),
            inserted_timestamp: ActiveValue::Set(Utc::now()),
            owner_id: ActiveValue::Set(owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Replaces every user-settable field of an existing drone. Ownership and
    /// the insertion timestamp are preserved.
    pub async fn update(
        &self,
        drone: entity::drone::Model,
        params: DroneWriteParams,
        category_id: i32,
    ) -> Result<entity::drone::Model, DbErr> {
        let mut active_model: entity::drone::ActiveModel = drone.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.drone_category_id = ActiveValue::Set(category_id);
        active_model.manufacturing_date = ActiveValue::Set(params.manufacturing_date);
        active_model.has_it_competed = ActiveValue::Set(params.has_it_competed);

        active_model.update(self.db).await
    }

    /// Deletes a drone, reporting whether a row was actually removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Drone::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn with_category(
    (drone, category): (
        entity::drone::Model,
        Option<entity::drone_category::Model>,
    ),
) -> DroneWithCategory {
    DroneWithCategory {
        category_name: category.map(|category| category.name).unwrap_or_default(),
        drone,
    }
}

fn apply_ordering(
    query: SelectTwo<entity::prelude::Drone, entity::prelude::DroneCategory>,
    ordering: Option<&str>,
) -> SelectTwo<entity::prelude::Drone, entity::prelude::DroneCategory> {
    // Unknown ordering fields are ignored and the default order applies.
    match ordering {
        Some("name") => query.order_by_asc(entity::drone::Column::Name),
        Some("-name") => query.order_by_desc(entity::drone::Column::Name),
        Some("manufacturing_date") => {
            query.order_by_asc(entity::drone::Column::ManufacturingDate)
        }
        Some("-manufacturing_date") => {
            query.order_by_desc(entity::drone::Column::ManufacturingDate)
        }
        Some("inserted_timestamp") => {
            query.order_by_asc(entity::drone::Column::InsertedTimestamp)
        }
        Some("-inserted_timestamp") => {
            query.order_by_desc(entity::drone::Column::InsertedTimestamp)
        }
        _ => query.order_by_asc(entity::drone::Column::Name),
    }
}
