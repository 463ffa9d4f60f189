use sea_orm::DatabaseConnection;

use crate::{
    data::{drone::DroneRepository, drone_category::CategoryRepository},
    error::{validation::FieldErrors, AppError},
    model::{
        drone::{DroneListFilter, DroneWithCategory, DroneWriteParams},
        page::{Page, PageRequest},
    },
    service::{does_not_exist, MUST_BE_UNIQUE},
};

pub struct DroneService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DroneService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of drones with the list filters applied
    pub async fn get_page(
        &self,
        page: PageRequest,
        filter: &DroneListFilter,
    ) -> Result<Page<DroneWithCategory>, AppError> {
        Ok(DroneRepository::new(self.db).get_page(page, filter).await?)
    }

    /// Gets a drone by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<DroneWithCategory>, AppError> {
        Ok(DroneRepository::new(self.db).get_by_id(id).await?)
    }

    /// Creates a new drone owned by the authenticated user. The category is
    /// referenced by name; an unknown name or a duplicate drone name is a
    /// validation error.
    pub async fn create(
        &self,
        params: DroneWriteParams,
        owner_id: Option<i32>,
    ) -> Result<DroneWithCategory, AppError> {
        let repo = DroneRepository::new(self.db);

        let category = self.resolve_category(&params).await?;

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(FieldErrors::single("name", MUST_BE_UNIQUE).into());
        }

        let drone = repo.create(params, category.id, owner_id).await?;

        Ok(DroneWithCategory {
            drone,
            category_name: category.name,
        })
    }

    /// Replaces every user-settable field of an existing drone
    pub async fn overwrite(
        &self,
        drone: entity::drone::Model,
        params: DroneWriteParams,
    ) -> Result<DroneWithCategory, AppError> {
        let repo = DroneRepository::new(self.db);

        let category = self.resolve_category(&params).await?;

        if let Some(existing) = repo.find_by_name(&params.name).await? {
            if existing.id != drone.id {
                return Err(FieldErrors::single("name", MUST_BE_UNIQUE).into());
            }
        }

        let updated = repo.update(drone, params, category.id).await?;

        Ok(DroneWithCategory {
            drone: updated,
            category_name: category.name,
        })
    }

    /// Deletes a drone, reporting whether it existed
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(DroneRepository::new(self.db).delete(id).await?)
    }

    async fn resolve_category(
        &self,
        params: &DroneWriteParams,
    ) -> Result<entity::drone_category::Model, AppError> {
        CategoryRepository::new(self.db)
            .find_by_name(&params.drone_category)
            .await?
            .ok_or_else(|| {
                FieldErrors::single("drone_category", does_not_exist(&params.drone_category))
                    .into()
            })
    }
}
