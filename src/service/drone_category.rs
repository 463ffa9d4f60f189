use sea_orm::DatabaseConnection;

use crate::{
    data::drone_category::CategoryRepository,
    error::{validation::FieldErrors, AppError},
    model::{
        drone_category::{CategoryListFilter, CategoryWithDrones, CategoryWriteParams},
        page::{Page, PageRequest},
    },
    service::MUST_BE_UNIQUE,
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of categories with the list filters applied
    pub async fn get_page(
        &self,
        page: PageRequest,
        filter: &CategoryListFilter,
    ) -> Result<Page<CategoryWithDrones>, AppError> {
        Ok(CategoryRepository::new(self.db)
            .get_page(page, filter)
            .await?)
    }

    /// Gets a category by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CategoryWithDrones>, AppError> {
        Ok(CategoryRepository::new(self.db).get_by_id(id).await?)
    }

    /// Creates a new category, rejecting a name already in use
    pub async fn create(&self, params: CategoryWriteParams) -> Result<CategoryWithDrones, AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(FieldErrors::single("name", MUST_BE_UNIQUE).into());
        }

        let category = repo.create(params).await?;

        Ok(CategoryWithDrones {
            category,
            drone_ids: Vec::new(),
        })
    }

    /// Replaces the name of an existing category, rejecting a name already
    /// used by a different category.
    pub async fn overwrite(
        &self,
        category: entity::drone_category::Model,
        params: CategoryWriteParams,
    ) -> Result<CategoryWithDrones, AppError> {
        let repo = CategoryRepository::new(self.db);

        if let Some(existing) = repo.find_by_name(&params.name).await? {
            if existing.id != category.id {
                return Err(FieldErrors::single("name", MUST_BE_UNIQUE).into());
            }
        }

        let updated = repo.update(category, params).await?;

        repo.get_by_id(updated.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Category vanished after update".to_string()))
    }

    /// Deletes a category and its drones, reporting whether it existed
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(CategoryRepository::new(self.db).delete(id).await?)
    }
}
