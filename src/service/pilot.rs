use sea_orm::DatabaseConnection;

use crate::{
    data::pilot::PilotRepository,
    error::{validation::FieldErrors, AppError},
    model::{
        page::{Page, PageRequest},
        pilot::{PilotListFilter, PilotWithCompetitions, PilotWriteParams},
    },
    service::MUST_BE_UNIQUE,
};

pub struct PilotService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PilotService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of pilots with the list filters applied
    pub async fn get_page(
        &self,
        page: PageRequest,
        filter: &PilotListFilter,
    ) -> Result<Page<PilotWithCompetitions>, AppError> {
        Ok(PilotRepository::new(self.db).get_page(page, filter).await?)
    }

    /// Gets a pilot by ID with their competitions nested
    pub async fn get_by_id(&self, id: i32) -> Result<Option<PilotWithCompetitions>, AppError> {
        Ok(PilotRepository::new(self.db).get_by_id(id).await?)
    }

    /// Creates a new pilot, rejecting a name already in use
    pub async fn create(&self, params: PilotWriteParams) -> Result<PilotWithCompetitions, AppError> {
        let repo = PilotRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(FieldErrors::single("name", MUST_BE_UNIQUE).into());
        }

        let pilot = repo.create(params).await?;

        Ok(PilotWithCompetitions {
            pilot,
            competitions: Vec::new(),
        })
    }

    /// Replaces every user-settable field of an existing pilot, rejecting a
    /// name already used by a different pilot.
    pub async fn overwrite(
        &self,
        pilot: entity::pilot::Model,
        params: PilotWriteParams,
    ) -> Result<PilotWithCompetitions, AppError> {
        let repo = PilotRepository::new(self.db);

        if let Some(existing) = repo.find_by_name(&params.name).await? {
            if existing.id != pilot.id {
                return Err(FieldErrors::single("name", MUST_BE_UNIQUE).into());
            }
        }

        let updated = repo.update(pilot, params).await?;

        repo.get_by_id(updated.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Pilot vanished after update".to_string()))
    }

    /// Deletes a pilot and their competitions, reporting whether they existed
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(PilotRepository::new(self.db).delete(id).await?)
    }
}
