use sea_orm::DatabaseConnection;

use crate::{
    data::{competition::CompetitionRepository, drone::DroneRepository, pilot::PilotRepository},
    error::{validation::FieldErrors, AppError},
    model::{
        competition::{CompetitionListFilter, CompetitionWithNames, CompetitionWriteParams},
        page::{Page, PageRequest},
    },
    service::does_not_exist,
};

pub struct CompetitionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompetitionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of competitions with the list filters applied
    pub async fn get_page(
        &self,
        page: PageRequest,
        filter: &CompetitionListFilter,
    ) -> Result<Page<CompetitionWithNames>, AppError> {
        Ok(CompetitionRepository::new(self.db)
            .get_page(page, filter)
            .await?)
    }

    /// Gets a competition by ID with pilot and drone names
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CompetitionWithNames>, AppError> {
        Ok(CompetitionRepository::new(self.db).get_by_id(id).await?)
    }

    /// Creates a new competition. Pilot and drone are referenced by name;
    /// unknown names are validation errors, reported together.
    pub async fn create(
        &self,
        params: CompetitionWriteParams,
    ) -> Result<CompetitionWithNames, AppError> {
        let (pilot, drone) = self.resolve_references(&params).await?;

        let competition = CompetitionRepository::new(self.db)
            .create(&params, pilot.id, drone.id)
            .await?;

        Ok(CompetitionWithNames {
            competition,
            pilot_name: pilot.name,
            drone_name: drone.name,
        })
    }

    /// Replaces every user-settable field of an existing competition
    pub async fn overwrite(
        &self,
        competition: entity::competition::Model,
        params: CompetitionWriteParams,
    ) -> Result<CompetitionWithNames, AppError> {
        let (pilot, drone) = self.resolve_references(&params).await?;

        let updated = CompetitionRepository::new(self.db)
            .update(competition, &params, pilot.id, drone.id)
            .await?;

        Ok(CompetitionWithNames {
            competition: updated,
            pilot_name: pilot.name,
            drone_name: drone.name,
        })
    }

    /// Deletes a competition, reporting whether it existed
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(CompetitionRepository::new(self.db).delete(id).await?)
    }

    /// Resolves the pilot and drone name references, collecting an error per
    /// unknown name so the response reports both at once.
    async fn resolve_references(
        &self,
        params: &CompetitionWriteParams,
    ) -> Result<(entity::pilot::Model, entity::drone::Model), AppError> {
        let pilot = PilotRepository::new(self.db)
            .find_by_name(&params.pilot)
            .await?;
        let drone = DroneRepository::new(self.db)
            .find_by_name(&params.drone)
            .await?;

        let mut errors = FieldErrors::new();
        if pilot.is_none() {
            errors.push("pilot", does_not_exist(&params.pilot));
        }
        if drone.is_none() {
            errors.push("drone", does_not_exist(&params.drone));
        }

        match (pilot, drone) {
            (Some(pilot), Some(drone)) => Ok((pilot, drone)),
            _ => Err(errors.into()),
        }
    }
}
