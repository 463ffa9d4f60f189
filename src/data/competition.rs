use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::collections::HashMap;

use crate::model::{
    competition::{CompetitionListFilter, CompetitionWithNames, CompetitionWriteParams},
    page::{Page, PageRequest},
};

pub struct CompetitionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompetitionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of competitions with pilot and drone names, applying the
    /// exact and range filters and client ordering. Filtering by an unknown
    /// pilot or drone name yields an empty page.
    pub async fn get_page(
        &self,
        page: PageRequest,
        filter: &CompetitionListFilter,
    ) -> Result<Page<CompetitionWithNames>, DbErr> {
        let empty = Page {
            count: 0,
            limit: page.limit,
            offset: page.offset,
            items: Vec::new(),
        };

        let mut query = entity::prelude::Competition::find();

        if let Some(ref pilot_name) = filter.pilot_name {
            let Some(pilot) = entity::prelude::Pilot::find()
                .filter(entity::pilot::Column::Name.eq(pilot_name))
                .one(self.db)
                .await?
            else {
                return Ok(empty);
            };
            query = query.filter(entity::competition::Column::PilotId.eq(pilot.id));
        }
        if let Some(ref drone_name) = filter.drone_name {
            let Some(drone) = entity::prelude::Drone::find()
                .filter(entity::drone::Column::Name.eq(drone_name))
                .one(self.db)
                .await?
            else {
                return Ok(empty);
            };
            query = query.filter(entity::competition::Column::DroneId.eq(drone.id));
        }

        if let Some(distance) = filter.distance_in_feet {
            query = query.filter(entity::competition::Column::DistanceInFeet.eq(distance));
        }
        if let Some(min_distance) = filter.min_distance_in_feet {
            query = query.filter(entity::competition::Column::DistanceInFeet.gte(min_distance));
        }
        if let Some(max_distance) = filter.max_distance_in_feet {
            query = query.filter(entity::competition::Column::DistanceInFeet.lte(max_distance));
        }
        if let Some(from_date) = filter.from_achievement_date {
            query =
                query.filter(entity::competition::Column::DistanceAchievementDate.gte(from_date));
        }
        if let Some(to_date) = filter.to_achievement_date {
            query =
                query.filter(entity::competition::Column::DistanceAchievementDate.lte(to_date));
        }

        query = apply_ordering(query, filter.ordering.as_deref());

        let count = query.clone().count(self.db).await?;
        let competitions = query
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        let items = self.with_names(competitions).await?;

        Ok(Page {
            count,
            limit: page.limit,
            offset: page.offset,
            items,
        })
    }

    /// Gets a competition by ID with pilot and drone names
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CompetitionWithNames>, DbErr> {
        let Some(competition) = entity::prelude::Competition::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_names(vec![competition]).await?.into_iter().next())
    }

    /// Creates a new competition from already-resolved pilot and drone rows
    pub async fn create(
        &self,
        params: &CompetitionWriteParams,
        pilot_id: i32,
        drone_id: i32,
    ) -> Result<entity::competition::Model, DbErr> {
        entity::competition::ActiveModel {
            pilot_id: ActiveValue::Set(pilot_id),
            drone_id: ActiveValue::Set(drone_id),
            distance_in_feet: ActiveValue::Set(params.distance_in_feet),
            distance_achievement_date: ActiveValue::Set(params.distance_achievement_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Replaces every user-settable field of an existing competition
    pub async fn update(
        &self,
        competition: entity::competition::Model,
        params: &CompetitionWriteParams,
        pilot_id: i32,
        drone_id: i32,
    ) -> Result<entity::competition::Model, DbErr> {
        let mut active_model: entity::competition::ActiveModel = competition.into();
        active_model.pilot_id = ActiveValue::Set(pilot_id);
        active_model.drone_id = ActiveValue::Set(drone_id);
        active_model.distance_in_feet = ActiveValue::Set(params.distance_in_feet);
        active_model.distance_achievement_date =
            ActiveValue::Set(params.distance_achievement_date);

        active_model.update(self.db).await
    }

    /// Deletes a competition, reporting whether a row was actually removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Competition::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Enriches a batch of competitions with pilot and drone names, fetching
    /// each side in one query.
    async fn with_names(
        &self,
        competitions: Vec<entity::competition::Model>,
    ) -> Result<Vec<CompetitionWithNames>, DbErr> {
        if competitions.is_empty() {
            return Ok(Vec::new());
        }

        let pilot_ids: Vec<i32> = competitions
            .iter()
            .map(|competition| competition.pilot_id)
            .collect();
        let drone_ids: Vec<i32> = competitions
            .iter()
            .map(|competition| competition.drone_id)
            .collect();

        let pilot_names: HashMap<i32, String> = entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::Id.is_in(pilot_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|pilot| (pilot.id, pilot.name))
            .collect();

        let drone_names: HashMap<i32, String> = entity::prelude::Drone::find()
            .filter(entity::drone::Column::Id.is_in(drone_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|drone| (drone.id, drone.name))
            .collect();

        Ok(competitions
            .into_iter()
            .map(|competition| CompetitionWithNames {
                pilot_name: pilot_names
                    .get(&competition.pilot_id)
                    .cloned()
                    .unwrap_or_default(),
                drone_name: drone_names
                    .get(&competition.drone_id)
                    .cloned()
                    .unwrap_or_default(),
                competition,
            })
            .collect())
    }
}

fn apply_ordering(
    query: Select<entity::prelude::Competition>,
    ordering: Option<&str>,
) -> Select<entity::prelude::Competition> {
    // Unknown ordering fields are ignored and the default order applies:
    // longest distance first.
    match ordering {
        Some("distance_in_feet") => {
            query.order_by_asc(entity::competition::Column::DistanceInFeet)
        }
        Some("distance_achievement_date") => {
            query.order_by_asc(entity::competition::Column::DistanceAchievementDate)
        }
        Some("-distance_achievement_date") => {
            query.order_by_desc(entity::competition::Column::DistanceAchievementDate)
        }
        _ => query.order_by_desc(entity::competition::Column::DistanceInFeet),
    }
}
