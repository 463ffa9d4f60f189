use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::collections::HashMap;

use crate::model::{
    drone::DroneWithCategory,
    page::{Page, PageRequest},
    pilot::{CompetitionWithDrone, PilotListFilter, PilotWithCompetitions, PilotWriteParams},
};

pub struct PilotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PilotRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of pilots with their competitions nested, applying the
    /// list filters, prefix search, and client ordering.
    pub async fn get_page(
        &self,
        page: PageRequest,
        filter: &PilotListFilter,
    ) -> Result<Page<PilotWithCompetitions>, DbErr> {
        let mut query = entity::prelude::Pilot::find();

        if let Some(ref name) = filter.name {
            query = query.filter(entity::pilot::Column::Name.eq(name));
        }
        if let Some(ref gender) = filter.gender {
            query = query.filter(entity::pilot::Column::Gender.eq(gender));
        }
        if let Some(races_count) = filter.races_count {
            query = query.filter(entity::pilot::Column::RacesCount.eq(races_count));
        }
        if let Some(ref search) = filter.search {
            query = query.filter(entity::pilot::Column::Name.starts_with(search));
        }

        query = apply_ordering(query, filter.ordering.as_deref());

        let count = query.clone().count(self.db).await?;
        let pilots = query
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        let mut competitions = self.competitions_by_pilot(&pilots).await?;
        let items = pilots
            .into_iter()
            .map(|pilot| PilotWithCompetitions {
                competitions: competitions.remove(&pilot.id).unwrap_or_default(),
                pilot,
            })
            .collect();

        Ok(Page {
            count,
            limit: page.limit,
            offset: page.offset,
            items,
        })
    }

    /// Gets a pilot by ID with their competitions nested
    pub async fn get_by_id(&self, id: i32) -> Result<Option<PilotWithCompetitions>, DbErr> {
        let Some(pilot) = entity::prelude::Pilot::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut competitions = self
            .competitions_by_pilot(std::slice::from_ref(&pilot))
            .await?;

        Ok(Some(PilotWithCompetitions {
            competitions: competitions.remove(&pilot.id).unwrap_or_default(),
            pilot,
        }))
    }

    /// Gets a pilot by their unique name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::pilot::Model>, DbErr> {
        entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Creates a new pilot, stamping the insertion time server-side
    pub async fn create(&self, params: PilotWriteParams) -> Result<entity::pilot::Model, DbErr> {
        entity::pilot::ActiveModel {
            name: ActiveValue::Set(params.name),
            gender: ActiveValue::Set(params.gender.code().to_string()),
            races_count: ActiveValue::Set(params.races_count),
            inserted_timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Replaces every user-settable field of an existing pilot. The insertion
    /// timestamp is preserved.
    pub async fn update(
        &self,
        pilot: entity::pilot::Model,
        params: PilotWriteParams,
    ) -> Result<entity::pilot::Model, DbErr> {
        let mut active_model: entity::pilot::ActiveModel = pilot.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.gender = ActiveValue::Set(params.gender.code().to_string());
        active_model.races_count = ActiveValue::Set(params.races_count);

        active_model.update(self.db).await
    }

    /// Deletes a pilot, reporting whether a row was actually removed. The
    /// pilot's competitions are removed by the cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Pilot::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Fetches the competitions (with drone and category detail) for a batch
    /// of pilots, grouped by pilot and ordered by distance descending.
    async fn competitions_by_pilot(
        &self,
        pilots: &[entity::pilot::Model],
    ) -> Result<HashMap<i32, Vec<CompetitionWithDrone>>, DbErr> {
        let pilot_ids: Vec<i32> = pilots.iter().map(|pilot| pilot.id).collect();
        let mut by_pilot: HashMap<i32, Vec<CompetitionWithDrone>> = HashMap::new();

        if pilot_ids.is_empty() {
            return Ok(by_pilot);
        }

        let competitions = entity::prelude::Competition::find()
            .find_also_related(entity::prelude::Drone)
            .filter(entity::competition::Column::PilotId.is_in(pilot_ids))
            .order_by_desc(entity::competition::Column::DistanceInFeet)
            .all(self.db)
            .await?;

        // Fetch all category names in one query
        let category_ids: Vec<i32> = competitions
            .iter()
            .filter_map(|(_, drone)| drone.as_ref().map(|drone| drone.drone_category_id))
            .collect();
        let category_names: HashMap<i32, String> = if !category_ids.is_empty() {
            entity::prelude::DroneCategory::find()
                .filter(entity::drone_category::Column::Id.is_in(category_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|category| (category.id, category.name))
                .collect()
        } else {
            HashMap::new()
        };

        for (competition, drone) in competitions {
            let Some(drone) = drone else {
                continue;
            };

            let category_name = category_names
                .get(&drone.drone_category_id)
                .cloned()
                .unwrap_or_default();

            by_pilot
                .entry(competition.pilot_id)
                .or_default()
                .push(CompetitionWithDrone {
                    competition,
                    drone: DroneWithCategory {
                        drone,
                        category_name,
                    },
                });
        }

        Ok(by_pilot)
    }
}

fn apply_ordering(
    query: Select<entity::prelude::Pilot>,
    ordering: Option<&str>,
) -> Select<entity::prelude::Pilot> {
    // Unknown ordering fields are ignored and the default order applies.
    match ordering {
        Some("name") => query.order_by_asc(entity::pilot::Column::Name),
        Some("-name") => query.order_by_desc(entity::pilot::Column::Name),
        Some("races_count") => query.order_by_asc(entity::pilot::Column::RacesCount),
        Some("-races_count") => query.order_by_desc(entity::pilot::Column::RacesCount),
        Some("inserted_timestamp") => {
            query.order_by_asc(entity::pilot::Column::InsertedTimestamp)
        }
        Some("-inserted_timestamp") => {
            query.order_by_desc(entity::pilot::Column::InsertedTimestamp)
        }
        _ => query.order_by_asc(entity::pilot::Column::Name),
    }
}
