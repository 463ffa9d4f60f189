use super::*;

/// Tests that a pilot's competitions come nested with full drone detail,
/// ordered by distance descending.
///
/// Expected: Ok with nested competitions, longest distance first
#[tokio::test]
async fn nests_competitions_by_descending_distance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::pilot::create_pilot(db).await?;
    let category = factory::drone_category::create_category(db).await?;
    let drone = factory::drone::create_drone(db, category.id).await?;

    let short = factory::competition::CompetitionFactory::new(db, pilot.id, drone.id)
        .distance_in_feet(800)
        .build()
        .await?;
    let long = factory::competition::CompetitionFactory::new(db, pilot.id, drone.id)
        .distance_in_feet(2800)
        .build()
        .await?;

    let found = PilotRepository::new(db).get_by_id(pilot.id).await?.unwrap();

    assert_eq!(found.competitions.len(), 2);
    assert_eq!(found.competitions[0].competition.id, long.id);
    assert_eq!(found.competitions[1].competition.id, short.id);
    assert_eq!(found.competitions[0].drone.drone.id, drone.id);
    assert_eq!(found.competitions[0].drone.category_name, category.name);
    Ok(())
}

/// Tests a pilot who has not flown any competition.
///
/// Expected: Ok with an empty nested list
#[tokio::test]
async fn pilot_without_competitions_has_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::pilot::create_pilot(db).await?;

    let found = PilotRepository::new(db).get_by_id(pilot.id).await?.unwrap();

    assert!(found.competitions.is_empty());
    Ok(())
}
