use super::*;

/// Tests that the default ordering puts the longest distance first.
///
/// Expected: Ok with distances descending
#[tokio::test]
async fn default_order_is_longest_distance_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::pilot::create_pilot(db).await?;
    let category = factory::drone_category::create_category(db).await?;
    let drone = factory::drone::create_drone(db, category.id).await?;

    for distance in [800, 2800, 1200] {
        factory::competition::CompetitionFactory::new(db, pilot.id, drone.id)
            .distance_in_feet(distance)
            .build()
            .await?;
    }

    let page = CompetitionRepository::new(db)
        .get_page(full_page(), &CompetitionListFilter::default())
        .await?;

    let distances: Vec<i32> = page
        .items
        .iter()
        .map(|item| item.competition.distance_in_feet)
        .collect();
    assert_eq!(distances, vec![2800, 1200, 800]);
    Ok(())
}

/// Tests the distance range filters.
///
/// Expected: Ok with only competitions inside the range
#[tokio::test]
async fn filters_by_distance_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::pilot::create_pilot(db).await?;
    let category = factory::drone_category::create_category(db).await?;
    let drone = factory::drone::create_drone(db, category.id).await?;

    for distance in [500, 1500, 3000] {
        factory::competition::CompetitionFactory::new(db, pilot.id, drone.id)
            .distance_in_feet(distance)
            .build()
            .await?;
    }

    let filter = CompetitionListFilter {
        min_distance_in_feet: Some(1000),
        max_distance_in_feet: Some(2000),
        ..Default::default()
    };
    let page = CompetitionRepository::new(db)
        .get_page(full_page(), &filter)
        .await?;

    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].competition.distance_in_feet, 1500);
    Ok(())
}

/// Tests filtering by pilot name.
///
/// Expected: Ok with only that pilot's competitions
#[tokio::test]
async fn filters_by_pilot_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pilot, _, drone, competition) =
        helpers::create_competition_with_dependencies(db).await?;
    let other_pilot = factory::pilot::create_pilot(db).await?;
    factory::competition::create_competition(db, other_pilot.id, drone.id).await?;

    let filter = CompetitionListFilter {
        pilot_name: Some(pilot.name.clone()),
        ..Default::default()
    };
    let page = CompetitionRepository::new(db)
        .get_page(full_page(), &filter)
        .await?;

    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].competition.id, competition.id);
    Ok(())
}

/// Tests that filtering by a pilot name that matches no row yields an empty
/// page rather than an error.
///
/// Expected: Ok with count 0
#[tokio::test]
async fn unknown_pilot_name_yields_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    helpers::create_competition_with_dependencies(db).await?;

    let filter = CompetitionListFilter {
        pilot_name: Some("Nobody".to_string()),
        ..Default::default()
    };
    let page = CompetitionRepository::new(db)
        .get_page(full_page(), &filter)
        .await?;

    assert_eq!(page.count, 0);
    assert!(page.items.is_empty());
    Ok(())
}
