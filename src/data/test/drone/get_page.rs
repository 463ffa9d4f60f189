use super::*;

/// Tests that each listed drone carries the name of its category.
///
/// Expected: Ok with the category name joined in
#[tokio::test]
async fn page_carries_category_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::drone_category::DroneCategoryFactory::new(db)
        .name("Quadcopter")
        .build()
        .await?;
    factory::drone::create_drone(db, category.id).await?;

    let page = DroneRepository::new(db)
        .get_page(full_page(), &DroneListFilter::default())
        .await?;

    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].category_name, "Quadcopter");
    Ok(())
}

/// Tests filtering drones by their category's name.
///
/// Expected: Ok with only drones from the named category
#[tokio::test]
async fn filters_by_category_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let quadcopter = factory::drone_category::DroneCategoryFactory::new(db)
        .name("Quadcopter")
        .build()
        .await?;
    let octocopter = factory::drone_category::DroneCategoryFactory::new(db)
        .name("Octocopter")
        .build()
        .await?;
    let kept = factory::drone::create_drone(db, quadcopter.id).await?;
    factory::drone::create_drone(db, octocopter.id).await?;

    let filter = DroneListFilter {
        drone_category: Some("Quadcopter".to_string()),
        ..Default::default()
    };
    let page = DroneRepository::new(db).get_page(full_page(), &filter).await?;

    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].drone.id, kept.id);
    Ok(())
}

/// Tests filtering drones by the competition flag.
///
/// Expected: Ok with only drones that have competed
#[tokio::test]
async fn filters_by_has_it_competed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::drone_category::create_category(db).await?;
    let veteran = factory::drone::DroneFactory::new(db, category.id)
        .has_it_competed(true)
        .build()
        .await?;
    factory::drone::create_drone(db, category.id).await?;

    let filter = DroneListFilter {
        has_it_competed: Some(true),
        ..Default::default()
    };
    let page = DroneRepository::new(db).get_page(full_page(), &filter).await?;

    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].drone.id, veteran.id);
    Ok(())
}
