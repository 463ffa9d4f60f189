use super::*;

/// Tests filtering pilots by gender code.
///
/// Expected: Ok with only the matching pilots
#[tokio::test]
async fn filters_by_gender() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let penelope = factory::pilot::PilotFactory::new(db)
        .name("Penelope Pitstop")
        .gender("F")
        .build()
        .await?;
    factory::pilot::PilotFactory::new(db)
        .name("Peter Perfect")
        .gender("M")
        .build()
        .await?;

    let filter = PilotListFilter {
        gender: Some("F".to_string()),
        ..Default::default()
    };
    let page = PilotRepository::new(db)
        .get_page(
            PageRequest {
                limit: 8,
                offset: 0,
            },
            &filter,
        )
        .await?;

    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].pilot.id, penelope.id);
    Ok(())
}

/// Tests ordering pilots by races count descending.
///
/// Expected: Ok with the busiest pilot first
#[tokio::test]
async fn orders_by_races_count_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::pilot::PilotFactory::new(db)
        .name("Rookie")
        .races_count(1)
        .build()
        .await?;
    let veteran = factory::pilot::PilotFactory::new(db)
        .name("Veteran")
        .races_count(42)
        .build()
        .await?;

    let filter = PilotListFilter {
        ordering: Some("-races_count".to_string()),
        ..Default::default()
    };
    let page = PilotRepository::new(db)
        .get_page(
            PageRequest {
                limit: 8,
                offset: 0,
            },
            &filter,
        )
        .await?;

    assert_eq!(page.items[0].pilot.id, veteran.id);
    Ok(())
}
