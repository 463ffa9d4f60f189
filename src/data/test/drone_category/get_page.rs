use super::*;

/// Tests that the category page carries the ids of the drones assigned to
/// each category.
///
/// Expected: Ok with drone ids grouped under their category
#[tokio::test]
async fn page_carries_drone_ids_per_category() -> Result<(), DbErr> {
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
    let first = factory::drone::create_drone(db, quadcopter.id).await?;
    let second = factory::drone::create_drone(db, quadcopter.id).await?;

    let page = CategoryRepository::new(db)
        .get_page(
            PageRequest {
                limit: 8,
                offset: 0,
            },
            &CategoryListFilter::default(),
        )
        .await?;

    assert_eq!(page.count, 2);
    // Ordered by name: Octocopter before Quadcopter
    assert_eq!(page.items[0].category.id, octocopter.id);
    assert!(page.items[0].drone_ids.is_empty());
    assert_eq!(page.items[1].drone_ids, vec![first.id, second.id]);
    Ok(())
}

/// Tests the prefix search filter.
///
/// Expected: Ok with only the matching categories
#[tokio::test]
async fn search_matches_name_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Quadcopter", "Quad racer", "Octocopter"] {
        factory::drone_category::DroneCategoryFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let filter = CategoryListFilter {
        search: Some("Quad".to_string()),
        ..Default::default()
    };
    let page = CategoryRepository::new(db)
        .get_page(
            PageRequest {
                limit: 8,
                offset: 0,
            },
            &filter,
        )
        .await?;

    assert_eq!(page.count, 2);
    assert!(page
        .items
        .iter()
        .all(|item| item.category.name.starts_with("Quad")));
    Ok(())
}

/// Tests descending ordering requested by the client.
///
/// Expected: Ok with names in reverse alphabetical order
#[tokio::test]
async fn honors_descending_name_ordering() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Alpha", "Bravo", "Charlie"] {
        factory::drone_category::DroneCategoryFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let filter = CategoryListFilter {
        ordering: Some("-name".to_string()),
        ..Default::default()
    };
    let page = CategoryRepository::new(db)
        .get_page(
            PageRequest {
                limit: 8,
                offset: 0,
            },
            &filter,
        )
        .await?;

    let names: Vec<&str> = page
        .items
        .iter()
        .map(|item| item.category.name.as_str())
        .collect();
    assert_eq!(names, vec!["Charlie", "Bravo", "Alpha"]);
    Ok(())
}
