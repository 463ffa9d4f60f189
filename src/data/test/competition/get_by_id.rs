use super::*;

/// Tests that a fetched competition carries its pilot and drone names.
///
/// Expected: Ok with both names joined in
#[tokio::test]
async fn finds_competition_with_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pilot, _, drone, competition) =
        helpers::create_competition_with_dependencies(db).await?;

    let found = CompetitionRepository::new(db)
        .get_by_id(competition.id)
        .await?
        .unwrap();

    assert_eq!(found.competition.id, competition.id);
    assert_eq!(found.pilot_name, pilot.name);
    assert_eq!(found.drone_name, drone.name);
    Ok(())
}
