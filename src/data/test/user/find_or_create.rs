use super::*;

/// Tests that an unknown username is created on first sight and found on the
/// second call instead of duplicated.
///
/// Expected: Ok with the same row both times
#[tokio::test]
async fn creates_once_then_finds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let created = repo.find_or_create("operator").await?;
    let found = repo.find_or_create("operator").await?;

    assert_eq!(created.id, found.id);
    assert_eq!(found.username, "operator");
    Ok(())
}
