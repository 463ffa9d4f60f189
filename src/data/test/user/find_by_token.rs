use super::*;

/// Tests resolving a stored token key to its user.
///
/// Expected: Ok with Some(user)
#[tokio::test]
async fn resolves_stored_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let token = factory::user::create_token_for_user(db, user.id).await?;

    let found = UserRepository::new(db).find_by_token(&token.key).await?;

    assert_eq!(found.map(|found| found.id), Some(user.id));
    Ok(())
}

/// Tests a key that matches no stored token.
///
/// Expected: Ok with None
#[tokio::test]
async fn unknown_key_resolves_to_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db).find_by_token("deadbeef").await?;

    assert!(found.is_none());
    Ok(())
}
