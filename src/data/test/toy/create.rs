use super::*;

/// Tests creating a toy from validated write params.
///
/// Verifies that the row gets an assigned ID, carries every submitted field,
/// and that the creation timestamp is stamped server-side.
///
/// Expected: Ok with toy created
#[tokio::test]
async fn creates_toy_with_server_side_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Toy).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now();
    let toy = ToyRepository::new(db)
        .create(write_params("Snoopy talking action figure"))
        .await?;

    assert!(toy.id > 0);
    assert_eq!(toy.name, "Snoopy talking action figure");
    assert_eq!(toy.toy_category, "Action figures");
    assert!(!toy.was_included_in_home);
    assert!(toy.created >= before);
    Ok(())
}
