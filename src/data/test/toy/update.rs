use super::*;

/// Tests that update replaces every user-settable field while preserving the
/// ID and the creation timestamp.
///
/// Expected: Ok with all fields replaced
#[tokio::test]
async fn replaces_every_field_and_keeps_created() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Toy).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let original = factory::toy::create_toy(db).await?;
    let original_id = original.id;
    let original_created = original.created;

    let mut params = write_params("Wonderboy");
    params.was_included_in_home = true;

    let updated = ToyRepository::new(db).update(original, params).await?;

    assert_eq!(updated.id, original_id);
    assert_eq!(updated.name, "Wonderboy");
    assert_eq!(updated.description, "Wonderboy description");
    assert!(updated.was_included_in_home);
    assert_eq!(updated.created, original_created);
    Ok(())
}
