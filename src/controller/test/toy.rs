use super::*;

use entity::prelude::Toy;

async fn toy_app() -> (test_utils::context::TestContext, Router) {
    let test = TestBuilder::new().with_table(Toy).build().await.unwrap();
    let app = app(router::toy_routes(), test.db.as_ref().unwrap());
    (test, app)
}

fn toy_body(name: &str) -> Value {
    json!({
        "name": name,
        "description": format!("{} description", name),
        "release_date": "2017-10-09T12:11:37.090335Z",
        "toy_category": "Action figures",
        "was_included_in_home": false,
    })
}

/// Tests that a created toy can be read back unchanged under its assigned ID.
///
/// Expected: 201 with the stored toy, then 200 with the same body
#[tokio::test]
async fn created_toy_reads_back_unchanged() -> Result<(), DbErr> {
    let (test, _) = toy_app().await;
    let db = test.db.as_ref().unwrap();

    let (status, created) = send(
        app(router::toy_routes(), db),
        json_request("POST", "/toys", &toy_body("Wonderboy")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Wonderboy");
    assert_eq!(created["release_date"], "2017-10-09T12:11:37.090335Z");
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = send(
        app(router::toy_routes(), db),
        get(&format!("/toys/{}", id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    Ok(())
}

/// Tests that an empty POST body reports every required field at once.
///
/// Expected: 400 with one message list per missing field
#[tokio::test]
async fn empty_post_body_reports_every_field() -> Result<(), DbErr> {
    let (_test, app) = toy_app().await;

    let (status, body) = send(app, json_request("POST", "/toys", &json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    for field in ["name", "description", "release_date", "toy_category"] {
        assert_eq!(body[field], json!(["This field is required."]));
    }
    Ok(())
}

/// Tests that PUT is a full replacement: omitting fields is a validation
/// error listing exactly the omitted ones.
///
/// Expected: 400 naming description and release_date only
#[tokio::test]
async fn put_with_partial_body_lists_omitted_fields() -> Result<(), DbErr> {
    let (test, _) = toy_app().await;
    let db = test.db.as_ref().unwrap();

    let toy = factory::toy::create_toy(db).await?;

    let partial = json!({
        "name": "Surprise Boy",
        "toy_category": "Playsets",
    });
    let (status, body) = send(
        app(router::toy_routes(), db),
        json_request("PUT", &format!("/toys/{}", toy.id), &partial),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["description"], json!(["This field is required."]));
    assert_eq!(body["release_date"], json!(["This field is required."]));
    assert!(body.get("name").is_none());
    Ok(())
}

/// Tests that reading an unknown ID yields a 404 with an empty body.
///
/// Expected: 404 and no body
#[tokio::test]
async fn get_unknown_id_is_bare_404() -> Result<(), DbErr> {
    let (_test, app) = toy_app().await;

    let (status, body) = send(app, get("/toys/12345")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);
    Ok(())
}

/// Tests that replacing an unknown ID is a 404 before the body is validated.
///
/// Expected: 404 and no body, even though the body is invalid
#[tokio::test]
async fn put_unknown_id_is_404_before_validation() -> Result<(), DbErr> {
    let (_test, app) = toy_app().await;

    let (status, body) = send(app, json_request("PUT", "/toys/12345", &json!({}))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);
    Ok(())
}

/// Tests the delete-then-delete-again sequence.
///
/// Expected: 204 then 404, both with empty bodies
#[tokio::test]
async fn second_delete_is_404() -> Result<(), DbErr> {
    let (test, _) = toy_app().await;
    let db = test.db.as_ref().unwrap();

    let toy = factory::toy::create_toy(db).await?;
    let uri = format!("/toys/{}", toy.id);

    let (status, body) = send(app(router::toy_routes(), db), delete(&uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(app(router::toy_routes(), db), delete(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);
    Ok(())
}

/// Tests that the trailing-slash spellings of the toy paths are served.
///
/// Expected: 200 for both the collection and the item path
#[tokio::test]
async fn trailing_slash_paths_are_served() -> Result<(), DbErr> {
    let (test, _) = toy_app().await;
    let db = test.db.as_ref().unwrap();

    let toy = factory::toy::create_toy(db).await?;

    let (status, _) = send(app(router::toy_routes(), db), get("/toys/")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        app(router::toy_routes(), db),
        get(&format!("/toys/{}/", toy.id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], toy.id);
    Ok(())
}

/// Tests that the list endpoint returns a plain array of every toy, ordered
/// by name.
///
/// Expected: 200 with an array of all 5 names, alphabetical
#[tokio::test]
async fn list_is_a_plain_array_ordered_by_name() -> Result<(), DbErr> {
    let (test, _) = toy_app().await;
    let db = test.db.as_ref().unwrap();

    for name in ["Wonderboy", "Barbie", "Hot Wheels", "PL Rocket", "Nerf gun"] {
        factory::toy::ToyFactory::new(db).name(name).build().await?;
    }

    let (status, body) = send(app(router::toy_routes(), db), get("/toys")).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|toy| toy["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Barbie", "Hot Wheels", "Nerf gun", "PL Rocket", "Wonderboy"]
    );
    Ok(())
}
