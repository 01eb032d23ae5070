//! CRUD contract tests against a real PostgreSQL
//!
//! Each test gets a fresh database with migrations applied.
//! Run with: DATABASE_URL=postgres://... cargo test -p kittenctl-server -- --ignored

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use sqlx::PgPool;

use common::{app, send};
use kittenctl_server::db::{reset_schema, BreedRepo, DbError, KittenRepo};
use kittenctl_server::models::{Age, BreedName, Color, NewKitten};

async fn create_breed(app: &axum::Router, name: &str) -> i64 {
    let (status, body) = send(app, "POST", "/breeds", Some(json!({"breed_name": name}))).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["instance_id"].as_i64().unwrap()
}

async fn create_kitten(app: &axum::Router, body: Value) -> i64 {
    let (status, body) = send(app, "POST", "/kittens", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["instance_id"].as_i64().unwrap()
}

#[sqlx::test(migrator = "kittenctl_server::db::MIGRATOR")]
#[ignore = "requires database"]
async fn created_breeds_are_listed(pool: PgPool) {
    let app = app(pool);

    let siamese = create_breed(&app, "сиамская").await;
    let bengal = create_breed(&app, "бенгальская").await;

    let (status, body) = send(&app, "GET", "/breeds", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"instance_id": siamese, "name": "сиамская"},
            {"instance_id": bengal, "name": "бенгальская"},
        ])
    );
}

#[sqlx::test(migrator = "kittenctl_server::db::MIGRATOR")]
#[ignore = "requires database"]
async fn duplicate_breed_is_409(pool: PgPool) {
    let app = app(pool);
    create_breed(&app, "bengal").await;

    let (status, body) = send(&app, "POST", "/breeds", Some(json!({"breed_name": "bengal"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Breed already exists");
}

#[sqlx::test(migrator = "kittenctl_server::db::MIGRATOR")]
#[ignore = "requires database"]
async fn kitten_without_breed(pool: PgPool) {
    let app = app(pool);

    let id = create_kitten(&app, json!({"color": "grey", "age": 2, "description": ""})).await;

    let (status, body) = send(&app, "GET", &format!("/kittens/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": id, "color": "grey", "age": 2, "description": "", "breed": ""})
    );

    // description is optional and stays null when omitted
    let id = create_kitten(&app, json!({"color": "white", "age": 0})).await;
    let (_, body) = send(&app, "GET", &format!("/kittens/{id}"), None).await;
    assert_eq!(body["description"], Value::Null);
}

#[sqlx::test(migrator = "kittenctl_server::db::MIGRATOR")]
#[ignore = "requires database"]
async fn kitten_with_unknown_breed_is_400(pool: PgPool) {
    let app = app(pool);

    let (status, body) = send(
        &app,
        "POST",
        "/kittens",
        Some(json!({"color": "grey", "age": 2, "breed": "british"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Can't add kitten info: breed british wasn't found");

    // nothing was written
    let (_, body) = send(&app, "GET", "/kittens", None).await;
    assert_eq!(body, json!([]));
}

#[sqlx::test(migrator = "kittenctl_server::db::MIGRATOR")]
#[ignore = "requires database"]
async fn kitten_with_known_breed(pool: PgPool) {
    let app = app(pool);
    create_breed(&app, "british").await;

    let id = create_kitten(&app, json!({"color": "grey", "age": 2, "breed": "british"})).await;

    let (_, body) = send(&app, "GET", &format!("/kittens/{id}"), None).await;
    assert_eq!(body["breed"], "british");
}

#[sqlx::test(migrator = "kittenctl_server::db::MIGRATOR")]
#[ignore = "requires database"]
async fn update_resolves_breed_name(pool: PgPool) {
    let app = app(pool.clone());
    let breed_id = create_breed(&app, "british").await;
    let id = create_kitten(&app, json!({"color": "grey", "age": 2, "description": ""})).await;

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/kittens/{id}"),
        Some(json!({"breed": "british"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": id, "color": "grey", "age": 2, "description": "", "breed": "british"})
    );

    let stored = KittenRepo::new(&pool).get(id).await.unwrap();
    assert_eq!(stored.breed_id, Some(breed_id));
}

#[sqlx::test(migrator = "kittenctl_server::db::MIGRATOR")]
#[ignore = "requires database"]
async fn update_is_partial(pool: PgPool) {
    let app = app(pool);
    let id = create_kitten(&app, json!({"color": "white", "age": 0, "description": "description"})).await;

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/kittens/{id}"),
        Some(json!({"age": 5, "description": "loves to play"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": id, "color": "white", "age": 5, "description": "loves to play", "breed": ""})
    );

    // an empty patch changes nothing and still returns the kitten
    let (status, body) = send(&app, "PATCH", &format!("/kittens/{id}"), Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["age"], 5);
}

#[sqlx::test(migrator = "kittenctl_server::db::MIGRATOR")]
#[ignore = "requires database"]
async fn update_with_unknown_breed_is_400(pool: PgPool) {
    let app = app(pool);
    let id = create_kitten(&app, json!({"color": "grey", "age": 1})).await;

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/kittens/{id}"),
        Some(json!({"age": 3, "breed": "sphynx"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Can't perform update: breed 'sphynx' wasn't found. In order to add breed, create it first"
    );

    // the age change was not applied either
    let (_, body) = send(&app, "GET", &format!("/kittens/{id}"), None).await;
    assert_eq!(body["age"], 1);
}

#[sqlx::test(migrator = "kittenctl_server::db::MIGRATOR")]
#[ignore = "requires database"]
async fn update_missing_kitten_is_404(pool: PgPool) {
    let app = app(pool);

    let (status, body) = send(&app, "PATCH", "/kittens/100", Some(json!({"age": 1}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Kitten wasn't found");
}

#[sqlx::test(migrator = "kittenctl_server::db::MIGRATOR")]
#[ignore = "requires database"]
async fn list_filters_by_breed(pool: PgPool) {
    let app = app(pool);
    create_breed(&app, "british").await;
    let a = create_kitten(&app, json!({"color": "grey", "age": 2, "breed": "british"})).await;
    let b = create_kitten(&app, json!({"color": "white", "age": 5})).await;
    let c = create_kitten(&app, json!({"color": "black", "age": 1, "breed": "british"})).await;

    let (_, body) = send(&app, "GET", "/kittens", None).await;
    let ids: Vec<i64> = body.as_array().unwrap().iter().map(|k| k["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![a, b, c]);

    let (status, body) = send(&app, "GET", "/kittens?breed=british", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body.as_array().unwrap().iter().map(|k| k["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![a, c]);
}

#[sqlx::test(migrator = "kittenctl_server::db::MIGRATOR")]
#[ignore = "requires database"]
async fn list_by_unknown_breed_is_404(pool: PgPool) {
    let app = app(pool);

    let (status, body) = send(&app, "GET", "/kittens?breed=ssss", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Breed wasn't found");
}

#[sqlx::test(migrator = "kittenctl_server::db::MIGRATOR")]
#[ignore = "requires database"]
async fn get_missing_kitten_is_404(pool: PgPool) {
    let app = app(pool);

    let (status, body) = send(&app, "GET", "/kittens/100", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Kitten wasn't found");
}

#[sqlx::test(migrator = "kittenctl_server::db::MIGRATOR")]
#[ignore = "requires database"]
async fn deleted_kitten_is_gone(pool: PgPool) {
    let app = app(pool);
    let id = create_kitten(&app, json!({"color": "grey", "age": 2})).await;

    let (status, body) = send(&app, "DELETE", &format!("/kittens/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, "GET", &format!("/kittens/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "DELETE", &format!("/kittens/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Kitten wasn't found");
}

#[sqlx::test(migrator = "kittenctl_server::db::MIGRATOR")]
#[ignore = "requires database"]
async fn referenced_breed_cannot_be_deleted(pool: PgPool) {
    let breeds = BreedRepo::new(&pool);
    let kittens = KittenRepo::new(&pool);

    let breed = breeds.create(&BreedName::new("maine coon").unwrap()).await.unwrap();
    let kitten = NewKitten {
        color: Color::new("brown").unwrap(),
        age: Age::new(3).unwrap(),
        description: None,
        breed: Some(BreedName::new("maine coon").unwrap()),
    };
    let kitten_id = kittens.create(&kitten, Some(breed.id)).await.unwrap();

    let err = breeds.delete(breed.id).await.unwrap_err();
    assert!(matches!(err, DbError::ForeignKeyViolation { .. }));

    // once unreferenced, the breed can go
    kittens.delete(kitten_id).await.unwrap();
    breeds.delete(breed.id).await.unwrap();
    assert!(breeds.find(breed.id).await.unwrap().is_none());
}

#[sqlx::test(migrator = "kittenctl_server::db::MIGRATOR")]
#[ignore = "requires database"]
async fn duplicate_breed_is_unique_violation(pool: PgPool) {
    let breeds = BreedRepo::new(&pool);
    let name = BreedName::new("sphynx").unwrap();

    breeds.create(&name).await.unwrap();
    let err = breeds.create(&name).await.unwrap_err();
    assert!(matches!(err, DbError::UniqueViolation { .. }));
}

#[sqlx::test(migrator = "kittenctl_server::db::MIGRATOR")]
#[ignore = "requires database"]
async fn breed_filter_is_trimmed(pool: PgPool) {
    let app = app(pool);
    create_breed(&app, " bengal ").await;
    let id = create_kitten(&app, json!({"color": "spotted", "age": 1, "breed": " bengal "})).await;

    for uri in ["/kittens?breed=%20bengal%20", "/kittens?breed=bengal"] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}: {body}");
        assert_eq!(body[0]["id"], id);
        assert_eq!(body[0]["breed"], "bengal");
    }
}

#[sqlx::test(migrator = "kittenctl_server::db::MIGRATOR")]
#[ignore = "requires database"]
async fn reset_schema_clears_data(pool: PgPool) {
    let app = app(pool.clone());
    create_breed(&app, "ragdoll").await;

    reset_schema(&pool).await.unwrap();

    let (status, body) = send(&app, "GET", "/breeds", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}
