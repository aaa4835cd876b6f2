use fitness_world::api::{DataSource, ExerciseApiClient};
use fitness_world::config::Config;
use mockito::{Matcher, Server, ServerGuard};

fn client_for(server: &ServerGuard) -> ExerciseApiClient {
    let mut config = Config::default();
    config.api.base_url = server.url();
    config.api.timeout_seconds = 5;
    ExerciseApiClient::new(&config).expect("client builds")
}

#[tokio::test]
async fn test_categories_from_live_api() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/exercisecategory/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"count": 2, "next": null, "previous": null,
                "results": [{"id": 10, "name": "Abs"}, {"id": 8, "name": "Arms"}]}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.exercise_categories().await;

    mock.assert_async().await;
    assert_eq!(result.source, DataSource::Live);
    assert_eq!(result.records.len(), 2);
    assert_eq!(result.records[0].name, "Abs");
    assert_eq!(result.records[0].id, 10);
}

#[tokio::test]
async fn test_categories_fall_back_on_server_error() {
    let mut server = Server::new_async().await;
    let _categories_mock = server
        .mock("GET", "/exercisecategory/")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.exercise_categories().await;

    assert_eq!(result.source, DataSource::Fallback);
    assert_eq!(result.records.len(), 8);
    assert!(result.records.iter().any(|c| c.name == "Cardio"));
}

#[tokio::test]
async fn test_categories_fall_back_on_malformed_body() {
    let mut server = Server::new_async().await;
    let _categories_mock = server
        .mock("GET", "/exercisecategory/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("this is not json")
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.exercise_categories().await;

    assert_eq!(result.source, DataSource::Fallback);
    assert!(!result.records.is_empty());
}

#[tokio::test]
async fn test_exercises_with_detail_lookup() {
    let mut server = Server::new_async().await;
    let _listing_mock = server
        .mock("GET", "/exercise/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"count": 1, "results": [{"id": 345}]}"#)
        .create_async()
        .await;
    let _detail_mock = server
        .mock("GET", "/exerciseinfo/345/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "id": 345,
                "category": {"id": 10, "name": "Abs"},
                "equipment": [{"name": "Mat"}],
                "translations": [
                    {"name": "Crunches", "description": "<p>Lie on your back.</p>", "language": 2}
                ]
            }"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let abs = fitness_world::api::ExerciseCategory {
        id: 10,
        name: "Abs".to_string(),
    };

    let result = client.exercises_by_category(&abs, 5).await;

    assert_eq!(result.source, DataSource::Live);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].name, "Crunches");
    assert_eq!(result.records[0].description, "Lie on your back.");
    assert_eq!(result.records[0].equipment, vec!["Mat".to_string()]);
}

#[tokio::test]
async fn test_exercises_fall_back_when_listing_fails() {
    let mut server = Server::new_async().await;
    let _listing_mock = server
        .mock("GET", "/exercise/")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let client = client_for(&server);
    let category = fitness_world::api::fallback::categories()
        .into_iter()
        .find(|c| c.name == "Legs")
        .expect("fallback has Legs");

    let result = client.exercises_by_category(&category, 5).await;

    assert_eq!(result.source, DataSource::Fallback);
    assert!(result.records.iter().any(|e| e.name == "Squats"));
}

#[tokio::test]
async fn test_food_search_from_live_api() {
    let mut server = Server::new_async().await;
    let _ingredient_mock = server
        .mock("GET", "/ingredient/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"count": 1, "results": [
                {"name": "Apple", "energy": 52, "protein": "0.300",
                 "carbohydrates": "14.000", "fat": "0.200"}
            ]}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.search_food("apple", 5).await;

    assert_eq!(result.source, DataSource::Live);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].name, "Apple");
    assert_eq!(result.records[0].kcal_per_100g, 52.0);
    assert_eq!(result.records[0].protein_g, 0.3);
}

#[tokio::test]
async fn test_food_search_falls_back_on_failure() {
    let mut server = Server::new_async().await;
    let _ingredient_mock = server
        .mock("GET", "/ingredient/")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.search_food("chicken", 5).await;

    assert_eq!(result.source, DataSource::Fallback);
    assert_eq!(result.records[0].name, "Chicken Breast");
}

#[tokio::test]
async fn test_unreachable_server_falls_back() {
    // Nothing listens on this port
    let mut config = Config::default();
    config.api.base_url = "http://127.0.0.1:9".to_string();
    config.api.timeout_seconds = 1;
    let client = ExerciseApiClient::new(&config).expect("client builds");

    let categories = client.exercise_categories().await;
    assert_eq!(categories.source, DataSource::Fallback);

    let foods = client.search_food("banana", 5).await;
    assert_eq!(foods.source, DataSource::Fallback);
    assert_eq!(foods.records[0].name, "Banana");
}
