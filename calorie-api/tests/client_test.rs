use calorie_api::{
    ActivityLevel, ApiClient, ApiError, FoodLogUpdate, Goal, MealType, MemoryTokenStore,
    NewFoodLog, ProfileUpdate, StoredSession, TokenStore,
};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn auth_body(token: &str) -> serde_json::Value {
    json!({
        "access_token": token,
        "token_type": "bearer",
        "user": { "name": "Lan", "email": "lan@example.com" }
    })
}

fn food_log_body(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": 1,
        "name": "Cơm gà",
        "calories": 450,
        "protein": 35.0,
        "carbs": 52.0,
        "fat": 12.0,
        "portion": "Medium",
        "mealType": "lunch",
        "timestamp": "2025-04-02T05:10:00",
        "imageUrl": null
    })
}

fn sample_new_log() -> NewFoodLog {
    NewFoodLog {
        name: "Cơm gà".to_string(),
        calories: 450,
        protein: 35.0,
        carbs: 52.0,
        fat: 12.0,
        portion: "Medium".to_string(),
        meal_type: MealType::Lunch,
        image_url: None,
    }
}

#[tokio::test]
async fn test_login_stores_token_and_email() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "email": "lan@example.com", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body("tok-1")))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::default());
    let client = ApiClient::new(server.uri(), store.clone()).unwrap();

    let auth = client.login("lan@example.com", "secret").await.unwrap();
    assert_eq!(auth.access_token, "tok-1");
    assert!(client.is_authenticated());
    assert_eq!(
        store.load().unwrap(),
        StoredSession {
            token: Some("tok-1".to_string()),
            email: Some("lan@example.com".to_string()),
        }
    );
}

#[tokio::test]
async fn test_signup_passes_server_detail_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "detail": "Email already registered" })),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), Arc::new(MemoryTokenStore::default())).unwrap();
    let err = client
        .signup("Lan", "lan@example.com", "secret")
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::Auth("Email already registered".to_string()));
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_signup_without_string_detail_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{ "loc": ["body", "email"], "msg": "field required" }]
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), Arc::new(MemoryTokenStore::default())).unwrap();
    let err = client.signup("Lan", "", "secret").await.unwrap_err();

    assert_eq!(err.to_string(), "Signup failed");
}

#[tokio::test]
async fn test_login_failure_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), Arc::new(MemoryTokenStore::default())).unwrap();
    let err = client.login("lan@example.com", "wrong").await.unwrap_err();

    assert_eq!(err, ApiError::Auth("Login failed".to_string()));
}

#[tokio::test]
async fn test_bearer_header_sent_when_token_held() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/food/logs"))
        .and(header("authorization", "Bearer tok-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([food_log_body(1)])))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        ApiClient::new(server.uri(), Arc::new(MemoryTokenStore::with_token("tok-9"))).unwrap();
    let logs = client.get_food_logs().await.unwrap();

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].meal_type, MealType::Lunch);
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/food/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), Arc::new(MemoryTokenStore::default())).unwrap();
    let logs = client.get_food_logs().await.unwrap();
    assert!(logs.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_profile_unauthorized_clears_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": "expired" })))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_token("stale"));
    let client = ApiClient::new(server.uri(), store.clone()).unwrap();

    let err = client.get_profile().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Unauthorized. Please login again.");
    assert!(!client.is_authenticated());
    assert_eq!(store.load().unwrap(), StoredSession::default());
}

#[tokio::test]
async fn test_profile_server_error_keeps_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client =
        ApiClient::new(server.uri(), Arc::new(MemoryTokenStore::with_token("tok"))).unwrap();

    let err = client.get_profile().await.unwrap_err();
    assert!(matches!(err, ApiError::Fetch(_)));
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn test_update_profile_sends_only_present_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/profile"))
        .and(body_json(json!({ "goal": "lose", "dailyCalories": 1650 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Lan",
            "email": "lan@example.com",
            "goal": "lose",
            "dailyCalories": 1650
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        ApiClient::new(server.uri(), Arc::new(MemoryTokenStore::with_token("tok"))).unwrap();
    let profile = client
        .update_profile(&ProfileUpdate {
            goal: Some(Goal::Lose),
            daily_calories: Some(1650),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(profile.daily_calories, Some(1650));
}

#[tokio::test]
async fn test_add_food_log_returns_server_entry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/food/log"))
        .and(body_json(json!({
            "name": "Cơm gà",
            "calories": 450,
            "protein": 35.0,
            "carbs": 52.0,
            "fat": 12.0,
            "portion": "Medium",
            "mealType": "lunch"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(food_log_body(42)))
        .mount(&server)
        .await;

    let client =
        ApiClient::new(server.uri(), Arc::new(MemoryTokenStore::with_token("tok"))).unwrap();
    let log = client.add_food_log(&sample_new_log()).await.unwrap();

    assert_eq!(log.id, 42);
    assert_eq!(log.calories, 450);
}

#[tokio::test]
async fn test_delete_and_update_food_log() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/food/log/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "deleted" })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/food/log/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/food/log/42"))
        .and(body_json(json!({ "calories": 300 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(food_log_body(42)))
        .mount(&server)
        .await;

    let client =
        ApiClient::new(server.uri(), Arc::new(MemoryTokenStore::with_token("tok"))).unwrap();

    client.delete_food_log(42).await.unwrap();
    let err = client.delete_food_log(404).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to delete food log");

    let updated = client
        .update_food_log(
            42,
            &FoodLogUpdate {
                calories: Some(300),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, 42);
}

#[tokio::test]
async fn test_analyze_food_description() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ai/analyze-food"))
        .and(body_json(json!({ "food_description": "phở bò" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "food_name": "Phở bò",
            "calories": 550,
            "protein": 30.0,
            "carbs": 70.0,
            "fat": 15.0,
            "portion": "1 tô",
            "confidence": 0.8
        })))
        .mount(&server)
        .await;

    let client =
        ApiClient::new(server.uri(), Arc::new(MemoryTokenStore::with_token("tok"))).unwrap();
    let result = client.analyze_food_description("phở bò").await.unwrap();

    assert_eq!(result.food_name, "Phở bò");
    assert_eq!(result.message, "");
}

#[tokio::test]
async fn test_analyze_food_image_sends_multipart_image_part() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ai/analyze-food-image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "food_name": "Bánh mì",
            "calories": 350,
            "protein": 12.0,
            "carbs": 45.0,
            "fat": 13.0,
            "portion": "1 ổ",
            "confidence": 0.7,
            "message": "estimated"
        })))
        .mount(&server)
        .await;

    let client =
        ApiClient::new(server.uri(), Arc::new(MemoryTokenStore::with_token("tok"))).unwrap();
    let result = client
        .analyze_food_image(vec![0xFF, 0xD8, 0xFF], "meal.jpg")
        .await
        .unwrap();
    assert_eq!(result.calories, 350);

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"image\""));
    assert!(body.contains("filename=\"meal.jpg\""));
}

#[tokio::test]
async fn test_health_reports_online_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "healthy" })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), Arc::new(MemoryTokenStore::default())).unwrap();
    let health = client.check_health().await;
    assert_eq!(health.status, "healthy");
    assert!(health.is_online());
}

#[tokio::test]
async fn test_health_offline_when_unreachable() {
    let client = ApiClient::new(
        "http://127.0.0.1:9",
        Arc::new(MemoryTokenStore::default()),
    )
    .unwrap();
    let health = client.check_health().await;
    assert!(!health.is_online());
}

#[tokio::test]
async fn test_unknown_enum_values_do_not_drop_the_response() {
    let server = MockServer::start().await;
    let mut brunch = food_log_body(2);
    brunch["mealType"] = json!("brunch");
    Mock::given(method("GET"))
        .and(path("/api/food/logs"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([food_log_body(1), brunch])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Lan",
            "email": "lan@example.com",
            "activityLevel": "very_active",
            "goal": "recomp"
        })))
        .mount(&server)
        .await;

    let client =
        ApiClient::new(server.uri(), Arc::new(MemoryTokenStore::with_token("tok"))).unwrap();

    let logs = client.get_food_logs().await.unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[1].id, 2);
    assert_eq!(logs[1].meal_type, MealType::Lunch);

    let profile = client.get_profile().await.unwrap();
    assert_eq!(profile.activity_level, Some(ActivityLevel::VeryActive));
    assert_eq!(profile.goal, Some(Goal::Maintain));
}
