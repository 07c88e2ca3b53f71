//! 实体 CRUD 接口测试

mod common;

use common::TestApp;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_food_partial_update_keeps_other_fields() {
    let app = TestApp::new().await;

    let menu_id = app.create_menu().await;
    let food_id = app.create_food(&menu_id, "noodles", 8.0).await;

    let (status, result) = app
        .patch(&format!("/foods/{food_id}"), json!({ "price": 7.125 }))
        .await;
    assert_eq!(status, StatusCode::OK, "{result}");
    assert_eq!(result["matched_count"], 1);
    assert_eq!(result["modified_count"], 1);
    assert!(result.get("upserted_id").is_none());

    let (_, food) = app.get(&format!("/foods/{food_id}")).await;
    assert_eq!(food["price"], 7.13);
    assert_eq!(food["name"], "noodles");
    assert_eq!(food["food_image"], "noodles.png");
    assert_eq!(food["menu_id"], menu_id.as_str());
    assert!(food["updated_at"].as_i64().unwrap() >= food["created_at"].as_i64().unwrap());
}

#[tokio::test]
async fn test_patch_unknown_id_upserts() {
    let app = TestApp::new().await;

    let (status, result) = app
        .patch(
            "/tables/table-new",
            json!({ "table_number": 9, "number_of_guests": 6 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["matched_count"], 0);
    assert_eq!(result["upserted_id"], "table-new");

    let (status, table) = app.get("/tables/table-new").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(table["table_id"], "table-new");
    assert_eq!(table["table_number"], 9);
    assert!(table["created_at"].as_i64().unwrap() > 0);

    let (status, result) = app
        .patch("/tables/table-new", json!({ "number_of_guests": 2 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["matched_count"], 1);
    assert!(result.get("upserted_id").is_none());

    let (_, again) = app.get("/tables/table-new").await;
    assert_eq!(again["number_of_guests"], 2);
    assert_eq!(again["table_number"], 9);
    assert_eq!(again["created_at"], table["created_at"]);
}

#[tokio::test]
async fn test_negative_price_is_rounded_away_from_zero() {
    let app = TestApp::new().await;

    let menu_id = app.create_menu().await;
    let food_id = app.create_food(&menu_id, "refund", -9.995).await;

    let (status, food) = app.get(&format!("/foods/{food_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(food["price"], -10.0);

    let (status, _) = app
        .patch(&format!("/foods/{food_id}"), json!({ "price": -2.005 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, food) = app.get(&format!("/foods/{food_id}")).await;
    assert_eq!(food["price"], -2.01);
}

#[tokio::test]
async fn test_food_with_unknown_menu_is_rejected() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/foods",
            json!({ "name": "x", "price": 1.0, "food_image": "x.png", "menu_id": "missing" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 9);
    assert_eq!(body["message"], "Menu was not found");

    let (_, page) = app.get("/foods").await;
    assert_eq!(page["total_count"], 0);
}

#[tokio::test]
async fn test_unknown_id_is_404_with_message() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/foods/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Food nope not found");
    assert_eq!(body["code"], 6001);

    let (status, body) = app.get("/orders/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);

    let (status, _) = app.get("/orderItems/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_required_field_is_400() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/tables", json!({ "table_number": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    assert!(body["message"].as_str().unwrap().contains("number_of_guests"));

    let (status, _) = app
        .post("/foods", json!({ "name": "", "price": 1.0, "food_image": "a", "menu_id": "m" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_food_list_pagination() {
    let app = TestApp::new().await;

    let menu_id = app.create_menu().await;
    for n in 0..5 {
        app.create_food(&menu_id, &format!("dish{n}"), 1.0 + n as f64).await;
    }

    let (status, page) = app.get("/foods?page=1&recordPerPage=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total_count"], 5);
    assert_eq!(page["food_items"].as_array().unwrap().len(), 2);

    let (_, page) = app.get("/foods?recordPerPage=10&startIndex=4").await;
    assert_eq!(page["food_items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_non_numeric_paging_falls_back_to_defaults() {
    let app = TestApp::new().await;

    let menu_id = app.create_menu().await;
    for n in 0..12 {
        app.create_food(&menu_id, &format!("dish{n}"), 2.0).await;
    }

    let (status, page) = app.get("/foods?page=abc&recordPerPage=&startIndex=x").await;
    assert_eq!(status, StatusCode::OK, "{page}");
    assert_eq!(page["total_count"], 12);
    assert_eq!(page["food_items"].as_array().unwrap().len(), 10);

    let (status, page) = app
        .get("/foods?page=9223372036854775807&recordPerPage=100")
        .await;
    assert_eq!(status, StatusCode::OK, "{page}");
    assert!(page["food_items"].as_array().unwrap().is_empty());

    let (status, tables) = app.get("/tables?recordPerPage=oops").await;
    assert_eq!(status, StatusCode::OK);
    assert!(tables.is_array());
}

#[tokio::test]
async fn test_unknown_route_is_404_json() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/dishes").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3);
    assert_eq!(body["message"], "No route for /dishes");
}

#[tokio::test]
async fn test_menu_window_rules() {
    let app = TestApp::new().await;
    let now = shared::util::now_millis();

    let (status, body) = app
        .post(
            "/menus",
            json!({ "name": "Old", "category": "lunch", "start_date": now - 60_000, "end_date": now + 60_000 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6003);

    let menu_id = app
        .create(
            "/menus",
            json!({ "name": "Later", "category": "lunch", "start_date": now + 60_000, "end_date": now + 120_000 }),
        )
        .await;

    // null clears the window end
    let (status, _) = app
        .patch(&format!("/menus/{menu_id}"), json!({ "end_date": null }))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, menu) = app.get(&format!("/menus/{menu_id}")).await;
    assert!(menu["end_date"].is_null());
    assert_eq!(menu["name"], "Later");
}

#[tokio::test]
async fn test_order_moves_to_existing_table_only() {
    let app = TestApp::new().await;

    let first = app.create_table(1, 2).await;
    let second = app.create_table(2, 2).await;
    let order_id = app.create("/orders", json!({ "table_id": first })).await;

    let (status, _) = app
        .patch(&format!("/orders/{order_id}"), json!({ "table_id": "missing" }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = app
        .patch(&format!("/orders/{order_id}"), json!({ "table_id": second }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, order) = app.get(&format!("/orders/{order_id}")).await;
    assert_eq!(order["table_id"], second.as_str());
    assert!(order["order_date"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "ok");
}
