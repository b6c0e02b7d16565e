mod common;

use affiliate_link_converter::api::handlers::convert_text_handler;
use affiliate_link_converter::state::AppState;
use axum::{Router, routing::post};
use axum_test::TestServer;
use common::{FakeCatalog, FakeFollower};
use serde_json::json;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/convert-text", post(convert_text_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_convert_single_link_success() {
    let catalog =
        FakeCatalog::new().with_product("222", "Áo thun nam", "https://cf.shopee.vn/file/abc");
    let server = server(common::create_test_state(FakeFollower::default(), catalog));

    let response = server
        .post("/api/convert-text")
        .json(&json!({
            "text": "check this out shopee.vn/product/111/222 thanks",
            "subIds": ["camp1"]
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["converted"], 1);

    let details = json["details"].as_array().unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0]["original"], "shopee.vn/product/111/222");
    assert_eq!(
        details[0]["short"],
        "https://s.shopee.vn/an_redir?origin_link=https%3A%2F%2Fshopee.vn%2Fproduct%2F111%2F222&affiliate_id=17335300037&sub_id=camp1"
    );
    assert_eq!(details[0]["productName"], "Áo thun nam");
    assert_eq!(details[0]["imageUrl"], "https://cf.shopee.vn/file/abc");
}

#[tokio::test]
async fn test_convert_joins_sub_ids() {
    let server = server(common::create_test_state(
        FakeFollower::default(),
        FakeCatalog::new(),
    ));

    let response = server
        .post("/api/convert-text")
        .json(&json!({
            "text": "https://shopee.vn/product/1/2",
            "subIds": ["a", "b", "c"]
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let short = json["details"][0]["short"].as_str().unwrap();
    assert!(short.ends_with("&sub_id=a-b-c"));
}

#[tokio::test]
async fn test_convert_without_sub_ids() {
    let server = server(common::create_test_state(
        FakeFollower::default(),
        FakeCatalog::new(),
    ));

    let response = server
        .post("/api/convert-text")
        .json(&json!({ "text": "https://shopee.vn/product/1/2" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let short = json["details"][0]["short"].as_str().unwrap();
    assert!(short.ends_with("&sub_id="));
}

#[tokio::test]
async fn test_convert_text_without_links() {
    let server = server(common::create_test_state(
        FakeFollower::default(),
        FakeCatalog::new(),
    ));

    let response = server
        .post("/api/convert-text")
        .json(&json!({ "text": "hello, nothing to convert here" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["converted"], 0);
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn test_convert_empty_text_rejected() {
    let server = server(common::create_test_state(
        FakeFollower::default(),
        FakeCatalog::new(),
    ));

    let response = server
        .post("/api/convert-text")
        .json(&json!({ "text": "" }))
        .expect_failure()
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_convert_missing_text_rejected() {
    let server = server(common::create_test_state(
        FakeFollower::default(),
        FakeCatalog::new(),
    ));

    let response = server
        .post("/api/convert-text")
        .json(&json!({ "subIds": ["camp1"] }))
        .expect_failure()
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_convert_malformed_json_rejected() {
    let server = server(common::create_test_state(
        FakeFollower::default(),
        FakeCatalog::new(),
    ));

    let response = server
        .post("/api/convert-text")
        .text("{not json")
        .content_type("application/json")
        .expect_failure()
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_convert_collapses_duplicates() {
    let server = server(common::create_test_state(
        FakeFollower::default(),
        FakeCatalog::new(),
    ));

    let response = server
        .post("/api/convert-text")
        .json(&json!({
            "text": "shopee.vn/product/1/2 and again shopee.vn/product/1/2"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["converted"], 1);
}

#[tokio::test]
async fn test_convert_multiple_links_in_order() {
    let follower = FakeFollower::default().with_route(
        "https://shp.ee/abc",
        "https://shopee.vn/Giay-the-thao-i.77.88?sp_atk=tracking",
    );
    let catalog = FakeCatalog::new()
        .with_product("2", "First", "")
        .with_product("88", "Second", "");
    let server = server(common::create_test_state(follower, catalog));

    let response = server
        .post("/api/convert-text")
        .json(&json!({
            "text": "1) https://shopee.vn/Ao-i.1.2\n2) shp.ee/abc"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["converted"], 2);

    let details = json["details"].as_array().unwrap();
    assert_eq!(details[0]["original"], "https://shopee.vn/Ao-i.1.2");
    assert_eq!(details[0]["productName"], "First");
    assert_eq!(details[1]["original"], "shp.ee/abc");
    assert_eq!(details[1]["productName"], "Second");
    assert!(
        details[1]["short"]
            .as_str()
            .unwrap()
            .contains("origin_link=https%3A%2F%2Fshopee.vn%2FGiay-the-thao-i.77.88&")
    );
}

#[tokio::test]
async fn test_convert_unwraps_tracking_link() {
    let catalog = FakeCatalog::new().with_product("222", "Wrapped", "");
    let server = server(common::create_test_state(FakeFollower::default(), catalog));

    let response = server
        .post("/api/convert-text")
        .json(&json!({
            "text": "https://s.shopee.vn/an_redir?origin_link=https%3A%2F%2Fshopee.vn%2Fproduct%2F111%2F222&affiliate_id=999&sub_id=old",
            "subIds": ["new"]
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let detail = &json["details"][0];
    assert_eq!(detail["productName"], "Wrapped");
    assert_eq!(
        detail["short"],
        "https://s.shopee.vn/an_redir?origin_link=https%3A%2F%2Fshopee.vn%2Fproduct%2F111%2F222&affiliate_id=17335300037&sub_id=new"
    );
}

#[tokio::test]
async fn test_convert_unresolvable_short_link_degrades() {
    let server = server(common::create_test_state(
        FakeFollower::default(),
        FakeCatalog::new(),
    ));

    let response = server
        .post("/api/convert-text")
        .json(&json!({ "text": "dead link https://shp.ee/gone" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    let detail = &json["details"][0];
    assert_eq!(detail["original"], "https://shp.ee/gone");
    assert!(
        detail["short"]
            .as_str()
            .unwrap()
            .contains("origin_link=https%3A%2F%2Fshp.ee%2Fgone&")
    );
    assert_eq!(detail["productName"], "Sản phẩm Shopee");
    assert_eq!(detail["imageUrl"], "");
}

#[tokio::test]
async fn test_convert_metadata_failure_uses_defaults() {
    let server = server(common::create_test_state(
        FakeFollower::default(),
        FakeCatalog::disabled(),
    ));

    let response = server
        .post("/api/convert-text")
        .json(&json!({ "text": "https://shopee.vn/Ao-thun-i.10.20?sp_atk=x" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let detail = &json["details"][0];
    assert_eq!(detail["productName"], "Sản phẩm Shopee");
    assert_eq!(detail["imageUrl"], "");
    assert!(
        detail["short"]
            .as_str()
            .unwrap()
            .contains("origin_link=https%3A%2F%2Fshopee.vn%2FAo-thun-i.10.20&")
    );
}
