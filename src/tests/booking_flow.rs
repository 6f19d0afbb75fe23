use actix_web::http::StatusCode;
use actix_web::{test, App};
use chrono::{Duration, Utc};
use serde_json::{json, Value};

use crate::modules::auth::application::ports::outgoing::{NewUser, UserRepository};
use crate::modules::parking::application::domain::entities::SpotStatus;
use crate::shared::api::custom_json_config;
use crate::tests::support::app_state_builder::wired_state;
use crate::tests::support::in_memory_store::InMemoryStore;
use crate::tests::support::session_helper::{session_cookie, test_session_middleware, test_sign_in};

pub(super) async fn account(store: &InMemoryStore, username: &str, is_admin: bool) -> i32 {
    store
        .create_user(NewUser {
            username: username.to_string(),
            password_hash: "unused".to_string(),
            is_admin,
        })
        .await
        .unwrap()
        .id
        .value()
}

pub(super) fn lot_body(name: &str, spots: i32) -> Value {
    json!({
        "prime_location_name": name,
        "price_per_hour": 40.0,
        "address": "1 Main Road",
        "pin_code": "560001",
        "maximum_number_of_spots": spots
    })
}

#[actix_web::test]
async fn full_lot_refuses_the_next_driver_until_a_release() {
    let store = InMemoryStore::new();
    let admin = account(&store, "admin", true).await;
    let mut drivers = Vec::new();
    for name in ["alice", "bob", "carol", "dave"] {
        drivers.push(account(&store, name, false).await);
    }

    let app = test::init_service(
        App::new()
            .wrap(test_session_middleware())
            .app_data(wired_state(&store))
            .app_data(custom_json_config())
            .service(test_sign_in)
            .configure(crate::init_routes),
    )
    .await;

    let admin_cookie = session_cookie(&app, admin).await;
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/admin/add_lot")
            .cookie(admin_cookie.clone())
            .set_json(lot_body("Central Mall", 3))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let lot_id = body["data"]["id"].as_i64().unwrap() as i32;

    let spot_ids: Vec<i32> = store.spots(lot_id).iter().map(|s| s.id).collect();
    assert_eq!(spot_ids.len(), 3);

    let mut cookies = Vec::new();
    for id in &drivers {
        cookies.push(session_cookie(&app, *id).await);
    }
    let book = |i: usize| {
        test::TestRequest::get()
            .uri(&format!("/user/book/{lot_id}"))
            .cookie(cookies[i].clone())
            .to_request()
    };

    // Spots go out lowest id first.
    for (i, spot_id) in spot_ids.iter().enumerate() {
        let resp = test::call_service(&app, book(i)).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["spot_id"], *spot_id);
        assert_eq!(body["data"]["cost_per_hour"], 40.0);
    }
    store.assert_consistent();

    let resp = test::call_service(&app, book(3)).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "NO_AVAILABLE_SPOT");

    let resp = test::call_service(&app, book(0)).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "ACTIVE_RESERVATION_EXISTS");

    // Alice parked two hours ago at 40/h.
    let alice_reservation = store
        .reservations()
        .into_iter()
        .find(|r| r.user_id.value() == drivers[0])
        .unwrap();
    store.backdate(alice_reservation.id, Utc::now() - Duration::hours(2));

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/user/release")
            .cookie(cookies[0].clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Spot released. Thank you!");
    assert_eq!(body["data"]["total_cost"].as_f64(), Some(80.0));
    store.assert_consistent();

    let resp = test::call_service(&app, book(3)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["spot_id"], spot_ids[0]);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/user/history")
            .cookie(cookies[0].clone())
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    let history = body["data"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["lot_name"], "Central Mall");
    assert_eq!(history[0]["total_cost"].as_f64(), Some(80.0));

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/admin/delete_lot/{lot_id}"))
            .cookie(admin_cookie)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "LOT_HAS_OCCUPIED_SPOTS");

    let occupied = store
        .spots(lot_id)
        .iter()
        .filter(|s| s.status == SpotStatus::Occupied)
        .count();
    assert_eq!(occupied, 3);
    store.assert_consistent();
}

#[actix_web::test]
async fn dashboard_search_and_lot_lifecycle() {
    let store = InMemoryStore::new();
    let admin = account(&store, "admin", true).await;
    let alice = account(&store, "alice", false).await;

    let app = test::init_service(
        App::new()
            .wrap(test_session_middleware())
            .app_data(wired_state(&store))
            .app_data(custom_json_config())
            .service(test_sign_in)
            .configure(crate::init_routes),
    )
    .await;
    let admin_cookie = session_cookie(&app, admin).await;
    let alice_cookie = session_cookie(&app, alice).await;

    let mut lot_ids = Vec::new();
    for (name, spots) in [("Central Mall", 1), ("Airport", 2)] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/admin/add_lot")
                .cookie(admin_cookie.clone())
                .set_json(lot_body(name, spots))
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(resp).await;
        lot_ids.push(body["data"]["id"].as_i64().unwrap());
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/user/book/{}", lot_ids[0]))
            .cookie(alice_cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let dashboard = |query: &str| {
        test::TestRequest::get()
            .uri(&format!("/user/dashboard{query}"))
            .cookie(alice_cookie.clone())
            .to_request()
    };

    let body: Value = test::read_body_json(test::call_service(&app, dashboard("")).await).await;
    assert_eq!(body["data"]["lots"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["active_reservation"]["lot_name"], "Central Mall");

    let body: Value =
        test::read_body_json(test::call_service(&app, dashboard("?search=MALL")).await).await;
    let lots = body["data"]["lots"].as_array().unwrap();
    assert_eq!(lots.len(), 1);
    assert_eq!(lots[0]["occupied_spots"], 1);

    let body: Value =
        test::read_body_json(test::call_service(&app, dashboard("?available=1")).await).await;
    let lots = body["data"]["lots"].as_array().unwrap();
    assert_eq!(lots.len(), 1);
    assert_eq!(lots[0]["prime_location_name"], "Airport");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/admin/lot/edit/{}", lot_ids[1]))
            .cookie(admin_cookie.clone())
            .set_json(json!({
                "prime_location_name": "Airport T2",
                "price_per_hour": 55.5,
                "address": "Terminal Road",
                "pin_code": "560300",
                "maximum_number_of_spots": 2
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/admin/lot/{}", lot_ids[1]))
            .cookie(admin_cookie.clone())
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["lot"]["prime_location_name"], "Airport T2");
    assert_eq!(body["data"]["spots"].as_array().unwrap().len(), 2);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/admin/delete_lot/{}", lot_ids[1]))
            .cookie(admin_cookie)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(store.spots(lot_ids[1] as i32).is_empty());

    let body: Value = test::read_body_json(test::call_service(&app, dashboard("")).await).await;
    assert_eq!(body["data"]["lots"].as_array().unwrap().len(), 1);
    store.assert_consistent();
}
