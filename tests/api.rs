//! HTTP handler tests: create teams and a tournament, enter results, read the bracket.

use actix_web::{test, web::Data, App};
use league_bracket_web::{api, MemoryStore};
use serde_json::{json, Value};
use std::sync::RwLock;

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(Data::new(RwLock::new(MemoryStore::new())))
                .configure(api::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn health() {
    let app = app!();
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["ok"], true);
}

#[actix_web::test]
async fn play_a_four_team_tournament() {
    let app = app!();

    let mut team_ids = Vec::new();
    for name in ["A", "B", "C", "D"] {
        let req = test::TestRequest::post()
            .uri("/api/teams")
            .set_json(json!({ "name": name }))
            .to_request();
        let team: Value = test::call_and_read_body_json(&app, req).await;
        team_ids.push(team["id"].as_str().unwrap().to_string());
    }

    let req = test::TestRequest::post()
        .uri("/api/tournaments")
        .set_json(json!({ "name": "Cup", "team_ids": team_ids }))
        .to_request();
    let tournament: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(tournament["type"], "single-elimination");
    let id = tournament["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/tournaments/{id}/bracket"))
        .to_request();
    let bracket: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(bracket["complete"], false);
    assert_eq!(bracket["rounds"][0]["name"], "Semifinals");
    assert_eq!(bracket["rounds"][1]["name"], "Final");
    let r1p1 = bracket["rounds"][0]["matches"][0]["id"].as_str().unwrap().to_string();
    let r1p2 = bracket["rounds"][0]["matches"][1]["id"].as_str().unwrap().to_string();
    let r2p1 = bracket["rounds"][1]["matches"][0]["id"].as_str().unwrap().to_string();

    let results = [
        (r1p1, &team_ids[0], 2, 1),
        (r1p2, &team_ids[3], 0, 3),
        (r2p1, &team_ids[3], 1, 2),
    ];
    for (match_id, winner, s1, s2) in results {
        let req = test::TestRequest::put()
            .uri(&format!("/api/tournaments/{id}/matches/{match_id}/result"))
            .set_json(json!({ "winner_id": winner, "team_1_score": s1, "team_2_score": s2 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/tournaments/{id}/bracket"))
        .to_request();
    let bracket: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(bracket["complete"], true);
    assert_eq!(bracket["winner_id"], team_ids[3].as_str());

    let req = test::TestRequest::get()
        .uri("/api/tournaments?status=completed")
        .to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["winner_id"], team_ids[3].as_str());
}

#[actix_web::test]
async fn create_tournament_validation_errors() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/teams")
        .set_json(json!({ "name": "Solo" }))
        .to_request();
    let team: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/tournaments")
        .set_json(json!({ "name": "Cup", "team_ids": [team["id"]] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "At least 2 teams are required");

    let req = test::TestRequest::post()
        .uri("/api/tournaments")
        .set_json(json!({
            "name": "Cup",
            "type": "round-robin",
            "team_ids": [team["id"], team["id"]]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn unknown_tournament_is_404() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri(&format!("/api/tournaments/{}", uuid::Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
