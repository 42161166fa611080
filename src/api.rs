//! REST API: teams, tournaments, bracket view and result entry.
//!
//! All handlers share one `RwLock<MemoryStore>`; writes hold the write lock for the
//! whole fetch / advance / persist cycle, so results for a tournament never interleave.

use crate::logic::{bracket_rounds, bracket_winner, is_complete, RoundView};
use crate::models::{
    MatchId, MatchResult, Team, TeamId, Tournament, TournamentError, TournamentId,
    TournamentStatus, TournamentType,
};
use crate::store::MemoryStore;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path, Query},
    HttpResponse, Responder,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Shared application state.
pub type AppState = Data<RwLock<MemoryStore>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTeamBody {
    name: String,
    #[serde(default)]
    color: Option<String>,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    #[serde(rename = "type", default)]
    kind: TournamentType,
    team_ids: Vec<TeamId>,
}

#[derive(Deserialize)]
struct ListTournamentsQuery {
    status: Option<TournamentStatus>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and match id (e.g. /api/tournaments/{id}/matches/{match_id}/result)
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: MatchId,
}

#[derive(Serialize)]
struct BracketResponse {
    rounds: Vec<RoundView>,
    complete: bool,
    winner_id: Option<TeamId>,
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

fn bad_request(e: TournamentError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn no_tournament() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "league-bracket-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for the API.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Register a team that can later be entered into tournaments.
#[post("/api/teams")]
async fn api_create_team(state: AppState, body: Json<CreateTeamBody>) -> HttpResponse {
    let body = body.into_inner();
    let mut team = Team::new(body.name);
    team.color = body.color;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.insert_team(team) {
        Ok(team) => HttpResponse::Ok().json(team),
        Err(e) => bad_request(e),
    }
}

#[get("/api/teams")]
async fn api_list_teams(state: AppState) -> HttpResponse {
    match state.read() {
        Ok(g) => HttpResponse::Ok().json(g.list_teams()),
        Err(_) => lock_error(),
    }
}

/// Create a tournament and its bracket from registered teams (seeded in the given order).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let created = g
        .resolve_teams(&body.team_ids)
        .and_then(|teams| Tournament::create(body.name.as_str(), body.kind, &teams));
    match created {
        Ok(tournament) => {
            let response = HttpResponse::Ok().json(&tournament);
            g.insert_tournament(tournament);
            response
        }
        Err(e) => {
            log::debug!("Rejected tournament '{}': {}", body.name, e);
            bad_request(e)
        }
    }
}

/// List tournaments, newest first. Optional `?status=setup|in-progress|completed`.
#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState, query: Query<ListTournamentsQuery>) -> HttpResponse {
    match state.read() {
        Ok(g) => HttpResponse::Ok().json(g.list_tournaments(query.status)),
        Err(_) => lock_error(),
    }
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get_tournament(path.id) {
        Some(t) => HttpResponse::Ok().json(t),
        None => no_tournament(),
    }
}

#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.remove_tournament(path.id) {
        Some(t) => {
            log::info!("Deleted tournament '{}' ({})", t.name, t.id);
            HttpResponse::NoContent().finish()
        }
        None => no_tournament(),
    }
}

/// Bracket grouped into named rounds, plus completion and winner.
#[get("/api/tournaments/{id}/bracket")]
async fn api_get_bracket(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let t = match g.get_tournament(path.id) {
        Some(t) => t,
        None => return no_tournament(),
    };
    let matches = t.bracket.matches();
    HttpResponse::Ok().json(BracketResponse {
        rounds: bracket_rounds(matches),
        complete: is_complete(matches),
        winner_id: bracket_winner(matches),
    })
}

/// Enter (or correct) a match result and advance the winner.
#[put("/api/tournaments/{id}/matches/{match_id}/result")]
async fn api_record_result(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<MatchResult>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let mut t = match g.get_tournament(path.id) {
        Some(t) => t,
        None => return no_tournament(),
    };
    if let Err(e) = t.record_result(path.match_id, &body) {
        return bad_request(e);
    }
    let response = HttpResponse::Ok().json(&t);
    match g.update_tournament(t) {
        Ok(()) => response,
        Err(e) => bad_request(e),
    }
}

/// Register every API route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(favicon)
        .service(api_create_team)
        .service(api_list_teams)
        .service(api_create_tournament)
        .service(api_list_tournaments)
        .service(api_get_tournament)
        .service(api_delete_tournament)
        .service(api_get_bracket)
        .service(api_record_result);
}
