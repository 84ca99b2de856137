//! Web server over the tournament engine: JSON REST API, tournaments held in memory.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT, INACTIVITY_HOURS,
//! CLEANUP_MINUTES.

use actix_web::{
    get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Instant;
use tournament_engine::config::ServerConfig;
use tournament_engine::{
    advance, create_tournament, draw_order, record_score, schedule_match, standings,
    teams_from_csv, EngineError, Team, Tournament, TournamentFormat, TournamentId,
};

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: many tournaments by ID. Last writer wins.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    #[serde(default = "default_name")]
    name: String,
    format: String,
    #[serde(default)]
    teams: Vec<Team>,
    /// Alternative to `teams`: "id,teamName" CSV with header.
    #[serde(default)]
    teams_csv: Option<String>,
    /// Randomise the draw before scheduling.
    #[serde(default)]
    shuffle: bool,
}

fn default_name() -> String {
    "Tournament".to_string()
}

#[derive(Deserialize)]
struct ScoreBody {
    #[serde(default)]
    score1: serde_json::Value,
    #[serde(default)]
    score2: serde_json::Value,
}

#[derive(Deserialize)]
struct ScheduleBody {
    scheduled_at: Option<DateTime<Utc>>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and match index (e.g. /api/tournaments/{id}/matches/{index})
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    index: usize,
}

fn bad_request(e: EngineError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Score fields arrive as numbers, strings or null; the engine parses the text.
fn raw_score(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Run `f` on the tournament (404 if unknown). Touching it refreshes last_activity.
fn with_tournament<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(&mut entry.tournament)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tournament-engine",
    })
}

/// Create a tournament and generate its opening schedule.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let body = body.into_inner();
    let format: TournamentFormat = match body.format.parse() {
        Ok(f) => f,
        Err(e) => return bad_request(e),
    };
    let mut teams = match body.teams_csv {
        Some(csv) => match teams_from_csv(csv.as_bytes()) {
            Ok(t) => t,
            Err(e) => return bad_request(e),
        },
        None => body.teams,
    };
    if body.shuffle {
        teams = draw_order(&teams, &mut rand::thread_rng());
    }
    let tournament = match create_tournament(body.name.trim(), format, teams) {
        Ok(t) => t,
        Err(e) => return bad_request(e),
    };

    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let response = HttpResponse::Ok().json(&tournament);
    g.insert(
        tournament.id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    response
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| HttpResponse::Ok().json(&*t))
}

/// Enter or clear a score (blank clears).
#[put("/api/tournaments/{id}/matches/{index}/score")]
async fn api_set_score(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    let (score1, score2) = (raw_score(&body.score1), raw_score(&body.score2));
    with_tournament(&state, path.id, |t| {
        match record_score(t, path.index, &score1, &score2) {
            Ok(()) => HttpResponse::Ok().json(&*t),
            Err(e) => bad_request(e),
        }
    })
}

/// Set or clear a match's kick-off time.
#[put("/api/tournaments/{id}/matches/{index}/schedule")]
async fn api_set_schedule(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<ScheduleBody>,
) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        match schedule_match(t, path.index, body.scheduled_at) {
            Ok(()) => HttpResponse::Ok().json(&*t),
            Err(e) => bad_request(e),
        }
    })
}

/// Ranked group tables.
#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| HttpResponse::Ok().json(standings(t)))
}

/// Close the current phase: seed knockout, next round, or crown the champion.
#[post("/api/tournaments/{id}/advance")]
async fn api_advance(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| match advance(t) {
        Ok(_) => HttpResponse::Ok().json(&*t),
        Err(e) => bad_request(e),
    })
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: periodically drop tournaments nobody has touched for a while
    let state_cleanup = state.clone();
    let (cleanup_interval, inactivity_timeout) = (config.cleanup_interval, config.inactivity_timeout);
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(cleanup_interval);
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < inactivity_timeout);
            let removed = before - g.len();
            if removed > 0 {
                log::info!(
                    "Cleaned up {} inactive tournament(s) (idle for {}h)",
                    removed,
                    inactivity_timeout.as_secs() / 3600
                );
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_set_score)
            .service(api_set_schedule)
            .service(api_standings)
            .service(api_advance)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
