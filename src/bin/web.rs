//! Single binary scorecard server: JSON API over the round model.
//! Active rounds live in memory; every change is also written to a local file, best effort.
//! Run with: cargo run --bin web
//! Listens on 127.0.0.1:8080 by default.
//! Override with env: HOST, PORT, MINICARD_DATA (data file path).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, ServiceConfig},
    App, HttpResponse, HttpServer, Responder,
};
use minicard::config::ServerConfig;
use minicard::share::{export_csv, share_text};
use minicard::{
    adjust_score, begin_round, compute_leaderboard, compute_summary, compute_totals,
    has_any_score, hole_has_scores, par_for_hole, par_total, running_summary, set_score, Catalog,
    Course, FileStore, KeyValueStore, PlayerId, PlayerTotal, Round, RoundError, RoundGateway,
    Screen, UuidIds,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockWriteGuard};

/// Active rounds by course slug. `None` means "no round", either never saved or reset this session.
type ActiveRounds = HashMap<String, Option<Round>>;

/// Course catalog, in-memory rounds, and the store they are written through to.
struct AppContext {
    catalog: Catalog,
    rounds: RoundGateway<Box<dyn KeyValueStore>>,
    active: RwLock<ActiveRounds>,
}

impl AppContext {
    fn new(catalog: Catalog, rounds: RoundGateway<Box<dyn KeyValueStore>>) -> Self {
        Self {
            catalog,
            rounds,
            active: RwLock::new(HashMap::new()),
        }
    }

    fn lock_active(&self) -> Result<RwLockWriteGuard<'_, ActiveRounds>, HttpResponse> {
        self.active
            .write()
            .map_err(|_| HttpResponse::InternalServerError().body("lock error"))
    }
}

/// The course's active round, read from storage the first time the course is touched.
fn slot<'a>(
    active: &'a mut ActiveRounds,
    rounds: &RoundGateway<Box<dyn KeyValueStore>>,
    slug: &str,
) -> &'a mut Option<Round> {
    active
        .entry(slug.to_string())
        .or_insert_with(|| rounds.load(slug))
}

type AppState = Data<AppContext>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct StartRoundBody {
    names: Vec<String>,
}

#[derive(Deserialize)]
struct SetScoreBody {
    hole: usize,
    player_id: PlayerId,
    value: i64,
}

#[derive(Deserialize)]
struct AdjustScoreBody {
    hole: usize,
    player_id: PlayerId,
    delta: i64,
}

/// Path segment: course slug (e.g. /api/courses/{slug})
#[derive(Deserialize)]
struct CoursePath {
    slug: String,
}

#[derive(Serialize)]
struct HoleStatus {
    index: usize,
    par: Option<u32>,
    has_scores: bool,
}

/// Round plus what the scorecard page shows next to it.
#[derive(Serialize)]
struct RoundView<'a> {
    round: &'a Round,
    totals: Vec<PlayerTotal>,
    has_any_score: bool,
    running_summary: String,
    holes: Vec<HoleStatus>,
}

impl<'a> RoundView<'a> {
    fn new(round: &'a Round, course: &Course) -> Self {
        let totals = compute_totals(round, course.holes);
        let any = has_any_score(round);
        let holes = (0..course.holes)
            .map(|index| HoleStatus {
                index,
                par: par_for_hole(course, index),
                has_scores: hole_has_scores(round, index),
            })
            .collect();
        Self {
            running_summary: running_summary(&totals, any),
            round,
            totals,
            has_any_score: any,
            holes,
        }
    }
}

fn error_json(status: actix_web::http::StatusCode, msg: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({ "error": msg.to_string() }))
}

fn find_course<'a>(state: &'a AppContext, slug: &str) -> Result<&'a Course, HttpResponse> {
    state
        .catalog
        .find(slug)
        .ok_or_else(|| error_json(actix_web::http::StatusCode::NOT_FOUND, "Course not found"))
}

fn load_round(state: &AppContext, course: &Course) -> Result<Round, HttpResponse> {
    let mut g = state.lock_active()?;
    slot(&mut g, &state.rounds, &course.slug)
        .clone()
        .ok_or_else(|| error_json(actix_web::http::StatusCode::NOT_FOUND, "No round in progress"))
}

/// Apply `edit` to the in-memory round, then write it through. A failed write only logs.
fn edit_round(
    state: &AppContext,
    slug: &str,
    edit: impl FnOnce(&Round) -> Result<Round, RoundError>,
) -> HttpResponse {
    let course = match find_course(state, slug) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let mut g = match state.lock_active() {
        Ok(guard) => guard,
        Err(resp) => return resp,
    };
    let current = slot(&mut g, &state.rounds, &course.slug);
    let next = match current.as_ref().map(edit) {
        Some(Ok(next)) => next,
        Some(Err(e)) => return error_json(actix_web::http::StatusCode::BAD_REQUEST, e),
        None => {
            return error_json(actix_web::http::StatusCode::NOT_FOUND, "No round in progress")
        }
    };
    *current = Some(next.clone());
    state.rounds.save(&course.slug, &next);
    HttpResponse::Ok().json(RoundView::new(&next, course))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "minicard",
    })
}

/// Whether saved rounds will survive a restart.
#[get("/api/storage")]
async fn api_storage(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "available": state.rounds.is_available() }))
}

#[get("/api/courses")]
async fn api_list_courses(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(state.catalog.all())
}

/// Course page: course, its saved round (if any) and the screen to open on.
#[get("/api/courses/{slug}")]
async fn api_get_course(state: AppState, path: Path<CoursePath>) -> HttpResponse {
    let course = match find_course(&state, &path.slug) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let round = match state.lock_active() {
        Ok(mut g) => slot(&mut g, &state.rounds, &course.slug).clone(),
        Err(resp) => return resp,
    };
    HttpResponse::Ok().json(serde_json::json!({
        "course": course,
        "par_total": par_total(course),
        "screen": Screen::on_open(round.is_some()),
        "round": round.as_ref().map(|r| RoundView::new(r, course)),
    }))
}

/// Start a new round: replace the active one in memory, then wipe and save in storage.
#[post("/api/courses/{slug}/round")]
async fn api_start_round(
    state: AppState,
    path: Path<CoursePath>,
    body: Json<StartRoundBody>,
) -> HttpResponse {
    let course = match find_course(&state, &path.slug) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let round = match begin_round(&body.names, course, &mut UuidIds) {
        Ok(r) => r,
        Err(e) => return error_json(actix_web::http::StatusCode::BAD_REQUEST, e),
    };
    let mut g = match state.lock_active() {
        Ok(guard) => guard,
        Err(resp) => return resp,
    };
    g.insert(course.slug.clone(), Some(round.clone()));
    state.rounds.clear(&course.slug);
    state.rounds.save(&course.slug, &round);
    log::info!(
        "New round on {} with {} player(s)",
        course.slug,
        round.players.len()
    );
    HttpResponse::Ok().json(RoundView::new(&round, course))
}

/// Reset: drop the saved round. The page goes back to collecting players.
#[delete("/api/courses/{slug}/round")]
async fn api_reset_round(state: AppState, path: Path<CoursePath>) -> HttpResponse {
    let course = match find_course(&state, &path.slug) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let mut g = match state.lock_active() {
        Ok(guard) => guard,
        Err(resp) => return resp,
    };
    g.insert(course.slug.clone(), None);
    state.rounds.clear(&course.slug);
    HttpResponse::Ok().json(serde_json::json!({ "screen": Screen::Landing.start_new_round() }))
}

#[put("/api/courses/{slug}/round/score")]
async fn api_set_score(
    state: AppState,
    path: Path<CoursePath>,
    body: Json<SetScoreBody>,
) -> HttpResponse {
    edit_round(&state, &path.slug, |round| {
        set_score(round, body.hole, &body.player_id, body.value)
    })
}

/// The +/- buttons.
#[post("/api/courses/{slug}/round/adjust")]
async fn api_adjust_score(
    state: AppState,
    path: Path<CoursePath>,
    body: Json<AdjustScoreBody>,
) -> HttpResponse {
    edit_round(&state, &path.slug, |round| {
        adjust_score(round, body.hole, &body.player_id, body.delta)
    })
}

#[get("/api/courses/{slug}/round/leaderboard")]
async fn api_leaderboard(state: AppState, path: Path<CoursePath>) -> HttpResponse {
    let course = match find_course(&state, &path.slug) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let round = match load_round(&state, course) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let totals = compute_totals(&round, course.holes);
    HttpResponse::Ok().json(compute_leaderboard(&totals))
}

#[get("/api/courses/{slug}/round/summary")]
async fn api_summary(state: AppState, path: Path<CoursePath>) -> HttpResponse {
    let course = match find_course(&state, &path.slug) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let round = match load_round(&state, course) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let totals = compute_totals(&round, course.holes);
    HttpResponse::Ok().json(serde_json::json!({
        "par_total": par_total(course),
        "entries": compute_summary(&totals, course),
    }))
}

/// Share text for the client's share sheet / clipboard.
#[get("/api/courses/{slug}/round/share")]
async fn api_share(state: AppState, path: Path<CoursePath>) -> HttpResponse {
    let course = match find_course(&state, &path.slug) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let round = match load_round(&state, course) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let totals = compute_totals(&round, course.holes);
    HttpResponse::Ok().json(share_text(course, &compute_summary(&totals, course)))
}

#[get("/api/courses/{slug}/round/export.csv")]
async fn api_export_csv(state: AppState, path: Path<CoursePath>) -> HttpResponse {
    let course = match find_course(&state, &path.slug) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let round = match load_round(&state, course) {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    match export_csv(&round, course) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(body),
        Err(e) => {
            log::warn!("CSV export failed for {}: {}", course.slug, e);
            error_json(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR, e)
        }
    }
}

fn routes(cfg: &mut ServiceConfig) {
    cfg.service(api_health)
        .service(api_storage)
        .service(api_list_courses)
        .service(api_get_course)
        .service(api_start_round)
        .service(api_reset_round)
        .service(api_set_score)
        .service(api_adjust_score)
        .service(api_leaderboard)
        .service(api_summary)
        .service(api_share)
        .service(api_export_csv);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let store = FileStore::new(&config.data_file);
    log::info!("Saving rounds to {}", store.path().display());
    let rounds: RoundGateway<Box<dyn KeyValueStore>> = RoundGateway::new(Box::new(store));
    if !rounds.is_available() {
        log::warn!("Storage is not writable; scores will not persist after restart");
    }
    let state = Data::new(AppContext::new(Catalog::builtin(), rounds));

    log::info!("Starting server at http://{}:{}", config.host, config.port);
    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use minicard::{MemoryStore, StorageError};
    use serde_json::{json, Value};

    const COURSE: &str = "/api/courses/desert-dunes";

    /// Reads find nothing, writes are refused.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("read-only".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("read-only".to_string()))
        }
    }

    fn state_with(store: Box<dyn KeyValueStore>) -> AppState {
        Data::new(AppContext::new(Catalog::builtin(), RoundGateway::new(store)))
    }

    #[actix_web::test]
    async fn score_edits_are_saved_immediately() {
        let state = state_with(Box::new(MemoryStore::new()));
        let app = test::init_service(App::new().app_data(state.clone()).configure(routes)).await;

        let req = test::TestRequest::post()
            .uri(&format!("{COURSE}/round"))
            .set_json(json!({ "names": [" Ana ", "", "Ben"] }))
            .to_request();
        let view: Value = test::call_and_read_body_json(&app, req).await;
        let ana = view["round"]["players"][0]["id"].as_str().unwrap().to_string();
        assert_eq!(view["round"]["players"].as_array().unwrap().len(), 2);
        assert!(state.rounds.load("desert-dunes").is_some());

        let req = test::TestRequest::put()
            .uri(&format!("{COURSE}/round/score"))
            .set_json(json!({ "hole": 2, "player_id": ana, "value": 4 }))
            .to_request();
        assert!(test::call_service(&app, req).await.status().is_success());
        let saved = state.rounds.load("desert-dunes").unwrap();
        assert_eq!(saved.score(2, &ana), Some(4));

        let req = test::TestRequest::post()
            .uri(&format!("{COURSE}/round/adjust"))
            .set_json(json!({ "hole": 2, "player_id": ana, "delta": -1 }))
            .to_request();
        assert!(test::call_service(&app, req).await.status().is_success());
        let saved = state.rounds.load("desert-dunes").unwrap();
        assert_eq!(saved.score(2, &ana), Some(3));
    }

    #[actix_web::test]
    async fn round_keeps_working_when_storage_fails() {
        let state = state_with(Box::new(ReadOnlyStore));
        let app = test::init_service(App::new().app_data(state.clone()).configure(routes)).await;

        let req = test::TestRequest::get().uri("/api/storage").to_request();
        let storage: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(storage["available"], json!(false));

        let req = test::TestRequest::post()
            .uri(&format!("{COURSE}/round"))
            .set_json(json!({ "names": ["Ana", "Ben"] }))
            .to_request();
        let view: Value = test::call_and_read_body_json(&app, req).await;
        let ben = view["round"]["players"][1]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("{COURSE}/round/score"))
            .set_json(json!({ "hole": 0, "player_id": ben, "value": 3 }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("{COURSE}/round/leaderboard"))
            .to_request();
        let board: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(board[0]["player"]["name"], json!("Ana"));
        assert_eq!(board[1]["player"]["name"], json!("Ben"));
        assert_eq!(board[1]["total"], json!(3));
        assert_eq!(board[1]["behind"], json!(3));

        let req = test::TestRequest::delete().uri(&format!("{COURSE}/round")).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        let req = test::TestRequest::get()
            .uri(&format!("{COURSE}/round/summary"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn reset_wins_over_a_stale_saved_round() {
        let state = state_with(Box::new(MemoryStore::new()));
        let app = test::init_service(App::new().app_data(state.clone()).configure(routes)).await;

        let req = test::TestRequest::post()
            .uri(&format!("{COURSE}/round"))
            .set_json(json!({ "names": ["Ana"] }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::delete().uri(&format!("{COURSE}/round")).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        assert!(state.rounds.load("desert-dunes").is_none());

        let req = test::TestRequest::get().uri(COURSE).to_request();
        let page: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page["screen"], json!("landing"));
        assert_eq!(page["round"], Value::Null);
    }

    #[actix_web::test]
    async fn bad_edits_are_rejected_and_not_saved() {
        let state = state_with(Box::new(MemoryStore::new()));
        let app = test::init_service(App::new().app_data(state.clone()).configure(routes)).await;

        let req = test::TestRequest::post()
            .uri(&format!("{COURSE}/round"))
            .set_json(json!({ "names": ["  "] }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri(&format!("{COURSE}/round"))
            .set_json(json!({ "names": ["Ana"] }))
            .to_request();
        let view: Value = test::call_and_read_body_json(&app, req).await;
        let ana = view["round"]["players"][0]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("{COURSE}/round/score"))
            .set_json(json!({ "hole": 9, "player_id": ana, "value": 2 }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
        assert!(!minicard::has_any_score(&state.rounds.load("desert-dunes").unwrap()));

        let req = test::TestRequest::get().uri("/api/courses/nowhere").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
