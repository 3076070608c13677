//! In-process fake of the members api for tests.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Timelike};
use serde::Deserialize;
use serde_json::json;
use tokio::{net::TcpListener, sync::Mutex, task::JoinHandle};

use gym_data::{Member, PlanType, Status};

use crate::{connection::DEFAULT_TIMEOUT, Connection};

/// Stops the fake backend when dropped.
pub struct TestServer {
    handle: JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[derive(Default)]
struct Roster {
    members: Vec<Member>,
    next_id: u32,
}

type Backend = Arc<Mutex<Roster>>;

#[derive(Deserialize)]
struct SearchParams {
    search: Option<String>,
}

fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"success": false, "error": "Recurso no encontrado"})),
    )
}

fn conflict(error: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"success": false, "error": error})),
    )
}

/// Check dni and email uniqueness against all other members.
fn duplicate(roster: &Roster, member: &Member, id: Option<u32>) -> Option<&'static str> {
    let others: Vec<&Member> = roster
        .members
        .iter()
        .filter(|m| Some(m.id) != id)
        .collect();
    if others.iter().any(|m| m.dni == member.dni) {
        return Some("Ya existe un miembro con este DNI");
    }
    if others.iter().any(|m| m.email == member.email) {
        return Some("Ya existe un miembro con este email");
    }
    None
}

async fn list_members(
    State(backend): State<Backend>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let roster = backend.lock().await;
    let search = params.search.unwrap_or_default().to_lowercase();
    let mut members: Vec<Member> = roster
        .members
        .iter()
        .filter(|m| {
            search.is_empty()
                || [&m.first_name, &m.last_name, &m.dni, &m.email]
                    .iter()
                    .any(|value| value.to_lowercase().contains(&search))
        })
        .cloned()
        .collect();
    // Most recently registered first
    members.sort_by(|a, b| b.id.cmp(&a.id));
    Json(json!({"success": true, "members": members}))
}

async fn get_member(State(backend): State<Backend>, Path(id): Path<u32>) -> impl IntoResponse {
    let roster = backend.lock().await;
    match roster.members.iter().find(|m| m.id == id) {
        Some(member) => (
            StatusCode::OK,
            Json(json!({"success": true, "member": member})),
        ),
        None => not_found(),
    }
}

/// Store a new member, assigning id and registration time.
fn register(roster: &mut Roster, mut member: Member) -> Result<Member, &'static str> {
    if let Some(error) = duplicate(roster, &member, None) {
        return Err(error);
    }
    roster.next_id += 1;
    member.id = roster.next_id;
    let now = chrono::Local::now().naive_local();
    member.registered_at = now.with_nanosecond(0);
    roster.members.push(member.clone());
    Ok(member)
}

async fn create_member(
    State(backend): State<Backend>,
    Json(member): Json<Member>,
) -> impl IntoResponse {
    let mut roster = backend.lock().await;
    match register(&mut roster, member) {
        Ok(member) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Miembro registrado exitosamente",
                "member": member,
            })),
        ),
        Err(error) => conflict(error),
    }
}

/// Create reply carrying only the acknowledgement
async fn create_member_terse(
    State(backend): State<Backend>,
    Json(member): Json<Member>,
) -> impl IntoResponse {
    let mut roster = backend.lock().await;
    match register(&mut roster, member) {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Miembro registrado exitosamente",
            })),
        ),
        Err(error) => conflict(error),
    }
}

async fn update_member(
    State(backend): State<Backend>,
    Path(id): Path<u32>,
    Json(update): Json<Member>,
) -> impl IntoResponse {
    let mut roster = backend.lock().await;
    if !roster.members.iter().any(|m| m.id == id) {
        return not_found();
    }
    if let Some(error) = duplicate(&roster, &update, Some(id)) {
        return conflict(error);
    }
    let Some(member) = roster.members.iter_mut().find(|m| m.id == id) else {
        return not_found();
    };
    *member = Member {
        id,
        registered_at: member.registered_at,
        ..update
    };
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Miembro actualizado exitosamente",
            "member": member,
        })),
    )
}

async fn delete_member(State(backend): State<Backend>, Path(id): Path<u32>) -> impl IntoResponse {
    let mut roster = backend.lock().await;
    let Some(pos) = roster.members.iter().position(|m| m.id == id) else {
        return not_found();
    };
    let member = roster.members.remove(pos);
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": format!("Miembro {} eliminado exitosamente", member.full_name()),
        })),
    )
}

/// The members api backed by an in-memory roster
pub fn backend() -> Router {
    Router::new()
        .route("/api/members", get(list_members).post(create_member))
        .route(
            "/api/members/:id",
            get(get_member).put(update_member).delete(delete_member),
        )
        .with_state(Backend::default())
}

/// Like `backend`, but create replies leave out the
/// stored member.
pub fn terse_backend() -> Router {
    Router::new()
        .route("/api/members", get(list_members).post(create_member_terse))
        .route(
            "/api/members/:id",
            get(get_member).put(update_member).delete(delete_member),
        )
        .with_state(Backend::default())
}

/// A backend answering every request with a gateway error page
pub fn broken_backend() -> Router {
    Router::new().fallback(|| async {
        (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>")
    })
}

/// Serve a router on an ephemeral local port.
pub async fn serve(router: Router) -> (TestServer, Connection) {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    let conn = Connection::open(&format!("http://{}", addr), DEFAULT_TIMEOUT).unwrap();
    (TestServer { handle }, conn)
}

/// Open a connection to a fresh fake backend.
/// The roster will be empty on each open.
pub async fn open_test() -> (TestServer, Connection) {
    serve(backend()).await
}

/// A connection to a port nobody listens on
pub async fn open_unreachable() -> Connection {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Connection::open(&format!("http://{}", addr), DEFAULT_TIMEOUT).unwrap()
}

/// A complete member record without id
pub fn test_member(first_name: &str, dni: &str) -> Member {
    Member {
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        dni: dni.to_string(),
        email: format!("{}@gym.test", first_name.to_lowercase()),
        phone: "555-0100".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        address: "Calle Falsa 123".to_string(),
        plan: PlanType::Mensual,
        membership_start: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        membership_end: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
        status: Status::Activo,
        ..Default::default()
    }
}
