//! HTTP API for the Org Engine.
//!
//! This module exposes a minimal REST API around the organisation
//! directory using the [`axum`](https://crates.io/crates/axum)
//! framework.  Consumers list collections, apply mutations and read
//! the derived metrics as JSON.  After every mutation the full
//! directory state is handed to the configured [`SnapshotStore`];
//! that hand-off is fire-and-forget, so a persistence failure is
//! logged and the mutation still succeeds.

use crate::directory::Directory;
use crate::metrics::derive_metrics;
use crate::models::{
    Company, CompanyPatch, DepartmentPatch, DesignationPatch, EmployeePatch, HolidayPatch,
    LocationPatch, NewDepartment, NewDesignation, NewEmployee, NewHoliday, NewLocation, NewPolicy,
    NewTeam, PolicyPatch, TeamPatch,
};
use crate::seed;
use crate::snapshot::SnapshotStore;
use anyhow::Result;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Application state shared across requests.
pub struct AppState {
    pub directory: RwLock<Directory>,
    pub snapshots: Option<Arc<dyn SnapshotStore>>,
}

impl AppState {
    /// Hands the current state to the snapshot store, if one is
    /// configured.  Failures are logged, never propagated.
    fn persist(&self, dir: &Directory) {
        if let Some(store) = &self.snapshots {
            if let Err(err) = store.persist(dir) {
                warn!("failed to persist directory snapshot: {err}");
            }
        }
    }
}

/// Build the API router, seeding the directory from the last snapshot
/// when one exists.  Returns the router and a handle to the state.
pub fn build_router(snapshots: Option<Arc<dyn SnapshotStore>>) -> Result<(Router, Arc<AppState>)> {
    let directory = match snapshots.as_deref() {
        Some(store) => match store.load()? {
            Some(dir) => {
                info!("restored directory snapshot ({} employees)", dir.employees.len());
                dir
            }
            None => {
                info!("no snapshot found, starting from seed data");
                seed::default_directory()
            }
        },
        None => seed::default_directory(),
    };
    let state = Arc::new(AppState {
        directory: RwLock::new(directory),
        snapshots,
    });
    let router = Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route("/api/employees/import", post(import_employees))
        .route(
            "/api/employees/:id",
            patch(update_employee).delete(remove_employee),
        )
        .route(
            "/api/departments",
            get(list_departments).post(create_department),
        )
        .route(
            "/api/departments/:id",
            patch(update_department).delete(remove_department),
        )
        .route(
            "/api/designations",
            get(list_designations).post(create_designation),
        )
        .route(
            "/api/designations/:id",
            patch(update_designation).delete(remove_designation),
        )
        .route("/api/locations", get(list_locations).post(create_location))
        .route(
            "/api/locations/:id",
            patch(update_location).delete(remove_location),
        )
        .route("/api/teams", get(list_teams).post(create_team))
        .route("/api/teams/:id", patch(update_team).delete(remove_team))
        .route("/api/teams/:id/members", post(add_team_member))
        .route(
            "/api/teams/:id/members/:employee_id",
            delete(remove_team_member),
        )
        .route("/api/holidays", get(list_holidays).post(create_holiday))
        .route(
            "/api/holidays/:id",
            patch(update_holiday).delete(remove_holiday),
        )
        .route("/api/policies", get(list_policies).post(create_policy))
        .route(
            "/api/policies/:id",
            patch(update_policy).delete(remove_policy),
        )
        .route("/api/company", get(get_company).patch(update_company))
        .route("/api/metrics", get(get_metrics))
        .with_state(state.clone());
    Ok((router, state))
}

fn created(id: String) -> impl IntoResponse {
    (StatusCode::CREATED, Json(json!({ "id": id })))
}

// --- employees ---

async fn list_employees(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.directory.read().await.employees.clone())
}

async fn create_employee(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewEmployee>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    let id = dir.add_employee(new);
    state.persist(&dir);
    created(id)
}

async fn import_employees(
    State(state): State<Arc<AppState>>,
    Json(batch): Json<Vec<NewEmployee>>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    let ids = dir.bulk_import_employees(batch);
    state.persist(&dir);
    (StatusCode::CREATED, Json(json!({ "ids": ids })))
}

async fn update_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<EmployeePatch>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    dir.update_employee(&id, &patch);
    state.persist(&dir);
    StatusCode::NO_CONTENT
}

async fn remove_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    dir.delete_employee(&id);
    state.persist(&dir);
    StatusCode::NO_CONTENT
}

// --- departments ---

async fn list_departments(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.directory.read().await.departments.clone())
}

async fn create_department(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewDepartment>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    let id = dir.add_department(new);
    state.persist(&dir);
    created(id)
}

async fn update_department(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<DepartmentPatch>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    dir.update_department(&id, &patch);
    state.persist(&dir);
    StatusCode::NO_CONTENT
}

async fn remove_department(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    dir.delete_department(&id);
    state.persist(&dir);
    StatusCode::NO_CONTENT
}

// --- designations ---

async fn list_designations(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.directory.read().await.designations.clone())
}

async fn create_designation(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewDesignation>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    let id = dir.add_designation(new);
    state.persist(&dir);
    created(id)
}

async fn update_designation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<DesignationPatch>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    dir.update_designation(&id, &patch);
    state.persist(&dir);
    StatusCode::NO_CONTENT
}

async fn remove_designation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    dir.delete_designation(&id);
    state.persist(&dir);
    StatusCode::NO_CONTENT
}

// --- locations ---

async fn list_locations(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.directory.read().await.locations.clone())
}

async fn create_location(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewLocation>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    let id = dir.add_location(new);
    state.persist(&dir);
    created(id)
}

async fn update_location(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<LocationPatch>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    dir.update_location(&id, &patch);
    state.persist(&dir);
    StatusCode::NO_CONTENT
}

async fn remove_location(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    dir.delete_location(&id);
    state.persist(&dir);
    StatusCode::NO_CONTENT
}

// --- teams ---

/// Body for adding a member to a team.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MemberRef {
    employee_id: String,
}

async fn list_teams(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.directory.read().await.teams.clone())
}

async fn create_team(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewTeam>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    let id = dir.add_team(new);
    state.persist(&dir);
    created(id)
}

async fn update_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<TeamPatch>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    dir.update_team(&id, &patch);
    state.persist(&dir);
    StatusCode::NO_CONTENT
}

async fn remove_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    dir.delete_team(&id);
    state.persist(&dir);
    StatusCode::NO_CONTENT
}

async fn add_team_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(member): Json<MemberRef>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    dir.add_team_member(&id, &member.employee_id);
    state.persist(&dir);
    StatusCode::NO_CONTENT
}

async fn remove_team_member(
    State(state): State<Arc<AppState>>,
    Path((id, employee_id)): Path<(String, String)>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    dir.remove_team_member(&id, &employee_id);
    state.persist(&dir);
    StatusCode::NO_CONTENT
}

// --- holidays ---

async fn list_holidays(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.directory.read().await.holidays.clone())
}

async fn create_holiday(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewHoliday>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    let id = dir.add_holiday(new);
    state.persist(&dir);
    created(id)
}

async fn update_holiday(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<HolidayPatch>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    dir.update_holiday(&id, &patch);
    state.persist(&dir);
    StatusCode::NO_CONTENT
}

async fn remove_holiday(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    dir.delete_holiday(&id);
    state.persist(&dir);
    StatusCode::NO_CONTENT
}

// --- policies ---

async fn list_policies(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.directory.read().await.policies.clone())
}

async fn create_policy(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewPolicy>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    let id = dir.add_policy(new);
    state.persist(&dir);
    created(id)
}

async fn update_policy(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<PolicyPatch>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    dir.update_policy(&id, &patch);
    state.persist(&dir);
    StatusCode::NO_CONTENT
}

async fn remove_policy(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    dir.delete_policy(&id);
    state.persist(&dir);
    StatusCode::NO_CONTENT
}

// --- company & metrics ---

async fn get_company(State(state): State<Arc<AppState>>) -> Json<Company> {
    Json(state.directory.read().await.company.clone())
}

async fn update_company(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<CompanyPatch>,
) -> impl IntoResponse {
    let mut dir = state.directory.write().await;
    dir.update_company(&patch);
    state.persist(&dir);
    StatusCode::NO_CONTENT
}

async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(derive_metrics(&*state.directory.read().await))
}

/// Launch the API server.  This function builds the router, binds to
/// the supplied address and blocks until the server terminates.
pub async fn serve(addr: &str, snapshots: Option<Arc<dyn SnapshotStore>>) -> Result<()> {
    let (router, _state) = build_router(snapshots)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("server listening on {addr}");
    axum::serve(listener, router).await?;
    Ok(())
}
