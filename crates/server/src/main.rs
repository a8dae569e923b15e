// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod content;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use clap::Parser;
use content::{SiteContent, site_content};
use devcon_hub_analytics::{ExportError, committee_export_rows, skills_export_rows, write_csv};
use devcon_hub_api::{
    AnalyticsResponse, ApiError, DashboardResponse, ErrorBody, FunnelPlanResponse,
    MemberLookupResponse, MemberSummary, SubmitApplicationRequest, SubmitApplicationResponse,
    fetch_analytics, fetch_dashboard, funnel_plan, lookup_member, submit_application,
};
use devcon_hub_domain::{ApplicationRecord, EventInfo, FieldErrors, event_catalog};
use devcon_hub_persistence::{Persistence, PersistenceError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// DEVCON Hub Server - HTTP server for the volunteer funnel and admin
/// dashboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for applications and members.
    persistence: Arc<Mutex<Persistence>>,
}

/// Query parameters for the member lookup endpoint.
#[derive(Debug, Deserialize)]
struct MemberLookupQuery {
    /// The email to look up.
    email: String,
}

/// Query parameters for the funnel plan endpoint.
#[derive(Debug, Deserialize)]
struct FunnelPlanQuery {
    /// The event code from the route.
    event: Option<String>,
    /// The volunteer-type code from the route.
    #[serde(rename = "type")]
    volunteer_type: Option<String>,
}

/// Query parameters for export endpoints.
#[derive(Debug, Deserialize)]
struct ExportQuery {
    /// The download filename; defaulted per export kind when absent.
    filename: Option<String>,
}

/// API response for delete operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DeleteResponse {
    /// Success indicator.
    success: bool,
    /// A confirmation message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
    /// Field-scoped validation errors, when applicable.
    fields: Option<FieldErrors>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorBody> = Json(ErrorBody {
            error: true,
            message: self.message,
            fields: self.fields,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
                fields: None,
            },
            ApiError::ValidationFailed { ref errors } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
                fields: Some(errors.clone()),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
                fields: None,
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
                fields: None,
            },
            ApiError::Backend { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
                fields: None,
            },
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        if matches!(err, PersistenceError::NotFound(_)) {
            return Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
                fields: None,
            };
        }
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
            fields: None,
        }
    }
}

impl From<ExportError> for HttpError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Empty => Self {
                status: StatusCode::NOT_FOUND,
                message: String::from("Nothing to export"),
                fields: None,
            },
            other => {
                error!(error = %other, "Export error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: format!("Export failed: {other}"),
                    fields: None,
                }
            }
        }
    }
}

/// Handler for GET `/site/content`.
///
/// The informational sections of the marketing site.
async fn handle_site_content() -> Json<SiteContent> {
    Json(site_content())
}

/// Handler for GET `/events`.
///
/// The event catalog with display metadata.
async fn handle_list_events() -> Json<&'static [EventInfo]> {
    Json(event_catalog())
}

/// Handler for GET `/funnel/plan`.
///
/// Reconstructs the funnel stage from the `event` and `type` query
/// parameters and returns the conditional field plan.
async fn handle_funnel_plan(
    Query(query): Query<FunnelPlanQuery>,
) -> Result<Json<FunnelPlanResponse>, HttpError> {
    let response: FunnelPlanResponse =
        funnel_plan(query.event.as_deref(), query.volunteer_type.as_deref())?;
    Ok(Json(response))
}

/// Handler for GET `/members/lookup`.
async fn handle_member_lookup(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<MemberLookupQuery>,
) -> Result<Json<MemberLookupResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: MemberLookupResponse = lookup_member(&mut persistence, &query.email)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/applications`.
///
/// The submission pipeline: validate, build one record, insert once.
async fn handle_submit_application(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<SubmitApplicationRequest>,
) -> Result<Json<SubmitApplicationResponse>, HttpError> {
    info!(event = request.event_code(), "Handling application submission");

    let mut persistence = app_state.persistence.lock().await;
    let response: SubmitApplicationResponse = submit_application(&mut persistence, &request)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/applications`.
///
/// Lists every application, newest first.
async fn handle_list_applications(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<ApplicationRecord>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let applications: Vec<ApplicationRecord> = persistence.list_applications()?;
    drop(persistence);

    Ok(Json(applications))
}

/// Handler for DELETE `/applications/{id}`.
///
/// The client confirms with the admin before issuing the call; the
/// delete itself is a single unconditional operation.
async fn handle_delete_application(
    AxumState(app_state): AxumState<AppState>,
    Path(application_id): Path<i64>,
) -> Result<Json<DeleteResponse>, HttpError> {
    info!(application_id, "Handling application delete");

    let mut persistence = app_state.persistence.lock().await;
    persistence.delete_application(application_id)?;
    drop(persistence);

    Ok(Json(DeleteResponse {
        success: true,
        message: format!("Application {application_id} deleted"),
    }))
}

/// Handler for GET `/members`.
async fn handle_list_members(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<MemberSummary>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let members: Vec<MemberSummary> = persistence
        .list_members()?
        .into_iter()
        .map(MemberSummary::from)
        .collect();
    drop(persistence);

    Ok(Json(members))
}

/// Handler for GET `/dashboard`.
///
/// The bulk fetch reports each collection's failure independently, so
/// this endpoint never fails wholesale.
async fn handle_dashboard(AxumState(app_state): AxumState<AppState>) -> Json<DashboardResponse> {
    let mut persistence = app_state.persistence.lock().await;
    let response: DashboardResponse = fetch_dashboard(&mut persistence);
    drop(persistence);

    Json(response)
}

/// Handler for GET `/analytics`.
async fn handle_analytics(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<AnalyticsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: AnalyticsResponse = fetch_analytics(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/export/{kind}`.
///
/// Produces a quoted CSV download of the requested data set. The
/// filename may be supplied by the caller; otherwise a dated default is
/// used.
async fn handle_export(
    AxumState(app_state): AxumState<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, HttpError> {
    info!(kind = %kind, "Handling CSV export");

    let mut persistence = app_state.persistence.lock().await;
    let (csv, default_name): (String, &'static str) = match kind.as_str() {
        "applications" => (
            write_csv(&persistence.list_applications()?)?,
            "volunteer-applications",
        ),
        "members" => {
            let members: Vec<MemberSummary> = persistence
                .list_members()?
                .into_iter()
                .map(MemberSummary::from)
                .collect();
            (write_csv(&members)?, "community-members")
        }
        "skills" => {
            let applications: Vec<ApplicationRecord> = persistence.list_applications()?;
            let members = persistence.list_members()?;
            (
                write_csv(&skills_export_rows(&applications, &members))?,
                "skills-analysis",
            )
        }
        "committees" => {
            let applications: Vec<ApplicationRecord> = persistence.list_applications()?;
            (
                write_csv(&committee_export_rows(&applications))?,
                "committee-distribution",
            )
        }
        other => {
            return Err(HttpError {
                status: StatusCode::NOT_FOUND,
                message: format!("Unknown export kind: {other}"),
                fields: None,
            });
        }
    };
    drop(persistence);

    let filename: String = query.filename.map_or_else(
        || format!("{default_name}-{}.csv", time::OffsetDateTime::now_utc().date()),
        |name| name.replace('"', ""),
    );

    let headers = [
        (
            header::CONTENT_TYPE,
            String::from("text/csv; charset=utf-8"),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, csv).into_response())
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/site/content", get(handle_site_content))
        .route("/events", get(handle_list_events))
        .route("/funnel/plan", get(handle_funnel_plan))
        .route("/members/lookup", get(handle_member_lookup))
        .route("/applications", post(handle_submit_application))
        .route("/applications", get(handle_list_applications))
        .route("/applications/{id}", delete(handle_delete_application))
        .route("/members", get(handle_list_members))
        .route("/dashboard", get(handle_dashboard))
        .route("/analytics", get(handle_analytics))
        .route("/export/{kind}", get(handle_export))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing DEVCON Hub Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use devcon_hub_domain::Member;
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }

    /// Helper to seed a roster member directly through persistence.
    async fn seed_member(app_state: &AppState, email: &str) {
        let member: Member = Member::new(
            String::from("Ben"),
            String::from("Santos"),
            email.to_string(),
            Some(String::from("+63 900 000 0000")),
            Some(String::from("Volunteered at GeekUp 2023")),
            Some(String::from("Java, DevOps")),
        );
        let mut persistence = app_state.persistence.lock().await;
        persistence
            .insert_member(&member)
            .expect("Failed to seed member");
    }

    /// Helper to build a complete new-volunteer submission body.
    fn new_volunteer_body() -> String {
        serde_json::json!({
            "volunteer_type": "new-volunteer",
            "event": "devcon-geekup",
            "first_name": "Ana",
            "last_name": "Reyes",
            "email": "ana.reyes@example.com",
            "phone": "+63 912 345 6789",
            "facebook_url": "https://facebook.com/ana.reyes",
            "school_organization": "MSU-IIT",
            "field_of_interest": "web-development",
            "committee": "registration",
            "skills": ["Python", "React"],
            "team_preferences": ["programs"],
            "education_level": "3rd-year",
            "motivation": "I want to help the community grow."
        })
        .to_string()
    }

    async fn get(app: Router, uri: &str) -> (HttpStatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status: HttpStatusCode = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    async fn post_json(app: Router, uri: &str, body: String) -> (HttpStatusCode, Vec<u8>) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status: HttpStatusCode = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_site_content_serves_the_informational_sections() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = get(app, "/site/content").await;

        assert_eq!(status, HttpStatusCode::OK);
        let content: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            content["hero"]["headline"],
            "Building a future-ready tech community"
        );
        assert_eq!(content["footer"]["heading"], "DEVCON Iligan");
    }

    #[tokio::test]
    async fn test_event_catalog_lists_both_events() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = get(app, "/events").await;

        assert_eq!(status, HttpStatusCode::OK);
        let events: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(events.as_array().unwrap().len(), 2);
        assert_eq!(events[0]["display_name"], "DEVCON GeekUp");
    }

    #[tokio::test]
    async fn test_funnel_plan_follows_route_parameters() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) =
            get(app, "/funnel/plan?event=devcon-geekup&type=new-volunteer").await;

        assert_eq!(status, HttpStatusCode::OK);
        let plan: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(plan["plan"]["stage"], "FillingForm");
        let committees = plan["options"]["committees"].as_array().unwrap();
        assert!(
            committees
                .iter()
                .any(|item| item["value"] == "registration")
        );
    }

    #[tokio::test]
    async fn test_funnel_plan_rejects_unknown_event() {
        let app: Router = build_router(create_test_app_state());

        let (status, _) = get(app, "/funnel/plan?event=hacknight").await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_submission_persists_and_lists() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let (status, body) = post_json(app.clone(), "/applications", new_volunteer_body()).await;
        assert_eq!(status, HttpStatusCode::OK);
        let response: SubmitApplicationResponse = serde_json::from_slice(&body).unwrap();
        assert!(response.success);
        assert_eq!(response.stage, "Submitted");

        let (status, body) = get(app, "/applications").await;
        assert_eq!(status, HttpStatusCode::OK);
        let listed: Vec<ApplicationRecord> = serde_json::from_slice(&body).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].email, "ana.reyes@example.com");
        assert!(listed[0].created_at.is_some());
    }

    #[tokio::test]
    async fn test_invalid_submission_returns_field_errors() {
        let app: Router = build_router(create_test_app_state());
        let body: String = serde_json::json!({
            "volunteer_type": "new-volunteer",
            "event": "devcon-geekup",
            "first_name": "",
            "last_name": "Reyes",
            "email": "not-an-email",
            "facebook_url": "",
            "school_organization": "MSU-IIT",
            "field_of_interest": "web-development",
            "committee": "registration",
            "skills": [],
            "team_preferences": ["programs"],
            "motivation": ""
        })
        .to_string();

        let (status, body) = post_json(app, "/applications", body).await;

        assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
        let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["error"], true);
        assert_eq!(
            error["fields"]["email"],
            "Please enter a valid email address"
        );
        assert_eq!(error["fields"]["firstName"], "First name is required");
        assert_eq!(
            error["fields"]["skills"],
            "Please select at least one skill"
        );
    }

    #[tokio::test]
    async fn test_member_submission_requires_a_roster_match() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());
        let body: String = serde_json::json!({
            "volunteer_type": "existing-member",
            "event": "campus-devcon",
            "member_email": "ben@example.com",
            "committee": "student-mentor"
        })
        .to_string();

        // Unmatched: blocked with a memberSearch validation error.
        let (status, response) = post_json(app.clone(), "/applications", body.clone()).await;
        assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
        let error: serde_json::Value = serde_json::from_slice(&response).unwrap();
        assert_eq!(
            error["fields"]["memberSearch"],
            "No member found with that email"
        );

        // Matched: submission succeeds and copies the roster fields.
        seed_member(&app_state, "ben@example.com").await;
        let (status, _) = post_json(app.clone(), "/applications", body).await;
        assert_eq!(status, HttpStatusCode::OK);

        let (_, listed) = get(app, "/applications").await;
        let applications: Vec<ApplicationRecord> = serde_json::from_slice(&listed).unwrap();
        assert_eq!(applications[0].first_name, "Ben");
        assert_eq!(applications[0].skills.as_deref(), Some("Java, DevOps"));
    }

    #[tokio::test]
    async fn test_member_lookup_distinguishes_found_from_not_found() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());
        seed_member(&app_state, "ben@example.com").await;

        let (status, body) = get(app.clone(), "/members/lookup?email=ben@example.com").await;
        assert_eq!(status, HttpStatusCode::OK);
        let found: MemberLookupResponse = serde_json::from_slice(&body).unwrap();
        assert!(found.found);

        let (status, body) = get(app, "/members/lookup?email=nobody@example.com").await;
        assert_eq!(status, HttpStatusCode::OK);
        let missing: MemberLookupResponse = serde_json::from_slice(&body).unwrap();
        assert!(!missing.found);
    }

    #[tokio::test]
    async fn test_delete_application_then_gone() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let (_, body) = post_json(app.clone(), "/applications", new_volunteer_body()).await;
        let response: SubmitApplicationResponse = serde_json::from_slice(&body).unwrap();

        let delete_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/applications/{}", response.application_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(delete_response.status(), HttpStatusCode::OK);

        let (_, listed) = get(app, "/applications").await;
        let applications: Vec<ApplicationRecord> = serde_json::from_slice(&listed).unwrap();
        assert!(applications.is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_application_returns_not_found() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/applications/4242")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_dashboard_reports_stats_and_collections() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());
        seed_member(&app_state, "ben@example.com").await;
        post_json(app.clone(), "/applications", new_volunteer_body()).await;

        let (status, body) = get(app, "/dashboard").await;

        assert_eq!(status, HttpStatusCode::OK);
        let dashboard: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(dashboard["stats"]["total_applications"], 1);
        assert_eq!(dashboard["stats"]["total_members"], 1);
        assert_eq!(dashboard["stats"]["geekup_applications"], 1);
        assert!(dashboard["applications"]["error"].is_null());
        assert_eq!(dashboard["members"]["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_analytics_reports_every_view() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());
        seed_member(&app_state, "ben@example.com").await;
        post_json(app.clone(), "/applications", new_volunteer_body()).await;

        let (status, body) = get(app, "/analytics").await;

        assert_eq!(status, HttpStatusCode::OK);
        let analytics: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let top_skills = analytics["top_skills"].as_array().unwrap();
        assert!(top_skills.iter().any(|entry| entry["skill"] == "Python"));
        assert_eq!(analytics["skill_buckets"].as_array().unwrap().len(), 3);
        assert_eq!(
            analytics["committee_distribution"][0]["label"],
            "Registration & Check-in"
        );
        assert_eq!(analytics["volunteer_type_stats"][0]["label"], "New Volunteers");
    }

    #[tokio::test]
    async fn test_export_applications_round_trips_through_a_csv_parser() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);
        post_json(app.clone(), "/applications", new_volunteer_body()).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/export/applications?filename=apps.csv")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let disposition: &str = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(disposition, "attachment; filename=\"apps.csv\"");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text: String = String::from_utf8(bytes.to_vec()).unwrap();
        // Every field is quoted.
        assert!(text.starts_with('"'));

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert!(headers.iter().any(|h| h == "email"));
        let rows: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_export_with_no_rows_returns_not_found() {
        let app: Router = build_router(create_test_app_state());

        let (status, _) = get(app, "/export/applications").await;

        assert_eq!(status, HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_export_kind_returns_not_found() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);
        post_json(app.clone(), "/applications", new_volunteer_body()).await;

        let (status, _) = get(app, "/export/spreadsheets").await;

        assert_eq!(status, HttpStatusCode::NOT_FOUND);
    }
}
