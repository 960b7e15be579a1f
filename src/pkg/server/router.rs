use axum::middleware::from_fn;
use axum::routing::post;
use axum::{routing::get, Router};

use super::handlers::probes::{healthz, livez};
use super::handlers::{applications, dashboard, jobs, saved, sitemap};
use super::middlewares::session;
use super::state::AppState;

pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/jobs", get(jobs::list).post(jobs::create))
        .route("/jobs/:id", get(jobs::retrieve).delete(jobs::delete))
        .route("/saved", get(saved::list))
        .route("/saved/:id", post(saved::toggle))
        .route(
            "/applications",
            get(applications::list).post(applications::create),
        )
        .route(
            "/applications/:id",
            get(applications::retrieve).delete(applications::delete),
        )
        .route("/dashboard/seeker", get(dashboard::seeker))
        .route("/dashboard/employer", get(dashboard::employer))
        .layer(from_fn(session::establish))
        .route("/sitemap.xml", get(sitemap::sitemap_xml))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state)
}
