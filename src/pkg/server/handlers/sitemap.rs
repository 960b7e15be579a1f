use axum::{extract::State, http::header::CONTENT_TYPE, response::IntoResponse};
use chrono::Utc;

use crate::{
    pkg::{
        internal::{adaptors::jobs::selectors::JobSelector, sitemap},
        server::state::{AppState, GetTxn},
    },
    prelude::Result,
};

pub async fn sitemap_xml(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let board = state.board.read_txn().await;
    let jobs = JobSelector::new(&board).get_all();
    let xml = sitemap::build(
        &state.base_url,
        jobs.iter().map(|job| job.id.as_str()),
        Utc::now().date_naive(),
    );
    tracing::debug!("rendered sitemap with {} job urls", jobs.len());
    Ok(([(CONTENT_TYPE, "application/xml")], xml))
}
