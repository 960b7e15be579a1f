use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;

use crate::{
    pkg::{
        internal::adaptors::{
            jobs::spec::JobEntry,
            saved::{mutators::SavedMutator, selectors::SavedSelector},
        },
        server::{
            middlewares::session::Session,
            state::{AppState, GetTxn},
        },
    },
    prelude::Result,
};

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SavedToggle {
    pub job_id: String,
    pub saved: bool,
}

pub async fn list(
    State(state): State<AppState>,
    Extension(session): Extension<Arc<Session>>,
) -> Result<Json<Vec<JobEntry>>> {
    let board = state.board.read_txn().await;
    let jobs = SavedSelector::new(&board, &session.session_id)
        .get_jobs()
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(jobs))
}

pub async fn toggle(
    State(state): State<AppState>,
    Extension(session): Extension<Arc<Session>>,
    Path(job_id): Path<String>,
) -> Result<Json<SavedToggle>> {
    let mut board = state.board.begin_txn().await;
    let saved = SavedMutator::new(&mut board, &session.session_id).toggle(&job_id)?;
    Ok(Json(SavedToggle { job_id, saved }))
}
