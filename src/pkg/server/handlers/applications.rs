use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    pkg::{
        internal::{
            adaptors::applications::{
                mutators::ApplicationMutator, selectors::ApplicationSelector,
                spec::ApplicationEntry,
            },
            error::BoardError,
        },
        server::{
            middlewares::session::Session,
            state::{AppState, GetTxn},
        },
    },
    prelude::Result,
};

#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApplyInput {
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub job_id: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub cover_letter: String,
    pub resume: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Extension(session): Extension<Arc<Session>>,
) -> Result<Json<Vec<ApplicationEntry>>> {
    let board = state.board.read_txn().await;
    let applications = ApplicationSelector::new(&board, &session.session_id)
        .get_all()
        .to_vec();
    Ok(Json(applications))
}

pub async fn retrieve(
    State(state): State<AppState>,
    Extension(session): Extension<Arc<Session>>,
    Path(id): Path<String>,
) -> Result<Json<ApplicationEntry>> {
    let board = state.board.read_txn().await;
    let application = ApplicationSelector::new(&board, &session.session_id)
        .get_by_id(&id)?
        .clone();
    Ok(Json(application))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(session): Extension<Arc<Session>>,
    Json(input): Json<ApplyInput>,
) -> Result<(StatusCode, Json<ApplicationEntry>)> {
    input
        .validate()
        .map_err(|e| BoardError::ValidationFailed(e.to_string()))?;
    let mut board = state.board.begin_txn().await;
    let application = ApplicationMutator::new(&mut board, &session.session_id).create(
        &input.job_id,
        &input.cover_letter,
        input.resume,
    )?;
    Ok((StatusCode::CREATED, Json(application)))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(session): Extension<Arc<Session>>,
    Path(id): Path<String>,
) -> Result<Json<ApplicationEntry>> {
    let mut board = state.board.begin_txn().await;
    let application = ApplicationMutator::new(&mut board, &session.session_id).delete(&id)?;
    Ok(Json(application))
}
