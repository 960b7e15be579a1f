use std::sync::Arc;

use axum::{extract::State, Extension, Json};

use crate::{
    pkg::{
        internal::stats::{EmployerDashboard, SeekerDashboard},
        server::{
            middlewares::session::Session,
            state::{AppState, GetTxn},
        },
    },
    prelude::Result,
};

pub async fn seeker(
    State(state): State<AppState>,
    Extension(session): Extension<Arc<Session>>,
) -> Result<Json<SeekerDashboard>> {
    let board = state.board.read_txn().await;
    Ok(Json(SeekerDashboard::collect(&board, &session.session_id)))
}

pub async fn employer(State(state): State<AppState>) -> Result<Json<EmployerDashboard>> {
    let board = state.board.read_txn().await;
    Ok(Json(EmployerDashboard::collect(&board)))
}
