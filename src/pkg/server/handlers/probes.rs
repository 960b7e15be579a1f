use axum::extract::State;

use crate::{
    pkg::server::state::{AppState, GetTxn},
    prelude::Result,
};

pub async fn livez() -> Result<()> {
    tracing::debug!("service is live");
    Ok(())
}

pub async fn healthz(State(state): State<AppState>) -> Result<()> {
    let board = state.board.read_txn().await;
    tracing::debug!("service is healthy, {} jobs on the board", board.jobs.len());
    Ok(())
}
