use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    conf::{settings, Settings},
    pkg::internal::board::Board,
};

/// Scoped access to the board: a write guard for mutators, a read guard for
/// selectors. Each handler holds one guard for the whole operation.
#[async_trait::async_trait]
pub trait GetTxn {
    async fn begin_txn<'a>(&'a self) -> RwLockWriteGuard<'a, Board>;
    async fn read_txn<'a>(&'a self) -> RwLockReadGuard<'a, Board>;
}

#[async_trait::async_trait]
impl GetTxn for Arc<RwLock<Board>> {
    async fn begin_txn<'a>(&'a self) -> RwLockWriteGuard<'a, Board> {
        self.write().await
    }

    async fn read_txn<'a>(&'a self) -> RwLockReadGuard<'a, Board> {
        self.read().await
    }
}

#[derive(Clone)]
pub struct AppState {
    pub board: Arc<RwLock<Board>>,
    pub base_url: Arc<str>,
}

impl AppState {
    pub fn new() -> Self {
        AppState::from_settings(&settings)
    }

    pub fn from_settings(s: &Settings) -> Self {
        AppState::with_board(Board::from_settings(s), &s.base_url)
    }

    pub fn with_board(board: Board, base_url: &str) -> Self {
        AppState {
            board: Arc::new(RwLock::new(board)),
            base_url: base_url.into(),
        }
    }
}
