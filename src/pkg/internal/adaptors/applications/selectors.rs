use crate::pkg::internal::adaptors::applications::spec::{ApplicationEntry, ApplicationStatus};
use crate::pkg::internal::board::Board;
use crate::pkg::internal::error::{BoardError, BoardResult};

pub struct ApplicationSelector<'a> {
    board: &'a Board,
    session: &'a str,
}

impl<'a> ApplicationSelector<'a> {
    pub fn new(board: &'a Board, session: &'a str) -> Self {
        ApplicationSelector { board, session }
    }

    /// In submission order.
    pub fn get_all(&self) -> &'a [ApplicationEntry] {
        self.board
            .seeker(self.session)
            .map(|seeker| seeker.applications.as_slice())
            .unwrap_or_default()
    }

    pub fn get_by_id(&self, id: &str) -> BoardResult<&'a ApplicationEntry> {
        self.get_all()
            .iter()
            .find(|app| app.id == id)
            .ok_or_else(|| BoardError::ApplicationNotFound(id.to_string()))
    }

    pub fn count_by_status(&self, status: ApplicationStatus) -> usize {
        self.get_all().iter().filter(|app| app.status == status).count()
    }
}

/// Number of applications across every session.
pub fn count_all(board: &Board) -> usize {
    board.seekers.values().map(|s| s.applications.len()).sum()
}
