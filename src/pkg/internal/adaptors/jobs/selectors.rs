use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::pkg::internal::board::Board;
use crate::pkg::internal::error::{BoardError, BoardResult};
use crate::pkg::internal::filter::{filter_jobs, JobFilter};

pub struct JobSelector<'a> {
    board: &'a Board,
}

impl<'a> JobSelector<'a> {
    pub fn new(board: &'a Board) -> Self {
        JobSelector { board }
    }

    pub fn get_by_id(&self, id: &str) -> BoardResult<&'a JobEntry> {
        self.board
            .jobs
            .iter()
            .find(|job| job.id == id)
            .ok_or_else(|| BoardError::JobNotFound(id.to_string()))
    }

    /// Newest first.
    pub fn get_all(&self) -> &'a [JobEntry] {
        &self.board.jobs
    }

    pub fn search(&self, filter: &JobFilter) -> Vec<&'a JobEntry> {
        let found = filter_jobs(&self.board.jobs, filter);
        tracing::debug!("filter {:?} matched {} jobs", filter, found.len());
        found
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::conf::DeletePolicy;
    use crate::pkg::internal::ids::UuidIds;
    use crate::pkg::internal::seed::mock_jobs;

    #[test]
    fn test_get_by_id() {
        let board = Board::with_jobs(mock_jobs(), Arc::new(UuidIds), DeletePolicy::Orphan);
        let selector = JobSelector::new(&board);
        assert_eq!(selector.get_by_id("5").unwrap().title, "DevOps Engineer");
        assert_eq!(
            selector.get_by_id("42").unwrap_err(),
            BoardError::JobNotFound("42".into())
        );
    }

    #[test]
    fn test_search_delegates_to_filter() {
        let board = Board::with_jobs(mock_jobs(), Arc::new(UuidIds), DeletePolicy::Orphan);
        let found = JobSelector::new(&board).search(&JobFilter::new("engineer", "seattle", "all"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "5");
    }
}
