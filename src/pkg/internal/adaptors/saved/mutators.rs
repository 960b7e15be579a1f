use crate::pkg::internal::board::Board;
use crate::pkg::internal::error::{BoardError, BoardResult};

pub struct SavedMutator<'a> {
    board: &'a mut Board,
    session: &'a str,
}

impl<'a> SavedMutator<'a> {
    pub fn new(board: &'a mut Board, session: &'a str) -> Self {
        SavedMutator { board, session }
    }

    /// Flips membership of `job_id` and returns whether it is now saved.
    /// Unsaving an id whose job was deleted is allowed; saving one is not.
    pub fn toggle(&mut self, job_id: &str) -> BoardResult<bool> {
        let saved_at = self
            .board
            .seeker(self.session)
            .and_then(|seeker| seeker.saved.iter().position(|id| id == job_id));
        if let Some(idx) = saved_at {
            self.board.seeker_mut(self.session).saved.remove(idx);
            tracing::debug!("session {} unsaved job {}", self.session, job_id);
            return Ok(false);
        }
        if !self.board.contains_job(job_id) {
            return Err(BoardError::JobNotFound(job_id.to_string()));
        }
        self.board
            .seeker_mut(self.session)
            .saved
            .push(job_id.to_string());
        tracing::debug!("session {} saved job {}", self.session, job_id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::conf::DeletePolicy;
    use crate::pkg::internal::adaptors::saved::selectors::SavedSelector;
    use crate::pkg::internal::ids::RandomIds;
    use crate::pkg::internal::seed::mock_jobs;

    fn board() -> Board {
        Board::with_jobs(mock_jobs(), Arc::new(RandomIds), DeletePolicy::Orphan)
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut board = board();
        SavedMutator::new(&mut board, "s").toggle("2").unwrap();
        let before = SavedSelector::new(&board, "s").get_ids().to_vec();

        assert!(SavedMutator::new(&mut board, "s").toggle("5").unwrap());
        assert!(SavedSelector::new(&board, "s").get_ids().contains(&"5".to_string()));
        assert!(!SavedMutator::new(&mut board, "s").toggle("5").unwrap());
        assert_eq!(SavedSelector::new(&board, "s").get_ids(), before.as_slice());
    }

    #[test]
    fn test_saving_unknown_job_fails() {
        let mut board = board();
        let err = SavedMutator::new(&mut board, "s").toggle("missing").unwrap_err();
        assert_eq!(err, BoardError::JobNotFound("missing".into()));
        assert!(SavedSelector::new(&board, "s").get_ids().is_empty());
        assert!(board.seeker("s").is_none());
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut board = board();
        SavedMutator::new(&mut board, "a").toggle("1").unwrap();
        assert_eq!(SavedSelector::new(&board, "a").get_ids(), ["1".to_string()]);
        assert!(SavedSelector::new(&board, "b").get_ids().is_empty());
    }
}
