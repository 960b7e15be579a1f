use chrono::Utc;

use crate::conf::DeletePolicy;
use crate::pkg::internal::adaptors::jobs::spec::{JobEntry, NewJob};
use crate::pkg::internal::board::Board;
use crate::pkg::internal::error::{require, BoardError, BoardResult};

pub const JUST_POSTED: &str = "Just now";

pub struct JobMutator<'a> {
    board: &'a mut Board,
}

impl<'a> JobMutator<'a> {
    pub fn new(board: &'a mut Board) -> Self {
        JobMutator { board }
    }

    pub fn create(&mut self, job: NewJob) -> BoardResult<JobEntry> {
        require("title", &job.title)?;
        require("company", &job.company)?;
        require("location", &job.location)?;
        require("description", &job.description)?;

        let id = self.board.next_id();
        if self.board.contains_job(&id) {
            return Err(BoardError::Conflict(id));
        }
        let posted_date = Utc::now().format("%b %-d, %Y").to_string();
        let entry = job.into_entry(id, JUST_POSTED, Some(posted_date));
        self.board.jobs.insert(0, entry.clone());
        tracing::info!("posted job {} ({} at {})", &entry.id, &entry.title, &entry.company);
        Ok(entry)
    }

    pub fn delete(&mut self, id: &str) -> BoardResult<JobEntry> {
        let idx = self
            .board
            .jobs
            .iter()
            .position(|job| job.id == id)
            .ok_or_else(|| BoardError::JobNotFound(id.to_string()))?;
        let removed = self.board.jobs.remove(idx);
        if self.board.policy() == DeletePolicy::Cascade {
            let mut dropped = 0;
            for seeker in self.board.seekers.values_mut() {
                seeker.saved.retain(|saved| saved != id);
                let before = seeker.applications.len();
                seeker.applications.retain(|app| app.job_id != id);
                dropped += before - seeker.applications.len();
            }
            tracing::debug!("cascaded delete of job {}, dropped {} applications", id, dropped);
        }
        tracing::info!("deleted job {}", id);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::pkg::internal::adaptors::applications::mutators::ApplicationMutator;
    use crate::pkg::internal::adaptors::jobs::selectors::JobSelector;
    use crate::pkg::internal::adaptors::saved::mutators::SavedMutator;
    use crate::pkg::internal::ids::SequentialIds;
    use crate::pkg::internal::seed::mock_jobs;

    fn board(policy: DeletePolicy) -> Board {
        Board::with_jobs(mock_jobs(), Arc::new(SequentialIds::starting_at(100)), policy)
    }

    fn new_job() -> NewJob {
        NewJob {
            title: "Rust Engineer".into(),
            company: "Ferris Labs".into(),
            location: "Remote".into(),
            salary: "Competitive".into(),
            job_type: "Contract".into(),
            description: "Build services".into(),
            ..NewJob::default()
        }
    }

    #[test]
    fn test_create_prepends_with_fresh_id() {
        let mut board = board(DeletePolicy::Orphan);
        let job = JobMutator::new(&mut board).create(new_job()).unwrap();
        assert_eq!(job.id, "100");
        assert_eq!(job.posted_at, JUST_POSTED);
        assert!(job.posted_date.is_some());
        let all = JobSelector::new(&board).get_all();
        assert_eq!(all[0].id, "100");
        assert_eq!(all.len(), 9);
    }

    #[test]
    fn test_create_then_delete_restores_set() {
        let mut board = board(DeletePolicy::Orphan);
        let before = JobSelector::new(&board).get_all().to_vec();
        let job = JobMutator::new(&mut board).create(new_job()).unwrap();
        let removed = JobMutator::new(&mut board).delete(&job.id).unwrap();
        assert_eq!(removed, job);
        assert_eq!(JobSelector::new(&board).get_all(), before.as_slice());
    }

    #[test]
    fn test_create_rejects_blank_required_fields() {
        let mut board = board(DeletePolicy::Orphan);
        let job = NewJob {
            company: "  ".into(),
            ..new_job()
        };
        let err = JobMutator::new(&mut board).create(job).unwrap_err();
        assert!(matches!(err, BoardError::ValidationFailed(_)));
        assert_eq!(JobSelector::new(&board).get_all().len(), 8);
    }

    #[test]
    fn test_create_rejects_colliding_id() {
        let mut board = Board::with_jobs(
            mock_jobs(),
            Arc::new(SequentialIds::starting_at(8)),
            DeletePolicy::Orphan,
        );
        let err = JobMutator::new(&mut board).create(new_job()).unwrap_err();
        assert_eq!(err, BoardError::Conflict("8".into()));
    }

    #[test]
    fn test_delete_unknown_is_not_found() {
        let mut board = board(DeletePolicy::Orphan);
        let err = JobMutator::new(&mut board).delete("nope").unwrap_err();
        assert_eq!(err, BoardError::JobNotFound("nope".into()));
        assert_eq!(JobSelector::new(&board).get_all().len(), 8);
    }

    #[test]
    fn test_orphan_policy_keeps_references() {
        let mut board = board(DeletePolicy::Orphan);
        SavedMutator::new(&mut board, "s1").toggle("3").unwrap();
        ApplicationMutator::new(&mut board, "s1")
            .create("3", "hello", None)
            .unwrap();
        JobMutator::new(&mut board).delete("3").unwrap();
        let seeker = board.seeker("s1").unwrap();
        assert_eq!(seeker.saved, vec!["3".to_string()]);
        assert_eq!(seeker.applications.len(), 1);
        assert_eq!(seeker.applications[0].job_title, "UX/UI Designer");
    }

    #[test]
    fn test_cascade_policy_drops_references() {
        let mut board = board(DeletePolicy::Cascade);
        for session in ["s1", "s2"] {
            SavedMutator::new(&mut board, session).toggle("3").unwrap();
            SavedMutator::new(&mut board, session).toggle("4").unwrap();
            ApplicationMutator::new(&mut board, session)
                .create("3", "hello", None)
                .unwrap();
        }
        JobMutator::new(&mut board).delete("3").unwrap();
        for session in ["s1", "s2"] {
            let seeker = board.seeker(session).unwrap();
            assert_eq!(seeker.saved, vec!["4".to_string()]);
            assert!(seeker.applications.is_empty());
        }
    }
}
