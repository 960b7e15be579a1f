use std::{collections::HashMap, sync::Arc};

use crate::{
    conf::{DeletePolicy, Settings},
    pkg::internal::{
        adaptors::{applications::spec::ApplicationEntry, jobs::spec::JobEntry},
        ids::{self, IdGenerator},
        seed,
    },
};

/// Saved ids and submitted applications of one seeker session.
#[derive(Debug, Default, Clone)]
pub struct SeekerState {
    pub saved: Vec<String>,
    pub applications: Vec<ApplicationEntry>,
}

/// The in-memory job store. Jobs are kept newest first; seeker state is
/// keyed by session id.
pub struct Board {
    pub(crate) jobs: Vec<JobEntry>,
    pub(crate) seekers: HashMap<String, SeekerState>,
    ids: Arc<dyn IdGenerator>,
    policy: DeletePolicy,
}

impl Board {
    pub fn with_jobs(jobs: Vec<JobEntry>, ids: Arc<dyn IdGenerator>, policy: DeletePolicy) -> Self {
        Board {
            jobs,
            seekers: HashMap::new(),
            ids,
            policy,
        }
    }

    pub fn from_settings(s: &Settings) -> Self {
        let jobs = if s.seed_jobs { seed::mock_jobs() } else { vec![] };
        let first = jobs
            .iter()
            .filter_map(|job| job.id.parse::<u64>().ok())
            .max()
            .map_or(1, |highest| highest + 1);
        tracing::info!(
            "board ready with {} jobs, ids: {:?}, delete policy: {:?}",
            jobs.len(),
            s.id_strategy,
            s.job_delete_policy
        );
        Board::with_jobs(jobs, ids::from_strategy(s.id_strategy, first), s.job_delete_policy)
    }

    pub fn next_id(&self) -> String {
        self.ids.next_id()
    }

    pub fn policy(&self) -> DeletePolicy {
        self.policy
    }

    pub fn contains_job(&self, id: &str) -> bool {
        self.jobs.iter().any(|job| job.id == id)
    }

    pub(crate) fn seeker(&self, session: &str) -> Option<&SeekerState> {
        self.seekers.get(session)
    }

    pub(crate) fn seeker_mut(&mut self, session: &str) -> &mut SeekerState {
        self.seekers.entry(session.to_string()).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::IdStrategy;

    #[test]
    fn test_sequential_ids_start_after_seed() {
        let s = Settings {
            id_strategy: IdStrategy::Sequential,
            ..Settings::default()
        };
        let board = Board::from_settings(&s);
        assert_eq!(board.jobs.len(), seed::mock_jobs().len());
        let id = board.next_id();
        assert!(!board.contains_job(&id));
        assert_eq!(id, "9");
    }

    #[test]
    fn test_unseeded_board_is_empty() {
        let s = Settings {
            seed_jobs: false,
            ..Settings::default()
        };
        let board = Board::from_settings(&s);
        assert!(board.jobs.is_empty());
        assert!(board.seeker("nobody").is_none());
    }
}
