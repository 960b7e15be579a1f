use std::collections::BTreeMap;

use serde::Serialize;

use crate::pkg::internal::adaptors::{
    applications::{
        selectors::{count_all, ApplicationSelector},
        spec::ApplicationStatus,
    },
    jobs::spec::JobEntry,
    saved::selectors::SavedSelector,
};
use crate::pkg::internal::board::Board;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeekerDashboard {
    pub applications: usize,
    pub by_status: BTreeMap<ApplicationStatus, usize>,
    pub saved: usize,
    pub saved_jobs: Vec<JobEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerDashboard {
    pub total_jobs: usize,
    pub active_jobs: usize,
    pub total_applications: usize,
    pub total_views: u64,
}

impl SeekerDashboard {
    pub fn collect(board: &Board, session: &str) -> Self {
        let applications = ApplicationSelector::new(board, session);
        let saved = SavedSelector::new(board, session);
        SeekerDashboard {
            applications: applications.get_all().len(),
            by_status: ApplicationStatus::ALL
                .iter()
                .map(|status| (*status, applications.count_by_status(*status)))
                .collect(),
            saved: saved.get_ids().len(),
            saved_jobs: saved.get_jobs().into_iter().cloned().collect(),
        }
    }
}

impl EmployerDashboard {
    pub fn collect(board: &Board) -> Self {
        let jobs = &board.jobs;
        EmployerDashboard {
            total_jobs: jobs.len(),
            // postings without a status are live until someone closes them
            active_jobs: jobs
                .iter()
                .filter(|job| {
                    job.status
                        .as_deref()
                        .map_or(true, |s| s.eq_ignore_ascii_case("active"))
                })
                .count(),
            total_applications: count_all(board),
            total_views: jobs.iter().map(|job| job.views.unwrap_or(0) as u64).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::conf::DeletePolicy;
    use crate::pkg::internal::adaptors::applications::mutators::ApplicationMutator;
    use crate::pkg::internal::adaptors::saved::mutators::SavedMutator;
    use crate::pkg::internal::ids::UuidIds;
    use crate::pkg::internal::seed::mock_jobs;

    fn board() -> Board {
        Board::with_jobs(mock_jobs(), Arc::new(UuidIds), DeletePolicy::Orphan)
    }

    #[test]
    fn test_seeker_dashboard() {
        let mut board = board();
        SavedMutator::new(&mut board, "s").toggle("8").unwrap();
        ApplicationMutator::new(&mut board, "s")
            .create("8", "hire me", None)
            .unwrap();
        let dash = SeekerDashboard::collect(&board, "s");
        assert_eq!(dash.applications, 1);
        assert_eq!(dash.by_status[&ApplicationStatus::Pending], 1);
        assert_eq!(dash.by_status[&ApplicationStatus::Interview], 0);
        assert_eq!(dash.saved, 1);
        assert_eq!(dash.saved_jobs[0].title, "Sales Director");

        let empty = SeekerDashboard::collect(&board, "new");
        assert_eq!(empty.applications, 0);
        assert_eq!(empty.by_status.len(), 5);
    }

    #[test]
    fn test_employer_dashboard() {
        let mut board = board();
        ApplicationMutator::new(&mut board, "a")
            .create("1", "x", None)
            .unwrap();
        ApplicationMutator::new(&mut board, "b")
            .create("2", "y", None)
            .unwrap();
        let dash = EmployerDashboard::collect(&board);
        assert_eq!(dash.total_jobs, 8);
        assert_eq!(dash.active_jobs, 8);
        assert_eq!(dash.total_applications, 2);
        assert_eq!(dash.total_views, 156 + 203 + 178 + 189 + 142 + 165 + 201 + 98);
    }
}
