use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::pkg::internal::board::Board;

pub struct SavedSelector<'a> {
    board: &'a Board,
    session: &'a str,
}

impl<'a> SavedSelector<'a> {
    pub fn new(board: &'a Board, session: &'a str) -> Self {
        SavedSelector { board, session }
    }

    pub fn get_ids(&self) -> &'a [String] {
        self.board
            .seeker(self.session)
            .map(|seeker| seeker.saved.as_slice())
            .unwrap_or_default()
    }

    /// Saved jobs in board order. Ids whose job has been deleted are skipped.
    pub fn get_jobs(&self) -> Vec<&'a JobEntry> {
        let ids = self.get_ids();
        self.board
            .jobs
            .iter()
            .filter(|job| ids.contains(&job.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::conf::DeletePolicy;
    use crate::pkg::internal::adaptors::jobs::mutators::JobMutator;
    use crate::pkg::internal::adaptors::saved::mutators::SavedMutator;
    use crate::pkg::internal::ids::RandomIds;
    use crate::pkg::internal::seed::mock_jobs;

    #[test]
    fn test_get_jobs_skips_orphans() {
        let mut board = Board::with_jobs(mock_jobs(), Arc::new(RandomIds), DeletePolicy::Orphan);
        for id in ["6", "2", "4"] {
            SavedMutator::new(&mut board, "s").toggle(id).unwrap();
        }
        JobMutator::new(&mut board).delete("4").unwrap();

        let selector = SavedSelector::new(&board, "s");
        assert_eq!(selector.get_ids().len(), 3);
        let titles: Vec<&str> = selector.get_jobs().iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Product Manager", "Marketing Manager"]);
    }
}
