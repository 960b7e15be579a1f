use chrono::Utc;

use crate::pkg::internal::adaptors::applications::spec::{ApplicationEntry, ApplicationStatus};
use crate::pkg::internal::adaptors::jobs::selectors::JobSelector;
use crate::pkg::internal::board::Board;
use crate::pkg::internal::error::{require, BoardError, BoardResult};

pub struct ApplicationMutator<'a> {
    board: &'a mut Board,
    session: &'a str,
}

impl<'a> ApplicationMutator<'a> {
    pub fn new(board: &'a mut Board, session: &'a str) -> Self {
        ApplicationMutator { board, session }
    }

    /// Applications always start out pending; nothing here moves them on.
    pub fn create(
        &mut self,
        job_id: &str,
        cover_letter: &str,
        resume: Option<String>,
    ) -> BoardResult<ApplicationEntry> {
        require("cover letter", cover_letter)?;
        let job = JobSelector::new(self.board).get_by_id(job_id)?;
        let application = ApplicationEntry {
            id: self.board.next_id(),
            job_id: job.id.clone(),
            job_title: job.title.clone(),
            company: job.company.clone(),
            status: ApplicationStatus::Pending,
            applied_date: Utc::now(),
            cover_letter: Some(cover_letter.to_string()),
            resume,
        };
        self.board
            .seeker_mut(self.session)
            .applications
            .push(application.clone());
        tracing::info!(
            "session {} applied to job {} ({})",
            self.session,
            &application.job_id,
            &application.id
        );
        Ok(application)
    }

    pub fn delete(&mut self, id: &str) -> BoardResult<ApplicationEntry> {
        let not_found = || BoardError::ApplicationNotFound(id.to_string());
        let seeker = self.board.seekers.get_mut(self.session).ok_or_else(not_found)?;
        let idx = seeker
            .applications
            .iter()
            .position(|app| app.id == id)
            .ok_or_else(not_found)?;
        let removed = seeker.applications.remove(idx);
        tracing::info!("session {} withdrew application {}", self.session, id);
        Ok(removed)
    }
}
