use serde::Deserialize;

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;

/// Job-type selector value that matches every type.
pub const ALL_TYPES: &str = "all";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JobFilter {
    pub q: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
}

impl Default for JobFilter {
    fn default() -> Self {
        JobFilter {
            q: String::new(),
            location: String::new(),
            job_type: ALL_TYPES.into(),
        }
    }
}

impl JobFilter {
    pub fn new(q: &str, location: &str, job_type: &str) -> Self {
        JobFilter {
            q: q.into(),
            location: location.into(),
            job_type: job_type.into(),
        }
    }
}

// lowercased once per filter pass instead of once per job
struct Needles {
    query: String,
    location: String,
    job_type: Option<String>,
}

impl From<&JobFilter> for Needles {
    fn from(filter: &JobFilter) -> Self {
        Needles {
            query: filter.q.to_lowercase(),
            location: filter.location.to_lowercase(),
            job_type: if filter.job_type.eq_ignore_ascii_case(ALL_TYPES) {
                None
            } else {
                Some(filter.job_type.to_lowercase())
            },
        }
    }
}

impl Needles {
    fn matches(&self, job: &JobEntry) -> bool {
        let matches_search = self.query.is_empty()
            || job.title.to_lowercase().contains(&self.query)
            || job.company.to_lowercase().contains(&self.query);
        let matches_location =
            self.location.is_empty() || job.location.to_lowercase().contains(&self.location);
        let matches_type = match &self.job_type {
            None => true,
            Some(t) => job.job_type.to_lowercase() == *t,
        };
        matches_search && matches_location && matches_type
    }
}

/// Stable filter: the result is a subsequence of `jobs` in the same order.
pub fn filter_jobs<'a>(jobs: &'a [JobEntry], filter: &JobFilter) -> Vec<&'a JobEntry> {
    let needles = Needles::from(filter);
    jobs.iter().filter(|job| needles.matches(job)).collect()
}
