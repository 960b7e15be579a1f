use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobEntry {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub posted_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicants: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A posting as submitted by an employer; the store assigns the id and
/// posting labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub job_type: String,
    pub description: String,
    pub requirements: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
    pub responsibilities: Option<Vec<String>>,
    pub experience: Option<String>,
    pub status: Option<String>,
}

impl NewJob {
    pub fn into_entry(self, id: String, posted_at: &str, posted_date: Option<String>) -> JobEntry {
        JobEntry {
            id,
            title: self.title,
            company: self.company,
            location: self.location,
            salary: self.salary,
            job_type: self.job_type,
            posted_at: posted_at.to_string(),
            posted_date,
            description: self.description,
            requirements: self.requirements,
            benefits: self.benefits,
            responsibilities: self.responsibilities,
            experience: self.experience,
            applicants: None,
            views: None,
            status: self.status,
        }
    }
}
