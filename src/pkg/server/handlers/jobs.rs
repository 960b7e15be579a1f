use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    pkg::{
        internal::{
            adaptors::jobs::{
                mutators::JobMutator,
                selectors::JobSelector,
                spec::{JobEntry, NewJob},
            },
            error::BoardError,
            filter::JobFilter,
        },
        server::state::{AppState, GetTxn},
    },
    prelude::Result,
};

const DEFAULT_JOB_TYPE: &str = "Full-time";
const UNDISCLOSED_SALARY: &str = "Competitive";

/// Either a JSON list or the post-job form's one-item-per-line text.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum Lines {
    List(Vec<String>),
    Text(String),
}

impl Lines {
    fn into_items(self) -> Vec<String> {
        let items = match self {
            Lines::List(items) => items,
            Lines::Text(text) => text.lines().map(String::from).collect(),
        };
        items
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    }
}

fn default_job_type() -> String {
    DEFAULT_JOB_TYPE.into()
}

#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobInput {
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub company: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub location: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub description: String,
    #[serde(rename = "type", default = "default_job_type")]
    pub job_type: String,
    pub salary: Option<String>,
    pub salary_min: Option<String>,
    pub salary_max: Option<String>,
    pub requirements: Option<Lines>,
    pub benefits: Option<Lines>,
    pub responsibilities: Option<Lines>,
    pub experience: Option<String>,
    pub status: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<CreateJobInput> for NewJob {
    fn from(input: CreateJobInput) -> Self {
        let salary = match (
            non_blank(input.salary),
            non_blank(input.salary_min),
            non_blank(input.salary_max),
        ) {
            (Some(salary), _, _) => salary,
            (None, Some(min), Some(max)) => format!("${} - ${}", min, max),
            _ => UNDISCLOSED_SALARY.into(),
        };
        let job_type = non_blank(Some(input.job_type)).unwrap_or_else(default_job_type);
        NewJob {
            title: input.title,
            company: input.company,
            location: input.location,
            salary,
            job_type,
            description: input.description,
            requirements: input.requirements.map(Lines::into_items),
            benefits: input.benefits.map(Lines::into_items),
            responsibilities: input.responsibilities.map(Lines::into_items),
            experience: non_blank(input.experience),
            status: non_blank(input.status),
        }
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<JobFilter>,
) -> Result<Json<Vec<JobEntry>>> {
    let board = state.board.read_txn().await;
    let jobs = JobSelector::new(&board)
        .search(&filter)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(jobs))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateJobInput>,
) -> Result<(StatusCode, Json<JobEntry>)> {
    input
        .validate()
        .map_err(|e| BoardError::ValidationFailed(e.to_string()))?;
    let mut board = state.board.begin_txn().await;
    let job = JobMutator::new(&mut board).create(input.into())?;
    Ok((StatusCode::CREATED, Json(job)))
}

pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobEntry>> {
    let board = state.board.read_txn().await;
    let job = JobSelector::new(&board).get_by_id(&id)?.clone();
    Ok(Json(job))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobEntry>> {
    let mut board = state.board.begin_txn().await;
    let job = JobMutator::new(&mut board).delete(&id)?;
    Ok(Json(job))
}
