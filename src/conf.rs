use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    Random,
    Sequential,
    Uuid,
}

/// What a job deletion does to saved ids and applications pointing at it.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeletePolicy {
    Orphan,
    Cascade,
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Settings {
    pub service_name: String,
    pub base_url: String,
    pub listen_port: String,
    pub seed_jobs: bool,
    pub id_strategy: IdStrategy,
    pub job_delete_policy: DeletePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            service_name: "jobboard".into(),
            base_url: "http://localhost:3000".into(),
            listen_port: "3000".into(),
            seed_jobs: true,
            id_strategy: IdStrategy::Random,
            job_delete_policy: DeletePolicy::Orphan,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .add_source(Environment::default().try_parsing(true))
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        s.base_url = s.base_url.trim_end_matches('/').to_string();
        Ok(s)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
