use std::path::Path;

use chrono::Utc;
use standard_error::{Interpolate, StandardError};

use crate::{
    conf::settings,
    pkg::internal::{adaptors::jobs::selectors::JobSelector, board::Board, sitemap},
    prelude::Result,
};

pub async fn write(out: &Path) -> Result<()> {
    let board = Board::from_settings(&settings);
    let jobs = JobSelector::new(&board).get_all();
    let xml = sitemap::build(
        &settings.base_url,
        jobs.iter().map(|job| job.id.as_str()),
        Utc::now().date_naive(),
    );
    if let Some(dir) = out.parent().filter(|d| !d.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| StandardError::new("ERR-SITEMAP-001").interpolate_err(e.to_string()))?;
    }
    tokio::fs::write(out, xml)
        .await
        .map_err(|e| StandardError::new("ERR-SITEMAP-001").interpolate_err(e.to_string()))?;
    tracing::info!("wrote sitemap with {} job urls to {}", jobs.len(), out.display());
    Ok(())
}
