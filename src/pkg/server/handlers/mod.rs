pub mod applications;
pub mod dashboard;
pub mod jobs;
pub mod probes;
pub mod saved;
pub mod sitemap;
