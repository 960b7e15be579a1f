pub mod adaptors;
pub mod board;
pub mod error;
pub mod filter;
pub mod ids;
pub mod seed;
pub mod sitemap;
pub mod stats;
