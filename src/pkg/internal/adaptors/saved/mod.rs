pub mod mutators;
pub mod selectors;
