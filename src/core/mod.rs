pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod loader;
pub mod logic;
