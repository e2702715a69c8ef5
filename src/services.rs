pub mod aggregator;
pub mod render;
