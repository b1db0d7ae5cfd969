pub mod aggregator;
pub mod flows;
