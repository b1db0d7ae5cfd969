pub mod hsl;
pub mod strategy;
