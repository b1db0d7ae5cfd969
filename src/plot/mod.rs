pub mod config;
pub mod diagram;
