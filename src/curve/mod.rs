pub mod fit;
pub mod ribbon;
