pub mod datum;
pub mod frame;
pub mod group;
