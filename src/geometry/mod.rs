pub mod cursor;
pub mod layout;
pub mod normalizer;
pub mod stratum;
